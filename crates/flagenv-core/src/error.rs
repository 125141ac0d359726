//! Error types for flag values, flag sets and environment binding.

use std::num::ParseIntError;
use thiserror::Error;

/// A string could not be converted into a flag's value type.
#[derive(Debug, Error)]
pub enum ValueError {
    #[error("invalid integer {input:?}: {source}")]
    Int {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("invalid boolean {0:?}")]
    Bool(String),

    /// One comma-separated segment of a URL list is not a valid URL.
    #[error("invalid URL segment {segment:?}: {source}")]
    InvalidUrlSegment {
        segment: String,
        #[source]
        source: url::ParseError,
    },
}

/// Failure reported by a flag set.
#[derive(Debug, Error)]
pub enum FlagError {
    #[error("flag provided but not defined: -{0}")]
    Undefined(String),

    #[error("flag redefined: {0}")]
    Redefined(String),

    #[error("bad flag syntax: {0}")]
    BadSyntax(String),

    #[error("flag needs an argument: -{0}")]
    MissingArgument(String),

    #[error("invalid value {value:?} for flag -{name}: {source}")]
    InvalidValue {
        name: String,
        value: String,
        #[source]
        source: ValueError,
    },
}

/// Failure of a binding pass. The pass stops at the first one.
#[derive(Debug, Error)]
pub enum BindError {
    #[error("invalid value {value:?} for flag -{flag} from environment variable {key}")]
    InvalidEnvValue {
        flag: String,
        key: String,
        value: String,
        #[source]
        source: FlagError,
    },
}
