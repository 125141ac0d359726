pub mod config;
pub mod error;
pub mod logging;

pub mod env;
pub mod flags;
pub mod url_list;

pub use env::{env_var_name, set_flags_from_env, BindReport, Binding, EnvLookup};
pub use error::{BindError, FlagError, ValueError};
pub use flags::{FlagSet, FlagSource, FlagValue};
pub use url_list::{url_strs_from_flag, urls_from_flag, UrlList};
