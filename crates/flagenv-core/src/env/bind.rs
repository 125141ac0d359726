//! Environment-to-flag binding pass.

use std::collections::BTreeSet;

use super::lookup::{EnvLookup, ProcessEnv};
use crate::error::BindError;
use crate::flags::FlagSource;

/// Environment variable name for a flag: `PREFIX_` followed by the flag name
/// uppercased with `-` replaced by `_`. The prefix is used as given.
///
/// `env_var_name("TEST", "a-hyphen")` → `"TEST_A_HYPHEN"`
pub fn env_var_name(prefix: &str, flag: &str) -> String {
    format!("{}_{}", prefix, flag.to_uppercase().replace('-', "_"))
}

/// What a binding pass did with one flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Binding {
    /// Already set on the command line; `shadowed` is a matching variable
    /// that was ignored.
    CommandLine { shadowed: Option<String> },
    /// No matching variable.
    Unset,
    /// Overridden from `key`.
    FromEnv { key: String, value: String },
}

/// Per-flag outcome of one binding pass, in iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindReport {
    pub bindings: Vec<(String, Binding)>,
}

impl BindReport {
    pub fn get(&self, flag: &str) -> Option<&Binding> {
        self.bindings
            .iter()
            .find(|(name, _)| name == flag)
            .map(|(_, binding)| binding)
    }

    /// `(flag, key, value)` for every flag taken from the environment.
    pub fn overridden(&self) -> impl Iterator<Item = (&str, &str, &str)> + '_ {
        self.bindings.iter().filter_map(|(name, binding)| match binding {
            Binding::FromEnv { key, value } => Some((name.as_str(), key.as_str(), value.as_str())),
            _ => None,
        })
    }

    /// `(flag, key)` for every variable ignored because the flag was set.
    pub fn shadowed(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.bindings.iter().filter_map(|(name, binding)| match binding {
            Binding::CommandLine {
                shadowed: Some(key),
            } => Some((name.as_str(), key.as_str())),
            _ => None,
        })
    }
}

/// Applies environment overrides to every flag not explicitly set.
///
/// Stops at the first value the flag rejects; flags overridden before that
/// keep their new values.
pub fn set_flags_from_env<F, E>(
    prefix: &str,
    flags: &mut F,
    env: &E,
) -> Result<BindReport, BindError>
where
    F: FlagSource + ?Sized,
    E: EnvLookup + ?Sized,
{
    let mut report = BindReport::default();
    for name in flags.names() {
        let key = env_var_name(prefix, &name);
        let found = env.lookup(&key);

        let binding = if flags.is_set(&name) {
            Binding::CommandLine {
                shadowed: found.map(|_| key),
            }
        } else if let Some(value) = found {
            if let Err(source) = flags.set(&name, &value) {
                return Err(BindError::InvalidEnvValue {
                    flag: name,
                    key,
                    value,
                    source,
                });
            }
            Binding::FromEnv { key, value }
        } else {
            Binding::Unset
        };
        report.bindings.push((name, binding));
    }
    Ok(report)
}

/// `set_flags_from_env` against the real process environment.
pub fn set_flags_from_process_env<F>(prefix: &str, flags: &mut F) -> Result<BindReport, BindError>
where
    F: FlagSource + ?Sized,
{
    set_flags_from_env(prefix, flags, &ProcessEnv)
}

/// Variables starting with `PREFIX_` that match no registered flag, sorted.
pub fn unused_env_vars<F, E>(prefix: &str, flags: &F, env: &E) -> Vec<String>
where
    F: FlagSource + ?Sized,
    E: EnvLookup + ?Sized,
{
    let known: BTreeSet<String> = flags
        .names()
        .iter()
        .map(|name| env_var_name(prefix, name))
        .collect();
    let marker = format!("{}_", prefix);

    let mut unused: Vec<String> = env
        .keys()
        .into_iter()
        .filter(|key| key.starts_with(&marker) && !known.contains(key))
        .collect();
    unused.sort();
    unused
}
