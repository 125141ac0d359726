//! Named flag registry and command-line parsing.

use std::collections::{BTreeMap, BTreeSet};

use super::value::{BoolValue, FlagValue, IntValue, StringValue};
use crate::error::FlagError;

/// What the environment binder needs from a flag registry.
pub trait FlagSource {
    /// Every registered flag name, in a stable order.
    fn names(&self) -> Vec<String>;

    /// Whether a command-line argument (or an earlier `set`) targeted the flag.
    fn is_set(&self, name: &str) -> bool;

    /// Sets the flag from a string and marks it as explicitly set.
    fn set(&mut self, name: &str, value: &str) -> Result<(), FlagError>;
}

/// One registered flag.
#[derive(Debug)]
pub struct Flag {
    pub name: String,
    pub usage: String,
    /// String form of the value at registration time.
    pub default: String,
    value: Box<dyn FlagValue>,
}

impl Flag {
    pub fn value(&self) -> &dyn FlagValue {
        self.value.as_ref()
    }

    pub fn value_string(&self) -> String {
        self.value.to_string()
    }
}

/// A set of named flags plus the subset explicitly set so far.
#[derive(Debug, Default)]
pub struct FlagSet {
    name: String,
    formal: BTreeMap<String, Flag>,
    actual: BTreeSet<String>,
}

impl FlagSet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers a custom value under `name`. The value's current string form
    /// becomes the flag's default.
    pub fn var<V>(&mut self, value: V, name: &str, usage: &str) -> Result<(), FlagError>
    where
        V: FlagValue + 'static,
    {
        if self.formal.contains_key(name) {
            return Err(FlagError::Redefined(name.to_string()));
        }
        let flag = Flag {
            name: name.to_string(),
            usage: usage.to_string(),
            default: value.to_string(),
            value: Box::new(value),
        };
        self.formal.insert(name.to_string(), flag);
        Ok(())
    }

    pub fn string(&mut self, name: &str, default: &str, usage: &str) -> Result<(), FlagError> {
        self.var(StringValue(default.to_string()), name, usage)
    }

    pub fn int(&mut self, name: &str, default: i64, usage: &str) -> Result<(), FlagError> {
        self.var(IntValue(default), name, usage)
    }

    pub fn bool(&mut self, name: &str, default: bool, usage: &str) -> Result<(), FlagError> {
        self.var(BoolValue(default), name, usage)
    }

    /// Sets a flag from its string form and records it as explicitly set.
    /// On failure the flag keeps its previous value and state.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), FlagError> {
        let flag = self
            .formal
            .get_mut(name)
            .ok_or_else(|| FlagError::Undefined(name.to_string()))?;
        flag.value
            .set(value)
            .map_err(|source| FlagError::InvalidValue {
                name: name.to_string(),
                value: value.to_string(),
                source,
            })?;
        self.actual.insert(name.to_string());
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Option<&Flag> {
        self.formal.get(name)
    }

    pub fn value_string(&self, name: &str) -> Option<String> {
        self.lookup(name).map(Flag::value_string)
    }

    pub fn is_set(&self, name: &str) -> bool {
        self.actual.contains(name)
    }

    /// Typed access to a flag's value; `None` if missing or of another type.
    pub fn get<T: FlagValue + 'static>(&self, name: &str) -> Option<&T> {
        self.lookup(name)?.value.as_any().downcast_ref::<T>()
    }

    /// Visits every registered flag in name order.
    pub fn visit_all(&self, mut f: impl FnMut(&Flag)) {
        for flag in self.formal.values() {
            f(flag);
        }
    }

    /// Visits only the flags that have been explicitly set, in name order.
    pub fn visit(&self, mut f: impl FnMut(&Flag)) {
        for name in &self.actual {
            if let Some(flag) = self.formal.get(name) {
                f(flag);
            }
        }
    }

    /// Parses flag arguments (without the program name).
    ///
    /// Accepts `-name`, `--name`, `-name=value` and `-name value`; bool flags
    /// take no separate value. Parsing stops at `--` (consumed) or at the
    /// first non-flag argument; the remaining arguments are returned.
    pub fn parse<I, S>(&mut self, args: I) -> Result<Vec<String>, FlagError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args
            .into_iter()
            .map(|a| a.as_ref().to_string())
            .collect::<Vec<_>>()
            .into_iter();

        while let Some(arg) = args.next() {
            if arg.len() < 2 || !arg.starts_with('-') {
                let mut rest = vec![arg];
                rest.extend(args);
                return Ok(rest);
            }
            let stripped = arg.strip_prefix("--").unwrap_or(&arg[1..]);
            if stripped.is_empty() {
                // "--" terminates the flags.
                return Ok(args.collect());
            }
            if stripped.starts_with('-') || stripped.starts_with('=') {
                return Err(FlagError::BadSyntax(arg));
            }

            let (name, inline) = match stripped.split_once('=') {
                Some((n, v)) => (n, Some(v.to_string())),
                None => (stripped, None),
            };
            let is_bool = self
                .lookup(name)
                .ok_or_else(|| FlagError::Undefined(name.to_string()))?
                .value
                .is_bool_flag();

            let value = match inline {
                Some(v) => v,
                None if is_bool => "true".to_string(),
                None => args
                    .next()
                    .ok_or_else(|| FlagError::MissingArgument(name.to_string()))?,
            };
            self.set(name, &value)?;
        }
        Ok(Vec::new())
    }
}

impl FlagSource for FlagSet {
    fn names(&self) -> Vec<String> {
        self.formal.keys().cloned().collect()
    }

    fn is_set(&self, name: &str) -> bool {
        FlagSet::is_set(self, name)
    }

    fn set(&mut self, name: &str, value: &str) -> Result<(), FlagError> {
        FlagSet::set(self, name, value)
    }
}
