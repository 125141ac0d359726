//! Read-only access to an environment snapshot.

use std::collections::{BTreeMap, HashMap};

/// Key-value view of an environment.
pub trait EnvLookup {
    /// Exact, case-sensitive lookup.
    fn lookup(&self, key: &str) -> Option<String>;

    /// All variable names present.
    fn keys(&self) -> Vec<String>;
}

/// The real process environment. Values that are not valid UTF-8 are treated
/// as absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn lookup(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn keys(&self) -> Vec<String> {
        std::env::vars_os()
            .filter_map(|(k, _)| k.into_string().ok())
            .collect()
    }
}

impl EnvLookup for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }

    fn keys(&self) -> Vec<String> {
        HashMap::keys(self).cloned().collect()
    }
}

impl EnvLookup for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }

    fn keys(&self) -> Vec<String> {
        BTreeMap::keys(self).cloned().collect()
    }
}

impl<T: EnvLookup + ?Sized> EnvLookup for &T {
    fn lookup(&self, key: &str) -> Option<String> {
        (**self).lookup(key)
    }

    fn keys(&self) -> Vec<String> {
        (**self).keys()
    }
}
