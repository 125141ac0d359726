//! Comma-separated URL list usable as a flag value.
//!
//! Each segment is parsed with `url::Url::parse`. The raw segment text is kept
//! alongside the parsed value so `to_string()` returns exactly what was set
//! (`Url` serialization would add a trailing `/` to `http://host:port`).

use std::any::Any;
use std::fmt;
use std::str::FromStr;

use url::Url;

use crate::error::ValueError;
use crate::flags::{FlagSet, FlagValue};

/// Ordered list of URLs; `set` replaces the whole list or nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlList {
    raw: Vec<String>,
    urls: Vec<Url>,
}

impl UrlList {
    /// Builds a list from its initial (default) value, which must parse.
    pub fn new(initial: &str) -> Result<Self, ValueError> {
        let mut list = Self::default();
        list.set(initial)?;
        Ok(list)
    }

    /// Replaces the held URLs with the comma-separated URLs in `input`.
    /// Empty segments are skipped. If any segment fails to parse, the list is
    /// left as it was.
    pub fn set(&mut self, input: &str) -> Result<(), ValueError> {
        let mut raw = Vec::new();
        let mut urls = Vec::new();
        for segment in input.split(',').filter(|s| !s.is_empty()) {
            let url = Url::parse(segment).map_err(|source| ValueError::InvalidUrlSegment {
                segment: segment.to_string(),
                source,
            })?;
            raw.push(segment.to_string());
            urls.push(url);
        }
        self.raw = raw;
        self.urls = urls;
        Ok(())
    }

    pub fn urls(&self) -> &[Url] {
        &self.urls
    }

    /// The URLs as originally written.
    pub fn strings(&self) -> Vec<String> {
        self.raw.clone()
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

impl fmt::Display for UrlList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw.join(","))
    }
}

impl FromStr for UrlList {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl FlagValue for UrlList {
    fn set(&mut self, input: &str) -> Result<(), ValueError> {
        UrlList::set(self, input)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// URL strings held by the `UrlList` flag `name`.
///
/// Returns an empty list when the flag does not exist or is not a `UrlList`.
pub fn url_strs_from_flag(flags: &FlagSet, name: &str) -> Vec<String> {
    flags
        .get::<UrlList>(name)
        .map(UrlList::strings)
        .unwrap_or_default()
}

/// Parsed URLs held by the `UrlList` flag `name`.
pub fn urls_from_flag(flags: &FlagSet, name: &str) -> Vec<Url> {
    flags
        .get::<UrlList>(name)
        .map(|list| list.urls().to_vec())
        .unwrap_or_default()
}
