use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FlagError, ValueError};
use crate::flags::{parse_bool, parse_int, FlagSet};
use crate::url_list::UrlList;

/// Value type of a declared flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagKind {
    #[default]
    String,
    Int,
    Bool,
    Urls,
}

/// One flag declared in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagSpec {
    pub name: String,
    #[serde(default)]
    pub kind: FlagKind,
    /// Default value in the flag's string form.
    #[serde(default)]
    pub default: String,
    #[serde(default)]
    pub usage: String,
}

impl FlagSpec {
    fn new(name: &str, kind: FlagKind, default: &str, usage: &str) -> Self {
        Self {
            name: name.to_string(),
            kind,
            default: default.to_string(),
            usage: usage.to_string(),
        }
    }

    fn invalid_default(&self, source: ValueError) -> FlagError {
        FlagError::InvalidValue {
            name: self.name.clone(),
            value: self.default.clone(),
            source,
        }
    }
}

/// Flag manifest loaded from `~/.config/flagenv/flags.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagManifest {
    /// Environment variable prefix, used verbatim.
    pub prefix: String,
    #[serde(default)]
    pub flags: Vec<FlagSpec>,
}

impl Default for FlagManifest {
    fn default() -> Self {
        Self {
            prefix: "FLAGENV".to_string(),
            flags: vec![
                FlagSpec::new("data-dir", FlagKind::String, "default.flagenv", "Path to the data directory."),
                FlagSpec::new(
                    "listen-urls",
                    FlagKind::Urls,
                    "http://127.0.0.1:2379",
                    "Comma-separated URLs to listen on.",
                ),
                FlagSpec::new("max-peers", FlagKind::Int, "16", "Maximum number of peers."),
                FlagSpec::new("debug", FlagKind::Bool, "false", "Enable debug output."),
            ],
        }
    }
}

impl FlagManifest {
    /// Registers every declared flag with its default value.
    pub fn register(&self, fs: &mut FlagSet) -> Result<(), FlagError> {
        for spec in &self.flags {
            match spec.kind {
                FlagKind::String => fs.string(&spec.name, &spec.default, &spec.usage)?,
                FlagKind::Int => {
                    let default = if spec.default.is_empty() {
                        0
                    } else {
                        parse_int(&spec.default).map_err(|source| {
                            spec.invalid_default(ValueError::Int {
                                input: spec.default.clone(),
                                source,
                            })
                        })?
                    };
                    fs.int(&spec.name, default, &spec.usage)?;
                }
                FlagKind::Bool => {
                    let default = if spec.default.is_empty() {
                        false
                    } else {
                        parse_bool(&spec.default).ok_or_else(|| {
                            spec.invalid_default(ValueError::Bool(spec.default.clone()))
                        })?
                    };
                    fs.bool(&spec.name, default, &spec.usage)?;
                }
                FlagKind::Urls => {
                    let list = UrlList::new(&spec.default)
                        .map_err(|source| spec.invalid_default(source))?;
                    fs.var(list, &spec.name, &spec.usage)?;
                }
            }
        }
        Ok(())
    }

    /// Builds a fresh flag set named after the prefix with every flag registered.
    pub fn flag_set(&self) -> Result<FlagSet, FlagError> {
        let mut fs = FlagSet::new(self.prefix.to_lowercase());
        self.register(&mut fs)?;
        Ok(fs)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("flagenv")?;
    Ok(xdg_dirs.place_config_file("flags.toml")?)
}

/// Load the manifest from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FlagManifest> {
    let path = config_path()?;
    if !path.exists() {
        let default_manifest = FlagManifest::default();
        let toml = toml::to_string_pretty(&default_manifest)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default flag manifest at {}", path.display());
        return Ok(default_manifest);
    }
    load_from(&path)
}

/// Load the manifest from an explicit path.
pub fn load_from(path: &Path) -> Result<FlagManifest> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading flag manifest {}", path.display()))?;
    let manifest: FlagManifest = toml::from_str(&data)
        .with_context(|| format!("parsing flag manifest {}", path.display()))?;
    tracing::debug!(
        "loaded {} flag(s) with prefix {} from {}",
        manifest.flags.len(),
        manifest.prefix,
        path.display()
    );
    Ok(manifest)
}
