//! Shared bootstrap: manifest → flag set → command-line args → environment.

use anyhow::{Context, Result};
use flagenv_core::config::{self, FlagManifest};
use flagenv_core::env::{set_flags_from_env, unused_env_vars, BindReport, EnvLookup};
use flagenv_core::FlagSet;
use std::path::Path;

/// Flags after command-line parsing and environment binding.
#[derive(Debug)]
pub struct Resolved {
    pub flags: FlagSet,
    pub report: BindReport,
    /// Arguments left after the flags.
    pub rest: Vec<String>,
}

/// Loads the manifest from `path` (or the default location) and applies a
/// prefix override.
pub fn load_manifest(path: Option<&Path>, prefix: Option<&str>) -> Result<FlagManifest> {
    let mut manifest = match path {
        Some(p) => config::load_from(p)?,
        None => config::load_or_init()?,
    };
    if let Some(prefix) = prefix {
        manifest.prefix = prefix.to_string();
    }
    Ok(manifest)
}

/// Registers the manifest's flags, parses `args`, then binds `env`.
pub fn resolve<E: EnvLookup + ?Sized>(
    manifest: &FlagManifest,
    args: &[String],
    env: &E,
) -> Result<Resolved> {
    let mut flags = manifest
        .flag_set()
        .context("registering flags from manifest")?;
    let rest = flags.parse(args).context("parsing flag arguments")?;
    let report = set_flags_from_env(&manifest.prefix, &mut flags, env)?;

    for (flag, key, value) in report.overridden() {
        tracing::debug!("flag {} set from {}={:?}", flag, key, value);
    }
    for (flag, key) in report.shadowed() {
        tracing::warn!(
            "environment variable {} ignored: flag {} was set on the command line",
            key,
            flag
        );
    }
    for key in unused_env_vars(&manifest.prefix, &flags, env) {
        tracing::warn!("unrecognized environment variable {}", key);
    }

    Ok(Resolved {
        flags,
        report,
        rest,
    })
}
