use anyhow::Result;
use flagenv_core::config::FlagManifest;
use flagenv_core::env::{Binding, EnvLookup};
use std::io::Write;

use super::resolve;

/// Prints `name=value` for every flag with its source.
pub fn run_show<E, W>(manifest: &FlagManifest, args: &[String], env: &E, out: &mut W) -> Result<()>
where
    E: EnvLookup + ?Sized,
    W: Write,
{
    let resolved = resolve(manifest, args, env)?;
    for (name, binding) in &resolved.report.bindings {
        let value = resolved.flags.value_string(name).unwrap_or_default();
        let source = match binding {
            Binding::CommandLine { .. } => "cli".to_string(),
            Binding::FromEnv { key, .. } => format!("env {}", key),
            Binding::Unset => "default".to_string(),
        };
        writeln!(out, "{}={}\t({})", name, value, source)?;
    }
    if !resolved.rest.is_empty() {
        tracing::info!("ignoring trailing arguments: {:?}", resolved.rest);
    }
    Ok(())
}
