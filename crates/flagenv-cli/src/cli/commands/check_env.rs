use anyhow::{bail, Result};
use flagenv_core::config::FlagManifest;
use flagenv_core::env::{unused_env_vars, EnvLookup};
use std::io::Write;

/// Lists prefixed variables no flag reads. Fails if there are any.
pub fn run_check_env<E, W>(manifest: &FlagManifest, env: &E, out: &mut W) -> Result<()>
where
    E: EnvLookup + ?Sized,
    W: Write,
{
    let flags = manifest.flag_set()?;
    let unused = unused_env_vars(&manifest.prefix, &flags, env);
    for key in &unused {
        writeln!(out, "{}", key)?;
    }
    if !unused.is_empty() {
        bail!(
            "{} environment variable(s) with prefix {}_ match no flag",
            unused.len(),
            manifest.prefix
        );
    }
    Ok(())
}
