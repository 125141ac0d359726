use anyhow::Result;
use flagenv_core::config::FlagManifest;
use flagenv_core::env_var_name;
use std::io::Write;

/// Prints each declared flag next to the variable it is read from.
pub fn run_env_names<W: Write>(manifest: &FlagManifest, out: &mut W) -> Result<()> {
    for spec in &manifest.flags {
        writeln!(out, "{}\t{}", spec.name, env_var_name(&manifest.prefix, &spec.name))?;
    }
    Ok(())
}
