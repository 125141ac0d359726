use anyhow::{bail, Result};
use flagenv_core::config::FlagManifest;
use flagenv_core::env::EnvLookup;
use flagenv_core::{url_strs_from_flag, UrlList};
use std::io::Write;

use super::resolve;

/// Resolves flags, then prints the URLs held by `flag`, one per line.
pub fn run_urls<E, W>(
    manifest: &FlagManifest,
    flag: &str,
    args: &[String],
    env: &E,
    out: &mut W,
) -> Result<()>
where
    E: EnvLookup + ?Sized,
    W: Write,
{
    let resolved = resolve(manifest, args, env)?;
    if resolved.flags.get::<UrlList>(flag).is_none() {
        bail!("flag {} is not a URL list", flag);
    }
    for url in url_strs_from_flag(&resolved.flags, flag) {
        writeln!(out, "{}", url)?;
    }
    Ok(())
}
