//! Command output against an injected environment.

use crate::cli::commands::{load_manifest, resolve, run_check_env, run_env_names, run_show, run_urls};
use flagenv_core::config::FlagManifest;
use std::collections::HashMap;
use std::io::Write;

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn output(buf: Vec<u8>) -> String {
    String::from_utf8(buf).unwrap()
}

#[test]
fn show_reports_sources() {
    let manifest = FlagManifest::default();
    let env = env(&[
        ("FLAGENV_MAX_PEERS", "32"),
        ("FLAGENV_DEBUG", "1"),
        ("FLAGENV_DATA_DIR", "/from/env"),
    ]);
    let mut out = Vec::new();
    run_show(&manifest, &args(&["--data-dir", "/from/cli"]), &env, &mut out).unwrap();

    let text = output(out);
    assert!(text.contains("data-dir=/from/cli\t(cli)"), "{text}");
    assert!(text.contains("max-peers=32\t(env FLAGENV_MAX_PEERS)"), "{text}");
    assert!(text.contains("debug=true\t(env FLAGENV_DEBUG)"), "{text}");
    assert!(text.contains("listen-urls=http://127.0.0.1:2379\t(default)"), "{text}");
}

#[test]
fn show_fails_on_bad_env_value() {
    let manifest = FlagManifest::default();
    let env = env(&[("FLAGENV_MAX_PEERS", "abc123")]);
    let mut out = Vec::new();
    let err = run_show(&manifest, &[], &env, &mut out).unwrap_err();
    assert!(format!("{err:#}").contains("FLAGENV_MAX_PEERS"));
}

#[test]
fn show_fails_on_unknown_flag_argument() {
    let mut out = Vec::new();
    let err = run_show(&FlagManifest::default(), &args(&["-nope"]), &env(&[]), &mut out).unwrap_err();
    assert!(format!("{err:#}").contains("parsing flag arguments"));
}

#[test]
fn env_names_lists_every_flag() {
    let mut manifest = FlagManifest::default();
    manifest.prefix = "App".to_string();
    let mut out = Vec::new();
    run_env_names(&manifest, &mut out).unwrap();
    let text = output(out);
    assert!(text.contains("listen-urls\tApp_LISTEN_URLS"));
    assert_eq!(text.lines().count(), manifest.flags.len());
}

#[test]
fn check_env_lists_unused_and_fails() {
    let manifest = FlagManifest::default();
    let noisy = env(&[("FLAGENV_debug", "1"), ("FLAGENV_DEBUG", "1"), ("HOME", "/root")]);
    let mut out = Vec::new();
    assert!(run_check_env(&manifest, &noisy, &mut out).is_err());
    assert_eq!(output(out), "FLAGENV_debug\n");

    let mut out = Vec::new();
    run_check_env(&manifest, &env(&[("FLAGENV_DEBUG", "1")]), &mut out).unwrap();
    assert!(out.is_empty());
}

#[test]
fn urls_prints_one_per_line() {
    let manifest = FlagManifest::default();
    let env = env(&[("FLAGENV_LISTEN_URLS", "http://10.0.0.1:2379,http://10.0.0.2:2379")]);
    let mut out = Vec::new();
    run_urls(&manifest, "listen-urls", &[], &env, &mut out).unwrap();
    assert_eq!(output(out), "http://10.0.0.1:2379\nhttp://10.0.0.2:2379\n");

    let mut out = Vec::new();
    assert!(run_urls(&manifest, "max-peers", &[], &env, &mut out).is_err());
}

#[test]
fn resolve_keeps_trailing_arguments() {
    let resolved = resolve(
        &FlagManifest::default(),
        &args(&["-debug", "serve", "--fast"]),
        &env(&[]),
    )
    .unwrap();
    assert_eq!(resolved.rest, vec!["serve", "--fast"]);
    assert!(resolved.flags.is_set("debug"));
}

#[test]
fn load_manifest_applies_prefix_override() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "prefix = \"FILE\"").unwrap();
    let manifest = load_manifest(Some(file.path()), Some("OVERRIDE")).unwrap();
    assert_eq!(manifest.prefix, "OVERRIDE");
    assert!(manifest.flags.is_empty());

    let manifest = load_manifest(Some(file.path()), None).unwrap();
    assert_eq!(manifest.prefix, "FILE");
}
