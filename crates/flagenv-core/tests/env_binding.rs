//! End-to-end binding of environment variables into a flag set.

use std::collections::HashMap;

use flagenv_core::env::{set_flags_from_process_env, unused_env_vars};
use flagenv_core::{set_flags_from_env, url_strs_from_flag, FlagSet, UrlList};

fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn assert_values(fs: &FlagSet, expected: &[(&str, &str)]) {
    for (name, value) in expected {
        assert_eq!(
            fs.value_string(name).as_deref(),
            Some(*value),
            "flag {name}"
        );
    }
}

#[test]
fn env_fills_flags_not_set_on_command_line() {
    let mut fs = FlagSet::new("test1");
    fs.string("f1", "", "").unwrap();
    fs.string("f2", "", "").unwrap();
    fs.string("f3", "", "").unwrap();
    assert!(fs.parse(Vec::<String>::new()).unwrap().is_empty());

    let env = env(&[("TEST_F1", "abc"), ("TEST_F3", "123")]);
    fs.set("f2", "xyz").unwrap();
    fs.set("f3", "789").unwrap();

    assert_values(&fs, &[("f1", ""), ("f2", "xyz"), ("f3", "789")]);
    set_flags_from_env("TEST", &mut fs, &env).unwrap();
    assert_values(&fs, &[("f1", "abc"), ("f2", "xyz"), ("f3", "789")]);
}

#[test]
fn env_values_of_every_kind() {
    let mut fs = FlagSet::new("test2");
    fs.string("str", "", "").unwrap();
    fs.int("int", 0, "").unwrap();
    fs.bool("bool", false, "").unwrap();
    fs.string("a-hyphen", "", "").unwrap();
    fs.string("lowercase", "", "").unwrap();

    let env = env(&[
        ("TEST_STR", "ijk"),
        ("TEST_INT", "654"),
        ("TEST_BOOL", "1"),
        ("TEST_A_HYPHEN", "foo"),
        ("TEST_lowertest", "bar"),
    ]);
    set_flags_from_env("TEST", &mut fs, &env).unwrap();

    assert_values(
        &fs,
        &[
            ("str", "ijk"),
            ("int", "654"),
            ("bool", "true"),
            ("a-hyphen", "foo"),
            ("lowercase", ""),
        ],
    );
    assert_eq!(unused_env_vars("TEST", &fs, &env), vec!["TEST_lowertest"]);
}

#[test]
fn bad_env_value_fails() {
    let mut fs = FlagSet::new("test3");
    fs.int("num", 0, "").unwrap();

    let env = env(&[("TEST_NUM", "abc123")]);
    let err = set_flags_from_env("TEST", &mut fs, &env).unwrap_err();
    assert!(err.to_string().contains("TEST_NUM"));
    assert_values(&fs, &[("num", "0")]);
}

#[test]
fn url_list_flag_from_command_line() {
    let urlv = UrlList::new("http://127.0.0.1:1234").unwrap();
    let mut fs = FlagSet::new("testUrlFlag");
    fs.var(urlv, "urls", "").unwrap();
    fs.parse(Vec::<String>::new()).unwrap();

    let urls = "http://192.168.1.1:1234,http://192.168.1.2:1234,http://192.168.1.3:1234";
    fs.set("urls", urls).unwrap();
    assert_eq!(url_strs_from_flag(&fs, "urls").join(","), urls);
}

#[test]
fn url_list_flag_from_env_rejects_bad_segment() {
    let mut fs = FlagSet::new("urls");
    fs.var(UrlList::new("http://127.0.0.1:1234").unwrap(), "peer-urls", "")
        .unwrap();

    let env = env(&[("TEST_PEER_URLS", "http://10.0.0.1:2380,not a url")]);
    assert!(set_flags_from_env("TEST", &mut fs, &env).is_err());
    assert_eq!(url_strs_from_flag(&fs, "peer-urls"), vec!["http://127.0.0.1:1234"]);
    assert!(!fs.is_set("peer-urls"));
}

#[test]
fn process_environment_is_read() {
    // Unique names so parallel tests never observe this variable.
    std::env::set_var("FLAGENVITPROC_ONLY_HERE", "from-process");
    let mut fs = FlagSet::new("proc");
    fs.string("only-here", "", "").unwrap();

    let report = set_flags_from_process_env("FLAGENVITPROC", &mut fs).unwrap();
    std::env::remove_var("FLAGENVITPROC_ONLY_HERE");

    assert_values(&fs, &[("only-here", "from-process")]);
    assert_eq!(report.overridden().count(), 1);
}
