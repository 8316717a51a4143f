//! Integration tests for `xg simple-http`.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_blank_port_defaults_to_8000() {
    // Unlike updog, the port argument is not omitted: the default 8000 is
    // substituted.
    TestEnv::new()
        .xg()
        .args(["-H", "simple-http"])
        .assert()
        .success()
        .stdout(predicate::str::diff("python -m SimpleHTTPServer 8000\n"));
}

#[test]
fn test_explicit_port() {
    TestEnv::new()
        .xg()
        .args(["-H", "simple-http", "-p", "9000"])
        .assert()
        .success()
        .stdout(predicate::str::diff("python -m SimpleHTTPServer 9000\n"));
}

#[test]
fn test_non_numeric_port_fails() {
    TestEnv::new()
        .xg()
        .args(["simple-http", "-p", "80.5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("port must be a number"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_config_default_port_applies() {
    TestEnv::with_config("[simple-http]\nport = \"8888\"\n")
        .xg()
        .args(["-H", "simple-http"])
        .assert()
        .success()
        .stdout(predicate::str::diff("python -m SimpleHTTPServer 8888\n"));
}
