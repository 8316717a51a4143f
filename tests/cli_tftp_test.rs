//! Integration tests for `xg tftp`.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_tftp_builds_command() {
    TestEnv::new()
        .xg()
        .args(["-H", "tftp", "-d", "/tftp", "-p", "69"])
        .assert()
        .success()
        .stdout(predicate::str::diff("atftpd --daemon --port 69 \"/tftp\"\n"));
}

#[test]
fn test_tftp_non_numeric_port_names_the_port_field() {
    TestEnv::new()
        .xg()
        .args(["tftp", "-d", "/tftp", "-p", "abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("port must be a number"))
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_tftp_missing_directory_reported_first() {
    // Directory is checked before the port, matching the FTP ordering.
    TestEnv::new()
        .xg()
        .args(["tftp", "-p", "not-a-port"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("directory is required"));
}

#[test]
fn test_tftp_blank_flag_value_counts_as_missing() {
    TestEnv::new()
        .xg()
        .args(["tftp", "-d", "   ", "-p", "69"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("directory is required"));
}

#[test]
fn test_tftp_config_defaults() {
    TestEnv::with_config("[tftp]\ndirectory = \"/tftp\"\nport = \"69\"\n")
        .xg()
        .args(["-H", "tftp"])
        .assert()
        .success()
        .stdout(predicate::str::diff("atftpd --daemon --port 69 \"/tftp\"\n"));
}
