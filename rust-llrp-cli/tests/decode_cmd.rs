//! End-to-end tests for the `decode` subcommand.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn hex_capture() -> &'static str {
    // A Keepalive followed by a Start ROSpec addressing all ROSpecs.
    "04 3E 00 00 00 0A 00 00 00 01\n\
     04 16 00 00 00 0E 00 00 00 02 00 00 00 00\n"
}

#[test]
fn decode_renders_a_hex_capture() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", hex_capture()).unwrap();

    Command::cargo_bin("rust-llrp-cli")
        .unwrap()
        .args(["decode", "--hex"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Message: Keepalive (62)"))
        .stdout(predicate::str::contains("Message: Start ROSpec (22)"))
        .stdout(predicate::str::contains("ROSpec ID: 0 (All)"));
}

#[test]
fn decode_emits_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{}", hex_capture()).unwrap();

    Command::cargo_bin("rust-llrp-cli")
        .unwrap()
        .args(["decode", "--hex", "--json"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type_name\": \"Keepalive\""));
}

#[test]
fn decode_rejects_bad_hex() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "zz zz").unwrap();

    Command::cargo_bin("rust-llrp-cli")
        .unwrap()
        .args(["decode", "--hex"])
        .arg(file.path())
        .assert()
        .failure();
}
