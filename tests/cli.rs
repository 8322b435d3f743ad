//! Integration tests for `stockroom-cli`.
//!
//! Uses `assert_cmd` to invoke the binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn stockroom_cmd() -> Command {
    let mut cmd = Command::cargo_bin("stockroom-cli").expect("stockroom-cli binary not found");
    cmd.env_remove("STOCKROOM_TIER");
    cmd
}

#[test]
fn test_restriction_allowed_exits_zero() {
    stockroom_cmd()
        .args(["restriction", "products", "--tier", "Basic", "--count", "199"])
        .assert()
        .success()
        .stdout(predicate::str::contains("success"));
}

#[test]
fn test_restriction_denied_exits_one() {
    stockroom_cmd()
        .args(["restriction", "sales-reps", "--count", "0"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("error"));
}

#[test]
fn test_restriction_unknown_tier_fails_closed() {
    stockroom_cmd()
        .args(["restriction", "stores", "--tier", "boss", "--count", "0"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("unrecognized_tier"));
}

#[test]
fn test_restriction_unknown_resource() {
    stockroom_cmd()
        .args(["restriction", "warehouses", "--count", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown resource"));
}

#[test]
fn test_expiry_with_fixed_now() {
    stockroom_cmd()
        .args(["expiry", "2027-05-07", "--now", "2026-10-19T00:00:00Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("status: Still Valid"))
        .stdout(predicate::str::contains("style: none"));
}

#[test]
fn test_expiry_past_date() {
    stockroom_cmd()
        .args(["expiry", "2026-10-18", "--now", "2026-10-19"])
        .assert()
        .success()
        .stdout(predicate::str::contains("status: Expired"))
        .stdout(predicate::str::contains("style: near-expiry-critical"));
}

#[test]
fn test_expiry_rejects_bad_date() {
    stockroom_cmd()
        .args(["expiry", "tomorrow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid expiry date"));
}

#[test]
fn test_format_number() {
    stockroom_cmd()
        .args(["format", "1234567.891"])
        .assert()
        .success()
        .stdout(predicate::str::diff("1,234,567.89\n"));
}
