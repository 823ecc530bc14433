//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn itemctl() -> Command {
    let mut cmd = Command::cargo_bin("itemctl").unwrap();
    // Keep a developer's .env or shell from leaking into the tests
    cmd.env_remove("DATABASE_URL")
        .env_remove("ITEMCTL_BIND")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_top_level_help_lists_commands() {
    itemctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("schema"));
}

#[test]
fn test_serve_help() {
    itemctl()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Address to bind to"))
        .stdout(predicate::str::contains("0.0.0.0:8000"))
        .stdout(predicate::str::contains("DATABASE_URL"));
}

#[test]
fn test_schema_help() {
    itemctl()
        .arg("schema")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Database URL"));
}

#[test]
fn test_serve_rejects_bad_bind_address() {
    itemctl()
        .arg("serve")
        .arg("--bind")
        .arg("not-an-address")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_schema_fails_on_invalid_database_url() {
    itemctl()
        .arg("schema")
        .arg("--database-url")
        .arg("not a database url")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create database pool"));
}
