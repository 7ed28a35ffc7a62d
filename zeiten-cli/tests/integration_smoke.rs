//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

fn zeiten() -> Command {
    let mut cmd = Command::cargo_bin("zeiten").unwrap();
    // keep any local .env out of the way
    cmd.env("APP_ENV", "production");
    cmd
}

#[test]
fn test_serve_help() {
    zeiten()
        .arg("serve")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Database URL"))
        .stdout(predicate::str::contains("--public-dir"));
}

#[test]
fn test_version() {
    zeiten()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_serve_without_database_url_fails() {
    zeiten()
        .env_remove("DATABASE_URL")
        .arg("serve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_dotenv_is_read_outside_production() {
    let dir = tempfile::tempdir().unwrap();
    // invalid URL from .env proves the file was read
    std::fs::write(dir.path().join(".env"), "DATABASE_URL=not-a-url\n").unwrap();

    Command::cargo_bin("zeiten")
        .unwrap()
        .current_dir(dir.path())
        .env_remove("DATABASE_URL")
        .env_remove("APP_ENV")
        .env_remove("NODE_ENV")
        .arg("serve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to create database pool"));
}

#[test]
fn test_node_env_production_skips_dotenv() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".env"), "DATABASE_URL=not-a-url\n").unwrap();

    Command::cargo_bin("zeiten")
        .unwrap()
        .current_dir(dir.path())
        .env_remove("DATABASE_URL")
        .env_remove("APP_ENV")
        .env("NODE_ENV", "production")
        .arg("serve")
        .assert()
        .failure()
        .stderr(predicate::str::contains("DATABASE_URL not set"));
}

#[test]
fn test_help_mentions_env_file_switch() {
    zeiten()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("NODE_ENV"));
}
