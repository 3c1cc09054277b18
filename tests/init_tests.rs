//! Integration tests for init and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::yearcode_cmd;

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    yearcode_cmd().arg("init").arg(temp.path()).assert().success();

    assert!(temp.path().join(".yearcode").exists());

    let config_path = temp.path().join(".yearcode/config.toml");
    assert!(config_path.exists());

    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("registered = []"));
    assert!(!content.contains("tag ="));
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    yearcode_cmd().arg("init").arg(temp.path()).assert().success();

    yearcode_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_config_outside_project_fails() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing");
    fs::create_dir(&missing).unwrap();

    // YEARCODE_ROOT pointing at an uninitialized directory is rejected
    yearcode_cmd()
        .env("YEARCODE_ROOT", &missing)
        .arg("config")
        .arg("--list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no .yearcode directory found"));
}

#[test]
fn test_config_set_and_get_tag() {
    let temp = TempDir::new().unwrap();

    yearcode_cmd().arg("init").arg(temp.path()).assert().success();

    yearcode_cmd()
        .current_dir(temp.path())
        .args(["config", "tag", "copyright"])
        .assert()
        .success();

    yearcode_cmd()
        .current_dir(temp.path())
        .args(["config", "tag"])
        .assert()
        .success()
        .stdout("copyright\n");

    yearcode_cmd()
        .current_dir(temp.path())
        .arg("tag")
        .assert()
        .success()
        .stdout("copyright\n");
}

#[test]
fn test_config_registered_triggers_fallback() {
    let temp = TempDir::new().unwrap();

    yearcode_cmd().arg("init").arg(temp.path()).assert().success();

    yearcode_cmd()
        .current_dir(temp.path())
        .args(["config", "registered", "year,gallery"])
        .assert()
        .success();

    yearcode_cmd()
        .current_dir(temp.path())
        .arg("tag")
        .assert()
        .success()
        .stdout("runthings_year\n");
}

#[test]
fn test_config_discovered_from_subdirectory() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("content/pages");
    fs::create_dir_all(&nested).unwrap();

    yearcode_cmd().arg("init").arg(temp.path()).assert().success();

    yearcode_cmd()
        .current_dir(temp.path())
        .args(["config", "tag", "yr"])
        .assert()
        .success();

    yearcode_cmd()
        .current_dir(&nested)
        .arg("tag")
        .assert()
        .success()
        .stdout("yr\n");
}

#[test]
fn test_config_unset_tag() {
    let temp = TempDir::new().unwrap();

    yearcode_cmd().arg("init").arg(temp.path()).assert().success();

    yearcode_cmd()
        .current_dir(temp.path())
        .args(["config", "tag", "copyright"])
        .assert()
        .success();

    yearcode_cmd()
        .current_dir(temp.path())
        .args(["config", "tag", "--unset"])
        .assert()
        .success();

    yearcode_cmd()
        .current_dir(temp.path())
        .arg("tag")
        .assert()
        .success()
        .stdout("year\n");
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();

    yearcode_cmd().arg("init").arg(temp.path()).assert().success();

    yearcode_cmd()
        .current_dir(temp.path())
        .args(["config", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tag = (not set)"))
        .stdout(predicate::str::contains("registered ="));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();

    yearcode_cmd().arg("init").arg(temp.path()).assert().success();

    yearcode_cmd()
        .current_dir(temp.path())
        .args(["config", "mode"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: 'mode'"));
}

#[test]
fn test_malformed_config_reports_parse_error() {
    let temp = TempDir::new().unwrap();

    yearcode_cmd().arg("init").arg(temp.path()).assert().success();
    fs::write(temp.path().join(".yearcode/config.toml"), "tag = [").unwrap();

    yearcode_cmd()
        .current_dir(temp.path())
        .arg("tag")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Failed to parse .yearcode/config.toml",
        ));
}
