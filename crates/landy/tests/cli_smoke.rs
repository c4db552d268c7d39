#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;
use uuid::Uuid;

/// Every invocation gets its own data dir and no ambient API key, so tests
/// never touch real user state and never reach the network.
fn landy_cmd(data_dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("landy"));
    cmd.env("LANDY_DATA_DIR", data_dir.as_os_str())
        .env_remove("OPENAI_API_KEY");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let temp = TempDir::new().unwrap();

    landy_cmd(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("publish"));
}

#[test]
fn test_list_empty_store_prints_hint() {
    let temp = TempDir::new().unwrap();

    landy_cmd(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No pages yet"));
}

#[test]
fn test_list_json_empty_is_array() {
    let temp = TempDir::new().unwrap();

    landy_cmd(temp.path())
        .args(["list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[]"));
}

#[test]
fn test_show_unknown_page_reports_error() {
    let temp = TempDir::new().unwrap();

    landy_cmd(temp.path())
        .args(["show", &Uuid::new_v4().to_string()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Page not found"));
}

#[test]
fn test_delete_unknown_page_reports_error() {
    let temp = TempDir::new().unwrap();

    landy_cmd(temp.path())
        .args(["delete", &Uuid::new_v4().to_string()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Page not found"));
}

#[test]
fn test_generate_without_key_reports_config_error() {
    let temp = TempDir::new().unwrap();

    // The generator adapter is built before any network call, so a missing
    // key fails fast with a configuration error.
    landy_cmd(temp.path())
        .args([
            "generate",
            "--industry",
            "Fitness",
            "--offer",
            "home workouts",
            "--audience",
            "busy parents",
            "--tone",
            "encouraging",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No API key"));
}

#[test]
fn test_generate_missing_flags_is_usage_error() {
    let temp = TempDir::new().unwrap();

    landy_cmd(temp.path())
        .args(["generate", "--industry", "Fitness"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_edit_rejects_malformed_content() {
    let temp = TempDir::new().unwrap();

    landy_cmd(temp.path())
        .args([
            "edit",
            &Uuid::new_v4().to_string(),
            "1",
            "--content",
            "not json",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--content is not valid JSON"));
}

#[test]
fn test_reorder_rejects_bad_section_reference() {
    let temp = TempDir::new().unwrap();

    landy_cmd(temp.path())
        .args(["reorder", &Uuid::new_v4().to_string(), "abc"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid section reference"));
}

#[test]
fn test_config_flag_rejects_missing_file() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.toml");

    landy_cmd(temp.path())
        .args(["--config", missing.to_str().unwrap(), "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}
