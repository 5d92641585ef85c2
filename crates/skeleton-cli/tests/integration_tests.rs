//! Integration tests for the `skeleton` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn skeleton() -> Command {
    let mut cmd = Command::cargo_bin("skeleton").unwrap();
    // Keep the user's environment out of the run.
    cmd.env_remove("RUST_LOG")
        .env_remove("NO_COLOR")
        .env_remove("SKELETON_GREETING")
        .env_remove("SKELETON_DEMO__INITIAL_VALUE")
        .env_remove("SKELETON_DEMO__UPDATES");
    cmd
}

#[test]
fn test_default_run_prints_demo() {
    skeleton()
        .assert()
        .success()
        .stdout(predicate::str::contains("Hello World!"))
        .stdout(predicate::str::contains("Version: 1.2.3-rc1"))
        .stdout(predicate::str::contains("1 + 2 = 3"))
        .stdout(predicate::str::contains("Holder value = Initial value"))
        .stdout(predicate::str::contains("Holder value = New value 1"))
        .stdout(predicate::str::contains("Holder value = New value 2"));
}

#[test]
fn test_holder_values_are_printed_in_order() {
    let output = skeleton().output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let initial = stdout.find("Initial value").unwrap();
    let first = stdout.find("New value 1").unwrap();
    let second = stdout.find("New value 2").unwrap();
    assert!(initial < first && first < second);
}

#[test]
fn test_version_flag() {
    skeleton()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("1.2.3-rc1"));
}

#[test]
fn test_help_flag() {
    skeleton()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--output-format"));
}

#[test]
fn test_unknown_flag_is_usage_error() {
    skeleton().arg("--bogus").assert().code(2);
}

#[test]
fn test_json_output() {
    let output = skeleton()
        .args(["--output-format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["greeting"], "Hello World!");
    assert_eq!(report["version"], "1.2.3-rc1");
    assert_eq!(report["sum"]["result"], 3);
    assert_eq!(report["initial_value"], "Initial value");
    assert_eq!(report["changes"][0]["after"], "New value 1");
}

#[test]
fn test_quiet_suppresses_output() {
    skeleton()
        .arg("--quiet")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_config_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("skeleton.toml");
    fs::write(
        &path,
        r#"
greeting = "Howdy"

[demo]
lhs = 100
rhs = 100
initial_value = "from file"
updates = ["one"]
"#,
    )
    .unwrap();

    skeleton()
        .arg("--config")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Howdy"))
        .stdout(predicate::str::contains("100 + 100 = 200"))
        .stdout(predicate::str::contains("Holder value = from file"))
        .stdout(predicate::str::contains("Holder value = one"))
        .stdout(predicate::str::contains("New value 1").not());
}

#[test]
fn test_environment_overrides_defaults() {
    skeleton()
        .env("SKELETON_DEMO__INITIAL_VALUE", "from env")
        .assert()
        .success()
        .stdout(predicate::str::contains("Holder value = from env"));
}

#[test]
fn test_missing_config_file_exits_with_config_code() {
    let dir = tempfile::tempdir().unwrap();

    skeleton()
        .arg("--config")
        .arg(dir.path().join("missing.toml"))
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

const ESC: &str = "\u{1b}[";

#[test]
fn test_human_output_is_coloured_without_no_color() {
    skeleton()
        .args(["--output-format", "human"])
        .assert()
        .success()
        .stdout(predicate::str::contains(ESC))
        .stdout(predicate::str::contains("Hello World!"));
}

#[test]
fn test_no_color_env_one_succeeds_without_ansi() {
    skeleton()
        .env("NO_COLOR", "1")
        .args(["--output-format", "human"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Holder value = New value 2"))
        .stdout(predicate::str::contains(ESC).not());
}

#[test]
fn test_empty_no_color_env_is_ignored() {
    skeleton()
        .env("NO_COLOR", "")
        .args(["--output-format", "human"])
        .assert()
        .success()
        .stdout(predicate::str::contains(ESC));
}

#[test]
fn test_no_color_env_with_default_format() {
    skeleton()
        .env("NO_COLOR", "1")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 + 2 = 3"));
}

#[test]
fn test_numeric_looking_env_text_is_kept_verbatim() {
    skeleton()
        .env("SKELETON_DEMO__INITIAL_VALUE", "007")
        .env("SKELETON_GREETING", "1.50")
        .assert()
        .success()
        .stdout(predicate::str::contains("Holder value = 007"))
        .stdout(predicate::str::contains("1.50"));
}

#[test]
fn test_updates_from_environment_list() {
    skeleton()
        .env("SKELETON_DEMO__UPDATES", "x,y")
        .assert()
        .success()
        .stdout(predicate::str::contains("Holder value = x"))
        .stdout(predicate::str::contains("Holder value = y"))
        .stdout(predicate::str::contains("New value 1").not());
}
