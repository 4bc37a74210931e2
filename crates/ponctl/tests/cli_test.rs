//! Integration tests for the `ponctl` binary.
//!
//! These validate argument parsing, help output, shell completions, and
//! error handling -- all without requiring a live management backend.
#![allow(clippy::unwrap_used)]

use assert_cmd::Command;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `ponctl` binary with env isolation.
///
/// Clears all `PONCTL_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn ponctl_cmd() -> Command {
    let mut cmd = Command::cargo_bin("ponctl").unwrap();
    cmd.env("HOME", "/tmp/ponctl-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/ponctl-cli-test-nonexistent")
        .env_remove("PONCTL_PROFILE")
        .env_remove("PONCTL_BACKEND")
        .env_remove("PONCTL_TOKEN")
        .env_remove("PONCTL_OUTPUT")
        .env_remove("PONCTL_INSECURE")
        .env_remove("PONCTL_TIMEOUT")
        .env_remove("PONCTL_EMAIL")
        .env_remove("PONCTL_PASSWORD");
    cmd
}

/// Concatenate stdout + stderr from a command output for flexible matching.
fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = ponctl_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_flag() {
    ponctl_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("OLT")
            .and(predicate::str::contains("devices"))
            .and(predicate::str::contains("onu"))
            .and(predicate::str::contains("config")),
    );
}

#[test]
fn test_version_flag() {
    ponctl_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ponctl"));
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    ponctl_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_completions_zsh() {
    ponctl_cmd()
        .args(["completions", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#compdef"));
}

#[test]
fn test_completions_fish() {
    ponctl_cmd()
        .args(["completions", "fish"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

// ── Error cases ─────────────────────────────────────────────────────

#[test]
fn test_invalid_subcommand() {
    let output = ponctl_cmd().arg("foobar").output().unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid subcommand"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid") || text.contains("unrecognized") || text.contains("foobar"),
        "Expected error mentioning invalid subcommand:\n{text}"
    );
}

#[test]
fn test_devices_list_no_backend() {
    ponctl_cmd()
        .args(["devices", "list"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("config")
                .or(predicate::str::contains("Configuration"))
                .or(predicate::str::contains("backend"))
                .or(predicate::str::contains("profile")),
        );
}

#[test]
fn test_backend_without_token_requires_credentials() {
    ponctl_cmd()
        .args(["--backend", "https://nms.example.net/api/", "devices", "list"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("credentials").or(predicate::str::contains("token")));
}

#[test]
fn test_config_show_no_config() {
    // `config show` uses load_config_or_default() so it succeeds even
    // when no config file exists -- it just renders the default config.
    ponctl_cmd().args(["config", "show"]).assert().success();
}

#[test]
fn test_config_path_prints_location() {
    ponctl_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_invalid_output_format() {
    let output = ponctl_cmd()
        .args(["--output", "invalid", "devices", "list"])
        .output()
        .unwrap();
    assert!(
        !output.status.success(),
        "Expected failure for invalid output format"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("invalid")
            || text.contains("possible values")
            || text.contains("valid value"),
        "Expected error about valid output formats:\n{text}"
    );
}

#[test]
fn test_global_flags_parsing() {
    // All flags should parse correctly -- the failure should be about
    // missing backend config, not about argument parsing.
    ponctl_cmd()
        .args([
            "--output",
            "json",
            "--verbose",
            "--insecure",
            "--timeout",
            "60",
            "devices",
            "list",
        ])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("config")
                .or(predicate::str::contains("Configuration"))
                .or(predicate::str::contains("backend"))
                .or(predicate::str::contains("profile")),
        );
}

#[test]
fn test_add_rejects_service_with_native_vlan() {
    let output = ponctl_cmd()
        .args([
            "onu", "add", "--device", "1", "--sn", "HWTC0001", "--fsp", "0/1/2", "--service",
            "10", "--native-vlan",
        ])
        .output()
        .unwrap();
    assert!(
        !output.status.success(),
        "Expected --service and --native-vlan to conflict"
    );
    let text = combined_output(&output);
    assert!(
        text.contains("cannot be used with"),
        "Expected clap conflict error:\n{text}"
    );
}

// ── Subcommand help discovery ───────────────────────────────────────

#[test]
fn test_devices_subcommands_exist() {
    ponctl_cmd()
        .args(["devices", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("status"))
                .and(predicate::str::contains("services")),
        );
}

#[test]
fn test_onu_subcommands_exist() {
    ponctl_cmd()
        .args(["onu", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("autofind")
                .and(predicate::str::contains("search"))
                .and(predicate::str::contains("show"))
                .and(predicate::str::contains("add"))
                .and(predicate::str::contains("reboot"))
                .and(predicate::str::contains("delete")),
        );
}

#[test]
fn test_config_subcommands_exist() {
    ponctl_cmd()
        .args(["config", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("init")
                .and(predicate::str::contains("show"))
                .and(predicate::str::contains("path"))
                .and(predicate::str::contains("set-token")),
        );
}
