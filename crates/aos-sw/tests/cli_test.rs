//! Integration tests for the `aos-sw` CLI binary.
//!
//! Argument parsing, help output, completions and error exit codes run
//! without a switch. The end-to-end cases point `--host` at a wiremock
//! server speaking plain HTTP.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a command for the `aos-sw` binary with env isolation.
///
/// Clears all `AOS_SW_*` env vars and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn aos_sw_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("aos-sw");
    cmd.env("HOME", "/tmp/aos-sw-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/aos-sw-cli-test-nonexistent")
        .env_remove("AOS_SW_PROFILE")
        .env_remove("AOS_SW_HOST")
        .env_remove("AOS_SW_USERNAME")
        .env_remove("AOS_SW_PASSWORD")
        .env_remove("AOS_SW_API_VERSION")
        .env_remove("AOS_SW_VERIFY_TLS")
        .env_remove("AOS_SW_OUTPUT")
        .env_remove("AOS_SW_TIMEOUT");
    cmd
}

fn combined_output(output: &std::process::Output) -> String {
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    format!("{stdout}{stderr}")
}

/// Runs the binary against `server` with throwaway credentials. assert_cmd
/// blocks, so it goes to the blocking pool while wiremock keeps serving.
async fn run_against(server: &MockServer, args: &[&str]) -> std::process::Output {
    let host = server.address().to_string();
    let args: Vec<String> = args.iter().map(ToString::to_string).collect();
    tokio::task::spawn_blocking(move || {
        aos_sw_cmd()
            .env("AOS_SW_PASSWORD", "secret")
            .args(["--host", &host, "--http", "--username", "manager"])
            .args(&args)
            .output()
            .unwrap()
    })
    .await
    .unwrap()
}

async fn mount_session(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/rest/v7/login-sessions"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "cookie": "sessionId=cli42" })),
        )
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/rest/v7/login-sessions"))
        .and(header("cookie", "sessionId=cli42"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(server)
        .await;
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = aos_sw_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    let text = combined_output(&output);
    assert!(text.contains("Usage"), "Expected 'Usage' in output:\n{text}");
}

#[test]
fn test_help_lists_commands() {
    aos_sw_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("ArubaOS-Switch")
            .and(predicate::str::contains("vlans"))
            .and(predicate::str::contains("mac-table")),
    );
}

#[test]
fn test_version_flag() {
    aos_sw_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("aos-sw"));
}

#[test]
fn test_completions_bash() {
    aos_sw_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("aos-sw"));
}

// ── Argument validation ─────────────────────────────────────────────

#[test]
fn test_invalid_output_format_rejected() {
    aos_sw_cmd()
        .args(["--output", "xml", "vlans", "list"])
        .assert()
        .code(2);
}

#[test]
fn test_mac_table_filters_conflict() {
    aos_sw_cmd()
        .args(["mac-table", "--vlan", "10", "--port", "1"])
        .assert()
        .code(2);
}

#[test]
fn test_cli_requires_a_command() {
    aos_sw_cmd().arg("cli").assert().code(2);
}

// ── Configuration ───────────────────────────────────────────────────

#[test]
fn test_missing_config_is_usage_error() {
    let output = aos_sw_cmd().args(["vlans", "list"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("No switch configured"));
}

#[test]
fn test_unknown_profile_is_usage_error() {
    let output = aos_sw_cmd()
        .args(["--profile", "nope", "system", "status"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("Profile 'nope' not found"));
}

#[test]
fn test_host_without_credentials_is_auth_error() {
    aos_sw_cmd()
        .args(["--host", "10.0.0.1", "vlans", "list"])
        .assert()
        .code(3);
}

#[test]
fn test_config_path_prints_location() {
    aos_sw_cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_show_without_file_prints_defaults() {
    aos_sw_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[defaults]"));
}

// ── Against a mock switch ───────────────────────────────────────────

#[tokio::test(flavor = "multi_thread")]
async fn test_vlans_list_plain() {
    let server = MockServer::start().await;
    mount_session(&server).await;

    Mock::given(method("GET"))
        .and(path("/rest/v7/vlans"))
        .and(header("cookie", "sessionId=cli42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "collection_result": { "total_elements_count": 2, "filtered_elements_count": 2 },
            "vlan_element": [
                { "vlan_id": 1, "name": "DEFAULT_VLAN", "status": "VS_PORT_BASED" },
                { "vlan_id": 20, "name": "voice", "is_voice_enabled": true }
            ]
        })))
        .mount(&server)
        .await;

    let output = run_against(&server, &["-o", "plain", "vlans", "list"]).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1\n20\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_vlan_exits_not_found_and_still_logs_out() {
    let server = MockServer::start().await;
    mount_session(&server).await;

    Mock::given(method("GET"))
        .and(path("/rest/v7/vlans/99"))
        .respond_with(ResponseTemplate::new(404).set_body_string("VLAN 99 not found"))
        .mount(&server)
        .await;

    let output = run_against(&server, &["vlans", "get", "99"]).await;
    assert_eq!(output.status.code(), Some(4), "{}", combined_output(&output));
    // mount_session's expect(1) on DELETE is verified when `server` drops
}

#[tokio::test(flavor = "multi_thread")]
async fn test_delete_without_yes_refuses() {
    let server = MockServer::start().await;
    mount_session(&server).await;

    let output = run_against(&server, &["vlans", "delete", "20"]).await;
    assert_eq!(output.status.code(), Some(2));
    assert!(combined_output(&output).contains("--yes"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_command_prints_decoded_output() {
    let server = MockServer::start().await;
    mount_session(&server).await;

    Mock::given(method("POST"))
        .and(path("/rest/v7/cli"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cmd": "show version",
            // "Image stamp: WC.16.10\n"
            "result_base64_encoded": "SW1hZ2Ugc3RhbXA6IFdDLjE2LjEwCg==",
            "status": "CCS_SUCCESS",
            "error_msg": ""
        })))
        .mount(&server)
        .await;

    let output = run_against(&server, &["cli", "show", "version"]).await;
    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "Image stamp: WC.16.10\n");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_failed_logout_does_not_fail_a_completed_command() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v7/login-sessions"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "cookie": "sessionId=cli42" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/rest/v7/login-sessions"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/rest/v7/vlans"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "vlan_id": 30, "name": "iot" })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let output = run_against(
        &server,
        &["-o", "plain", "vlans", "create", "30", "--name", "iot"],
    )
    .await;
    assert!(output.status.success(), "{}", combined_output(&output));
    assert_eq!(String::from_utf8_lossy(&output.stdout), "30\n");
}
