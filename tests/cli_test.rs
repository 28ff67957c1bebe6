mod common;

use common::CliTest;
use std::fs;

// ============================================================================
// Config command tests
// ============================================================================

#[test]
fn test_config_show_defaults() {
    let cli = CliTest::new();

    let output = cli.run_success(&["config", "show"]);
    assert!(output.contains("Configuration"));
    assert!(output.contains("https://localhost:2746"));
    assert!(output.contains("not set"));
}

#[test]
fn test_config_set_and_get_server_url() {
    let cli = CliTest::new();

    cli.run_success(&["config", "set", "server.url", "https://argo.example.com/"]);
    let output = cli.run_success(&["config", "get", "server.url"]);
    assert_eq!(output.trim(), "https://argo.example.com");

    let saved = fs::read_to_string(cli.config_path()).unwrap();
    assert!(saved.contains("https://argo.example.com"));
}

#[test]
fn test_config_token_is_masked() {
    let cli = CliTest::new();

    let output = cli.run_success(&["config", "set", "server.token", "abcdef123456"]);
    assert!(output.contains("ab...56"));
    assert!(!output.contains("abcdef123456"));

    let output = cli.run_success(&["config", "show", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["server"]["token_configured"], true);
    assert!(!output.contains("abcdef123456"));
}

#[test]
fn test_config_set_invalid_key() {
    let cli = CliTest::new();

    let stderr = cli.run_failure(&["config", "set", "server_url", "https://x"]);
    assert!(stderr.contains("server.url"));
}

#[test]
fn test_config_set_invalid_values() {
    let cli = CliTest::new();

    cli.run_failure(&["config", "set", "server.url", "ftp://argo"]);
    cli.run_failure(&["config", "set", "request_timeout", "0"]);
    cli.run_failure(&["config", "set", "server.insecure_skip_verify", "yes"]);
    assert!(!cli.config_path().exists());
}

#[test]
fn test_config_get_json() {
    let cli = CliTest::new();

    cli.run_success(&["config", "set", "default_namespace", "prod"]);
    let output = cli.run_success(&["config", "get", "default_namespace", "--json"]);
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(json["key"], "default_namespace");
    assert_eq!(json["value"], "prod");
}

// ============================================================================
// Argument validation that fails before any request
// ============================================================================

#[test]
fn test_show_requires_namespace_and_name() {
    let cli = CliTest::new();

    let stderr = cli.run_failure(&["show", "etl-1"]);
    assert!(stderr.contains("expected <namespace>/<name>"));
}

#[test]
fn test_create_missing_file() {
    let cli = CliTest::new();

    let stderr = cli.run_failure(&["create", "missing.yaml"]);
    assert!(stderr.contains("error"));
}

#[test]
fn test_create_rejects_wrong_kind() {
    let cli = CliTest::new();
    let manifest = cli.temp_dir.path().join("wf.yaml");
    fs::write(
        &manifest,
        "apiVersion: argoproj.io/v1alpha1\nkind: Workflow\nmetadata:\n  name: etl-1\n",
    )
    .unwrap();

    let stderr = cli.run_failure(&["create", manifest.to_str().unwrap(), "-n", "prod"]);
    assert!(stderr.contains("expected kind WorkflowTemplate"));
}

#[test]
fn test_browse_needs_a_terminal() {
    let cli = CliTest::new();

    let stderr = cli.run_failure(&["browse", "workflow-templates/prod"]);
    assert!(stderr.contains("interactive terminal"));
}

// ============================================================================
// Completions
// ============================================================================

#[test]
fn test_completions_bash() {
    let cli = CliTest::new();

    let output = cli.run_success(&["completions", "bash"]);
    assert!(output.contains("argo-templates"));
}

#[test]
fn test_completions_zsh() {
    let cli = CliTest::new();

    let output = cli.run_success(&["completions", "zsh"]);
    assert!(output.contains("#compdef argo-templates"));
}
