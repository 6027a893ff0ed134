//! CLI integration tests

use std::process::Command;

/// Test that the CLI shows help
#[test]
fn test_cli_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "drainsafe-cli", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI help should succeed");
    assert!(
        stdout.contains("voluntary disruption"),
        "Should show app description"
    );
    assert!(stdout.contains("eval"), "Should show eval command");
    assert!(
        stdout.contains("--kubeconfig"),
        "Should show kubeconfig option"
    );
    assert!(
        stdout.contains("--in-cluster"),
        "Should show in-cluster option"
    );
    assert!(stdout.contains("KUBECONFIG"), "Should show env var");
}

/// Test that the CLI shows version
#[test]
fn test_cli_version() {
    let output = Command::new("cargo")
        .args(["run", "-p", "drainsafe-cli", "--", "--version"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "CLI version should succeed");
    assert!(stdout.contains("drainsafe"), "Should show binary name");
}

/// Test eval subcommand help
#[test]
fn test_eval_help() {
    let output = Command::new("cargo")
        .args(["run", "-p", "drainsafe-cli", "--", "eval", "--help"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Eval help should succeed");
    assert!(
        stdout.contains("--namespace"),
        "Should show namespace option"
    );
}

/// Test invalid command error handling
#[test]
fn test_invalid_command() {
    let output = Command::new("cargo")
        .args(["run", "-p", "drainsafe-cli", "--", "invalid-command"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Invalid command should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("error") || stderr.contains("invalid"),
        "Should show error message"
    );
}

/// Test that a subcommand is required
#[test]
fn test_missing_subcommand() {
    let output = Command::new("cargo")
        .args(["run", "-p", "drainsafe-cli", "--"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success(), "Missing subcommand should fail");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Usage") || stderr.contains("error"),
        "Should show usage or error"
    );
}

/// Test that eval against a missing kubeconfig exits non-zero
#[test]
fn test_eval_missing_kubeconfig_is_fatal() {
    let output = Command::new("cargo")
        .args([
            "run",
            "-p",
            "drainsafe-cli",
            "--",
            "--kubeconfig",
            "/definitely/not/a/kubeconfig",
            "eval",
        ])
        .output()
        .expect("Failed to execute command");

    assert!(
        !output.status.success(),
        "Missing kubeconfig should be fatal"
    );

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("kubeconfig"),
        "Should mention the kubeconfig path problem"
    );
}
