//! Binary-level tests for command translation via --dry-run.
//!
//! The dry-run invoker renders the translated command descriptor as JSON,
//! so these tests exercise the full parse -> validate -> build -> dispatch
//! path without needing an orchestration backend on the machine.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn swarmctl(workspace: &Path, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_swarmctl");
    Command::new(bin)
        .env("XDG_CONFIG_HOME", workspace.join("xdg-config"))
        .env("HOME", workspace.join("home"))
        .env_remove("SWARMCTL_LOG")
        .arg("--workspace")
        .arg(workspace)
        .args(args)
        .output()
        .unwrap()
}

fn dry_run_json(workspace: &Path, args: &[&str]) -> serde_json::Value {
    let mut full_args = vec!["--quiet", "--dry-run"];
    full_args.extend_from_slice(args);
    let output = swarmctl(workspace, &full_args);
    assert!(
        output.status.success(),
        "dry run should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_dry_run_update_renders_translation() {
    let temp = TempDir::new().unwrap();
    let value = dry_run_json(
        temp.path(),
        &[
            "update",
            "--services",
            "my-web",
            "--image",
            "nginx:alpine",
        ],
    );

    assert_eq!(value["verb"], "update");
    assert_eq!(value["targets"], serde_json::json!(["my-web"]));
    assert_eq!(value["args"], serde_json::json!(["--image", "nginx:alpine"]));
}

#[test]
fn test_dry_run_env_add_expands_per_element() {
    let temp = TempDir::new().unwrap();
    let value = dry_run_json(
        temp.path(),
        &[
            "update",
            "--services",
            "my-web",
            "--env-add",
            "DEBUG=1,LOG_LEVEL=info",
        ],
    );

    let args: Vec<String> = value["args"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect();
    assert_eq!(
        args,
        vec!["--env-add", "DEBUG=1", "--env-add", "LOG_LEVEL=info"]
    );
}

#[test]
fn test_dry_run_scale_uses_literal_pairs_as_targets() {
    let temp = TempDir::new().unwrap();
    let value = dry_run_json(
        temp.path(),
        &["scale", "--services", "my-web", "--replicas", "my-web=3"],
    );

    assert_eq!(value["verb"], "scale");
    assert_eq!(value["targets"], serde_json::json!(["my-web=3"]));
    assert_eq!(value["args"], serde_json::json!([]));
}

#[test]
fn test_dry_run_node_ls() {
    let temp = TempDir::new().unwrap();
    let value = dry_run_json(temp.path(), &["node", "ls"]);

    assert_eq!(value["verb"], "node");
    assert_eq!(value["action"], "ls");
    assert_eq!(value["targets"], serde_json::json!([]));
    assert_eq!(value["args"], serde_json::json!([]));
}

#[test]
fn test_dry_run_init_passthrough_options() {
    let temp = TempDir::new().unwrap();
    let value = dry_run_json(
        temp.path(),
        &["init", "--options", "--advertise-addr 192.168.1.1"],
    );

    assert_eq!(value["verb"], "init");
    assert_eq!(
        value["args"],
        serde_json::json!(["--advertise-addr", "192.168.1.1"])
    );
}

#[test]
fn test_node_without_action_warns_once_and_exits_zero() {
    let temp = TempDir::new().unwrap();
    let output = swarmctl(temp.path(), &["--dry-run", "node"]);

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(
        stderr.matches("No node action selected").count(),
        1,
        "warning should be emitted exactly once; stderr={stderr:?}"
    );
}

#[test]
fn test_update_without_services_fails_with_message() {
    let temp = TempDir::new().unwrap();
    let output = swarmctl(temp.path(), &["--quiet", "--dry-run", "update"]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Service name(s) must be provided for the \"update\" command"),
        "stderr={stderr:?}"
    );
}

#[test]
fn test_node_demote_without_nodes_fails_with_exact_message() {
    let temp = TempDir::new().unwrap();
    let output = swarmctl(temp.path(), &["--quiet", "--dry-run", "node", "demote"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Node name(s) must be provided for the \"demote\" command."),
        "stderr={stderr:?}"
    );
}
