//! End-to-end configuration tests: precedence between config files and CLI
//! overrides, and real process invocation against a stand-in backend.
//!
//! `echo` serves as the backend: it prints the translated argv verbatim,
//! which is exactly what these tests need to assert on.

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
        .arg("--quiet")
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn test_workspace_config_selects_backend_program() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("swarmctl.toml"),
        "[backend]\nprogram = \"echo\"\n",
    )
    .unwrap();

    let output = swarmctl(
        temp.path(),
        &["init", "--options", "--advertise-addr 192.168.1.1"],
    );

    assert!(
        output.status.success(),
        "stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim_end(),
        "swarm init --advertise-addr 192.168.1.1"
    );
}

#[test]
fn test_backend_flag_overrides_config() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("swarmctl.toml"),
        "[backend]\nprogram = \"swarmctl-no-such-backend\"\n",
    )
    .unwrap();

    let output = swarmctl(temp.path(), &["--backend", "echo", "node", "ls"]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim_end(), "node ls");
}

#[test]
fn test_explicit_config_file_wins_over_workspace() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("swarmctl.toml"),
        "[backend]\nprogram = \"swarmctl-no-such-backend\"\n",
    )
    .unwrap();
    let explicit = temp.path().join("override.toml");
    std::fs::write(&explicit, "[backend]\nprogram = \"echo\"\n").unwrap();

    let output = swarmctl(
        temp.path(),
        &[
            "--config",
            explicit.to_str().unwrap(),
            "update",
            "--services",
            "my-web",
            "--image",
            "nginx:alpine",
        ],
    );

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim_end(),
        "service update --image nginx:alpine my-web"
    );
}

#[test]
fn test_missing_backend_program_is_reported() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("swarmctl.toml"),
        "[backend]\nprogram = \"swarmctl-no-such-backend\"\n",
    )
    .unwrap();

    let output = swarmctl(temp.path(), &["node", "ls"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to run backend 'swarmctl-no-such-backend'"),
        "stderr={stderr:?}"
    );
}

#[test]
fn test_invalid_config_file_is_reported() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("swarmctl.toml"), "backend = not toml").unwrap();

    let output = swarmctl(temp.path(), &["--dry-run", "node", "ls"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Configuration error"), "stderr={stderr:?}");
}
