//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Path of the veer binary built for this test run
pub fn veer_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_veer"))
}

/// Build a command for the veer binary with a predictable environment.
///
/// Colors are disabled and threshold variables from the caller's shell are
/// cleared so output does not depend on the machine running the tests.
pub fn veer_command(dir: &Path) -> Command {
    let mut command = Command::new(veer_binary());
    command
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env("VEER_ASCII", "1")
        .env_remove("VEER_DEPTH_THRESHOLD")
        .env_remove("VEER_MEMORY_THRESHOLD")
        .env_remove("RUST_LOG");
    command
}

/// Run the veer binary in the specified directory
pub fn run_veer_in_dir(dir: &Path, args: &[&str]) -> Output {
    veer_command(dir)
        .args(args)
        .output()
        .expect("Failed to execute veer")
}

/// Run the veer binary with extra environment variables
pub fn run_veer_with_env(dir: &Path, args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut command = veer_command(dir);
    for (key, value) in env {
        command.env(key, value);
    }
    command.args(args).output().expect("Failed to execute veer")
}

/// Parse stdout as JSON, failing the test with stderr on error
pub fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "veer failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is not valid JSON")
}
