//! Shared helpers for end-to-end CLI tests.
#![allow(dead_code)] // Each test binary uses a subset

use std::path::Path;
use std::process::{Command, Output};

/// Path to the brandkit binary
pub fn brandkit_bin() -> &'static str {
    env!("CARGO_BIN_EXE_brandkit")
}

/// Runs brandkit with an isolated config directory and no API key.
pub fn run_isolated(args: &[&str], config_dir: &Path) -> Output {
    Command::new(brandkit_bin())
        .env("BRANDKIT_CONFIG_DIR", config_dir)
        .env_remove("OPENAI_API_KEY")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Runs brandkit in a throwaway config directory.
pub fn run(args: &[&str]) -> Output {
    let temp_dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    run_isolated(args, temp_dir.path())
}

/// Stdout as a string.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr as a string.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Stdout parsed as JSON.
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}
