//! Common test utilities shared across integration tests.
//!
//! Note: Clippy cannot track usage across integration test files,
//! hence the `allow(dead_code)` annotation.
#![cfg(test)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Instant every fixture command runs at unless overridden: a Friday in a leap year.
pub const FIXED_NOW: &str = "2024-03-01T10:00";

pub struct TestFixture {
    _temp_dir: TempDir,
    home: PathBuf,
    config_path: PathBuf,
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFixture {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let home = temp_dir.path().to_path_buf();
        let config_path = home.join("yeardots").join("config.toml");

        Self {
            _temp_dir: temp_dir,
            home,
            config_path,
        }
    }

    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Stand-in for `$HOME` in commands built by [`Self::command_without_config`].
    pub fn home(&self) -> &PathBuf {
        &self.home
    }

    pub fn write_config(&self, content: &str) {
        let parent = self.config_path.parent().expect("config path has a parent");
        fs::create_dir_all(parent).expect("Failed to create config dir");
        fs::write(&self.config_path, content).expect("Failed to write config");
    }

    /// Command isolated from the user's config and pinned to `now`.
    pub fn command_at(&self, now: &str) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("yeardots");
        cmd.arg("--config")
            .arg(&self.config_path)
            .arg("--now")
            .arg(now)
            .env_remove("RUST_LOG")
            .env_remove("YEARDOTS_CONFIG")
            .env("NO_COLOR", "1");
        cmd
    }

    /// Command without `--config`, so the path comes from the environment.
    /// `HOME` points at the fixture directory.
    pub fn command_without_config(&self) -> Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("yeardots");
        cmd.arg("--now")
            .arg(FIXED_NOW)
            .env("HOME", &self.home)
            .env_remove("RUST_LOG")
            .env_remove("YEARDOTS_CONFIG")
            .env("NO_COLOR", "1");
        cmd
    }

    pub fn command(&self) -> Command {
        self.command_at(FIXED_NOW)
    }

    pub fn json(&self, args: &[&str]) -> serde_json::Value {
        let output = self
            .command()
            .arg("--format")
            .arg("json")
            .args(args)
            .output()
            .expect("Failed to run yeardots");
        assert!(
            output.status.success(),
            "yeardots {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
    }
}
