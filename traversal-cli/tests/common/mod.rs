//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - An isolated environment with its own home and working directory
//! - A sample configuration describing a small site
//! - Command builder helpers

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Configuration used by most tests.
///
/// ```text
/// /            (site)
/// /docs/manual "read me"
/// /docs/faq    "questions"
/// /shop        (site)
/// /shop/cart   "empty"
/// ```
pub const SAMPLE_CONFIG: &str = "\
application_url: http://localhost:8080
tree:
  site: true
  children:
    docs:
      children:
        manual:
          value: read me
        faq:
          value: questions
    shop:
      site: true
      children:
        cart:
          value: empty
views:
  index.html: the index
resources:
  style.css: body {}
";

/// Test environment with an isolated home directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the configuration file
    pub config_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new environment with [`SAMPLE_CONFIG`] written to
    /// `traversal.yaml`.
    pub fn new() -> Self {
        Self::with_config(SAMPLE_CONFIG)
    }

    /// Create a new environment with `content` as `traversal.yaml`.
    pub fn with_config(content: &str) -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let config_path = temp_path.join("traversal.yaml");
        std::fs::write(&config_path, content).expect("Failed to write config");

        Self {
            temp_dir,
            temp_path,
            config_path,
        }
    }

    /// A command running in the temp directory, with `HOME` pointing there
    /// and no `TRAVERSAL_*` variables inherited.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("traversal").expect("Failed to find traversal binary");
        cmd.current_dir(&self.temp_path)
            .env("HOME", &self.temp_path)
            .env_remove("TRAVERSAL_CONFIG")
            .env_remove("TRAVERSAL_APPLICATION_URL")
            .env_remove("TRAVERSAL_LOG_MODE");
        cmd
    }

    /// A command with `--config` pointing at this environment's file.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config").arg(&self.config_path);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file below the temp directory and return its path.
    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create directory");
        }
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Run a command and return its trimmed stdout, asserting success.
    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self.command().args(args).output().expect("Failed to run");
        assert!(
            output.status.success(),
            "command {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim()
            .to_string()
    }
}
