//! Common test utilities for xfergen integration tests.
//!
//! Provides `TestEnv` for isolated test environments that don't pick up the
//! user's real `~/.config/xfergen/config.toml`.

#![allow(dead_code)]

use assert_cmd::Command;
pub use tempfile::TempDir;

/// A test environment with an isolated config directory.
///
/// The `xg()` method returns a `Command` that sets `XG_CONFIG_DIR`
/// per-invocation, making tests parallel-safe.
pub struct TestEnv {
    pub config_dir: TempDir,
}

impl TestEnv {
    /// Create a new test environment with an empty config directory.
    pub fn new() -> Self {
        Self {
            config_dir: TempDir::new().unwrap(),
        }
    }

    /// Create a test environment with the given defaults file contents.
    pub fn with_config(contents: &str) -> Self {
        let env = Self::new();
        std::fs::write(env.config_dir.path().join("config.toml"), contents).unwrap();
        env
    }

    /// Get a Command for the xg binary with the isolated config directory.
    pub fn xg(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_xg"));
        cmd.env("XG_CONFIG_DIR", self.config_dir.path());
        cmd
    }

    /// Path of the defaults file inside this environment.
    pub fn config_path(&self) -> std::path::PathBuf {
        self.config_dir.path().join("config.toml")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
