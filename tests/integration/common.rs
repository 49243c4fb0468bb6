//! Common utilities for integration tests

use assert_cmd::Command;
use assert_fs::{prelude::*, TempDir};
use std::path::PathBuf;

/// Isolated environment: config directory and working directory inside a temp dir
pub struct TestContext {
    pub temp: TempDir,
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl TestContext {
    pub fn new() -> Self {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.child("config").path()).unwrap();
        Self { temp }
    }

    /// A `ghup` command that cannot see the user's real config or token
    pub fn ghup(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_ghup"));
        cmd.current_dir(&self.temp);
        cmd.env_remove("GITHUB_TOKEN");
        cmd.env_remove("RUST_LOG");

        let config_dir = self.temp.child("config").to_path_buf();
        if cfg!(target_os = "windows") {
            cmd.env("APPDATA", &config_dir);
            cmd.env("USERPROFILE", self.temp.path());
        } else if cfg!(target_os = "linux") {
            cmd.env("XDG_CONFIG_HOME", &config_dir);
            cmd.env("HOME", self.temp.path());
        } else {
            // dirs derives ~/Library/Application Support from HOME on macOS
            cmd.env("HOME", self.temp.path());
        }

        cmd
    }

    /// Write a file in the working directory and return its path
    pub fn file(&self, name: &str, content: &[u8]) -> PathBuf {
        let child = self.temp.child(name);
        child.write_binary(content).unwrap();
        child.to_path_buf()
    }
}
