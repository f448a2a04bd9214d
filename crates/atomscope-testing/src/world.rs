//! Isolated environment for running the `atomscope` binary.
//!
//! Each world owns a temp directory that acts as `HOME`, with its own
//! `config.toml` wired through `ATOMSCOPE_CONFIG`, so tests never read the
//! developer's real configuration.

use anyhow::Result;
use assert_cmd::Command;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct TestWorld {
    temp_dir: TempDir,
    config_path: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorld {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("atomscope").join("config.toml");

        Self {
            temp_dir,
            config_path,
            env_vars: HashMap::new(),
        }
    }

    pub fn home(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Write `contents` as the world's config file.
    pub fn with_config(self, contents: &str) -> Self {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create config dir");
        }
        std::fs::write(&self.config_path, contents).expect("Failed to write config");
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Point a command at this world's home, config and environment.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.current_dir(self.home())
            .env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.home())
            .env("XDG_DATA_HOME", self.home())
            .env("ATOMSCOPE_CONFIG", &self.config_path)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("ATOMSCOPE_API_URL");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }
        cmd
    }

    /// Run the `atomscope` binary with `args` inside this world.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("atomscope")?;
        self.configure_command(&mut cmd);
        let output = cmd.args(args).output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

/// Captured outcome of a CLI run
pub struct CliResult {
    pub status: std::process::ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::from_str(&self.stdout)?)
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }
}
