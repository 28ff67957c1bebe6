#![allow(dead_code)]

pub mod fake_service;

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

pub use fake_service::FakeTemplateService;

/// Path of the compiled CLI binary
pub fn binary() -> &'static str {
    env!("CARGO_BIN_EXE_argo-templates")
}

/// Runs the CLI against a config file in a fresh temp directory
pub struct CliTest {
    pub temp_dir: TempDir,
}

impl CliTest {
    pub fn new() -> Self {
        CliTest {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.yaml")
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(binary())
            .args(args)
            .env("ARGO_TEMPLATES_CONFIG", self.config_path())
            .env("ARGO_TEMPLATES_LOG", "off")
            .env_remove("ARGO_SERVER")
            .env_remove("ARGO_TOKEN")
            .env_remove("ARGO_NAMESPACE")
            .env("NO_COLOR", "1")
            .current_dir(self.temp_dir.path())
            .output()
            .expect("Failed to execute argo-templates command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if output.status.success() {
            panic!(
                "Command {:?} should have failed\nstdout: {}",
                args,
                String::from_utf8_lossy(&output.stdout)
            );
        }
        String::from_utf8_lossy(&output.stderr).to_string()
    }
}

impl Default for CliTest {
    fn default() -> Self {
        Self::new()
    }
}
