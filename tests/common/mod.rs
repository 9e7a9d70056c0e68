#![allow(dead_code)]

pub mod fixtures;
pub mod stub_server;

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

pub use fixtures::*;
pub use stub_server::{StubRoute, StubServer};

/// Helper struct to run buyer-profile commands against an isolated config root
pub struct ProfileTest {
    pub temp_dir: TempDir,
    binary_path: String,
}

impl ProfileTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        ProfileTest {
            temp_dir,
            binary_path: env!("CARGO_BIN_EXE_buyer-profile").to_string(),
        }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new(&self.binary_path);
        command
            .args(args)
            .current_dir(self.temp_dir.path())
            .env("BUYER_PROFILE_HOME", self.temp_dir.path())
            .env_remove("BUYER_PROFILE_API_URL")
            .env_remove("BUYER_PROFILE_LOG");
        command
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute buyer-profile command")
    }

    pub fn run_with_env(&self, args: &[&str], key: &str, value: &str) -> Output {
        self.command(args)
            .env(key, value)
            .output()
            .expect("Failed to execute buyer-profile command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert_success(args, &output)
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    /// Run on a blocking thread so an in-process stub server keeps serving
    pub async fn run_async(&self, args: &[&str]) -> Output {
        let mut command = self.command(args);
        tokio::task::spawn_blocking(move || command.output())
            .await
            .expect("Command thread panicked")
            .expect("Failed to execute buyer-profile command")
    }

    pub fn write_config(&self, content: &str) {
        fs::write(self.temp_dir.path().join("config.yaml"), content)
            .expect("Failed to write config file");
    }

    pub fn read_config(&self) -> Option<String> {
        fs::read_to_string(self.temp_dir.path().join("config.yaml")).ok()
    }
}

pub fn assert_success(args: &[&str], output: &Output) -> String {
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
