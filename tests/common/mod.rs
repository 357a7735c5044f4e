#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;

/// Nothing listens on the discard port, so every request fails fast with a transport fault.
pub const UNREACHABLE_API_BASE: &str = "http://127.0.0.1:9/youtube/v3";

pub struct TestEnv {
    _tmp: TempDir,
    pub workdir: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let workdir = tmp.path().to_path_buf();
        Self { _tmp: tmp, workdir }
    }

    /// Runs in an empty directory with the platform variables cleared so no
    /// `.env` file or developer key leaks into the test.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("tubeprobe");
        cmd.current_dir(&self.workdir)
            .env_remove("YT_API_KEY")
            .env_remove("YT_API_BASE")
            .env_remove("YT_TIMEOUT_MS")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn write_env_file(&self, name: &str, contents: &str) {
        std::fs::write(self.workdir.join(name), contents).expect("write env file");
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        self.run_json_with(self.cmd(), args)
    }

    pub fn run_json_with(&self, mut cmd: Command, args: &[&str]) -> Value {
        let out = cmd
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}
