//! Shared test utilities and fixtures
//!
//! Runs the built `hello` binary with an isolated home directory so a real
//! `~/.hello/config.toml` on the host never leaks into the assertions.

#![allow(dead_code)]

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");
        Self { _tmp: tmp, home }
    }

    /// Home directory containing `.hello/config.toml` with `content`.
    pub fn with_config(content: &str) -> Self {
        let env = Self::new();
        let dir = env.config_dir();
        fs::create_dir_all(&dir).expect("create config dir");
        fs::write(dir.join("config.toml"), content).expect("write config");
        env
    }

    pub fn config_dir(&self) -> PathBuf {
        self.home.join(".hello")
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("hello");
        cmd.env("HOME", &self.home).env_remove("HELLO_LOG");
        cmd
    }

    /// Run with no arguments and return stdout, asserting a clean exit.
    pub fn stdout(&self) -> String {
        let output = self.cmd().output().expect("run hello");
        assert!(output.status.success(), "hello exited with {}", output.status);
        String::from_utf8(output.stdout).expect("stdout is utf-8")
    }
}

pub const DEFAULT_OUTPUT: &str = "Hello, world.\nHello, Go!\nHello, world.\n";
