#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch home directory with its own log file.
pub struct Sandbox {
    pub dir: TempDir,
}

impl Sandbox {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn log_file(&self) -> PathBuf {
        self.path().join("studylogs.csv")
    }

    pub fn log_str(&self) -> String {
        self.log_file().to_string_lossy().to_string()
    }

    /// The binary, isolated from the user's config, pointed at this sandbox's log file.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("studylog");
        cmd.current_dir(self.path())
            .env("HOME", self.path())
            .env("APPDATA", self.path())
            .args(["--file", &self.log_str()]);
        cmd
    }

    pub fn read_log(&self) -> String {
        fs::read_to_string(self.log_file()).expect("read log file")
    }

    pub fn write_log(&self, content: &str) {
        fs::write(self.log_file(), content).expect("write log file");
    }

    pub fn add(&self, date: &str, subject: &str, hours: &str, description: &str) {
        self.cmd()
            .args(["add", "--date", date, subject, hours, description])
            .assert()
            .success();
    }

    /// Two sessions used by many tests.
    pub fn seed(&self) {
        self.add("2024-01-01", "Math", "2.5", "algebra");
        self.add("2024-01-02", "Physics", "1", "optics, lenses");
    }
}
