#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// Fresh directory used as both HOME and the working directory
pub fn setup_test_env() -> TempDir {
    TempDir::new().unwrap()
}

/// triad command running inside `dir` with HOME pointed at it
pub fn triad_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("triad").unwrap();
    cmd.current_dir(dir);
    cmd.env("HOME", dir);
    cmd.env_remove("TRIAD_LOG");
    cmd
}

/// Write an input file into `dir` and return its name
pub fn write_input(dir: &Path, name: &str, content: &str) -> String {
    std::fs::write(dir.join(name), content).unwrap();
    name.to_string()
}

/// Write `~/.triad/rc` under `dir`
pub fn write_config(dir: &Path, content: &str) {
    let config_dir = dir.join(".triad");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("rc"), content).unwrap();
}
