use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

pub fn promptsel_cmd() -> Command {
    let mut cmd = Command::cargo_bin("promptsel").unwrap();
    cmd.env_remove("PROMPTSEL_ROOT");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Workspace without sample tag files
#[allow(dead_code)]
pub fn init_empty_workspace(temp: &TempDir) {
    promptsel_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--no-samples")
        .assert()
        .success();
}

/// Write a tag file relative to the workspace's tags directory
#[allow(dead_code)]
pub fn write_tags(temp: &TempDir, rel: &str, content: &str) {
    let path = temp.path().join("tags").join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}
