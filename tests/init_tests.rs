//! Integration tests for init and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{init_empty_workspace, promptsel_cmd};

#[test]
fn test_init_creates_config_and_samples() {
    let temp = TempDir::new().unwrap();

    promptsel_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized promptsel workspace"))
        .stdout(predicate::str::contains("colors.yml"));

    let config_path = temp.path().join(".promptsel/config.toml");
    assert!(config_path.exists());
    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("max_passes = 100"));
    assert!(content.contains("namespace_keying = \"stem\""));

    assert!(temp.path().join("tags/outfits.yml").exists());
}

#[test]
fn test_init_no_samples() {
    let temp = TempDir::new().unwrap();
    init_empty_workspace(&temp);

    assert!(temp.path().join("tags").is_dir());
    assert!(!temp.path().join("tags/colors.yml").exists());
}

#[test]
fn test_init_copies_tags_examples() {
    let temp = TempDir::new().unwrap();
    let examples = temp.path().join("tags_examples/people");
    fs::create_dir_all(&examples).unwrap();
    fs::write(examples.join("hair.yml"), "long: [braids]\n").unwrap();

    promptsel_cmd().arg("init").arg(temp.path()).assert().success();

    assert!(temp.path().join("tags/people/hair.yml").exists());
    assert!(!temp.path().join("tags/colors.yml").exists());
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();
    init_empty_workspace(&temp);

    promptsel_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn test_config_get_and_set() {
    let temp = TempDir::new().unwrap();
    init_empty_workspace(&temp);

    promptsel_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("save_raw_prompt")
        .assert()
        .success()
        .stdout(predicate::str::contains("false"));

    promptsel_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("save_raw_prompt")
        .arg("true")
        .assert()
        .success();

    promptsel_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("save_raw_prompt")
        .assert()
        .success()
        .stdout(predicate::str::contains("true"));
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();
    init_empty_workspace(&temp);

    promptsel_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("max_passes = 100"))
        .stdout(predicate::str::contains("namespace_keying = stem"));
}

#[test]
fn test_config_invalid_keying() {
    let temp = TempDir::new().unwrap();
    init_empty_workspace(&temp);

    promptsel_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("namespace_keying")
        .arg("folders")
        .assert()
        .failure()
        .stderr(predicate::str::contains("stem, relative-path"));
}

#[test]
fn test_config_unknown_key() {
    let temp = TempDir::new().unwrap();
    init_empty_workspace(&temp);

    promptsel_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("editor")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: 'editor'"));
}

#[test]
fn test_outside_workspace_fails() {
    let temp = TempDir::new().unwrap();

    promptsel_cmd()
        .current_dir(temp.path())
        .arg("tags")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Not a promptsel workspace"));
}
