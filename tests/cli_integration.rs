//! Integration tests for the banksplit binary.

#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_bank(dir: &Path) -> PathBuf {
    let mut contents = String::from("mass1,mass2,spin1z,spin2z\n");
    for i in 0..30_u32 {
        contents.push_str(&format!("{},1.4,0.0,0.0\n", 1.4 + f64::from(i) * 0.1));
    }
    let path = dir.join("bank.csv");
    std::fs::write(&path, contents).unwrap();
    path
}

/// Command with an isolated, absent config file so the user's own
/// configuration never leaks into a test.
fn banksplit(dir: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("banksplit");
    cmd.env_remove("RUST_LOG")
        .arg("--config")
        .arg(dir.join("missing.toml"))
        .arg("--no-progress");
    cmd
}

#[test]
fn test_split_writes_sub_banks_and_cache() {
    let dir = TempDir::new().unwrap();
    let input = write_bank(dir.path());
    let out = dir.path().join("out");
    let cache = dir.path().join("L1-BANKS.cache");

    banksplit(dir.path())
        .arg(&input)
        .args(["-n", "10", "--overlap", "2", "--sort-by", "mchirp"])
        .args(["-a", "0:100:TaylorF2", "-i", "L1", "--f-low", "20"])
        .arg("-o")
        .arg(&out)
        .arg("--output-cache")
        .arg(&cache)
        .assert()
        .success();

    for i in 0..3 {
        assert!(out.join(format!("L1-{i:04}_SPLIT_BANK-0-0.csv")).exists());
    }
    let manifest = std::fs::read_to_string(&cache).unwrap();
    assert_eq!(manifest.lines().count(), 3);
    assert!(manifest.starts_with("L1 0000_SPLIT_BANK 0 0 file://localhost/"));
}

#[test]
fn test_odd_overlap_rejected() {
    let dir = TempDir::new().unwrap();
    let input = write_bank(dir.path());

    banksplit(dir.path())
        .arg(&input)
        .args(["--overlap", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("even"));
}

#[test]
fn test_requires_single_input() {
    let dir = TempDir::new().unwrap();
    let input = write_bank(dir.path());

    banksplit(dir.path())
        .arg(&input)
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "exactly one input template bank is required, got 2",
        ));

    banksplit(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("got 0"));
}

#[test]
fn test_missing_approximants_reported() {
    let dir = TempDir::new().unwrap();
    let input = write_bank(dir.path());

    banksplit(dir.path())
        .arg(&input)
        .args(["-n", "10", "--sort-by", "mchirp", "-i", "H1", "--f-low", "15"])
        .arg("--output-cache")
        .arg(dir.path().join("out.cache"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("no approximants specified"));
}

#[test]
fn test_config_path_prints_override() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("custom.toml");

    cargo_bin_cmd!("banksplit")
        .arg("--config")
        .arg(&config)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn test_config_init_creates_file() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("banksplit.toml");

    cargo_bin_cmd!("banksplit")
        .arg("--config")
        .arg(&config)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));
    assert!(config.exists());
}
