//! Black-box tests of the `resonance` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;

fn resonance(config: &Path) -> Command {
    let mut cmd = Command::cargo_bin("resonance").unwrap();
    cmd.env_remove("RESONANCE_CONFIG")
        .env_remove("RUST_LOG")
        .arg("--no-color")
        .arg("--config")
        .arg(config);
    cmd
}

#[test]
fn sync_reports_every_node() {
    let dir = tempfile::tempdir().unwrap();
    resonance(&dir.path().join("config.toml"))
        .args(["-d", "europe=2", "-o", "json", "sync", "--at", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_nodes\": 2"))
        .stdout(predicate::str::contains("\"synchronized_nodes\": 2"))
        .stdout(predicate::str::contains("\"success_rate\": 1.0"))
        .stdout(predicate::str::contains("\"timestamp\": 1000.0"));
}

#[test]
fn sync_is_reproducible_with_fixed_timestamp() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    let run = || {
        resonance(&config)
            .args(["-d", "asia=3", "-o", "json", "sync", "--at", "1761000000.5", "--nodes"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn run_is_optimal_with_bridge() {
    let dir = tempfile::tempdir().unwrap();
    resonance(&dir.path().join("config.toml"))
        .args(["-o", "json", "run", "--at", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_nodes\": 144"))
        .stdout(predicate::str::contains("\"system_health\": \"optimal\""));
}

#[test]
fn run_without_bridge_is_degraded() {
    let dir = tempfile::tempdir().unwrap();
    resonance(&dir.path().join("config.toml"))
        .args(["-d", "africa=1", "run", "--no-bridge"])
        .assert()
        .success()
        .stdout(predicate::str::contains("DEGRADED"));
}

#[test]
fn zero_frequency_fails() {
    let dir = tempfile::tempdir().unwrap();
    resonance(&dir.path().join("config.toml"))
        .args(["sync", "--frequency", "0"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("invalid reference frequency"));
}

#[test]
fn negative_distribution_fails() {
    let dir = tempfile::tempdir().unwrap();
    resonance(&dir.path().join("config.toml"))
        .args(["-d", "europe=-1", "sync"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("non-negative"));
}

#[test]
fn roi_on_target() {
    let dir = tempfile::tempdir().unwrap();
    resonance(&dir.path().join("config.toml"))
        .args(["-o", "json", "roi", "125", "175", "606"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"stability_roi\": 2.0"));
}

#[test]
fn constant_yaml() {
    let dir = tempfile::tempdir().unwrap();
    resonance(&dir.path().join("config.toml"))
        .args(["-o", "yaml", "constant", "--frequency", "2", "--speed-of-sound", "10"])
        .assert()
        .success()
        .stdout(predicate::str::contains("wavelength_m: 5.0"))
        .stdout(predicate::str::contains("period_s: 0.5"));
}

#[test]
fn config_init_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("sub").join("config.toml");

    resonance(&config)
        .args(["-d", "oceania=4", "config", "init"])
        .assert()
        .success();
    assert!(config.exists());

    // Refuses to overwrite without --force.
    resonance(&config)
        .args(["config", "init"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("--force"));

    // The saved distribution is picked up.
    resonance(&config)
        .args(["-o", "json", "sync", "--at", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"total_nodes\": 4"));
}

#[test]
fn explain_goes_to_stderr() {
    let dir = tempfile::tempdir().unwrap();
    resonance(&dir.path().join("config.toml"))
        .args(["-d", "europe=1", "-o", "json", "--explain", "sync", "--at", "5"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Synchronization Round"))
        .stdout(predicate::str::starts_with("{"));
}
