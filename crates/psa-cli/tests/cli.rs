use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[allow(deprecated)]
fn psa(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("docker-psa").unwrap();
    cmd.env("PSA_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("PSA_LOG");
    cmd
}

#[test]
fn test_help_lists_options_and_examples() {
    let dir = TempDir::new().unwrap();

    psa(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("[FILTER]"))
        .stdout(predicate::str::contains("--watch"))
        .stdout(predicate::str::contains("--verbosity <LEVEL>"))
        .stdout(predicate::str::contains("Examples:"));
}

#[test]
fn test_single_dash_help() {
    let dir = TempDir::new().unwrap();

    psa(&dir)
        .arg("-help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: docker-psa"));
}

#[test]
fn test_plugin_metadata() {
    let dir = TempDir::new().unwrap();

    let output = psa(&dir)
        .arg("docker-cli-plugin-metadata")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["SchemaVersion"], "0.1.0");
    assert_eq!(json["Vendor"], "BitChisel");
    assert_eq!(json["Version"], env!("CARGO_PKG_VERSION"));
    assert!(json.get("URL").is_none());
}

#[test]
fn test_unreachable_daemon_fails() {
    let dir = TempDir::new().unwrap();

    psa(&dir)
        .env("DOCKER_HOST", "unix:///nonexistent/docker-psa-test.sock")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("Error: "));
}

#[test]
fn test_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("config.toml"), "[watch]\ninterval_secs = \"soon\"\n").unwrap();

    psa(&dir)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: "));
}

#[test]
fn test_unknown_color_rejected() {
    let dir = TempDir::new().unwrap();

    psa(&dir)
        .args(["--color", "sometimes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'sometimes'"));
}

#[test]
fn test_unknown_flag_is_a_warning() {
    let dir = TempDir::new().unwrap();

    psa(&dir)
        .args(["--bogus", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: docker-psa"))
        .stderr(predicate::str::contains("unknown flag ignored: --bogus"));
}
