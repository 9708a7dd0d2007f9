//! ---
//! vc_section: "15-testing-qa-runbook"
//! vc_subsection: "integration-tests"
//! vc_type: "source"
//! vc_scope: "code"
//! vc_description: "End-to-end tests for the vercompctl binary."
//! vc_version: "v0.0.0-prealpha"
//! vc_owner: "tbd"
//! ---
use std::fs;

use assert_cmd::Command;

fn stdout_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stdout).into_owned()
}

fn stderr_of(assert: &assert_cmd::assert::Assert) -> String {
    String::from_utf8_lossy(&assert.get_output().stderr).into_owned()
}

fn vercompctl() -> Command {
    let mut cmd = Command::cargo_bin("vercompctl").expect("binary built");
    cmd.env_remove("VERCOMP_CONFIG").env("VERCOMP_LOG", "off");
    cmd
}

#[test]
fn render_prints_all_fields() {
    vercompctl()
        .args(["render", "--major", "5", "--minor", "1", "--tiny", "0", "--pre", "beta1"])
        .assert()
        .success()
        .stdout("5.1.0.beta1\n");
}

#[test]
fn render_without_label_has_no_trailing_dot() {
    vercompctl()
        .args(["render", "--major", "0", "--minor", "0", "--tiny", "0"])
        .assert()
        .success()
        .stdout("0.0.0\n");
}

#[test]
fn render_missing_tiny_fails_fast() {
    let assert = vercompctl()
        .args(["render", "--major", "5", "--minor", "1"])
        .assert()
        .failure();
    assert!(stderr_of(&assert).contains("missing required field 'tiny'"));
}

#[test]
fn parse_emits_json_fields() {
    let assert = vercompctl()
        .args(["parse", "5.1.0.beta1", "--json"])
        .assert()
        .success();
    assert!(stdout_of(&assert).contains("\"pre\": \"beta1\""));
}

#[test]
fn semver_uses_hyphenated_prerelease() {
    vercompctl()
        .args(["semver", "5.1.0.beta1"])
        .assert()
        .success()
        .stdout("5.1.0-beta1\n");
}

#[test]
fn show_falls_back_to_builtin_release() {
    let dir = tempfile::tempdir().unwrap();
    vercompctl()
        .current_dir(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout("5.1.0.beta1\n");
}

#[test]
fn show_reads_release_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("release.toml");
    fs::write(&path, "[release]\nmajor = 3\nminor = 4\ntiny = 5\n").unwrap();
    let assert = vercompctl()
        .current_dir(dir.path())
        .args(["show", "--json", "--config"])
        .arg(&path)
        .assert()
        .success();
    let stdout = stdout_of(&assert);
    assert!(stdout.contains("\"display\": \"3.4.5\""), "{stdout}");
    assert!(stdout.contains("\"pre\": null"), "{stdout}");
}

#[test]
fn show_rejects_config_missing_minor() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("release.toml");
    fs::write(&path, "[release]\nmajor = 3\ntiny = 5\n").unwrap();
    let assert = vercompctl()
        .args(["show", "--config"])
        .arg(&path)
        .assert()
        .failure();
    assert!(stderr_of(&assert).contains("'minor'"));
}

#[test]
fn version_flag_prints_banner() {
    let assert = vercompctl().arg("--version").assert().success();
    assert!(stdout_of(&assert).starts_with("vercomp v5.1.0.beta1"));
}

#[test]
fn show_writes_rolling_log_under_configured_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("release.toml");
    let log_dir = dir.path().join("logs");
    fs::write(
        &path,
        format!(
            "[release]\nmajor = 1\nminor = 2\ntiny = 3\n\n[logging]\ndirectory = {:?}\nformat = \"pretty\"\nfile_prefix = \"audit\"\n",
            log_dir.display().to_string()
        ),
    )
    .unwrap();
    let assert = vercompctl()
        .env("VERCOMP_LOG", "info")
        .args(["show", "--config"])
        .arg(&path)
        .assert()
        .success();
    assert_eq!(stdout_of(&assert), "1.2.3\n");
    let names: Vec<String> = fs::read_dir(&log_dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert!(names.iter().any(|name| name.starts_with("audit.log")), "{names:?}");
}

#[test]
fn explicit_config_flag_beats_env_override() {
    let dir = tempfile::tempdir().unwrap();
    let flagged = dir.path().join("flagged.toml");
    let from_env = dir.path().join("env.toml");
    fs::write(&flagged, "[release]\nmajor = 4\nminor = 0\ntiny = 0\n").unwrap();
    fs::write(&from_env, "[release]\nmajor = 9\nminor = 9\ntiny = 9\n").unwrap();
    let assert = vercompctl()
        .current_dir(dir.path())
        .env("VERCOMP_CONFIG", &from_env)
        .args(["show", "--config"])
        .arg(&flagged)
        .assert()
        .success();
    assert_eq!(stdout_of(&assert), "4.0.0\n");
}
