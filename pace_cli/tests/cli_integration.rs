use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn write_file(dir: &tempfile::TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).expect("create file");
    f.write_all(contents.as_bytes()).expect("write file");
    path
}

#[test]
fn replay_reports_single_alert_for_slow_trace() {
    let dir = tempfile::tempdir().expect("tempdir");
    let prefs = write_file(
        &dir,
        "prefs.toml",
        "active = true\nmin_step_freq = \"2.0\"\nbest_pace = \"0.0\"\n",
    );
    // 3 steps per 2-second sample: pace 1.5, slow but moving.
    let trace = write_file(&dir, "trace.txt", "0 0\n2000000000 3\n4000000000 6\n");

    Command::cargo_bin("pacekeeper")
        .expect("binary")
        .args(["replay", "--prefs"])
        .arg(&prefs)
        .arg("--trace")
        .arg(&trace)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("\"alerts\":1")
                .and(predicate::str::contains("\"samples\":3"))
                .and(predicate::str::contains("\"best_pace\":1.5")),
        );
}

#[test]
fn replay_skips_comments_and_malformed_lines() {
    let dir = tempfile::tempdir().expect("tempdir");
    let prefs = write_file(&dir, "prefs.toml", "active = false\n");
    let trace = write_file(
        &dir,
        "trace.txt",
        "# recorded 2016-11-12\n0 0\nnot a record\n1000000000 1\n\n",
    );

    Command::cargo_bin("pacekeeper")
        .expect("binary")
        .args(["replay", "--prefs"])
        .arg(&prefs)
        .arg("--trace")
        .arg(&trace)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"samples\":2"));
}

#[test]
fn replay_logs_persisted_best_pace_in_stored_text_form() {
    let dir = tempfile::tempdir().expect("tempdir");
    let prefs = write_file(&dir, "prefs.toml", "active = false\nbest_pace = \"0.0\"\n");
    let trace = write_file(&dir, "trace.txt", "0 0\n2000000000 3\n");

    Command::cargo_bin("pacekeeper")
        .expect("binary")
        .args(["--json", "replay", "--prefs"])
        .arg(&prefs)
        .arg("--trace")
        .arg(&trace)
        .assert()
        .success()
        .stderr(
            predicate::str::contains("persist best pace")
                .and(predicate::str::contains("\"stored\":\"1.5\"")),
        );
}

#[test]
fn check_accepts_valid_snapshot() {
    let dir = tempfile::tempdir().expect("tempdir");
    let prefs = write_file(&dir, "prefs.toml", "active = true\nmin_step_freq = \"1.8\"\n");

    Command::cargo_bin("pacekeeper")
        .expect("binary")
        .args(["check", "--prefs"])
        .arg(&prefs)
        .assert()
        .success()
        .stdout(predicate::str::contains("ok"));
}

#[test]
fn check_rejects_malformed_numeric_text() {
    let dir = tempfile::tempdir().expect("tempdir");
    let prefs = write_file(&dir, "prefs.toml", "min_step_freq = \"fast\"\n");

    Command::cargo_bin("pacekeeper")
        .expect("binary")
        .args(["check", "--prefs"])
        .arg(&prefs)
        .assert()
        .failure()
        .stderr(predicate::str::contains("min_step_freq"));
}

#[test]
fn replay_fails_cleanly_on_missing_trace() {
    let dir = tempfile::tempdir().expect("tempdir");
    let prefs = write_file(&dir, "prefs.toml", "active = true\n");

    Command::cargo_bin("pacekeeper")
        .expect("binary")
        .args(["replay", "--prefs"])
        .arg(&prefs)
        .arg("--trace")
        .arg(dir.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading trace"));
}
