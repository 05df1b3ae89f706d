use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

fn slicer() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_slicer"));
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn no_arguments_prints_usage_and_succeeds() {
    let tmp = tempdir().unwrap();

    slicer()
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Pass a feature name"));

    assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0, "nothing should be created");
}

#[test]
fn creates_feature_inside_features_dir_without_warning() {
    let tmp = tempdir().unwrap();
    let features = tmp.path().join("features");
    fs::create_dir(&features).unwrap();

    slicer()
        .current_dir(&features)
        .arg("billing")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("creating mod.rs...")
                .and(predicate::str::contains("creating cli.rs..."))
                .and(predicate::str::contains("creating handler.rs..."))
                .and(predicate::str::contains("Warning").not()),
        );

    for file in ["mod.rs", "cli.rs", "handler.rs"] {
        assert!(features.join("billing").join(file).is_file(), "{file} should exist");
    }
}

#[test]
fn progress_lines_follow_template_order() {
    let tmp = tempdir().unwrap();
    let features = tmp.path().join("features");
    fs::create_dir(&features).unwrap();

    let output = slicer().current_dir(&features).arg("billing").output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    let pos = |needle: &str| stdout.find(needle).expect("progress line missing");
    assert!(pos("creating mod.rs") < pos("creating cli.rs"));
    assert!(pos("creating cli.rs") < pos("creating handler.rs"));
}

#[test]
fn outside_features_dir_warns_but_still_creates() {
    let tmp = tempdir().unwrap();
    let src = tmp.path().join("src");
    fs::create_dir(&src).unwrap();

    slicer()
        .current_dir(&src)
        .arg("orders")
        .assert()
        .success()
        .stdout(predicate::str::contains("Warning: present working dir"));

    assert!(src.join("orders").join("handler.rs").is_file());
}

#[test]
fn rerun_keeps_existing_content() {
    let tmp = tempdir().unwrap();
    let dir = tmp.path().join("orders");
    fs::create_dir(&dir).unwrap();
    fs::write(dir.join("mod.rs"), "pub mod handler;\n").unwrap();

    slicer().current_dir(tmp.path()).arg("orders").assert().success();
    slicer().current_dir(tmp.path()).arg("orders").assert().success();

    assert_eq!(fs::read_to_string(dir.join("mod.rs")).unwrap(), "pub mod handler;\n");
    assert!(dir.join("cli.rs").is_file());
}

#[test]
fn partial_failure_creates_the_rest_and_exits_non_zero() {
    let tmp = tempdir().unwrap();

    slicer()
        .current_dir(tmp.path())
        .args(["a", "bad/name", "b"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Failed to create feature 'bad/name'"));

    assert!(tmp.path().join("a").join("mod.rs").is_file());
    assert!(tmp.path().join("b").join("mod.rs").is_file());
    assert!(!tmp.path().join("bad").exists());
}

#[test]
fn quiet_hides_progress_but_not_failures() {
    let tmp = tempdir().unwrap();
    let features = tmp.path().join("features");
    fs::create_dir(&features).unwrap();

    slicer()
        .current_dir(&features)
        .args(["--quiet", "ok", ".."])
        .assert()
        .failure()
        .stdout(
            predicate::str::contains("creating")
                .not()
                .and(predicate::str::contains("Failed to create feature '..'")),
        );

    assert!(features.join("ok").join("cli.rs").is_file());
}

#[cfg(unix)]
#[test]
fn non_utf8_name_fails_alone() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let tmp = tempdir().unwrap();

    slicer()
        .current_dir(tmp.path())
        .arg("a")
        .arg(OsStr::from_bytes(b"b\xff"))
        .arg("c")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Failed to create feature 'b\u{fffd}'"))
        .stdout(predicate::str::contains("not valid UTF-8"));

    assert!(tmp.path().join("a").join("mod.rs").is_file());
    assert!(tmp.path().join("c").join("handler.rs").is_file());
}

#[test]
fn log_dir_receives_log_file() {
    let tmp = tempdir().unwrap();
    let logs = tmp.path().join("logs");

    slicer()
        .current_dir(tmp.path())
        .arg("-vv")
        .arg("--log-dir")
        .arg(&logs)
        .args(["--log-rotation", "never", "audit"])
        .assert()
        .success();

    let content = fs::read_to_string(logs.join("slicer-cli.log")).expect("unrotated log file");
    assert!(content.contains("Feature scaffolded"));
}

#[test]
fn invalid_log_keep_reports_log_dir_and_creates_nothing() {
    let tmp = tempdir().unwrap();

    slicer()
        .current_dir(tmp.path())
        .args(["--log-dir", "logs", "--log-keep", "0", "audit"])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("--log-dir logs")
                .and(predicate::str::contains("max_files must be greater than zero")),
        );

    assert!(!tmp.path().join("audit").exists());
}
