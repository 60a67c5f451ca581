//! Error handling integration tests

mod common;

use predicates::prelude::*;

#[test]
fn test_missing_directory_exits_with_error() {
    let dir = common::TestDir::new();
    let missing = dir.path.join("does-not-exist");

    common::despace_cmd_for_dir(&missing)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Directory not found"))
        .stdout(predicate::str::contains("Processing directory").not());
}

#[test]
fn test_file_instead_of_directory() {
    let dir = common::TestDir::new();
    dir.touch("pic one.png");

    common::despace_cmd_for_dir(&dir.path.join("pic one.png"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Not a directory"));

    assert!(dir.file_exists("pic one.png"));
}

#[test]
fn test_unknown_shell_fails() {
    common::despace_cmd()
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell: tcsh"));
}

#[cfg(unix)]
#[test]
fn test_unplannable_file_is_skipped_and_run_continues() {
    let dir = common::TestDir::new();
    let long = "x".repeat(248);
    // a_b{long}_1.png would be 257 bytes, over the file name limit
    let spaced = format!("a b{long}.png");
    dir.touch(&spaced);
    dir.touch(&format!("a_b{long}.png"));
    dir.touch("good one.png");

    common::despace_cmd_for_dir(&dir.path)
        .assert()
        .code(0)
        .stderr(predicate::str::contains("Skipping"))
        .stdout(predicate::str::contains("Renamed: good one.png -> good_one.png"))
        .stdout(predicate::str::contains("1 file(s) processed. 1 failed."));

    assert!(dir.file_exists(&spaced));
    assert!(dir.file_exists("good_one.png"));
}

#[cfg(unix)]
#[test]
fn test_per_file_failure_does_not_abort() {
    use std::os::unix::fs::PermissionsExt;

    let dir = common::TestDir::new();
    dir.touch("locked/a b.png");
    dir.touch("open/c d.png");
    let locked = dir.path.join("locked");
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o555))
        .expect("Failed to set permissions");

    // Running as root ignores directory permissions
    let probe = locked.join("probe");
    if std::fs::write(&probe, b"").is_ok() {
        std::fs::remove_file(&probe).expect("Failed to remove probe");
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to restore permissions");
        return;
    }

    let assert = common::despace_cmd_for_dir(&dir.path).arg("-r").assert();
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755))
        .expect("Failed to restore permissions");

    assert
        .code(0)
        .stderr(predicate::str::contains("Skipping"))
        .stdout(predicate::str::contains("1 failed"));
    assert!(dir.file_exists("locked/a b.png"));
    assert!(dir.file_exists("open/c_d.png"));
}
