use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn missing_data_dir_is_a_startup_failure() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("data");

    Command::cargo_bin("datavis")
        .unwrap()
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Data directory not found"));
}

#[test]
fn data_dir_that_is_a_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("data");
    std::fs::write(&file, "a,b\n1,2\n").unwrap();

    Command::cargo_bin("datavis")
        .unwrap()
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Data directory not found"));
}

#[test]
fn preview_rows_out_of_range_is_rejected() {
    Command::cargo_bin("datavis")
        .unwrap()
        .args(["--preview-rows", "100000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--preview-rows"));
}

#[test]
fn help_lists_options() {
    Command::cargo_bin("datavis")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--preview-rows"))
        .stdout(predicate::str::contains("--log"));
}
