use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_javadoc-gen")))
}

fn fixture_path(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).unwrap()
}

/// Copy the Employee fixture into `dir/rel`.
fn seed(dir: &Path, rel: &str) -> std::path::PathBuf {
    let path = dir.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, fixture("Employee.java")).unwrap();
    path
}

// -- stdin mode --

#[test]
fn stdin_mode_documents_employee() {
    let assert = cmd().write_stdin(fixture("Employee.java")).assert().success();
    let output = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(output, fixture("Employee.expected.java"));
}

#[test]
fn stdin_mode_is_idempotent() {
    cmd()
        .write_stdin(fixture("Employee.expected.java"))
        .assert()
        .success()
        .stdout(predicate::str::diff(fixture("Employee.expected.java")));
}

// -- file mode --

#[test]
fn file_mode_rewrites_and_backs_up() {
    let dir = TempDir::new().unwrap();
    let path = seed(dir.path(), "Employee.java");

    cmd()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing: Employee.java"))
        .stdout(predicate::str::contains("added 13 doc comment(s)"))
        .stdout(predicate::str::contains("Files processed: 1"))
        .stdout(predicate::str::contains("Files updated: 1"))
        .stdout(predicate::str::contains("Doc comments added: 13"));

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        fixture("Employee.expected.java")
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("Employee.java.backup")).unwrap(),
        fixture("Employee.java")
    );
}

#[test]
fn file_mode_second_run_changes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = seed(dir.path(), "Employee.java");

    cmd().args(["--no-backup"]).arg(&path).assert().success();
    cmd()
        .args(["--no-backup"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("already documented or no changes needed"))
        .stdout(predicate::str::contains("Files updated: 0"))
        .stdout(predicate::str::contains("Doc comments added: 0"));

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        fixture("Employee.expected.java")
    );
    assert!(!dir.path().join("Employee.java.backup").exists());
}

#[test]
fn file_mode_walks_nested_directories() {
    let dir = TempDir::new().unwrap();
    let a = seed(dir.path(), "com/example/A.java");
    let b = seed(dir.path(), "com/example/deep/B.java");
    fs::write(dir.path().join("README.txt"), "public class NotJava {\n").unwrap();

    cmd()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Files processed: 2"))
        .stdout(predicate::str::contains("Doc comments added: 26"));

    assert_eq!(fs::read_to_string(a).unwrap(), fixture("Employee.expected.java"));
    assert_eq!(fs::read_to_string(b).unwrap(), fixture("Employee.expected.java"));
    assert_eq!(
        fs::read_to_string(dir.path().join("README.txt")).unwrap(),
        "public class NotJava {\n"
    );
}

#[test]
fn file_mode_dry_run_leaves_files_alone() {
    let dir = TempDir::new().unwrap();
    let path = seed(dir.path(), "Employee.java");

    cmd()
        .arg("--dry-run")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("would add 13 doc comment(s)"))
        .stdout(predicate::str::contains("Files that would be updated: 1"))
        .stdout(predicate::str::contains("Doc comments that would be added: 13"));

    assert_eq!(fs::read_to_string(&path).unwrap(), fixture("Employee.java"));
    assert!(!dir.path().join("Employee.java.backup").exists());
}

#[test]
fn file_mode_custom_backup_suffix() {
    let dir = TempDir::new().unwrap();
    let path = seed(dir.path(), "Employee.java");

    cmd()
        .args(["--backup-suffix", ".orig"])
        .arg(&path)
        .assert()
        .success();

    assert!(dir.path().join("Employee.java.orig").exists());
    assert!(!dir.path().join("Employee.java.backup").exists());
}

#[test]
fn file_mode_glob_pattern() {
    let dir = TempDir::new().unwrap();
    seed(dir.path(), "Employee.java");
    let pattern = format!("{}/*.java", dir.path().display());

    cmd()
        .arg(pattern)
        .args(["--quiet", "--no-backup"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing:").not())
        .stdout(predicate::str::contains("Doc comments added: 13"));
}

#[test]
fn file_mode_unreadable_file_does_not_stop_the_run() {
    let dir = TempDir::new().unwrap();
    let good = seed(dir.path(), "Good.java");
    let bad = dir.path().join("Bad.java");
    fs::write(&bad, [0xff, 0xfe, 0x00, b'x']).unwrap();

    cmd()
        .arg(dir.path())
        .arg("--no-backup")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Files processed: 2"))
        .stdout(predicate::str::contains("Files failed: 1"))
        .stderr(predicate::str::contains("failed to read"));

    assert_eq!(fs::read_to_string(good).unwrap(), fixture("Employee.expected.java"));
}

#[test]
fn file_mode_warns_on_unmatched_pattern() {
    cmd()
        .arg("/nonexistent/javadoc-gen-test/*.java")
        .assert()
        .success()
        .stdout(predicate::str::contains("Files processed: 0"))
        .stderr(predicate::str::contains("no files matched"));
}
