mod common;

use assert_cmd::Command;
use common::Scratch;
use predicates::prelude::*;

fn cli() -> Command {
    Command::cargo_bin("create-express-app").expect("binary builds")
}

#[test]
fn test_missing_argument_prints_usage() {
    cli()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_version_flag() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_capitalized_name_is_rejected_without_creating_anything() {
    let scratch = Scratch::new();

    cli()
        .current_dir(scratch.path())
        .arg("MyApp")
        .assert()
        .failure()
        .stderr(predicate::str::contains("capital letters"));

    assert!(!scratch.path().join("MyApp").exists());
}

#[test]
fn test_reserved_name_is_rejected_without_creating_anything() {
    let scratch = Scratch::new();

    cli()
        .current_dir(scratch.path())
        .arg("express")
        .assert()
        .failure()
        .stderr(predicate::str::contains("reserved"));

    assert!(!scratch.path().join("express").exists());
}

#[test]
fn test_all_name_violations_are_reported_together() {
    let scratch = Scratch::new();

    cli()
        .current_dir(scratch.path())
        .arg("_My App")
        .assert()
        .failure()
        .stderr(predicate::str::contains("underscore"))
        .stderr(predicate::str::contains("capital letters"))
        .stderr(predicate::str::contains("URL-friendly"));
}

#[test]
fn test_conflicting_file_aborts_before_manifest_write() {
    let scratch = Scratch::new();
    let app = scratch.path().join("app");
    std::fs::create_dir_all(&app).unwrap();
    std::fs::write(app.join("notes.txt"), "keep me").unwrap();

    cli()
        .current_dir(scratch.path())
        .arg("app")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could conflict"))
        .stderr(predicate::str::contains("notes.txt (file)"));

    assert!(!app.join("package.json").exists());
    assert!(app.join("notes.txt").exists());
}

#[test]
fn test_conflicting_directory_is_tagged() {
    let scratch = Scratch::new();
    let app = scratch.path().join("app");
    std::fs::create_dir_all(app.join("src")).unwrap();

    cli()
        .current_dir(scratch.path())
        .arg("app")
        .assert()
        .failure()
        .stderr(predicate::str::contains("src (directory)"));
}
