//! End-to-end tests of the CLI commands via the compiled binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn echoes() -> Command {
    Command::cargo_bin("echoes").unwrap()
}

// ---------------------------------------------------------------------------
// check
// ---------------------------------------------------------------------------

#[test]
fn check_passes_shipped_script() {
    echoes()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("All checks passed"));
}

// ---------------------------------------------------------------------------
// stats
// ---------------------------------------------------------------------------

#[test]
fn stats_reports_content_counts() {
    echoes()
        .arg("stats")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Nodes")
                .and(predicate::str::contains("21"))
                .and(predicate::str::contains("Characters"))
                .and(predicate::str::contains("Echoes of the Forgotten Tower")),
        );
}

// ---------------------------------------------------------------------------
// endings
// ---------------------------------------------------------------------------

#[test]
fn endings_with_no_save_file_shows_all_locked() {
    let dir = TempDir::new().unwrap();
    echoes()
        .args(["endings", "-s", dir.path().join("save.json").to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("0 / 5 endings found")
                .and(predicate::str::contains("the Scholar")),
        );
}

#[test]
fn endings_announces_the_fifth_door_when_base_set_is_complete() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("save.json");
    fs::write(
        &save,
        r#"{"ending_scholar":true,"ending_guardian":true,"ending_liberator":true,"ending_shadow":true,"ending_true":false}"#,
    )
    .unwrap();

    echoes()
        .args(["endings", "-s", save.to_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("4 / 5 endings found")
                .and(predicate::str::contains("The fifth door awaits")),
        );
}

#[test]
fn endings_rejects_corrupt_save_file() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("save.json");
    fs::write(&save, "not json").unwrap();

    echoes()
        .args(["endings", "-s", save.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("save file format"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_knowledge_path_writes_the_save_file() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("save.json");

    // library, Elara's echo, Door of Knowledge
    echoes()
        .args(["play", "-s", save.to_str().unwrap(), "-n", "Tester"])
        .write_stdin("1\n1\n1\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("ENDING ONE")
                .and(predicate::str::contains("New ending unlocked: the Scholar"))
                .and(predicate::str::contains("1 / 5 endings found")),
        );

    let saved = fs::read_to_string(&save).unwrap();
    assert!(saved.contains(r#""ending_scholar": true"#));
    assert!(saved.contains(r#""ending_true": false"#));
}

#[test]
fn play_interpolates_the_player_name() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("save.json");

    echoes()
        .args(["play", "-s", save.to_str().unwrap(), "-n", "Rell"])
        .write_stdin("1\n1\n1\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("You must be Rell")
                .and(predicate::str::contains("[player_name]").not()),
        );
}

#[test]
fn play_reprompts_on_invalid_input() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("save.json");

    // "9" and "no" are out of range at the first choice; "1" proceeds.
    echoes()
        .args(["play", "-s", save.to_str().unwrap(), "-n", "Tester"])
        .write_stdin("9\nno\n1\n1\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter a number between 1 and 2"));
}

#[test]
fn play_has_no_fifth_option_on_a_fresh_save() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("save.json");

    // At chapter 3 the fresh session lists 4 doors; "5" is rejected.
    echoes()
        .args(["play", "-s", save.to_str().unwrap(), "-n", "Tester"])
        .write_stdin("1\n1\n5\n4\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Enter a number between 1 and 4")
                .and(predicate::str::contains("The fifth door").not())
                .and(predicate::str::contains("ENDING FOUR")),
        );
}

#[test]
fn play_offers_the_fifth_door_when_unlocked() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("save.json");
    fs::write(
        &save,
        r#"{"ending_scholar":true,"ending_guardian":true,"ending_liberator":true,"ending_shadow":true}"#,
    )
    .unwrap();

    echoes()
        .args(["play", "-s", save.to_str().unwrap(), "-n", "Tester"])
        .write_stdin("1\n1\n5\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("The fifth door")
                .and(predicate::str::contains("TRUE ENDING"))
                .and(predicate::str::contains("5 / 5 endings found")),
        );

    let saved = fs::read_to_string(&save).unwrap();
    assert!(saved.contains(r#""ending_true": true"#));
}

#[test]
fn play_announces_the_true_route_on_the_fourth_ending() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("save.json");
    fs::write(
        &save,
        r#"{"ending_scholar":true,"ending_guardian":true,"ending_liberator":true}"#,
    )
    .unwrap();

    // Door of Power completes the base set.
    echoes()
        .args(["play", "-s", save.to_str().unwrap(), "-n", "Tester"])
        .write_stdin("2\n2\n4\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("New ending unlocked: the Shadow")
                .and(predicate::str::contains("Something has changed at the summit")),
        );
}

#[test]
fn play_prompts_for_a_name_when_not_given() {
    let dir = TempDir::new().unwrap();
    let save = dir.path().join("save.json");

    echoes()
        .args(["play", "-s", save.to_str().unwrap()])
        .write_stdin("\n1\n1\n1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("You must be Aiden"));
}
