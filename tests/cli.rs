#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Run the binary from inside `dir`, so relative file names resolve there.
fn wonderland(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("wonderland").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("WONDERLAND_INSTRUCTIONS")
        .env_remove("WONDERLAND_MAPS");
    cmd
}

#[test]
fn prints_instructions_file_first() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("instructions.txt"), "Down the rabbit hole.\n").unwrap();

    wonderland(&dir)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Down the rabbit hole.\n\n---"))
        .stdout(predicate::str::contains("Available directions: north \n"));
}

#[test]
fn falls_back_to_default_instructions() {
    let dir = TempDir::new().unwrap();

    wonderland(&dir)
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Unable to open instructions.txt. Using default instructions.\nWelcome to the Game!\n",
        ));
}

#[test]
fn queen_ending_exits_cleanly() {
    let dir = TempDir::new().unwrap();

    wonderland(&dir)
        .write_stdin("north\nwest\ntalk queen\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with(
            "Game Over - The queen has killed you out of revenge for stealing her memories.\n",
        ));
}

#[test]
fn victory_exits_cleanly() {
    let dir = TempDir::new().unwrap();

    wonderland(&dir)
        .write_stdin("n\ne\nn\ntake key\ns\ne\n")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("You win!\n"));
}

#[test]
fn caterpillar_reads_maps_txt() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("maps.txt"), "X marks the spot\n").unwrap();

    wonderland(&dir)
        .write_stdin("n\ne\ns\ntalk caterpillar\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "get to where you need!\nX marks the spot\n",
        ));
}

#[test]
fn caterpillar_without_maps_txt() {
    let dir = TempDir::new().unwrap();

    wonderland(&dir)
        .write_stdin("n\ne\ns\ntalk caterpillar\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unable to open maps.txt.\n"));
}

#[test]
fn file_locations_come_from_the_environment() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("text")).unwrap();
    fs::write(dir.path().join("text/help.txt"), "Custom help.\n").unwrap();

    wonderland(&dir)
        .env("WONDERLAND_INSTRUCTIONS", "text/help.txt")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Custom help.\n"));
}
