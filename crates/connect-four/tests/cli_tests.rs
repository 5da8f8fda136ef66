//! Binary tests with piped stdin

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

/// Command isolated from the user's settings file and environment.
fn cmd(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("connect_four").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("CONNECT_FOUR_CONFIG")
        .env_remove("CONNECT_FOUR_PLAYERS")
        .env_remove("CONNECT_FOUR_ROWS")
        .env_remove("CONNECT_FOUR_COLS")
        .env_remove("CONNECT_FOUR_TOKENS_TO_WIN")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_help_lists_options() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--players"))
        .stdout(contains("--tokens-to-win"));
}

#[test]
fn test_piped_game_to_a_win() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["--players", "Alice", "Bob"])
        .write_stdin("0\n1\n0\n1\n0\n1\n0\n")
        .assert()
        .success()
        .stdout(contains("The winner is: Alice (a)"))
        .stdout(contains("\x1B[2J").not());
}

#[test]
fn test_custom_board_from_flags() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["-p", "Alice", "Bob", "-r", "3", "-c", "3", "-t", "3"])
        .write_stdin("1\n0\n0\n1\n0\n1\n2\n2\n2\n")
        .assert()
        .success()
        .stdout(contains(" 0  1  2 \n"))
        .stdout(contains("Draw!"));
}

#[test]
fn test_players_from_environment() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .env("CONNECT_FOUR_PLAYERS", "Ann Ben")
        .write_stdin("")
        .assert()
        .success()
        .stdout(contains("Ann's (a) Turn"));
}

#[test]
fn test_settings_file() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("settings.toml");
    fs::write(
        &path,
        "rows = 4\ncols = 4\ntokens_to_win = 3\nplayers = [\"Xena\", \"Yuri\"]\n",
    )
    .unwrap();

    cmd(&home)
        .arg("--config")
        .arg(&path)
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(contains(" 0  1  2  3 \n"))
        .stdout(contains("Xena's (a) Turn"))
        .stdout(contains("Game abandoned."));
}

#[test]
fn test_invalid_config_fails() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .args(["-p", "Alice", "Bob", "-r", "3", "-c", "3", "-t", "4"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(contains("Tokens to win (4) cannot be greater"));
}

#[test]
fn test_missing_players_fails() {
    let home = TempDir::new().unwrap();
    cmd(&home)
        .write_stdin("")
        .assert()
        .failure()
        .stderr(contains("Must have at least 2 players"));
}
