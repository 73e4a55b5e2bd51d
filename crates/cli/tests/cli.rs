use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn stockpile(dir: &TempDir) -> Result<Command, Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("stockpile")?;
    cmd.arg("--file")
        .arg(dir.path().join("inventory.json"))
        .env_remove("STOCKPILE_FILE")
        .env_remove("STOCKPILE_LOG_FILE")
        .env_remove("RUST_LOG");
    Ok(cmd)
}

#[test]
fn adds_an_item_and_persists_it() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;

    stockpile(&dir)?
        .write_stdin("a\nBolts\n5\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No items in inventory."))
        .stdout(predicate::str::contains("Item [1] Bolts added."))
        .stdout(predicate::str::contains("[1] Bolts (Stock: 5)"));

    let contents = fs::read_to_string(dir.path().join("inventory.json"))?;
    assert_eq!(contents, "[\n  {\n    \"name\": \"Bolts\",\n    \"stock\": 5\n  }\n]\n");
    Ok(())
}

#[test]
fn state_survives_a_restart() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;

    stockpile(&dir)?
        .write_stdin("a\nBolts\n100\na\nNails\n50\n")
        .assert()
        .success();

    stockpile(&dir)?
        .write_stdin("d\n1\nq\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[2] Nails (Stock: 50)"))
        .stdout(predicate::str::contains("Item [1] deleted."));

    stockpile(&dir)?
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[1] Nails (Stock: 50)"))
        .stdout(predicate::str::contains("Bolts").not());
    Ok(())
}

#[test]
fn corrupt_file_is_a_fatal_error() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    fs::write(dir.path().join("inventory.json"), "[{\"name\":")?;

    stockpile(&dir)?
        .write_stdin("q\n")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("could not load inventory"))
        .stderr(predicate::str::contains("is corrupt"));

    assert_eq!(fs::read_to_string(dir.path().join("inventory.json"))?, "[{\"name\":");
    Ok(())
}

#[test]
fn log_file_receives_json_lines() -> Result<(), Box<dyn std::error::Error>> {
    let dir = TempDir::new()?;
    let log = dir.path().join("stockpile.log");

    stockpile(&dir)?
        .arg("--log-file")
        .arg(&log)
        .write_stdin("a\nBolts\n5\nq\n")
        .assert()
        .success();

    let contents = fs::read_to_string(&log)?;
    assert!(contents.lines().all(|line| line.starts_with('{')));
    assert!(contents.contains("inventory.item.added"));
    Ok(())
}
