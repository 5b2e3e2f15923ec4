//! Integration tests for `tfc-tui` argument handling.
//!
//! Every case here fails before the terminal is set up.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const BANK: &str = r#"{
    "certification_title": "AWS",
    "questions": [
        {"learning_path_title": "Basics", "questions": [
            {"question": "Q1", "answers": ["A", "B"], "correct_answer": "B", "explanation": ""}
        ]},
        {"learning_path_title": "Billing", "questions": [
            {"question": "Q2", "answers": ["C"], "correct_answer": "C", "explanation": ""}
        ]}
    ]
}"#;

fn bank() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("questions.json");
    fs::write(&file, BANK).unwrap();
    (dir, file)
}

fn tfc_tui() -> Command {
    Command::cargo_bin("tfc-tui").unwrap()
}

#[test]
fn rejects_zero_path() {
    let (_dir, file) = bank();
    tfc_tui()
        .args(["-p", "0", "-f", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("path numbers start at 1"));
}

#[test]
fn rejects_out_of_range_path() {
    let (_dir, file) = bank();
    tfc_tui()
        .args(["-p", "9", "-f", file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no learning path 9 (the bank has 2)"));
}
