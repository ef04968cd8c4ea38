use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn demo_prints_titles_and_contents_in_insertion_order() {
    let mut cmd = Command::cargo_bin("artz").unwrap();
    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();

    let a1 = stdout.find("Article 1").expect("Article 1 missing");
    let a2 = stdout.find("Article 2").expect("Article 2 missing");
    let a3 = stdout.find("Article 3").expect("Article 3 missing");
    assert!(a1 < a2 && a2 < a3);

    // Each title is followed by its content and a blank line.
    assert!(stdout.contains("High-level modules"));
    assert!(stdout.contains("depend on abstractions.\n\n"));
}

#[test]
fn demo_title_line_precedes_its_content_line() {
    let mut cmd = Command::cargo_bin("artz").unwrap();
    let output = cmd.assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();

    let lines: Vec<&str> = stdout.lines().collect();
    let title_pos = lines
        .iter()
        .position(|l| l.contains("Article 1"))
        .expect("Article 1 line missing");
    assert!(lines[title_pos + 1].contains("High-level modules"));
    assert_eq!(lines[title_pos + 2], "");
}

#[test]
fn file_backend_runs_clean_and_prints_nothing() {
    let mut cmd = Command::cargo_bin("artz").unwrap();
    cmd.arg("--backend")
        .arg("file")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn json_output_is_an_array_of_articles() {
    let mut cmd = Command::cargo_bin("artz").unwrap();
    let output = cmd.arg("--json").assert().success().get_output().stdout.clone();

    let articles: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let articles = articles.as_array().expect("expected a JSON array");
    assert_eq!(articles.len(), 3);
    assert_eq!(articles[0]["title"], "Article 1");
    assert!(articles[0]["content"]
        .as_str()
        .unwrap()
        .contains("High-level modules"));
}

#[test]
fn json_output_on_file_backend_is_empty_array() {
    let mut cmd = Command::cargo_bin("artz").unwrap();
    let output = cmd
        .arg("--backend")
        .arg("file")
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let articles: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(articles.as_array().map(|a| a.len()), Some(0));
}
