use assert_cmd::Command;
use predicates::prelude::*;

fn teller(home: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("teller").unwrap();
    // Keep settings and the database inside the test sandbox.
    cmd.env("HOME", home);
    cmd
}

#[test]
fn convert_drops_bad_rows_and_keeps_order() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("statement.csv");
    std::fs::write(
        &input,
        "01/15/2025,COFFEE,-4.50\n\
         2025-01-16,PAYCHECK,2500.00\n\
         31/31/2024,BAD DATE,-1.00\n\
         01/18/2025,SHORT\n",
    )
    .unwrap();
    let output = dir.path().join("out.csv");

    teller(dir.path())
        .args(["convert"])
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("2 of 4 rows"));

    let text = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "date,description,amount",
            "2025-01-15,COFFEE,-4.5",
            "2025-01-16,PAYCHECK,2500.0",
        ]
    );
}

#[test]
fn convert_with_remapped_columns() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("statement.csv");
    std::fs::write(&input, "COFFEE,-4.50,21-03-2024\n").unwrap();
    let output = dir.path().join("out.csv");

    teller(dir.path())
        .args(["convert"])
        .arg(&input)
        .args(["--date-col", "2", "--description-col", "0", "--amount-col", "1"])
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.contains("2024-03-21,COFFEE,-4.5"));
}

#[test]
fn convert_fails_when_nothing_survives() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("statement.csv");
    std::fs::write(&input, "not a date,STUFF,9.99\n").unwrap();

    teller(dir.path())
        .args(["convert"])
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No valid transactions found"));
}

#[test]
fn import_then_list_shows_policy_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("data");
    let input = dir.path().join("chase_2024.csv");
    std::fs::write(
        &input,
        "date,description,amount\n03/21/2024,BOOKS,-30.00\nMarch 3 2024,REFUND,12.00\n",
    )
    .unwrap();

    teller(dir.path())
        .args(["init", "--data-dir"])
        .arg(&data_dir)
        .assert()
        .success();

    teller(dir.path())
        .args(["import"])
        .arg(&input)
        .arg("--headers")
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 transactions into 'chase_2024'"))
        .stdout(predicate::str::contains("Store now holds 2 transactions."));

    teller(dir.path())
        .args(["list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-03"))
        .stdout(predicate::str::contains("2024-03-21"))
        .stdout(predicate::str::contains("Uncategorized"))
        .stdout(predicate::str::contains("chase_2024"));
}

#[test]
fn columns_lists_positions_and_headers() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("statement.csv");
    std::fs::write(&input, "posted,memo,value\n01/15/2025,COFFEE,-4.50\n").unwrap();

    teller(dir.path())
        .args(["columns"])
        .arg(&input)
        .arg("--headers")
        .assert()
        .success()
        .stdout(predicate::str::contains("posted"))
        .stdout(predicate::str::contains("memo"))
        .stdout(predicate::str::contains("value"));
}
