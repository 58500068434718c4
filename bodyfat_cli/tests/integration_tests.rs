//! Integration tests for the bodyfat binary.
//!
//! These tests drive complete sessions through stdin and verify:
//! - Workbook initialisation
//! - Rows appended to the measurements and results tables
//! - Retry behaviour on invalid answers
//! - Failure modes (missing workbook, missing table, closed input)

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const JANE: &str = "15/06/2023\nJane Doe\nF\n30\n65.0\nN\nN\n10,12,8,10,15,14,11\n";
const JOHN: &str = "01/02/2024\nJohn Smith\nM\n30\n80\nY\nY\n20,10,15,15,20,10,10\n";

const MEASUREMENTS_HEADER: &str =
    "date,name,gender,age,weight,tricep,chest,subscapular,midaxillary,abdominal,suprailiac,thigh\n";
const RESULTS_HEADER: &str = "body_fat_percent,body_fat_weight,lean_body_weight\n";

/// Helper to create a test data directory
fn setup_test_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

/// Helper to get the CLI binary, isolated from any user configuration
fn cli(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("bodyfat"));
    cmd.env("XDG_CONFIG_HOME", home.join("config"))
        .env("XDG_DATA_HOME", home.join("data"))
        .env_remove("RUST_LOG");
    cmd
}

fn workbook(data_dir: &Path) -> std::path::PathBuf {
    data_dir.join("body-fat-percent-calculator")
}

fn init(home: &Path, data_dir: &Path) {
    cli(home)
        .arg("init")
        .arg("--data-dir")
        .arg(data_dir)
        .assert()
        .success();
}

#[test]
fn test_cli_help() {
    let temp_dir = setup_test_dir();
    cli(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Jackson/Pollock 7-site body fat percent calculator",
        ));
}

#[test]
fn test_init_creates_tables() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().join("store");

    cli(temp_dir.path())
        .arg("init")
        .arg("--data-dir")
        .arg(&data_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Workbook ready"));

    let measurements = fs::read_to_string(workbook(&data_dir).join("measurements.csv")).unwrap();
    assert_eq!(measurements, MEASUREMENTS_HEADER);
    let results = fs::read_to_string(workbook(&data_dir).join("results.csv")).unwrap();
    assert_eq!(results, RESULTS_HEADER);
}

#[test]
fn test_run_without_workbook_fails() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().join("store");

    cli(temp_dir.path())
        .arg("run")
        .arg("--data-dir")
        .arg(&data_dir)
        .write_stdin(format!("{}N\n", JANE))
        .assert()
        .failure()
        .stderr(predicate::str::contains("workbook not found"));
}

#[test]
fn test_full_session_appends_both_rows() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().join("store");
    init(temp_dir.path(), &data_dir);

    cli(temp_dir.path())
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("--no-color")
        .write_stdin(format!("{}N\n", JANE))
        .assert()
        .success()
        .stdout(predicate::str::contains("Your body fat percent is 17.35 %"))
        .stdout(predicate::str::contains("Your body fat weight is 11.28 kg"))
        .stdout(predicate::str::contains("Your lean body mass is 53.72 kg"))
        .stdout(predicate::str::contains("Athletic Build category"))
        .stdout(predicate::str::contains(
            "Thank you for using the Body Fat Percent Calculator",
        ));

    let measurements = fs::read_to_string(workbook(&data_dir).join("measurements.csv")).unwrap();
    assert_eq!(
        measurements,
        format!(
            "{}15/06/2023,Jane Doe,F,30,65,10,12,8,10,15,14,11\n",
            MEASUREMENTS_HEADER
        )
    );

    let results = fs::read_to_string(workbook(&data_dir).join("results.csv")).unwrap();
    assert_eq!(results, format!("{}17.35,11.28,53.72\n", RESULTS_HEADER));
}

#[test]
fn test_invalid_answers_are_retried() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().join("store");
    init(temp_dir.path(), &data_dir);

    let script = concat!(
        "15-06-2023\n01/01/1850\n15/06/2023\n",
        "J0hn\nJohn Smith\n",
        "male\nM\n",
        "18\nabc\n45\n",
        "5\n90\n",
        "?\nN\nN\n",
        "1,2,3\n1,2,x,4,5,6,7\n81,1,1,1,1,1,1\n20,25,20,25,30,15,15\n",
        "N\n",
    );

    cli(temp_dir.path())
        .arg("run")
        .arg("--data-dir")
        .arg(&data_dir)
        .arg("--no-color")
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Incorrect date format. Try again."))
        .stdout(predicate::str::contains("The date is unrealistically old."))
        .stdout(predicate::str::contains("Invalid name."))
        .stdout(predicate::str::contains("Invalid input. Please enter M or F."))
        .stdout(predicate::str::contains("Please enter a valid age (between 18 and 130)."))
        .stdout(predicate::str::contains("Weight is unrealistically low."))
        .stdout(predicate::str::contains("you provided 3"))
        .stdout(predicate::str::contains("are not a number"))
        .stdout(predicate::str::contains("exceeds 80 mm"));

    let measurements = fs::read_to_string(workbook(&data_dir).join("measurements.csv")).unwrap();
    assert!(measurements.ends_with("15/06/2023,John Smith,M,45,90,20,25,20,25,30,15,15\n"));
}

#[test]
fn test_two_iterations_append_two_rows_each() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().join("store");
    init(temp_dir.path(), &data_dir);

    cli(temp_dir.path())
        .arg("--data-dir")
        .arg(&data_dir)
        .write_stdin(format!("{}Y\n{}N\n", JANE, JOHN))
        .assert()
        .success()
        .stdout(predicate::str::contains("Equipment: Skinfold caliper."));

    let mut reader =
        csv::Reader::from_path(workbook(&data_dir).join("measurements.csv")).unwrap();
    assert_eq!(reader.records().count(), 2);

    let mut reader = csv::Reader::from_path(workbook(&data_dir).join("results.csv")).unwrap();
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[1][0], "14.63");
    assert_eq!(&rows[1][1], "11.7");
    assert_eq!(&rows[1][2], "68.3");
}

#[test]
fn test_dry_run_does_not_write() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().join("store");

    cli(temp_dir.path())
        .arg("run")
        .arg("--dry-run")
        .arg("--data-dir")
        .arg(&data_dir)
        .write_stdin(format!("{}N\n", JANE))
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!data_dir.exists());
}

#[test]
fn test_closed_input_fails() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().join("store");
    init(temp_dir.path(), &data_dir);

    cli(temp_dir.path())
        .arg("--data-dir")
        .arg(&data_dir)
        .write_stdin("15/06/2023\nJane Doe\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("InputClosed"));

    let measurements = fs::read_to_string(workbook(&data_dir).join("measurements.csv")).unwrap();
    assert_eq!(measurements, MEASUREMENTS_HEADER);
}

#[test]
fn test_missing_results_table_aborts_after_measurement() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().join("store");
    init(temp_dir.path(), &data_dir);
    fs::remove_file(workbook(&data_dir).join("results.csv")).unwrap();

    cli(temp_dir.path())
        .arg("--data-dir")
        .arg(&data_dir)
        .write_stdin(format!("{}N\n", JANE))
        .assert()
        .failure()
        .stderr(predicate::str::contains("table not found"));

    let mut reader =
        csv::Reader::from_path(workbook(&data_dir).join("measurements.csv")).unwrap();
    assert_eq!(reader.records().count(), 1);
}

#[test]
fn test_config_file_table_names() {
    let temp_dir = setup_test_dir();
    let data_dir = temp_dir.path().join("store");
    let config_path = temp_dir.path().join("bodyfat.toml");
    fs::write(
        &config_path,
        format!(
            "[store]\ndata_dir = {:?}\nworkbook = \"clinic\"\nmeasurements_table = \"inputs\"\nresults_table = \"outputs\"\n\n[display]\ncolor = false\n",
            data_dir.display().to_string()
        ),
    )
    .unwrap();

    cli(temp_dir.path())
        .arg("init")
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success();

    cli(temp_dir.path())
        .arg("--config")
        .arg(&config_path)
        .write_stdin(format!("{}N\n", JANE))
        .assert()
        .success()
        .stdout(predicate::str::contains("Updating inputs worksheet..."))
        .stdout(predicate::str::contains("\u{1b}[").not());

    let outputs = fs::read_to_string(data_dir.join("clinic").join("outputs.csv")).unwrap();
    assert!(outputs.ends_with("17.35,11.28,53.72\n"));
}
