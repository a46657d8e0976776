use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{init_db_with_data, rbt, setup_test_db, temp_out};

#[test]
fn test_export_csv() {
    let db_path = setup_test_db("export_csv");
    init_db_with_data(&db_path);

    let out = temp_out("export_csv", "csv");

    rbt()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.starts_with("date,bmi"));
    assert!(content.contains("22.86"));
    assert!(content.contains("26.12"));
}

#[test]
fn test_export_json() {
    let db_path = setup_test_db("export_json");
    init_db_with_data(&db_path);

    let out = temp_out("export_json", "json");

    rbt()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &out,
        ])
        .assert()
        .success()
        .stdout(contains("JSON export completed"));

    let content = fs::read_to_string(&out).expect("read json");
    let parsed: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let points = parsed.as_array().expect("array");
    assert_eq!(points.len(), 2);
    assert_eq!(points[0]["bmi"], 22.86);
    assert!(points[0]["date"].is_string());
}

#[test]
fn test_export_requires_absolute_path() {
    let db_path = setup_test_db("export_relative");
    init_db_with_data(&db_path);

    rbt()
        .args([
            "--db",
            &db_path,
            "export",
            "--format",
            "csv",
            "--file",
            "relative_out.csv",
        ])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_empty_store_writes_nothing() {
    let db_path = setup_test_db("export_empty");

    rbt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    let out = temp_out("export_empty", "csv");

    rbt()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("No BMI data available to export"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_export_refuses_overwrite_without_confirmation() {
    let db_path = setup_test_db("export_no_overwrite");
    init_db_with_data(&db_path);

    let out = temp_out("export_no_overwrite", "csv");
    fs::write(&out, "keep me").expect("seed existing file");

    rbt()
        .args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("not overwritten"));

    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");
}

#[test]
fn test_export_force_overwrites() {
    let db_path = setup_test_db("export_force");
    init_db_with_data(&db_path);

    let out = temp_out("export_force", "csv");
    fs::write(&out, "stale").expect("seed existing file");

    rbt()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &out, "--force",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed").and(contains("Exporting to CSV")));

    let content = fs::read_to_string(&out).expect("read csv");
    assert!(content.starts_with("date,bmi"));
}
