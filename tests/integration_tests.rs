use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db_with_data, rbt, setup_test_db};

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("init");

    rbt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_add_prints_bmi_and_category() {
    let db_path = setup_test_db("add_ok");

    rbt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rbt()
        .args(["--db", &db_path, "add", "70", "175"])
        .assert()
        .success()
        .stdout(contains("22.86").and(contains("Normal weight")));
}

#[test]
fn test_add_rejects_non_positive_weight() {
    let db_path = setup_test_db("add_bad_weight");

    rbt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rbt()
        .args(["--db", &db_path, "add", "--", "-70", "175"])
        .assert()
        .failure()
        .stderr(contains("Invalid weight"));

    rbt()
        .args(["--db", &db_path, "add", "0", "175"])
        .assert()
        .failure()
        .stderr(contains("Invalid weight"));
}

#[test]
fn test_add_rejects_non_positive_height() {
    let db_path = setup_test_db("add_bad_height");

    rbt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rbt()
        .args(["--db", &db_path, "add", "70", "0"])
        .assert()
        .failure()
        .stderr(contains("Invalid height"));

    // nothing must have been written
    rbt()
        .args(["--db", &db_path, "trend"])
        .assert()
        .success()
        .stdout(contains("No BMI data available"));
}

#[test]
fn test_add_rejects_non_numeric_input() {
    let db_path = setup_test_db("add_non_numeric");

    rbt()
        .args(["--db", &db_path, "add", "seventy", "175"])
        .assert()
        .failure();
}

#[test]
fn test_add_without_height_needs_config_default() {
    let db_path = setup_test_db("add_no_height");

    rbt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // no default_height_cm configured → the reading is refused
    rbt()
        .args(["--db", &db_path, "add", "70"])
        .assert()
        .failure()
        .stderr(contains("Invalid height"));
}

#[test]
fn test_trend_on_empty_store() {
    let db_path = setup_test_db("trend_empty");

    rbt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    // empty sequence is a notice, not an error
    rbt()
        .args(["--db", &db_path, "trend"])
        .assert()
        .success()
        .stdout(contains("No BMI data available to visualize."));
}

#[test]
fn test_trend_shows_ordered_series() {
    let db_path = setup_test_db("trend_series");
    init_db_with_data(&db_path);

    rbt()
        .args(["--db", &db_path, "trend"])
        .assert()
        .success()
        .stdout(contains("2 readings").and(contains("22.86")).and(contains("26.12")));
}

#[test]
fn test_list_shows_readings_with_ids() {
    let db_path = setup_test_db("list_all");
    init_db_with_data(&db_path);

    rbt()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(
            contains("22.86")
                .and(contains("26.12"))
                .and(contains("Normal weight"))
                .and(contains("Overweight"))
                .and(contains("2 reading(s)")),
        );
}

#[test]
fn test_list_empty_store() {
    let db_path = setup_test_db("list_empty");

    rbt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rbt()
        .args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No saved readings."));
}

#[test]
fn test_list_rejects_invalid_period() {
    let db_path = setup_test_db("list_bad_period");
    init_db_with_data(&db_path);

    rbt()
        .args(["--db", &db_path, "list", "--period", "next week"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_db_info_reports_totals() {
    let db_path = setup_test_db("db_info");
    init_db_with_data(&db_path);

    rbt()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("Total readings").and(contains("2")));
}

#[test]
fn test_db_check_passes() {
    let db_path = setup_test_db("db_check");
    init_db_with_data(&db_path);

    rbt()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_print");
    init_db_with_data(&db_path);

    rbt()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("[init]").and(contains("[add]")));
}

#[test]
fn test_backup_copies_database() {
    let db_path = setup_test_db("backup");
    init_db_with_data(&db_path);

    let dest = common::temp_out("backup", "sqlite");

    rbt()
        .args(["--db", &db_path, "backup", "--file", &dest])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    assert!(std::path::Path::new(&dest).exists());
}
