#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rbt() -> Command {
    cargo_bin_cmd!("rbmitrack")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rbmitrack.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables); --test skips the config file write
    rbt()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    // two readings via the CLI: Normal weight, then Overweight
    rbt()
        .args(["--db", db_path, "add", "70", "175"])
        .assert()
        .success();

    rbt()
        .args(["--db", db_path, "add", "80", "175"])
        .assert()
        .success();
}

/// Populate many readings directly via the library DB API
pub fn populate_many_readings(db_path: &str, n: usize) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    rbmitrack::db::initialize::init_db(&conn).expect("init db");
    for i in 0..n {
        let weight = 60.0 + (i % 30) as f64;
        let bmi = rbmitrack::core::bmi::compute(weight, 175.0).expect("bmi");
        let category = rbmitrack::core::bmi::classify(bmi);
        rbmitrack::db::queries::insert_record(&conn, weight, 175.0, bmi, category)
            .expect("insert record");
    }
}
