#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tcd() -> Command {
    cargo_bin_cmd!("timecard")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_timecard.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize the DB schema for a test database
pub fn init_test_db(db_path: &str) {
    tcd()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Register a worker via the CLI; ids are assigned sequentially from 1 on a
/// fresh database.
pub fn add_worker(db_path: &str, name: &str) {
    tcd()
        .args(["--db", db_path, "--test", "worker", "--add", name])
        .assert()
        .success();
}

/// Record one stamp at an explicit timestamp.
pub fn stamp_at(db_path: &str, action: &str, worker: &str, at: &str) {
    tcd()
        .args([
            "--db", db_path, "--test", "stamp", action, "--worker", worker, "--at", at,
        ])
        .assert()
        .success();
}

/// Seed closed records directly through the library API, bypassing the stamp
/// engine. Useful to build states that take many CLI round trips to reach.
pub fn seed_closed_period(
    db_path: &str,
    kind: timecard::models::period::PeriodKind,
    worker_id: i64,
    begun_at: &str,
    ended_at: Option<&str>,
) {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    timecard::db::initialize::init_db(&conn).expect("init db");
    let begun = chrono::NaiveDateTime::parse_from_str(begun_at, "%Y-%m-%d %H:%M:%S")
        .expect("parse begun_at");
    let ended = ended_at.map(|s| {
        chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("parse ended_at")
    });
    timecard::db::queries::insert_closed_period(&conn, kind, worker_id, begun, ended)
        .expect("insert closed period");
}

/// Register many workers through the library API for pagination tests.
pub fn seed_workers(db_path: &str, names: &[&str]) -> Vec<i64> {
    let conn = rusqlite::Connection::open(db_path).expect("open db");
    timecard::db::initialize::init_db(&conn).expect("init db");
    names
        .iter()
        .map(|name| timecard::db::queries::insert_worker(&conn, name).expect("insert worker"))
        .collect()
}
