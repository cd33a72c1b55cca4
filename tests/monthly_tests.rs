use predicates::str::contains;
use timecard::models::period::PeriodKind;

mod common;
use common::{add_worker, init_test_db, seed_closed_period, seed_workers, setup_test_db, stamp_at, tcd};

#[test]
fn test_month_enumerates_days_up_to_today() {
    let db_path = setup_test_db("month_up_to_today");
    let ids = seed_workers(&db_path, &["Mori"]);

    seed_closed_period(
        &db_path,
        PeriodKind::Shift,
        ids[0],
        "2025-03-03 09:00:00",
        Some("2025-03-03 17:00:00"),
    );

    let out = tcd()
        .args([
            "--db",
            &db_path,
            "--test",
            "monthly",
            "2025-03",
            "--worker",
            "1",
            "--at",
            "2025-03-05",
            "--json",
        ])
        .output()
        .expect("run monthly");
    assert!(out.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&out.stdout).expect("parse monthly JSON");
    let rows = rows.as_array().expect("rows array");

    // The 1st through the 5th, nothing beyond today.
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0]["date"], "2025-03-01");
    assert_eq!(rows[4]["date"], "2025-03-05");

    // Idle days report zero seconds, the worked day its real durations.
    assert_eq!(rows[0]["work_seconds"], 0);
    assert_eq!(rows[0]["break_seconds"], 0);
    assert_eq!(rows[2]["shift_begun_at"], "2025-03-03T09:00:00");
    assert_eq!(rows[2]["work_seconds"], 28800);
}

#[test]
fn test_past_month_covers_every_day() {
    let db_path = setup_test_db("month_past");
    seed_workers(&db_path, &["Mori"]);

    let out = tcd()
        .args([
            "--db",
            &db_path,
            "--test",
            "monthly",
            "2025-02",
            "--worker",
            "1",
            "--at",
            "2025-03-15",
            "--json",
        ])
        .output()
        .expect("run monthly");
    assert!(out.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&out.stdout).expect("parse monthly JSON");
    assert_eq!(rows.as_array().expect("rows array").len(), 28);
}

#[test]
fn test_future_month_reports_nothing() {
    let db_path = setup_test_db("month_future");
    seed_workers(&db_path, &["Mori"]);

    let out = tcd()
        .args([
            "--db",
            &db_path,
            "--test",
            "monthly",
            "2025-04",
            "--worker",
            "1",
            "--at",
            "2025-03-15",
            "--json",
        ])
        .output()
        .expect("run monthly");
    assert!(out.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&out.stdout).expect("parse monthly JSON");
    assert!(rows.as_array().expect("rows array").is_empty());
}

#[test]
fn test_unresolved_day_stays_unknown_in_month_view() {
    let db_path = setup_test_db("month_unresolved");
    init_test_db(&db_path);
    add_worker(&db_path, "Mori");

    stamp_at(&db_path, "begin-shift", "1", "2025-03-05 09:00");
    stamp_at(&db_path, "begin-shift", "1", "2025-03-06 09:00");
    stamp_at(&db_path, "end-shift", "1", "2025-03-06 17:00");

    let out = tcd()
        .args([
            "--db",
            &db_path,
            "--test",
            "monthly",
            "2025-03",
            "--worker",
            "1",
            "--at",
            "2025-03-07",
            "--json",
        ])
        .output()
        .expect("run monthly");
    assert!(out.status.success());

    let rows: serde_json::Value = serde_json::from_slice(&out.stdout).expect("parse monthly JSON");
    let rows = rows.as_array().expect("rows array");

    assert_eq!(rows[4]["date"], "2025-03-05");
    assert_eq!(rows[4]["shift_begun_at"], "2025-03-05T09:00:00");
    assert!(rows[4]["shift_ended_at"].is_null());
    assert!(rows[4]["work_seconds"].is_null());

    assert_eq!(rows[5]["work_seconds"], 28800);
}

#[test]
fn test_monthly_for_unknown_worker_fails() {
    let db_path = setup_test_db("month_unknown_worker");
    init_test_db(&db_path);

    tcd()
        .args([
            "--db",
            &db_path,
            "--test",
            "monthly",
            "2025-03",
            "--worker",
            "9",
            "--at",
            "2025-03-15",
        ])
        .assert()
        .failure()
        .stderr(contains("No worker found with id 9"));
}
