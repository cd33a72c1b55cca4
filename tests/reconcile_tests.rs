use predicates::str::contains;

mod common;
use common::{add_worker, init_test_db, setup_test_db, stamp_at, tcd};

#[test]
fn test_cross_midnight_shift_is_closed_without_end_time() {
    let db_path = setup_test_db("cross_midnight");
    init_test_db(&db_path);
    add_worker(&db_path, "Mori");

    stamp_at(&db_path, "begin-shift", "1", "2025-03-10 09:00");
    // The next-day begin first repairs the stale record, then opens a fresh
    // shift at the new timestamp.
    stamp_at(&db_path, "begin-shift", "1", "2025-03-11 09:00");

    tcd()
        .args([
            "--db",
            &db_path,
            "--test",
            "daily",
            "2025-03-10",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"shift_begun_at\":\"2025-03-10T09:00:00\""))
        .stdout(contains("\"shift_ended_at\":null"))
        .stdout(contains("\"work_seconds\":null"));

    tcd()
        .args([
            "--db",
            &db_path,
            "--test",
            "daily",
            "2025-03-11",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"shift_begun_at\":\"2025-03-11T09:00:00\""));
}

#[test]
fn test_status_read_repairs_stale_records() {
    let db_path = setup_test_db("status_repairs");
    init_test_db(&db_path);
    add_worker(&db_path, "Mori");

    stamp_at(&db_path, "begin-shift", "1", "2025-03-10 21:00");
    stamp_at(&db_path, "begin-break", "1", "2025-03-10 23:30");

    // Reading the status next morning closes both leftovers.
    tcd()
        .args([
            "--db",
            &db_path,
            "--test",
            "status",
            "--worker",
            "1",
            "--at",
            "2025-03-11 08:00",
        ])
        .assert()
        .success()
        .stdout(contains("off duty"));

    // Both the shift and the break of the 10th are now closed with unknown
    // ends, so every duration of that day is unknown.
    tcd()
        .args([
            "--db",
            &db_path,
            "--test",
            "daily",
            "2025-03-10",
            "--json",
        ])
        .assert()
        .success()
        .stdout(contains("\"shift_ended_at\":null"))
        .stdout(contains("\"break_seconds\":null"))
        .stdout(contains("\"work_seconds\":null"));
}

#[test]
fn test_reconciliation_is_idempotent() {
    let db_path = setup_test_db("reconcile_idempotent");
    init_test_db(&db_path);
    add_worker(&db_path, "Mori");

    stamp_at(&db_path, "begin-shift", "1", "2025-03-10 09:00");

    // Two reads on the next day: the second finds nothing left to repair.
    for _ in 0..2 {
        tcd()
            .args([
                "--db",
                &db_path,
                "--test",
                "status",
                "--worker",
                "1",
                "--at",
                "2025-03-11 08:00",
            ])
            .assert()
            .success()
            .stdout(contains("off duty"));
    }

    // Exactly one closed shift exists for the stale day.
    let conn = rusqlite::Connection::open(&db_path).expect("open db");
    let n: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM closed_shifts WHERE worker_id = 1",
            [],
            |r| r.get(0),
        )
        .expect("count closed shifts");
    assert_eq!(n, 1);
}
