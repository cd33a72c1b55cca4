//! Date-indexed attendance report: one row per worker active on a day.

use crate::core::calculator;
use crate::db::queries;
use crate::errors::AppResult;
use crate::models::period::PeriodKind;
use crate::models::report::{DailyAttendancePage, DailyAttendanceRow};
use chrono::NaiveDate;
use rusqlite::Connection;

/// One page of per-worker attendance for `date`.
///
/// Read-only projection: no reconciliation happens here. A shift left open on
/// an earlier day simply reports unknown durations until a stamping action or
/// status read repairs it. All rows are read inside one transaction so a page
/// never mixes pre- and post-repair views of the same worker.
///
/// Workers with no shift activity on the date are omitted. Rows are ordered
/// by worker name then id, so fixed-size pages partition the workers without
/// duplicates or gaps.
pub fn daily_attendances(
    conn: &mut Connection,
    date: NaiveDate,
    page: i64,
    per_page: i64,
) -> AppResult<DailyAttendancePage> {
    let page = page.max(1);
    let per_page = per_page.max(1);

    let tx = conn.transaction()?;

    let total = queries::count_workers_with_shift_on(&tx, date)?;
    let workers = queries::workers_with_shift_on(&tx, date, per_page, (page - 1) * per_page)?;

    let mut rows = Vec::with_capacity(workers.len());
    for worker in workers {
        let open_shift = queries::open_period_on(&tx, PeriodKind::Shift, worker.id, date)?;
        let closed_shift = queries::closed_shift_on(&tx, worker.id, date)?;
        let open_break = queries::open_period_on(&tx, PeriodKind::Break, worker.id, date)?;
        let closed_breaks = queries::closed_periods_on(&tx, PeriodKind::Break, worker.id, date)?;

        let shift_secs = calculator::shift_seconds(open_shift.is_some(), closed_shift.as_ref());
        let break_secs = calculator::break_seconds(open_break.is_some(), &closed_breaks);
        let work_secs = calculator::work_seconds(shift_secs, break_secs);

        // An open record wins over a closed one for the displayed span; the
        // activity filter guarantees at least one of the two exists.
        let (begun_at, ended_at) = match (&open_shift, &closed_shift) {
            (Some(open), _) => (open.begun_at, None),
            (None, Some(shut)) => (shut.begun_at, shut.ended_at),
            (None, None) => continue,
        };

        rows.push(DailyAttendanceRow {
            worker_id: worker.id,
            worker_name: worker.name,
            shift_begun_at: begun_at,
            shift_ended_at: ended_at,
            break_seconds: break_secs,
            work_seconds: work_secs,
        });
    }

    tx.commit()?;

    Ok(DailyAttendancePage {
        rows,
        total,
        page,
        per_page,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stamp::{StampAction, stamp};
    use crate::db::initialize::init_db;
    use chrono::NaiveDateTime;

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn reports_closed_day_with_break_and_work_seconds() {
        let mut conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        let w = queries::insert_worker(&conn, "Avery").unwrap();

        stamp(&mut conn, StampAction::BeginShift, w, at(10, 9, 0)).unwrap();
        stamp(&mut conn, StampAction::BeginBreak, w, at(10, 12, 0)).unwrap();
        stamp(&mut conn, StampAction::EndBreak, w, at(10, 12, 30)).unwrap();
        stamp(&mut conn, StampAction::EndShift, w, at(10, 18, 0)).unwrap();

        let page = daily_attendances(&mut conn, at(10, 0, 0).date(), 1, 5).unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.rows.len(), 1);

        let row = &page.rows[0];
        assert_eq!(row.worker_name, "Avery");
        assert_eq!(row.shift_begun_at, at(10, 9, 0));
        assert_eq!(row.shift_ended_at, Some(at(10, 18, 0)));
        assert_eq!(row.break_seconds, Some(1_800));
        assert_eq!(row.work_seconds, Some(30_600));
    }

    #[test]
    fn missed_end_stamp_makes_work_seconds_unknown() {
        let mut conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        let w = queries::insert_worker(&conn, "Avery").unwrap();

        stamp(&mut conn, StampAction::BeginShift, w, at(10, 9, 0)).unwrap();
        // Any next-day action repairs the record into a closed shift with an
        // unknown end.
        stamp(&mut conn, StampAction::BeginShift, w, at(11, 9, 0)).unwrap();

        let page = daily_attendances(&mut conn, at(10, 0, 0).date(), 1, 5).unwrap();
        let row = &page.rows[0];
        assert_eq!(row.shift_ended_at, None);
        assert_eq!(row.break_seconds, Some(0));
        assert_eq!(row.work_seconds, None);
    }

    #[test]
    fn mid_break_day_is_fully_unknown() {
        let mut conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        let w = queries::insert_worker(&conn, "Avery").unwrap();

        stamp(&mut conn, StampAction::BeginShift, w, at(10, 9, 0)).unwrap();
        stamp(&mut conn, StampAction::BeginBreak, w, at(10, 12, 0)).unwrap();

        let page = daily_attendances(&mut conn, at(10, 0, 0).date(), 1, 5).unwrap();
        let row = &page.rows[0];
        assert_eq!(row.shift_ended_at, None);
        assert_eq!(row.break_seconds, None);
        assert_eq!(row.work_seconds, None);
    }

    #[test]
    fn pages_partition_workers_by_name_then_id() {
        let mut conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();

        let names = ["Fern", "Avery", "Drew", "Blair", "Ellis", "Cass", "Avery"];
        let mut ids = Vec::new();
        for name in names {
            ids.push(queries::insert_worker(&conn, name).unwrap());
        }
        for &id in &ids {
            stamp(&mut conn, StampAction::BeginShift, id, at(10, 9, 0)).unwrap();
            stamp(&mut conn, StampAction::EndShift, id, at(10, 17, 0)).unwrap();
        }

        let day = at(10, 0, 0).date();
        let mut seen = Vec::new();
        for page_no in 1..=3 {
            let page = daily_attendances(&mut conn, day, page_no, 3).unwrap();
            assert_eq!(page.total, 7);
            for row in &page.rows {
                seen.push((row.worker_name.clone(), row.worker_id));
            }
        }

        assert_eq!(seen.len(), 7, "every worker appears exactly once");
        let mut sorted = seen.clone();
        sorted.sort();
        assert_eq!(seen, sorted, "rows are ordered by name then id");

        // The two workers who share a name are ordered by id.
        let averys: Vec<i64> = seen
            .iter()
            .filter(|(n, _)| n == "Avery")
            .map(|&(_, id)| id)
            .collect();
        assert_eq!(averys.len(), 2);
        assert!(averys[0] < averys[1]);
    }

    #[test]
    fn inactive_workers_are_omitted() {
        let mut conn = Connection::open_in_memory().unwrap();
        init_db(&conn).unwrap();
        let worked = queries::insert_worker(&conn, "Avery").unwrap();
        queries::insert_worker(&conn, "Blair").unwrap();

        stamp(&mut conn, StampAction::BeginShift, worked, at(10, 9, 0)).unwrap();

        let page = daily_attendances(&mut conn, at(10, 0, 0).date(), 1, 5).unwrap();
        assert_eq!(page.total, 1);
        assert_eq!(page.rows[0].worker_name, "Avery");
    }
}
