//! Worker-indexed month view: one row per calendar day.

use crate::core::calculator;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::period::{ClosedPeriod, PeriodKind};
use crate::models::report::MonthlyAttendanceRow;
use crate::utils::date::all_days_of_month;
use chrono::{Datelike, NaiveDate};
use rusqlite::Connection;

/// Attendance of one worker for every day of `month` (any date inside the
/// month selects it), from the 1st through `today` for the current month or
/// through the month's last day for past months. Future months produce no
/// rows — days that have not happened are never materialized.
///
/// Days without activity report zero seconds rather than being omitted, since
/// the report is day-indexed. In-progress or unresolved days carry unknown
/// (None) durations, same rules as the daily view.
pub fn monthly_attendance(
    conn: &mut Connection,
    worker_id: i64,
    month: NaiveDate,
    today: NaiveDate,
) -> AppResult<Vec<MonthlyAttendanceRow>> {
    let days = all_days_of_month(month.year(), month.month());
    let first = days[0];
    let last = *days.last().expect("a month always has days");

    if today < first {
        return Ok(Vec::new());
    }
    let upto = last.min(today);

    let tx = conn.transaction()?;

    if queries::get_worker(&tx, worker_id)?.is_none() {
        return Err(AppError::WorkerNotFound(worker_id));
    }

    let closed_shifts =
        queries::closed_periods_between(&tx, PeriodKind::Shift, worker_id, first, last)?;
    let closed_breaks =
        queries::closed_periods_between(&tx, PeriodKind::Break, worker_id, first, last)?;
    let open_shift = queries::open_period(&tx, PeriodKind::Shift, worker_id)?;
    let open_break = queries::open_period(&tx, PeriodKind::Break, worker_id)?;

    tx.commit()?;

    let mut rows = Vec::new();
    for day in days.into_iter().take_while(|d| *d <= upto) {
        let closed_shift = closed_shifts.iter().find(|c| c.begun_at.date() == day);
        let day_breaks: Vec<ClosedPeriod> = closed_breaks
            .iter()
            .filter(|c| c.begun_at.date() == day)
            .cloned()
            .collect();
        let on_shift = open_shift
            .as_ref()
            .is_some_and(|o| o.begun_at.date() == day);
        let on_break = open_break
            .as_ref()
            .is_some_and(|o| o.begun_at.date() == day);

        let shift_secs = calculator::shift_seconds(on_shift, closed_shift);
        let break_secs = calculator::break_seconds(on_break, &day_breaks);
        let work_secs = calculator::work_seconds(shift_secs, break_secs);

        let (begun_at, ended_at) = if on_shift {
            (open_shift.as_ref().map(|o| o.begun_at), None)
        } else {
            (
                closed_shift.map(|c| c.begun_at),
                closed_shift.and_then(|c| c.ended_at),
            )
        };

        rows.push(MonthlyAttendanceRow {
            date: day,
            shift_begun_at: begun_at,
            shift_ended_at: ended_at,
            break_seconds: break_secs,
            work_seconds: work_secs,
        });
    }

    Ok(rows)
}
