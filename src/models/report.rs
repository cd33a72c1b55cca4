use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// One worker's attendance on a given date, as reported by the daily view.
/// None in the seconds fields means "unknown": the worker is still mid-period
/// or an end stamp was missed that day.
#[derive(Debug, Clone, Serialize)]
pub struct DailyAttendanceRow {
    pub worker_id: i64,
    pub worker_name: String,
    pub shift_begun_at: NaiveDateTime,
    pub shift_ended_at: Option<NaiveDateTime>,
    pub break_seconds: Option<i64>,
    pub work_seconds: Option<i64>,
}

/// A page of daily attendance rows plus the total count across all pages.
#[derive(Debug, Clone, Serialize)]
pub struct DailyAttendancePage {
    pub rows: Vec<DailyAttendanceRow>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
}

/// One calendar day of a single worker's month view. Days without any
/// activity carry Some(0) seconds; days with an open or unresolved period
/// carry None, same convention as the daily rows.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyAttendanceRow {
    pub date: NaiveDate,
    pub shift_begun_at: Option<NaiveDateTime>,
    pub shift_ended_at: Option<NaiveDateTime>,
    pub break_seconds: Option<i64>,
    pub work_seconds: Option<i64>,
}
