use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Current local timestamp, truncated to whole seconds.
pub fn now() -> NaiveDateTime {
    let now = chrono::Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Parse a stamp timestamp, with or without seconds.
pub fn parse_datetime(s: &str) -> AppResult<NaiveDateTime> {
    if let Ok(dt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S") {
        return Ok(dt);
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M")
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

/// Parse "YYYY-MM" into the first day of that month.
pub fn parse_month(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", s), "%Y-%m-%d")
        .map_err(|_| AppError::InvalidMonth(s.to_string()))
}

pub fn all_days_of_month(year: i32, month: u32) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = NaiveDate::from_ymd_opt(year, month, 1).unwrap();

    while d.month() == month {
        out.push(d);
        d = d.succ_opt().unwrap();
    }

    out
}
