//! Pure duration arithmetic over already-fetched period rows.
//!
//! The reporting views fetch raw open/closed rows and feed them through these
//! functions, so the "unknown" propagation rules live in one unit-testable
//! place instead of being buried in SQL. None always means "cannot compute":
//! a period is still running, or its end stamp was missed.

use crate::models::period::ClosedPeriod;

/// Total break seconds for one worker and one day.
///
/// Unknown while the worker is mid-break, and unknown when any closed break of
/// the day lost its end stamp. No breaks at all is a plain 0.
pub fn break_seconds(on_break: bool, closed: &[ClosedPeriod]) -> Option<i64> {
    if on_break {
        return None;
    }

    let mut total = 0;
    for period in closed {
        total += period.seconds()?;
    }
    Some(total)
}

/// Shift seconds for one worker and one day.
///
/// Unknown while the worker is still on shift and unknown when the single
/// closed shift lost its end stamp; 0 when the worker did not work that day.
pub fn shift_seconds(on_shift: bool, closed: Option<&ClosedPeriod>) -> Option<i64> {
    if on_shift {
        return None;
    }

    match closed {
        None => Some(0),
        Some(period) => period.seconds(),
    }
}

/// Net work seconds: shift minus breaks, unknown if either side is unknown.
pub fn work_seconds(shift: Option<i64>, breaks: Option<i64>) -> Option<i64> {
    Some(shift? - breaks?)
}
