//! Current work state, derived from the presence of open records.

use crate::core::reconcile::reconcile;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::period::PeriodKind;
use crate::models::status::WorkStatus;
use chrono::NaiveDateTime;
use rusqlite::{Connection, TransactionBehavior};

/// Report whether the worker is off duty, on shift, or on break at `now`.
///
/// Stale earlier-day records are repaired first so a shift left open
/// yesterday reads as "off duty" today, not "on shift".
pub fn work_status(
    conn: &mut Connection,
    worker_id: i64,
    now: NaiveDateTime,
) -> AppResult<WorkStatus> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    if queries::get_worker(&tx, worker_id)?.is_none() {
        return Err(AppError::WorkerNotFound(worker_id));
    }

    reconcile(&tx, worker_id, now)?;

    let today = now.date();
    let status = if queries::open_period_on(&tx, PeriodKind::Break, worker_id, today)?.is_some() {
        WorkStatus::Break
    } else if queries::open_period_on(&tx, PeriodKind::Shift, worker_id, today)?.is_some() {
        WorkStatus::During
    } else {
        WorkStatus::Before
    };

    tx.commit()?;
    Ok(status)
}
