//! The four stamping transitions.
//!
//! Every operation runs inside a single immediate (write-locking) SQLite
//! transaction: stale-day repair, the precondition re-check, and the
//! insert/delete pair either all commit or none do. Unmet preconditions are
//! absorbed as silent no-ops, so duplicate or out-of-order submissions from a
//! double-click or a blind retry never surface an error to the worker.

use crate::core::reconcile::reconcile;
use crate::db::{log, queries};
use crate::errors::{AppError, AppResult};
use crate::models::period::PeriodKind;
use chrono::NaiveDateTime;
use clap::ValueEnum;
use rusqlite::{Connection, TransactionBehavior};

/// The four user-facing transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StampAction {
    BeginShift,
    EndShift,
    BeginBreak,
    EndBreak,
}

impl StampAction {
    pub fn as_str(self) -> &'static str {
        match self {
            StampAction::BeginShift => "begin_shift",
            StampAction::EndShift => "end_shift",
            StampAction::BeginBreak => "begin_break",
            StampAction::EndBreak => "end_break",
        }
    }
}

/// Execute one stamping action for a worker at an explicit point in time.
///
/// Reconciliation of earlier-day leftovers always runs first, inside the same
/// transaction, so the transition below only ever sees same-day open records.
pub fn stamp(
    conn: &mut Connection,
    action: StampAction,
    worker_id: i64,
    now: NaiveDateTime,
) -> AppResult<()> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    if queries::get_worker(&tx, worker_id)?.is_none() {
        return Err(AppError::WorkerNotFound(worker_id));
    }

    reconcile(&tx, worker_id, now)?;

    match action {
        StampAction::BeginShift => begin_shift(&tx, worker_id, now)?,
        StampAction::EndShift => end_shift(&tx, worker_id, now)?,
        StampAction::BeginBreak => begin_break(&tx, worker_id, now)?,
        StampAction::EndBreak => end_break(&tx, worker_id, now)?,
    }

    tx.commit()?;
    Ok(())
}

/// Start (or resume) the day's shift.
///
/// A repeated begin is a no-op: the original start time stands. If the worker
/// already ended a shift earlier the same day, that closed record is removed
/// and its begun_at reused, so the day's shift span survives the round trip.
fn begin_shift(conn: &Connection, worker_id: i64, now: NaiveDateTime) -> AppResult<()> {
    if queries::open_period(conn, PeriodKind::Shift, worker_id)?.is_some() {
        return Ok(());
    }

    let begun_at = match queries::closed_shift_on(conn, worker_id, now.date())? {
        Some(closed) => {
            queries::delete_closed_shift_on(conn, worker_id, now.date())?;
            closed.begun_at
        }
        None => now,
    };

    queries::insert_open_period(conn, PeriodKind::Shift, worker_id, begun_at)?;
    log::ttlog(
        conn,
        "begin_shift",
        &worker_id.to_string(),
        &format!("Shift open since {} for worker {}", begun_at, worker_id),
    )?;
    Ok(())
}

/// End the day's shift. Refused (silently) while a break is still open: the
/// worker has to end the break first.
fn end_shift(conn: &Connection, worker_id: i64, now: NaiveDateTime) -> AppResult<()> {
    if queries::open_period(conn, PeriodKind::Break, worker_id)?.is_some() {
        return Ok(());
    }

    if let Some(open) = queries::open_period(conn, PeriodKind::Shift, worker_id)? {
        queries::insert_closed_period(conn, PeriodKind::Shift, worker_id, open.begun_at, Some(now))?;
        queries::delete_open_period(conn, PeriodKind::Shift, worker_id)?;
        log::ttlog(
            conn,
            "end_shift",
            &worker_id.to_string(),
            &format!("Shift {} - {} for worker {}", open.begun_at, now, worker_id),
        )?;
    }

    Ok(())
}

/// Start a break. Only possible while a shift is open; a repeated begin keeps
/// the first break start.
fn begin_break(conn: &Connection, worker_id: i64, now: NaiveDateTime) -> AppResult<()> {
    if queries::open_period(conn, PeriodKind::Shift, worker_id)?.is_none() {
        return Ok(());
    }
    if queries::open_period(conn, PeriodKind::Break, worker_id)?.is_some() {
        return Ok(());
    }

    queries::insert_open_period(conn, PeriodKind::Break, worker_id, now)?;
    log::ttlog(
        conn,
        "begin_break",
        &worker_id.to_string(),
        &format!("Break open since {} for worker {}", now, worker_id),
    )?;
    Ok(())
}

/// End the current break.
fn end_break(conn: &Connection, worker_id: i64, now: NaiveDateTime) -> AppResult<()> {
    if let Some(open) = queries::open_period(conn, PeriodKind::Break, worker_id)? {
        queries::insert_closed_period(conn, PeriodKind::Break, worker_id, open.begun_at, Some(now))?;
        queries::delete_open_period(conn, PeriodKind::Break, worker_id)?;
        log::ttlog(
            conn,
            "end_break",
            &worker_id.to_string(),
            &format!("Break {} - {} for worker {}", open.begun_at, now, worker_id),
        )?;
    }

    Ok(())
}
