//! Day-boundary repair for records left open overnight.
//!
//! A worker who forgets to stamp out keeps an open shift (and possibly an open
//! break) whose begun_at falls on an earlier calendar day. Before any stamping
//! action or status read touches that worker, those stale records are
//! converted into closed records with an unresolved (NULL) end time. The
//! closed record is terminal: reconciliation never re-opens it, and its
//! duration stays unknown forever.

use crate::db::{log, queries};
use crate::errors::AppResult;
use crate::models::period::PeriodKind;
use chrono::NaiveDateTime;
use rusqlite::Connection;

/// Close out every open shift and break of the worker begun on a calendar day
/// strictly before `now`'s day. Idempotent: with no stale records this is a
/// no-op. Runs inside the caller's transaction.
pub fn reconcile(conn: &Connection, worker_id: i64, now: NaiveDateTime) -> AppResult<()> {
    // Shifts first: break existence is gated on shift existence, so repairing
    // in this order keeps any intermediate state explainable.
    close_previous(conn, PeriodKind::Shift, worker_id, now)?;
    close_previous(conn, PeriodKind::Break, worker_id, now)?;
    Ok(())
}

fn close_previous(
    conn: &Connection,
    kind: PeriodKind,
    worker_id: i64,
    now: NaiveDateTime,
) -> AppResult<()> {
    let stale = queries::open_periods_before(conn, kind, worker_id, now.date())?;

    for open in stale {
        queries::insert_closed_period(conn, kind, open.worker_id, open.begun_at, None)?;
        queries::delete_open_period(conn, kind, worker_id)?;
        log::ttlog(
            conn,
            "reconcile",
            kind.label(),
            &format!(
                "Closed {} begun at {} for worker {} (end stamp missed)",
                kind.label(),
                open.begun_at,
                worker_id
            ),
        )?;
    }

    Ok(())
}
