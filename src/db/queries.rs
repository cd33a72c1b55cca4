//! Typed queries for the worker registry and the four period tables.
//!
//! Shifts and breaks live in structurally identical table pairs
//! (open_shifts/closed_shifts, open_breaks/closed_breaks); every query takes a
//! PeriodKind and formats the table name in, so there is exactly one code path
//! per operation. Aggregation logic stays out of SQL on purpose: these
//! functions only fetch raw rows, the null-propagation rules live in
//! core::calculator.

use crate::errors::{AppError, AppResult};
use crate::models::period::{ClosedPeriod, OpenPeriod, PeriodKind};
use crate::models::worker::Worker;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const DATETIME_FMT: &str = "%Y-%m-%d %H:%M:%S";
const DATE_FMT: &str = "%Y-%m-%d";

pub fn fmt_datetime(dt: NaiveDateTime) -> String {
    dt.format(DATETIME_FMT).to_string()
}

fn parse_datetime_col(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DATETIME_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTimestamp(s.to_string())),
        )
    })
}

fn map_open(row: &Row) -> Result<OpenPeriod> {
    let begun: String = row.get("begun_at")?;
    Ok(OpenPeriod {
        worker_id: row.get("worker_id")?,
        begun_at: parse_datetime_col(&begun)?,
    })
}

fn map_closed(row: &Row) -> Result<ClosedPeriod> {
    let begun: String = row.get("begun_at")?;
    let ended: Option<String> = row.get("ended_at")?;
    Ok(ClosedPeriod {
        worker_id: row.get("worker_id")?,
        begun_at: parse_datetime_col(&begun)?,
        ended_at: match ended {
            Some(s) => Some(parse_datetime_col(&s)?),
            None => None,
        },
    })
}

fn map_worker(row: &Row) -> Result<Worker> {
    Ok(Worker {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}

// ---------------------------
// Worker registry
// ---------------------------

pub fn insert_worker(conn: &Connection, name: &str) -> AppResult<i64> {
    conn.execute("INSERT INTO workers (name) VALUES (?1)", params![name])?;
    Ok(conn.last_insert_rowid())
}

pub fn get_worker(conn: &Connection, id: i64) -> AppResult<Option<Worker>> {
    let mut stmt = conn.prepare_cached("SELECT id, name FROM workers WHERE id = ?1")?;
    Ok(stmt.query_row([id], map_worker).optional()?)
}

/// List workers ordered by name then id, optionally filtered by a name
/// substring.
pub fn list_workers(conn: &Connection, search: Option<&str>) -> AppResult<Vec<Worker>> {
    let rows = match search {
        Some(needle) => {
            let mut stmt = conn.prepare_cached(
                "SELECT id, name FROM workers
                 WHERE name LIKE '%' || ?1 || '%'
                 ORDER BY name ASC, id ASC",
            )?;
            let rows = stmt.query_map([needle], map_worker)?;
            rows.collect::<Result<Vec<_>, _>>()?
        }
        None => {
            let mut stmt =
                conn.prepare_cached("SELECT id, name FROM workers ORDER BY name ASC, id ASC")?;
            let rows = stmt.query_map([], map_worker)?;
            rows.collect::<Result<Vec<_>, _>>()?
        }
    };
    Ok(rows)
}

// ---------------------------
// Open periods
// ---------------------------

/// The worker's open period of this kind, regardless of date.
pub fn open_period(
    conn: &Connection,
    kind: PeriodKind,
    worker_id: i64,
) -> AppResult<Option<OpenPeriod>> {
    let sql = format!(
        "SELECT worker_id, begun_at FROM {} WHERE worker_id = ?1",
        kind.open_table()
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    Ok(stmt.query_row([worker_id], map_open).optional()?)
}

/// The worker's open period of this kind begun on the given calendar day.
pub fn open_period_on(
    conn: &Connection,
    kind: PeriodKind,
    worker_id: i64,
    date: NaiveDate,
) -> AppResult<Option<OpenPeriod>> {
    let sql = format!(
        "SELECT worker_id, begun_at FROM {}
         WHERE worker_id = ?1 AND date(begun_at) = ?2",
        kind.open_table()
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    Ok(stmt
        .query_row(params![worker_id, date.format(DATE_FMT).to_string()], map_open)
        .optional()?)
}

/// Open periods of this kind begun on a calendar day strictly before `date`.
/// These are the stale records the reconciler closes out.
pub fn open_periods_before(
    conn: &Connection,
    kind: PeriodKind,
    worker_id: i64,
    date: NaiveDate,
) -> AppResult<Vec<OpenPeriod>> {
    let sql = format!(
        "SELECT worker_id, begun_at FROM {}
         WHERE worker_id = ?1 AND date(begun_at) < ?2
         ORDER BY begun_at ASC",
        kind.open_table()
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt.query_map(
        params![worker_id, date.format(DATE_FMT).to_string()],
        map_open,
    )?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

pub fn insert_open_period(
    conn: &Connection,
    kind: PeriodKind,
    worker_id: i64,
    begun_at: NaiveDateTime,
) -> AppResult<()> {
    let sql = format!(
        "INSERT INTO {} (worker_id, begun_at) VALUES (?1, ?2)",
        kind.open_table()
    );
    conn.execute(&sql, params![worker_id, fmt_datetime(begun_at)])?;
    Ok(())
}

pub fn delete_open_period(conn: &Connection, kind: PeriodKind, worker_id: i64) -> AppResult<usize> {
    let sql = format!("DELETE FROM {} WHERE worker_id = ?1", kind.open_table());
    Ok(conn.execute(&sql, params![worker_id])?)
}

// ---------------------------
// Closed periods
// ---------------------------

pub fn insert_closed_period(
    conn: &Connection,
    kind: PeriodKind,
    worker_id: i64,
    begun_at: NaiveDateTime,
    ended_at: Option<NaiveDateTime>,
) -> AppResult<()> {
    let sql = format!(
        "INSERT INTO {} (worker_id, begun_at, ended_at) VALUES (?1, ?2, ?3)",
        kind.closed_table()
    );
    conn.execute(
        &sql,
        params![worker_id, fmt_datetime(begun_at), ended_at.map(fmt_datetime)],
    )?;
    Ok(())
}

/// All closed periods of this kind begun on the given calendar day.
pub fn closed_periods_on(
    conn: &Connection,
    kind: PeriodKind,
    worker_id: i64,
    date: NaiveDate,
) -> AppResult<Vec<ClosedPeriod>> {
    let sql = format!(
        "SELECT worker_id, begun_at, ended_at FROM {}
         WHERE worker_id = ?1 AND date(begun_at) = ?2
         ORDER BY begun_at ASC",
        kind.closed_table()
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt.query_map(
        params![worker_id, date.format(DATE_FMT).to_string()],
        map_closed,
    )?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

/// The single closed shift begun on the given day, if any.
pub fn closed_shift_on(
    conn: &Connection,
    worker_id: i64,
    date: NaiveDate,
) -> AppResult<Option<ClosedPeriod>> {
    let mut stmt = conn.prepare_cached(
        "SELECT worker_id, begun_at, ended_at FROM closed_shifts
         WHERE worker_id = ?1 AND date(begun_at) = ?2",
    )?;
    Ok(stmt
        .query_row(
            params![worker_id, date.format(DATE_FMT).to_string()],
            map_closed,
        )
        .optional()?)
}

/// Delete the closed shift begun on the given day. Used by the resume path of
/// begin-shift. Returns the number of rows removed.
pub fn delete_closed_shift_on(
    conn: &Connection,
    worker_id: i64,
    date: NaiveDate,
) -> AppResult<usize> {
    Ok(conn.execute(
        "DELETE FROM closed_shifts WHERE worker_id = ?1 AND date(begun_at) = ?2",
        params![worker_id, date.format(DATE_FMT).to_string()],
    )?)
}

/// Closed periods of this kind begun anywhere inside [first, last], both
/// inclusive. Used by the month view to fetch a whole month in one query.
pub fn closed_periods_between(
    conn: &Connection,
    kind: PeriodKind,
    worker_id: i64,
    first: NaiveDate,
    last: NaiveDate,
) -> AppResult<Vec<ClosedPeriod>> {
    let sql = format!(
        "SELECT worker_id, begun_at, ended_at FROM {}
         WHERE worker_id = ?1 AND date(begun_at) >= ?2 AND date(begun_at) <= ?3
         ORDER BY begun_at ASC",
        kind.closed_table()
    );
    let mut stmt = conn.prepare_cached(&sql)?;
    let rows = stmt.query_map(
        params![
            worker_id,
            first.format(DATE_FMT).to_string(),
            last.format(DATE_FMT).to_string()
        ],
        map_closed,
    )?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

// ---------------------------
// Daily report helpers
// ---------------------------

/// One page of workers with any shift activity (open or closed) on `date`,
/// ordered by name then id so pagination is stable.
pub fn workers_with_shift_on(
    conn: &Connection,
    date: NaiveDate,
    limit: i64,
    offset: i64,
) -> AppResult<Vec<Worker>> {
    let mut stmt = conn.prepare_cached(
        "SELECT w.id, w.name FROM workers w
         WHERE EXISTS (SELECT 1 FROM open_shifts o
                       WHERE o.worker_id = w.id AND date(o.begun_at) = ?1)
            OR EXISTS (SELECT 1 FROM closed_shifts c
                       WHERE c.worker_id = w.id AND date(c.begun_at) = ?1)
         ORDER BY w.name ASC, w.id ASC
         LIMIT ?2 OFFSET ?3",
    )?;
    let rows = stmt.query_map(
        params![date.format(DATE_FMT).to_string(), limit, offset],
        map_worker,
    )?;
    Ok(rows.collect::<Result<Vec<_>, _>>()?)
}

/// Total number of workers with any shift activity on `date`.
pub fn count_workers_with_shift_on(conn: &Connection, date: NaiveDate) -> AppResult<i64> {
    let mut stmt = conn.prepare_cached(
        "SELECT COUNT(*) FROM workers w
         WHERE EXISTS (SELECT 1 FROM open_shifts o
                       WHERE o.worker_id = w.id AND date(o.begun_at) = ?1)
            OR EXISTS (SELECT 1 FROM closed_shifts c
                       WHERE c.worker_id = w.id AND date(c.begun_at) = ?1)",
    )?;
    let n: i64 = stmt.query_row([date.format(DATE_FMT).to_string()], |r| r.get(0))?;
    Ok(n)
}
