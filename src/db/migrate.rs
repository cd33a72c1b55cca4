use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Create the worker registry and the four period tables.
///
/// Open tables enforce "at most one open shift/break per worker" with a
/// UNIQUE constraint on worker_id. Closed tables keep history; ended_at is
/// NULL for records closed by day-boundary reconciliation.
fn create_domain_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS workers (
            id   INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS open_shifts (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            worker_id INTEGER NOT NULL UNIQUE REFERENCES workers(id),
            begun_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS closed_shifts (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            worker_id INTEGER NOT NULL REFERENCES workers(id),
            begun_at  TEXT NOT NULL,
            ended_at  TEXT
        );

        CREATE TABLE IF NOT EXISTS open_breaks (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            worker_id INTEGER NOT NULL UNIQUE REFERENCES workers(id),
            begun_at  TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS closed_breaks (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            worker_id INTEGER NOT NULL REFERENCES workers(id),
            begun_at  TEXT NOT NULL,
            ended_at  TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_closed_shifts_worker_day
            ON closed_shifts(worker_id, begun_at);
        CREATE INDEX IF NOT EXISTS idx_closed_breaks_worker_day
            ON closed_breaks(worker_id, begun_at);
        CREATE INDEX IF NOT EXISTS idx_workers_name ON workers(name, id);
        "#,
    )?;
    Ok(())
}

/// Check whether a versioned migration has already been applied.
fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

/// Mark a versioned migration as applied.
fn mark_migration_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    let version = "20250118_0001_initial_schema";
    if !migration_applied(conn, version)? {
        create_domain_tables(conn)?;
        mark_migration_applied(conn, version, "Created workers and period tables")?;
        success("Created attendance tables (initial schema).");
    } else {
        // Idempotent index maintenance for DBs created before the indexes.
        conn.execute_batch(
            r#"
            CREATE INDEX IF NOT EXISTS idx_closed_shifts_worker_day
                ON closed_shifts(worker_id, begun_at);
            CREATE INDEX IF NOT EXISTS idx_closed_breaks_worker_day
                ON closed_breaks(worker_id, begun_at);
            "#,
        )?;
    }

    Ok(())
}
