use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;

fn strip_ansi(s: &str) -> String {
    let re = regex::Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap();
    re.replace_all(s, "").into_owned()
}

/// ANSI color for an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "begin_shift" => Colour::Green,
        "end_shift" => Colour::Red,
        "begin_break" | "end_break" => Colour::Yellow,
        "reconcile" => Colour::Purple,
        "worker_add" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        other if other.starts_with("migration") => Colour::Purple,
        _ => Colour::White,
    }
}

pub struct AuditLog;

impl AuditLog {
    /// Print the internal `log` table, oldest entry first.
    pub fn print(pool: &mut DbPool) -> AppResult<()> {
        let mut stmt = pool.conn.prepare_cached(
            "SELECT id, date, operation, target, message FROM log ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            let id: i32 = row.get(0)?;
            let raw_date: String = row.get(1)?;
            let operation: String = row.get(2)?;
            let target: String = row.get(3)?;
            let message: String = row.get(4)?;

            let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or(raw_date);

            // Single op+target column
            let op_target = if target.is_empty() {
                operation.clone()
            } else {
                format!("{operation} ({target})")
            };

            Ok((id, date, operation, op_target, message))
        })?;

        let mut entries = Vec::new();
        for r in rows {
            entries.push(r?);
        }

        if entries.is_empty() {
            println!("Audit log is empty.");
            return Ok(());
        }

        let raw_max = entries
            .iter()
            .map(|(_, _, _, op_target, _)| strip_ansi(op_target).len())
            .max()
            .unwrap_or(10);
        let op_w = raw_max.min(60);

        let id_w = entries
            .iter()
            .map(|(id, _, _, _, _)| id.to_string().len())
            .max()
            .unwrap_or(2);

        for (id, date, operation, op_target, message) in entries {
            let colour = color_for_operation(&operation);
            println!(
                "{:>id_w$}  {}  {}  {}",
                id,
                date,
                colour.paint(format!("{:<op_w$}", op_target)),
                message,
            );
        }

        Ok(())
    }
}
