use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::monthly::monthly_attendance;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::utils::date;
use crate::utils::formatting::{secs2readable, time_or_dashes};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Monthly {
        month,
        worker,
        at,
        json,
    } = cmd
    {
        let first = date::parse_month(month)?;
        let today = match at {
            Some(s) => date::parse_date(s)?,
            None => date::today(),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let who = queries::get_worker(&pool.conn, *worker)?
            .ok_or(AppError::WorkerNotFound(*worker))?;
        let rows = monthly_attendance(&mut pool.conn, *worker, first, today)?;

        if *json {
            println!("{}", serde_json::to_string(&rows)?);
            return Ok(());
        }

        if rows.is_empty() {
            println!("No days to report for {} in {}", who.name, month);
            return Ok(());
        }

        println!("📅 Attendance of {} for {}", who.name, month);

        let mut table = Table::new(vec![
            Column {
                header: "Date".to_string(),
                width: 10,
            },
            Column {
                header: "Shift start".to_string(),
                width: 11,
            },
            Column {
                header: "Shift end".to_string(),
                width: 9,
            },
            Column {
                header: "Break".to_string(),
                width: 11,
            },
            Column {
                header: "Work".to_string(),
                width: 11,
            },
        ]);

        for row in &rows {
            table.add_row(vec![
                row.date.to_string(),
                time_or_dashes(row.shift_begun_at),
                time_or_dashes(row.shift_ended_at),
                secs2readable(row.break_seconds),
                secs2readable(row.work_seconds),
            ]);
        }
        table.autofit();
        print!("{}", table.render());
    }
    Ok(())
}
