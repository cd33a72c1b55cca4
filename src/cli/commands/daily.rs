use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::daily::daily_attendances;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date;
use crate::utils::formatting::{secs2readable, time_or_dashes};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Daily {
        date: date_arg,
        page,
        per_page,
        json,
    } = cmd
    {
        let day = match date_arg {
            Some(s) => date::parse_date(s)?,
            None => date::today(),
        };
        let per_page = (*per_page).unwrap_or(cfg.attendances_per_page);

        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let result = daily_attendances(&mut pool.conn, day, *page, per_page)?;

        if *json {
            println!("{}", serde_json::to_string(&result)?);
            return Ok(());
        }

        if result.rows.is_empty() {
            println!("No attendance for {}", day);
            return Ok(());
        }

        let pages = (result.total + result.per_page - 1) / result.per_page;
        println!("📅 Attendance for {} (page {} of {})", day, result.page, pages);

        let mut table = Table::new(vec![
            Column {
                header: "Worker".to_string(),
                width: 12,
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

        for row in &result.rows {
            table.add_row(vec![
                row.worker_name.clone(),
                row.shift_begun_at.format("%H:%M").to_string(),
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
