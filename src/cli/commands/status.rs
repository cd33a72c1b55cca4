use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::status::work_status;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{RESET, color_for_status};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { worker, at } = cmd {
        let now = match at {
            Some(s) => date::parse_datetime(s)?,
            None => date::now(),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        let who = queries::get_worker(&pool.conn, *worker)?
            .ok_or(AppError::WorkerNotFound(*worker))?;
        let status = work_status(&mut pool.conn, *worker, now)?;

        let color = color_for_status(status.is_during(), status.is_break());
        println!("{} is {}{}{}", who.name, color, status, RESET);
    }
    Ok(())
}
