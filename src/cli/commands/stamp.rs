use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stamp;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stamp { action, worker, at } = cmd {
        let now = match at {
            Some(s) => date::parse_datetime(s)?,
            None => date::now(),
        };

        let mut pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        stamp::stamp(&mut pool.conn, *action, *worker, now)?;

        success(format!(
            "Recorded {} for worker {} at {}",
            action.as_str(),
            worker,
            now.format("%Y-%m-%d %H:%M:%S")
        ));
    }
    Ok(())
}
