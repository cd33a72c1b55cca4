use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Worker { add, list, search } = cmd {
        let pool = DbPool::new(&cfg.database)?;
        init_db(&pool.conn)?;

        if let Some(name) = add {
            let id = queries::insert_worker(&pool.conn, name)?;
            log::ttlog(
                &pool.conn,
                "worker_add",
                &id.to_string(),
                &format!("Registered worker '{}'", name),
            )?;
            success(format!("Registered worker '{}' with id {}", name, id));
        }

        if *list || search.is_some() {
            let workers = queries::list_workers(&pool.conn, search.as_deref())?;

            if workers.is_empty() {
                println!("No workers registered.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column {
                    header: "ID".to_string(),
                    width: 4,
                },
                Column {
                    header: "Name".to_string(),
                    width: 12,
                },
            ]);
            for w in workers {
                table.add_row(vec![w.id.to_string(), w.name]);
            }
            table.autofit();
            print!("{}", table.render());
        }
    }
    Ok(())
}
