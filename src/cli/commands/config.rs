use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                println!("📄 {}\n", path.display());
                println!("{}", content);
            } else {
                println!("No configuration file found at {}", path.display());
            }
        }

        if *check {
            if cfg.database.trim().is_empty() {
                return Err(AppError::Config("database path is empty".to_string()));
            }
            if cfg.attendances_per_page < 1 || cfg.workers_per_page < 1 {
                return Err(AppError::Config(
                    "page sizes must be at least 1".to_string(),
                ));
            }
            println!("✅ Configuration is valid.");
        }
    }
    Ok(())
}
