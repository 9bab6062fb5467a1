use std::fs;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::Store;
use crate::db::stats::feedback_stats;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db { info } = cmd {
        if !*info {
            warning("Nothing to do: pass --info");
            return Ok(());
        }

        let db_path = cfg.database_path();
        if !db_path.exists() {
            warning(format!(
                "Database {} does not exist yet; run `mealsetu init`",
                db_path.display()
            ));
            return Ok(());
        }

        let stats = Store::new(&db_path).with_conn(|conn| feedback_stats(conn))?;

        let file_size = fs::metadata(&db_path).map(|m| m.len()).unwrap_or(0);
        let file_kb = file_size as f64 / 1024.0;

        header("Database");
        println!("• File:            {}", db_path.display());
        println!("• Size:            {:.1} KB", file_kb);
        println!("• Total feedbacks: {}", stats.total);
        println!("• First received:  {}", stats.first.as_deref().unwrap_or("--"));
        println!("• Last received:   {}", stats.last.as_deref().unwrap_or("--"));
    }

    Ok(())
}
