use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::Store;
use crate::db::initialize::init_db;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the configuration file (skipped in test mode)
///  - the SQLite database and its `feedbacks` table
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if !cli.test {
        let path = Config::config_file();
        cfg.save_to(&path)?;
        success(format!("Config file : {}", path.display()));
    }

    let db_path = cfg.database_path();
    info(format!("Initializing database {}", db_path.display()));

    Store::new(&db_path).with_conn(|conn| init_db(conn))?;

    success(format!("Database initialized at {}", db_path.display()));
    Ok(())
}
