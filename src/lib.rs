//! MealSetu library root.
//! Exposes the CLI parser, the HTTP server, storage and the high-level run() function.

pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod server;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let command = cli.command.clone().unwrap_or_else(Commands::default_serve);

    match &command {
        Commands::Serve { .. } => cli::commands::serve::handle(&command, cfg),
        Commands::Init => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Test mode never reads the user's config file
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
