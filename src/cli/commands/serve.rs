use tokio::net::TcpListener;
use tracing::info;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::Store;
use crate::db::initialize::init_db;
use crate::errors::AppResult;
use crate::server::{self, AppState, logging};

/// Handle the `serve` command (also the default when no subcommand is given)
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (host, port) = match cmd {
        Commands::Serve { host, port } => (
            host.clone().unwrap_or_else(|| cfg.host.clone()),
            port.unwrap_or(cfg.port),
        ),
        _ => (cfg.host.clone(), cfg.port),
    };

    logging::setup();

    // No traffic is served against a missing table
    let store = Store::new(cfg.database_path());
    store.with_conn(|conn| init_db(conn))?;
    info!("Database ready at {}", store.path().display());

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async move {
        info!("Binding to {host}:{port}");
        let listener = TcpListener::bind((host.as_str(), port)).await?;
        server::serve(listener, AppState::new(store)).await
    })
}
