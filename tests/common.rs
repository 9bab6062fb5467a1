#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use mealsetu::db::Store;
use mealsetu::db::initialize::init_db;
use mealsetu::server::{AppState, serve_with_shutdown};
use std::env;
use std::fs;
use std::path::PathBuf;
use tokio::net::TcpListener;

pub fn mealsetu() -> Command {
    cargo_bin_cmd!("mealsetu")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_mealsetu.db", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Start the real router on an ephemeral port against a fresh database.
/// Returns the base URL, e.g. `http://127.0.0.1:41234`.
pub async fn spawn_app(name: &str) -> String {
    let db_path = setup_test_db(name);
    let store = Store::new(&db_path);
    store.with_conn(|conn| init_db(conn)).expect("init db");

    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let address = listener.local_addr().expect("local addr");

    tokio::spawn(serve_with_shutdown(
        listener,
        AppState::new(store),
        std::future::pending(),
    ));

    format!("http://{address}")
}
