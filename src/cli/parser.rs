use clap::{Parser, Subcommand};

/// Command-line interface definition for MealSetu
/// Feedback-collection backend for meal-quality ratings, backed by SQLite
#[derive(Parser)]
#[command(
    name = "mealsetu",
    version = env!("CARGO_PKG_VERSION"),
    about = "Collect meal-quality feedback over HTTP and store it in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Defaults to `serve` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Create the feedback table and serve the HTTP API
    Serve {
        #[arg(long = "host", help = "Address to bind (default 0.0.0.0)")]
        host: Option<String>,

        #[arg(long = "port", help = "Port to bind (default 5000)")]
        port: Option<u16>,
    },

    /// Initialize the database and configuration
    Init,

    /// Show the effective configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Inspect the database
    Db {
        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}

impl Commands {
    pub fn default_serve() -> Self {
        Commands::Serve {
            host: None,
            port: None,
        }
    }
}
