use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            header(format!("Configuration ({})", Config::config_file().display()));
            println!("{}", cfg.to_yaml()?);
        } else {
            warning("Nothing to do: pass --print");
        }
    }

    Ok(())
}
