use crate::cli::{Cli, Commands};
use crate::config::Config;
use anyhow::Result;
use log::debug;

pub mod config;
pub mod parse;
pub mod tags;

/// How a command finished, mapped to the process exit status by `main`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    Failed,
}

/// Load the config named on the command line, or the default one
pub fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => {
            debug!("Loading config from {}", path.display());
            Config::load_from(path)
        }
        None => Config::load(),
    }
}

/// Run the parsed command line
pub fn execute(cli: Cli) -> Result<CommandStatus> {
    match &cli.command {
        Commands::Parse(args) => {
            let config = load_config(&cli)?;
            parse::handle_parse_command(args, &config)
        }
        Commands::Config { action } => {
            config::handle_config_command(action, cli.config.as_deref())?;
            Ok(CommandStatus::Success)
        }
        Commands::Tags => {
            tags::handle_tags_command();
            Ok(CommandStatus::Success)
        }
    }
}
