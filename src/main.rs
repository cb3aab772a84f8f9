use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use kalendar::cli::Cli;
use kalendar::commands::{self, CommandStatus};
use log::{debug, info};

fn main() -> Result<()> {
    // Initialize logging with custom format
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            use chrono::Local;
            use std::io::Write;
            writeln!(
                buf,
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .init();

    if let Ok(path) = dotenvy::dotenv() {
        debug!("Loaded environment from {}", path.display());
    }

    let cli = Cli::parse();
    info!("Starting Kalendar");

    match commands::execute(cli)? {
        CommandStatus::Success => Ok(()),
        CommandStatus::Failed => std::process::exit(1),
    }
}
