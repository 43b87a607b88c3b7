//! Declick CLI
//!
//! Command-line interface for the de-click session.

use clap::Parser;
use env_logger::Env;
use log::info;

use declick_session::cli::{commands, Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();

    info!("Declick session v{}", env!("CARGO_PKG_VERSION"));

    let config = cli.config.as_deref();
    match cli.command {
        Some(Commands::Defaults) => commands::show_defaults(config)?,
        Some(Commands::Inspect {
            fixture,
            channel,
            threshold,
            max_length,
        }) => commands::inspect(&fixture, channel, threshold, max_length, config)?,
        None => {
            println!("Declick session v{}", env!("CARGO_PKG_VERSION"));
            println!("Use --help for available commands");
        }
    }

    Ok(())
}
