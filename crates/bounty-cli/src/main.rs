//! Bounty CLI Application
//!
//! Command-line interface for the Bounty mission tracker.

mod args;
mod cli;
mod renderer;
mod watch;

use anyhow::{Context, Result};
use args::{Args, Commands};
use bounty_core::{params::ListMissions, Multipliers, TrackerBuilder};
use clap::Parser;
use cli::Cli;
use log::info;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        double,
        vip,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_database_path(database_file)
        .with_multipliers(Multipliers { double, vip })
        .build()
        .context("Failed to initialize tracker")?;

    info!("Bounty started");

    if let Some(Commands::Watch) = command {
        info!("Starting watch mode");
        return watch::run(tracker).await;
    }

    let mut cli = Cli::new(tracker, TerminalRenderer::new(!no_color));
    cli.check_reset();

    match command {
        Some(Commands::Mission { command }) => cli.handle_mission_command(command),
        Some(Commands::Balance { command }) => cli.handle_balance_command(command),
        Some(Commands::Shop { command }) => cli.handle_shop_command(command),
        Some(Commands::Watch) => unreachable!("handled above"),
        None => cli.list_missions(&ListMissions { all: false }),
    }
}
