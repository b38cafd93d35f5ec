use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{BalanceCommands, MissionCommands, ShopCommands};

/// Main command-line interface for the Bounty mission tracker
///
/// Bounty tracks recurring and one-off missions, pays out BP once per
/// daily cycle when a mission crosses its reward threshold, and lets
/// the balance be spent on shop items behind a per-item cooldown. The
/// daily reset (07:00 Kyiv time) is checked before every command and
/// continuously by `bp watch`.
#[derive(Parser)]
#[command(version, about, name = "bp")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/bounty/bounty.db
    #[arg(long, global = true)]
    pub database_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Apply the x2 "double BP" multiplier for this invocation
    #[arg(long, global = true)]
    pub double: bool,

    /// Apply the x2 "VIP" multiplier for this invocation
    #[arg(long, global = true)]
    pub vip: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Bounty CLI
///
/// The CLI is organized into four command categories:
/// - `mission`: progress operations on the mission board
/// - `balance`: show or adjust the BP balance
/// - `shop`: browse the catalog and buy items
/// - `watch`: keep running and apply the daily reset as it happens
#[derive(Subcommand)]
pub enum Commands {
    /// Manage missions
    #[command(alias = "m")]
    Mission {
        #[command(subcommand)]
        command: MissionCommands,
    },
    /// Show or adjust the BP balance
    #[command(alias = "b")]
    Balance {
        #[command(subcommand)]
        command: Option<BalanceCommands>,
    },
    /// Browse the shop and buy items
    #[command(alias = "s")]
    Shop {
        #[command(subcommand)]
        command: ShopCommands,
    },
    /// Keep running and check for the daily reset every minute
    Watch,
}
