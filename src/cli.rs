use std::path::PathBuf;

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand, ValueEnum};

/// Rota crew duty roster calendar.
#[derive(Parser)]
#[command(name = "rota", version, about = "Crew duty roster calendar generator")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Render the 32-row international rotation table.
    International(RosterArgs),
    /// Render the 31-row domestic rotation grid.
    Domestic(RosterArgs),
}

/// Arguments shared by the roster subcommands.
#[derive(clap::Args)]
pub struct RosterArgs {
    /// Calendar year to render (defaults to the current year).
    #[arg(short, long)]
    pub year: Option<i32>,

    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "rota.toml")]
    pub config: PathBuf,

    /// Override output format from config.
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pin the duty clock to a fixed local timestamp, e.g. 2026-01-02T03:00:00.
    #[arg(long)]
    pub at: Option<NaiveDateTime>,
}

/// Output format for the rendered roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Fixed-width table on stdout.
    Text,
    /// Pretty-printed JSON document.
    Json,
}
