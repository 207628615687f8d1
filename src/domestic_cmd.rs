use anyhow::{Context, Result};
use chrono::Datelike;
use tracing::info;

use rota_duty::{DutySnapshot, FixedClock, SystemClock};
use rota_roster::domestic_roster;

use crate::cli::{OutputFormat, RosterArgs};
use crate::config::RotaConfig;
use crate::render;

/// Run the `domestic` subcommand.
pub fn run(args: RosterArgs) -> Result<()> {
    let config = RotaConfig::load_or_default(&args.config)?;
    let snapshot = match args.at {
        Some(instant) => DutySnapshot::capture(&FixedClock::new(instant)),
        None => DutySnapshot::capture(&SystemClock),
    };
    let year = args.year.unwrap_or_else(|| snapshot.today.year());

    info!(year, "building domestic roster");
    let rows = domestic_roster(year)
        .with_context(|| format!("failed to build domestic roster for year {year}"))?;

    match render::resolve_format(args.format, &config)? {
        OutputFormat::Text => {
            print!(
                "{}",
                render::domestic_text(year, &rows, &snapshot, config.output.highlight)
            );
        }
        OutputFormat::Json => {
            println!("{}", render::roster_json(year, &rows, &snapshot)?);
        }
    }
    Ok(())
}
