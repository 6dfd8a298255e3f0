use clap::{Parser, Subcommand};
use skycast_core::Config;

use crate::session;

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "7timer forecast dashboard for the terminal")]
pub struct Cli {
    /// Without a subcommand, opens the interactive dashboard.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// One-shot dashboard for a city or an explicit coordinate.
    Show {
        /// City name from the built-in table, matched case-insensitively.
        city: Option<String>,

        /// Latitude, paired with --lon.
        #[arg(long, requires = "lon", allow_hyphen_values = true)]
        lat: Option<f64>,

        /// Longitude, paired with --lat.
        #[arg(long, requires = "lat", allow_hyphen_values = true)]
        lon: Option<f64>,

        /// Display temperatures in Fahrenheit.
        #[arg(long)]
        fahrenheit: bool,
    },

    /// Set the startup city and temperature unit.
    Configure,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;
        tracing::debug!(?config, "configuration loaded");

        match self.command {
            None => session::interactive(config).await,
            Some(Command::Show {
                city,
                lat,
                lon,
                fahrenheit,
            }) => session::show_once(config, city, lat, lon, fahrenheit).await,
            Some(Command::Configure) => session::configure(),
        }
    }
}
