use crate::configuration::Configuration;
use clap::Parser;
use std::path::PathBuf;

/// Settings come from command line flags, falling back to the environment
/// (a `.env` file is read beforehand) and then to the defaults.
#[derive(Debug, Clone, Parser)]
#[command(version, about = "Appointment booking service")]
pub struct ConfigurationHandler {
    /// Port the HTTP server listens on.
    #[arg(long, env = "BOOKING_PORT", default_value_t = 3033)]
    port: u16,

    /// JSON file holding all bookings.
    #[arg(long, env = "BOOKING_STORE_PATH", default_value = "agendamentos.json")]
    store_path: PathBuf,
}

impl ConfigurationHandler {
    pub fn parse_arguments() -> Self {
        if let Err(err) = dotenvy::dotenv() {
            tracing::debug!(%err, "No .env file loaded");
        }
        Self::parse()
    }
}

impl Configuration for ConfigurationHandler {
    fn port(&self) -> u16 {
        self.port
    }

    fn store_path(&self) -> PathBuf {
        self.store_path.clone()
    }
}
