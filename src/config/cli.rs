use crate::config::{FileConfig, DEFAULT_BASE_URL};
use crate::domain::ports::BookingConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_iso_date, validate_service_ids, validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "booking-slots")]
#[command(about = "Checks appointment slot availability against the booking backend")]
pub struct CliConfig {
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Appointment date, YYYY-MM-DD. Leave empty to see the incomplete-form state.
    #[arg(long, default_value = "")]
    pub date: String,

    #[arg(long, value_delimiter = ',')]
    pub services: Vec<String>,

    /// Optional TOML config file; fills options not given on the command line.
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Command-line values win; the file only fills options left at their
    /// defaults.
    pub fn apply_file(&mut self, file: &FileConfig) {
        if self.base_url == DEFAULT_BASE_URL {
            self.base_url = file.api.base_url.clone();
        }
        if self.date.is_empty() {
            if let Some(date) = &file.booking.date {
                self.date = date.clone();
            }
        }
        if self.services.is_empty() {
            if let Some(services) = &file.booking.services {
                self.services = services.clone();
            }
        }
    }
}

impl BookingConfig for CliConfig {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn date(&self) -> &str {
        &self.date
    }

    fn service_ids(&self) -> &[String] {
        &self.services
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        if !self.date.is_empty() {
            validate_iso_date("date", &self.date)?;
        }
        validate_service_ids("services", &self.services)?;
        Ok(())
    }
}
