use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// TOML config file for the CLI:
///
/// ```toml
/// [api]
/// base_url = "http://localhost:5000"
///
/// [booking]
/// date = "2099-01-01"
/// services = ["tire-change", "balancing"]
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub api: ApiSection,
    #[serde(default)]
    pub booking: BookingSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSection {
    pub base_url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookingSection {
    pub date: Option<String>,
    pub services: Option<Vec<String>>,
}

impl FileConfig {
    pub fn from_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }
}
