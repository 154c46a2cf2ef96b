use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned status {status} for {endpoint}")]
    ApiStatusError { endpoint: String, status: u16 },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config file error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

pub type Result<T> = std::result::Result<T, BookingError>;

impl BookingError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            BookingError::ApiError(_) | BookingError::ApiStatusError { .. } => {
                "The booking backend could not be reached.".to_string()
            }
            BookingError::SerializationError(_) => {
                "The booking backend returned data in an unexpected format.".to_string()
            }
            BookingError::IoError(_) | BookingError::TomlError(_) => {
                "The configuration file could not be read.".to_string()
            }
            BookingError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            BookingError::MissingConfigError { field } => {
                format!("Missing {}", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            BookingError::ApiError(_) | BookingError::ApiStatusError { .. } => {
                "Check that the backend is running and --base-url points at it.".to_string()
            }
            BookingError::SerializationError(_) => {
                "Verify the backend version matches this client.".to_string()
            }
            BookingError::IoError(_) | BookingError::TomlError(_) => {
                "Check the --config path and the file's TOML syntax.".to_string()
            }
            BookingError::InvalidConfigValueError { field, .. }
            | BookingError::MissingConfigError { field } => {
                format!("Fix the '{}' option and try again.", field)
            }
        }
    }
}
