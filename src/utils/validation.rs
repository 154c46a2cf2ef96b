use crate::utils::error::{BookingError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(BookingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(BookingError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(BookingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

fn iso_date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"))
}

/// The fixed-width `YYYY-MM-DD` shape matters beyond parseability: date
/// comparisons downstream are lexical.
pub fn validate_iso_date(field_name: &str, date: &str) -> Result<()> {
    if !iso_date_pattern().is_match(date) {
        return Err(BookingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: date.to_string(),
            reason: "Date must be in YYYY-MM-DD format".to_string(),
        });
    }

    if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return Err(BookingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: date.to_string(),
            reason: "Not a valid calendar date".to_string(),
        });
    }

    Ok(())
}

pub fn validate_service_ids(field_name: &str, ids: &[String]) -> Result<()> {
    for id in ids {
        if id.trim().is_empty() {
            return Err(BookingError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: id.clone(),
                reason: "Service id cannot be empty".to_string(),
            });
        }
        // Ids travel comma-joined in the slot query string.
        if id.contains(',') {
            return Err(BookingError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: id.clone(),
                reason: "Service id cannot contain commas".to_string(),
            });
        }
    }
    Ok(())
}
