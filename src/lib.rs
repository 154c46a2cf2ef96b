pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::FileConfig;

pub use crate::adapters::http::HttpBookingApi;
pub use crate::core::catalog::ServiceCatalog;
pub use crate::core::engine::{AvailabilityReport, BookingEngine};
pub use crate::core::form::{BookingForm, SlotSelector};
pub use crate::domain::model::{RenderedOption, Service, SlotQuery, SLOT_CATALOG};
pub use crate::utils::error::{BookingError, Result};
