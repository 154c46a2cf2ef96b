pub mod catalog;
pub mod engine;
pub mod form;
pub mod resolver;
pub mod selection;

pub use crate::domain::model::{RenderedOption, Service, SlotQuery, SLOT_CATALOG};
pub use crate::domain::ports::{BookingApi, BookingConfig};
pub use crate::utils::error::Result;
