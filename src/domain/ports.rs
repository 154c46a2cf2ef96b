use crate::domain::model::{Service, SlotQuery};
use crate::utils::error::Result;
use async_trait::async_trait;

/// The two read-only backend endpoints the form depends on.
#[async_trait]
pub trait BookingApi: Send + Sync {
    async fn fetch_services(&self) -> Result<Vec<Service>>;
    async fn fetch_slots(&self, query: &SlotQuery) -> Result<Vec<String>>;
}

pub trait BookingConfig: Send + Sync {
    fn base_url(&self) -> &str;
    fn date(&self) -> &str;
    fn service_ids(&self) -> &[String];
}
