use crate::domain::model::{Service, SlotQuery};
use crate::domain::ports::BookingApi;
use crate::utils::error::{BookingError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// reqwest-backed client for the two backend endpoints.
pub struct HttpBookingApi {
    client: Client,
    base_url: String,
}

impl HttpBookingApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl BookingApi for HttpBookingApi {
    async fn fetch_services(&self) -> Result<Vec<Service>> {
        let endpoint = self.endpoint("/api/services");
        tracing::debug!("GET {}", endpoint);

        let response = self.client.get(&endpoint).send().await?;
        if !response.status().is_success() {
            return Err(BookingError::ApiStatusError {
                endpoint,
                status: response.status().as_u16(),
            });
        }

        Ok(response.json::<Vec<Service>>().await?)
    }

    async fn fetch_slots(&self, query: &SlotQuery) -> Result<Vec<String>> {
        let endpoint = self.endpoint("/get_slots");
        tracing::debug!("GET {} for {}", endpoint, query.date);

        let services = query.service_ids.join(",");
        let duration = query.total_duration.to_string();
        let response = self
            .client
            .get(&endpoint)
            .query(&[
                ("date", query.date.as_str()),
                ("services", services.as_str()),
                ("duration", duration.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BookingError::ApiStatusError {
                endpoint,
                status: response.status().as_u16(),
            });
        }

        Ok(response.json::<Vec<String>>().await?)
    }
}
