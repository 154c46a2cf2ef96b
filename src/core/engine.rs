use crate::core::catalog::ServiceCatalog;
use crate::core::form::{BookingForm, SlotSelector};
use crate::core::resolver;
use crate::domain::model::Service;
use crate::domain::ports::BookingApi;
use crate::utils::error::Result;
use std::fmt::Write;

/// Everything the shell needs to render one availability check.
#[derive(Debug, Clone)]
pub struct AvailabilityReport {
    pub date: String,
    pub services: Vec<Service>,
    pub total_duration: u32,
    pub total_price: u32,
    pub selector: SlotSelector,
}

impl AvailabilityReport {
    /// Textual equivalent of the form's service summary plus time selector.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        for service in &self.services {
            match service.listed_price() {
                Some(price) => {
                    let _ = writeln!(out, "- {} ({} min, {} lei)", service.name, service.duration, price);
                }
                None => {
                    let _ = writeln!(out, "- {} ({} min, no listed price)", service.name, service.duration);
                }
            }
        }
        if !self.services.is_empty() {
            let _ = writeln!(out, "Total: {} min, {} lei", self.total_duration, self.total_price);
        }

        match &self.selector {
            SlotSelector::Disabled => {
                let _ = writeln!(out, "Pick a date and at least one service to see available times.");
            }
            SlotSelector::Checking => {
                let _ = writeln!(out, "Se verifică disponibilitatea...");
            }
            SlotSelector::Ready(options) => {
                let _ = writeln!(out, "Times for {}:", self.date);
                for option in options {
                    let _ = writeln!(out, "  {}", option.label);
                }
            }
        }

        out
    }

    pub fn has_selectable_slot(&self) -> bool {
        match &self.selector {
            SlotSelector::Ready(options) => options.iter().any(|o| o.selectable),
            _ => false,
        }
    }
}

/// Drives one availability check end to end: load the catalog (falling back
/// to the built-ins when the endpoint is unusable), fill the form, and issue
/// the slot query if and only if the form is complete.
pub struct BookingEngine<A: BookingApi> {
    api: A,
}

impl<A: BookingApi> BookingEngine<A> {
    pub fn new(api: A) -> Self {
        Self { api }
    }

    pub async fn load_catalog(&self) -> ServiceCatalog {
        match self.api.fetch_services().await {
            Ok(services) if !services.is_empty() => {
                tracing::debug!("loaded {} services from backend", services.len());
                ServiceCatalog::new(services)
            }
            Ok(_) => {
                tracing::warn!("service endpoint returned an empty list, using built-in fallback");
                ServiceCatalog::fallback()
            }
            Err(e) => {
                tracing::warn!("service endpoint unavailable ({}), using built-in fallback", e);
                ServiceCatalog::fallback()
            }
        }
    }

    /// Slot-query failures propagate; the selector stays in its placeholder
    /// state and no retry is attempted.
    pub async fn check_availability(
        &self,
        date: &str,
        service_ids: &[String],
    ) -> Result<AvailabilityReport> {
        let catalog = self.load_catalog().await;
        let mut form = BookingForm::new(catalog);
        form.set_date(date);
        for id in service_ids {
            if !form.add_service(id) {
                tracing::debug!("ignoring duplicate service '{}'", id);
            }
        }

        if let Some(query) = form.slot_query() {
            tracing::info!(
                "querying slots for {} ({} services, {} min)",
                query.date,
                query.service_ids.len(),
                query.total_duration
            );
            let request = form.begin_request();
            let slots = self.api.fetch_slots(&query).await?;
            tracing::debug!("backend reported {} slots", slots.len());
            form.apply_slots(request, &resolver::today_local(), slots);
        } else {
            tracing::info!("form incomplete, skipping slot query");
        }

        Ok(AvailabilityReport {
            date: form.date().to_string(),
            services: form.selected_services(),
            total_duration: form.total_duration(),
            total_price: form.total_price(),
            selector: form.selector().clone(),
        })
    }
}
