use crate::domain::model::Service;

/// In-memory view of the service list served by `/api/services`. Ids are
/// unique; on duplicates the first occurrence wins.
#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    services: Vec<Service>,
}

impl ServiceCatalog {
    pub fn new(services: Vec<Service>) -> Self {
        let mut deduped: Vec<Service> = Vec::with_capacity(services.len());
        for service in services {
            if deduped.iter().any(|existing| existing.id == service.id) {
                tracing::warn!("duplicate service id '{}' in catalog, keeping first", service.id);
                continue;
            }
            deduped.push(service);
        }
        Self { services: deduped }
    }

    /// The two built-in services the form falls back to when the catalog
    /// endpoint is unreachable or returns nothing usable.
    pub fn fallback() -> Self {
        Self {
            services: vec![
                Service {
                    id: "tire-change".to_string(),
                    name: "Schimb Anvelope Sezonier".to_string(),
                    duration: 60,
                    price: 200,
                },
                Service {
                    id: "balancing".to_string(),
                    name: "Echilibrare Roți".to_string(),
                    duration: 30,
                    price: 50,
                },
            ],
        }
    }

    pub fn get(&self, id: &str) -> Option<&Service> {
        self.services.iter().find(|service| service.id == id)
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }

    /// Unknown ids are skipped, not rejected. The form keeps working with
    /// whatever subset of the selection the catalog recognizes.
    pub fn total_duration(&self, ids: &[String]) -> u32 {
        ids.iter()
            .filter_map(|id| self.get(id))
            .map(|service| service.duration)
            .sum()
    }

    /// Same lenient-skip rule as `total_duration`.
    pub fn total_price(&self, ids: &[String]) -> u32 {
        ids.iter()
            .filter_map(|id| self.get(id))
            .map(|service| service.price)
            .sum()
    }
}
