use crate::core::catalog::ServiceCatalog;
use crate::core::resolver;
use crate::core::selection::SelectionState;
use crate::domain::model::{RenderedOption, Service, SlotQuery};

/// View state of the time selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotSelector {
    /// The form is incomplete; no query may be issued.
    Disabled,
    /// A query is in flight ("Se verifică disponibilitatea...").
    Checking,
    Ready(Vec<RenderedOption>),
}

/// The booking form's state object: catalog, selection, chosen date and the
/// derived selector contents, owned by one controller and mutated only
/// through these methods.
///
/// Slot responses are matched against a monotonically increasing request
/// number. A response for anything but the most recently issued request is
/// discarded, so a superseded fetch can never overwrite a newer one. Any form
/// mutation also bumps the number, invalidating responses for the previous
/// form state.
#[derive(Debug, Clone)]
pub struct BookingForm {
    catalog: ServiceCatalog,
    selection: SelectionState,
    date: String,
    selector: SlotSelector,
    latest_request: u64,
}

impl BookingForm {
    pub fn new(catalog: ServiceCatalog) -> Self {
        Self {
            catalog,
            selection: SelectionState::new(),
            date: String::new(),
            selector: SlotSelector::Disabled,
            latest_request: 0,
        }
    }

    fn invalidate(&mut self) {
        self.selector = SlotSelector::Disabled;
        self.latest_request += 1;
    }

    pub fn set_date(&mut self, date: &str) {
        self.date = date.to_string();
        self.invalidate();
    }

    /// Returns false on duplicate (silent no-op). Unknown ids are accepted;
    /// the catalog's lenient-skip rule handles them at aggregation time.
    pub fn add_service(&mut self, id: &str) -> bool {
        let added = self.selection.add(id);
        if added {
            self.invalidate();
        }
        added
    }

    pub fn remove_service(&mut self, id: &str) -> bool {
        let removed = self.selection.remove(id);
        if removed {
            self.invalidate();
        }
        removed
    }

    /// The binary gate: a date and at least one service.
    pub fn is_complete(&self) -> bool {
        !self.date.is_empty() && !self.selection.is_empty()
    }

    /// None while the form is incomplete, in which case no network call is
    /// made at all.
    pub fn slot_query(&self) -> Option<SlotQuery> {
        if !self.is_complete() {
            return None;
        }
        Some(SlotQuery {
            date: self.date.clone(),
            service_ids: self.selection.ids().to_vec(),
            total_duration: self.total_duration(),
        })
    }

    /// Marks a query as issued and returns its request number. The caller
    /// hands the number back to `apply_slots` together with the response.
    pub fn begin_request(&mut self) -> u64 {
        self.latest_request += 1;
        self.selector = SlotSelector::Checking;
        self.latest_request
    }

    /// Applies a slot response. Returns false when the response is stale
    /// (its request number was superseded) and was discarded.
    pub fn apply_slots(&mut self, request: u64, today: &str, slots: Vec<String>) -> bool {
        if request != self.latest_request {
            tracing::debug!(request, latest = self.latest_request, "discarding stale slot response");
            return false;
        }
        let options = resolver::resolve_options(&self.date, today, self.selection.ids(), &slots);
        self.selector = SlotSelector::Ready(options);
        true
    }

    pub fn selector(&self) -> &SlotSelector {
        &self.selector
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn selected_ids(&self) -> &[String] {
        self.selection.ids()
    }

    /// Selected services the catalog recognizes, in selection order.
    pub fn selected_services(&self) -> Vec<Service> {
        self.selection
            .ids()
            .iter()
            .filter_map(|id| self.catalog.get(id))
            .cloned()
            .collect()
    }

    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }

    pub fn total_duration(&self) -> u32 {
        self.catalog.total_duration(self.selection.ids())
    }

    pub fn total_price(&self) -> u32 {
        self.catalog.total_price(self.selection.ids())
    }
}
