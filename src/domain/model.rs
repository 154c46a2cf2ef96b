use serde::{Deserialize, Serialize};

/// The day's bookable half-hour marks, in display order. Fixed configuration,
/// not derived from backend data.
pub const SLOT_CATALOG: [&str; 20] = [
    "08:00", "08:30", "09:00", "09:30", "10:00", "10:30", "11:00", "11:30",
    "12:00", "12:30", "13:00", "13:30", "14:00", "14:30", "15:00", "15:30",
    "16:00", "16:30", "17:00", "17:30",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    pub duration: u32,
    #[serde(default)]
    pub price: u32,
}

impl Service {
    /// `price == 0` means the service has no listed price, which renders
    /// differently from an actual amount.
    pub fn listed_price(&self) -> Option<u32> {
        if self.price == 0 {
            None
        } else {
            Some(self.price)
        }
    }
}

/// One entry of the rendered time selector. Ephemeral: recomputed on every
/// date or selection change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedOption {
    pub id: String,
    pub label: String,
    pub selectable: bool,
}

/// Parameters of a single slot-availability request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotQuery {
    pub date: String,
    pub service_ids: Vec<String>,
    pub total_duration: u32,
}
