use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventId(pub String);

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrganizerId(pub String);

/// Lifecycle status of a published event. Wire values keep the
/// Portuguese strings the hosted backend stores.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventStatus {
    #[serde(rename = "ativo")]
    Active,
    #[serde(rename = "cancelado")]
    Cancelled,
    #[serde(rename = "encerrado")]
    Ended,
}

/// An event record as persisted by the external store.
///
/// Invariants such as `tickets_sold <= capacity` and `price >= 0` are
/// expected from the backend but not enforced here; the heuristics
/// tolerate records that violate them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub description: String,
    pub image_url: Option<String>,
    pub location: String,
    pub city: String,
    pub state: String,
    pub date: DateTime<Utc>,
    pub price: Decimal,
    pub capacity: u32,
    pub tickets_sold: u32,
    pub category: String,
    pub status: EventStatus,
    pub organizer_id: OrganizerId,
}

impl Event {
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.date > now
    }

    pub fn is_sold_out(&self) -> bool {
        self.tickets_sold >= self.capacity
    }

    /// Fraction of capacity sold, in [0, 1] for well-formed records.
    /// Zero-capacity events report 0.0 rather than dividing by zero.
    pub fn sales_ratio(&self) -> f64 {
        if self.capacity == 0 {
            return 0.0;
        }
        f64::from(self.tickets_sold) / f64::from(self.capacity)
    }
}
