use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::event::{Event, EventId};
use crate::domain::review::Review;

/// One entry of the per-user view log, keyed by event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewRecord {
    pub event_id: EventId,
    pub count: u32,
    pub last_viewed: DateTime<Utc>,
}

/// Everything the scorer knows about one user's history.
#[derive(Clone, Debug, Default)]
pub struct UserActivity {
    /// Events the user bought tickets for (already resolved).
    pub purchased: Vec<Event>,
    /// View-log entries; unresolved ids are skipped at scoring time.
    pub views: Vec<ViewRecord>,
    /// Reviews the user has written.
    pub reviews: Vec<Review>,
}

impl UserActivity {
    pub fn empty() -> Self {
        Self::default()
    }

    /// No purchases, no views, no reviews: the cold-start branch applies.
    pub fn is_cold_start(&self) -> bool {
        self.purchased.is_empty() && self.views.is_empty() && self.reviews.is_empty()
    }
}

/// A scored candidate. Derived per generation and discarded after render;
/// never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub event: Event,
    pub score: f64,
    /// Human-readable reasons, in signal evaluation order; branches that
    /// did not trigger are omitted.
    pub reasons: Vec<String>,
}
