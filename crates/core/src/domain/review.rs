use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::event::EventId;
use super::UserId;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReviewId(pub String);

/// A review left by a ticket holder. Rating is expected in 1..=5; the
/// aggregation layer does not reject out-of-range values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub event_id: EventId,
    pub user_id: UserId,
    pub rating: u8,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// A review counts as positive for recommendation purposes at 4+.
    pub fn is_positive(&self) -> bool {
        self.rating >= 4
    }
}
