use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::UserId;

/// Wildcard value for the state/city/category selectors.
pub const ALL: &str = "all";

/// Upper price bound that doubles as "no upper bound". Inherited from the
/// original slider maximum: an event priced above it still passes when the
/// filter sits at the cap. Kept as-is; see DESIGN.md.
pub const PRICE_CAP_SENTINEL: Decimal = Decimal::ONE_THOUSAND;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Soonest first.
    #[default]
    Date,
    /// Best-rated first; unrated events rank as 0.
    Rating,
    PriceLow,
    PriceHigh,
    /// Most tickets sold first.
    Popularity,
}

/// Client-local filter state. Defaults are enumerated here once rather
/// than scattered as per-use fallbacks; "clear" resets to `default()`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub search_term: String,
    pub state: String,
    pub city: String,
    pub category: String,
    pub price_min: Decimal,
    pub price_max: Decimal,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub sort_by: SortKey,
    pub sort_by_proximity: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            state: ALL.to_owned(),
            city: ALL.to_owned(),
            category: ALL.to_owned(),
            price_min: Decimal::ZERO,
            price_max: PRICE_CAP_SENTINEL,
            start_date: None,
            end_date: None,
            sort_by: SortKey::default(),
            sort_by_proximity: false,
        }
    }
}

impl FilterState {
    /// True when the filter's upper price bound is the "no limit" sentinel.
    pub fn price_unbounded(&self) -> bool {
        self.price_max == PRICE_CAP_SENTINEL
    }
}

/// A filter state persisted under a user-chosen name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SavedSearch {
    pub id: String,
    pub user_id: UserId,
    pub name: String,
    pub filter: FilterState,
    pub created_at: DateTime<Utc>,
}
