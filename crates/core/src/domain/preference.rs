use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::UserId;

/// Stored discovery preferences, one record per user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserPreference {
    pub user_id: UserId,
    pub favorite_categories: Vec<String>,
    pub preferred_states: Vec<String>,
    pub preferred_cities: Vec<String>,
    pub price_range_min: Decimal,
    pub price_range_max: Decimal,
    pub notifications: NotificationSettings,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub new_events: bool,
    pub price_drops: bool,
    pub event_reminders: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self { new_events: true, price_drops: false, event_reminders: true }
    }
}

impl UserPreference {
    pub fn empty(user_id: UserId) -> Self {
        Self {
            user_id,
            favorite_categories: Vec::new(),
            preferred_states: Vec::new(),
            preferred_cities: Vec::new(),
            price_range_min: Decimal::ZERO,
            price_range_max: Decimal::ONE_THOUSAND,
            notifications: NotificationSettings::default(),
        }
    }

    pub fn price_in_range(&self, price: Decimal) -> bool {
        price >= self.price_range_min && price <= self.price_range_max
    }
}
