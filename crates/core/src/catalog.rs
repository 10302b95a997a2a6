//! In-memory snapshot of events and reviews for one render cycle.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::domain::event::{Event, EventId, EventStatus, OrganizerId};
use crate::domain::review::Review;

/// Immutable catalog built from one fetch of the external store. All
/// filtering and scoring reads go through this; nothing mutates it.
#[derive(Clone, Debug, Default)]
pub struct EventCatalog {
    events: Vec<Event>,
    reviews: Vec<Review>,
    by_id: HashMap<EventId, usize>,
}

impl EventCatalog {
    pub fn new(events: Vec<Event>, reviews: Vec<Review>) -> Self {
        let by_id =
            events.iter().enumerate().map(|(index, event)| (event.id.clone(), index)).collect();
        Self { events, reviews, by_id }
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn event(&self, id: &EventId) -> Option<&Event> {
        self.by_id.get(id).map(|index| &self.events[*index])
    }

    /// Events eligible for discovery: status active, dated in the future.
    pub fn active_upcoming(&self, now: DateTime<Utc>) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|event| event.status == EventStatus::Active && event.is_upcoming(now))
            .collect()
    }

    pub fn by_organizer(&self, organizer: &OrganizerId) -> Vec<&Event> {
        self.events.iter().filter(|event| &event.organizer_id == organizer).collect()
    }
}
