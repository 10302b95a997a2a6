//! In-memory repository implementations backing tests and the demo CLI.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use ingresso_core::discovery::SavedSearch;
use ingresso_core::domain::event::{Event, EventId, OrganizerId};
use ingresso_core::domain::notification::{Notification, NotificationId};
use ingresso_core::domain::preference::UserPreference;
use ingresso_core::domain::review::Review;
use ingresso_core::domain::ticket::Ticket;
use ingresso_core::domain::UserId;
use ingresso_core::recommend::ViewRecord;

use crate::{
    EventRepository, NotificationRepository, PreferenceRepository, RepositoryError,
    ReviewRepository, SavedSearchRepository, TicketRepository, ViewLogStore,
};

#[derive(Default)]
pub struct InMemoryEventRepository {
    events: RwLock<HashMap<String, Event>>,
}

impl InMemoryEventRepository {
    pub async fn seeded(events: Vec<Event>) -> Self {
        let repository = Self::default();
        {
            let mut guard = repository.events.write().await;
            for event in events {
                guard.insert(event.id.0.clone(), event);
            }
        }
        repository
    }
}

#[async_trait]
impl EventRepository for InMemoryEventRepository {
    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, RepositoryError> {
        let events = self.events.read().await;
        Ok(events.get(&id.0).cloned())
    }

    async fn list(&self) -> Result<Vec<Event>, RepositoryError> {
        let events = self.events.read().await;
        Ok(events.values().cloned().collect())
    }

    async fn list_by_organizer(
        &self,
        organizer: &OrganizerId,
    ) -> Result<Vec<Event>, RepositoryError> {
        let events = self.events.read().await;
        Ok(events.values().filter(|event| &event.organizer_id == organizer).cloned().collect())
    }

    async fn save(&self, event: Event) -> Result<(), RepositoryError> {
        let mut events = self.events.write().await;
        events.insert(event.id.0.clone(), event);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryReviewRepository {
    reviews: RwLock<Vec<Review>>,
}

#[async_trait]
impl ReviewRepository for InMemoryReviewRepository {
    async fn list_for_event(&self, event_id: &EventId) -> Result<Vec<Review>, RepositoryError> {
        let reviews = self.reviews.read().await;
        Ok(reviews.iter().filter(|review| &review.event_id == event_id).cloned().collect())
    }

    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Review>, RepositoryError> {
        let reviews = self.reviews.read().await;
        Ok(reviews.iter().filter(|review| &review.user_id == user_id).cloned().collect())
    }

    async fn list(&self) -> Result<Vec<Review>, RepositoryError> {
        let reviews = self.reviews.read().await;
        Ok(reviews.clone())
    }

    async fn save(&self, review: Review) -> Result<(), RepositoryError> {
        let mut reviews = self.reviews.write().await;
        reviews.push(review);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryTicketRepository {
    tickets: RwLock<HashMap<String, Ticket>>,
}

#[async_trait]
impl TicketRepository for InMemoryTicketRepository {
    async fn list_for_buyer(&self, buyer: &UserId) -> Result<Vec<Ticket>, RepositoryError> {
        let tickets = self.tickets.read().await;
        Ok(tickets.values().filter(|ticket| &ticket.buyer_id == buyer).cloned().collect())
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<Ticket>, RepositoryError> {
        let tickets = self.tickets.read().await;
        Ok(tickets.values().find(|ticket| ticket.ticket_code == code).cloned())
    }

    async fn save(&self, ticket: Ticket) -> Result<(), RepositoryError> {
        let mut tickets = self.tickets.write().await;
        tickets.insert(ticket.id.0.clone(), ticket);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryPreferenceRepository {
    preferences: RwLock<HashMap<String, UserPreference>>,
}

#[async_trait]
impl PreferenceRepository for InMemoryPreferenceRepository {
    async fn find_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<UserPreference>, RepositoryError> {
        let preferences = self.preferences.read().await;
        Ok(preferences.get(&user_id.0).cloned())
    }

    async fn save(&self, preference: UserPreference) -> Result<(), RepositoryError> {
        let mut preferences = self.preferences.write().await;
        preferences.insert(preference.user_id.0.clone(), preference);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryNotificationRepository {
    notifications: RwLock<HashMap<String, Notification>>,
}

#[async_trait]
impl NotificationRepository for InMemoryNotificationRepository {
    async fn list_for_recipient(
        &self,
        recipient: &UserId,
    ) -> Result<Vec<Notification>, RepositoryError> {
        let notifications = self.notifications.read().await;
        let mut listed: Vec<Notification> = notifications
            .values()
            .filter(|notification| &notification.recipient_id == recipient)
            .cloned()
            .collect();
        listed.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(listed)
    }

    async fn save(&self, notification: Notification) -> Result<(), RepositoryError> {
        let mut notifications = self.notifications.write().await;
        notifications.insert(notification.id.0.clone(), notification);
        Ok(())
    }

    async fn mark_read(&self, id: &NotificationId) -> Result<(), RepositoryError> {
        let mut notifications = self.notifications.write().await;
        if let Some(notification) = notifications.get_mut(&id.0) {
            notification.mark_read();
        }
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemorySavedSearchRepository {
    searches: RwLock<HashMap<String, SavedSearch>>,
}

#[async_trait]
impl SavedSearchRepository for InMemorySavedSearchRepository {
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<SavedSearch>, RepositoryError> {
        let searches = self.searches.read().await;
        Ok(searches.values().filter(|search| &search.user_id == user_id).cloned().collect())
    }

    async fn save(&self, search: SavedSearch) -> Result<(), RepositoryError> {
        let mut searches = self.searches.write().await;
        searches.insert(search.id.clone(), search);
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        let mut searches = self.searches.write().await;
        searches.remove(id);
        Ok(())
    }
}

/// View log keyed by (user, event), bumping a counter per view.
#[derive(Default)]
pub struct InMemoryViewLog {
    views: RwLock<HashMap<(String, String), ViewRecord>>,
}

#[async_trait]
impl ViewLogStore for InMemoryViewLog {
    async fn record_view(
        &self,
        user_id: &UserId,
        event_id: &EventId,
        at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        let mut views = self.views.write().await;
        let entry = views
            .entry((user_id.0.clone(), event_id.0.clone()))
            .or_insert_with(|| ViewRecord { event_id: event_id.clone(), count: 0, last_viewed: at });
        entry.count += 1;
        entry.last_viewed = at;
        Ok(())
    }

    async fn views_for_user(&self, user_id: &UserId) -> Result<Vec<ViewRecord>, RepositoryError> {
        let views = self.views.read().await;
        Ok(views
            .iter()
            .filter(|((user, _), _)| user == &user_id.0)
            .map(|(_, record)| record.clone())
            .collect())
    }
}
