//! Repository ports over the externally-owned entity collections.
//!
//! The hosted backend owns persistence; this crate only defines the
//! boundary the heuristics consume, plus in-memory implementations for
//! tests and the demo CLI.

use async_trait::async_trait;
use thiserror::Error;

use ingresso_core::discovery::SavedSearch;
use ingresso_core::domain::event::{Event, EventId, OrganizerId};
use ingresso_core::domain::notification::Notification;
use ingresso_core::domain::preference::UserPreference;
use ingresso_core::domain::review::Review;
use ingresso_core::domain::ticket::Ticket;
use ingresso_core::domain::UserId;
use ingresso_core::recommend::ViewRecord;

pub mod fixtures;
pub mod memory;

pub use memory::{
    InMemoryEventRepository, InMemoryNotificationRepository, InMemoryPreferenceRepository,
    InMemoryReviewRepository, InMemorySavedSearchRepository, InMemoryTicketRepository,
    InMemoryViewLog,
};

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("decode error: {0}")]
    Decode(String),
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn find_by_id(&self, id: &EventId) -> Result<Option<Event>, RepositoryError>;
    async fn list(&self) -> Result<Vec<Event>, RepositoryError>;
    async fn list_by_organizer(
        &self,
        organizer: &OrganizerId,
    ) -> Result<Vec<Event>, RepositoryError>;
    async fn save(&self, event: Event) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    async fn list_for_event(&self, event_id: &EventId) -> Result<Vec<Review>, RepositoryError>;
    async fn list_by_user(&self, user_id: &UserId) -> Result<Vec<Review>, RepositoryError>;
    async fn list(&self) -> Result<Vec<Review>, RepositoryError>;
    async fn save(&self, review: Review) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait TicketRepository: Send + Sync {
    async fn list_for_buyer(&self, buyer: &UserId) -> Result<Vec<Ticket>, RepositoryError>;
    async fn find_by_code(&self, code: &str) -> Result<Option<Ticket>, RepositoryError>;
    async fn save(&self, ticket: Ticket) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait PreferenceRepository: Send + Sync {
    async fn find_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<UserPreference>, RepositoryError>;
    async fn save(&self, preference: UserPreference) -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait NotificationRepository: Send + Sync {
    async fn list_for_recipient(
        &self,
        recipient: &UserId,
    ) -> Result<Vec<Notification>, RepositoryError>;
    async fn save(&self, notification: Notification) -> Result<(), RepositoryError>;
    async fn mark_read(&self, id: &ingresso_core::domain::NotificationId)
        -> Result<(), RepositoryError>;
}

#[async_trait]
pub trait SavedSearchRepository: Send + Sync {
    async fn list_for_user(&self, user_id: &UserId) -> Result<Vec<SavedSearch>, RepositoryError>;
    async fn save(&self, search: SavedSearch) -> Result<(), RepositoryError>;
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;
}

/// The per-user view log, as an explicit port instead of ambient browser
/// storage, so tests and the CLI can inject their own.
#[async_trait]
pub trait ViewLogStore: Send + Sync {
    async fn record_view(
        &self,
        user_id: &UserId,
        event_id: &EventId,
        at: chrono::DateTime<chrono::Utc>,
    ) -> Result<(), RepositoryError>;
    async fn views_for_user(&self, user_id: &UserId) -> Result<Vec<ViewRecord>, RepositoryError>;
}
