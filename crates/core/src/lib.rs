pub mod catalog;
pub mod config;
pub mod discovery;
pub mod domain;
pub mod errors;
pub mod geo;
pub mod moderation;
pub mod ratings;
pub mod recommend;
pub mod wallet;

pub use catalog::EventCatalog;
pub use discovery::{FilterPipeline, FilterState, SavedSearch, SortKey};
pub use domain::{
    Event, EventId, EventStatus, Notification, NotificationId, NotificationKind, OrganizerId,
    Review, ReviewId, Ticket, TicketId, TicketStatus, UserId, UserPreference,
};
pub use errors::{ApplicationError, DomainError, InterfaceError};
pub use geo::{haversine_km, Coordinate};
pub use moderation::{
    screen, ImageModerator, ModerationPolicy, ModerationVerdict, PermissiveModerator,
    ScreeningDecision,
};
pub use ratings::{aggregate, RatingSummary};
pub use recommend::{
    event_similarity, Recommendation, RecommendationEngine, ScoringWeights, UserActivity,
    ViewRecord,
};
