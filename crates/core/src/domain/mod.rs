pub mod event;
pub mod notification;
pub mod preference;
pub mod review;
pub mod ticket;

pub use event::{Event, EventId, EventStatus, OrganizerId};
pub use notification::{Notification, NotificationId, NotificationKind};
pub use preference::{NotificationSettings, UserPreference};
pub use review::{Review, ReviewId};
pub use ticket::{Ticket, TicketId, TicketStatus};

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);
