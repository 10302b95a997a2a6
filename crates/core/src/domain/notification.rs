use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::event::{Event, EventId};
use super::ticket::Ticket;
use super::UserId;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationId(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    TicketSold,
    EventCancelled,
    RefundRequested,
}

/// An in-app notification addressed to a user.
///
/// Organizer-facing notices (sales, refund requests) are always keyed by
/// the organizer's user id. The original front-end mixed organizer and
/// event ids as recipients across code paths; the constructors here take
/// the recipient explicitly so that cannot happen by accident.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub recipient_id: UserId,
    pub kind: NotificationKind,
    pub message: String,
    pub event_id: EventId,
    pub read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    fn new(
        recipient_id: UserId,
        kind: NotificationKind,
        message: String,
        event_id: EventId,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: NotificationId(format!("ntf-{}", Uuid::new_v4())),
            recipient_id,
            kind,
            message,
            event_id,
            read: false,
            created_at: now,
        }
    }

    pub fn ticket_sold(
        organizer_user: UserId,
        event: &Event,
        ticket: &Ticket,
        now: DateTime<Utc>,
    ) -> Self {
        Self::new(
            organizer_user,
            NotificationKind::TicketSold,
            format!("{} ticket(s) sold for \"{}\"", ticket.quantity, event.title),
            event.id.clone(),
            now,
        )
    }

    pub fn event_cancelled(buyer: UserId, event: &Event, now: DateTime<Utc>) -> Self {
        Self::new(
            buyer,
            NotificationKind::EventCancelled,
            format!("\"{}\" was cancelled by the organizer", event.title),
            event.id.clone(),
            now,
        )
    }

    pub fn refund_requested(
        organizer_user: UserId,
        event: &Event,
        ticket: &Ticket,
        now: DateTime<Utc>,
    ) -> Self {
        Self::new(
            organizer_user,
            NotificationKind::RefundRequested,
            format!("Refund requested for {} ticket(s) to \"{}\"", ticket.quantity, event.title),
            event.id.clone(),
            now,
        )
    }

    pub fn mark_read(&mut self) {
        self.read = true;
    }
}
