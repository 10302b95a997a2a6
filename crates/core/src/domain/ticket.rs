use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::event::{Event, EventId};
use super::UserId;
use crate::errors::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TicketId(pub String);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TicketStatus {
    #[serde(rename = "ativo")]
    Active,
    #[serde(rename = "usado")]
    Used,
}

/// A purchased ticket. `ticket_code` is the opaque string rendered as the
/// QR payload at the venue gate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: TicketId,
    pub event_id: EventId,
    pub buyer_id: UserId,
    pub quantity: u32,
    pub total_price: Decimal,
    pub ticket_code: String,
    pub status: TicketStatus,
    pub purchase_date: DateTime<Utc>,
}

impl Ticket {
    /// Issue a ticket against an event, computing the total and minting an
    /// opaque code. Rejects zero quantities and purchases that would exceed
    /// the remaining capacity.
    pub fn issue(
        event: &Event,
        buyer_id: UserId,
        quantity: u32,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if quantity == 0 {
            return Err(DomainError::InvariantViolation(
                "ticket quantity must be at least 1".to_owned(),
            ));
        }
        let remaining = event.capacity.saturating_sub(event.tickets_sold);
        if quantity > remaining {
            return Err(DomainError::InsufficientCapacity {
                event_id: event.id.clone(),
                requested: quantity,
                remaining,
            });
        }

        let id = Uuid::new_v4();
        Ok(Self {
            id: TicketId(format!("tkt-{id}")),
            event_id: event.id.clone(),
            buyer_id,
            quantity,
            total_price: event.price * Decimal::from(quantity),
            ticket_code: format!("ING-{}", id.simple()),
            status: TicketStatus::Active,
            purchase_date: now,
        })
    }

    pub fn mark_used(&mut self) -> Result<(), DomainError> {
        if self.status == TicketStatus::Used {
            return Err(DomainError::TicketAlreadyUsed { ticket_id: self.id.clone() });
        }
        self.status = TicketStatus::Used;
        Ok(())
    }
}
