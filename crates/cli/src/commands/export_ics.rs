use chrono::Utc;

use ingresso_core::config::{AppConfig, LoadOptions};
use ingresso_core::domain::event::EventId;
use ingresso_core::domain::{Ticket, UserId};
use ingresso_core::errors::{ApplicationError, DomainError};
use ingresso_core::wallet::{ics, qr_image_url};

use super::CommandResult;

pub fn run(event_id: &str) -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "export-ics",
                ApplicationError::Configuration(error.to_string()),
                2,
            )
        }
    };

    let events = match super::load_events(&config) {
        Ok(events) => events,
        Err(message) => {
            return CommandResult::failure("export-ics", ApplicationError::Store(message), 3)
        }
    };

    let target = EventId(event_id.to_owned());
    let Some(event) = events.iter().find(|event| event.id == target) else {
        return CommandResult::failure(
            "export-ics",
            DomainError::UnknownEvent(target).into(),
            4,
        );
    };

    let now = Utc::now();
    let ticket = match Ticket::issue(event, UserId("demo".to_owned()), 1, now) {
        Ok(ticket) => ticket,
        Err(error) => return CommandResult::failure("export-ics", error.into(), 4),
    };

    let mut output = ics::export_event(event, &ticket, now);
    output.push_str(&format!("\nQR: {}\n", qr_image_url(&ticket.ticket_code)));
    CommandResult::ok(output)
}
