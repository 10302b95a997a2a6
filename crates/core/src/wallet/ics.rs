//! Client-generated ICS (RFC 5545) export for a purchased ticket.

use chrono::{DateTime, Duration, Utc};

use crate::domain::event::Event;
use crate::domain::ticket::Ticket;

const PRODID: &str = "-//Ingresso//Ticket Wallet//PT-BR";

/// Assumed event length for the DTEND line; the source records carry no
/// end time.
const DEFAULT_DURATION_HOURS: i64 = 3;

/// Render a single-VEVENT calendar for an event the user holds a ticket to.
pub fn export_event(event: &Event, ticket: &Ticket, generated_at: DateTime<Utc>) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(16);
    lines.push("BEGIN:VCALENDAR".to_owned());
    lines.push("VERSION:2.0".to_owned());
    lines.push(format!("PRODID:{PRODID}"));
    lines.push("CALSCALE:GREGORIAN".to_owned());
    lines.push("BEGIN:VEVENT".to_owned());
    lines.push(format!("UID:{}@ingresso", ticket.ticket_code));
    lines.push(format!("DTSTAMP:{}", format_utc(generated_at)));
    lines.push(format!("DTSTART:{}", format_utc(event.date)));
    lines.push(format!(
        "DTEND:{}",
        format_utc(event.date + Duration::hours(DEFAULT_DURATION_HOURS))
    ));
    lines.push(format!("SUMMARY:{}", escape_text(&event.title)));
    lines.push(format!("DESCRIPTION:{}", escape_text(&event.description)));
    lines.push(format!(
        "LOCATION:{}",
        escape_text(&format!("{}, {} - {}", event.location, event.city, event.state))
    ));
    lines.push("END:VEVENT".to_owned());
    lines.push("END:VCALENDAR".to_owned());

    // Calendar consumers expect CRLF line endings.
    lines.join("\r\n") + "\r\n"
}

fn format_utc(instant: DateTime<Utc>) -> String {
    instant.format("%Y%m%dT%H%M%SZ").to_string()
}

/// RFC 5545 text escaping: backslash, comma, semicolon, and newlines.
fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            ',' => escaped.push_str("\\,"),
            ';' => escaped.push_str("\\;"),
            '\n' => escaped.push_str("\\n"),
            '\r' => {}
            _ => escaped.push(ch),
        }
    }
    escaped
}
