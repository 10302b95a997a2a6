pub mod browse;
pub mod config;
pub mod export_ics;
pub mod recommend;

use serde::Serialize;
use tracing::error;
use uuid::Uuid;

use ingresso_core::errors::{ApplicationError, InterfaceError};

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct FailurePayload {
    command: String,
    status: String,
    error_class: String,
    message: String,
    correlation_id: String,
}

impl CommandResult {
    pub fn ok(output: impl Into<String>) -> Self {
        Self { exit_code: 0, output: output.into() }
    }

    /// Render a failure payload. The technical detail is logged under a
    /// minted correlation id; the payload carries only the user-safe
    /// message for that id.
    pub fn failure(command: &str, error: ApplicationError, exit_code: u8) -> Self {
        let correlation_id = format!("req-{}", Uuid::new_v4().simple());
        error!(command, correlation_id = correlation_id.as_str(), %error, "command failed");

        let interface = error.into_interface(correlation_id.clone());
        let error_class = match &interface {
            InterfaceError::BadRequest { .. } => "bad_request",
            InterfaceError::ServiceUnavailable { .. } => "service_unavailable",
            InterfaceError::Internal { .. } => "internal",
        };
        let payload = FailurePayload {
            command: command.to_owned(),
            status: "error".to_owned(),
            error_class: error_class.to_owned(),
            message: interface.user_message().to_owned(),
            correlation_id,
        };
        let output = serde_json::to_string(&payload).unwrap_or_else(|error| {
            format!("{{\"status\":\"error\",\"message\":\"{error}\"}}")
        });
        Self { exit_code, output }
    }
}

/// Load the catalog events: the configured JSON file when present,
/// otherwise the built-in fixture set.
pub(crate) fn load_events(
    config: &ingresso_core::config::AppConfig,
) -> Result<Vec<ingresso_core::domain::Event>, String> {
    match &config.catalog.path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .map_err(|error| format!("could not read catalog `{}`: {error}", path.display()))?;
            serde_json::from_str(&contents)
                .map_err(|error| format!("could not parse catalog `{}`: {error}", path.display()))
        }
        None => Ok(ingresso_store::fixtures::seed_events()),
    }
}
