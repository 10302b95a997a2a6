use tracing::info;

use ingresso_core::catalog::EventCatalog;
use ingresso_core::config::{AppConfig, LoadOptions};
use ingresso_core::domain::UserId;
use ingresso_core::errors::ApplicationError;
use ingresso_core::ratings;
use ingresso_core::recommend::{RecommendationEngine, UserActivity};
use ingresso_store::{InMemoryViewLog, ViewLogStore};

use super::CommandResult;

pub fn run(user: &str) -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "recommend",
                ApplicationError::Configuration(error.to_string()),
                2,
            )
        }
    };

    let events = match super::load_events(&config) {
        Ok(events) => events,
        Err(message) => {
            return CommandResult::failure("recommend", ApplicationError::Store(message), 3)
        }
    };
    let reviews = ingresso_store::fixtures::seed_reviews();
    let summaries = ratings::aggregate(&reviews);
    let catalog = EventCatalog::new(events.clone(), reviews);

    let runtime = match tokio::runtime::Builder::new_current_thread().enable_all().build() {
        Ok(runtime) => runtime,
        Err(error) => {
            return CommandResult::failure(
                "recommend",
                ApplicationError::Integration(error.to_string()),
                3,
            )
        }
    };

    // The demo user has fixture history; anyone else starts cold. Views go
    // through the view-log port so the flow matches production wiring.
    let user_id = UserId(user.to_owned());
    let activity = match runtime.block_on(load_activity(&user_id, &events)) {
        Ok(activity) => activity,
        Err(message) => {
            return CommandResult::failure("recommend", ApplicationError::Store(message), 4)
        }
    };

    let engine = RecommendationEngine::new().with_limit(config.recommend.max_recommendations);
    let recommendations =
        match engine.recommend(&catalog, &activity, None, &summaries, chrono::Utc::now()) {
            Ok(recommendations) => recommendations,
            Err(error) => return CommandResult::failure("recommend", error.into(), 4),
        };

    info!(user, count = recommendations.len(), "generated recommendations");

    let mut lines = vec![format!("Top picks for {user}:")];
    for (position, recommendation) in recommendations.iter().enumerate() {
        lines.push(format!(
            "  {}. {} ({}, {}) — {:.0} pts",
            position + 1,
            recommendation.event.title,
            recommendation.event.city,
            recommendation.event.state,
            recommendation.score,
        ));
        for reason in &recommendation.reasons {
            lines.push(format!("     - {reason}"));
        }
    }
    if recommendations.is_empty() {
        lines.push("  (no upcoming events to recommend)".to_owned());
    }

    CommandResult::ok(lines.join("\n"))
}

async fn load_activity(
    user_id: &UserId,
    events: &[ingresso_core::domain::Event],
) -> Result<UserActivity, String> {
    if user_id.0 != "demo" {
        return Ok(UserActivity::empty());
    }

    let seeded = ingresso_store::fixtures::seed_activity(events);

    let view_log = InMemoryViewLog::default();
    for record in &seeded.views {
        for _ in 0..record.count {
            view_log
                .record_view(user_id, &record.event_id, record.last_viewed)
                .await
                .map_err(|error| error.to_string())?;
        }
    }
    let views = view_log.views_for_user(user_id).await.map_err(|error| error.to_string())?;

    Ok(UserActivity { views, ..seeded })
}
