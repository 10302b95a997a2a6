//! Recommendation generation over one catalog snapshot.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::catalog::EventCatalog;
use crate::domain::event::{Event, EventId};
use crate::domain::preference::UserPreference;
use crate::ratings::{summary_for, RatingSummary};

use super::scoring::{ScoreCalculator, ScoringContext, ScoringWeights};
use super::types::{Recommendation, UserActivity};
use super::{RecommendResult, FREQUENT_VIEW_THRESHOLD, MAX_RECOMMENDATIONS, TOP_RANK_COUNT};

#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    calculator: ScoreCalculator,
    max_recommendations: usize,
}

impl RecommendationEngine {
    pub fn new() -> Self {
        Self { calculator: ScoreCalculator::new(), max_recommendations: MAX_RECOMMENDATIONS }
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self {
            calculator: ScoreCalculator::with_weights(weights),
            max_recommendations: MAX_RECOMMENDATIONS,
        }
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.max_recommendations = limit.max(1);
        self
    }

    /// Generate the ranked recommendation list for one user.
    ///
    /// Candidates are active future events the user has not already bought
    /// tickets for. The whole generation fails or succeeds as one batch.
    pub fn recommend(
        &self,
        catalog: &EventCatalog,
        activity: &UserActivity,
        preference: Option<&UserPreference>,
        ratings: &HashMap<EventId, RatingSummary>,
        now: DateTime<Utc>,
    ) -> RecommendResult<Vec<Recommendation>> {
        let purchased_ids: HashSet<&EventId> =
            activity.purchased.iter().map(|event| &event.id).collect();

        let candidates: Vec<&Event> = catalog
            .active_upcoming(now)
            .into_iter()
            .filter(|event| !purchased_ids.contains(&event.id))
            .collect();

        // Views referencing events that fell out of the catalog are skipped.
        let viewed: Vec<(&Event, u32)> = activity
            .views
            .iter()
            .filter_map(|record| catalog.event(&record.event_id).map(|event| (event, record.count)))
            .collect();

        let frequent_views: Vec<&Event> = viewed
            .iter()
            .filter(|(_, count)| *count >= FREQUENT_VIEW_THRESHOLD)
            .map(|(event, _)| *event)
            .collect();

        let history: Vec<&Event> =
            activity.purchased.iter().chain(viewed.iter().map(|(event, _)| *event)).collect();
        let top_categories = top_ranked(&history, |event| event.category.clone());
        let top_cities = top_ranked(&history, |event| event.city.clone());

        let positive_reviewed: Vec<&Event> = activity
            .reviews
            .iter()
            .filter(|review| review.is_positive())
            .filter_map(|review| catalog.event(&review.event_id))
            .collect();

        let cold_start = activity.is_cold_start();

        let mut recommendations: Vec<Recommendation> = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let ctx = ScoringContext {
                top_categories: &top_categories,
                top_cities: &top_cities,
                preference,
                purchased: &activity.purchased,
                frequent_views: &frequent_views,
                positive_reviewed: &positive_reviewed,
                rating: summary_for(ratings, &candidate.id),
                cold_start,
            };
            let (score, reasons) = self.calculator.score(candidate, &ctx);
            recommendations.push(Recommendation { event: candidate.clone(), score, reasons });
        }

        recommendations
            .sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
        recommendations.truncate(self.max_recommendations);

        debug!(
            cold_start,
            returned = recommendations.len(),
            "recommendation generation complete"
        );

        Ok(recommendations)
    }
}

/// Up to three most frequent values of `key` across the user's history,
/// most frequent first. Ties break alphabetically for determinism.
fn top_ranked(history: &[&Event], key: impl Fn(&Event) -> String) -> Vec<String> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    for event in history {
        *counts.entry(key(event)).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, u32)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(TOP_RANK_COUNT);
    ranked.into_iter().map(|(value, _)| value).collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use rust_decimal::Decimal;

    use crate::catalog::EventCatalog;
    use crate::domain::event::{Event, EventId, EventStatus, OrganizerId};
    use crate::domain::review::{Review, ReviewId};
    use crate::domain::UserId;
    use crate::ratings;
    use crate::recommend::types::{UserActivity, ViewRecord};

    use super::RecommendationEngine;

    fn event(id: &str, category: &str, city: &str, sold: u32, days: i64) -> Event {
        Event {
            id: EventId(id.to_owned()),
            title: format!("Evento {id}"),
            description: String::new(),
            image_url: None,
            location: "Centro".to_owned(),
            city: city.to_owned(),
            state: match city {
                "São Paulo" | "Campinas" => "SP",
                "Rio de Janeiro" => "RJ",
                _ => "BA",
            }
            .to_owned(),
            date: Utc::now() + Duration::days(days),
            price: Decimal::new(8_000, 2),
            capacity: 100,
            tickets_sold: sold,
            category: category.to_owned(),
            status: EventStatus::Active,
            organizer_id: OrganizerId("org-1".to_owned()),
        }
    }

    fn review(event: &str, rating: u8, n: usize) -> Review {
        Review {
            id: ReviewId(format!("rv-{event}-{n}")),
            event_id: EventId(event.to_owned()),
            user_id: UserId(format!("u-{n}")),
            rating,
            comment: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn cold_start_ranks_the_well_rated_popular_event_first() {
        let reviews: Vec<Review> = (0..10)
            .map(|n| review("a", if n < 6 { 5 } else { 4 }, n))
            .chain(std::iter::once(review("b", 3, 100)))
            .collect();
        let catalog = EventCatalog::new(
            vec![
                event("a", "musica", "São Paulo", 60, 10),
                event("b", "teatro", "Salvador", 5, 10),
            ],
            reviews.clone(),
        );
        let summaries = ratings::aggregate(&reviews);

        let engine = RecommendationEngine::new();
        let out = engine
            .recommend(&catalog, &UserActivity::empty(), None, &summaries, Utc::now())
            .unwrap();

        assert_eq!(out[0].event.id, EventId("a".to_owned()));
        assert!(out[0].score > out[1].score);
        // Fresh users only get the cold-start and catalog-signal branches.
        assert!(out[1].reasons.is_empty());
    }

    #[test]
    fn purchased_events_are_never_recommended() {
        let catalog = EventCatalog::new(
            vec![event("a", "musica", "São Paulo", 10, 5), event("b", "musica", "São Paulo", 10, 5)],
            Vec::new(),
        );
        let activity =
            UserActivity { purchased: vec![event("a", "musica", "São Paulo", 10, 5)], ..Default::default() };

        let engine = RecommendationEngine::new();
        let out = engine
            .recommend(&catalog, &activity, None, &Default::default(), Utc::now())
            .unwrap();

        assert_eq!(out.len(), 1);
        assert_eq!(out[0].event.id, EventId("b".to_owned()));
    }

    #[test]
    fn history_drives_rank_weighted_category_and_city_bonuses() {
        let catalog = EventCatalog::new(
            vec![
                event("match", "musica", "São Paulo", 10, 8),
                event("other", "gastronomia", "Salvador", 10, 8),
            ],
            Vec::new(),
        );
        let activity = UserActivity {
            purchased: vec![
                event("p1", "musica", "São Paulo", 0, -10),
                event("p2", "musica", "São Paulo", 0, -20),
            ],
            views: vec![ViewRecord {
                event_id: EventId("match".to_owned()),
                count: 1,
                last_viewed: Utc::now(),
            }],
            reviews: Vec::new(),
        };

        let engine = RecommendationEngine::new();
        let out = engine
            .recommend(&catalog, &activity, None, &Default::default(), Utc::now())
            .unwrap();

        assert_eq!(out[0].event.id, EventId("match".to_owned()));
        assert!(out[0].reasons.iter().any(|reason| reason.contains("musica")));
        assert!(out[0].reasons.iter().any(|reason| reason.contains("São Paulo")));
        assert!(out[0].score > out[1].score);
    }

    #[test]
    fn output_is_capped_at_the_limit() {
        let events: Vec<Event> =
            (0..10).map(|n| event(&format!("e{n}"), "musica", "São Paulo", 60, 5)).collect();
        let catalog = EventCatalog::new(events, Vec::new());

        let engine = RecommendationEngine::new();
        let out = engine
            .recommend(&catalog, &UserActivity::empty(), None, &Default::default(), Utc::now())
            .unwrap();
        assert_eq!(out.len(), super::MAX_RECOMMENDATIONS);

        let narrow = RecommendationEngine::new().with_limit(2);
        let out = narrow
            .recommend(&catalog, &UserActivity::empty(), None, &Default::default(), Utc::now())
            .unwrap();
        assert_eq!(out.len(), 2);
    }
}
