//! Scoring rules for event recommendations.

use rust_decimal::prelude::ToPrimitive;

use crate::domain::event::Event;
use crate::domain::preference::UserPreference;
use crate::ratings::RatingSummary;

use super::{DEFAULT_WEIGHTS, REVIEW_MATCH_SIMILARITY, TOP_RANK_COUNT};

/// Point values for each scoring branch. All branches are independent and
/// cumulative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Rank-weighted category bonus: (3 - rank) * step.
    pub category_rank_step: f64,
    /// Rank-weighted city bonus: (3 - rank) * step.
    pub city_rank_step: f64,
    pub favorite_category: f64,
    pub preferred_city: f64,
    pub preferred_price_window: f64,
    /// Multiplier on the best similarity to a purchased event.
    pub purchase_similarity_factor: f64,
    /// Multiplier on the best similarity to a frequently-viewed event.
    pub view_similarity_factor: f64,
    /// Average >= 4.5 with at least 5 reviews.
    pub high_rating_bonus: f64,
    /// Average >= 4.0 with at least 3 reviews (when the high bonus missed).
    pub good_rating_bonus: f64,
    /// Sales ratio strictly between 0.5 and 0.9.
    pub trending_bonus: f64,
    /// Per positively-reviewed event with similarity above the threshold.
    pub review_match_bonus: f64,
    pub cold_start_rating: f64,
    pub cold_start_popularity: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

/// Pairwise event similarity on a 0..=100 scale: 40 for the same category,
/// 20 for the same city, 10 for the same state, 30 when prices are within
/// 30% of the larger one. Symmetric and additive.
pub fn event_similarity(a: &Event, b: &Event) -> f64 {
    let mut score = 0.0;

    if a.category == b.category {
        score += 40.0;
    }
    if a.city == b.city {
        score += 20.0;
    }
    if a.state == b.state {
        score += 10.0;
    }

    let price_a = a.price.to_f64().unwrap_or(0.0);
    let price_b = b.price.to_f64().unwrap_or(0.0);
    let max = price_a.max(price_b);
    if max > 0.0 && (price_a - price_b).abs() / max <= 0.3 {
        score += 30.0;
    }

    score
}

/// Per-candidate inputs derived once per generation by the engine.
#[derive(Clone, Copy, Debug)]
pub struct ScoringContext<'a> {
    /// Up to three most frequent categories across purchases and views,
    /// most frequent first.
    pub top_categories: &'a [String],
    /// Same, for cities.
    pub top_cities: &'a [String],
    pub preference: Option<&'a UserPreference>,
    pub purchased: &'a [Event],
    /// Viewed events with at least `FREQUENT_VIEW_THRESHOLD` views.
    pub frequent_views: &'a [&'a Event],
    /// Events the user rated 4 or higher.
    pub positive_reviewed: &'a [&'a Event],
    pub rating: RatingSummary,
    pub cold_start: bool,
}

#[derive(Debug, Clone, Default)]
pub struct ScoreCalculator {
    weights: ScoringWeights,
}

impl ScoreCalculator {
    pub fn new() -> Self {
        Self { weights: ScoringWeights::default() }
    }

    pub fn with_weights(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    /// Score one candidate, returning the total and the reasons for every
    /// branch that fired, in evaluation order.
    pub fn score(&self, candidate: &Event, ctx: &ScoringContext<'_>) -> (f64, Vec<String>) {
        let weights = &self.weights;
        let mut score = 0.0;
        let mut reasons = Vec::new();

        if let Some(rank) =
            ctx.top_categories.iter().take(TOP_RANK_COUNT).position(|c| *c == candidate.category)
        {
            score += (TOP_RANK_COUNT - rank) as f64 * weights.category_rank_step;
            reasons.push(format!("You often go to {} events", candidate.category));
        }

        if let Some(rank) =
            ctx.top_cities.iter().take(TOP_RANK_COUNT).position(|c| *c == candidate.city)
        {
            score += (TOP_RANK_COUNT - rank) as f64 * weights.city_rank_step;
            reasons.push(format!("In {}, one of your usual cities", candidate.city));
        }

        if let Some(preference) = ctx.preference {
            if preference.favorite_categories.contains(&candidate.category) {
                score += weights.favorite_category;
                reasons.push("Matches your favorite categories".to_owned());
            }
            if preference.preferred_cities.contains(&candidate.city) {
                score += weights.preferred_city;
                reasons.push("In a city you saved as preferred".to_owned());
            }
            if preference.price_in_range(candidate.price) {
                score += weights.preferred_price_window;
                reasons.push("Within your preferred price range".to_owned());
            }
        }

        let purchase_similarity = best_similarity(candidate, ctx.purchased.iter());
        if purchase_similarity > 0.0 {
            score += weights.purchase_similarity_factor * purchase_similarity;
            reasons.push("Similar to events you attended".to_owned());
        }

        let view_similarity = best_similarity(candidate, ctx.frequent_views.iter().copied());
        if view_similarity > 0.0 {
            score += weights.view_similarity_factor * view_similarity;
            reasons.push("Similar to events you keep coming back to".to_owned());
        }

        if ctx.rating.average >= 4.5 && ctx.rating.count >= 5 {
            score += weights.high_rating_bonus;
            reasons.push("Highly rated by attendees".to_owned());
        } else if ctx.rating.average >= 4.0 && ctx.rating.count >= 3 {
            score += weights.good_rating_bonus;
            reasons.push("Well rated by attendees".to_owned());
        }

        let ratio = candidate.sales_ratio();
        if ratio > 0.5 && ratio < 0.9 {
            score += weights.trending_bonus;
            reasons.push("Tickets are selling fast".to_owned());
        }

        let review_matches = ctx
            .positive_reviewed
            .iter()
            .filter(|reviewed| event_similarity(candidate, reviewed) > REVIEW_MATCH_SIMILARITY)
            .count();
        if review_matches > 0 {
            score += review_matches as f64 * weights.review_match_bonus;
            reasons.push("Similar to events you rated highly".to_owned());
        }

        if ctx.cold_start {
            if ctx.rating.average >= 4.0 {
                score += weights.cold_start_rating;
                reasons.push("A highly rated pick to get you started".to_owned());
            }
            if candidate.tickets_sold > 50 {
                score += weights.cold_start_popularity;
                reasons.push("Popular with other attendees".to_owned());
            }
        }

        (score, reasons)
    }
}

fn best_similarity<'a>(candidate: &Event, others: impl Iterator<Item = &'a Event>) -> f64 {
    others.map(|other| event_similarity(candidate, other)).fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use rust_decimal::Decimal;

    use crate::domain::event::{Event, EventId, EventStatus, OrganizerId};
    use crate::ratings::RatingSummary;

    use super::{event_similarity, ScoreCalculator, ScoringContext};

    fn event(id: &str, category: &str, city: &str, state: &str, price: i64) -> Event {
        Event {
            id: EventId(id.to_owned()),
            title: id.to_owned(),
            description: String::new(),
            image_url: None,
            location: "Centro".to_owned(),
            city: city.to_owned(),
            state: state.to_owned(),
            date: Utc::now() + Duration::days(14),
            price: Decimal::new(price * 100, 2),
            capacity: 100,
            tickets_sold: 0,
            category: category.to_owned(),
            status: EventStatus::Active,
            organizer_id: OrganizerId("org-1".to_owned()),
        }
    }

    #[test]
    fn similarity_to_self_is_one_hundred_for_priced_events() {
        let show = event("a", "musica", "São Paulo", "SP", 80);
        assert_eq!(event_similarity(&show, &show), 100.0);
    }

    #[test]
    fn price_term_is_lost_past_thirty_percent() {
        let cheap = event("a", "musica", "São Paulo", "SP", 50);
        let pricey = event("b", "musica", "São Paulo", "SP", 100);
        // 50/100 = 50% apart: category + city + state only.
        assert_eq!(event_similarity(&cheap, &pricey), 70.0);

        let close = event("c", "musica", "São Paulo", "SP", 80);
        assert_eq!(event_similarity(&close, &pricey), 100.0);
    }

    #[test]
    fn similarity_is_symmetric() {
        let a = event("a", "musica", "São Paulo", "SP", 60);
        let b = event("b", "teatro", "Santos", "SP", 90);
        assert_eq!(event_similarity(&a, &b), event_similarity(&b, &a));
    }

    #[test]
    fn zero_priced_events_do_not_earn_the_price_term() {
        let free_a = event("a", "musica", "São Paulo", "SP", 0);
        let free_b = event("b", "musica", "São Paulo", "SP", 0);
        assert_eq!(event_similarity(&free_a, &free_b), 70.0);
    }

    #[test]
    fn rank_weighted_category_bonus_decreases_with_rank() {
        let calculator = ScoreCalculator::new();
        let candidate = event("x", "teatro", "Niterói", "RJ", 40);

        let categories =
            vec!["musica".to_owned(), "teatro".to_owned(), "esporte".to_owned()];
        let ctx = ScoringContext {
            top_categories: &categories,
            top_cities: &[],
            preference: None,
            purchased: &[],
            frequent_views: &[],
            positive_reviewed: &[],
            rating: RatingSummary::default(),
            cold_start: false,
        };

        // teatro is rank 1 (0-based): (3 - 1) * 15 = 30.
        let (score, reasons) = calculator.score(&candidate, &ctx);
        assert_eq!(score, 30.0);
        assert_eq!(reasons.len(), 1);
    }

    #[test]
    fn cold_start_bonuses_only_apply_on_the_cold_start_flag() {
        let calculator = ScoreCalculator::new();
        let mut candidate = event("x", "musica", "Salvador", "BA", 40);
        candidate.tickets_sold = 60;

        let warm = ScoringContext {
            top_categories: &[],
            top_cities: &[],
            preference: None,
            purchased: &[],
            frequent_views: &[],
            positive_reviewed: &[],
            rating: RatingSummary { sum: 46, count: 10, average: 4.6 },
            cold_start: false,
        };
        let cold = ScoringContext { cold_start: true, ..warm };

        let (warm_score, _) = calculator.score(&candidate, &warm);
        let (cold_score, cold_reasons) = calculator.score(&candidate, &cold);

        // +25 for the rating and +15 for popularity, on top of the shared
        // rating and trending branches.
        assert_eq!(cold_score - warm_score, 40.0);
        assert!(cold_reasons.iter().any(|reason| reason.contains("get you started")));
    }
}
