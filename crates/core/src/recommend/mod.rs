//! Personalized event recommendations.
//!
//! Combines purchase, view, and review history with stored preferences and
//! catalog signals (rating, popularity, price fit, similarity) into an
//! additive score per candidate event, producing a ranked top-N list with
//! human-readable reasons.

mod engine;
mod scoring;
mod types;

pub use engine::RecommendationEngine;
pub use scoring::{event_similarity, ScoreCalculator, ScoringContext, ScoringWeights};
pub use types::*;

use crate::errors::DomainError;

/// Result type for recommendation operations. Any failure aborts the whole
/// generation; there are no partial lists.
pub type RecommendResult<T> = Result<T, DomainError>;

/// Maximum recommendations returned per generation.
pub const MAX_RECOMMENDATIONS: usize = 6;

/// How many top categories/cities are rank-weighted.
pub const TOP_RANK_COUNT: usize = 3;

/// A viewed event only counts as a similarity anchor from this many views.
pub const FREQUENT_VIEW_THRESHOLD: u32 = 3;

/// Similarity above which a positively-reviewed event boosts a candidate.
pub const REVIEW_MATCH_SIMILARITY: f64 = 50.0;

/// Default point values for every scoring branch.
pub const DEFAULT_WEIGHTS: ScoringWeights = ScoringWeights {
    category_rank_step: 15.0,
    city_rank_step: 12.0,
    favorite_category: 20.0,
    preferred_city: 15.0,
    preferred_price_window: 10.0,
    purchase_similarity_factor: 0.3,
    view_similarity_factor: 0.25,
    high_rating_bonus: 15.0,
    good_rating_bonus: 10.0,
    trending_bonus: 10.0,
    review_match_bonus: 12.0,
    cold_start_rating: 25.0,
    cold_start_popularity: 15.0,
};
