//! Review aggregation: per-event sum, count, and average rating.

use std::collections::HashMap;

use crate::domain::event::EventId;
use crate::domain::review::Review;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RatingSummary {
    pub sum: u32,
    pub count: u32,
    pub average: f64,
}

/// Pure O(n) reduction of a review list. Events with no reviews are absent
/// from the map; callers default to `RatingSummary::default()` on a miss.
pub fn aggregate(reviews: &[Review]) -> HashMap<EventId, RatingSummary> {
    let mut summaries: HashMap<EventId, RatingSummary> = HashMap::new();

    for review in reviews {
        let entry = summaries.entry(review.event_id.clone()).or_default();
        entry.sum += u32::from(review.rating);
        entry.count += 1;
    }

    for summary in summaries.values_mut() {
        summary.average = f64::from(summary.sum) / f64::from(summary.count);
    }

    summaries
}

/// Convenience lookup treating missing events as unrated.
pub fn summary_for(
    summaries: &HashMap<EventId, RatingSummary>,
    event_id: &EventId,
) -> RatingSummary {
    summaries.get(event_id).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use crate::domain::event::EventId;
    use crate::domain::review::{Review, ReviewId};
    use crate::domain::UserId;

    use super::{aggregate, summary_for};

    fn review(event: &str, rating: u8) -> Review {
        Review {
            id: ReviewId(format!("rv-{event}-{rating}")),
            event_id: EventId(event.to_owned()),
            user_id: UserId("u-1".to_owned()),
            rating,
            comment: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn averages_per_event() {
        let reviews =
            vec![review("a", 5), review("a", 4), review("a", 3), review("b", 2)];
        let summaries = aggregate(&reviews);

        let a = summaries[&EventId("a".to_owned())];
        assert_eq!(a.sum, 12);
        assert_eq!(a.count, 3);
        assert!((a.average - 4.0).abs() < f64::EPSILON);

        let b = summaries[&EventId("b".to_owned())];
        assert_eq!((b.count, b.sum), (1, 2));
    }

    #[test]
    fn unreviewed_events_default_to_zero() {
        let summaries = aggregate(&[]);
        let missing = summary_for(&summaries, &EventId("ghost".to_owned()));
        assert_eq!(missing.count, 0);
        assert_eq!(missing.average, 0.0);
    }
}
