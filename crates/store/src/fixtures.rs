//! Deterministic demo dataset used by the CLI and tests.

use chrono::{Duration, Utc};
use rust_decimal::Decimal;

use ingresso_core::domain::event::{Event, EventId, EventStatus, OrganizerId};
use ingresso_core::domain::review::{Review, ReviewId};
use ingresso_core::domain::UserId;
use ingresso_core::recommend::{UserActivity, ViewRecord};

struct EventSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    location: &'static str,
    city: &'static str,
    state: &'static str,
    days_from_now: i64,
    price_cents: i64,
    capacity: u32,
    tickets_sold: u32,
    category: &'static str,
    status: EventStatus,
    organizer: &'static str,
}

const EVENT_SEEDS: &[EventSeed] = &[
    EventSeed {
        id: "ev-sp-samba",
        title: "Noite de Samba",
        description: "Roda de samba com convidados especiais",
        location: "Casa Natura Musical",
        city: "São Paulo",
        state: "SP",
        days_from_now: 12,
        price_cents: 8_000,
        capacity: 400,
        tickets_sold: 280,
        category: "musica",
        status: EventStatus::Active,
        organizer: "org-natura",
    },
    EventSeed {
        id: "ev-sp-teatro",
        title: "O Auto da Compadecida",
        description: "Montagem comemorativa da peça de Suassuna",
        location: "Teatro Renault",
        city: "São Paulo",
        state: "SP",
        days_from_now: 25,
        price_cents: 15_000,
        capacity: 1_000,
        tickets_sold: 350,
        category: "teatro",
        status: EventStatus::Active,
        organizer: "org-renault",
    },
    EventSeed {
        id: "ev-rj-festival",
        title: "Festival Verão Carioca",
        description: "Dois palcos na praia, line-up nacional",
        location: "Marina da Glória",
        city: "Rio de Janeiro",
        state: "RJ",
        days_from_now: 18,
        price_cents: 12_000,
        capacity: 5_000,
        tickets_sold: 3_600,
        category: "musica",
        status: EventStatus::Active,
        organizer: "org-verao",
    },
    EventSeed {
        id: "ev-ssa-gastro",
        title: "Feira Gastronômica do Rio Vermelho",
        description: "Acarajé, moqueca e cozinha autoral baiana",
        location: "Largo de Santana",
        city: "Salvador",
        state: "BA",
        days_from_now: 8,
        price_cents: 3_000,
        capacity: 800,
        tickets_sold: 520,
        category: "gastronomia",
        status: EventStatus::Active,
        organizer: "org-rv",
    },
    EventSeed {
        id: "ev-bh-tech",
        title: "Conferência BH Tech",
        description: "Dois dias de trilhas de engenharia e produto",
        location: "Expominas",
        city: "Belo Horizonte",
        state: "MG",
        days_from_now: 40,
        price_cents: 25_000,
        capacity: 2_000,
        tickets_sold: 400,
        category: "tecnologia",
        status: EventStatus::Active,
        organizer: "org-bhtech",
    },
    EventSeed {
        id: "ev-cwb-jazz",
        title: "Curitiba Jazz Sessions",
        description: "Quartetos nacionais no palco principal",
        location: "Teatro Paiol",
        city: "Curitiba",
        state: "PR",
        days_from_now: 30,
        price_cents: 9_000,
        capacity: 300,
        tickets_sold: 210,
        category: "musica",
        status: EventStatus::Active,
        organizer: "org-paiol",
    },
    EventSeed {
        id: "ev-sp-cancelado",
        title: "Stand-up Cancelado",
        description: "Sessão única",
        location: "Comedy Club",
        city: "São Paulo",
        state: "SP",
        days_from_now: 9,
        price_cents: 6_000,
        capacity: 150,
        tickets_sold: 40,
        category: "comedia",
        status: EventStatus::Cancelled,
        organizer: "org-comedy",
    },
    EventSeed {
        id: "ev-rj-encerrado",
        title: "Réveillon Passado",
        description: "Queima de fogos",
        location: "Copacabana",
        city: "Rio de Janeiro",
        state: "RJ",
        days_from_now: -200,
        price_cents: 0,
        capacity: 10_000,
        tickets_sold: 10_000,
        category: "festa",
        status: EventStatus::Ended,
        organizer: "org-rio",
    },
];

pub fn seed_events() -> Vec<Event> {
    let now = Utc::now();
    EVENT_SEEDS
        .iter()
        .map(|seed| Event {
            id: EventId(seed.id.to_owned()),
            title: seed.title.to_owned(),
            description: seed.description.to_owned(),
            image_url: None,
            location: seed.location.to_owned(),
            city: seed.city.to_owned(),
            state: seed.state.to_owned(),
            date: now + Duration::days(seed.days_from_now),
            price: Decimal::new(seed.price_cents, 2),
            capacity: seed.capacity,
            tickets_sold: seed.tickets_sold,
            category: seed.category.to_owned(),
            status: seed.status,
            organizer_id: OrganizerId(seed.organizer.to_owned()),
        })
        .collect()
}

pub fn seed_reviews() -> Vec<Review> {
    let now = Utc::now();
    let mut reviews = Vec::new();
    let mut push = |event: &str, rating: u8, n: usize| {
        reviews.push(Review {
            id: ReviewId(format!("rv-{event}-{n}")),
            event_id: EventId(event.to_owned()),
            user_id: UserId(format!("reviewer-{n}")),
            rating,
            comment: None,
            created_at: now - Duration::days(n as i64 + 1),
        });
    };

    for n in 0..6 {
        push("ev-sp-samba", if n < 4 { 5 } else { 4 }, n);
    }
    for n in 0..4 {
        push("ev-rj-festival", 4, n + 10);
    }
    push("ev-ssa-gastro", 5, 20);
    push("ev-ssa-gastro", 4, 21);
    push("ev-bh-tech", 3, 30);

    reviews
}

/// History for the demo user: a samba regular from São Paulo.
pub fn seed_activity(events: &[Event]) -> UserActivity {
    let now = Utc::now();
    let purchased = events
        .iter()
        .filter(|event| event.id.0 == "ev-sp-samba")
        .cloned()
        .collect::<Vec<_>>();

    UserActivity {
        purchased,
        views: vec![
            ViewRecord {
                event_id: EventId("ev-cwb-jazz".to_owned()),
                count: 4,
                last_viewed: now - Duration::hours(6),
            },
            ViewRecord {
                event_id: EventId("ev-bh-tech".to_owned()),
                count: 1,
                last_viewed: now - Duration::days(2),
            },
        ],
        reviews: vec![Review {
            id: ReviewId("rv-demo-1".to_owned()),
            event_id: EventId("ev-sp-samba".to_owned()),
            user_id: UserId("demo".to_owned()),
            rating: 5,
            comment: Some("Noite incrível".to_owned()),
            created_at: now - Duration::days(3),
        }],
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use ingresso_core::domain::event::EventStatus;

    use super::{seed_activity, seed_events, seed_reviews};

    #[test]
    fn seeds_cover_active_cancelled_and_ended_events() {
        let events = seed_events();
        assert!(events.iter().any(|event| event.status == EventStatus::Active));
        assert!(events.iter().any(|event| event.status == EventStatus::Cancelled));
        assert!(events.iter().any(|event| event.status == EventStatus::Ended));
    }

    #[test]
    fn reviews_reference_seeded_events() {
        let events = seed_events();
        for review in seed_reviews() {
            assert!(events.iter().any(|event| event.id == review.event_id));
        }
    }

    #[test]
    fn demo_activity_is_not_cold_start() {
        let events = seed_events();
        let activity = seed_activity(&events);
        assert!(!activity.is_cold_start());
        assert!(activity.purchased.iter().all(|event| event.is_upcoming(
            Utc::now() - chrono::Duration::days(30)
        )));
    }
}
