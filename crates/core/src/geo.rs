//! Great-circle distance and the static city centroid table used by
//! proximity ranking.

use serde::{Deserialize, Serialize};

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Haversine distance in kilometers between two coordinates in degrees.
///
/// Inputs are not range-checked; out-of-range coordinates produce
/// mathematically defined but meaningless distances.
pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lon = (b.lon - a.lon).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

struct CitySeed {
    name: &'static str,
    lat: f64,
    lon: f64,
}

const CITY_SEEDS: &[CitySeed] = &[
    CitySeed { name: "são paulo", lat: -23.5505, lon: -46.6333 },
    CitySeed { name: "rio de janeiro", lat: -22.9068, lon: -43.1729 },
    CitySeed { name: "salvador", lat: -12.9714, lon: -38.5014 },
    CitySeed { name: "belo horizonte", lat: -19.9167, lon: -43.9345 },
    CitySeed { name: "brasília", lat: -15.8267, lon: -47.9218 },
    CitySeed { name: "curitiba", lat: -25.4284, lon: -49.2733 },
    CitySeed { name: "fortaleza", lat: -3.7319, lon: -38.5267 },
    CitySeed { name: "recife", lat: -8.0476, lon: -34.8770 },
    CitySeed { name: "porto alegre", lat: -30.0346, lon: -51.2177 },
    CitySeed { name: "manaus", lat: -3.1190, lon: -60.0217 },
    CitySeed { name: "belém", lat: -1.4558, lon: -48.4902 },
    CitySeed { name: "goiânia", lat: -16.6869, lon: -49.2648 },
    CitySeed { name: "campinas", lat: -22.9099, lon: -47.0626 },
    CitySeed { name: "florianópolis", lat: -27.5954, lon: -48.5480 },
];

/// Centroid lookup by city name, case-insensitive. Unknown cities return
/// `None`; proximity sorting places them last.
pub fn city_coordinate(city: &str) -> Option<Coordinate> {
    let normalized = city.trim().to_lowercase();
    CITY_SEEDS
        .iter()
        .find(|seed| seed.name == normalized)
        .map(|seed| Coordinate::new(seed.lat, seed.lon))
}

/// Distance from a user position to an event's city centroid, or +inf when
/// the city is not in the table.
pub fn distance_to_city_km(from: Coordinate, city: &str) -> f64 {
    match city_coordinate(city) {
        Some(centroid) => haversine_km(from, centroid),
        None => f64::INFINITY,
    }
}
