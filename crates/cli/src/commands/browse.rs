use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use clap::Args;
use rust_decimal::Decimal;

use ingresso_core::config::{AppConfig, LoadOptions};
use ingresso_core::discovery::{FilterPipeline, FilterState, SortKey};
use ingresso_core::errors::{ApplicationError, DomainError};
use ingresso_core::geo::{distance_to_city_km, Coordinate};
use ingresso_core::ratings;

use super::CommandResult;

#[derive(Debug, Args)]
pub struct BrowseArgs {
    #[arg(long, help = "Substring match over title, description, city, and venue")]
    pub search: Option<String>,
    #[arg(long, help = "Two-letter state, or omit for all")]
    pub state: Option<String>,
    #[arg(long, help = "City name, or omit for all")]
    pub city: Option<String>,
    #[arg(long, help = "Category, or omit for all")]
    pub category: Option<String>,
    #[arg(long, help = "Minimum price")]
    pub price_min: Option<Decimal>,
    #[arg(long, help = "Maximum price (1000 means no limit)")]
    pub price_max: Option<Decimal>,
    #[arg(long, help = "Earliest date, YYYY-MM-DD")]
    pub from: Option<String>,
    #[arg(long, help = "Latest date, YYYY-MM-DD")]
    pub to: Option<String>,
    #[arg(long, help = "date | rating | price_low | price_high | popularity")]
    pub sort: Option<String>,
    #[arg(long, allow_hyphen_values = true, help = "Your position as LAT,LON; sorts by distance")]
    pub near: Option<String>,
}

pub fn run(args: BrowseArgs) -> CommandResult {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => {
            return CommandResult::failure(
                "browse",
                ApplicationError::Configuration(error.to_string()),
                2,
            )
        }
    };

    let events = match super::load_events(&config) {
        Ok(events) => events,
        Err(message) => {
            return CommandResult::failure("browse", ApplicationError::Store(message), 3)
        }
    };
    let reviews = ingresso_store::fixtures::seed_reviews();
    let summaries = ratings::aggregate(&reviews);

    let position = match args.near.as_deref().map(parse_coordinate).transpose() {
        Ok(position) => position,
        Err(message) => return bad_argument(message),
    };

    let state = match filter_state(&args, position.is_some()) {
        Ok(state) => state,
        Err(message) => return bad_argument(message),
    };

    let listing = FilterPipeline.apply(&events, &state, &summaries, position);

    let mut lines = vec![format!("{} event(s)", listing.len())];
    for event in &listing {
        let summary = ratings::summary_for(&summaries, &event.id);
        let rating = if summary.count > 0 {
            format!("{:.1}★ ({})", summary.average, summary.count)
        } else {
            "unrated".to_owned()
        };
        let mut line = format!(
            "  {}  {}  {} - {}  R$ {}  {}  [{}]",
            event.date.format("%Y-%m-%d"),
            event.title,
            event.city,
            event.state,
            event.price,
            rating,
            event.category,
        );
        if let Some(position) = position {
            let distance = distance_to_city_km(position, &event.city);
            if distance.is_finite() {
                line.push_str(&format!("  {distance:.0} km"));
            }
        }
        lines.push(line);
    }

    CommandResult::ok(lines.join("\n"))
}

fn bad_argument(message: String) -> CommandResult {
    CommandResult::failure("browse", DomainError::InvariantViolation(message).into(), 2)
}

fn filter_state(args: &BrowseArgs, has_position: bool) -> Result<FilterState, String> {
    let mut state = FilterState::default();

    if let Some(search) = &args.search {
        state.search_term = search.clone();
    }
    if let Some(value) = &args.state {
        state.state = value.clone();
    }
    if let Some(city) = &args.city {
        state.city = city.clone();
    }
    if let Some(category) = &args.category {
        state.category = category.clone();
    }
    if let Some(min) = args.price_min {
        state.price_min = min;
    }
    if let Some(max) = args.price_max {
        state.price_max = max;
    }
    if let Some(from) = &args.from {
        state.start_date = Some(parse_date(from)?);
    }
    if let Some(to) = &args.to {
        state.end_date = Some(parse_date(to)?);
    }
    if let Some(sort) = &args.sort {
        state.sort_by = parse_sort(sort)?;
    }
    state.sort_by_proximity = has_position;

    Ok(state)
}

fn parse_sort(value: &str) -> Result<SortKey, String> {
    match value {
        "date" => Ok(SortKey::Date),
        "rating" => Ok(SortKey::Rating),
        "price_low" => Ok(SortKey::PriceLow),
        "price_high" => Ok(SortKey::PriceHigh),
        "popularity" => Ok(SortKey::Popularity),
        other => Err(format!(
            "unknown sort key `{other}` (expected date, rating, price_low, price_high, popularity)"
        )),
    }
}

fn parse_date(value: &str) -> Result<chrono::DateTime<Utc>, String> {
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|error| format!("invalid date `{value}`: {error}"))?;
    Ok(Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)))
}

fn parse_coordinate(value: &str) -> Result<Coordinate, String> {
    let (lat, lon) = value
        .split_once(',')
        .ok_or_else(|| format!("invalid coordinate `{value}` (expected LAT,LON)"))?;
    let lat = lat.trim().parse::<f64>().map_err(|error| format!("invalid latitude: {error}"))?;
    let lon = lon.trim().parse::<f64>().map_err(|error| format!("invalid longitude: {error}"))?;
    Ok(Coordinate::new(lat, lon))
}

#[cfg(test)]
mod tests {
    use ingresso_core::discovery::SortKey;

    use super::{parse_coordinate, parse_date, parse_sort};

    #[test]
    fn parses_sort_keys() {
        assert_eq!(parse_sort("price_low").unwrap(), SortKey::PriceLow);
        assert!(parse_sort("zzz").is_err());
    }

    #[test]
    fn parses_coordinates_with_negatives() {
        let position = parse_coordinate("-23.55, -46.63").unwrap();
        assert!((position.lat + 23.55).abs() < 1e-9);
        assert!((position.lon + 46.63).abs() < 1e-9);
        assert!(parse_coordinate("not-a-pair").is_err());
    }

    #[test]
    fn parses_dates_at_midnight_utc() {
        let date = parse_date("2026-11-20").unwrap();
        assert_eq!(date.to_rfc3339(), "2026-11-20T00:00:00+00:00");
        assert!(parse_date("20/11/2026").is_err());
    }
}
