use bus_booking_system::models::bus::{
    parse_duration_minutes, BusOffer, BusTypeFilter, CatalogQuery, DepartureSlot, SortKey,
};
use bus_booking_system::services::catalog_service::CatalogService;
use std::str::FromStr;

fn ids(buses: &[BusOffer]) -> Vec<&str> {
    buses.iter().map(|bus| bus.id.as_str()).collect()
}

fn offer(id: &str, price: u64, duration: &str) -> BusOffer {
    let mut bus = CatalogService::with_fixtures().all()[0].clone();
    bus.id = id.to_string();
    bus.price = price;
    bus.duration = duration.to_string();
    bus
}

#[test]
fn test_default_query_sorts_by_duration() {
    let catalog = CatalogService::with_fixtures();

    let response = catalog.list(&CatalogQuery::default());

    assert_eq!(response.count, 4);
    assert_eq!(ids(&response.buses), vec!["3", "4", "2", "1"]);
}

#[test]
fn test_sort_by_price_ascending() {
    let catalog = CatalogService::new(vec![
        offer("a", 1500, "10h"),
        offer("b", 2200, "10h"),
        offer("c", 1100, "10h"),
        offer("d", 2800, "10h"),
    ]);
    let query = CatalogQuery {
        sort: SortKey::Price,
        ..CatalogQuery::default()
    };

    let prices: Vec<u64> = catalog.list(&query).buses.iter().map(|b| b.price).collect();

    assert_eq!(prices, vec![1100, 1500, 2200, 2800]);
}

#[test]
fn test_sort_by_rating_descending_and_departure_ascending() {
    let catalog = CatalogService::with_fixtures();

    let by_rating = catalog.list(&CatalogQuery {
        sort: SortKey::Rating,
        ..CatalogQuery::default()
    });
    assert_eq!(ids(&by_rating.buses), vec!["4", "2", "1", "3"]);

    let by_departure = catalog.list(&CatalogQuery {
        sort: SortKey::Departure,
        ..CatalogQuery::default()
    });
    assert_eq!(ids(&by_departure.buses), vec!["1", "2", "3", "4"]);
}

#[test]
fn test_bus_type_filter_uses_label_keywords() {
    let catalog = CatalogService::with_fixtures();
    let list = |bus_type| {
        let query = CatalogQuery {
            bus_type,
            sort: SortKey::Price,
            ..CatalogQuery::default()
        };
        ids(&catalog.list(&query).buses)
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>()
    };

    assert_eq!(list(BusTypeFilter::Seater), vec!["3"]);
    assert_eq!(list(BusTypeFilter::Semi), vec!["1"]);
    // "AC Semi Sleeper" also carries the sleeper keyword
    assert_eq!(list(BusTypeFilter::Sleeper), vec!["1", "2", "4"]);
    assert_eq!(list(BusTypeFilter::All).len(), 4);
}

#[test]
fn test_price_range_is_inclusive() {
    let catalog = CatalogService::with_fixtures();
    let query = CatalogQuery {
        min_price: 1200,
        max_price: 1800,
        sort: SortKey::Price,
        ..CatalogQuery::default()
    };

    let response = catalog.list(&query);

    assert_eq!(ids(&response.buses), vec!["1", "2"]);
}

#[test]
fn test_filtered_prices_always_within_range() {
    let catalog = CatalogService::with_fixtures();

    for min in (0..=3000).step_by(100) {
        for max in (min..=3000).step_by(100) {
            let query = CatalogQuery {
                min_price: min,
                max_price: max,
                ..CatalogQuery::default()
            };
            for bus in catalog.list(&query).buses {
                assert!(
                    bus.price >= min && bus.price <= max,
                    "bus {} priced {} outside [{}, {}]",
                    bus.id,
                    bus.price,
                    min,
                    max
                );
            }
        }
    }
}

#[test]
fn test_empty_result_is_valid() {
    let catalog = CatalogService::with_fixtures();
    let query = CatalogQuery {
        min_price: 2500,
        max_price: 3000,
        ..CatalogQuery::default()
    };

    let response = catalog.list(&query);

    assert_eq!(response.count, 0);
    assert!(response.buses.is_empty());
}

#[test]
fn test_departure_slot_amenity_and_operator_filters() {
    let catalog = CatalogService::with_fixtures();

    let morning = catalog.list(&CatalogQuery {
        departure: DepartureSlot::Morning,
        sort: SortKey::Departure,
        ..CatalogQuery::default()
    });
    assert_eq!(ids(&morning.buses), vec!["1", "2"]);

    let night = catalog.list(&CatalogQuery {
        departure: DepartureSlot::Night,
        ..CatalogQuery::default()
    });
    assert_eq!(night.count, 0);

    let meals = catalog.list(&CatalogQuery {
        amenities: vec!["Meals".into(), "Personal Attendant".into()],
        ..CatalogQuery::default()
    });
    assert_eq!(ids(&meals.buses), vec!["4"]);

    let operators = catalog.list(&CatalogQuery {
        operators: vec!["Express Tours".into(), "Royal Travels".into()],
        sort: SortKey::Price,
        ..CatalogQuery::default()
    });
    assert_eq!(ids(&operators.buses), vec!["3", "1"]);
}

#[test]
fn test_unparseable_duration_sorts_last() {
    let catalog = CatalogService::new(vec![
        offer("unknown", 1000, "overnight"),
        offer("long", 1000, "14h 30m"),
        offer("blank", 1000, ""),
        offer("short", 1000, "9h 5m"),
    ]);

    let response = catalog.list(&CatalogQuery::default());

    assert_eq!(ids(&response.buses), vec!["short", "long", "unknown", "blank"]);
}

#[test]
fn test_parse_duration_minutes() {
    assert_eq!(parse_duration_minutes("14h 30m"), Some(870));
    assert_eq!(parse_duration_minutes("13h"), Some(780));
    assert_eq!(parse_duration_minutes("45m"), Some(45));
    assert_eq!(parse_duration_minutes("12.5"), Some(750));
    assert_eq!(parse_duration_minutes("xh 10m"), None);
    assert_eq!(parse_duration_minutes("soon"), None);
    assert_eq!(parse_duration_minutes("   "), None);
}

#[test]
fn test_parse_duration_minutes_numeric_prefix() {
    // Tokens that are not "<n>h" / "<n>m" fall back to the leading number as hours
    assert_eq!(parse_duration_minutes("14h30m"), Some(840));
    assert_eq!(parse_duration_minutes("1.5h"), Some(90));
    assert_eq!(parse_duration_minutes("9 hrs"), Some(540));
}

#[test]
fn test_parse_duration_minutes_overflow_is_unparsed() {
    assert_eq!(parse_duration_minutes("99999999h"), None);
    assert_eq!(parse_duration_minutes("4294967295m 1m"), None);
    assert_eq!(parse_duration_minutes("99999999999"), None);
}

#[test]
fn test_find_and_discount() {
    let catalog = CatalogService::with_fixtures();

    let bus = catalog.find("4").expect("fixture bus 4");
    assert_eq!(bus.operator, "Premium Travels");
    assert_eq!(bus.discount_percent(), 21);

    assert!(catalog.find("99").is_none());
}

#[test]
fn test_query_enums_parse_from_snake_case() {
    assert_eq!(BusTypeFilter::from_str("semi"), Ok(BusTypeFilter::Semi));
    assert_eq!(SortKey::from_str("departure"), Ok(SortKey::Departure));
    assert_eq!(DepartureSlot::from_str("afternoon"), Ok(DepartureSlot::Afternoon));
    assert!(SortKey::from_str("fastest").is_err());
}
