use crate::models::bus::{BusListResponse, BusOffer, CatalogQuery, SortKey};
use once_cell::sync::Lazy;
use std::cmp::Ordering;

static FIXTURE_CATALOG: Lazy<Vec<BusOffer>> = Lazy::new(fixture_offers);

// Read model over the bus offers. Offers never change after construction.
pub struct CatalogService {
    offers: Vec<BusOffer>,
}

impl CatalogService {
    pub fn new(offers: Vec<BusOffer>) -> Self {
        CatalogService { offers }
    }

    // The four Mumbai -> Pune services the booking flow ships with
    pub fn with_fixtures() -> Self {
        CatalogService::new(FIXTURE_CATALOG.clone())
    }

    pub fn all(&self) -> &[BusOffer] {
        &self.offers
    }

    pub fn find(&self, bus_id: &str) -> Option<BusOffer> {
        self.offers.iter().find(|bus| bus.id == bus_id).cloned()
    }

    // Filter by the query's predicates, then order by its sort key
    pub fn list(&self, query: &CatalogQuery) -> BusListResponse {
        let mut buses: Vec<BusOffer> = self
            .offers
            .iter()
            .filter(|bus| query.matches(bus))
            .cloned()
            .collect();

        sort_offers(&mut buses, query.sort);

        tracing::debug!(
            sort = %query.sort,
            bus_type = %query.bus_type,
            matched = buses.len(),
            "listed bus offers"
        );

        BusListResponse {
            count: buses.len(),
            buses,
        }
    }
}

/// Stable sort of offers by `key`.
///
/// Offers whose duration cannot be parsed go after every parsed one.
pub fn sort_offers(buses: &mut [BusOffer], key: SortKey) {
    match key {
        SortKey::Price => buses.sort_by_key(|bus| bus.price),
        SortKey::Rating => buses.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortKey::Departure => buses.sort_by(|a, b| a.departure.cmp(&b.departure)),
        SortKey::Duration => buses.sort_by(|a, b| {
            match (a.duration_minutes(), b.duration_minutes()) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            }
        }),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn fixture_offers() -> Vec<BusOffer> {
    vec![
        BusOffer {
            id: "1".into(),
            name: "Volvo Multi-Axle Semi Sleeper".into(),
            operator: "Royal Travels".into(),
            bus_type: "AC Semi Sleeper".into(),
            duration: "14h 30m".into(),
            departure: "09:30".into(),
            arrival: "00:00+1".into(),
            price: 1200,
            original_price: 1500,
            rating: 4.5,
            reviews: 1250,
            seats_available: 28,
            amenities: strings(&["WiFi", "Charging Port", "Blanket", "Pillow", "Water Bottle", "Reading Light"]),
            route: "Mumbai → Pune".into(),
            boarding_points: strings(&["Dadar", "Kurla", "Thane"]),
            dropping_points: strings(&["Shivaji Nagar", "Kothrud", "Hadapsar"]),
        },
        BusOffer {
            id: "2".into(),
            name: "Mercedes Multi-Axle AC Sleeper".into(),
            operator: "Luxury Lines".into(),
            bus_type: "AC Full Sleeper".into(),
            duration: "13h 45m".into(),
            departure: "11:00".into(),
            arrival: "00:45+1".into(),
            price: 1800,
            original_price: 2200,
            rating: 4.8,
            reviews: 890,
            seats_available: 15,
            amenities: strings(&[
                "WiFi", "Entertainment", "Charging Port", "Blanket", "Pillow", "Meals", "Reading Light",
            ]),
            route: "Mumbai → Pune".into(),
            boarding_points: strings(&["Andheri", "Borivali", "Thane"]),
            dropping_points: strings(&["Camp", "Koregaon Park", "Wakad"]),
        },
        BusOffer {
            id: "3".into(),
            name: "Scania Multi-Axle AC Seater".into(),
            operator: "Express Tours".into(),
            bus_type: "AC Seater".into(),
            duration: "12h 15m".into(),
            departure: "14:30".into(),
            arrival: "02:45+1".into(),
            price: 900,
            original_price: 1100,
            rating: 4.2,
            reviews: 567,
            seats_available: 35,
            amenities: strings(&["WiFi", "Charging Port", "Water Bottle", "Reading Light"]),
            route: "Mumbai → Pune".into(),
            boarding_points: strings(&["CST", "Dadar", "Bandra"]),
            dropping_points: strings(&["Pune Station", "Kothrud", "Baner"]),
        },
        BusOffer {
            id: "4".into(),
            name: "Volvo B11R Multi-Axle Sleeper".into(),
            operator: "Premium Travels".into(),
            bus_type: "Luxury Sleeper".into(),
            duration: "13h 20m".into(),
            departure: "20:00".into(),
            arrival: "09:20+1".into(),
            price: 2200,
            original_price: 2800,
            rating: 4.9,
            reviews: 2100,
            seats_available: 8,
            amenities: strings(&[
                "WiFi",
                "Entertainment",
                "Charging Port",
                "Blanket",
                "Pillow",
                "Meals",
                "Reading Light",
                "Personal Attendant",
            ]),
            route: "Mumbai → Pune".into(),
            boarding_points: strings(&["Bandra", "Andheri", "Goregaon"]),
            dropping_points: strings(&["Shivaji Nagar", "Koregaon Park", "Viman Nagar"]),
        },
    ]
}
