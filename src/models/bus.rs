use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

pub const DEFAULT_MIN_PRICE: u64 = 500;
pub const DEFAULT_MAX_PRICE: u64 = 3000;

// A bookable bus service. Schedule fields are display strings ("09:30", "00:00+1").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct BusOffer {
    pub id: String,
    pub name: String,
    pub operator: String,
    pub bus_type: String,
    pub duration: String,
    pub departure: String,
    pub arrival: String,
    pub price: u64,
    pub original_price: u64,
    pub rating: f64,
    pub reviews: u32,
    pub seats_available: u32,
    pub amenities: Vec<String>,
    pub route: String,
    pub boarding_points: Vec<String>,
    pub dropping_points: Vec<String>,
}

impl BusOffer {
    /// Travel time in minutes.
    ///
    /// Reads `"14h 30m"` style strings. A bare leading number (`"13.5"`) is taken
    /// as hours. Returns `None` when no number can be read at all.
    pub fn duration_minutes(&self) -> Option<u32> {
        parse_duration_minutes(&self.duration)
    }

    // Hour of day of the scheduled departure ("20:00" -> 20)
    pub fn departure_hour(&self) -> Option<u32> {
        let (hour, _) = self.departure.split_once(':')?;
        hour.trim().parse::<u32>().ok().filter(|h| *h < 24)
    }

    pub fn discount_percent(&self) -> u64 {
        if self.original_price <= self.price || self.original_price == 0 {
            return 0;
        }
        (self.original_price - self.price) * 100 / self.original_price
    }
}

pub fn parse_duration_minutes(raw: &str) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Some(total) = parse_unit_tokens(raw) {
        return Some(total);
    }

    // Fall back to a numeric prefix read as hours
    let prefix: String = raw
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let minutes = (prefix.parse::<f64>().ok()? * 60.0).round();
    (minutes.is_finite() && minutes <= u32::MAX as f64).then_some(minutes as u32)
}

// "14h 30m" style: whitespace separated tokens each ending in h or m
fn parse_unit_tokens(raw: &str) -> Option<u32> {
    let mut total = 0u32;
    let mut matched = false;
    for part in raw.split_whitespace() {
        let minutes = if let Some(hours) = part.strip_suffix('h') {
            hours.parse::<u32>().ok()?.checked_mul(60)?
        } else if let Some(minutes) = part.strip_suffix('m') {
            minutes.parse::<u32>().ok()?
        } else {
            continue;
        };
        total = total.checked_add(minutes)?;
        matched = true;
    }
    matched.then_some(total)
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize, JsonSchema,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum BusTypeFilter {
    #[default]
    All,
    Seater,
    Sleeper,
    Semi,
}

impl BusTypeFilter {
    pub fn matches(&self, bus_type: &str) -> bool {
        let keyword = match self {
            BusTypeFilter::All => return true,
            BusTypeFilter::Seater => "seater",
            BusTypeFilter::Sleeper => "sleeper",
            BusTypeFilter::Semi => "semi",
        };
        bus_type.to_lowercase().contains(keyword)
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize, JsonSchema,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum DepartureSlot {
    #[default]
    All,
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl DepartureSlot {
    pub fn matches(&self, bus: &BusOffer) -> bool {
        let range = match self {
            DepartureSlot::All => return true,
            DepartureSlot::Morning => 6..12,
            DepartureSlot::Afternoon => 12..18,
            DepartureSlot::Evening => 18..24,
            DepartureSlot::Night => 0..6,
        };
        bus.departure_hour().is_some_and(|hour| range.contains(&hour))
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, Serialize, Deserialize, JsonSchema,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Duration,
    Price,
    Rating,
    Departure,
}

#[derive(Debug, Clone, PartialEq, Deserialize, JsonSchema)]
pub struct CatalogQuery {
    pub bus_type: BusTypeFilter,
    pub min_price: u64,
    pub max_price: u64,
    pub departure: DepartureSlot,
    pub amenities: Vec<String>,
    pub operators: Vec<String>,
    pub sort: SortKey,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        CatalogQuery {
            bus_type: BusTypeFilter::All,
            min_price: DEFAULT_MIN_PRICE,
            max_price: DEFAULT_MAX_PRICE,
            departure: DepartureSlot::All,
            amenities: Vec::new(),
            operators: Vec::new(),
            sort: SortKey::Duration,
        }
    }
}

impl CatalogQuery {
    pub fn matches(&self, bus: &BusOffer) -> bool {
        self.bus_type.matches(&bus.bus_type)
            && bus.price >= self.min_price
            && bus.price <= self.max_price
            && self.departure.matches(bus)
            && self.amenities.iter().all(|a| bus.amenities.contains(a))
            && (self.operators.is_empty() || self.operators.contains(&bus.operator))
    }
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct BusListResponse {
    pub count: usize,
    pub buses: Vec<BusOffer>,
}
