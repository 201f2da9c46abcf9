use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

use crate::models::bus::BusOffer;
use crate::models::search::SearchCriteria;
use crate::models::seat::{Seat, SelectedSeats, ToggleOutcome};

// Paid add-ons, each charged per selected seat
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize, JsonSchema,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Upgrade {
    LuxurySleeper,
    Meal,
    PriorityBoarding,
}

impl Upgrade {
    pub fn price_per_seat(&self) -> u64 {
        match self {
            Upgrade::LuxurySleeper => 500,
            Upgrade::Meal => 200,
            Upgrade::PriorityBoarding => 100,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Upgrade::LuxurySleeper => "Royal Luxury Sleeper",
            Upgrade::Meal => "Gourmet Dining",
            Upgrade::PriorityBoarding => "VIP Priority Access",
        }
    }
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct UpgradeOption {
    pub upgrade: Upgrade,
    pub title: String,
    pub price_per_seat: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Upgrades {
    pub luxury_sleeper: bool,
    pub meal: bool,
    pub priority_boarding: bool,
}

impl Upgrades {
    pub fn is_enabled(&self, upgrade: Upgrade) -> bool {
        match upgrade {
            Upgrade::LuxurySleeper => self.luxury_sleeper,
            Upgrade::Meal => self.meal,
            Upgrade::PriorityBoarding => self.priority_boarding,
        }
    }

    pub fn set(&mut self, upgrade: Upgrade, enabled: bool) {
        let flag = match upgrade {
            Upgrade::LuxurySleeper => &mut self.luxury_sleeper,
            Upgrade::Meal => &mut self.meal,
            Upgrade::PriorityBoarding => &mut self.priority_boarding,
        };
        *flag = enabled;
    }

    // Flip one add-on and return its new state
    pub fn toggle(&mut self, upgrade: Upgrade) -> bool {
        let enabled = !self.is_enabled(upgrade);
        self.set(upgrade, enabled);
        enabled
    }
}

// Itemised price for the current selection. Always recomputed, never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, JsonSchema)]
pub struct PriceBreakdown {
    pub seat_count: u64,
    pub base_fare: u64,
    pub luxury_sleeper: u64,
    pub meal: u64,
    pub priority_boarding: u64,
    pub upgrades_total: u64,
    pub tax: u64,
    pub total: u64,
}

// Everything a user has chosen so far in one browsing session
#[derive(Debug, Clone, Default)]
pub struct BookingState {
    pub search: Option<SearchCriteria>,
    pub selected_bus: Option<BusOffer>,
    pub selected_seats: SelectedSeats,
    pub upgrades: Upgrades,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct BookingView {
    pub search: Option<SearchCriteria>,
    pub selected_bus: Option<BusOffer>,
    pub seats: Vec<Seat>,
    pub selected_seats: SelectedSeats,
    pub upgrades: Upgrades,
    pub summary: Option<PriceBreakdown>,
    pub can_proceed: bool,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct SeatToggleResponse {
    pub seat_id: u32,
    pub outcome: ToggleOutcome,
    pub booking: BookingView,
}

#[derive(Debug, Serialize, JsonSchema)]
pub struct CheckoutResponse {
    pub status: String,
    pub bus_id: String,
    pub seats: Vec<u32>,
    pub summary: PriceBreakdown,
}
