use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// Seat Status Enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SeatStatus {
    Available,
    Booked,
    LadiesAvailable,
    LadiesBooked,
    Selected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SeatPosition {
    pub row: usize,
    pub col: usize,
}

// One rendered cell of the seat map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Seat {
    pub id: u32,
    pub status: SeatStatus,
    pub position: SeatPosition,
}

/// Seats the user has picked for the current bus.
///
/// Only `SeatLayout::toggle` adds members, which keeps booked and unknown
/// seat ids out of the set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct SelectedSeats(BTreeSet<u32>);

impl SelectedSeats {
    pub fn contains(&self, id: u32) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // Ascending seat ids
    pub fn ids(&self) -> Vec<u32> {
        self.0.iter().copied().collect()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub(crate) fn insert(&mut self, id: u32) -> bool {
        self.0.insert(id)
    }

    pub(crate) fn remove(&mut self, id: u32) -> bool {
        self.0.remove(&id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ToggleOutcome {
    Selected,
    Deselected,
    Rejected,
}
