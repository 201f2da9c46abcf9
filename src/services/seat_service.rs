use crate::models::seat::{Seat, SeatPosition, SeatStatus, SelectedSeats, ToggleOutcome};
use std::collections::BTreeSet;

/// Static seat topology of a bus.
///
/// `rows` is laid out front to back; `None` cells are aisle gaps. Rows may
/// have any width. Booked and ladies-only seats are fixed for the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct SeatLayout {
    rows: Vec<Vec<Option<u32>>>,
    booked: BTreeSet<u32>,
    ladies_only: BTreeSet<u32>,
}

impl SeatLayout {
    pub fn new(
        rows: Vec<Vec<Option<u32>>>,
        booked: impl IntoIterator<Item = u32>,
        ladies_only: impl IntoIterator<Item = u32>,
    ) -> Self {
        SeatLayout {
            rows,
            booked: booked.into_iter().collect(),
            ladies_only: ladies_only.into_iter().collect(),
        }
    }

    // 36 seats: driver row with an aisle gap, seven 2+2 rows and a five-seat back row
    pub fn standard() -> Self {
        let mut rows = vec![vec![Some(36), None, Some(2), Some(1)]];
        for row in 0..7u32 {
            let first = 3 + row * 4;
            rows.push(vec![Some(first + 3), Some(first + 2), Some(first + 1), Some(first)]);
        }
        rows.push(vec![Some(35), Some(34), Some(33), Some(32), Some(31)]);

        SeatLayout::new(rows, [36, 6, 10, 14, 9, 13], [11])
    }

    pub fn contains(&self, seat_id: u32) -> bool {
        self.rows.iter().flatten().any(|cell| *cell == Some(seat_id))
    }

    pub fn is_booked(&self, seat_id: u32) -> bool {
        self.booked.contains(&seat_id)
    }

    pub fn seat_count(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| cell.is_some()).count()
    }

    // Status of a single seat before the user's selection is taken into account
    pub fn static_status(&self, seat_id: u32) -> SeatStatus {
        match (self.is_booked(seat_id), self.ladies_only.contains(&seat_id)) {
            (true, true) => SeatStatus::LadiesBooked,
            (true, false) => SeatStatus::Booked,
            (false, true) => SeatStatus::LadiesAvailable,
            (false, false) => SeatStatus::Available,
        }
    }

    /// Add `seat_id` to the selection if absent, remove it if present.
    ///
    /// Booked seats and ids outside the layout are rejected and leave
    /// `selected` untouched.
    pub fn toggle(&self, selected: &mut SelectedSeats, seat_id: u32) -> ToggleOutcome {
        if !self.contains(seat_id) || self.is_booked(seat_id) {
            return ToggleOutcome::Rejected;
        }
        if selected.remove(seat_id) {
            ToggleOutcome::Deselected
        } else {
            selected.insert(seat_id);
            ToggleOutcome::Selected
        }
    }

    // Row-major projection of the layout and the selection into display statuses
    pub fn render(&self, selected: &SelectedSeats) -> Vec<Seat> {
        let mut seats = Vec::with_capacity(self.seat_count());
        for (row, cells) in self.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                let Some(id) = *cell else { continue };
                let status = if selected.contains(id) {
                    SeatStatus::Selected
                } else {
                    self.static_status(id)
                };
                seats.push(Seat {
                    id,
                    status,
                    position: SeatPosition { row, col },
                });
            }
        }
        seats
    }
}

impl Default for SeatLayout {
    fn default() -> Self {
        SeatLayout::standard()
    }
}
