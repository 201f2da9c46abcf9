use bus_booking_system::models::seat::{SeatStatus, SelectedSeats, ToggleOutcome};
use bus_booking_system::services::seat_service::SeatLayout;

const BOOKED: [u32; 6] = [36, 6, 10, 14, 9, 13];

fn status_of(layout: &SeatLayout, selected: &SelectedSeats, id: u32) -> SeatStatus {
    layout
        .render(selected)
        .into_iter()
        .find(|seat| seat.id == id)
        .map(|seat| seat.status)
        .expect("seat should be rendered")
}

#[test]
fn test_standard_layout_shape() {
    let layout = SeatLayout::standard();
    let seats = layout.render(&SelectedSeats::default());

    assert_eq!(layout.seat_count(), 36);
    assert_eq!(seats.len(), 36);

    // Driver row skips the aisle cell
    let first_row: Vec<(u32, usize)> = seats
        .iter()
        .filter(|seat| seat.position.row == 0)
        .map(|seat| (seat.id, seat.position.col))
        .collect();
    assert_eq!(first_row, vec![(36, 0), (2, 2), (1, 3)]);

    // Five seats across the back
    let back_row = seats.iter().filter(|seat| seat.position.row == 8).count();
    assert_eq!(back_row, 5);
}

#[test]
fn test_static_statuses() {
    let layout = SeatLayout::standard();
    let selected = SelectedSeats::default();

    for id in BOOKED {
        assert_eq!(status_of(&layout, &selected, id), SeatStatus::Booked);
    }
    assert_eq!(status_of(&layout, &selected, 11), SeatStatus::LadiesAvailable);
    assert_eq!(status_of(&layout, &selected, 1), SeatStatus::Available);
}

#[test]
fn test_toggle_selects_then_deselects() {
    let layout = SeatLayout::standard();
    let mut selected = SelectedSeats::default();

    assert_eq!(layout.toggle(&mut selected, 5), ToggleOutcome::Selected);
    assert!(selected.contains(5));
    assert_eq!(status_of(&layout, &selected, 5), SeatStatus::Selected);

    assert_eq!(layout.toggle(&mut selected, 5), ToggleOutcome::Deselected);
    assert!(selected.is_empty());
    assert_eq!(status_of(&layout, &selected, 5), SeatStatus::Available);
}

#[test]
fn test_booked_and_unknown_seats_rejected() {
    let layout = SeatLayout::standard();
    let mut selected = SelectedSeats::default();
    layout.toggle(&mut selected, 1);

    for id in BOOKED {
        assert_eq!(layout.toggle(&mut selected, id), ToggleOutcome::Rejected);
    }
    assert_eq!(layout.toggle(&mut selected, 0), ToggleOutcome::Rejected);
    assert_eq!(layout.toggle(&mut selected, 37), ToggleOutcome::Rejected);

    assert_eq!(selected.ids(), vec![1]);
}

#[test]
fn test_selected_overrides_ladies_only() {
    let layout = SeatLayout::standard();
    let mut selected = SelectedSeats::default();

    assert_eq!(layout.toggle(&mut selected, 11), ToggleOutcome::Selected);
    assert_eq!(status_of(&layout, &selected, 11), SeatStatus::Selected);
}

#[test]
fn test_booked_ladies_seat_renders_ladies_booked() {
    let layout = SeatLayout::new(vec![vec![Some(1), Some(2)]], [2], [2]);
    let mut selected = SelectedSeats::default();

    assert_eq!(status_of(&layout, &selected, 2), SeatStatus::LadiesBooked);
    assert_eq!(layout.toggle(&mut selected, 2), ToggleOutcome::Rejected);
}

#[test]
fn test_toggle_sequences_never_select_booked_seats() {
    let layout = SeatLayout::standard();
    let mut selected = SelectedSeats::default();

    // Deterministic walk over every id, several passes with different strides
    for stride in [1u32, 3, 5, 7, 11] {
        for step in 0..80u32 {
            let id = (step * stride) % 40;
            let before = selected.clone();
            let outcome = layout.toggle(&mut selected, id);
            if outcome == ToggleOutcome::Rejected {
                assert_eq!(selected, before);
            }
            for booked in BOOKED {
                assert!(!selected.contains(booked), "booked seat {} selected", booked);
            }
        }
    }
}

#[test]
fn test_double_toggle_restores_selection() {
    let layout = SeatLayout::standard();
    let mut selected = SelectedSeats::default();
    for id in [1, 2, 3, 20] {
        layout.toggle(&mut selected, id);
    }

    for id in 0..=40 {
        let before = selected.clone();
        layout.toggle(&mut selected, id);
        layout.toggle(&mut selected, id);
        assert_eq!(selected, before, "seat {} did not round-trip", id);
    }
}

#[test]
fn test_irregular_topology() {
    let layout = SeatLayout::new(
        vec![
            vec![Some(1)],
            vec![Some(2), None, Some(3)],
            vec![Some(4), Some(5), Some(6), Some(7), Some(8), Some(9)],
            vec![Some(10)],
        ],
        [3],
        [9],
    );
    let mut selected = SelectedSeats::default();
    layout.toggle(&mut selected, 10);

    let seats = layout.render(&selected);
    let order: Vec<u32> = seats.iter().map(|seat| seat.id).collect();

    assert_eq!(order, (1..=10).collect::<Vec<_>>());
    assert_eq!(seats[2].position.col, 2);
    assert_eq!(status_of(&layout, &selected, 3), SeatStatus::Booked);
    assert_eq!(status_of(&layout, &selected, 9), SeatStatus::LadiesAvailable);
    assert_eq!(status_of(&layout, &selected, 10), SeatStatus::Selected);
}
