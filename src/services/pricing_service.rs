use crate::models::booking::{PriceBreakdown, Upgrade, Upgrades};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Itemised price for `seat_count` seats at `price_per_seat`.
///
/// Each enabled upgrade is charged per seat. Tax is applied once to the
/// upgraded subtotal and rounded half-up to a whole currency unit.
pub fn calculate(
    price_per_seat: u64,
    seat_count: u64,
    upgrades: &Upgrades,
    tax_rate: Decimal,
) -> PriceBreakdown {
    let line = |upgrade: Upgrade| {
        if upgrades.is_enabled(upgrade) {
            upgrade.price_per_seat() * seat_count
        } else {
            0
        }
    };

    let base_fare = price_per_seat * seat_count;
    let luxury_sleeper = line(Upgrade::LuxurySleeper);
    let meal = line(Upgrade::Meal);
    let priority_boarding = line(Upgrade::PriorityBoarding);
    let upgrades_total = luxury_sleeper + meal + priority_boarding;
    let tax = tax_on(base_fare + upgrades_total, tax_rate);

    PriceBreakdown {
        seat_count,
        base_fare,
        luxury_sleeper,
        meal,
        priority_boarding,
        upgrades_total,
        tax,
        total: base_fare + upgrades_total + tax,
    }
}

pub fn tax_on(subtotal: u64, tax_rate: Decimal) -> u64 {
    (Decimal::from(subtotal) * tax_rate)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u64()
        .unwrap_or(0)
}
