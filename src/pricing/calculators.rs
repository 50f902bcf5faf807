//! Core pricing calculation functions.
//!
//! Pure functions for the group-discount math - no modal state access.
//! A quote never fails; traveler counts below 1 are clamped at the caller.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Round to specified decimal places using banker's rounding (ROUND_HALF_EVEN).
///
/// Banker's rounding rounds to the nearest even number when the value is exactly
/// halfway between two possibilities. This reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use tour_booking::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Discount percentage for a given traveler count.
///
/// Tiers are evaluated first-match-wins:
/// - exactly 2 travelers: 15% (couples)
/// - 10 or more: 30% (large groups)
/// - 5 to 9: 25% (groups)
/// - otherwise (1, 3, 4): no discount
pub fn discount_percent(travelers: i32) -> Decimal {
    if travelers == 2 {
        dec!(15)
    } else if travelers >= 10 {
        dec!(30)
    } else if travelers >= 5 {
        dec!(25)
    } else {
        Decimal::ZERO
    }
}

/// Derived pricing result for a tour and traveler count.
///
/// Holds no independent state; recomputed from its inputs on every change and
/// discarded when the modal closes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceQuote {
    /// Applied discount tier, in percent (0 when no tier matches).
    pub discount_percent: Decimal,
    /// Total savings across all travelers.
    pub discount_amount: Decimal,
    /// Undiscounted total (unit price x travelers).
    pub original_total: Decimal,
    /// Final total after the discount.
    pub total: Decimal,
}

/// Compute the price quote for one tour booking.
///
/// `unit_price` is the per-person base price (>= 0); `travelers` is the number
/// of people in the booking (>= 1, enforced by [`BookingSelection`]).
///
/// The discount applies per person: `total = (unit_price - unit_price * d / 100)
/// * travelers`.
///
/// [`BookingSelection`]: crate::booking::BookingSelection
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use tour_booking::pricing::compute_quote;
///
/// let quote = compute_quote(dec!(599), 2);
/// assert_eq!(quote.discount_percent, dec!(15));
/// assert_eq!(quote.total, dec!(1018.30));
/// ```
pub fn compute_quote(unit_price: Decimal, travelers: i32) -> PriceQuote {
    let percent = discount_percent(travelers);
    let per_person_discount = unit_price * percent / dec!(100);
    let discounted_unit = unit_price - per_person_discount;
    let count = Decimal::from(travelers);

    PriceQuote {
        discount_percent: percent,
        discount_amount: per_person_discount * count,
        original_total: unit_price * count,
        total: discounted_unit * count,
    }
}

/// Format an amount as US-dollar currency, e.g. `$1,018.30`.
///
/// Rounds to two decimal places (banker's rounding) and groups thousands with
/// commas, matching `Intl.NumberFormat("en-US", { currency: "USD" })`.
pub fn format_usd(amount: Decimal) -> String {
    let rounded = round_money(amount, 2);
    let text = format!("{:.2}", rounded.abs());
    let (units, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(units.len() + units.len() / 3);
    for (i, c) in units.chars().enumerate() {
        if i > 0 && (units.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if rounded < Decimal::ZERO { "-" } else { "" };
    format!("{}${}.{}", sign, grouped, cents)
}
