//! Pricing module for tour bookings.
//!
//! Pure group-discount calculations for the booking modal. A quote is always a
//! function of (unit price, traveler count) and holds no state of its own.

pub mod calculators;
pub mod models;

// Re-export commonly used items
pub use calculators::{compute_quote, discount_percent, format_usd, round_money, PriceQuote};
pub use models::{TourOffer, DISPLAY_FALLBACK_PRICE};
