//! Booking modal widget logic for tour packages.
//!
//! State management and pricing for the "book this tour" dialog: pick a travel
//! date and a traveler count, apply the group-size discount, and hand the
//! resulting booking payload to the embedding application's checkout handler.
//!
//! No persistence and no I/O. A single [`BookingModal`] owns all mutable state
//! for the lifetime of the dialog and recomputes the price quote synchronously
//! whenever the traveler count or unit price changes.

pub mod booking;
pub mod error;
pub mod pricing;

// Re-export commonly used items
pub use booking::{BookingModal, BookingSelection, CheckoutPayload, DiscountBanner, PriceDisplay};
pub use error::{Error, Result};
pub use pricing::{compute_quote, discount_percent, format_usd, round_money, PriceQuote, TourOffer};
