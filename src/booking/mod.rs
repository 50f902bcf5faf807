//! Booking modal module.
//!
//! The modal shell around the pricing calculator: selection state, derived
//! view models, and the checkout payload handed to the embedding application.

pub mod modal;
pub mod payload;
pub mod selection;
pub mod view;

// Re-export commonly used items
pub use modal::BookingModal;
pub use payload::CheckoutPayload;
pub use selection::BookingSelection;
pub use view::{DiscountBanner, PriceDisplay};
