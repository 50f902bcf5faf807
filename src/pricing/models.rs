//! Tour offer model.
//!
//! The offer is supplied by the embedding application and stays immutable for
//! the lifetime of the modal.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// Unit price shown when the offer's price string carries no digits.
///
/// Display-only: the stored quote keeps whatever value was last computed and is
/// never fed from this fallback.
pub const DISPLAY_FALLBACK_PRICE: Decimal = dec!(599);

/// A bookable tour package with a per-person base price.
///
/// `price` is a currency-formatted string (e.g. `"$599"`); the numeric amount
/// is recovered by stripping every non-digit character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourOffer {
    pub title: String,
    pub price: String,
    pub duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
}

impl TourOffer {
    /// Parse the per-person base price from the currency-formatted string.
    ///
    /// Strips every non-digit character, so `"$1,299"` parses to `1299`.
    /// Returns `None` when no digits remain.
    pub fn unit_price(&self) -> Option<Decimal> {
        let digits: String = self.price.chars().filter(|c| c.is_ascii_digit()).collect();
        if digits.is_empty() {
            return None;
        }
        digits.parse().ok()
    }

    /// Per-person price for display, falling back to
    /// [`DISPLAY_FALLBACK_PRICE`] when the price string does not parse.
    pub fn display_unit_price(&self) -> Decimal {
        self.unit_price().unwrap_or(DISPLAY_FALLBACK_PRICE)
    }
}
