//! View models projected from modal state.
//!
//! Pure data for a renderer. This is where the 599 display fallback surfaces
//! when the offer's price string does not parse.

use rust_decimal::Decimal;

use crate::pricing::PriceQuote;

/// Price block shown in the modal.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceDisplay {
    /// A discount applies: strikethrough original, final total, tier percent
    /// and total savings.
    Discounted {
        original_total: Decimal,
        total: Decimal,
        percent: Decimal,
        savings: Decimal,
    },
    /// No discount: per-person base price.
    PerPerson { unit_price: Decimal },
}

impl PriceDisplay {
    /// Project the price block from the stored quote and the display unit
    /// price (which may be the fallback).
    pub fn project(quote: &PriceQuote, display_unit_price: Decimal) -> Self {
        if quote.discount_percent > Decimal::ZERO {
            PriceDisplay::Discounted {
                original_total: quote.original_total,
                total: quote.total,
                percent: quote.discount_percent,
                savings: quote.discount_amount,
            }
        } else {
            PriceDisplay::PerPerson {
                unit_price: display_unit_price,
            }
        }
    }
}

/// Group-size banner shown once two or more travelers are selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscountBanner {
    Couples,
    Group,
    LargeGroup,
}

impl DiscountBanner {
    /// Banner for the given traveler count, `None` below 2.
    pub fn for_travelers(travelers: i32) -> Option<Self> {
        if travelers == 2 {
            Some(DiscountBanner::Couples)
        } else if travelers >= 10 {
            Some(DiscountBanner::LargeGroup)
        } else if travelers >= 5 {
            Some(DiscountBanner::Group)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DiscountBanner::Couples => "Couples Discount: 15% off!",
            DiscountBanner::Group => "Group Discount: 25% off!",
            DiscountBanner::LargeGroup => "Large Group Discount: 30% off!",
        }
    }
}
