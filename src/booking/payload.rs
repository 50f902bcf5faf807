//! Checkout payload handed to the embedding application.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::pricing::TourOffer;

/// Booking data forwarded to the checkout handler on confirmation.
///
/// Serializes with camelCase keys: `{tour, selectedDate, travelers, totalPrice,
/// isActivity}`. `selectedDate` is an ISO `YYYY-MM-DD` string and `totalPrice`
/// a JSON number.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutPayload {
    pub tour: TourOffer,
    pub selected_date: NaiveDate,
    pub travelers: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    pub is_activity: bool,
}
