//! Error handling for the booking widget

use chrono::NaiveDate;

/// Booking error type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("no travel date selected")]
    DateNotSelected,

    #[error("travel date {0} is before the earliest bookable date")]
    DateInPast(NaiveDate),
}

pub type Result<T> = std::result::Result<T, Error>;
