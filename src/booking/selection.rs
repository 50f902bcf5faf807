//! Date and traveler-count selection state.

use chrono::NaiveDate;

/// Mutable selection state for one booking: travel date and traveler count.
///
/// The traveler count never drops below 1; decrementing at the floor is a
/// no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSelection {
    selected_date: Option<NaiveDate>,
    travelers: i32,
}

impl BookingSelection {
    pub fn new() -> Self {
        Self {
            selected_date: None,
            travelers: 1,
        }
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn travelers(&self) -> i32 {
        self.travelers
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = Some(date);
    }

    /// Add one traveler. No upper bound.
    pub fn increment_travelers(&mut self) -> i32 {
        self.travelers += 1;
        self.travelers
    }

    /// Remove one traveler, stopping at the floor of 1.
    pub fn decrement_travelers(&mut self) -> i32 {
        self.travelers = (self.travelers - 1).max(1);
        self.travelers
    }
}

impl Default for BookingSelection {
    fn default() -> Self {
        Self::new()
    }
}
