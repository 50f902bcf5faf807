//! Booking modal state holder.
//!
//! Owns the selection state exclusively for the lifetime of the dialog and
//! recomputes the price quote synchronously on every traveler or price change.
//! All event handling is single-threaded; there is no shared state.

use chrono::{NaiveDate, Utc};
use tracing::{debug, info};

use crate::booking::payload::CheckoutPayload;
use crate::booking::selection::BookingSelection;
use crate::booking::view::{DiscountBanner, PriceDisplay};
use crate::error::{Error, Result};
use crate::pricing::{compute_quote, PriceQuote, TourOffer};

/// Callback invoked when the modal is dismissed.
pub type OnClose = Box<dyn FnMut()>;
/// Callback receiving the booking payload on confirmation.
pub type OnProceedToCheckout = Box<dyn FnMut(CheckoutPayload)>;

/// The booking dialog: a thin state holder around the pricing calculator.
///
/// The embedding application supplies an immutable [`TourOffer`], registers
/// callbacks, and drives the modal through its event methods. On
/// [`confirm`](Self::confirm) the assembled [`CheckoutPayload`] is forwarded
/// unchanged to the checkout callback.
pub struct BookingModal {
    tour: TourOffer,
    is_activity: bool,
    is_open: bool,
    min_date: NaiveDate,
    selection: BookingSelection,
    quote: PriceQuote,
    on_close: Option<OnClose>,
    on_proceed_to_checkout: Option<OnProceedToCheckout>,
}

impl BookingModal {
    /// Create a closed modal for the given offer.
    ///
    /// The initial quote is computed for one traveler. The earliest bookable
    /// date defaults to today (UTC).
    pub fn new(tour: TourOffer, is_activity: bool) -> Self {
        let mut modal = Self {
            tour,
            is_activity,
            is_open: false,
            min_date: Utc::now().date_naive(),
            selection: BookingSelection::new(),
            quote: PriceQuote::default(),
            on_close: None,
            on_proceed_to_checkout: None,
        };
        modal.recompute();
        modal
    }

    /// Override the earliest bookable date (defaults to today).
    pub fn with_min_date(mut self, min_date: NaiveDate) -> Self {
        self.min_date = min_date;
        self
    }

    /// Register the dismissal callback.
    pub fn on_close(&mut self, callback: impl FnMut() + 'static) {
        self.on_close = Some(Box::new(callback));
    }

    /// Register the checkout callback.
    pub fn on_proceed_to_checkout(&mut self, callback: impl FnMut(CheckoutPayload) + 'static) {
        self.on_proceed_to_checkout = Some(Box::new(callback));
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn tour(&self) -> &TourOffer {
        &self.tour
    }

    pub fn travelers(&self) -> i32 {
        self.selection.travelers()
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selection.selected_date()
    }

    /// The last computed quote. Always a pure function of (unit price,
    /// traveler count); all zeros until a price has parsed.
    pub fn quote(&self) -> &PriceQuote {
        &self.quote
    }

    /// Open the dialog and compute a fresh quote for the current selection.
    pub fn open(&mut self) {
        self.is_open = true;
        self.recompute();
        debug!(tour = %self.tour.title, "booking modal opened");
    }

    /// Dismiss the dialog, firing the close callback.
    ///
    /// The selection and quote are discarded with the dialog; reopening starts
    /// from one traveler and no date.
    pub fn close(&mut self) {
        self.is_open = false;
        self.selection = BookingSelection::new();
        self.quote = PriceQuote::default();
        debug!(tour = %self.tour.title, "booking modal closed");
        if let Some(callback) = self.on_close.as_mut() {
            callback();
        }
    }

    /// Select a travel date. Dates before the earliest bookable date are
    /// rejected.
    pub fn select_date(&mut self, date: NaiveDate) -> Result<()> {
        if date < self.min_date {
            return Err(Error::DateInPast(date));
        }
        self.selection.select_date(date);
        debug!(%date, "travel date selected");
        Ok(())
    }

    /// Add one traveler and recompute the quote. Returns the new count.
    pub fn increment_travelers(&mut self) -> i32 {
        let travelers = self.selection.increment_travelers();
        self.recompute();
        travelers
    }

    /// Remove one traveler and recompute the quote. The count floors at 1.
    /// Returns the new count.
    pub fn decrement_travelers(&mut self) -> i32 {
        let travelers = self.selection.decrement_travelers();
        self.recompute();
        travelers
    }

    /// Whether confirmation is currently allowed (a date has been chosen).
    pub fn can_confirm(&self) -> bool {
        self.selection.selected_date().is_some()
    }

    /// Price block for the renderer.
    pub fn price_display(&self) -> PriceDisplay {
        PriceDisplay::project(&self.quote, self.tour.display_unit_price())
    }

    /// Group-size banner for the renderer, `None` below two travelers.
    pub fn discount_banner(&self) -> Option<DiscountBanner> {
        DiscountBanner::for_travelers(self.selection.travelers())
    }

    /// Confirm the booking: build the checkout payload from the stored quote
    /// and forward it to the checkout callback.
    ///
    /// Fails with [`Error::DateNotSelected`] while no date is chosen,
    /// regardless of traveler count or price.
    pub fn confirm(&mut self) -> Result<CheckoutPayload> {
        let selected_date = self.selection.selected_date().ok_or(Error::DateNotSelected)?;

        let payload = CheckoutPayload {
            tour: self.tour.clone(),
            selected_date,
            travelers: self.selection.travelers(),
            total_price: self.quote.total,
            is_activity: self.is_activity,
        };

        info!(
            tour = %self.tour.title,
            travelers = payload.travelers,
            total = %payload.total_price,
            "booking confirmed, handing off to checkout"
        );

        if let Some(callback) = self.on_proceed_to_checkout.as_mut() {
            callback(payload.clone());
        }
        Ok(payload)
    }

    /// Recompute the quote from the current unit price and traveler count.
    ///
    /// When the price string does not parse the stored quote is left at
    /// whatever was last computed; only the display falls back to 599.
    fn recompute(&mut self) {
        if let Some(unit_price) = self.tour.unit_price() {
            self.quote = compute_quote(unit_price, self.selection.travelers());
            debug!(
                travelers = self.selection.travelers(),
                total = %self.quote.total,
                "quote recomputed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn tour(price: &str) -> TourOffer {
        TourOffer {
            title: "Morocco Desert Tour".to_string(),
            price: price.to_string(),
            duration: "7 days".to_string(),
            subtitle: None,
            description: None,
            highlights: vec!["Sahara Desert".to_string()],
            rating: None,
            category: None,
            image: None,
            route: None,
        }
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn modal(price: &str) -> BookingModal {
        BookingModal::new(tour(price), false).with_min_date(date("2026-01-01"))
    }

    #[test]
    fn test_initial_quote_for_one_traveler() {
        let modal = modal("$599");
        assert_eq!(modal.travelers(), 1);
        assert_eq!(modal.quote().total, dec!(599));
        assert_eq!(modal.quote().discount_percent, dec!(0));
    }

    #[test]
    fn test_traveler_changes_recompute_quote() {
        let mut modal = modal("$599");
        modal.increment_travelers();
        assert_eq!(modal.quote().total, dec!(1018.30));
        assert_eq!(modal.quote().discount_percent, dec!(15));

        modal.decrement_travelers();
        assert_eq!(modal.quote().total, dec!(599));
    }

    #[test]
    fn test_decrement_floors_at_one() {
        let mut modal = modal("$599");
        assert_eq!(modal.decrement_travelers(), 1);
        assert_eq!(modal.decrement_travelers(), 1);
        assert_eq!(modal.quote().total, dec!(599));
    }

    #[test]
    fn test_confirm_requires_date() {
        let mut modal = modal("$599");
        for _ in 0..9 {
            modal.increment_travelers();
        }
        assert!(!modal.can_confirm());
        assert_eq!(modal.confirm(), Err(Error::DateNotSelected));
    }

    #[test]
    fn test_past_date_rejected() {
        let mut modal = modal("$599");
        assert_eq!(
            modal.select_date(date("2025-12-31")),
            Err(Error::DateInPast(date("2025-12-31")))
        );
        assert!(!modal.can_confirm());
    }

    #[test]
    fn test_confirm_builds_payload_and_fires_callback() {
        let received = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&received);

        let mut modal = modal("$599");
        modal.on_proceed_to_checkout(move |payload| {
            *sink.borrow_mut() = Some(payload);
        });

        modal.open();
        modal.select_date(date("2026-03-14")).unwrap();
        modal.increment_travelers();

        let payload = modal.confirm().unwrap();
        assert_eq!(payload.travelers, 2);
        assert_eq!(payload.total_price, dec!(1018.30));
        assert_eq!(payload.selected_date, date("2026-03-14"));
        assert!(!payload.is_activity);
        assert_eq!(received.borrow().as_ref(), Some(&payload));
    }

    #[test]
    fn test_close_fires_callback_and_resets_state() {
        let closed = Rc::new(RefCell::new(false));
        let flag = Rc::clone(&closed);

        let mut modal = modal("$599");
        modal.on_close(move || {
            *flag.borrow_mut() = true;
        });

        modal.open();
        modal.select_date(date("2026-03-14")).unwrap();
        modal.increment_travelers();
        modal.close();

        assert!(*closed.borrow());
        assert!(!modal.is_open());
        assert_eq!(modal.travelers(), 1);
        assert_eq!(modal.selected_date(), None);
        assert_eq!(*modal.quote(), PriceQuote::default());
    }

    #[test]
    fn test_unparseable_price_keeps_last_quote_but_displays_fallback() {
        let mut modal = modal("price on request");

        // Nothing ever parsed: the stored quote stays at its initial zeros
        // while the display falls back to 599 per person.
        modal.increment_travelers();
        assert_eq!(modal.quote().total, dec!(0));
        modal.decrement_travelers();
        assert_eq!(
            modal.price_display(),
            PriceDisplay::PerPerson { unit_price: dec!(599) }
        );
    }

    #[test]
    fn test_discount_banner_follows_traveler_count() {
        let mut modal = modal("$599");
        assert_eq!(modal.discount_banner(), None);
        modal.increment_travelers();
        assert_eq!(modal.discount_banner(), Some(DiscountBanner::Couples));
        for _ in 0..8 {
            modal.increment_travelers();
        }
        assert_eq!(modal.discount_banner(), Some(DiscountBanner::LargeGroup));
    }

    #[test]
    fn test_price_display_discounted_block() {
        let mut modal = modal("$599");
        modal.increment_travelers();
        assert_eq!(
            modal.price_display(),
            PriceDisplay::Discounted {
                original_total: dec!(1198),
                total: dec!(1018.30),
                percent: dec!(15),
                savings: dec!(179.70),
            }
        );
    }
}
