//! Booking factory

use chrono::{Duration, NaiveDate};
use rand::rngs::ThreadRng;
use rand::Rng;
use tracing::trace;

use super::{local_today, pick};
use crate::constants::{self, validation};
use crate::types::{Booking, BookingDates};

/// Field overrides for [`BookingFactory::create_booking`]
///
/// Every `Some` replaces the randomised default. Out-of-policy values are
/// accepted as given.
#[derive(Debug, Clone, Default)]
pub struct BookingOverrides {
    pub firstname: Option<String>,
    pub lastname: Option<String>,
    pub totalprice: Option<i64>,
    pub depositpaid: Option<bool>,
    pub bookingdates: Option<BookingDates>,
    /// Stay length used when `bookingdates` is not given
    pub stay_days: Option<u32>,
    /// `Some(None)` drops the field entirely
    pub additionalneeds: Option<Option<String>>,
}

/// Builds randomised bookings
pub struct BookingFactory<R = ThreadRng> {
    rng: R,
    today: NaiveDate,
}

impl BookingFactory<ThreadRng> {
    pub fn new() -> Self {
        Self::from_rng(rand::thread_rng())
    }
}

impl Default for BookingFactory<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> BookingFactory<R> {
    pub fn from_rng(rng: R) -> Self {
        Self {
            rng,
            today: local_today(),
        }
    }

    /// Compute booking dates relative to `today` instead of the local date
    pub fn anchored_at(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Checkin 1..=365 days ahead, checkout `stay_days` later (random
    /// 1..=30 when not given). Dates past the calendar end saturate at
    /// `NaiveDate::MAX`.
    pub fn generate_booking_dates(&mut self, stay_days: Option<u32>) -> BookingDates {
        let lead = self.rng.gen_range(
            validation::date::MIN_FUTURE_DAYS..=validation::date::MAX_FUTURE_DAYS,
        );
        let stay = match stay_days {
            Some(days) => i64::from(days),
            None => self
                .rng
                .gen_range(1..=validation::date::CHECKOUT_DAYS_AFTER_CHECKIN),
        };

        let checkin = days_after(self.today, lead);
        BookingDates {
            checkin,
            checkout: days_after(checkin, stay),
        }
    }

    /// Build a booking, caller overrides winning over random defaults
    pub fn create_booking(&mut self, overrides: BookingOverrides) -> Booking {
        let firstname = overrides
            .firstname
            .unwrap_or_else(|| pick(&mut self.rng, constants::FIRST_NAMES).to_string());
        let lastname = overrides
            .lastname
            .unwrap_or_else(|| pick(&mut self.rng, constants::LAST_NAMES).to_string());
        let totalprice = overrides.totalprice.unwrap_or_else(|| {
            self.rng
                .gen_range(validation::price::MIN..=validation::price::MAX)
        });
        let depositpaid = overrides.depositpaid.unwrap_or_else(|| self.rng.gen_bool(0.5));
        let bookingdates = match overrides.bookingdates {
            Some(dates) => dates,
            None => self.generate_booking_dates(overrides.stay_days),
        };
        let additionalneeds = overrides.additionalneeds.unwrap_or_else(|| {
            Some(pick(&mut self.rng, constants::ADDITIONAL_NEEDS).to_string())
        });

        trace!(%firstname, %lastname, totalprice, "generated booking");

        Booking {
            firstname,
            lastname,
            totalprice,
            depositpaid,
            bookingdates,
            additionalneeds,
        }
    }

    /// Booking with the four commonly customised fields set
    pub fn create_custom_booking(
        &mut self,
        firstname: &str,
        lastname: &str,
        price: i64,
        depositpaid: bool,
    ) -> Booking {
        self.create_booking(BookingOverrides {
            firstname: Some(firstname.to_string()),
            lastname: Some(lastname.to_string()),
            totalprice: Some(price),
            depositpaid: Some(depositpaid),
            ..Default::default()
        })
    }

    /// Draw a guest name pair from the pools
    pub fn guest_name(&mut self) -> (String, String) {
        (
            pick(&mut self.rng, constants::FIRST_NAMES).to_string(),
            pick(&mut self.rng, constants::LAST_NAMES).to_string(),
        )
    }

    /// Draw a price in `min..=max`, clamped to the configured bounds
    pub fn price_between(&mut self, min: i64, max: i64) -> i64 {
        let lo = min.clamp(validation::price::MIN, validation::price::MAX);
        let hi = max
            .clamp(validation::price::MIN, validation::price::MAX)
            .max(lo);
        self.rng.gen_range(lo..=hi)
    }
}

fn days_after(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days))
        .unwrap_or(NaiveDate::MAX)
}

/// The same booking after a full update: price raised and extra meals added
pub fn updated_booking(original: &Booking) -> Booking {
    Booking {
        totalprice: original
            .totalprice
            .saturating_add(constants::UPDATE_PRICE_INCREASE),
        additionalneeds: Some(constants::UPDATED_ADDITIONAL_NEEDS.to_string()),
        ..original.clone()
    }
}
