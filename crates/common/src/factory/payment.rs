//! Payment card factory

use chrono::{Datelike, NaiveDate};
use rand::rngs::ThreadRng;
use rand::Rng;

use super::{local_today, pick, random_from_charset};
use crate::constants::{self, characters, validation};
use crate::types::PaymentDetails;

/// Builds card details for the checkout form
pub struct PaymentFactory<R = ThreadRng> {
    rng: R,
    today: NaiveDate,
}

impl PaymentFactory<ThreadRng> {
    pub fn new() -> Self {
        Self::from_rng(rand::thread_rng())
    }
}

impl Default for PaymentFactory<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PaymentFactory<R> {
    pub fn from_rng(rng: R) -> Self {
        Self {
            rng,
            today: local_today(),
        }
    }

    /// Compute expiry years relative to `today` instead of the local date
    pub fn anchored_at(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    /// Test card accepted by the demo checkout, expiring 1-5 years ahead
    pub fn valid_payment(&mut self) -> PaymentDetails {
        let (min_ahead, max_ahead) = validation::card::EXPIRY_YEARS_AHEAD;
        PaymentDetails {
            name_on_card: format!(
                "{} {}",
                pick(&mut self.rng, constants::FIRST_NAMES),
                pick(&mut self.rng, constants::LAST_NAMES)
            ),
            card_number: pick(&mut self.rng, constants::TEST_CARD_NUMBERS).to_string(),
            cvc: self.rng.gen_range(100..=999u32).to_string(),
            expiry_month: format!("{:02}", self.rng.gen_range(1..=12u32)),
            expiry_year: (self.today.year() + self.rng.gen_range(min_ahead..=max_ahead))
                .to_string(),
        }
    }

    /// Card details that every check should reject
    pub fn invalid_payment(&mut self) -> PaymentDetails {
        let (min_ago, max_ago) = validation::card::EXPIRY_YEARS_AHEAD;
        PaymentDetails {
            name_on_card: String::new(),
            card_number: random_from_charset(&mut self.rng, characters::NUMBERS, 4),
            cvc: random_from_charset(&mut self.rng, characters::NUMBERS, 2),
            expiry_month: "13".to_string(),
            expiry_year: (self.today.year() - self.rng.gen_range(min_ago..=max_ago)).to_string(),
        }
    }
}
