//! Data providers
//!
//! Named archetypes built on the factories. A provider's output depends only
//! on its arguments and the RNG it was constructed with.
//!
//! Batches make different uniqueness promises per entity. User batches embed
//! a UUID in every email, so two users share an address with probability
//! around n²/2¹²³. Booking batches promise nothing: guest names come from a
//! 10×10 pool, so a batch of n bookings repeats a name pair with probability
//! about 1 − e^(−n²/200), already ~40% at n = 10.

use chrono::NaiveDate;
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::constants::{archetypes, validation};
use crate::factory::{BookingFactory, BookingOverrides, UserFactory, UserOverrides};
use crate::types::{Booking, UserDetails};

/// Booking archetypes
pub struct BookingDataProvider<R = ThreadRng> {
    factory: BookingFactory<R>,
}

impl BookingDataProvider<ThreadRng> {
    pub fn new() -> Self {
        Self {
            factory: BookingFactory::new(),
        }
    }
}

impl Default for BookingDataProvider<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> BookingDataProvider<R> {
    pub fn from_rng(rng: R) -> Self {
        Self {
            factory: BookingFactory::from_rng(rng),
        }
    }

    pub fn anchored_at(self, today: NaiveDate) -> Self {
        Self {
            factory: self.factory.anchored_at(today),
        }
    }

    /// Fully randomised booking
    pub fn standard_booking(&mut self) -> Booking {
        self.factory.create_booking(BookingOverrides::default())
    }

    /// Booking without a deposit or additional needs
    pub fn minimal_booking(&mut self) -> Booking {
        self.factory.create_booking(BookingOverrides {
            depositpaid: Some(false),
            additionalneeds: Some(None),
            ..Default::default()
        })
    }

    pub fn booking_with_price(&mut self, price: i64) -> Booking {
        self.factory.create_booking(BookingOverrides {
            totalprice: Some(price),
            ..Default::default()
        })
    }

    pub fn max_price_booking(&mut self) -> Booking {
        self.booking_with_price(validation::price::MAX)
    }

    pub fn min_price_booking(&mut self) -> Booking {
        self.booking_with_price(validation::price::MIN)
    }

    pub fn high_value_booking(&mut self) -> Booking {
        self.factory.create_booking(BookingOverrides {
            totalprice: Some(archetypes::HIGH_VALUE_PRICE),
            depositpaid: Some(archetypes::HIGH_VALUE_DEPOSIT),
            ..Default::default()
        })
    }

    pub fn low_value_booking(&mut self) -> Booking {
        self.factory.create_booking(BookingOverrides {
            totalprice: Some(archetypes::LOW_VALUE_PRICE),
            depositpaid: Some(archetypes::LOW_VALUE_DEPOSIT),
            ..Default::default()
        })
    }

    /// Booking whose checkout is exactly `days` after checkin
    pub fn long_stay_booking(&mut self, days: u32) -> Booking {
        self.factory.create_booking(BookingOverrides {
            stay_days: Some(days),
            ..Default::default()
        })
    }

    /// `count` independently randomised bookings (names may repeat)
    pub fn batch_bookings(&mut self, count: usize) -> Vec<Booking> {
        (0..count).map(|_| self.standard_booking()).collect()
    }
}

/// User archetypes
pub struct UserDataProvider<R = ThreadRng> {
    factory: UserFactory<R>,
}

impl UserDataProvider<ThreadRng> {
    pub fn new() -> Self {
        Self {
            factory: UserFactory::new(),
        }
    }
}

impl Default for UserDataProvider<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> UserDataProvider<R> {
    pub fn from_rng(rng: R) -> Self {
        Self {
            factory: UserFactory::from_rng(rng),
        }
    }

    /// Fully randomised user opted in to newsletter and offers
    pub fn standard_user(&mut self) -> UserDetails {
        self.factory.create_user(UserOverrides {
            newsletter: Some(true),
            special_offers: Some(true),
            ..Default::default()
        })
    }

    /// User with optional fields left empty and no opt-ins
    pub fn minimal_user(&mut self) -> UserDetails {
        self.factory.create_user(UserOverrides {
            company: Some(String::new()),
            address2: Some(None),
            newsletter: Some(false),
            special_offers: Some(false),
            ..Default::default()
        })
    }

    /// User registering on behalf of a company from the pool
    pub fn corporate_user(&mut self) -> UserDetails {
        self.factory.create_user(UserOverrides {
            newsletter: Some(true),
            special_offers: Some(false),
            ..Default::default()
        })
    }

    pub fn user_with_email_domain(&mut self, domain: &str) -> UserDetails {
        self.factory.create_user(UserOverrides {
            email_domain: Some(domain.to_string()),
            ..Default::default()
        })
    }

    /// User with a caller-chosen password; the password is not checked
    pub fn user_with_password(&mut self, password: &str) -> UserDetails {
        self.factory.create_user(UserOverrides {
            password: Some(password.to_string()),
            ..Default::default()
        })
    }

    pub fn user_from_country(&mut self, country: &str) -> UserDetails {
        self.factory.create_user(UserOverrides {
            country: Some(country.to_string()),
            ..Default::default()
        })
    }

    pub fn us_user(&mut self) -> UserDetails {
        self.user_from_country("United States")
    }

    pub fn india_user(&mut self) -> UserDetails {
        self.user_from_country("India")
    }

    /// Users alternating between newsletter-only and offers-only opt-ins
    pub fn users_with_mixed_preferences(&mut self, count: usize) -> Vec<UserDetails> {
        (0..count)
            .map(|i| {
                self.factory.create_user(UserOverrides {
                    newsletter: Some(i % 2 == 0),
                    special_offers: Some(i % 2 == 1),
                    ..Default::default()
                })
            })
            .collect()
    }

    /// `count` independently randomised users with distinct emails
    pub fn batch_users(&mut self, count: usize) -> Vec<UserDetails> {
        (0..count)
            .map(|_| self.factory.create_user(UserOverrides::default()))
            .collect()
    }
}
