//! Test scenarios
//!
//! A scenario bundles the inputs for one end-to-end flow with a sentence
//! describing what the system under test should do with them. Scenarios are
//! plain data; driving them against a live system is the caller's job.

use chrono::NaiveDate;
use rand::rngs::ThreadRng;
use rand::Rng;
use serde::Serialize;

use crate::constants::{self, archetypes, validation};
use crate::error::Error;
use crate::factory::{
    local_today, updated_booking, AuthFactory, BookingFactory, BookingOverrides, PaymentFactory,
    UserFactory, UserOverrides,
};
use crate::provider::UserDataProvider;
use crate::types::{AuthCredentials, Booking, BookingPatch, PaymentDetails, UserDetails};

#[derive(Debug, Clone, Serialize)]
pub struct RegistrationScenario {
    pub user: UserDetails,
    pub expected_behavior: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterThenBookScenario {
    pub user: UserDetails,
    pub booking: Booking,
    pub expected_behavior: String,
}

/// Create, fully update, patch, then delete one booking
#[derive(Debug, Clone, Serialize)]
pub struct BookingLifecycleScenario {
    pub initial_booking: Booking,
    pub update_data: Booking,
    pub partial_update: BookingPatch,
    pub expected_behavior: String,
}

impl BookingLifecycleScenario {
    /// Booking state the API should report after the partial update
    pub fn expected_final_booking(&self) -> Booking {
        self.partial_update.apply_to(&self.update_data)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct BookingScenario {
    pub booking: Booking,
    pub expected_behavior: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LongStayScenario {
    pub booking: Booking,
    pub stay_days: u32,
    pub expected_behavior: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InvalidLoginScenario {
    pub credentials: AuthCredentials,
    pub expected_behavior: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckoutScenario {
    pub user: UserDetails,
    pub payment: PaymentDetails,
    pub expected_behavior: String,
}

/// Every scenario the provider can build, addressable by name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioKind {
    CompleteRegistration,
    MinimalRegistration,
    RegisterThenBook,
    BookingLifecycle,
    MaxPriceBooking,
    MinPriceBooking,
    LongStayBooking,
    InvalidLogin,
    Checkout,
}

impl ScenarioKind {
    pub const ALL: [ScenarioKind; 9] = [
        ScenarioKind::CompleteRegistration,
        ScenarioKind::MinimalRegistration,
        ScenarioKind::RegisterThenBook,
        ScenarioKind::BookingLifecycle,
        ScenarioKind::MaxPriceBooking,
        ScenarioKind::MinPriceBooking,
        ScenarioKind::LongStayBooking,
        ScenarioKind::InvalidLogin,
        ScenarioKind::Checkout,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ScenarioKind::CompleteRegistration => "complete-registration",
            ScenarioKind::MinimalRegistration => "minimal-registration",
            ScenarioKind::RegisterThenBook => "register-then-book",
            ScenarioKind::BookingLifecycle => "booking-lifecycle",
            ScenarioKind::MaxPriceBooking => "max-price-booking",
            ScenarioKind::MinPriceBooking => "min-price-booking",
            ScenarioKind::LongStayBooking => "long-stay-booking",
            ScenarioKind::InvalidLogin => "invalid-login",
            ScenarioKind::Checkout => "checkout",
        }
    }
}

impl std::fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ScenarioKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| Error::UnknownScenario(s.to_string()))
    }
}

/// Any built scenario
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Scenario {
    Registration(RegistrationScenario),
    RegisterThenBook(RegisterThenBookScenario),
    BookingLifecycle(BookingLifecycleScenario),
    Booking(BookingScenario),
    LongStay(LongStayScenario),
    InvalidLogin(InvalidLoginScenario),
    Checkout(CheckoutScenario),
}

impl Scenario {
    pub fn expected_behavior(&self) -> &str {
        match self {
            Scenario::Registration(s) => &s.expected_behavior,
            Scenario::RegisterThenBook(s) => &s.expected_behavior,
            Scenario::BookingLifecycle(s) => &s.expected_behavior,
            Scenario::Booking(s) => &s.expected_behavior,
            Scenario::LongStay(s) => &s.expected_behavior,
            Scenario::InvalidLogin(s) => &s.expected_behavior,
            Scenario::Checkout(s) => &s.expected_behavior,
        }
    }
}

/// Builds scenarios from one shared random source
pub struct ScenarioProvider<R = ThreadRng> {
    rng: R,
    today: NaiveDate,
}

impl ScenarioProvider<ThreadRng> {
    pub fn new() -> Self {
        Self::from_rng(rand::thread_rng())
    }
}

impl Default for ScenarioProvider<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ScenarioProvider<R> {
    pub fn from_rng(rng: R) -> Self {
        Self {
            rng,
            today: local_today(),
        }
    }

    /// Anchor booking and card dates to `today`
    pub fn anchored_at(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    fn bookings(&mut self) -> BookingFactory<&mut R> {
        BookingFactory::from_rng(&mut self.rng).anchored_at(self.today)
    }

    fn users(&mut self) -> UserDataProvider<&mut R> {
        UserDataProvider::from_rng(&mut self.rng)
    }

    pub fn build(&mut self, kind: ScenarioKind) -> Scenario {
        match kind {
            ScenarioKind::CompleteRegistration => {
                Scenario::Registration(self.complete_registration())
            }
            ScenarioKind::MinimalRegistration => Scenario::Registration(self.minimal_registration()),
            ScenarioKind::RegisterThenBook => Scenario::RegisterThenBook(self.register_then_book()),
            ScenarioKind::BookingLifecycle => Scenario::BookingLifecycle(self.booking_lifecycle()),
            ScenarioKind::MaxPriceBooking => Scenario::Booking(self.max_price_booking()),
            ScenarioKind::MinPriceBooking => Scenario::Booking(self.min_price_booking()),
            ScenarioKind::LongStayBooking => Scenario::LongStay(self.long_stay_booking()),
            ScenarioKind::InvalidLogin => Scenario::InvalidLogin(self.invalid_login()),
            ScenarioKind::Checkout => Scenario::Checkout(self.checkout()),
        }
    }

    pub fn complete_registration(&mut self) -> RegistrationScenario {
        RegistrationScenario {
            user: self.users().standard_user(),
            expected_behavior: "Account is created with every optional field filled in, the \
                                user is logged in and the account page shows their name"
                .to_string(),
        }
    }

    pub fn minimal_registration(&mut self) -> RegistrationScenario {
        RegistrationScenario {
            user: self.users().minimal_user(),
            expected_behavior: "Account is created from required fields only, with newsletter \
                                and special offers left unchecked"
                .to_string(),
        }
    }

    pub fn register_then_book(&mut self) -> RegisterThenBookScenario {
        let user = self.users().standard_user();
        let booking = self.bookings().create_booking(BookingOverrides {
            firstname: Some(user.firstname.clone()),
            lastname: Some(user.lastname.clone()),
            ..Default::default()
        });
        RegisterThenBookScenario {
            user,
            booking,
            expected_behavior: "Registered user books a stay under their own name and the \
                                booking API returns the booking with a new id"
                .to_string(),
        }
    }

    pub fn booking_lifecycle(&mut self) -> BookingLifecycleScenario {
        let mut bookings = self.bookings();
        let price = bookings.price_between(
            validation::price::MIN,
            validation::price::MAX - constants::UPDATE_PRICE_INCREASE,
        );
        let initial_booking = bookings.create_booking(BookingOverrides {
            totalprice: Some(price),
            ..Default::default()
        });
        let update_data = updated_booking(&initial_booking);
        let (firstname, lastname) = bookings.guest_name();
        let partial_update = BookingPatch {
            firstname: Some(firstname),
            lastname: Some(lastname),
            ..Default::default()
        };

        BookingLifecycleScenario {
            initial_booking,
            update_data,
            partial_update,
            expected_behavior: format!(
                "Booking is created, fully updated (price +{}, additional needs '{}'), \
                 renamed by a partial update, then deleted and no longer retrievable",
                constants::UPDATE_PRICE_INCREASE,
                constants::UPDATED_ADDITIONAL_NEEDS
            ),
        }
    }

    pub fn max_price_booking(&mut self) -> BookingScenario {
        let booking = self.bookings().create_booking(BookingOverrides {
            totalprice: Some(validation::price::MAX),
            ..Default::default()
        });
        BookingScenario {
            booking,
            expected_behavior: format!(
                "Booking at the maximum price of {} is accepted unchanged",
                validation::price::MAX
            ),
        }
    }

    pub fn min_price_booking(&mut self) -> BookingScenario {
        let booking = self.bookings().create_booking(BookingOverrides {
            totalprice: Some(validation::price::MIN),
            ..Default::default()
        });
        BookingScenario {
            booking,
            expected_behavior: format!(
                "Booking at the minimum price of {} is accepted unchanged",
                validation::price::MIN
            ),
        }
    }

    pub fn long_stay_booking(&mut self) -> LongStayScenario {
        let stay_days = archetypes::LONG_STAY_DAYS;
        let booking = self.bookings().create_booking(BookingOverrides {
            stay_days: Some(stay_days),
            ..Default::default()
        });
        LongStayScenario {
            booking,
            stay_days,
            expected_behavior: format!(
                "Booking spanning {} nights keeps its checkin and checkout dates",
                stay_days
            ),
        }
    }

    pub fn invalid_login(&mut self) -> InvalidLoginScenario {
        InvalidLoginScenario {
            credentials: AuthFactory::from_rng(&mut self.rng).invalid_credentials(),
            expected_behavior: "Token request is refused with reason 'Bad credentials'"
                .to_string(),
        }
    }

    pub fn checkout(&mut self) -> CheckoutScenario {
        let user = UserFactory::from_rng(&mut self.rng).create_user(UserOverrides::default());
        let payment = PaymentFactory::from_rng(&mut self.rng)
            .anchored_at(self.today)
            .valid_payment();
        CheckoutScenario {
            user,
            payment,
            expected_behavior: "Order is placed with the test card and the confirmation page \
                                reports success"
                .to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::{validate_booking, validate_payment, validate_user};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn provider() -> ScenarioProvider<StdRng> {
        ScenarioProvider::from_rng(StdRng::seed_from_u64(99))
            .anchored_at(NaiveDate::from_ymd_opt(2025, 5, 20).unwrap())
    }

    #[test]
    fn test_every_kind_round_trips_by_name() {
        for kind in ScenarioKind::ALL {
            assert_eq!(kind.name().parse::<ScenarioKind>().unwrap(), kind);
        }
        assert!(matches!(
            "nope".parse::<ScenarioKind>(),
            Err(Error::UnknownScenario(_))
        ));
    }

    #[test]
    fn test_every_scenario_describes_itself() {
        let mut provider = provider();
        for kind in ScenarioKind::ALL {
            let scenario = provider.build(kind);
            assert!(!scenario.expected_behavior().is_empty(), "{kind}");
            let json = serde_json::to_value(&scenario).unwrap();
            assert!(json.get("expected_behavior").is_some(), "{kind}");
        }
    }

    #[test]
    fn test_lifecycle_stays_within_price_bounds() {
        let mut provider = provider();
        for _ in 0..50 {
            let scenario = provider.booking_lifecycle();
            assert!(validate_booking(&scenario.initial_booking).is_valid());
            assert!(validate_booking(&scenario.update_data).is_valid());
            assert_eq!(
                scenario.update_data.totalprice,
                scenario.initial_booking.totalprice + 50
            );
            let expected = scenario.expected_final_booking();
            assert_eq!(Some(&expected.firstname), scenario.partial_update.firstname.as_ref());
            assert_eq!(expected.totalprice, scenario.update_data.totalprice);
        }
    }

    #[test]
    fn test_register_then_book_shares_name() {
        let scenario = provider().register_then_book();
        assert_eq!(scenario.booking.firstname, scenario.user.firstname);
        assert_eq!(scenario.booking.lastname, scenario.user.lastname);
    }

    #[test]
    fn test_price_edge_scenarios() {
        let mut provider = provider();
        assert_eq!(provider.max_price_booking().booking.totalprice, 5000);
        assert_eq!(provider.min_price_booking().booking.totalprice, 50);
    }

    #[test]
    fn test_long_stay_matches_declared_days() {
        let scenario = provider().long_stay_booking();
        assert_eq!(
            scenario.booking.bookingdates.stay_days(),
            i64::from(scenario.stay_days)
        );
    }

    #[test]
    fn test_checkout_data_is_valid() {
        let scenario = provider().checkout();
        assert!(validate_user(&scenario.user).is_valid());
        assert!(validate_payment(&scenario.payment).is_valid());
    }
}
