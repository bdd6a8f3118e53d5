//! Test data validators
//!
//! Each validator runs a fixed set of independent checks against the rules in
//! [`crate::constants`]. A failed check appends one error naming the field and
//! the rule; advisory findings go to warnings and never affect validity.
//! Validators report, they never fail. Only [`assert_data_valid`] panics.

use tracing::warn;

use crate::constants::{self, characters, date_ranges, validation, EMAIL_REGEX};
use crate::types::{Booking, EntityKind, PaymentDetails, UserDetails, ValidationResult};

/// Entities that can be checked against the data policy
pub trait Validate {
    const KIND: EntityKind;

    fn validate(&self) -> ValidationResult;
}

impl Validate for Booking {
    const KIND: EntityKind = EntityKind::Booking;

    fn validate(&self) -> ValidationResult {
        validate_booking(self)
    }
}

impl Validate for UserDetails {
    const KIND: EntityKind = EntityKind::User;

    fn validate(&self) -> ValidationResult {
        validate_user(self)
    }
}

impl Validate for PaymentDetails {
    const KIND: EntityKind = EntityKind::Payment;

    fn validate(&self) -> ValidationResult {
        validate_payment(self)
    }
}

/// Collects findings for one entity
struct Findings {
    kind: EntityKind,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl Findings {
    fn new(kind: EntityKind) -> Self {
        Self {
            kind,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    fn error(&mut self, field: &str, rule: impl std::fmt::Display) {
        self.errors.push(format!("{} {} {}", self.kind, field, rule));
    }

    fn warning(&mut self, field: &str, note: impl std::fmt::Display) {
        self.warnings.push(format!("{} {} {}", self.kind, field, note));
    }

    fn check_name(&mut self, field: &str, value: &str) {
        let len = value.trim().chars().count();
        if !(validation::name::MIN_LENGTH..=validation::name::MAX_LENGTH).contains(&len) {
            self.error(
                field,
                format_args!(
                    "must be between {} and {} characters",
                    validation::name::MIN_LENGTH,
                    validation::name::MAX_LENGTH
                ),
            );
        }
    }

    fn check_not_empty(&mut self, field: &str, value: &str) {
        if value.trim().is_empty() {
            self.error(field, "must not be empty");
        }
    }

    fn finish(self) -> ValidationResult {
        ValidationResult::new(self.errors, self.warnings)
    }
}

/// Check a booking against the price, name and date rules
pub fn validate_booking(booking: &Booking) -> ValidationResult {
    let mut findings = Findings::new(EntityKind::Booking);

    findings.check_name("firstname", &booking.firstname);
    findings.check_name("lastname", &booking.lastname);

    let price = booking.totalprice;
    if price < validation::price::MIN {
        findings.error(
            "totalprice",
            format_args!("must be at least {}", validation::price::MIN),
        );
    } else if price > validation::price::MAX {
        findings.error(
            "totalprice",
            format_args!("must not exceed {}", validation::price::MAX),
        );
    } else if price == validation::price::MIN {
        findings.warning("totalprice", format_args!("{} is at the minimum allowed price", price));
    } else if price == validation::price::MAX {
        findings.warning("totalprice", format_args!("{} is at the maximum allowed price", price));
    }

    let stay = booking.bookingdates.stay_days();
    if stay <= 0 {
        findings.error("checkout", "must be after checkin");
    } else if stay > validation::date::CHECKOUT_DAYS_AFTER_CHECKIN {
        findings.warning(
            "checkout",
            format_args!(
                "is {} days after checkin, longer than the usual {} day stay",
                stay,
                validation::date::CHECKOUT_DAYS_AFTER_CHECKIN
            ),
        );
    }

    if let Some(needs) = &booking.additionalneeds {
        if needs.trim().is_empty() {
            findings.warning("additionalneeds", "is empty; omit the field instead");
        }
    }

    findings.finish()
}

/// Check a user against the email, password and address rules
pub fn validate_user(user: &UserDetails) -> ValidationResult {
    let mut findings = Findings::new(EntityKind::User);

    findings.check_name("name", &user.name);
    findings.check_name("firstname", &user.firstname);
    findings.check_name("lastname", &user.lastname);

    let email_len = user.email.chars().count();
    if !(validation::email::MIN_LENGTH..=validation::email::MAX_LENGTH).contains(&email_len) {
        findings.error(
            "email",
            format_args!(
                "must be between {} and {} characters",
                validation::email::MIN_LENGTH,
                validation::email::MAX_LENGTH
            ),
        );
    }
    if EMAIL_REGEX.is_match(&user.email) {
        let domain = user.email.rsplit('@').next().unwrap_or_default();
        if !constants::EMAIL_DOMAINS.contains(&domain) {
            findings.warning(
                "email",
                format_args!("domain {} is not one of the standard test domains", domain),
            );
        }
    } else {
        findings.error("email", "must match the pattern local@domain.tld");
    }

    check_password(&mut findings, &user.password);

    let mobile = &user.mobile_number;
    let mobile_len = mobile.chars().count();
    if !mobile.chars().all(|c| c.is_ascii_digit())
        || !(validation::phone::MIN_LENGTH..=validation::phone::MAX_LENGTH).contains(&mobile_len)
    {
        findings.error(
            "mobile_number",
            format_args!(
                "must be {} to {} digits",
                validation::phone::MIN_LENGTH,
                validation::phone::MAX_LENGTH
            ),
        );
    }

    let zip_ok = user
        .zipcode
        .parse::<u32>()
        .map(|zip| (validation::zipcode::MIN..=validation::zipcode::MAX).contains(&zip))
        .unwrap_or(false);
    if !zip_ok {
        findings.error(
            "zipcode",
            format_args!(
                "must be a number between {} and {}",
                validation::zipcode::MIN,
                validation::zipcode::MAX
            ),
        );
    }

    if user.country.trim().is_empty() {
        findings.error("country", "must not be empty");
    } else if !constants::COUNTRIES.contains(&user.country.as_str()) {
        findings.warning(
            "country",
            format_args!("{} is not in the signup form's country list", user.country),
        );
    }

    findings.check_not_empty("address1", &user.address1);
    findings.check_not_empty("state", &user.state);
    findings.check_not_empty("city", &user.city);

    let day_ok = user
        .birth_date
        .parse::<u32>()
        .map(|day| (1..=31).contains(&day))
        .unwrap_or(false);
    if !day_ok {
        findings.error("birth_date", "must be a day of the month between 1 and 31");
    }
    if !constants::MONTHS.contains(&user.birth_month.as_str()) {
        findings.error("birth_month", "must be a full month name");
    }
    match user.birth_year.parse::<i32>() {
        Ok(year) if (date_ranges::BIRTH_YEAR_MIN..=date_ranges::BIRTH_YEAR_MAX).contains(&year) => {}
        Ok(year) => findings.warning(
            "birth_year",
            format_args!(
                "{} is outside the usual {}-{} range",
                year,
                date_ranges::BIRTH_YEAR_MIN,
                date_ranges::BIRTH_YEAR_MAX
            ),
        ),
        Err(_) => findings.error("birth_year", "must be a four digit year"),
    }

    findings.finish()
}

fn check_password(findings: &mut Findings, password: &str) {
    if password.chars().count() < validation::password::MIN_LENGTH {
        findings.error(
            "password",
            format_args!("must be at least {} characters", validation::password::MIN_LENGTH),
        );
    }
    if validation::password::REQUIRES_UPPERCASE && !password.chars().any(|c| c.is_ascii_uppercase()) {
        findings.error("password", "must contain an uppercase letter");
    }
    if validation::password::REQUIRES_LOWERCASE && !password.chars().any(|c| c.is_ascii_lowercase()) {
        findings.error("password", "must contain a lowercase letter");
    }
    if validation::password::REQUIRES_NUMBERS && !password.chars().any(|c| c.is_ascii_digit()) {
        findings.error("password", "must contain a number");
    }
    if validation::password::REQUIRES_SPECIAL
        && !password.chars().any(|c| characters::SPECIAL.contains(c))
    {
        findings.error(
            "password",
            format_args!("must contain a special character ({})", characters::SPECIAL),
        );
    }
}

/// Check card details against the card number, CVC and expiry rules
pub fn validate_payment(payment: &PaymentDetails) -> ValidationResult {
    let mut findings = Findings::new(EntityKind::Payment);

    findings.check_not_empty("name_on_card", &payment.name_on_card);

    let number = payment.card_number.as_str();
    let all_digits = !number.is_empty() && number.chars().all(|c| c.is_ascii_digit());
    if !all_digits
        || !(validation::card::MIN_DIGITS..=validation::card::MAX_DIGITS).contains(&number.len())
    {
        findings.error(
            "card_number",
            format_args!(
                "must be {} to {} digits",
                validation::card::MIN_DIGITS,
                validation::card::MAX_DIGITS
            ),
        );
    }
    if all_digits {
        if !luhn_valid(number) {
            findings.error("card_number", "fails the Luhn checksum");
        } else if !constants::TEST_CARD_NUMBERS.contains(&number) {
            findings.warning("card_number", "is not a known test card");
        }
    }

    let cvc = payment.cvc.as_str();
    if !cvc.chars().all(|c| c.is_ascii_digit())
        || !(validation::card::CVC_MIN_DIGITS..=validation::card::CVC_MAX_DIGITS).contains(&cvc.len())
    {
        findings.error(
            "cvc",
            format_args!(
                "must be {} or {} digits",
                validation::card::CVC_MIN_DIGITS,
                validation::card::CVC_MAX_DIGITS
            ),
        );
    }

    let month_ok = payment
        .expiry_month
        .parse::<u32>()
        .map(|m| (1..=12).contains(&m))
        .unwrap_or(false);
    if !month_ok {
        findings.error("expiry_month", "must be between 01 and 12");
    }

    let year = payment.expiry_year.as_str();
    if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
        findings.error("expiry_year", "must be a four digit year");
    }

    findings.finish()
}

/// Luhn checksum over an all-digit string
fn luhn_valid(number: &str) -> bool {
    let sum: u32 = number
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(i, d)| {
            if i % 2 == 1 {
                let doubled = d * 2;
                if doubled > 9 {
                    doubled - 9
                } else {
                    doubled
                }
            } else {
                d
            }
        })
        .sum();
    sum % 10 == 0
}

/// Panic with every collected error when `entity` is invalid
///
/// Warnings are logged and otherwise ignored.
#[track_caller]
pub fn assert_data_valid<T: Validate>(entity: &T) {
    let kind = T::KIND;
    let result = entity.validate();
    for warning in result.warnings() {
        warn!(%kind, "{}", warning);
    }
    if let Err(e) = result.into_result(kind) {
        panic!("{}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BookingDates, Title};
    use chrono::NaiveDate;

    fn booking(price: i64) -> Booking {
        Booking {
            firstname: "Jim".to_string(),
            lastname: "Brown".to_string(),
            totalprice: price,
            depositpaid: true,
            bookingdates: BookingDates {
                checkin: NaiveDate::from_ymd_opt(2025, 12, 10).unwrap(),
                checkout: NaiveDate::from_ymd_opt(2025, 12, 15).unwrap(),
            },
            additionalneeds: Some("Breakfast".to_string()),
        }
    }

    fn user() -> UserDetails {
        UserDetails {
            name: "Jane Smith".to_string(),
            email: "jane.smith@test.com".to_string(),
            password: "TestPass@123456".to_string(),
            title: Title::Mrs,
            birth_date: "12".to_string(),
            birth_month: "March".to_string(),
            birth_year: "1990".to_string(),
            firstname: "Jane".to_string(),
            lastname: "Smith".to_string(),
            company: "Data Labs".to_string(),
            address1: "12 Main Street".to_string(),
            address2: None,
            country: "India".to_string(),
            zipcode: "56001".to_string(),
            state: "State4".to_string(),
            city: "Chicago".to_string(),
            mobile_number: "9876543210".to_string(),
            newsletter: true,
            special_offers: false,
        }
    }

    fn payment() -> PaymentDetails {
        PaymentDetails {
            name_on_card: "Jane Smith".to_string(),
            card_number: "4242424242424242".to_string(),
            cvc: "123".to_string(),
            expiry_month: "12".to_string(),
            expiry_year: "2030".to_string(),
        }
    }

    #[test]
    fn test_valid_booking() {
        let result = validate_booking(&booking(100));
        assert!(result.is_valid());
        assert!(result.errors().is_empty());
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn test_price_above_max() {
        let result = validate_booking(&booking(100_000));
        assert!(!result.is_valid());
        assert_eq!(result.errors(), ["Booking totalprice must not exceed 5000"]);
    }

    #[test]
    fn test_price_below_min() {
        let result = validate_booking(&booking(10));
        assert_eq!(result.errors(), ["Booking totalprice must be at least 50"]);
    }

    #[test]
    fn test_edge_price_warns_only() {
        for price in [50, 5000] {
            let result = validate_booking(&booking(price));
            assert!(result.is_valid());
            assert_eq!(result.warnings().len(), 1);
            assert!(result.warnings()[0].contains("totalprice"));
        }
    }

    #[test]
    fn test_checkout_must_follow_checkin() {
        let mut b = booking(200);
        b.bookingdates.checkout = b.bookingdates.checkin;
        let result = validate_booking(&b);
        assert_eq!(result.errors(), ["Booking checkout must be after checkin"]);
    }

    #[test]
    fn test_long_stay_warns() {
        let mut b = booking(200);
        b.bookingdates.checkout = b.bookingdates.checkin + chrono::Duration::days(45);
        let result = validate_booking(&b);
        assert!(result.is_valid());
        assert!(result.warnings()[0].contains("45 days"));
    }

    #[test]
    fn test_errors_accumulate() {
        let mut b = booking(0);
        b.firstname = String::new();
        b.lastname = "x".repeat(101);
        let result = validate_booking(&b);
        assert_eq!(result.errors().len(), 3);
        assert!(result.errors()[0].contains("firstname"));
        assert!(result.errors()[1].contains("lastname"));
        assert!(result.errors()[2].contains("totalprice"));
    }

    #[test]
    fn test_valid_user() {
        let result = validate_user(&user());
        assert!(result.is_valid(), "{:?}", result.errors());
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn test_short_password() {
        let mut u = user();
        u.password = "abc".to_string();
        let result = validate_user(&u);
        assert!(!result.is_valid());
        assert!(result
            .errors()
            .contains(&"User password must be at least 8 characters".to_string()));
        assert_eq!(result.errors().len(), 4);
    }

    #[test]
    fn test_bad_email() {
        let mut u = user();
        u.email = "not-an-email".to_string();
        let result = validate_user(&u);
        assert_eq!(result.errors(), ["User email must match the pattern local@domain.tld"]);
    }

    #[test]
    fn test_unknown_domain_and_country_warn() {
        let mut u = user();
        u.email = "vip@premium.com".to_string();
        u.country = "Atlantis".to_string();
        let result = validate_user(&u);
        assert!(result.is_valid());
        assert_eq!(result.warnings().len(), 2);
    }

    #[test]
    fn test_bad_mobile_and_zip() {
        let mut u = user();
        u.mobile_number = "phone".to_string();
        u.zipcode = "123".to_string();
        let result = validate_user(&u);
        assert_eq!(result.errors().len(), 2);
    }

    #[test]
    fn test_birth_fields() {
        let mut u = user();
        u.birth_month = "Smarch".to_string();
        u.birth_year = "1900".to_string();
        let result = validate_user(&u);
        assert_eq!(result.errors(), ["User birth_month must be a full month name"]);
        assert!(result.warnings()[0].contains("1900"));
    }

    #[test]
    fn test_valid_payment() {
        let result = validate_payment(&payment());
        assert!(result.is_valid());
        assert!(result.warnings().is_empty());
    }

    #[test]
    fn test_invalid_payment() {
        let p = PaymentDetails {
            name_on_card: String::new(),
            card_number: "1234".to_string(),
            cvc: "1".to_string(),
            expiry_month: "13".to_string(),
            expiry_year: "20".to_string(),
        };
        let result = validate_payment(&p);
        assert!(!result.is_valid());
        let joined = result.errors().join("; ");
        for field in ["name_on_card", "card_number", "cvc", "expiry_month", "expiry_year"] {
            assert!(joined.contains(field), "missing {field} in {joined}");
        }
    }

    #[test]
    fn test_luhn() {
        assert!(luhn_valid("4111111111111111"));
        assert!(luhn_valid("4242424242424242"));
        assert!(!luhn_valid("4242424242424241"));
    }

    #[test]
    fn test_unknown_luhn_card_warns() {
        let mut p = payment();
        p.card_number = "5555555555554444".to_string();
        let result = validate_payment(&p);
        assert!(result.is_valid());
        assert_eq!(result.warnings(), ["Payment card_number is not a known test card"]);
    }

    #[test]
    fn test_assert_data_valid_passes() {
        assert_data_valid(&booking(100));
        assert_data_valid(&user());
        assert_data_valid(&payment());
    }

    #[test]
    #[should_panic(expected = "Booking validation failed: Booking totalprice must not exceed 5000")]
    fn test_assert_data_valid_panics() {
        assert_data_valid(&booking(100_000));
    }
}
