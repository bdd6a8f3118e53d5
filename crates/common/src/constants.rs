//! Test data constants
//!
//! Single source of truth for the pools factories draw from and the bounds
//! validators enforce. Factories and validators only read from here, so a
//! changed bound applies to both.

use once_cell::sync::Lazy;
use regex::Regex;

// ========== NAMES ==========

pub const FIRST_NAMES: &[&str] = &[
    "John", "Jane", "Michael", "Sarah", "David", "Emma", "James", "Olivia", "Robert", "Sophia",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith",
    "Johnson",
    "Williams",
    "Brown",
    "Jones",
    "Garcia",
    "Miller",
    "Davis",
    "Rodriguez",
    "Martinez",
];

pub const TITLES: &[&str] = &["Mr", "Mrs"];

// ========== LOCATION DATA ==========

pub const COUNTRIES: &[&str] = &[
    "India",
    "United States",
    "Canada",
    "Australia",
    "Israel",
    "New Zealand",
    "Singapore",
];

pub const CITIES: &[&str] = &[
    "New York",
    "Los Angeles",
    "Chicago",
    "Houston",
    "Phoenix",
    "Philadelphia",
    "San Antonio",
    "San Diego",
];

pub const STATE_COUNT: usize = 50;

/// `State1` through `State50`
pub static STATES: Lazy<Vec<String>> =
    Lazy::new(|| (1..=STATE_COUNT).map(|i| format!("State{}", i)).collect());

pub const STREET_NAMES: &[&str] = &[
    "Main Street",
    "Oak Avenue",
    "Maple Drive",
    "Cedar Lane",
    "Park Road",
    "Elm Street",
    "Lakeview Boulevard",
    "Hillside Court",
];

pub const ADDRESS_LINE2_PREFIXES: &[&str] = &["Apt", "Suite", "Unit", "Floor"];

/// Inclusive range for house and apartment numbers
pub const HOUSE_NUMBER_RANGE: (u32, u32) = (1, 9999);

// ========== BOOKING DATA ==========

pub const ADDITIONAL_NEEDS: &[&str] = &[
    "Breakfast",
    "Late checkout",
    "Extra pillows",
    "Rollaway bed",
    "High chair",
    "Crib",
    "Pet friendly",
    "Smoking room",
    "Non-smoking room",
    "Quiet room",
];

/// Additional needs written by an update in the booking lifecycle
pub const UPDATED_ADDITIONAL_NEEDS: &str = "Breakfast and Lunch";

/// Price delta applied by an update in the booking lifecycle
pub const UPDATE_PRICE_INCREASE: i64 = 50;

// ========== COMPANY DATA ==========

pub const COMPANIES: &[&str] = &[
    "Tech Corp",
    "Digital Solutions",
    "Cloud Systems",
    "Data Labs",
    "Innovation Inc",
    "Future Tech",
    "Smart Systems",
    "Tech Innovations",
];

// ========== EMAIL DOMAINS ==========

pub const EMAIL_DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "outlook.com", "test.com"];

// ========== MONTHS ==========

pub const MONTHS: &[&str] = &[
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

// ========== CHARACTER SETS ==========

pub mod characters {
    pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
    pub const NUMBERS: &str = "0123456789";
    pub const SPECIAL: &str = "!@#$%^&*";
}

// ========== VALIDATION RULES ==========

pub mod validation {
    pub mod password {
        pub const MIN_LENGTH: usize = 8;
        /// Length of passwords produced by the user factory
        pub const GENERATED_LENGTH: usize = 12;
        pub const REQUIRES_UPPERCASE: bool = true;
        pub const REQUIRES_LOWERCASE: bool = true;
        pub const REQUIRES_NUMBERS: bool = true;
        pub const REQUIRES_SPECIAL: bool = true;
    }

    pub mod email {
        pub const MIN_LENGTH: usize = 5;
        pub const MAX_LENGTH: usize = 254;
        pub const PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";
    }

    pub mod phone {
        pub const MIN_LENGTH: usize = 10;
        pub const MAX_LENGTH: usize = 15;
    }

    pub mod price {
        pub const MIN: i64 = 50;
        pub const MAX: i64 = 5000;
    }

    pub mod date {
        pub const MIN_FUTURE_DAYS: i64 = 1;
        pub const MAX_FUTURE_DAYS: i64 = 365;
        pub const CHECKOUT_DAYS_AFTER_CHECKIN: i64 = 30;
    }

    pub mod name {
        pub const MIN_LENGTH: usize = 1;
        pub const MAX_LENGTH: usize = 100;
    }

    pub mod zipcode {
        pub const MIN: u32 = 10000;
        pub const MAX: u32 = 99999;
    }

    pub mod card {
        pub const MIN_DIGITS: usize = 13;
        pub const MAX_DIGITS: usize = 19;
        pub const CVC_MIN_DIGITS: usize = 3;
        pub const CVC_MAX_DIGITS: usize = 4;
        /// Years ahead of the current year a generated card expires
        pub const EXPIRY_YEARS_AHEAD: (i32, i32) = (1, 5);
    }
}

// ========== DATE RANGES ==========

pub mod date_ranges {
    pub const BIRTH_YEAR_MIN: i32 = 1950;
    pub const BIRTH_YEAR_MAX: i32 = 2010;
    /// Days 29-31 are skipped so every month accepts the generated day
    pub const BIRTH_DAY_MAX: u32 = 28;
}

// ========== PAYMENT ==========

/// Card numbers accepted by the demo payment form
pub const TEST_CARD_NUMBERS: &[&str] = &["4111111111111111", "4242424242424242"];

// ========== ARCHETYPES ==========

pub mod archetypes {
    pub const HIGH_VALUE_PRICE: i64 = 4500;
    pub const HIGH_VALUE_DEPOSIT: bool = true;
    pub const LOW_VALUE_PRICE: i64 = 100;
    pub const LOW_VALUE_DEPOSIT: bool = false;
    pub const LONG_STAY_DAYS: u32 = 14;
}

/// Compiled form of [`validation::email::PATTERN`]
pub static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(validation::email::PATTERN).unwrap_or_else(|e| panic!("invalid email pattern: {e}"))
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_states_are_numbered() {
        assert_eq!(STATES.len(), STATE_COUNT);
        assert_eq!(STATES[0], "State1");
        assert_eq!(STATES[49], "State50");
    }

    #[test]
    fn test_email_pattern() {
        assert!(EMAIL_REGEX.is_match("test@example.com"));
        assert!(!EMAIL_REGEX.is_match("not-an-email"));
        assert!(!EMAIL_REGEX.is_match("a b@example.com"));
    }

    #[test]
    fn test_archetypes_inside_price_bounds() {
        for price in [archetypes::HIGH_VALUE_PRICE, archetypes::LOW_VALUE_PRICE] {
            assert!((validation::price::MIN..=validation::price::MAX).contains(&price));
        }
    }
}
