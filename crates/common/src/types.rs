//! Core data types for storefront QA
//!
//! Every entity is a plain value object: built fresh per test, serialised
//! into request bodies or form fields by the caller, then dropped.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Stay dates for a booking, serialised as `YYYY-MM-DD`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDates {
    pub checkin: NaiveDate,
    pub checkout: NaiveDate,
}

impl BookingDates {
    /// Nights between checkin and checkout (negative when reversed)
    pub fn stay_days(&self) -> i64 {
        (self.checkout - self.checkin).num_days()
    }
}

/// Booking as accepted and returned by the booking API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub firstname: String,
    pub lastname: String,
    pub totalprice: i64,
    pub depositpaid: bool,
    pub bookingdates: BookingDates,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additionalneeds: Option<String>,
}

/// Partial update body; absent fields are left untouched by the API
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub totalprice: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depositpaid: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bookingdates: Option<BookingDates>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additionalneeds: Option<String>,
}

impl BookingPatch {
    /// Apply the patch to a booking the way the API does
    pub fn apply_to(&self, booking: &Booking) -> Booking {
        let mut patched = booking.clone();
        if let Some(firstname) = &self.firstname {
            patched.firstname = firstname.clone();
        }
        if let Some(lastname) = &self.lastname {
            patched.lastname = lastname.clone();
        }
        if let Some(totalprice) = self.totalprice {
            patched.totalprice = totalprice;
        }
        if let Some(depositpaid) = self.depositpaid {
            patched.depositpaid = depositpaid;
        }
        if let Some(dates) = self.bookingdates {
            patched.bookingdates = dates;
        }
        if let Some(needs) = &self.additionalneeds {
            patched.additionalneeds = Some(needs.clone());
        }
        patched
    }
}

/// Account holder title on the signup form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Title {
    Mr,
    Mrs,
}

impl Default for Title {
    fn default() -> Self {
        Self::Mr
    }
}

impl std::fmt::Display for Title {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Title::Mr => write!(f, "Mr"),
            Title::Mrs => write!(f, "Mrs"),
        }
    }
}

/// Account details for registration, both through the UI form and the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDetails {
    pub name: String,
    pub email: String,
    pub password: String,
    pub title: Title,
    pub birth_date: String,
    pub birth_month: String,
    pub birth_year: String,
    pub firstname: String,
    pub lastname: String,
    pub company: String,
    pub address1: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address2: Option<String>,
    pub country: String,
    pub zipcode: String,
    pub state: String,
    pub city: String,
    pub mobile_number: String,
    #[serde(default)]
    pub newsletter: bool,
    #[serde(default)]
    pub special_offers: bool,
}

/// Card details for the checkout form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDetails {
    pub name_on_card: String,
    pub card_number: String,
    pub cvc: String,
    pub expiry_month: String,
    pub expiry_year: String,
}

/// Credentials for the booking API token endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthCredentials {
    pub username: String,
    pub password: String,
}

/// Kind of entity a validation result belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Booking,
    User,
    Payment,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Booking => write!(f, "Booking"),
            EntityKind::User => write!(f, "User"),
            EntityKind::Payment => write!(f, "Payment"),
        }
    }
}

impl std::str::FromStr for EntityKind {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "booking" => Ok(Self::Booking),
            "user" => Ok(Self::User),
            "payment" => Ok(Self::Payment),
            other => Err(crate::Error::InvalidConfig(format!(
                "unknown entity kind '{}' (expected booking, user or payment)",
                other
            ))),
        }
    }
}

/// Outcome of validating one entity
///
/// Built once by a validator and never mutated afterwards. `is_valid` holds
/// exactly when `errors` is empty; warnings never affect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    #[serde(rename = "isValid")]
    is_valid: bool,
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    pub(crate) fn new(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Convert into a `Result`, carrying every error when invalid
    pub fn into_result(self, kind: EntityKind) -> crate::Result<()> {
        if self.is_valid {
            Ok(())
        } else {
            Err(crate::Error::InvalidData {
                kind,
                errors: self.errors,
            })
        }
    }
}
