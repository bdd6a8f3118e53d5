//! Storefront QA Common Library
//!
//! Test data for the storefront and booking API suites: the constants table,
//! factories and providers that draw from it, validators that enforce it, and
//! named scenarios composed from all of them.
//!
//! ```text
//! ScenarioProvider ──> DataProviders ──> Factories ──> constants
//!        │                                                ▲
//!        └──────────── (optional) validator ──────────────┘
//! ```

pub mod config;
pub mod constants;
pub mod error;
pub mod factory;
pub mod provider;
pub mod scenario;
pub mod types;
pub mod validator;

// Re-export commonly used types
pub use config::SuiteConfig;
pub use error::{Error, Result};
pub use factory::{
    admin_credentials, updated_booking, AuthFactory, BookingFactory, BookingOverrides, PaymentFactory,
    UserFactory, UserOverrides,
};
pub use provider::{BookingDataProvider, UserDataProvider};
pub use scenario::{Scenario, ScenarioKind, ScenarioProvider};
pub use types::*;
pub use validator::{
    assert_data_valid, validate_booking, validate_payment, validate_user, Validate,
};

/// Storefront QA version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
