//! Storefront QA API client
//!
//! Thin services over the two systems the suites exercise:
//!
//! ```text
//! ServiceFactory::from_config(&SuiteConfig)
//!        │  one reqwest::Client, configured timeout
//!        ├── AuthService     ─┐
//!        ├── BookingService  ─┴─ booking API (JSON, token cookie)
//!        ├── UserService     ─┐
//!        └── ProductService  ─┴─ storefront API (form bodies, responseCode envelope)
//! ```
//!
//! Services only move data. Test data comes from `storefront_qa_common`.

pub mod api;
pub mod auth;
pub mod booking;
pub mod error;
pub mod factory;
pub mod lifecycle;
pub mod product;
pub mod user;

pub use api::ApiClient;
pub use auth::{AuthOutcome, AuthService};
pub use booking::{BookingFilter, BookingId, BookingService, CreatedBooking};
pub use error::{ClientError, ClientResult};
pub use factory::{ServiceFactory, Services};
pub use lifecycle::{run_booking_lifecycle, LifecycleReport, LifecycleStep};
pub use product::{Brand, BrandList, Product, ProductList, ProductService};
pub use user::{account_form, AccountRecord, ApiMessage, UserLookup, UserService};
