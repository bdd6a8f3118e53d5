//! Data factories
//!
//! Each factory builds one fresh entity per call from the constants pools,
//! merging caller overrides over randomised defaults. Factories never
//! validate their output; see [`crate::validator`] for that.
//!
//! Factories own their random source so tests can pass a seeded RNG and get
//! reproducible data. `&mut R` is itself an `Rng`, which lets several
//! factories share one generator.

mod auth;
mod booking;
mod payment;
mod user;

pub use auth::{admin_credentials, AuthFactory};
pub use booking::{updated_booking, BookingFactory, BookingOverrides};
pub use payment::PaymentFactory;
pub use user::{UserFactory, UserOverrides};

use rand::seq::SliceRandom;
use rand::Rng;

/// Pick one entry of a constants pool
pub(crate) fn pick<R: Rng + ?Sized>(rng: &mut R, pool: &[&'static str]) -> &'static str {
    pool.choose(rng).copied().unwrap_or_default()
}

/// Random string of `len` characters drawn from `charset`
pub(crate) fn random_from_charset<R: Rng + ?Sized>(rng: &mut R, charset: &str, len: usize) -> String {
    let chars: Vec<char> = charset.chars().collect();
    (0..len)
        .filter_map(|_| chars.choose(rng).copied())
        .collect()
}

/// Today's date in local time
pub(crate) fn local_today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}
