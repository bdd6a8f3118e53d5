//! CLI Commands

pub mod booking;
pub mod config;
pub mod constants;
pub mod lifecycle;
pub mod payment;
pub mod scenario;
pub mod user;
pub mod validate;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Generator for data commands; a seed makes the output reproducible
pub fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
