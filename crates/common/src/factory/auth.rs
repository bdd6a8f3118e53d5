//! Booking API credential factory

use rand::rngs::ThreadRng;
use rand::Rng;

use super::{pick, random_from_charset};
use crate::config::AuthConfig;
use crate::constants::{self, characters};
use crate::types::AuthCredentials;

/// Builds credentials for negative auth tests
pub struct AuthFactory<R = ThreadRng> {
    rng: R,
}

impl AuthFactory<ThreadRng> {
    pub fn new() -> Self {
        Self::from_rng(rand::thread_rng())
    }
}

impl Default for AuthFactory<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> AuthFactory<R> {
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Random username and password the API has never seen
    pub fn invalid_credentials(&mut self) -> AuthCredentials {
        AuthCredentials {
            username: self.username(),
            password: self.password(),
        }
    }

    pub fn missing_username(&mut self) -> AuthCredentials {
        AuthCredentials {
            username: String::new(),
            password: self.password(),
        }
    }

    pub fn missing_password(&mut self) -> AuthCredentials {
        AuthCredentials {
            username: self.username(),
            password: String::new(),
        }
    }

    fn username(&mut self) -> String {
        format!(
            "{}{}{}",
            pick(&mut self.rng, constants::FIRST_NAMES),
            pick(&mut self.rng, constants::LAST_NAMES),
            random_from_charset(&mut self.rng, characters::NUMBERS, 4)
        )
    }

    fn password(&mut self) -> String {
        let alphabet = [characters::LOWERCASE, characters::NUMBERS].concat();
        random_from_charset(&mut self.rng, &alphabet, 15)
    }
}

/// Credentials the booking API accepts, as configured for this run
pub fn admin_credentials(config: &AuthConfig) -> AuthCredentials {
    AuthCredentials {
        username: config.username.clone(),
        password: config.password.clone(),
    }
}
