//! Booking API token service

use serde::Deserialize;
use tracing::info;

use storefront_qa_common::AuthCredentials;

use crate::api::ApiClient;
use crate::error::{ClientError, ClientResult};

/// Result of a token request
///
/// The booking API answers bad credentials with `200 OK` and a `reason`, so
/// a rejection is a normal outcome rather than an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Token(String),
    Rejected(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AuthResponse {
    Token { token: String },
    Rejected { reason: String },
}

#[derive(Clone, Debug)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn create_token(&self, credentials: &AuthCredentials) -> ClientResult<AuthOutcome> {
        let response: AuthResponse = self.api.json(self.api.post("/auth").json(credentials)).await?;
        Ok(match response {
            AuthResponse::Token { token } => AuthOutcome::Token(token),
            AuthResponse::Rejected { reason } => {
                info!(username = %credentials.username, "token request rejected: {}", reason);
                AuthOutcome::Rejected(reason)
            }
        })
    }

    /// Token for credentials that are expected to be accepted
    pub async fn token(&self, credentials: &AuthCredentials) -> ClientResult<String> {
        match self.create_token(credentials).await? {
            AuthOutcome::Token(token) => Ok(token),
            AuthOutcome::Rejected(reason) => Err(ClientError::AuthRejected(reason)),
        }
    }
}
