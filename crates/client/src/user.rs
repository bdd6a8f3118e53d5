//! Storefront account service
//!
//! The storefront API takes form-encoded bodies and always answers with a
//! JSON envelope carrying its own `responseCode`, usually under HTTP 200.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use storefront_qa_common::UserDetails;

use crate::api::ApiClient;
use crate::error::ClientResult;

/// Envelope returned by the account endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiMessage {
    #[serde(rename = "responseCode")]
    pub response_code: u16,
    #[serde(default)]
    pub message: String,
}

impl ApiMessage {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.response_code)
    }
}

/// Account as returned by `getUserDetailByEmail`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountRecord {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub title: String,
    pub birth_day: String,
    pub birth_month: String,
    pub birth_year: String,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub address1: String,
    pub address2: String,
    pub country: String,
    pub state: String,
    pub city: String,
    pub zipcode: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLookup {
    #[serde(rename = "responseCode")]
    pub response_code: u16,
    #[serde(default)]
    pub user: Option<AccountRecord>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Form fields for `createAccount` and `updateAccount`
pub fn account_form(user: &UserDetails) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("name", user.name.clone()),
        ("email", user.email.clone()),
        ("password", user.password.clone()),
        ("title", user.title.to_string()),
        ("birth_date", user.birth_date.clone()),
        ("birth_month", user.birth_month.clone()),
        ("birth_year", user.birth_year.clone()),
        ("firstname", user.firstname.clone()),
        ("lastname", user.lastname.clone()),
        ("company", user.company.clone()),
        ("address1", user.address1.clone()),
    ];
    if let Some(address2) = &user.address2 {
        fields.push(("address2", address2.clone()));
    }
    fields.extend([
        ("country", user.country.clone()),
        ("zipcode", user.zipcode.clone()),
        ("state", user.state.clone()),
        ("city", user.city.clone()),
        ("mobile_number", user.mobile_number.clone()),
    ]);
    fields
}

fn credentials_form<'a>(email: &'a str, password: &'a str) -> [(&'static str, &'a str); 2] {
    [("email", email), ("password", password)]
}

#[derive(Clone, Debug)]
pub struct UserService {
    api: ApiClient,
}

impl UserService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn create_account(&self, user: &UserDetails) -> ClientResult<ApiMessage> {
        info!(email = %user.email, "creating user account");
        let request = self.api.post("/createAccount").form(&account_form(user));
        self.api.json(request).await
    }

    pub async fn update_account(&self, user: &UserDetails) -> ClientResult<ApiMessage> {
        info!(email = %user.email, "updating user account");
        let request = self.api.put("/updateAccount").form(&account_form(user));
        self.api.json(request).await
    }

    pub async fn verify_login(&self, email: &str, password: &str) -> ClientResult<ApiMessage> {
        info!(%email, "verifying login");
        let request = self
            .api
            .post("/verifyLogin")
            .form(&credentials_form(email, password));
        self.api.json(request).await
    }

    pub async fn user_by_email(&self, email: &str) -> ClientResult<UserLookup> {
        info!(%email, "fetching user details");
        let request = self.api.get("/getUserDetailByEmail").query(&[("email", email)]);
        self.api.json(request).await
    }

    pub async fn delete_account(&self, email: &str, password: &str) -> ClientResult<ApiMessage> {
        info!(%email, "deleting user account");
        let request = self
            .api
            .delete("/deleteAccount")
            .form(&credentials_form(email, password));
        self.api.json(request).await
    }

    /// Delete an account after a test, logging instead of failing
    pub async fn cleanup_user(&self, email: &str, password: &str) {
        match self.delete_account(email, password).await {
            Ok(message) if message.is_success() => debug!(%email, "cleaned up user"),
            Ok(message) => warn!(%email, code = message.response_code, "cleanup refused: {}", message.message),
            Err(e) => warn!(%email, "cleanup failed: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use storefront_qa_common::{UserFactory, UserOverrides};

    #[test]
    fn test_account_form_field_order_and_optional_address2() {
        let mut factory = UserFactory::from_rng(StdRng::seed_from_u64(1));
        let with = factory.create_user(UserOverrides::default());
        let without = factory.create_user(UserOverrides {
            address2: Some(None),
            ..Default::default()
        });

        let keys: Vec<&str> = account_form(&with).iter().map(|(k, _)| *k).collect();
        assert_eq!(keys.first(), Some(&"name"));
        assert_eq!(keys.last(), Some(&"mobile_number"));
        assert!(keys.contains(&"address2"));
        assert_eq!(keys.len(), 17);

        let keys: Vec<&str> = account_form(&without).iter().map(|(k, _)| *k).collect();
        assert!(!keys.contains(&"address2"));
    }

    #[test]
    fn test_api_message_parses_envelope() {
        let message: ApiMessage =
            serde_json::from_str(r#"{"responseCode": 201, "message": "User created!"}"#).unwrap();
        assert!(message.is_success());
        assert_eq!(message.message, "User created!");
    }

    #[test]
    fn test_lookup_not_found() {
        let lookup: UserLookup = serde_json::from_str(
            r#"{"responseCode": 404, "message": "Account not found with this email, try another email!"}"#,
        )
        .unwrap();
        assert_eq!(lookup.response_code, 404);
        assert!(lookup.user.is_none());
    }
}
