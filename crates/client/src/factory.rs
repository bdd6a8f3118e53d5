//! Builds every service from one `SuiteConfig`

use tracing::debug;

use storefront_qa_common::SuiteConfig;

use crate::api::ApiClient;
use crate::auth::AuthService;
use crate::booking::BookingService;
use crate::error::ClientResult;
use crate::product::ProductService;
use crate::user::UserService;

/// All services, sharing one connection pool
#[derive(Clone, Debug)]
pub struct Services {
    pub auth: AuthService,
    pub booking: BookingService,
    pub user: UserService,
    pub product: ProductService,
}

pub struct ServiceFactory;

impl ServiceFactory {
    pub fn from_config(config: &SuiteConfig) -> ClientResult<Services> {
        let http = reqwest::Client::builder()
            .timeout(config.http.timeout())
            .user_agent(concat!("storefront-qa/", env!("CARGO_PKG_VERSION")))
            .build()?;
        debug!(
            api = %config.urls.api,
            booking_api = %config.urls.booking_api,
            timeout_ms = config.http.timeout_ms,
            "building API services"
        );
        Ok(Self::with_client(http, &config.urls.api, &config.urls.booking_api))
    }

    /// Services on an existing client, for callers that tune `reqwest` themselves
    pub fn with_client(http: reqwest::Client, api_url: &str, booking_api_url: &str) -> Services {
        let api = ApiClient::new(http.clone(), api_url);
        let booking_api = ApiClient::new(http, booking_api_url);
        Services {
            auth: AuthService::new(booking_api.clone()),
            booking: BookingService::new(booking_api),
            user: UserService::new(api.clone()),
            product: ProductService::new(api),
        }
    }
}
