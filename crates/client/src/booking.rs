//! Booking API CRUD service

use reqwest::header::{ACCEPT, COOKIE};
use reqwest::RequestBuilder;
use serde::{Deserialize, Serialize};
use tracing::info;

use storefront_qa_common::{Booking, BookingPatch};

use crate::api::ApiClient;
use crate::error::{ClientError, ClientResult};

/// Query filter for listing booking ids
#[derive(Debug, Clone, Default, Serialize)]
pub struct BookingFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub firstname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lastname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkout: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingId {
    pub bookingid: u64,
}

/// Body returned by `POST /booking`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatedBooking {
    pub bookingid: u64,
    pub booking: Booking,
}

#[derive(Clone, Debug)]
pub struct BookingService {
    api: ApiClient,
}

impl BookingService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    fn accept_json(request: RequestBuilder) -> RequestBuilder {
        request.header(ACCEPT, "application/json")
    }

    fn with_token(request: RequestBuilder, token: &str) -> RequestBuilder {
        Self::accept_json(request).header(COOKIE, format!("token={}", token))
    }

    pub async fn booking_ids(&self, filter: &BookingFilter) -> ClientResult<Vec<BookingId>> {
        let request = Self::accept_json(self.api.get("/booking").query(filter));
        self.api.json(request).await
    }

    pub async fn booking(&self, id: u64) -> ClientResult<Booking> {
        let request = Self::accept_json(self.api.get(&format!("/booking/{}", id)));
        self.api.json(request).await
    }

    /// Whether `GET /booking/{id}` finds the booking
    pub async fn booking_exists(&self, id: u64) -> ClientResult<bool> {
        match self.booking(id).await {
            Ok(_) => Ok(true),
            Err(ClientError::Status { status: 404, .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub async fn create_booking(&self, booking: &Booking) -> ClientResult<CreatedBooking> {
        let request = Self::accept_json(self.api.post("/booking").json(booking));
        let created: CreatedBooking = self.api.json(request).await?;
        info!(bookingid = created.bookingid, "created booking");
        Ok(created)
    }

    pub async fn update_booking(&self, id: u64, booking: &Booking, token: &str) -> ClientResult<Booking> {
        let request = Self::with_token(self.api.put(&format!("/booking/{}", id)), token).json(booking);
        self.api.json(request).await
    }

    pub async fn partial_update_booking(
        &self,
        id: u64,
        patch: &BookingPatch,
        token: &str,
    ) -> ClientResult<Booking> {
        let request = Self::with_token(self.api.patch(&format!("/booking/{}", id)), token).json(patch);
        self.api.json(request).await
    }

    pub async fn delete_booking(&self, id: u64, token: &str) -> ClientResult<()> {
        let request = Self::with_token(self.api.delete(&format!("/booking/{}", id)), token);
        self.api.send(request).await?;
        info!(bookingid = id, "deleted booking");
        Ok(())
    }
}
