//! HTTP client for a remote booking directory.
//!
//! Speaks the JSON API served by [`crate::routes`]. Transport failures and
//! 5xx answers surface as [`DirectoryError::Unavailable`], a `409` as
//! [`DirectoryError::Conflict`], a `400` as [`DirectoryError::InvalidRequest`].

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use slotbook_common::{
    calendar::DATE_FORMAT, create_client, BookingDirectory, BookingRecord, BookingRequest,
    DirectoryError, ListBookingsResponse, HTTP_CLIENT,
};
use slotbook_config::DirectoryConfig;
use tracing::{debug, warn};

/// Error body produced by the directory server.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Client for the directory's `/api/bookings` endpoints.
#[derive(Debug, Clone)]
pub struct HttpBookingDirectory {
    /// HTTP client used for every call
    client: Client,

    /// Server base URL without a trailing slash, e.g. `http://127.0.0.1:8080`
    base_url: String,
}

impl HttpBookingDirectory {
    /// Creates a client on top of the shared [`HTTP_CLIENT`].
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(HTTP_CLIENT.clone(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    /// Creates a client honouring the configured request timeout.
    pub fn from_config(config: &DirectoryConfig) -> Result<Self, DirectoryError> {
        let client = create_client(config.timeout_secs(), true)
            .map_err(|e| DirectoryError::Unavailable(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self::with_client(client, config.base_url.clone()))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn bookings_url(&self) -> String {
        format!("{}/api/bookings", self.base_url)
    }
}

fn transport_error(err: reqwest::Error) -> DirectoryError {
    warn!("Booking directory request failed: {}", err);
    DirectoryError::Unavailable(err.to_string())
}

/// Best-effort extraction of the server's error message.
async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.text().await {
        Ok(text) => serde_json::from_str::<ErrorBody>(&text)
            .map(|body| body.error.message)
            .unwrap_or_else(|_| {
                if text.is_empty() {
                    status.to_string()
                } else {
                    text
                }
            }),
        Err(_) => status.to_string(),
    }
}

async fn failure(response: Response, request: Option<&BookingRequest>) -> DirectoryError {
    let status = response.status();
    let message = error_message(response).await;
    match (status, request) {
        (StatusCode::CONFLICT, Some(request)) => DirectoryError::Conflict {
            date: request.date,
            slot_id: request.slot_id.clone(),
        },
        (StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY, _) => {
            DirectoryError::InvalidRequest(message)
        }
        _ => DirectoryError::Unavailable(format!("HTTP {}: {}", status.as_u16(), message)),
    }
}

#[async_trait]
impl BookingDirectory for HttpBookingDirectory {
    async fn list_bookings(&self, date: NaiveDate) -> Result<Vec<BookingRecord>, DirectoryError> {
        let date_param = date.format(DATE_FORMAT).to_string();
        debug!("GET {} date={}", self.bookings_url(), date_param);

        let response = self
            .client
            .get(self.bookings_url())
            .query(&[("date", date_param.as_str())])
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(failure(response, None).await);
        }

        let body: ListBookingsResponse = response
            .json()
            .await
            .map_err(|e| DirectoryError::InvalidResponse(e.to_string()))?;
        if body.date != date {
            return Err(DirectoryError::InvalidResponse(format!(
                "Asked for bookings on {} but received {}",
                date, body.date
            )));
        }
        Ok(body.bookings)
    }

    async fn create_booking(
        &self,
        request: BookingRequest,
    ) -> Result<BookingRecord, DirectoryError> {
        debug!(
            "POST {} slot={} date={}",
            self.bookings_url(),
            request.slot_id,
            request.date
        );

        let response = self
            .client
            .post(self.bookings_url())
            .json(&request)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            return Err(failure(response, Some(&request)).await);
        }

        response
            .json::<BookingRecord>()
            .await
            .map_err(|e| DirectoryError::InvalidResponse(e.to_string()))
    }
}
