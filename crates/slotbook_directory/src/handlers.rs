// File: crates/slotbook_directory/src/handlers.rs
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use slotbook_common::{
    calendar::{is_past, parse_date},
    models::ListBookingsQuery,
    validation_error, BookingDirectory, BookingRecord, BookingRequest, ListBookingsResponse,
    SlotDefinition, SlotbookError,
};
use slotbook_config::BookingConfig;
use std::sync::Arc;
use tracing::info;

// Shared state of the directory routes
#[derive(Clone)]
pub struct DirectoryState {
    pub directory: Arc<dyn BookingDirectory>,
    pub booking: BookingConfig,
}

impl DirectoryState {
    pub fn new(directory: Arc<dyn BookingDirectory>, booking: BookingConfig) -> Self {
        Self { directory, booking }
    }

    /// Rejects requests the store should never see.
    fn validate(&self, request: &BookingRequest) -> Result<(), SlotbookError> {
        let definition = SlotDefinition::find_standard(&request.slot_id)
            .ok_or_else(|| validation_error(format!("Unknown slot '{}'", request.slot_id)))?;
        if definition.label != request.time_label {
            return Err(validation_error(format!(
                "Time label '{}' does not match slot {} ({})",
                request.time_label, request.slot_id, definition.label
            )));
        }
        if !self.booking.allow_past_dates && is_past(request.date, &self.booking.time_zone) {
            return Err(validation_error(format!(
                "Cannot book {} because it lies in the past",
                request.date
            )));
        }
        Ok(())
    }
}

/// Handler listing the bookings of one date.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    get,
    path = "/bookings", // Path relative to /api
    params(ListBookingsQuery),
    responses(
        (status = 200, description = "Bookings persisted for the date", body = ListBookingsResponse),
        (status = 400, description = "Invalid date format"),
        (status = 502, description = "Booking store unavailable")
    ),
    tag = "Bookings"
))]
pub async fn list_bookings_handler(
    State(state): State<Arc<DirectoryState>>,
    Query(query): Query<ListBookingsQuery>,
) -> Result<Json<ListBookingsResponse>, SlotbookError> {
    let date = parse_date(&query.date)?;
    let bookings = state.directory.list_bookings(date).await?;
    Ok(Json(ListBookingsResponse { date, bookings }))
}

/// Handler persisting one booking.
#[axum::debug_handler]
#[cfg_attr(feature = "openapi", utoipa::path(
    post,
    path = "/bookings",
    request_body = BookingRequest,
    responses(
        (status = 201, description = "Booking stored", body = BookingRecord),
        (status = 400, description = "Unknown slot, label mismatch or past date"),
        (status = 409, description = "Slot already booked for this date"),
        (status = 502, description = "Booking store unavailable")
    ),
    tag = "Bookings"
))]
pub async fn create_booking_handler(
    State(state): State<Arc<DirectoryState>>,
    Json(payload): Json<BookingRequest>,
) -> Result<(StatusCode, Json<BookingRecord>), SlotbookError> {
    state.validate(&payload)?;
    let record = state.directory.create_booking(payload).await?;
    info!(
        "Booking {} created for slot {} on {}",
        record.id, record.slot_id, record.date
    );
    Ok((StatusCode::CREATED, Json(record)))
}
