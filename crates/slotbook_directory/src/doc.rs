// File: crates/slotbook_directory/src/doc.rs

#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use slotbook_common::models::{
    BookingRecord, BookingRequest, ListBookingsQuery, ListBookingsResponse, SlotDefinition,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::list_bookings_handler,
        crate::handlers::create_booking_handler
    ),
    components(
        schemas(
            BookingRecord,
            BookingRequest,
            ListBookingsQuery,
            ListBookingsResponse,
            SlotDefinition
        )
    ),
    tags(
        (name = "Bookings", description = "Daily slot booking directory")
    ),
    servers(
        (url = "/api", description = "Booking directory server")
    )
)]
pub struct DirectoryApiDoc;
