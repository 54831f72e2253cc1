// --- File: crates/slotbook_directory/src/routes.rs ---

use crate::handlers::{create_booking_handler, list_bookings_handler, DirectoryState};
use axum::{routing::get, Router};
use std::sync::Arc;

/// Creates a router containing the booking directory routes.
/// Nest it under `/api` next to the common routes.
pub fn routes(state: Arc<DirectoryState>) -> Router {
    Router::new()
        .route(
            "/bookings",
            get(list_bookings_handler).post(create_booking_handler),
        )
        .with_state(state)
}
