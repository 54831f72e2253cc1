// --- File: crates/slotbook_common/src/lib.rs ---

// Declare modules within this crate
pub mod calendar; // Date parsing and "today" in the configured zone
pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Shared wire models and the standard slot set
pub mod routes; // Route definitions
pub mod services; // Booking directory contract

// Re-export the routes function to be used by the directory server
pub use routes::routes;

// Re-export error types and utilities for easier access
pub use error::{
    config_error, external_service_error, validation_error,
    HttpStatusCode, SlotbookError,
};

// Re-export HTTP utilities for easier access
pub use http::{
    client::{create_client, HTTP_CLIENT},
    IntoHttpResponse,
};

// Re-export logging utilities for easier access
pub use logging::{init_from_config, log_result};

pub use models::{
    BookingRecord, BookingRequest, ListBookingsResponse, SlotDefinition, SlotId, STANDARD_SLOTS,
};
pub use services::{BookingDirectory, DirectoryError};
