// --- File: crates/slotbook_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

use crate::services::DirectoryError;

/// The base error type for Slotbook services.
///
/// Each crate converts its own errors into this type at the HTTP boundary.
#[derive(Error, Debug)]
pub enum SlotbookError {
    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during database operation
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to a conflict (e.g., slot already booked)
    #[error("Conflict: {0}")]
    ConflictError(String),

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),

    /// Error occurred due to an internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for SlotbookError {
    fn status_code(&self) -> u16 {
        match self {
            SlotbookError::ConfigError(_) => 500,
            SlotbookError::ValidationError(_) => 400,
            SlotbookError::DatabaseError(_) => 500,
            SlotbookError::ExternalServiceError { .. } => 502,
            SlotbookError::ConflictError(_) => 409,
            SlotbookError::NotFoundError(_) => 404,
            SlotbookError::InternalError(_) => 500,
        }
    }
}

impl From<DirectoryError> for SlotbookError {
    fn from(err: DirectoryError) -> Self {
        match err {
            DirectoryError::Conflict { .. } => SlotbookError::ConflictError(err.to_string()),
            DirectoryError::InvalidRequest(message) => SlotbookError::ValidationError(message),
            DirectoryError::Unavailable(message) => external_service_error("Booking store", message),
            DirectoryError::InvalidResponse(message) => {
                external_service_error("Booking store", message)
            }
        }
    }
}

impl From<std::io::Error> for SlotbookError {
    fn from(err: std::io::Error) -> Self {
        SlotbookError::InternalError(err.to_string())
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> SlotbookError {
    SlotbookError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> SlotbookError {
    SlotbookError::ValidationError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> SlotbookError {
    SlotbookError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SlotId;
    use chrono::NaiveDate;

    #[test]
    fn test_directory_errors_map_to_http_statuses() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let cases = [
            (
                DirectoryError::Conflict {
                    date,
                    slot_id: SlotId::from("2"),
                },
                409,
            ),
            (DirectoryError::InvalidRequest("unknown slot".into()), 400),
            (DirectoryError::Unavailable("connection refused".into()), 502),
            (DirectoryError::InvalidResponse("not json".into()), 502),
        ];
        for (err, expected) in cases {
            let mapped: SlotbookError = err.into();
            assert_eq!(mapped.status_code(), expected, "{mapped}");
        }
    }

    #[test]
    fn test_io_errors_are_internal() {
        let err: SlotbookError =
            std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use").into();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.to_string(), "Internal error: address in use");
    }

    #[test]
    fn test_conflict_message_names_slot_and_date() {
        let err: SlotbookError = DirectoryError::Conflict {
            date: NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(),
            slot_id: SlotId::from("4"),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Conflict: Slot 4 on 2025-03-10 is already booked"
        );
    }
}
