// --- File: crates/slotbook_common/src/services.rs ---
//! The remote booking directory contract.
//!
//! The availability core only ever talks to the system of record through
//! [`BookingDirectory`]. Implementations live elsewhere: an in-memory store and
//! an HTTP client in `slotbook-directory`, a SQL store in `slotbook-db`.

use async_trait::async_trait;
use chrono::NaiveDate;
use thiserror::Error;

use crate::models::{BookingRecord, BookingRequest, SlotId};

/// Errors reported by a booking directory.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DirectoryError {
    /// Somebody else already holds this slot on this date.
    #[error("Slot {slot_id} on {date} is already booked")]
    Conflict { date: NaiveDate, slot_id: SlotId },

    /// The directory refused the request as malformed.
    #[error("Invalid booking request: {0}")]
    InvalidRequest(String),

    /// Network or server failure; the same call may succeed later.
    #[error("Booking directory unavailable: {0}")]
    Unavailable(String),

    /// The directory answered with something we could not interpret.
    #[error("Unexpected booking directory response: {0}")]
    InvalidResponse(String),
}

impl DirectoryError {
    pub fn is_transient(&self) -> bool {
        matches!(self, DirectoryError::Unavailable(_))
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, DirectoryError::Conflict { .. })
    }
}

/// The external system of record for bookings.
///
/// `create_booking` is not idempotent: callers must not retry it blindly.
#[async_trait]
pub trait BookingDirectory: Send + Sync {
    /// Lists every booking persisted for `date`.
    async fn list_bookings(&self, date: NaiveDate) -> Result<Vec<BookingRecord>, DirectoryError>;

    /// Persists a booking, failing with [`DirectoryError::Conflict`] when the
    /// slot is already taken for that date.
    async fn create_booking(&self, request: BookingRequest)
        -> Result<BookingRecord, DirectoryError>;
}
