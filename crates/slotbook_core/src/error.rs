// --- File: crates/slotbook_core/src/error.rs ---
use chrono::NaiveDate;
use slotbook_common::{BookingRequest, DirectoryError};
use thiserror::Error;

/// A commit was refused locally, before any remote call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select a date before booking a slot.")]
    NoDateSelected,

    #[error("Please select a valid time slot.")]
    NoSlotSelected,
}

/// Loading the booked set for a date failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Could not load bookings for {date}: {source}")]
pub struct FetchError {
    pub date: NaiveDate,
    pub source: DirectoryError,
}

/// The directory did not accept a booking. Local state is unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Could not book {} on {}: {source}", .request.time_label, .request.date)]
pub struct CommitError {
    pub request: BookingRequest,
    pub source: DirectoryError,
}

impl CommitError {
    /// True when another party booked the slot first.
    pub fn is_conflict(&self) -> bool {
        self.source.is_conflict()
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Commit(#[from] CommitError),
}
