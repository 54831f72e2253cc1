// --- File: crates/slotbook_core/src/lib.rs ---
//! Slot availability core.
//!
//! [`SlotRegistry`] owns the fixed daily slots and their per-date flags.
//! [`AvailabilitySynchronizer`] owns the active date and mediates every call to
//! the remote [`BookingDirectory`](slotbook_common::BookingDirectory).
pub mod error;
pub mod registry;
#[cfg(test)]
mod registry_proptest;
pub mod synchronizer;
#[cfg(test)]
mod test_support;

pub use error::{BookingError, CommitError, FetchError, ValidationError};
pub use registry::{Slot, SlotRegistry, SlotStatus};
pub use slotbook_config::OnBooked;
pub use synchronizer::{
    AvailabilitySynchronizer, BookingConfirmation, CommitResponse, FetchOutcome, FetchResponse,
    PendingCommit, PendingFetch,
};
