//! SQL persistence for Slotbook
//!
//! [`SqlBookingDirectory`] stores bookings in a single `bookings` table with a
//! `UNIQUE(booking_date, slot_id)` constraint, so the database itself rejects
//! a second booking of the same slot on the same date. Connections go through
//! SQLx's `Any` driver; SQLite is compiled in by default.
//!
//! # Example
//!
//! ```rust,no_run
//! use slotbook_db::{DbClient, SqlBookingDirectory};
//!
//! async fn open_store() -> Result<SqlBookingDirectory, slotbook_db::DbError> {
//!     let client = DbClient::from_url("sqlite:data/slotbook.db").await?;
//!     let store = SqlBookingDirectory::new(client);
//!     store.init_schema().await?;
//!     Ok(store)
//! }
//! ```

pub mod bookings;
#[cfg(test)]
mod bookings_test;
pub mod client;
pub mod error;

pub use bookings::SqlBookingDirectory;
pub use client::DbClient;
pub use error::DbError;
