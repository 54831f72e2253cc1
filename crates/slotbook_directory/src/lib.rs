// --- File: crates/slotbook_directory/src/lib.rs ---
// Declare modules within this crate
pub mod client; // HTTP client implementing BookingDirectory
pub mod doc;
pub mod handlers;
pub mod memory; // In-memory BookingDirectory
#[cfg(test)]
mod memory_test;
pub mod routes;
#[cfg(test)]
mod routes_test;

pub use client::HttpBookingDirectory;
pub use handlers::DirectoryState;
pub use memory::InMemoryBookingDirectory;
pub use routes::routes;
