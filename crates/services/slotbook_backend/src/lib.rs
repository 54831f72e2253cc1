// --- File: crates/services/slotbook_backend/src/lib.rs ---
pub mod app;

pub use app::{build_app, directory_from_config};
