// --- File: crates/services/slotbook_client/src/lib.rs ---
pub mod command;
pub mod host;
pub mod view;

pub use command::{parse_command, Command, CommandError};
pub use host::{Completion, Host, Step};
