// --- File: crates/slotbook_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

// --- Database Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String, // e.g. sqlite:data/slotbook.db, overridable via SLOTBOOK__DATABASE__URL
}

// --- Remote Booking Directory (client side) ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    /// Base URL of the booking directory server, without the `/api` suffix.
    pub base_url: String,
    /// Upper bound for a single list or create call.
    pub timeout_secs: Option<u64>,
}

impl DirectoryConfig {
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs.unwrap_or(Self::DEFAULT_TIMEOUT_SECS)
    }
}

/// What the slot view does with a slot once it is booked for the active date.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum OnBooked {
    /// Booked slots disappear from the rendered sequence.
    Remove,
    /// Booked slots stay visible but can no longer be selected.
    #[default]
    MarkImmutable,
}

// --- Booking Behaviour ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct BookingConfig {
    #[serde(default)]
    pub on_booked: OnBooked,
    /// Accept dates before "today" in the date picker and in the directory.
    #[serde(default)]
    pub allow_past_dates: bool,
    /// IANA zone used to decide what "today" is.
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
}

fn default_time_zone() -> String {
    "Europe/Zurich".to_string()
}

impl Default for BookingConfig {
    fn default() -> Self {
        Self {
            on_booked: OnBooked::default(),
            allow_past_dates: false,
            time_zone: default_time_zone(),
        }
    }
}

// --- Logging ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct LoggingConfig {
    /// Default filter when RUST_LOG is not set, e.g. "info" or "slotbook_core=debug".
    pub level: Option<String>,
    /// Directory for daily rolling log files; stdout only when unset.
    pub file_dir: Option<String>,
    /// Also send events to journald (Linux only).
    #[serde(default)]
    pub journald: bool,
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    // --- Runtime Flags (optional in config file, default to false) ---
    #[serde(default)]
    pub use_database: bool,

    // --- Optional Sections ---
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
    #[serde(default)]
    pub directory: Option<DirectoryConfig>,

    #[serde(default)]
    pub booking: BookingConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}
