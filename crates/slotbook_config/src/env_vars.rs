//! Environment variable naming for the Slotbook configuration.
//!
//! Every configuration path (`server.port`, `booking.on_booked`, ...) can be
//! overridden by an environment variable built from the prefix, the `__`
//! separator and the upper-cased path segments.

use std::env;

/// The default prefix for configuration environment variables
pub const DEFAULT_PREFIX: &str = "SLOTBOOK";

/// The separator for configuration environment variables
pub const CONFIG_SEPARATOR: &str = "__";

/// Get the prefix for configuration environment variables.
///
/// `SLOTBOOK_PREFIX` replaces the default, which lets two deployments share a host.
pub fn get_config_prefix() -> String {
    env::var("SLOTBOOK_PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string())
}

/// Convert a configuration path to an environment variable name
///
/// # Arguments
///
/// * `path` - The configuration path (e.g., "server.host")
///
/// # Returns
///
/// The environment variable name (e.g., "SLOTBOOK__SERVER__HOST")
pub fn config_path_to_env_var(path: &str) -> String {
    path_to_env_var(&get_config_prefix(), path)
}

pub(crate) fn path_to_env_var(prefix: &str, path: &str) -> String {
    let path = path.replace('.', CONFIG_SEPARATOR);
    format!("{}{}{}", prefix, CONFIG_SEPARATOR, path).to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_to_env_var() {
        assert_eq!(path_to_env_var("SLOTBOOK", "server.host"), "SLOTBOOK__SERVER__HOST");
        assert_eq!(
            path_to_env_var("SLOTBOOK", "booking.on_booked"),
            "SLOTBOOK__BOOKING__ON_BOOKED"
        );
    }
}
