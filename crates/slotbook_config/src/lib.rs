// --- File: crates/slotbook_config/src/lib.rs ---
use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod env_vars;
pub mod models;
pub use models::*;

/// Environment variable that points at the directory holding `default.*` and `{RUN_ENV}.*`.
pub const CONFIG_DIR_VAR: &str = "SLOTBOOK_CONFIG_DIR";

/// Loads the application configuration.
///
/// Sources, later ones winning:
/// 1. `{config_dir}/default.(toml|json|yaml)` (optional)
/// 2. `{config_dir}/{RUN_ENV}.(toml|json|yaml)` (optional, `RUN_ENV` defaults to `debug`)
/// 3. `SLOTBOOK__SECTION__KEY` environment variables
///
/// A missing file is not an error; every section has a default.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();
    let config_dir = env::var(CONFIG_DIR_VAR).unwrap_or_else(|_| "config".to_string());
    load_config_from(Path::new(&config_dir))
}

/// Loads the configuration from an explicit directory.
pub fn load_config_from(config_dir: &Path) -> Result<AppConfig, ConfigError> {
    load_config_with_prefix(config_dir, &env_vars::get_config_prefix())
}

pub(crate) fn load_config_with_prefix(
    config_dir: &Path,
    prefix: &str,
) -> Result<AppConfig, ConfigError> {
    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());

    let default_path: PathBuf = config_dir.join("default");
    let env_path: PathBuf = config_dir.join(&run_env);
    debug!(
        "Loading config from {} and {} (prefix {})",
        default_path.display(),
        env_path.display(),
        prefix
    );

    let builder = Config::builder()
        .add_source(File::from(default_path).required(false))
        .add_source(File::from(env_path).required(false))
        .add_source(
            Environment::with_prefix(prefix)
                .separator(env_vars::CONFIG_SEPARATOR)
                .try_parsing(true),
        );

    builder.build()?.try_deserialize()
}

static INIT_DOTENV: OnceCell<String> = OnceCell::new();

/// Ensures that the dotenv file is loaded into the environment variables.
///
/// The file is `DOTENV_OVERRIDE` if set, otherwise the first command line
/// argument when it starts with `.env`, otherwise `.env`. Loading happens once
/// per process; the returned path is the one that was used.
pub fn ensure_dotenv_loaded() -> String {
    INIT_DOTENV
        .get_or_init(|| {
            let dotenv_path_override = env::var("DOTENV_OVERRIDE").ok();
            let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));
            let dotenv_path = dotenv_path_override
                .or(dotenv_path_arg)
                .unwrap_or_else(|| ".env".to_string());
            dotenv::from_filename(&dotenv_path).ok();
            dotenv_path
        })
        .clone()
}
