// File: services/slotbook_backend/src/main.rs
use slotbook_backend::{build_app, directory_from_config};
use slotbook_common::{config_error, init_from_config, SlotbookError};
use slotbook_config::load_config;
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), SlotbookError> {
    let config = load_config().map_err(config_error)?;
    let _log_guard = init_from_config(&config.logging);

    let directory = directory_from_config(&config).await?;
    let app = build_app(&config, directory);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Starting server at http://{}", addr);
    info!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}
