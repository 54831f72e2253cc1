// --- File: crates/services/slotbook_backend/src/app.rs ---
use axum::Router;
use http::{header, Method};
use slotbook_common::{config_error, log_result, BookingDirectory, SlotbookError};
use slotbook_config::AppConfig;
use slotbook_db::{DbClient, SqlBookingDirectory};
use slotbook_directory::{routes as directory_routes, DirectoryState, InMemoryBookingDirectory};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Picks the booking store: SQL when `use_database` is set, memory otherwise.
pub async fn directory_from_config(
    config: &AppConfig,
) -> Result<Arc<dyn BookingDirectory>, SlotbookError> {
    if !config.use_database {
        info!("Using in-memory booking store");
        return Ok(Arc::new(InMemoryBookingDirectory::new()));
    }

    let db_config = config
        .database
        .as_ref()
        .ok_or_else(|| config_error("use_database is set but [database] is missing"))?;
    let client = DbClient::from_config(db_config)
        .await
        .map_err(|e| SlotbookError::DatabaseError(e.to_string()))?;
    let store = SqlBookingDirectory::new(client);
    log_result(
        store.init_schema().await,
        "Bookings table ready",
        "Failed to prepare bookings table",
    )
    .map_err(|e| SlotbookError::DatabaseError(e.to_string()))?;
    info!("Using SQL booking store at {}", db_config.url);
    Ok(Arc::new(store))
}

async fn not_found() -> SlotbookError {
    SlotbookError::NotFoundError("No such endpoint".to_string())
}

/// The full HTTP application: every route under `/api`, plus tracing and CORS.
pub fn build_app(config: &AppConfig, directory: Arc<dyn BookingDirectory>) -> Router {
    let state = Arc::new(DirectoryState::new(directory, config.booking.clone()));

    let api_router = slotbook_common::routes()
        .merge(directory_routes(state))
        .fallback(not_found);

    #[allow(unused_mut)] // mutated only with the openapi feature
    let mut app = Router::new().nest("/api", api_router);

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use slotbook_directory::doc::DirectoryApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Slotbook API",
                version = "0.1.0",
                description = "Daily slot booking directory",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            servers((url = "/api", description = "Main API Prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(DirectoryApiDoc::openapi());
        info!("Adding Swagger UI at /api/docs");
        app = app.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc));
    }

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    app.layer(TraceLayer::new_for_http()).layer(cors)
}
