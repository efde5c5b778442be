use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;

use app_config::types::ServerSettings;
use trend::{AggregateResult, OptionsCatalog, TrendService};
use types::RatesRequest;

pub mod error;
pub mod types;

// Re-export our custom error type for convenience.
pub use error::{Error, Result};

/// The shared application state that is available to all API handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<TrendService>,
}

/// Creates the main application router with all routes and middleware.
pub fn create_router(app_state: AppState) -> Router {
    // Allow any origin during development; the verdict API carries no
    // credentials or per-user state.
    let cors = tower_http::cors::CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any);

    let api_router = Router::new()
        .route("/rates", post(get_rates_handler))
        .route("/options", get(get_options_handler));

    Router::new()
        .route("/health", get(health_check_handler))
        .nest("/api", api_router)
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(cors)
        .with_state(app_state)
}

/// A simple health check handler.
async fn health_check_handler() -> &'static str {
    "OK"
}

/// Handler for `POST /api/rates`: runs the multi-window trend
/// classification for one ticker and horizon.
async fn get_rates_handler(
    State(state): State<AppState>,
    Json(request): Json<RatesRequest>,
) -> Result<Json<AggregateResult>> {
    let result = state
        .service
        .classify_trend(&request.ticker, &request.horizon)
        .await?;
    Ok(Json(result))
}

/// Handler for `GET /api/options`: valid tickers and horizon labels.
async fn get_options_handler(State(state): State<AppState>) -> Result<Json<OptionsCatalog>> {
    let options = state.service.list_options().await?;
    Ok(Json(options))
}

/// The main entry point for running the web server.
///
/// Binds the configured address and serves the router until the process is
/// terminated.
pub async fn run(settings: ServerSettings, service: Arc<TrendService>) -> Result<()> {
    let app = create_router(AppState { service });

    let address = format!("{}:{}", settings.host, settings.port);
    tracing::info!("Web server listening on {}", address);

    let listener = TcpListener::bind(&address)
        .await
        .map_err(Error::ServerBindError)?;

    axum::serve(listener, app.into_make_service())
        .await
        .map_err(|e| Error::ServerBindError(e.into()))?;

    Ok(())
}
