//! REST API over the data service.
//!
//! Endpoints:
//! - `GET /consumption/historical`, `/consumption/forecast`, `/consumption/combined`
//! - `GET /energy-mix`, `/scenarios`, `/districts`
//! - `POST /optimization`
//! - `GET /dashboard`: initial dashboard load plus headline stats

mod handlers;
mod types;

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tracing::info;

use crate::config::ViewConfig;
use crate::forecast::ForecastParameters;
use crate::service::{DataService, SystemClock};

pub use types::{DashboardResponse, ErrorResponse};

/// Application state shared across all request handlers.
///
/// The service locks its random source internally, so the state needs no
/// outer lock.
pub struct AppState {
    /// Data service answering every request.
    pub service: DataService<SystemClock>,
    /// History length used when a request omits it.
    pub defaults: ViewConfig,
    /// Forecast form values (horizon included) used when a request omits them.
    pub forecast: ForecastParameters,
}

/// Builds the axum router with all API routes.
///
/// # Arguments
///
/// * `state` - Shared application state
///
/// # Returns
///
/// Configured `Router` ready to serve.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/consumption/historical", get(handlers::get_historical))
        .route("/consumption/forecast", get(handlers::get_forecast))
        .route("/consumption/combined", get(handlers::get_combined))
        .route("/energy-mix", get(handlers::get_energy_mix))
        .route("/scenarios", get(handlers::get_scenarios))
        .route("/optimization", post(handlers::post_optimization))
        .route("/districts", get(handlers::get_districts))
        .route("/dashboard", get(handlers::get_dashboard))
        .with_state(state)
}

/// Binds to the given address and serves the API until the server stops.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(state: Arc<AppState>, addr: SocketAddr) -> io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "API server listening");
    axum::serve(listener, app).await
}
