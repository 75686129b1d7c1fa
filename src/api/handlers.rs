//! Request handlers for the API endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use tracing::warn;

use super::AppState;
use super::types::{
    CombinedQuery, DashboardResponse, ErrorResponse, ForecastQuery, HistoricalQuery,
};
use crate::error::ServiceError;
use crate::generator::{
    CombinedConsumption, ConsumptionPoint, DistrictConsumption, EnergyMixShare,
    OptimizationScenario,
};
use crate::service::OptimizationParams;

type ApiError = (StatusCode, Json<ErrorResponse>);

fn error_response(err: ServiceError) -> ApiError {
    let status = match err {
        ServiceError::InvalidParameter { .. } => StatusCode::BAD_REQUEST,
        ServiceError::GenerationFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    warn!(%status, error = %err, "request failed");
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
        }),
    )
}

/// `GET /consumption/historical?days=N` → 200 + `Vec<ConsumptionPoint>`
/// `GET /consumption/historical?days=100000` → 400 + `ErrorResponse`
pub async fn get_historical(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HistoricalQuery>,
) -> Result<Json<Vec<ConsumptionPoint>>, ApiError> {
    let days = query.days.unwrap_or(state.defaults.historical_days);
    state
        .service
        .get_historical_consumption(days)
        .await
        .map(Json)
        .map_err(error_response)
}

/// Returns forecast points for the requested parameters.
///
/// `GET /consumption/forecast?days=N&forecast_model=..` → 200 + `Vec<ConsumptionPoint>`
/// `GET /consumption/forecast?days=0` → 400 + `ErrorResponse`
pub async fn get_forecast(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ForecastQuery>,
) -> Result<Json<Vec<ConsumptionPoint>>, ApiError> {
    let params = query.into_params(&state.forecast);
    state
        .service
        .get_forecast_consumption(&params)
        .await
        .map(Json)
        .map_err(error_response)
}

/// `GET /consumption/combined?historical_days=N&forecast_days=M` → 200 + `CombinedConsumption`
pub async fn get_combined(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CombinedQuery>,
) -> Result<Json<CombinedConsumption>, ApiError> {
    let historical_days = query
        .historical_days
        .unwrap_or(state.defaults.historical_days);
    let forecast_days = query.forecast_days.unwrap_or(state.forecast.forecast_days);
    state
        .service
        .get_combined_consumption_data(historical_days, forecast_days)
        .await
        .map(Json)
        .map_err(error_response)
}

/// `GET /energy-mix` → 200 + `Vec<EnergyMixShare>`
pub async fn get_energy_mix(State(state): State<Arc<AppState>>) -> Json<Vec<EnergyMixShare>> {
    Json(state.service.get_energy_mix_data().await)
}

/// `GET /scenarios` → 200 + `Vec<OptimizationScenario>`
pub async fn get_scenarios(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<OptimizationScenario>> {
    Json(state.service.get_optimization_scenarios().await)
}

/// Runs an optimization with the posted parameters.
///
/// `POST /optimization` + `OptimizationParams` JSON → 200 + `Vec<OptimizationScenario>`
/// `POST /optimization` with `max_renewable` > 100 → 400 + `ErrorResponse`
pub async fn post_optimization(
    State(state): State<Arc<AppState>>,
    Json(params): Json<OptimizationParams>,
) -> Result<Json<Vec<OptimizationScenario>>, ApiError> {
    state
        .service
        .run_optimization(&params)
        .await
        .map(Json)
        .map_err(error_response)
}

/// `GET /districts` → 200 + `Vec<DistrictConsumption>`
pub async fn get_districts(
    State(state): State<Arc<AppState>>,
) -> Json<Vec<DistrictConsumption>> {
    Json(state.service.get_district_data().await)
}

/// `GET /dashboard?historical_days=N&forecast_days=M` → 200 + `DashboardResponse`
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Query(query): Query<CombinedQuery>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let historical_days = query
        .historical_days
        .unwrap_or(state.defaults.historical_days);
    let forecast_days = query.forecast_days.unwrap_or(state.forecast.forecast_days);
    let snapshot = state
        .service
        .load_dashboard(historical_days, forecast_days)
        .await
        .map_err(error_response)?;
    let stats = snapshot.stats();
    Ok(Json(DashboardResponse { snapshot, stats }))
}
