//! API query, request and response types.

use serde::{Deserialize, Serialize};

use crate::dashboard::{DashboardSnapshot, DashboardStats};
use crate::forecast::{ForecastModel, ForecastParameters, Seasonality};

/// Query for the historical endpoint.
#[derive(Debug, Deserialize)]
pub struct HistoricalQuery {
    /// Days of history (defaults to the configured dashboard value).
    pub days: Option<u32>,
}

/// Query for the forecast endpoint.
///
/// Omitted fields take the configured forecast form values; `days` maps to
/// the parameters' `forecast_days`.
#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    pub days: Option<u32>,
    pub include_weather: Option<bool>,
    pub confidence_interval: Option<u32>,
    pub forecast_model: Option<ForecastModel>,
    pub seasonality: Option<Seasonality>,
}

impl ForecastQuery {
    /// Forecast parameters with query values laid over `defaults`.
    pub fn into_params(self, defaults: &ForecastParameters) -> ForecastParameters {
        ForecastParameters {
            forecast_days: self.days.unwrap_or(defaults.forecast_days),
            include_weather: self.include_weather.unwrap_or(defaults.include_weather),
            confidence_interval: self
                .confidence_interval
                .unwrap_or(defaults.confidence_interval),
            forecast_model: self.forecast_model.unwrap_or(defaults.forecast_model),
            seasonality: self.seasonality.unwrap_or(defaults.seasonality),
        }
    }
}

/// Query for the combined and dashboard endpoints.
#[derive(Debug, Deserialize)]
pub struct CombinedQuery {
    pub historical_days: Option<u32>,
    pub forecast_days: Option<u32>,
}

/// Dashboard load plus the headline stats derived from it.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    #[serde(flatten)]
    pub snapshot: DashboardSnapshot,
    pub stats: DashboardStats,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forecast_query_fills_defaults() {
        let query = ForecastQuery {
            days: None,
            include_weather: None,
            confidence_interval: Some(90),
            forecast_model: Some(ForecastModel::Arima),
            seasonality: None,
        };
        let defaults = ForecastParameters {
            forecast_days: 12,
            ..ForecastParameters::default()
        };
        let params = query.into_params(&defaults);
        assert_eq!(params.forecast_days, 12);
        assert_eq!(params.confidence_interval, 90);
        assert_eq!(params.forecast_model, ForecastModel::Arima);
        assert_eq!(params.seasonality, Seasonality::Weekly);
        assert!(params.include_weather);
    }
}
