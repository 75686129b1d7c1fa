//! Forecast request parameters.
//!
//! These mirror the dashboard's forecast form. The generator does not consume
//! them yet: every model and seasonality produces the same synthetic series.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ServiceError};

/// Forecasting model requested by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ForecastModel {
    Arima,
    #[default]
    Lstm,
    Prophet,
    Ensemble,
}

impl fmt::Display for ForecastModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Arima => "arima",
            Self::Lstm => "lstm",
            Self::Prophet => "prophet",
            Self::Ensemble => "ensemble",
        };
        f.write_str(name)
    }
}

/// Seasonal period the forecast should account for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Seasonality {
    Daily,
    #[default]
    Weekly,
    Monthly,
    Quarterly,
}

impl fmt::Display for Seasonality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Quarterly => "quarterly",
        };
        f.write_str(name)
    }
}

/// Forecast form parameters.
///
/// Defaults match the form's initial state: a 7-day LSTM forecast with
/// weather, 80% confidence and weekly seasonality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ForecastParameters {
    /// Forecast horizon in days (1-30).
    pub forecast_days: u32,
    /// Whether weather inputs should be considered.
    pub include_weather: bool,
    /// Confidence interval in percent (50-95, step 5).
    pub confidence_interval: u32,
    /// Requested model.
    pub forecast_model: ForecastModel,
    /// Requested seasonality.
    pub seasonality: Seasonality,
}

impl ForecastParameters {
    /// Accepted forecast horizon in days.
    pub const HORIZON_DAYS: std::ops::RangeInclusive<u32> = 1..=30;
    /// Accepted confidence interval in percent.
    pub const CONFIDENCE_RANGE: std::ops::RangeInclusive<u32> = 50..=95;
    /// Confidence interval granularity in percent.
    pub const CONFIDENCE_STEP: u32 = 5;

    /// Checks every field against the ranges the form allows.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidParameter`] for the first field out of range.
    pub fn validate(&self) -> Result<()> {
        if !Self::HORIZON_DAYS.contains(&self.forecast_days) {
            return Err(ServiceError::invalid(
                "forecast_days",
                format!("must be in 1..=30, got {}", self.forecast_days),
            ));
        }
        if !Self::CONFIDENCE_RANGE.contains(&self.confidence_interval)
            || self.confidence_interval % Self::CONFIDENCE_STEP != 0
        {
            return Err(ServiceError::invalid(
                "confidence_interval",
                format!(
                    "must be a multiple of 5 in 50..=95, got {}",
                    self.confidence_interval
                ),
            ));
        }
        Ok(())
    }
}

impl Default for ForecastParameters {
    fn default() -> Self {
        Self {
            forecast_days: 7,
            include_weather: true,
            confidence_interval: 80,
            forecast_model: ForecastModel::Lstm,
            seasonality: Seasonality::Weekly,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(ForecastParameters::default().validate().is_ok());
    }

    #[test]
    fn rejects_horizon_outside_form_range() {
        for days in [0, 31] {
            let params = ForecastParameters {
                forecast_days: days,
                ..ForecastParameters::default()
            };
            let err = params.validate().unwrap_err();
            assert!(matches!(
                err,
                ServiceError::InvalidParameter {
                    field: "forecast_days",
                    ..
                }
            ));
        }
    }

    #[test]
    fn rejects_confidence_off_step() {
        let params = ForecastParameters {
            confidence_interval: 82,
            ..ForecastParameters::default()
        };
        assert!(params.validate().is_err());

        let params = ForecastParameters {
            confidence_interval: 95,
            ..ForecastParameters::default()
        };
        assert!(params.validate().is_ok());
    }

    #[test]
    fn model_and_seasonality_use_lowercase_names() {
        let params: ForecastParameters =
            toml::from_str("forecast_model = \"prophet\"\nseasonality = \"quarterly\"")
                .expect("params should parse");
        assert_eq!(params.forecast_model, ForecastModel::Prophet);
        assert_eq!(params.seasonality, Seasonality::Quarterly);
        assert_eq!(params.forecast_days, 7);
        assert_eq!(ForecastModel::Ensemble.to_string(), "ensemble");
    }
}
