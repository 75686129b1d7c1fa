//! TOML-based dashboard configuration and preset definitions.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::error::ServiceError;
use crate::forecast::ForecastParameters;
use crate::service::optimization::OptimizationParams;
use crate::service::validate_historical_days;

/// Top-level configuration parsed from TOML.
///
/// All sections have defaults matching the `default` preset. Load from TOML
/// with [`DashboardConfig::from_toml_file`] or start from
/// [`DashboardConfig::from_preset`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardConfig {
    /// Data service settings.
    #[serde(default)]
    pub service: ServiceConfig,
    /// Simulated per-request latency.
    #[serde(default)]
    pub latency: LatencyConfig,
    /// Dashboard view settings.
    #[serde(default)]
    pub dashboard: ViewConfig,
    /// Forecast form parameters; `forecast_days` is the dashboard's horizon.
    #[serde(default)]
    pub forecast: ForecastParameters,
    /// Optimization run parameters.
    #[serde(default = "OptimizationParams::reference")]
    pub optimization: OptimizationParams,
}

/// Data service settings.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    /// Random seed; unseeded runs draw from the OS.
    pub seed: Option<u64>,
}

/// Simulated latency of each data service request, in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LatencyConfig {
    pub historical_ms: u64,
    pub forecast_ms: u64,
    pub energy_mix_ms: u64,
    pub scenarios_ms: u64,
    pub optimization_ms: u64,
    pub districts_ms: u64,
}

impl LatencyConfig {
    /// All requests resolve immediately.
    pub fn instant() -> Self {
        Self {
            historical_ms: 0,
            forecast_ms: 0,
            energy_mix_ms: 0,
            scenarios_ms: 0,
            optimization_ms: 0,
            districts_ms: 0,
        }
    }

    pub fn historical(&self) -> Duration {
        Duration::from_millis(self.historical_ms)
    }

    pub fn forecast(&self) -> Duration {
        Duration::from_millis(self.forecast_ms)
    }

    pub fn energy_mix(&self) -> Duration {
        Duration::from_millis(self.energy_mix_ms)
    }

    pub fn scenarios(&self) -> Duration {
        Duration::from_millis(self.scenarios_ms)
    }

    pub fn optimization(&self) -> Duration {
        Duration::from_millis(self.optimization_ms)
    }

    pub fn districts(&self) -> Duration {
        Duration::from_millis(self.districts_ms)
    }
}

impl Default for LatencyConfig {
    fn default() -> Self {
        Self {
            historical_ms: 800,
            forecast_ms: 1000,
            energy_mix_ms: 800,
            scenarios_ms: 1000,
            optimization_ms: 2000,
            districts_ms: 800,
        }
    }
}

/// Dashboard view settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    /// Days of history to load (1-3650).
    pub historical_days: u32,
    /// Number of most recent rows in the consumption table (must be > 0).
    pub table_rows: usize,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            historical_days: 30,
            table_rows: 10,
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Error)]
#[error("config error: {field}: {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"forecast.forecast_days"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl DashboardConfig {
    /// Available preset names.
    pub const PRESETS: &[&str] = &["default", "instant"];

    /// Returns the `default` preset: latencies of a remote data API.
    pub fn standard() -> Self {
        Self {
            service: ServiceConfig::default(),
            latency: LatencyConfig::default(),
            dashboard: ViewConfig::default(),
            forecast: ForecastParameters::default(),
            optimization: OptimizationParams::reference(),
        }
    }

    /// Returns the `instant` preset: no simulated latency.
    pub fn instant() -> Self {
        Self {
            latency: LatencyConfig::instant(),
            ..Self::standard()
        }
    }

    /// Loads a configuration from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "default" => Ok(Self::standard()),
            "instant" => Ok(Self::instant()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let view = &self.dashboard;
        if view.historical_days == 0 {
            errors.push(ConfigError {
                field: "dashboard.historical_days".into(),
                message: "must be > 0".into(),
            });
        } else if let Err(e) = validate_historical_days(view.historical_days) {
            errors.push(nested("dashboard", e));
        }
        if view.table_rows == 0 {
            errors.push(ConfigError {
                field: "dashboard.table_rows".into(),
                message: "must be > 0".into(),
            });
        }

        if let Err(e) = self.forecast.validate() {
            errors.push(nested("forecast", e));
        }
        if let Err(e) = self.optimization.validate() {
            errors.push(nested("optimization", e));
        }

        errors
    }
}

fn nested(section: &str, err: ServiceError) -> ConfigError {
    match err {
        ServiceError::InvalidParameter { field, message } => ConfigError {
            field: format!("{section}.{field}"),
            message,
        },
        other => ConfigError {
            field: section.to_string(),
            message: other.to_string(),
        },
    }
}
