//! Records produced by the synthetic generators.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One consumption reading (or prediction) for the grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsumptionPoint {
    /// Instant the reading refers to.
    pub timestamp: DateTime<Utc>,
    /// Grid demand in MW, rounded to a whole number and never negative.
    pub consumption: f64,
    /// Display date (`dd/mm/YYYY`) in the offset the series was generated in.
    pub date: String,
    /// Display time (`HH:MM`).
    pub time: String,
    /// `true` for forecast points.
    #[serde(default)]
    pub predicted: bool,
}

impl ConsumptionPoint {
    /// Status label shown in tables and exports.
    pub fn status(&self) -> &'static str {
        if self.predicted { "Predicted" } else { "Actual" }
    }
}

/// Generation source category of the energy mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnergySource {
    Coal,
    Hydro,
    Solar,
    Wind,
    Nuclear,
}

impl EnergySource {
    /// Whether the source counts towards the renewable share.
    pub fn is_renewable(self) -> bool {
        matches!(self, Self::Hydro | Self::Solar | Self::Wind)
    }

    /// Chart color for the source.
    pub fn color(self) -> &'static str {
        match self {
            Self::Coal => "#6c757d",
            Self::Hydro => "#0d6efd",
            Self::Solar => "#ffc107",
            Self::Wind => "#20c997",
            Self::Nuclear => "#6610f2",
        }
    }
}

impl fmt::Display for EnergySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Coal => "Coal",
            Self::Hydro => "Hydro",
            Self::Solar => "Solar",
            Self::Wind => "Wind",
            Self::Nuclear => "Nuclear",
        };
        f.pad(label)
    }
}

/// Share of one source in the generation mix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnergyMixShare {
    pub name: EnergySource,
    /// Percentage of total generation (0-100).
    pub value: f64,
    pub color: &'static str,
}

/// A procurement strategy with its cost, renewable share and carbon intensity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptimizationScenario {
    pub id: u32,
    pub name: &'static str,
    /// Procurement cost in Rs/kWh.
    pub cost: f64,
    /// Renewable share in percent.
    pub renewable: f64,
    /// Carbon intensity in g/kWh.
    pub carbon: f64,
    pub description: &'static str,
}

impl fmt::Display for OptimizationScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {:<16} Rs {:.2}/kWh  renewable {:>5.1}%  carbon {:>6.1} g/kWh  {}",
            self.id, self.name, self.cost, self.renewable, self.carbon, self.description
        )
    }
}

/// Consumption summary for one district.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistrictConsumption {
    pub name: &'static str,
    /// Demand in MW.
    pub consumption: f64,
    /// Year-over-year growth in percent, one decimal.
    pub growth: f64,
    /// Renewable share in percent.
    pub renewable: f64,
}

/// Historical and forecast series, plus their concatenation for charting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinedConsumption {
    pub historical: Vec<ConsumptionPoint>,
    pub forecast: Vec<ConsumptionPoint>,
    /// `historical` followed by `forecast`, in that order.
    pub combined: Vec<ConsumptionPoint>,
}

impl CombinedConsumption {
    /// Joins the two series without re-sorting.
    pub fn new(historical: Vec<ConsumptionPoint>, forecast: Vec<ConsumptionPoint>) -> Self {
        let mut combined = Vec::with_capacity(historical.len() + forecast.len());
        combined.extend_from_slice(&historical);
        combined.extend_from_slice(&forecast);
        Self {
            historical,
            forecast,
            combined,
        }
    }
}
