//! Synthetic data generators standing in for the grid data backend.
//!
//! Every generator takes its random source (and, for time series, the
//! generation instant) as an argument so callers can seed them.

pub mod consumption;
pub mod district;
pub mod reference;
pub mod types;

pub use consumption::{generate_forecast_data, generate_historical_data};
pub use district::generate_district_data;
pub use reference::{generate_energy_mix_data, generate_optimization_scenarios};
pub use types::{
    CombinedConsumption, ConsumptionPoint, DistrictConsumption, EnergyMixShare, EnergySource,
    OptimizationScenario,
};
