//! Static reference data: the generation mix and procurement scenarios.

use super::types::{EnergyMixShare, EnergySource, OptimizationScenario};

/// Generation mix in percent per source.
pub const ENERGY_MIX: [(EnergySource, f64); 5] = [
    (EnergySource::Coal, 45.0),
    (EnergySource::Hydro, 15.0),
    (EnergySource::Solar, 20.0),
    (EnergySource::Wind, 12.0),
    (EnergySource::Nuclear, 8.0),
];

/// Id of the scenario describing the current procurement strategy.
pub const CURRENT_MIX_ID: u32 = 1;

/// Procurement scenarios offered for comparison.
pub const OPTIMIZATION_SCENARIOS: [OptimizationScenario; 4] = [
    OptimizationScenario {
        id: CURRENT_MIX_ID,
        name: "Current Mix",
        cost: 8.75,
        renewable: 32.0,
        carbon: 650.0,
        description: "Current energy procurement strategy",
    },
    OptimizationScenario {
        id: 2,
        name: "Renewable Focus",
        cost: 9.12,
        renewable: 48.0,
        carbon: 450.0,
        description: "Increase renewable energy procurement to 48%",
    },
    OptimizationScenario {
        id: 3,
        name: "Cost Optimized",
        cost: 8.45,
        renewable: 30.0,
        carbon: 670.0,
        description: "Optimize for lowest cost procurement",
    },
    OptimizationScenario {
        id: 4,
        name: "Balanced",
        cost: 8.62,
        renewable: 40.0,
        carbon: 520.0,
        description: "Balance cost and renewable integration",
    },
];

/// Returns the generation mix with chart colors.
pub fn generate_energy_mix_data() -> Vec<EnergyMixShare> {
    ENERGY_MIX
        .iter()
        .map(|&(name, value)| EnergyMixShare {
            name,
            value,
            color: name.color(),
        })
        .collect()
}

/// Returns a fresh copy of the procurement scenarios.
pub fn generate_optimization_scenarios() -> Vec<OptimizationScenario> {
    OPTIMIZATION_SCENARIOS.to_vec()
}
