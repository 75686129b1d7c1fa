//! Optimization run parameters and the scenario adjustment they drive.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ServiceError};
use crate::generator::OptimizationScenario;

/// Index of the renewable-focused scenario adjusted by `max_renewable`.
const RENEWABLE_SLOT: usize = 1;
/// Index of the cost-optimized scenario adjusted by `cost_constraint`.
const COST_SLOT: usize = 2;

/// Parameters of an optimization run.
///
/// Only `max_renewable` and `cost_constraint` influence the result; the other
/// fields are carried for the form and the reference defaults. A value of
/// zero counts as not supplied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OptimizationParams {
    /// Expected peak demand (MW).
    pub demand_forecast_mw: Option<f64>,
    /// Transmission loss (%).
    pub transmission_loss_pct: Option<f64>,
    /// Upper bound on the renewable share (%).
    pub max_renewable: Option<f64>,
    /// Upper bound on procurement cost (Rs/kWh).
    pub cost_constraint: Option<f64>,
    /// Carbon intensity target (g/kWh).
    pub carbon_target: Option<f64>,
}

impl OptimizationParams {
    /// The grid's reference planning parameters.
    pub fn reference() -> Self {
        Self {
            demand_forecast_mw: Some(18_500.0),
            transmission_loss_pct: Some(4.2),
            max_renewable: Some(50.0),
            cost_constraint: Some(9.0),
            carbon_target: Some(500.0),
        }
    }

    /// Checks that every supplied value is finite and in range.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidParameter`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        check("demand_forecast_mw", self.demand_forecast_mw, NON_NEGATIVE)?;
        check("transmission_loss_pct", self.transmission_loss_pct, PERCENT)?;
        check("max_renewable", self.max_renewable, PERCENT)?;
        check("cost_constraint", self.cost_constraint, NON_NEGATIVE)?;
        check("carbon_target", self.carbon_target, NON_NEGATIVE)
    }
}

const PERCENT: (f64, f64) = (0.0, 100.0);
const NON_NEGATIVE: (f64, f64) = (0.0, f64::MAX);

fn check(field: &'static str, value: Option<f64>, (low, high): (f64, f64)) -> Result<()> {
    match value {
        Some(v) if !v.is_finite() || v < low || v > high => {
            let expected = if high == f64::MAX {
                format!(">= {low}")
            } else {
                format!("in {low}..={high}")
            };
            Err(ServiceError::invalid(
                field,
                format!("must be finite and {expected}, got {v}"),
            ))
        }
        _ => Ok(()),
    }
}

/// Supplied, non-zero value of an optional parameter.
fn supplied(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

/// Adjusts the scenario list in place according to `params`.
///
/// With `max_renewable`, the renewable-focus scenario moves to
/// `min(max_renewable, renewable + 5)`, its cost rises by up to 5% and its
/// carbon intensity drops by 5-10%. With `cost_constraint`, the cost-optimized
/// scenario moves to `min(cost_constraint, cost - 0.2)`, loses up to 3 points
/// of renewable share and gains up to 30 g/kWh of carbon intensity.
///
/// # Errors
///
/// Returns [`ServiceError::GenerationFailure`] if a scenario slot the
/// adjustment needs is missing from `scenarios`.
pub fn apply_optimization<R: Rng + ?Sized>(
    scenarios: &mut [OptimizationScenario],
    params: &OptimizationParams,
    rng: &mut R,
) -> Result<()> {
    if let Some(max_renewable) = supplied(params.max_renewable) {
        let s = slot(scenarios, RENEWABLE_SLOT)?;
        s.renewable = max_renewable.min(s.renewable + 5.0);
        s.cost *= 1.0 + rng.random_range(0.0..0.05);
        s.carbon *= rng.random_range(0.90..0.95);
    }

    if let Some(cost_constraint) = supplied(params.cost_constraint) {
        let s = slot(scenarios, COST_SLOT)?;
        s.cost = cost_constraint.min(s.cost - 0.2);
        s.renewable -= rng.random_range(0.0..3.0);
        s.carbon += rng.random_range(0.0..30.0);
    }

    Ok(())
}

fn slot(scenarios: &mut [OptimizationScenario], index: usize) -> Result<&mut OptimizationScenario> {
    let len = scenarios.len();
    scenarios.get_mut(index).ok_or_else(|| {
        ServiceError::GenerationFailure(format!(
            "scenario slot {index} missing from a list of {len}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_optimization_scenarios;
    use rand::{SeedableRng, rngs::StdRng};

    fn run(params: &OptimizationParams, seed: u64) -> Vec<OptimizationScenario> {
        let mut scenarios = generate_optimization_scenarios();
        apply_optimization(&mut scenarios, params, &mut StdRng::seed_from_u64(seed))
            .expect("adjustment should succeed");
        scenarios
    }

    #[test]
    fn no_params_leaves_scenarios_untouched() {
        assert_eq!(
            run(&OptimizationParams::default(), 1),
            generate_optimization_scenarios()
        );
    }

    #[test]
    fn zero_counts_as_not_supplied() {
        let params = OptimizationParams {
            max_renewable: Some(0.0),
            cost_constraint: Some(0.0),
            ..OptimizationParams::default()
        };
        assert_eq!(run(&params, 1), generate_optimization_scenarios());
    }

    #[test]
    fn max_renewable_caps_the_renewable_focus_scenario() {
        let base = generate_optimization_scenarios();
        for seed in 0..20 {
            let params = OptimizationParams {
                max_renewable: Some(50.0),
                ..OptimizationParams::default()
            };
            let out = run(&params, seed);
            let s = &out[RENEWABLE_SLOT];
            assert_eq!(s.renewable, 50.0);
            assert!(s.cost >= base[RENEWABLE_SLOT].cost);
            assert!(s.cost <= base[RENEWABLE_SLOT].cost * 1.05);
            assert!(s.carbon >= base[RENEWABLE_SLOT].carbon * 0.90);
            assert!(s.carbon <= base[RENEWABLE_SLOT].carbon * 0.95);
            // other scenarios untouched
            assert_eq!(out[0], base[0]);
            assert_eq!(out[COST_SLOT], base[COST_SLOT]);
            assert_eq!(out[3], base[3]);
        }
    }

    #[test]
    fn generous_max_renewable_adds_five_points() {
        let params = OptimizationParams {
            max_renewable: Some(90.0),
            ..OptimizationParams::default()
        };
        assert_eq!(run(&params, 3)[RENEWABLE_SLOT].renewable, 53.0);
    }

    #[test]
    fn cost_constraint_lowers_the_cost_optimized_scenario() {
        let base = generate_optimization_scenarios();
        for seed in 0..20 {
            let params = OptimizationParams {
                cost_constraint: Some(9.0),
                ..OptimizationParams::default()
            };
            let out = run(&params, seed);
            let s = &out[COST_SLOT];
            assert!((s.cost - (base[COST_SLOT].cost - 0.2)).abs() < 1e-9);
            assert!(s.renewable <= base[COST_SLOT].renewable);
            assert!(s.renewable >= base[COST_SLOT].renewable - 3.0);
            assert!(s.carbon >= base[COST_SLOT].carbon);
            assert!(s.carbon <= base[COST_SLOT].carbon + 30.0);
            assert_eq!(out[RENEWABLE_SLOT], base[RENEWABLE_SLOT]);
        }
    }

    #[test]
    fn tight_cost_constraint_wins_over_discount() {
        let params = OptimizationParams {
            cost_constraint: Some(7.5),
            ..OptimizationParams::default()
        };
        assert_eq!(run(&params, 3)[COST_SLOT].cost, 7.5);
    }

    #[test]
    fn missing_slot_is_a_generation_failure() {
        let mut scenarios = generate_optimization_scenarios();
        scenarios.truncate(1);
        let err = apply_optimization(
            &mut scenarios,
            &OptimizationParams::reference(),
            &mut StdRng::seed_from_u64(0),
        )
        .unwrap_err();
        assert!(matches!(err, ServiceError::GenerationFailure(_)));
    }

    #[test]
    fn validation_rejects_out_of_range_values() {
        assert!(OptimizationParams::reference().validate().is_ok());

        let params = OptimizationParams {
            max_renewable: Some(120.0),
            ..OptimizationParams::default()
        };
        assert!(params.validate().is_err());

        let params = OptimizationParams {
            cost_constraint: Some(f64::NAN),
            ..OptimizationParams::default()
        };
        assert!(params.validate().is_err());
    }
}
