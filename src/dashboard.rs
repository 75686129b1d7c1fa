//! Dashboard aggregates derived from data service results.

use std::fmt;

use serde::Serialize;

use crate::generator::reference::CURRENT_MIX_ID;
use crate::generator::{CombinedConsumption, ConsumptionPoint, EnergyMixShare, OptimizationScenario};

/// Rows shown in the consumption table by default.
pub const DEFAULT_TABLE_ROWS: usize = 10;

/// Everything the dashboard loads on first render.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub consumption: CombinedConsumption,
    pub energy_mix: Vec<EnergyMixShare>,
    pub scenarios: Vec<OptimizationScenario>,
}

impl DashboardSnapshot {
    /// Headline figures for the stats cards.
    pub fn stats(&self) -> DashboardStats {
        DashboardStats::from_parts(&self.consumption.combined, &self.energy_mix, &self.scenarios)
    }

    /// The last `rows` points of the combined series.
    pub fn recent(&self, rows: usize) -> RecentTable<'_> {
        RecentTable::new(&self.consumption.combined, rows)
    }

    /// Scenario selected when the dashboard opens: the first one listed.
    pub fn initial_selection(&self) -> Option<&OptimizationScenario> {
        self.scenarios.first()
    }

    /// Looks up a scenario by id.
    pub fn select_scenario(&self, id: u32) -> Option<&OptimizationScenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }
}

/// Headline figures shown above the charts.
///
/// Computed from the combined series so the "current" figure is the last
/// point shown on the chart, forecast included.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardStats {
    /// Consumption of the last combined point (MW), 0 when empty.
    pub current_consumption_mw: f64,
    /// Highest consumption across the combined series (MW), 0 when empty.
    pub peak_consumption_mw: f64,
    /// Sum of renewable shares in the energy mix (%).
    pub renewable_pct: f64,
    /// Procurement cost of the current mix (Rs/kWh), if that scenario is listed.
    pub procurement_cost: Option<f64>,
}

impl DashboardStats {
    /// Computes the stats from raw service results.
    pub fn from_parts(
        combined: &[ConsumptionPoint],
        energy_mix: &[EnergyMixShare],
        scenarios: &[OptimizationScenario],
    ) -> Self {
        let current_consumption_mw = combined.last().map_or(0.0, |p| p.consumption);
        let peak_consumption_mw = combined
            .iter()
            .map(|p| p.consumption)
            .fold(0.0_f64, f64::max);
        let renewable_pct = energy_mix
            .iter()
            .filter(|share| share.name.is_renewable())
            .map(|share| share.value)
            .sum();
        let procurement_cost = scenarios
            .iter()
            .find(|s| s.id == CURRENT_MIX_ID)
            .map(|s| s.cost);

        Self {
            current_consumption_mw,
            peak_consumption_mw,
            renewable_pct,
            procurement_cost,
        }
    }
}

impl fmt::Display for DashboardStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Dashboard ---")?;
        writeln!(
            f,
            "Current consumption:  {:.2} GW",
            self.current_consumption_mw / 1000.0
        )?;
        writeln!(
            f,
            "Peak load:            {:.2} GW",
            self.peak_consumption_mw / 1000.0
        )?;
        writeln!(f, "Renewable energy:     {:.0}%", self.renewable_pct)?;
        match self.procurement_cost {
            Some(cost) => write!(f, "Cost of power:        Rs {cost:.2}/kWh"),
            None => write!(f, "Cost of power:        n/a"),
        }
    }
}

/// The most recent rows of a consumption series, rendered as a table.
#[derive(Debug, Clone, Copy)]
pub struct RecentTable<'a> {
    rows: &'a [ConsumptionPoint],
}

impl<'a> RecentTable<'a> {
    /// Keeps the last `rows` points of `series` (all of them if shorter).
    pub fn new(series: &'a [ConsumptionPoint], rows: usize) -> Self {
        let start = series.len().saturating_sub(rows);
        Self {
            rows: &series[start..],
        }
    }

    pub fn rows(&self) -> &'a [ConsumptionPoint] {
        self.rows
    }
}

impl fmt::Display for RecentTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:<12} {:<6} {:>16}  {}",
            "Date", "Time", "Consumption (MW)", "Status"
        )?;
        for p in self.rows {
            writeln!(
                f,
                "{:<12} {:<6} {:>16.0}  {}",
                p.date,
                p.time,
                p.consumption,
                p.status()
            )?;
        }
        Ok(())
    }
}

/// Energy mix rendered as one line per source.
#[derive(Debug, Clone, Copy)]
pub struct MixTable<'a>(pub &'a [EnergyMixShare]);

impl fmt::Display for MixTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for share in self.0 {
            let marker = if share.name.is_renewable() { "*" } else { " " };
            writeln!(
                f,
                "{:<8}{marker} {:>5.1}%  {}",
                share.name, share.value, share.color
            )?;
        }
        Ok(())
    }
}
