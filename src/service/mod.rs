//! Simulated data access layer.
//!
//! [`DataService`] wraps the synthetic generators behind `async` requests that
//! suspend on the injected [`Clock`] for a configured latency before
//! answering, standing in for a remote grid data API.

pub mod clock;
pub mod optimization;

use std::ops::RangeInclusive;

use parking_lot::Mutex;
use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use crate::config::LatencyConfig;
use crate::dashboard::DashboardSnapshot;
use crate::error::{Result, ServiceError};
use crate::forecast::ForecastParameters;
use crate::generator::consumption::MAX_SERIES_DAYS;
use crate::generator::{
    self, CombinedConsumption, ConsumptionPoint, DistrictConsumption, EnergyMixShare,
    OptimizationScenario,
};

pub use clock::{Clock, FixedClock, SystemClock};
pub use optimization::OptimizationParams;

/// Default number of historical days requested by the dashboard.
pub const DEFAULT_HISTORICAL_DAYS: u32 = 30;
/// Default forecast horizon requested by the dashboard.
pub const DEFAULT_FORECAST_DAYS: u32 = 7;
/// Days of history fetched by a forecast request to anchor its first point.
pub const CONTINUITY_DAYS: u32 = 3;
/// Accepted historical day counts.
pub const HISTORY_DAYS: RangeInclusive<u32> = 0..=MAX_SERIES_DAYS;

/// Checks a historical day count against [`HISTORY_DAYS`].
///
/// # Errors
///
/// Returns [`ServiceError::InvalidParameter`] for `historical_days`.
pub fn validate_historical_days(days: u32) -> Result<()> {
    if HISTORY_DAYS.contains(&days) {
        Ok(())
    } else {
        Err(ServiceError::invalid(
            "historical_days",
            format!("must be at most {MAX_SERIES_DAYS}, got {days}"),
        ))
    }
}

/// Asynchronous front for the synthetic data generators.
///
/// Requests share nothing but the random source, which is locked only while
/// a generator runs and never across a suspension point.
pub struct DataService<C> {
    clock: C,
    latency: LatencyConfig,
    rng: Mutex<StdRng>,
}

impl<C: Clock> DataService<C> {
    /// Creates a service with the given clock and latency.
    ///
    /// # Arguments
    ///
    /// * `clock` - Source of "now" and of simulated latency
    /// * `latency` - Per-request delays
    /// * `seed` - Random seed; `None` seeds from the operating system
    pub fn new(clock: C, latency: LatencyConfig, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            clock,
            latency,
            rng: Mutex::new(rng),
        }
    }

    pub fn latency(&self) -> &LatencyConfig {
        &self.latency
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock();
        f(&mut *rng)
    }

    /// Historical consumption for the last `days` days, ending now.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidParameter`] if `days` is outside
    /// [`HISTORY_DAYS`].
    pub async fn get_historical_consumption(&self, days: u32) -> Result<Vec<ConsumptionPoint>> {
        validate_historical_days(days)?;
        debug!(days, "historical consumption requested");
        self.clock.sleep(self.latency.historical()).await;

        let now = self.clock.now();
        Ok(self.with_rng(|rng| generator::generate_historical_data(days, now, rng)))
    }

    /// Forecast consumption for the next `params.forecast_days` days.
    ///
    /// After its own latency, the request fetches [`CONTINUITY_DAYS`] of
    /// history (paying the historical latency too) and anchors the forecast
    /// on its last value. Only the horizon shapes the output; the other
    /// parameters are validated and logged.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::InvalidParameter`] if `params` are out of range.
    pub async fn get_forecast_consumption(
        &self,
        params: &ForecastParameters,
    ) -> Result<Vec<ConsumptionPoint>> {
        params.validate()?;
        let days = params.forecast_days;
        debug!(
            days,
            model = %params.forecast_model,
            seasonality = %params.seasonality,
            confidence = params.confidence_interval,
            include_weather = params.include_weather,
            "forecast consumption requested"
        );
        self.clock.sleep(self.latency.forecast()).await;

        let recent = self.get_historical_consumption(CONTINUITY_DAYS).await?;
        let now = self.clock.now();
        Ok(self.with_rng(|rng| generator::generate_forecast_data(days, &recent, now, rng)))
    }

    /// Historical then forecast consumption, fetched one after the other.
    ///
    /// The forecast uses the default form parameters with `forecast_days`
    /// substituted, so the horizon is checked against 1-30 days.
    ///
    /// # Errors
    ///
    /// Propagates errors from the historical and forecast requests.
    pub async fn get_combined_consumption_data(
        &self,
        historical_days: u32,
        forecast_days: u32,
    ) -> Result<CombinedConsumption> {
        let params = ForecastParameters {
            forecast_days,
            ..ForecastParameters::default()
        };
        validate_historical_days(historical_days)?;
        params.validate()?;

        let historical = self.get_historical_consumption(historical_days).await?;
        let forecast = self.get_forecast_consumption(&params).await?;
        Ok(CombinedConsumption::new(historical, forecast))
    }

    /// Current generation mix.
    pub async fn get_energy_mix_data(&self) -> Vec<EnergyMixShare> {
        debug!("energy mix requested");
        self.clock.sleep(self.latency.energy_mix()).await;
        generator::generate_energy_mix_data()
    }

    /// Procurement scenarios as currently planned.
    pub async fn get_optimization_scenarios(&self) -> Vec<OptimizationScenario> {
        debug!("optimization scenarios requested");
        self.clock.sleep(self.latency.scenarios()).await;
        generator::generate_optimization_scenarios()
    }

    /// Re-plans the procurement scenarios under `params`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for out-of-range parameters and
    /// `GenerationFailure` if the scenario list lacks an adjusted slot.
    pub async fn run_optimization(
        &self,
        params: &OptimizationParams,
    ) -> Result<Vec<OptimizationScenario>> {
        params.validate()?;
        debug!(?params, "optimization run requested");
        self.clock.sleep(self.latency.optimization()).await;

        let mut scenarios = generator::generate_optimization_scenarios();
        self.with_rng(|rng| optimization::apply_optimization(&mut scenarios, params, rng))?;
        info!(scenarios = scenarios.len(), "optimization run complete");
        Ok(scenarios)
    }

    /// District-level consumption breakdown.
    pub async fn get_district_data(&self) -> Vec<DistrictConsumption> {
        debug!("district data requested");
        self.clock.sleep(self.latency.districts()).await;
        self.with_rng(generator::generate_district_data)
    }

    /// Loads everything the dashboard shows on first render.
    ///
    /// Consumption, energy mix and scenarios are requested concurrently, so
    /// the wait is the longest of the three rather than their sum. Day counts
    /// are checked before any request starts.
    ///
    /// # Errors
    ///
    /// Propagates errors from the consumption request.
    pub async fn load_dashboard(
        &self,
        historical_days: u32,
        forecast_days: u32,
    ) -> Result<DashboardSnapshot> {
        validate_historical_days(historical_days)?;
        ForecastParameters {
            forecast_days,
            ..ForecastParameters::default()
        }
        .validate()?;

        let (consumption, energy_mix, scenarios) = tokio::join!(
            self.get_combined_consumption_data(historical_days, forecast_days),
            self.get_energy_mix_data(),
            self.get_optimization_scenarios(),
        );

        let snapshot = DashboardSnapshot {
            consumption: consumption?,
            energy_mix,
            scenarios,
        };
        info!(
            points = snapshot.consumption.combined.len(),
            scenarios = snapshot.scenarios.len(),
            "dashboard data loaded"
        );
        Ok(snapshot)
    }
}
