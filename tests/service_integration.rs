//! Integration tests for the data service on tokio's paused clock.

mod common;

use std::time::Duration;

use tokio::time::Instant;

use power_vision::config::LatencyConfig;
use power_vision::error::ServiceError;
use power_vision::forecast::{ForecastModel, ForecastParameters};
use power_vision::generator::consumption::MAX_SERIES_DAYS;
use power_vision::generator::generate_optimization_scenarios;
use power_vision::service::{
    DEFAULT_FORECAST_DAYS, DEFAULT_HISTORICAL_DAYS, DataService, FixedClock, OptimizationParams,
};

fn elapsed_ms(start: Instant) -> u128 {
    start.elapsed().as_millis()
}

#[tokio::test(start_paused = true)]
async fn combined_series_is_historical_then_forecast() {
    let svc = common::seeded_service(42);
    let data = svc
        .get_combined_consumption_data(DEFAULT_HISTORICAL_DAYS, DEFAULT_FORECAST_DAYS)
        .await
        .expect("combined data");

    assert_eq!(data.historical.len(), 31);
    assert_eq!(data.forecast.len(), 7);
    assert_eq!(data.combined.len(), 38);
    assert!(data.combined[..31].iter().all(|p| !p.predicted));
    assert!(data.combined[31..].iter().all(|p| p.predicted));
    assert!(
        data.combined
            .windows(2)
            .all(|w| w[0].timestamp < w[1].timestamp)
    );
}

#[tokio::test(start_paused = true)]
async fn forecast_continues_from_recent_history() {
    let svc = common::seeded_service(7);
    let params = ForecastParameters {
        forecast_days: 5,
        ..ForecastParameters::default()
    };
    let forecast = svc
        .get_forecast_consumption(&params)
        .await
        .expect("forecast");

    assert_eq!(forecast.len(), 5);
    let now = common::fixed_now().to_utc();
    assert!(forecast[0].timestamp > now);
    assert_eq!(forecast[0].date, "20/10/2026");
}

#[tokio::test(start_paused = true)]
async fn forecast_model_does_not_change_the_output() {
    let lstm = common::seeded_service(3)
        .get_forecast_consumption(&ForecastParameters::default())
        .await
        .expect("lstm forecast");
    let params = ForecastParameters {
        forecast_model: ForecastModel::Prophet,
        ..ForecastParameters::default()
    };
    let prophet = common::seeded_service(3)
        .get_forecast_consumption(&params)
        .await
        .expect("prophet forecast");
    assert_eq!(lstm, prophet);
}

#[tokio::test(start_paused = true)]
async fn forecast_rejects_out_of_range_horizon() {
    let svc = common::seeded_service(1);
    for days in [0, 31, 100] {
        let params = ForecastParameters {
            forecast_days: days,
            ..ForecastParameters::default()
        };
        let err = svc.get_forecast_consumption(&params).await.unwrap_err();
        assert!(
            matches!(err, ServiceError::InvalidParameter { field, .. } if field == "forecast_days")
        );
    }
}

#[tokio::test(start_paused = true)]
async fn dashboard_requests_run_concurrently() {
    let svc = common::seeded_service(42);
    let start = Instant::now();
    let snapshot = svc.load_dashboard(30, 7).await.expect("dashboard");
    // combined (800 + 1000 + 800) dominates energy mix (800) and scenarios (1000)
    let ms = elapsed_ms(start);
    assert!((2600..2650).contains(&ms), "elapsed {ms} ms");

    assert_eq!(snapshot.consumption.combined.len(), 38);
    assert_eq!(snapshot.initial_selection().map(|s| s.id), Some(1));
}

#[tokio::test(start_paused = true)]
async fn sequential_requests_add_up() {
    let svc = common::seeded_service(42);
    let start = Instant::now();
    svc.get_energy_mix_data().await;
    svc.get_optimization_scenarios().await;
    svc.get_district_data().await;
    let ms = elapsed_ms(start);
    assert!((2600..2650).contains(&ms), "elapsed {ms} ms");
}

#[tokio::test(start_paused = true)]
async fn optimization_with_reference_params() {
    let svc = common::seeded_service(42);
    let base = generate_optimization_scenarios();
    let out = svc
        .run_optimization(&OptimizationParams::reference())
        .await
        .expect("optimization");

    assert_eq!(out.len(), 4);
    assert_eq!(out[0], base[0]);
    assert_eq!(out[3], base[3]);
    assert_eq!(out[1].renewable, 50.0);
    assert!(out[1].cost >= base[1].cost && out[1].cost <= base[1].cost * 1.05);
    assert!(out[1].carbon >= base[1].carbon * 0.90 && out[1].carbon <= base[1].carbon * 0.95);
    assert!((out[2].cost - 8.25).abs() < 1e-9);
    assert!(out[2].renewable >= 27.0 && out[2].renewable <= 30.0);
}

#[tokio::test(start_paused = true)]
async fn tight_renewable_cap_lowers_the_share() {
    let svc = common::seeded_service(42);
    let params = OptimizationParams {
        max_renewable: Some(40.0),
        ..OptimizationParams::default()
    };
    let out = svc.run_optimization(&params).await.expect("optimization");
    assert_eq!(out[1].renewable, 40.0);
}

#[tokio::test(start_paused = true)]
async fn optimization_does_not_leak_into_later_requests() {
    let svc = common::seeded_service(42);
    svc.run_optimization(&OptimizationParams::reference())
        .await
        .expect("optimization");
    assert_eq!(
        svc.get_optimization_scenarios().await,
        generate_optimization_scenarios()
    );
}

#[tokio::test(start_paused = true)]
async fn optimization_rejects_invalid_params() {
    let svc = common::seeded_service(42);
    let params = OptimizationParams {
        transmission_loss_pct: Some(-1.0),
        ..OptimizationParams::default()
    };
    let err = svc.run_optimization(&params).await.unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid parameter `transmission_loss_pct`: must be finite and in 0..=100, got -1"
    );
}

#[tokio::test(start_paused = true)]
async fn same_seed_same_data() {
    let a = common::seeded_service(99)
        .load_dashboard(14, 3)
        .await
        .expect("dashboard a");
    let b = common::seeded_service(99)
        .load_dashboard(14, 3)
        .await
        .expect("dashboard b");
    assert_eq!(a.consumption, b.consumption);
}

#[tokio::test]
async fn instant_latency_answers_immediately() {
    let svc = DataService::new(
        FixedClock::new(common::fixed_now()),
        LatencyConfig::instant(),
        Some(1),
    );
    let start = std::time::Instant::now();
    svc.load_dashboard(30, 7).await.expect("dashboard");
    assert!(start.elapsed() < Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn combined_checks_the_forecast_horizon() {
    let svc = common::seeded_service(1);
    let err = svc.get_combined_consumption_data(30, 0).await.unwrap_err();
    assert!(matches!(err, ServiceError::InvalidParameter { field: "forecast_days", .. }));
}

#[tokio::test(start_paused = true)]
async fn oversized_history_is_rejected_everywhere() {
    let svc = common::seeded_service(1);
    let start = Instant::now();

    let err = svc
        .get_historical_consumption(150_000_000)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidParameter { field: "historical_days", .. }));

    let err = svc
        .get_combined_consumption_data(u32::MAX, 7)
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::InvalidParameter { field: "historical_days", .. }));

    assert!(
        svc.load_dashboard(MAX_SERIES_DAYS + 1, 7)
            .await
            .is_err()
    );
    // rejected before any simulated latency
    assert_eq!(elapsed_ms(start), 0);
}

#[tokio::test(start_paused = true)]
async fn longest_history_is_served() {
    let svc = common::seeded_service(1);
    let series = svc
        .get_historical_consumption(MAX_SERIES_DAYS)
        .await
        .expect("history");
    assert_eq!(series.len(), MAX_SERIES_DAYS as usize + 1);
}
