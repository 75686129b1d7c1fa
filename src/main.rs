//! Power Vision entry point: CLI wiring and config-driven dashboard load.

use std::path::Path;
use std::process;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use power_vision::cli::{self, CliOptions};
use power_vision::config::DashboardConfig;
use power_vision::dashboard::MixTable;
use power_vision::io::export::export_csv;
use power_vision::service::{DataService, SystemClock};

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("power_vision=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the configuration selected on the command line and applies overrides.
fn load_config(cli: &CliOptions) -> DashboardConfig {
    // --config takes priority, then --preset, then the default preset
    let loaded = if let Some(ref path) = cli.config {
        DashboardConfig::from_toml_file(path)
    } else if let Some(ref name) = cli.preset {
        DashboardConfig::from_preset(name)
    } else {
        Ok(DashboardConfig::standard())
    };
    let mut config = loaded.unwrap_or_else(|e| {
        eprintln!("{e}");
        process::exit(1);
    });

    if let Some(seed) = cli.seed {
        config.service.seed = Some(seed);
    }
    if let Some(days) = cli.historical_days {
        config.dashboard.historical_days = days;
    }
    if let Some(days) = cli.forecast_days {
        config.forecast.forecast_days = days;
    }

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }
    config
}

/// Loads the dashboard, prints it, and runs the optional follow-up actions.
async fn run(config: DashboardConfig, cli: &CliOptions) -> Result<(), String> {
    let service = DataService::new(SystemClock, config.latency.clone(), config.service.seed);
    let view = &config.dashboard;
    let forecast_days = config.forecast.forecast_days;

    info!(historical_days = view.historical_days, forecast_days, "loading dashboard data");
    let snapshot = service
        .load_dashboard(view.historical_days, forecast_days)
        .await
        .map_err(|e| format!("failed to load dashboard data: {e}"))?;

    println!("{}", snapshot.stats());
    println!("\n--- Energy Mix (* renewable) ---");
    print!("{}", MixTable(&snapshot.energy_mix));
    println!("\n--- Consumption Data ---");
    print!("{}", snapshot.recent(view.table_rows));
    println!("\n--- Optimization Scenarios ---");
    for scenario in &snapshot.scenarios {
        println!("{scenario}");
    }
    if let Some(selected) = snapshot.initial_selection() {
        println!("Selected: {}", selected.name);
    }

    // Only the horizon reaches the generator; the rest of the form is logged.
    info!(params = ?config.forecast, "forecast parameters");

    if cli.optimize {
        let scenarios = service
            .run_optimization(&config.optimization)
            .await
            .map_err(|e| format!("optimization failed: {e}"))?;
        println!("\n--- Optimized Scenarios ---");
        for scenario in &scenarios {
            println!("{scenario}");
        }
    }

    if let Some(ref path) = cli.export_csv {
        export_csv(&snapshot.consumption.combined, Path::new(path))
            .map_err(|e| format!("failed to write CSV: {e}"))?;
        info!(path = %path.display(), "consumption series exported");
    }

    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(power_vision::api::AppState {
            service,
            defaults: config.dashboard.clone(),
            forecast: config.forecast.clone(),
        });
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        power_vision::api::serve(state, addr)
            .await
            .map_err(|e| format!("API server error: {e}"))?;
    }
    #[cfg(not(feature = "api"))]
    if cli.serve {
        return Err("--serve requires building with the `api` feature".to_string());
    }

    Ok(())
}

fn main() {
    let cli = match cli::parse_args() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("error: {e}");
            cli::print_usage();
            process::exit(1);
        }
    };
    if cli.help {
        cli::print_usage();
        return;
    }

    init_tracing();
    let config = load_config(&cli);

    let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("error: failed to create tokio runtime: {e}");
        process::exit(1);
    });
    if let Err(e) = rt.block_on(run(config, &cli)) {
        error!("{e}");
        eprintln!("error: {e}");
        process::exit(1);
    }
}
