//! Command-line argument parsing.

use std::env;
use std::path::PathBuf;

/// Default API server port.
pub const DEFAULT_PORT: u16 = 3000;

/// Parsed CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub config: Option<PathBuf>,
    pub preset: Option<String>,
    pub seed: Option<u64>,
    pub historical_days: Option<u32>,
    pub forecast_days: Option<u32>,
    pub optimize: bool,
    pub export_csv: Option<PathBuf>,
    pub serve: bool,
    pub port: u16,
    pub help: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            config: None,
            preset: None,
            seed: None,
            historical_days: None,
            forecast_days: None,
            optimize: false,
            export_csv: None,
            serve: false,
            port: DEFAULT_PORT,
            help: false,
        }
    }
}

/// Parses the process arguments.
///
/// # Errors
///
/// Returns a message describing the first invalid argument.
pub fn parse_args() -> Result<CliOptions, String> {
    let args: Vec<String> = env::args().skip(1).collect();
    parse_args_from(&args)
}

/// Parses an argument list (without the program name).
///
/// # Errors
///
/// Returns a message describing the first invalid argument.
pub fn parse_args_from(args: &[String]) -> Result<CliOptions, String> {
    let mut opts = CliOptions::default();
    let mut i = 0usize;

    while i < args.len() {
        match args[i].as_str() {
            "--config" => {
                i += 1;
                let path =
                    args.next_or_err(i, "missing value for --config (expected a TOML file path)")?;
                if opts.config.replace(PathBuf::from(path)).is_some() {
                    return Err("--config provided more than once".to_string());
                }
            }
            "--preset" => {
                i += 1;
                let name =
                    args.next_or_err(i, "missing value for --preset (expected a preset name)")?;
                if opts.preset.replace(name.to_string()).is_some() {
                    return Err("--preset provided more than once".to_string());
                }
            }
            "--seed" => {
                i += 1;
                opts.seed = Some(parse_number(args, i, "--seed", "u64")?);
            }
            "--historical-days" => {
                i += 1;
                opts.historical_days = Some(parse_number(args, i, "--historical-days", "u32")?);
            }
            "--forecast-days" => {
                i += 1;
                opts.forecast_days = Some(parse_number(args, i, "--forecast-days", "u32")?);
            }
            "--optimize" => opts.optimize = true,
            "--export-csv" => {
                i += 1;
                let path =
                    args.next_or_err(i, "missing value for --export-csv (expected a file path)")?;
                opts.export_csv = Some(PathBuf::from(path));
            }
            "--serve" => opts.serve = true,
            "--port" => {
                i += 1;
                opts.port = parse_number(args, i, "--port", "u16")?;
            }
            "--help" | "-h" => opts.help = true,
            other => return Err(format!("unknown argument: {other}")),
        }
        i += 1;
    }

    if opts.config.is_some() && opts.preset.is_some() {
        return Err(
            "arguments `--config` and `--preset` are mutually exclusive; choose one source"
                .to_string(),
        );
    }

    Ok(opts)
}

fn parse_number<T: std::str::FromStr>(
    args: &[String],
    index: usize,
    flag: &str,
    kind: &str,
) -> Result<T, String> {
    let raw = args.next_or_err(index, &format!("missing value for {flag} (expected a {kind})"))?;
    raw.parse::<T>()
        .map_err(|_| format!("{flag} value \"{raw}\" is not a valid {kind}"))
}

trait SliceArgExt {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String>;
}

impl SliceArgExt for [String] {
    fn next_or_err(&self, index: usize, err: &str) -> Result<&str, String> {
        self.get(index)
            .map(String::as_str)
            .ok_or_else(|| err.to_string())
    }
}

pub fn print_usage() {
    eprintln!("power-vision: grid consumption dashboard backed by synthetic data");
    eprintln!();
    eprintln!("Usage: power-vision [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>          Load configuration from a TOML file");
    eprintln!("  --preset <name>          Use a built-in preset (default, instant)");
    eprintln!("  --seed <u64>             Override the random seed");
    eprintln!("  --historical-days <n>    Days of history to load");
    eprintln!("  --forecast-days <n>      Days to forecast (1-30)");
    eprintln!("  --optimize               Run an optimization with the configured parameters");
    eprintln!("  --export-csv <path>      Export the combined series to CSV");
    eprintln!("  --serve                  Start the REST API server (requires the `api` feature)");
    eprintln!("  --port <u16>             API server port (default: 3000)");
    eprintln!("  --help                   Show this help message");
    eprintln!();
    eprintln!("If no --config or --preset is given, the default preset is used.");
}
