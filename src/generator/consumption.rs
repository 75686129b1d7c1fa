//! Historical and forecast consumption series.

use chrono::{DateTime, Datelike, FixedOffset, TimeDelta, Timelike, Utc, Weekday};
use rand::Rng;

use super::types::ConsumptionPoint;

/// Lower bound of the sampled base demand (MW, inclusive).
pub const BASE_CONSUMPTION_MIN_MW: f64 = 15_000.0;
/// Upper bound of the sampled base demand (MW, exclusive).
pub const BASE_CONSUMPTION_MAX_MW: f64 = 18_000.0;
/// Forecast anchor used when no historical series is available (MW).
pub const DEFAULT_ANCHOR_MW: f64 = 16_000.0;
/// Demand multiplier applied on Saturdays and Sundays.
pub const WEEKEND_FACTOR: f64 = 0.85;
/// Half-width of the additive forecast noise (MW).
pub const FORECAST_NOISE_MW: f64 = 500.0;
/// Display time carried by every forecast point.
pub const FORECAST_DISPLAY_TIME: &str = "12:00";
/// Longest series either generator produces, in days (about ten years).
pub const MAX_SERIES_DAYS: u32 = 3650;

const DATE_FORMAT: &str = "%d/%m/%Y";
const TIME_FORMAT: &str = "%H:%M";

/// Time-of-day demand multiplier for the given hour (0-23).
///
/// Morning peak `[9, 12]` -> 1.2, evening peak `[18, 21]` -> 1.3, night low
/// `[0, 5]` -> 0.7, otherwise 1.0.
pub fn time_of_day_factor(hour: u32) -> f64 {
    match hour {
        9..=12 => 1.2,
        18..=21 => 1.3,
        0..=5 => 0.7,
        _ => 1.0,
    }
}

/// Whether the instant falls on a Saturday or Sunday in its own offset.
pub fn is_weekend(instant: &DateTime<FixedOffset>) -> bool {
    matches!(instant.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Generates the historical consumption series ending at `now`.
///
/// Produces `days + 1` points, one per day, in ascending order with the last
/// one at `now`. Each day draws a base demand uniformly from
/// `[15000, 18000)` MW, applies the weekend factor, then the time-of-day
/// factor. The time-of-day factor comes from `now.hour()` and is shared by
/// every point in the series. `days` is capped at [`MAX_SERIES_DAYS`].
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use rand::{SeedableRng, rngs::StdRng};
/// use power_vision::generator::generate_historical_data;
///
/// let now = DateTime::parse_from_rfc3339("2026-10-19T14:00:00+05:30").unwrap();
/// let mut rng = StdRng::seed_from_u64(42);
/// let series = generate_historical_data(30, now, &mut rng);
/// assert_eq!(series.len(), 31);
/// assert!(series.iter().all(|p| !p.predicted));
/// ```
pub fn generate_historical_data<R: Rng + ?Sized>(
    days: u32,
    now: DateTime<FixedOffset>,
    rng: &mut R,
) -> Vec<ConsumptionPoint> {
    let hour_factor = time_of_day_factor(now.hour());

    (0..=days.min(MAX_SERIES_DAYS))
        .rev()
        .map(|days_back| {
            let instant = now - TimeDelta::days(i64::from(days_back));

            let mut consumption =
                rng.random_range(BASE_CONSUMPTION_MIN_MW..BASE_CONSUMPTION_MAX_MW);
            if is_weekend(&instant) {
                consumption *= WEEKEND_FACTOR;
            }
            consumption *= hour_factor;

            let time = instant.format(TIME_FORMAT).to_string();
            point(instant, consumption, time, false)
        })
        .collect()
}

/// Generates a forecast series for the `days` days following `now`.
///
/// Every point is anchored on the last value of `base` (or 16000 MW when
/// `base` is empty): `anchor * U(0.95, 1.05)`, reduced by the weekend factor
/// on Saturdays and Sundays, plus uniform noise in `[-500, 500)` MW. Demand is
/// clamped at zero.
///
/// # Arguments
///
/// * `days` - Number of forecast points, capped at [`MAX_SERIES_DAYS`]; the
///   first falls one day after `now`
/// * `base` - Recent historical series used for continuity
/// * `now` - Generation instant
/// * `rng` - Random source
///
/// # Returns
///
/// `days` points flagged `predicted`, one day apart, with display time `12:00`.
pub fn generate_forecast_data<R: Rng + ?Sized>(
    days: u32,
    base: &[ConsumptionPoint],
    now: DateTime<FixedOffset>,
    rng: &mut R,
) -> Vec<ConsumptionPoint> {
    let anchor = base.last().map_or(DEFAULT_ANCHOR_MW, |p| p.consumption);

    (1..=days.min(MAX_SERIES_DAYS))
        .map(|days_ahead| {
            let instant = now + TimeDelta::days(i64::from(days_ahead));

            let mut consumption = anchor * rng.random_range(0.95..1.05);
            if is_weekend(&instant) {
                consumption *= WEEKEND_FACTOR;
            }
            consumption += rng.random_range(-FORECAST_NOISE_MW..FORECAST_NOISE_MW);

            point(instant, consumption, FORECAST_DISPLAY_TIME.to_string(), true)
        })
        .collect()
}

fn point(
    instant: DateTime<FixedOffset>,
    consumption: f64,
    time: String,
    predicted: bool,
) -> ConsumptionPoint {
    ConsumptionPoint {
        timestamp: instant.with_timezone(&Utc),
        consumption: consumption.max(0.0).round(), // no negative demand
        date: instant.format(DATE_FORMAT).to_string(),
        time,
        predicted,
    }
}
