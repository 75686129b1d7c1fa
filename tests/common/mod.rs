//! Shared test fixtures for integration tests.

#![allow(dead_code)]

use chrono::{DateTime, FixedOffset};

use power_vision::config::LatencyConfig;
use power_vision::service::{DataService, FixedClock};

/// A Monday morning in IST, inside the 09:00-12:59 peak window.
pub fn fixed_now() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2026-10-19T10:30:00+05:30").expect("valid timestamp")
}

/// A Saturday at 03:00 IST, inside the overnight trough.
pub fn weekend_night() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2026-10-24T03:00:00+05:30").expect("valid timestamp")
}

/// Service pinned to [`fixed_now`] with the default request latencies.
pub fn seeded_service(seed: u64) -> DataService<FixedClock> {
    DataService::new(
        FixedClock::new(fixed_now()),
        LatencyConfig::default(),
        Some(seed),
    )
}
