//! Clock abstraction behind the data service: "now" and request latency.

use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, FixedOffset, Local};

/// Source of "now" and of the suspension used to simulate request latency.
///
/// The data service never reads the wall clock or sleeps directly, so tests
/// can pin the generation instant and run on tokio's paused clock.
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use power_vision::service::clock::{Clock, FixedClock};
///
/// let now = DateTime::parse_from_rfc3339("2026-10-19T10:30:00+05:30").unwrap();
/// let clock = FixedClock::new(now);
/// assert_eq!(clock.now(), now);
/// ```
pub trait Clock: Send + Sync {
    /// Current instant, in the offset display strings should use.
    fn now(&self) -> DateTime<FixedOffset>;

    /// Suspends the calling task for `duration`.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Local wall clock with tokio timers.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

/// Clock pinned to one instant.
///
/// Sleeps still go through tokio timers, so latency is observable under
/// `#[tokio::test(start_paused = true)]` without real time passing.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    now: DateTime<FixedOffset>,
}

impl FixedClock {
    pub fn new(now: DateTime<FixedOffset>) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.now
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}
