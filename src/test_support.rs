//! Deterministic helpers shared by unit tests.

use chrono::{DateTime, Local, TimeDelta, TimeZone, Utc};
use mockable::Clock;
use std::sync::atomic::{AtomicI64, Ordering};

/// Clock that starts at a fixed instant and advances one second per read.
#[derive(Debug, Default)]
pub struct SteppingClock {
    ticks: AtomicI64,
}

impl SteppingClock {
    /// First instant returned by the clock.
    #[must_use]
    pub fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0)
            .single()
            .unwrap_or_default()
    }
}

impl Clock for SteppingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        Self::epoch() + TimeDelta::seconds(tick)
    }
}

/// Clock that starts at [`SteppingClock::epoch`] and steps back one second
/// per read.
#[derive(Debug, Default)]
pub struct RewindingClock {
    ticks: AtomicI64,
}

impl Clock for RewindingClock {
    fn local(&self) -> DateTime<Local> {
        self.utc().with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        let tick = self.ticks.fetch_add(1, Ordering::SeqCst);
        SteppingClock::epoch() - TimeDelta::seconds(tick)
    }
}
