// src/cache/clock.rs
// =============================================================================
// A tiny abstraction over "what time is it now?".
//
// The cache decides freshness by comparing the current time with the time an
// entry was stored. Reading the wall clock directly would make the 5-minute
// window impossible to test without actually waiting, so the cache asks a
// Clock instead. Production code uses SystemClock; tests use ManualClock and
// move time forward by hand.
// =============================================================================

use chrono::{DateTime, Utc};

// Anything that can report the current UTC time
//
// Send + Sync so a clock can live inside an Arc shared across tasks
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

// The real wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

// A clock that only moves when told to
#[cfg(test)]
#[derive(Debug)]
pub struct ManualClock {
    now: std::sync::Mutex<DateTime<Utc>>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: std::sync::Mutex::new(start),
        }
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.now.lock().unwrap();
        *now += by;
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_manual_clock_advances() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        let clock = ManualClock::new(start);
        assert_eq!(clock.now(), start);

        clock.advance(Duration::minutes(5));
        assert_eq!(clock.now(), start + Duration::minutes(5));
    }
}
