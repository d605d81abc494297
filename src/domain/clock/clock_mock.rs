use std::sync::{Arc, RwLock};

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use crate::domain::clock::clock::Clock;

/// Settable clock shared between a test and the component under test.
#[derive(Debug, Clone)]
pub struct MockClock {
    pub time: Arc<RwLock<NaiveDateTime>>,
}

impl MockClock {
    pub fn new(time: NaiveDateTime) -> MockClock {
        MockClock { time: Arc::new(RwLock::new(time)) }
    }

    /// Clock fixed at `h:m:s` on an arbitrary date. Returns `None` for an invalid time.
    pub fn at_hms(h: u32, m: u32, s: u32) -> Option<MockClock> {
        let time = NaiveDate::from_ymd_opt(2024, 4, 1)?.and_hms_opt(h, m, s)?;
        Some(MockClock::new(time))
    }

    pub fn set_current_time(&self, time: NaiveDateTime) {
        if let Ok(mut guard) = self.time.write() {
            *guard = time;
        }
    }

    pub fn advance(&self, delta: TimeDelta) {
        if let Ok(mut guard) = self.time.write() {
            *guard += delta;
        }
    }
}

impl Clock for MockClock {
    fn now(&self) -> NaiveDateTime {
        match self.time.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}
