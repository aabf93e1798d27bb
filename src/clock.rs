//! Time source used when deriving default output directories

use chrono::{Local, NaiveDateTime};

/// Supplies the current local date and time
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    /// Current date formatted as `YYYY-MM-DD`
    fn date_stamp(&self) -> String {
        self.now().format("%Y-%m-%d").to_string()
    }
}

/// Wall-clock time of the host
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock pinned to a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
