//! Time-of-day window and wait range used by the drop scheduler.

use chrono::{DateTime, FixedOffset, NaiveTime, Utc};
use rand::Rng;
use std::time::Duration;

use crate::error::config::ConfigError;

/// Daily local time range during which drops may be posted.
///
/// Both bounds are inclusive and compared as plain times of day, so a window
/// cannot wrap past midnight; construction rejects `start > end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl DropWindow {
    /// Creates a window from inclusive start and end times.
    ///
    /// # Returns
    /// - `Ok(DropWindow)` - Valid window
    /// - `Err(ConfigError::InvalidDropSettings)` - `start` is after `end`
    pub fn new(start: NaiveTime, end: NaiveTime) -> Result<Self, ConfigError> {
        if start > end {
            return Err(ConfigError::InvalidDropSettings(format!(
                "window start {} is after window end {}",
                start, end
            )));
        }

        Ok(Self { start, end })
    }

    /// Whether the given local time of day falls inside the window.
    pub fn contains(&self, time: NaiveTime) -> bool {
        self.start <= time && time <= self.end
    }

    /// Inclusive local start time.
    pub fn start(&self) -> NaiveTime {
        self.start
    }

    /// Inclusive local end time.
    pub fn end(&self) -> NaiveTime {
        self.end
    }
}

/// Inclusive range of seconds to wait between arming and firing a drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaitRange {
    min_secs: u64,
    max_secs: u64,
}

impl WaitRange {
    /// Creates a wait range.
    ///
    /// # Returns
    /// - `Ok(WaitRange)` - Valid range
    /// - `Err(ConfigError::InvalidDropSettings)` - `min_secs` is greater than `max_secs`
    pub fn new(min_secs: u64, max_secs: u64) -> Result<Self, ConfigError> {
        if min_secs > max_secs {
            return Err(ConfigError::InvalidDropSettings(format!(
                "minimum wait {}s is greater than maximum wait {}s",
                min_secs, max_secs
            )));
        }

        Ok(Self { min_secs, max_secs })
    }

    /// Samples a uniformly random delay within the range.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        Duration::from_secs(rng.random_range(self.min_secs..=self.max_secs))
    }

    pub fn min(&self) -> Duration {
        Duration::from_secs(self.min_secs)
    }

    pub fn max(&self) -> Duration {
        Duration::from_secs(self.max_secs)
    }
}

/// Source of the current local time for window checks.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Wall clock pinned to a fixed UTC offset, independent of the host time zone.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    offset: FixedOffset,
}

impl SystemClock {
    pub fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&self.offset)
    }
}
