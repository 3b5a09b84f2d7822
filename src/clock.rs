//! Evaluation clock.
//!
//! The discount policy depends on the time of day. Calculation functions
//! take that time as a plain [`NaiveTime`] argument; a [`Clock`] supplies it
//! at the edges of the program (the HTTP handler and the demo binary).

use chrono::{Local, NaiveTime};

/// A source of the current local time of day.
pub trait Clock: Send + Sync {
    /// Returns the current local time of day.
    fn now(&self) -> NaiveTime;
}

/// Reads the system's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveTime {
        Local::now().time()
    }
}

/// Always reports the same time.
///
/// # Example
///
/// ```
/// use transaction_pricer::clock::{Clock, FixedClock};
/// use chrono::Timelike;
///
/// let clock = FixedClock::at_hour(15).unwrap();
/// assert_eq!(clock.now().hour(), 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(NaiveTime);

impl FixedClock {
    /// Creates a clock fixed at the given time.
    pub fn new(time: NaiveTime) -> Self {
        Self(time)
    }

    /// Creates a clock fixed at the top of the given hour.
    ///
    /// Returns `None` if `hour` is not a valid clock hour.
    pub fn at_hour(hour: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, 0, 0).map(Self)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveTime {
        self.0
    }
}
