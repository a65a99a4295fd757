//! Simulation time model.
//!
//! The only time unit is the whole simulated day.  All infection and
//! recovery thresholds are measured in `Day`s, so timer arithmetic is exact.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Day ───────────────────────────────────────────────────────────────────────

/// An absolute simulated-day counter, starting at day 0.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Serialize, Deserialize,
)]
pub struct Day(pub u32);

impl Day {
    pub const ZERO: Day = Day(0);

    /// Days elapsed from `earlier` to `self`; zero if `earlier` is later.
    #[inline]
    pub fn since(self, earlier: Day) -> u32 {
        self.0.saturating_sub(earlier.0)
    }

    #[inline]
    pub fn next(self) -> Day {
        Day(self.0 + 1)
    }
}

impl std::ops::Add<u32> for Day {
    type Output = Day;
    #[inline]
    fn add(self, rhs: u32) -> Day {
        Day(self.0 + rhs)
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Day {}", self.0)
    }
}

// ── DayClock ──────────────────────────────────────────────────────────────────

/// Tracks the current day and the last day of the run.
///
/// A run covers days `0..=last_day`, so it executes `last_day + 1` days and
/// appends that many rows to the time series.
#[derive(Clone, Debug)]
pub struct DayClock {
    pub current_day: Day,
    pub last_day:    Day,
}

impl DayClock {
    pub fn new(days: u32) -> Self {
        Self { current_day: Day::ZERO, last_day: Day(days) }
    }

    /// Advance the clock by one day.
    #[inline]
    pub fn advance(&mut self) {
        self.current_day = self.current_day.next();
    }

    /// `true` once every day up to and including `last_day` has run.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.current_day > self.last_day
    }
}

impl fmt::Display for DayClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.current_day.0, self.last_day.0)
    }
}
