//! Simulation time model.
//!
//! The outer application drives the framework with one `update` call per
//! simulation step and passes the current simulation time along.
//! Time is a monotonically increasing millisecond counter; the framework
//! itself performs no wall-clock arithmetic, so a plain `u64` newtype is all
//! that is needed.

use std::fmt;

/// Milliseconds of simulation time since the application started.
///
/// A `u64` at 1 ms resolution lasts ~585 million years — no overflow handling
/// required.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimTime(pub u64);

impl SimTime {
    pub const ZERO: SimTime = SimTime(0);

    /// The time `ms` milliseconds after `self`.
    #[inline]
    pub fn offset(self, ms: u64) -> SimTime {
        SimTime(self.0 + ms)
    }

    /// Milliseconds elapsed from `earlier` to `self`.
    #[inline]
    pub fn since(self, earlier: SimTime) -> u64 {
        self.0 - earlier.0
    }

    /// Whole seconds represented by this time.
    #[inline]
    pub fn as_secs(self) -> u64 {
        self.0 / 1_000
    }
}

impl std::ops::Add<u64> for SimTime {
    type Output = SimTime;
    #[inline]
    fn add(self, rhs: u64) -> SimTime {
        SimTime(self.0 + rhs)
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.0)
    }
}
