//! Frame time model.
//!
//! Time is a monotonically increasing `Tick` counter, one per frame-scheduler
//! invocation on a given surface.  There is no wall-clock mapping: the host's
//! refresh cadence decides how often ticks happen, and a slow frame simply
//! delays the next one.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute frame counter for one surface.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── FrameClock ────────────────────────────────────────────────────────────────

/// Counts frames rendered on one surface.
///
/// The clock is never rewound: resetting entities does not reset the count of
/// frames already drawn.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameClock {
    /// The tick the next frame will run as.
    pub current_tick: Tick,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by one tick.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    /// Frames completed so far.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.current_tick.0
    }
}

impl fmt::Display for FrameClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} frames)", self.current_tick, self.frames())
    }
}
