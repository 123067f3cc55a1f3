//! `SignalActor` — a traffic light cycling between STOP and OPEN.
//!
//! # State machine
//!
//! ```text
//!            timer > threshold
//!   ┌──────┐ ─────────────────▶ ┌──────┐
//!   │ STOP │                    │ OPEN │
//!   └──────┘ ◀───────────────── └──────┘
//!            timer > threshold
//! ```
//!
//! Every tick increments the timer; when it exceeds the threshold the phase
//! flips and the timer returns to 0.  With the default threshold of 100 a
//! phase is held for 101 ticks.  The machine has no terminal state.

use td_core::{Color, Extent, Point, SimRng};
use td_surface::Surface;

use crate::Entity;

/// Disc radius for every signal.
pub const SIGNAL_RADIUS: f32 = 10.0;

/// The four intersection corners of the reference signal grid.
pub const SIGNAL_GRID: [Point; 4] = [
    Point::new(100.0, 100.0),
    Point::new(300.0, 100.0),
    Point::new(100.0, 300.0),
    Point::new(300.0, 300.0),
];

/// Discrete signal state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    Open,
    #[default]
    Stop,
}

impl Phase {
    #[inline]
    pub fn flipped(self) -> Phase {
        match self {
            Phase::Open => Phase::Stop,
            Phase::Stop => Phase::Open,
        }
    }

    /// Fill color for this phase.
    pub fn color(self) -> Color {
        match self {
            Phase::Open => Color::rgb(0, 128, 0),
            Phase::Stop => Color::rgb(255, 0, 0),
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Phase::Open => "OPEN",
            Phase::Stop => "STOP",
        })
    }
}

/// A fixed-position traffic signal.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SignalActor {
    position:  Point,
    phase:     Phase,
    timer:     u32,
    threshold: u32,
}

impl SignalActor {
    /// A signal at `position` in the initial STOP phase.
    pub fn new(position: Point, threshold: u32) -> Self {
        Self {
            position,
            phase: Phase::Stop,
            timer: 0,
            threshold,
        }
    }

    /// One signal per grid position, in the given order.
    pub fn grid(positions: &[Point], threshold: u32) -> Vec<SignalActor> {
        positions.iter().map(|&p| SignalActor::new(p, threshold)).collect()
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.position
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Ticks since the last phase flip.
    #[inline]
    pub fn timer(&self) -> u32 {
        self.timer
    }

    #[inline]
    pub fn threshold(&self) -> u32 {
        self.threshold
    }
}

impl Entity for SignalActor {
    fn advance(&mut self, _extent: Extent) {
        self.timer += 1;
        if self.timer > self.threshold {
            self.timer = 0;
            self.phase = self.phase.flipped();
        }
    }

    fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_circle(self.position.x, self.position.y, SIGNAL_RADIUS, self.phase.color());
    }

    fn reset(&mut self, _extent: Extent, _rng: &mut SimRng) {
        self.phase = Phase::Stop;
        self.timer = 0;
    }
}
