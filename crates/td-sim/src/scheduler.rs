//! `FrameLoop` — the per-surface refresh-callback chain as an explicit state.
//!
//! A host refresh callback re-arms itself at the end of each frame.  Rather
//! than letting that chain live implicitly, each panel tracks whether a
//! callback is currently requested and whether it will re-request after the
//! next frame:
//!
//! ```text
//!              resume                       stop
//!   ┌──────┐ ─────────▶ ┌─────────┐ ─────────────────▶ ┌──────────────────────┐
//!   │ Idle │            │ Running │                    │ StoppingAfterCurrent │
//!   └──────┘ ◀───┐      └─────────┘ ◀───────────────── └──────────────────────┘
//!                │                        resume                  │
//!                └────────────────────────────────────────────────┘
//!                          residual frame completes
//! ```
//!
//! `Running` and `StoppingAfterCurrent` both hold exactly one outstanding
//! request, so a panel can never be driven by two chains at once.

use std::fmt;

/// State of one panel's refresh chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum LoopState {
    /// No callback requested; refreshes skip this panel.
    #[default]
    Idle,
    /// A callback is requested and will be re-requested after it runs.
    Running,
    /// A callback is still requested, but the chain ends after it runs.
    StoppingAfterCurrent,
}

impl fmt::Display for LoopState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LoopState::Idle                 => "idle",
            LoopState::Running              => "running",
            LoopState::StoppingAfterCurrent => "stopping-after-current",
        })
    }
}

/// One panel's refresh chain.
#[derive(Clone, Debug, Default)]
pub struct FrameLoop {
    state: LoopState,
}

impl FrameLoop {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// `true` if a callback is outstanding, i.e. the next refresh runs a frame.
    #[inline]
    pub fn is_armed(&self) -> bool {
        self.state != LoopState::Idle
    }

    /// Enter the continuous cycle.
    ///
    /// From `Idle` this issues the single new request.  From
    /// `StoppingAfterCurrent` the outstanding residual request is adopted
    /// instead of issuing a second one.  Returns the previous state.
    pub fn resume(&mut self) -> LoopState {
        let prev = self.state;
        self.state = LoopState::Running;
        prev
    }

    /// Let the chain lapse after the outstanding request, if any, has run.
    /// Returns the previous state.
    pub fn stop(&mut self) -> LoopState {
        let prev = self.state;
        if prev == LoopState::Running {
            self.state = LoopState::StoppingAfterCurrent;
        }
        prev
    }

    /// Record that the outstanding request has just been serviced.
    ///
    /// A running chain re-requests; a stopping chain goes idle.  Returns the
    /// `(from, to)` pair if the state changed.
    pub fn complete_frame(&mut self) -> Option<(LoopState, LoopState)> {
        let prev = self.state;
        self.state = match prev {
            LoopState::Running => LoopState::Running,
            LoopState::StoppingAfterCurrent | LoopState::Idle => LoopState::Idle,
        };
        (prev != self.state).then_some((prev, self.state))
    }
}
