//! Frame observer trait for progress reporting and tests.

use td_core::{SurfaceId, Tick};

use crate::LoopState;

/// Callbacks invoked by [`Dashboard::on_refresh`][crate::Dashboard::on_refresh].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
pub trait FrameObserver {
    /// Called just before a panel runs its frame.
    fn on_frame_start(&mut self, _surface: SurfaceId, _tick: Tick) {}

    /// Called after the panel has advanced and redrawn every entity.
    fn on_frame_end(&mut self, _surface: SurfaceId, _tick: Tick) {}

    /// Called when a panel's frame loop changes state at the end of a frame.
    fn on_state_change(&mut self, _surface: SurfaceId, _from: LoopState, _to: LoopState) {}
}

/// A [`FrameObserver`] that does nothing.
pub struct NoopObserver;

impl FrameObserver for NoopObserver {}
