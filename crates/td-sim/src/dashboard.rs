//! `Dashboard` — the simulation context and its lifecycle controller.

use td_core::{SurfaceId, Tick};
use td_entity::{Entity, MovingAgent, SignalActor};
use td_surface::Surface;
use tracing::debug;

use crate::{FrameObserver, LoopState, Panel, SimError, VisibilityGate};

/// Everything one running visualization owns: the running flag, the agent
/// flow panel, and the signal grid panel.
///
/// Either panel may be absent if its surface could not be acquired at build
/// time; every operation then simply skips it.
///
/// The host drives the dashboard by calling [`on_refresh`](Self::on_refresh)
/// once per display refresh.  All state is mutated from that single context.
///
/// Create via [`DashboardBuilder`][crate::DashboardBuilder].
pub struct Dashboard<S: Surface> {
    pub(crate) running:  bool,
    pub(crate) flow:     Option<Panel<S, MovingAgent>>,
    pub(crate) grid:     Option<Panel<S, SignalActor>>,
    pub(crate) gate:     VisibilityGate,
    pub(crate) failures: Vec<SimError>,
}

impl<S: Surface> Dashboard<S> {
    // ── Lifecycle commands ────────────────────────────────────────────────

    /// Enter the continuous cycle on both panels.
    ///
    /// No-op while already running.  A panel whose residual frame from an
    /// earlier `pause` is still pending adopts that request, so a panel is
    /// never driven twice per refresh.
    ///
    /// Also consumes a deferred visibility start, if one is still pending.
    pub fn start(&mut self) {
        self.gate.disarm();
        if self.running {
            return;
        }
        self.running = true;
        if let Some(p) = self.flow.as_mut() {
            let prev = p.frame_loop_mut().resume();
            debug!(surface = %p.id(), from = %prev, "frame loop resumed");
        }
        if let Some(p) = self.grid.as_mut() {
            let prev = p.frame_loop_mut().resume();
            debug!(surface = %p.id(), from = %prev, "frame loop resumed");
        }
    }

    /// Stop requesting new frames.
    ///
    /// A frame already requested still runs on the next refresh; after it the
    /// panel goes idle.  Entity state is untouched.
    pub fn pause(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        if let Some(p) = self.flow.as_mut() {
            p.frame_loop_mut().stop();
        }
        if let Some(p) = self.grid.as_mut() {
            p.frame_loop_mut().stop();
        }
        debug!("dashboard paused");
    }

    /// Re-randomize agent positions and return every signal to STOP.
    ///
    /// Speeds and radii are preserved; the running flag is unchanged.  The
    /// new state becomes visible on the next rendered frame.
    pub fn reset(&mut self) {
        if let Some(p) = self.flow.as_mut() {
            p.reset();
        }
        if let Some(p) = self.grid.as_mut() {
            p.reset();
        }
        debug!(running = self.running, "dashboard reset");
    }

    /// Feed the host's viewport-visibility signal.
    ///
    /// Under [`StartPolicy::WhenVisible`][crate::StartPolicy::WhenVisible] the
    /// first `true` starts the dashboard; everything else is ignored.
    pub fn notify_visible(&mut self, visible: bool) {
        if self.gate.notify(visible) {
            debug!("dashboard became visible");
            self.start();
        }
    }

    // ── Host refresh ──────────────────────────────────────────────────────

    /// Service one display refresh: every panel with an outstanding request
    /// runs exactly one frame, flow panel first.
    ///
    /// Returns the number of frames rendered (0, 1 or 2).
    pub fn on_refresh<O: FrameObserver>(&mut self, observer: &mut O) -> usize {
        let mut rendered = 0;
        if let Some(p) = self.flow.as_mut() {
            rendered += run_panel(p, observer);
        }
        if let Some(p) = self.grid.as_mut() {
            rendered += run_panel(p, observer);
        }
        rendered
    }

    /// Service `n` consecutive refreshes.  Returns total frames rendered.
    pub fn run_refreshes<O: FrameObserver>(&mut self, n: u64, observer: &mut O) -> usize {
        (0..n).map(|_| self.on_refresh(observer)).sum()
    }

    // ── Inspection ────────────────────────────────────────────────────────

    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn flow(&self) -> Option<&Panel<S, MovingAgent>> {
        self.flow.as_ref()
    }

    pub fn grid(&self) -> Option<&Panel<S, SignalActor>> {
        self.grid.as_ref()
    }

    /// Agents on the flow panel, or an empty slice if it failed to build.
    pub fn agents(&self) -> &[MovingAgent] {
        self.flow.as_ref().map(|p| p.entities()).unwrap_or_default()
    }

    /// Signals on the grid panel, or an empty slice if it failed to build.
    pub fn signals(&self) -> &[SignalActor] {
        self.grid.as_ref().map(|p| p.entities()).unwrap_or_default()
    }

    /// Frame-loop state of a panel, `None` if the panel is absent.
    pub fn loop_state(&self, id: SurfaceId) -> Option<LoopState> {
        match id {
            SurfaceId::AgentFlow  => self.flow.as_ref().map(|p| p.frame_loop().state()),
            SurfaceId::SignalGrid => self.grid.as_ref().map(|p| p.frame_loop().state()),
        }
    }

    /// Frames rendered so far on a panel, `None` if the panel is absent.
    pub fn tick(&self, id: SurfaceId) -> Option<Tick> {
        match id {
            SurfaceId::AgentFlow  => self.flow.as_ref().map(|p| p.tick()),
            SurfaceId::SignalGrid => self.grid.as_ref().map(|p| p.tick()),
        }
    }

    /// Per-panel initialization failures recorded by the builder.
    pub fn init_failures(&self) -> &[SimError] {
        &self.failures
    }

    pub fn visibility(&self) -> &VisibilityGate {
        &self.gate
    }
}

/// Run one frame on `panel` if it has an outstanding request, then let the
/// loop decide whether to re-request.
fn run_panel<S: Surface, E: Entity, O: FrameObserver>(
    panel:    &mut Panel<S, E>,
    observer: &mut O,
) -> usize {
    if !panel.frame_loop().is_armed() {
        return 0;
    }
    let id = panel.id();
    let tick = panel.tick();

    observer.on_frame_start(id, tick);
    panel.frame();
    observer.on_frame_end(id, tick);

    if let Some((from, to)) = panel.frame_loop_mut().complete_frame() {
        debug!(surface = %id, %from, %to, "frame loop state change");
        observer.on_state_change(id, from, to);
    }
    1
}
