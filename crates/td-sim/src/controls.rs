//! `Controls` — the UI-facing command slot.

use td_surface::Surface;

use crate::{Dashboard, FrameObserver};

/// Holds the dashboard once initialization has finished.
///
/// UI buttons can be wired to `start`/`pause`/`reset` before the dashboard
/// exists; until [`install`](Self::install) is called those commands are
/// silently ignored.
pub struct Controls<S: Surface> {
    dashboard: Option<Dashboard<S>>,
}

impl<S: Surface> Default for Controls<S> {
    fn default() -> Self {
        Self { dashboard: None }
    }
}

impl<S: Surface> Controls<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hand over a fully built dashboard.  Replaces any previous one.
    pub fn install(&mut self, dashboard: Dashboard<S>) {
        self.dashboard = Some(dashboard);
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.dashboard.is_some()
    }

    pub fn dashboard(&self) -> Option<&Dashboard<S>> {
        self.dashboard.as_ref()
    }

    pub fn start(&mut self) {
        if let Some(d) = self.dashboard.as_mut() {
            d.start();
        }
    }

    pub fn pause(&mut self) {
        if let Some(d) = self.dashboard.as_mut() {
            d.pause();
        }
    }

    pub fn reset(&mut self) {
        if let Some(d) = self.dashboard.as_mut() {
            d.reset();
        }
    }

    pub fn notify_visible(&mut self, visible: bool) {
        if let Some(d) = self.dashboard.as_mut() {
            d.notify_visible(visible);
        }
    }

    /// Forward a display refresh.  Renders nothing before installation.
    pub fn on_refresh<O: FrameObserver>(&mut self, observer: &mut O) -> usize {
        self.dashboard.as_mut().map_or(0, |d| d.on_refresh(observer))
    }
}
