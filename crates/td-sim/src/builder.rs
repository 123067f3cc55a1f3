//! Fluent builder for constructing a [`Dashboard`].

use td_core::{Extent, SimRng, SurfaceId};
use td_entity::{SignalActor, spawn_agents};
use td_surface::{Surface, SurfaceProvider};
use tracing::{info, warn};

use crate::{Backdrop, Dashboard, DashboardConfig, Panel, SimError, SimResult, VisibilityGate};

/// Fluent builder for [`Dashboard<S>`].
///
/// # Optional inputs (have defaults)
///
/// | Method              | Default                          |
/// |---------------------|----------------------------------|
/// | `.config(c)`        | `DashboardConfig::default()`     |
/// | `.flow_backdrop(b)` | `Backdrop::none()`               |
/// | `.grid_backdrop(b)` | `Backdrop::crossroads()`         |
///
/// # Example
///
/// ```rust,ignore
/// let mut surfaces = HashMap::new();
/// surfaces.insert(SurfaceId::AgentFlow, RecordingSurface::new(800.0, 400.0));
/// surfaces.insert(SurfaceId::SignalGrid, RecordingSurface::new(400.0, 400.0));
///
/// let mut dashboard = DashboardBuilder::new()
///     .config(DashboardConfig { seed: 7, ..Default::default() })
///     .build(&mut surfaces)?;
/// dashboard.on_refresh(&mut NoopObserver);
/// ```
#[derive(Default)]
pub struct DashboardBuilder {
    config:        DashboardConfig,
    flow_backdrop: Option<Backdrop>,
    grid_backdrop: Option<Backdrop>,
}

impl DashboardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn config(mut self, config: DashboardConfig) -> Self {
        self.config = config;
        self
    }

    /// Static geometry under the agents.
    pub fn flow_backdrop(mut self, backdrop: Backdrop) -> Self {
        self.flow_backdrop = Some(backdrop);
        self
    }

    /// Static geometry under the signals.
    pub fn grid_backdrop(mut self, backdrop: Backdrop) -> Self {
        self.grid_backdrop = Some(backdrop);
        self
    }

    /// Validate the configuration, acquire both surfaces, spawn entities, and
    /// return the dashboard (already started under `StartPolicy::Immediate`).
    ///
    /// A surface the provider cannot supply aborts only its own panel: the
    /// failure is recorded in [`Dashboard::init_failures`] and the other
    /// panel is built normally.  Only an invalid configuration fails the
    /// whole build.
    pub fn build<P: SurfaceProvider>(self, provider: &mut P) -> SimResult<Dashboard<P::Surface>> {
        self.config.validate()?;

        let mut root = SimRng::new(self.config.seed);
        let mut flow_rng = root.child(SurfaceId::AgentFlow as u64);
        let grid_rng = root.child(SurfaceId::SignalGrid as u64);
        let mut failures = Vec::new();

        // ── Agent flow panel ──────────────────────────────────────────────
        let flow = match provider.acquire(SurfaceId::AgentFlow) {
            Some(surface) => {
                let extent = Extent::new(surface.width(), surface.height());
                let agents = spawn_agents(&self.config.agents, extent, &mut flow_rng);
                let backdrop = self.flow_backdrop.unwrap_or_else(Backdrop::none);
                Some(Panel::new(SurfaceId::AgentFlow, surface, agents, backdrop, flow_rng))
            }
            None => {
                warn!(surface = %SurfaceId::AgentFlow, "surface missing; panel disabled");
                failures.push(SimError::MissingResource { surface: SurfaceId::AgentFlow });
                None
            }
        };

        // ── Signal grid panel ─────────────────────────────────────────────
        let grid = match provider.acquire(SurfaceId::SignalGrid) {
            Some(surface) => {
                let signals =
                    SignalActor::grid(&self.config.signal_positions, self.config.signal_threshold);
                let backdrop = self.grid_backdrop.unwrap_or_else(Backdrop::crossroads);
                Some(Panel::new(SurfaceId::SignalGrid, surface, signals, backdrop, grid_rng))
            }
            None => {
                warn!(surface = %SurfaceId::SignalGrid, "surface missing; panel disabled");
                failures.push(SimError::MissingResource { surface: SurfaceId::SignalGrid });
                None
            }
        };

        info!(
            agents  = flow.as_ref().map_or(0, |p| p.entities().len()),
            signals = grid.as_ref().map_or(0, |p| p.entities().len()),
            failed  = failures.len(),
            policy  = ?self.config.start_policy,
            "dashboard built"
        );

        let mut dashboard = Dashboard {
            running: false,
            flow,
            grid,
            gate: VisibilityGate::new(self.config.start_policy),
            failures,
        };
        if dashboard.gate.fire_at_load() {
            dashboard.start();
        }
        Ok(dashboard)
    }
}
