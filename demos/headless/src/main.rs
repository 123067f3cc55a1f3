//! headless — drive the traffic dashboard without a window.
//!
//! A fixed number of simulated display refreshes is fed to the dashboard
//! while the start/pause/reset buttons are "pressed" at scripted refreshes.
//! Both panels render into software framebuffers, which are printed as ASCII
//! previews, followed by a JSON dump of the final entity state.
//!
//! Set `RUST_LOG=debug` to see lifecycle transitions.

use std::collections::HashMap;

use anyhow::{Result, bail};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use td_core::{Color, SurfaceId, Tick};
use td_entity::{MovingAgent, SignalActor};
use td_sim::{Controls, DashboardBuilder, DashboardConfig, FrameObserver, LoopState};
use td_surface::RasterSurface;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:          u64   = 42;
const FLOW_WIDTH:    usize = 800;
const FLOW_HEIGHT:   usize = 400;
const GRID_SIZE:     usize = 400;
const PREVIEW_COLS:  usize = 80;
const PREVIEW_ROWS:  usize = 20;
const BACKGROUND:    Color = Color::hex(0xf5f7fa);

/// Scripted button presses, keyed by refresh number.
#[derive(Copy, Clone, Debug)]
enum Command {
    Pause,
    Start,
    Reset,
}

const SCRIPT: &[(u64, Command)] = &[
    (150, Command::Pause),
    (180, Command::Start),
    (181, Command::Start),
    (220, Command::Reset),
];

const TOTAL_REFRESHES: u64 = 260;

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct FrameTally {
    flow_frames: u64,
    grid_frames: u64,
}

impl FrameObserver for FrameTally {
    fn on_frame_end(&mut self, surface: SurfaceId, _tick: Tick) {
        match surface {
            SurfaceId::AgentFlow  => self.flow_frames += 1,
            SurfaceId::SignalGrid => self.grid_frames += 1,
        }
    }

    fn on_state_change(&mut self, surface: SurfaceId, from: LoopState, to: LoopState) {
        info!(%surface, %from, %to, "loop state");
    }
}

// ── Snapshot ──────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct Snapshot<'a> {
    config:  &'a DashboardConfig,
    running: bool,
    frames:  HashMap<SurfaceId, u64>,
    signals: &'a [SignalActor],
    agents:  &'a [MovingAgent],
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = DashboardConfig { seed: SEED, ..Default::default() };

    let mut surfaces = HashMap::new();
    surfaces.insert(SurfaceId::AgentFlow, RasterSurface::new(FLOW_WIDTH, FLOW_HEIGHT, BACKGROUND));
    surfaces.insert(SurfaceId::SignalGrid, RasterSurface::new(GRID_SIZE, GRID_SIZE, BACKGROUND));

    // Buttons are live before the dashboard exists; presses are ignored.
    let mut controls = Controls::new();
    controls.pause();

    let dashboard = DashboardBuilder::new().config(config.clone()).build(&mut surfaces)?;
    if let Some(e) = dashboard.init_failures().first() {
        bail!("dashboard incomplete: {e}");
    }
    controls.install(dashboard);

    let mut tally = FrameTally::default();
    for refresh in 0..TOTAL_REFRESHES {
        for &(_, cmd) in SCRIPT.iter().filter(|(at, _)| *at == refresh) {
            info!(refresh, ?cmd, "button");
            match cmd {
                Command::Pause => controls.pause(),
                Command::Start => controls.start(),
                Command::Reset => controls.reset(),
            }
        }
        controls.on_refresh(&mut tally);
    }

    let Some(dashboard) = controls.dashboard() else {
        bail!("dashboard was not installed");
    };

    println!("=== signal grid ===");
    if let Some(grid) = dashboard.grid() {
        println!("{}", grid.surface().to_ascii(PREVIEW_COLS / 2, PREVIEW_ROWS));
    }
    println!();
    println!("=== agent flow ===");
    if let Some(flow) = dashboard.flow() {
        println!("{}", flow.surface().to_ascii(PREVIEW_COLS, PREVIEW_ROWS));
    }
    println!();
    println!(
        "{} refreshes: {} flow frames, {} grid frames",
        TOTAL_REFRESHES, tally.flow_frames, tally.grid_frames,
    );

    let frames = SurfaceId::ALL
        .iter()
        .filter_map(|&id| dashboard.tick(id).map(|t| (id, t.0)))
        .collect();
    let snapshot = Snapshot {
        config:  &config,
        running: dashboard.is_running(),
        frames,
        signals: dashboard.signals(),
        agents:  &dashboard.agents()[..dashboard.agents().len().min(5)],
    };
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
