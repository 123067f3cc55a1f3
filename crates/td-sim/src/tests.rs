//! Integration tests for td-sim.

use std::collections::HashMap;

use td_core::{SurfaceId, Tick};
use td_surface::RecordingSurface;

use crate::{Dashboard, DashboardBuilder, DashboardConfig, FrameObserver, LoopState, StartPolicy};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn surfaces() -> HashMap<SurfaceId, RecordingSurface> {
    let mut map = HashMap::new();
    map.insert(SurfaceId::AgentFlow, RecordingSurface::new(800.0, 400.0));
    map.insert(SurfaceId::SignalGrid, RecordingSurface::new(400.0, 400.0));
    map
}

fn dashboard(config: DashboardConfig) -> Dashboard<RecordingSurface> {
    DashboardBuilder::new()
        .config(config)
        .build(&mut surfaces())
        .unwrap()
}

fn seeded(seed: u64) -> Dashboard<RecordingSurface> {
    dashboard(DashboardConfig { seed, ..Default::default() })
}

/// Observer that records frames and state changes.
#[derive(Default)]
struct Recorder {
    frames:  Vec<(SurfaceId, Tick)>,
    changes: Vec<(SurfaceId, LoopState, LoopState)>,
}

impl FrameObserver for Recorder {
    fn on_frame_end(&mut self, surface: SurfaceId, tick: Tick) {
        self.frames.push((surface, tick));
    }

    fn on_state_change(&mut self, surface: SurfaceId, from: LoopState, to: LoopState) {
        self.changes.push((surface, from, to));
    }
}

impl Recorder {
    fn count(&self, id: SurfaceId) -> usize {
        self.frames.iter().filter(|(s, _)| *s == id).count()
    }
}

// ── FrameLoop state machine ───────────────────────────────────────────────────

#[cfg(test)]
mod scheduler_tests {
    use crate::{FrameLoop, LoopState};

    #[test]
    fn starts_idle_and_unarmed() {
        let l = FrameLoop::new();
        assert_eq!(l.state(), LoopState::Idle);
        assert!(!l.is_armed());
    }

    #[test]
    fn running_rearms_after_each_frame() {
        let mut l = FrameLoop::new();
        assert_eq!(l.resume(), LoopState::Idle);
        assert!(l.is_armed());
        assert_eq!(l.complete_frame(), None);
        assert_eq!(l.state(), LoopState::Running);
    }

    #[test]
    fn stop_allows_one_residual_frame() {
        let mut l = FrameLoop::new();
        l.resume();
        l.stop();
        assert_eq!(l.state(), LoopState::StoppingAfterCurrent);
        assert!(l.is_armed());
        assert_eq!(
            l.complete_frame(),
            Some((LoopState::StoppingAfterCurrent, LoopState::Idle)),
        );
        assert!(!l.is_armed());
    }

    #[test]
    fn stop_when_idle_stays_idle() {
        let mut l = FrameLoop::new();
        assert_eq!(l.stop(), LoopState::Idle);
        assert_eq!(l.state(), LoopState::Idle);
    }

    #[test]
    fn resume_adopts_residual_request() {
        let mut l = FrameLoop::new();
        l.resume();
        l.stop();
        assert_eq!(l.resume(), LoopState::StoppingAfterCurrent);
        assert_eq!(l.state(), LoopState::Running);
    }

    #[test]
    fn state_display() {
        assert_eq!(LoopState::StoppingAfterCurrent.to_string(), "stopping-after-current");
    }
}

// ── DashboardBuilder ──────────────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use td_core::{Point, SpawnRange, TdError};
    use td_entity::{AgentSpawn, Phase};

    use super::*;
    use crate::SimError;

    #[test]
    fn builds_both_panels_with_defaults() {
        let d = seeded(1);
        assert_eq!(d.agents().len(), 50);
        assert_eq!(d.signals().len(), 4);
        assert!(d.init_failures().is_empty());
        assert!(d.signals().iter().all(|s| s.phase() == Phase::Stop && s.timer() == 0));
    }

    #[test]
    fn immediate_policy_starts_at_load() {
        let d = seeded(1);
        assert!(d.is_running());
        assert_eq!(d.loop_state(SurfaceId::AgentFlow), Some(LoopState::Running));
        assert_eq!(d.loop_state(SurfaceId::SignalGrid), Some(LoopState::Running));
        assert!(d.visibility().has_fired());
    }

    #[test]
    fn spawn_attributes_respect_ranges() {
        let d = seeded(9);
        for a in d.agents() {
            assert!((1.0..3.0).contains(&a.speed()));
            assert!((5.0..15.0).contains(&a.radius()));
            assert!((0.0..800.0).contains(&a.position().x));
            assert!((0.0..400.0).contains(&a.position().y));
        }
    }

    #[test]
    fn same_seed_same_layout() {
        assert_eq!(seeded(5).agents(), seeded(5).agents());
        assert_ne!(seeded(5).agents(), seeded(6).agents());
    }

    #[test]
    fn invalid_speed_range_errors() {
        let config = DashboardConfig {
            agents: AgentSpawn { speed: SpawnRange::new(3.0, 1.0), ..Default::default() },
            ..Default::default()
        };
        let result = DashboardBuilder::new().config(config).build(&mut surfaces());
        assert!(matches!(
            result,
            Err(SimError::Core(TdError::InvalidRange { what: "agent speed", .. }))
        ));
    }

    #[test]
    fn zero_radius_errors() {
        let config = DashboardConfig {
            agents: AgentSpawn { radius: SpawnRange::new(0.0, 5.0), ..Default::default() },
            ..Default::default()
        };
        assert!(DashboardBuilder::new().config(config).build(&mut surfaces()).is_err());
    }

    #[test]
    fn non_finite_signal_position_errors() {
        let config = DashboardConfig {
            signal_positions: vec![Point::new(f32::NAN, 0.0)],
            ..Default::default()
        };
        let result = DashboardBuilder::new().config(config).build(&mut surfaces());
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn missing_flow_surface_only_disables_flow() {
        let mut map = surfaces();
        map.remove(&SurfaceId::AgentFlow);
        let mut d = DashboardBuilder::new().build(&mut map).unwrap();

        assert!(d.flow().is_none());
        assert!(d.agents().is_empty());
        assert_eq!(
            d.init_failures(),
            &[SimError::MissingResource { surface: SurfaceId::AgentFlow }],
        );

        let mut rec = Recorder::default();
        assert_eq!(d.run_refreshes(3, &mut rec), 3);
        assert_eq!(rec.count(SurfaceId::SignalGrid), 3);
        assert_eq!(d.tick(SurfaceId::AgentFlow), None);
    }

    #[test]
    fn missing_both_surfaces_still_builds_inert_dashboard() {
        let mut empty: HashMap<SurfaceId, RecordingSurface> = HashMap::new();
        let mut d = DashboardBuilder::new().build(&mut empty).unwrap();
        assert_eq!(d.init_failures().len(), 2);
        d.start();
        d.reset();
        d.pause();
        assert_eq!(d.run_refreshes(5, &mut crate::NoopObserver), 0);
    }

    #[test]
    fn custom_signal_grid() {
        let config = DashboardConfig {
            signal_positions: vec![Point::new(50.0, 50.0)],
            signal_threshold: 3,
            ..Default::default()
        };
        let d = dashboard(config);
        assert_eq!(d.signals().len(), 1);
        assert_eq!(d.signals()[0].threshold(), 3);
    }
}

// ── Refresh cycle ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod frame_tests {
    use td_core::Point;
    use td_entity::{AGENT_FILL, Phase, SIGNAL_GRID};
    use td_surface::DrawCommand;

    use super::*;
    use crate::{NoopObserver, ROAD_FILL};

    #[test]
    fn one_tick_per_panel_per_refresh() {
        let mut d = seeded(2);
        let mut rec = Recorder::default();
        assert_eq!(d.run_refreshes(10, &mut rec), 20);
        assert_eq!(d.tick(SurfaceId::AgentFlow), Some(Tick(10)));
        assert_eq!(d.tick(SurfaceId::SignalGrid), Some(Tick(10)));
    }

    #[test]
    fn flow_panel_is_ticked_before_grid() {
        let mut d = seeded(2);
        let mut rec = Recorder::default();
        d.on_refresh(&mut rec);
        assert_eq!(
            rec.frames,
            vec![(SurfaceId::AgentFlow, Tick(0)), (SurfaceId::SignalGrid, Tick(0))],
        );
    }

    #[test]
    fn grid_frame_paints_roads_then_signals() {
        let mut d = seeded(2);
        d.on_refresh(&mut NoopObserver);
        let surface = d.grid().unwrap().surface();
        let cmds = surface.commands();

        assert_eq!(cmds[0], DrawCommand::Clear);
        assert_eq!(
            cmds[1],
            DrawCommand::Rect { origin: Point::new(0.0, 175.0), w: 400.0, h: 50.0, color: ROAD_FILL },
        );
        assert_eq!(
            cmds[2],
            DrawCommand::Rect { origin: Point::new(175.0, 0.0), w: 50.0, h: 400.0, color: ROAD_FILL },
        );
        let centers: Vec<Point> = surface.circles().map(|(c, _, _)| c).collect();
        assert_eq!(centers, SIGNAL_GRID.to_vec());
    }

    #[test]
    fn flow_frame_draws_every_agent_at_its_advanced_position() {
        let mut d = seeded(4);
        d.on_refresh(&mut NoopObserver);
        let surface = d.flow().unwrap().surface();
        assert_eq!(surface.clear_count(), 1);
        assert_eq!(surface.rects().count(), 0);

        let drawn: Vec<_> = surface.circles().collect();
        assert_eq!(drawn.len(), d.agents().len());
        for ((center, radius, color), agent) in drawn.into_iter().zip(d.agents()) {
            assert_eq!(center, agent.position());
            assert_eq!(radius, agent.radius());
            assert_eq!(color, AGENT_FILL);
        }
    }

    #[test]
    fn signals_turn_open_on_refresh_101() {
        let mut d = seeded(3);
        d.run_refreshes(100, &mut NoopObserver);
        assert!(d.signals().iter().all(|s| s.phase() == Phase::Stop));
        d.on_refresh(&mut NoopObserver);
        assert!(d.signals().iter().all(|s| s.phase() == Phase::Open && s.timer() == 0));

        let colors: Vec<_> = d.grid().unwrap().surface().circles().map(|(_, _, c)| c).collect();
        assert!(colors.iter().all(|&c| c == Phase::Open.color()));
    }

    #[test]
    fn wrap_invariant_over_long_run() {
        let mut d = seeded(11);
        d.run_refreshes(3_000, &mut NoopObserver);
        for a in d.agents() {
            let x = a.position().x;
            assert!(0.0 <= x + a.radius());
            assert!(x <= 800.0 + a.radius());
        }
    }
}

// ── Lifecycle ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod lifecycle_tests {
    use td_entity::Phase;

    use super::*;
    use crate::NoopObserver;

    #[test]
    fn double_start_keeps_a_single_chain() {
        let mut d = seeded(1);
        d.start();
        d.start();
        let mut rec = Recorder::default();
        d.run_refreshes(25, &mut rec);
        assert_eq!(rec.count(SurfaceId::AgentFlow), 25);
        assert_eq!(rec.count(SurfaceId::SignalGrid), 25);
    }

    #[test]
    fn double_pause_equals_single_pause() {
        let mut once = seeded(1);
        once.pause();
        let mut twice = seeded(1);
        twice.pause();
        twice.pause();

        assert!(!once.is_running());
        assert!(!twice.is_running());
        assert_eq!(
            once.loop_state(SurfaceId::AgentFlow),
            twice.loop_state(SurfaceId::AgentFlow),
        );
        assert_eq!(
            once.run_refreshes(5, &mut NoopObserver),
            twice.run_refreshes(5, &mut NoopObserver),
        );
    }

    #[test]
    fn pause_allows_exactly_one_residual_frame() {
        let mut d = seeded(1);
        d.on_refresh(&mut NoopObserver);
        d.pause();
        assert_eq!(d.loop_state(SurfaceId::AgentFlow), Some(LoopState::StoppingAfterCurrent));

        let mut rec = Recorder::default();
        assert_eq!(d.on_refresh(&mut rec), 2, "residual frame on each panel");
        assert_eq!(d.run_refreshes(10, &mut rec), 0);
        assert_eq!(d.tick(SurfaceId::AgentFlow), Some(Tick(2)));
        assert_eq!(
            rec.changes,
            vec![
                (SurfaceId::AgentFlow, LoopState::StoppingAfterCurrent, LoopState::Idle),
                (SurfaceId::SignalGrid, LoopState::StoppingAfterCurrent, LoopState::Idle),
            ],
        );
    }

    #[test]
    fn paused_dashboard_does_not_move_entities() {
        let mut d = seeded(1);
        d.pause();
        d.on_refresh(&mut NoopObserver); // residual
        let agents = d.agents().to_vec();
        let signals = d.signals().to_vec();
        d.run_refreshes(50, &mut NoopObserver);
        assert_eq!(d.agents(), agents.as_slice());
        assert_eq!(d.signals(), signals.as_slice());
    }

    #[test]
    fn start_during_residual_window_does_not_double_speed() {
        let mut d = seeded(1);
        d.pause();
        d.start(); // residual request still pending
        assert_eq!(d.loop_state(SurfaceId::SignalGrid), Some(LoopState::Running));

        let mut rec = Recorder::default();
        d.run_refreshes(30, &mut rec);
        assert_eq!(rec.count(SurfaceId::AgentFlow), 30);
        assert_eq!(rec.count(SurfaceId::SignalGrid), 30);
    }

    #[test]
    fn start_after_idle_resumes_one_tick_per_refresh() {
        let mut d = seeded(1);
        d.pause();
        d.run_refreshes(3, &mut NoopObserver);
        assert_eq!(d.loop_state(SurfaceId::AgentFlow), Some(LoopState::Idle));

        d.start();
        let before = d.tick(SurfaceId::AgentFlow).unwrap();
        d.run_refreshes(7, &mut NoopObserver);
        assert_eq!(d.tick(SurfaceId::AgentFlow).unwrap().since(before), 7);
    }

    #[test]
    fn reset_preserves_speed_and_radius() {
        let mut d = seeded(8);
        d.run_refreshes(40, &mut NoopObserver);
        let fixed: Vec<(f32, f32)> = d.agents().iter().map(|a| (a.speed(), a.radius())).collect();
        let positions: Vec<_> = d.agents().iter().map(|a| a.position()).collect();

        d.reset();

        let after: Vec<(f32, f32)> = d.agents().iter().map(|a| (a.speed(), a.radius())).collect();
        let new_positions: Vec<_> = d.agents().iter().map(|a| a.position()).collect();
        assert_eq!(fixed, after);
        assert_ne!(positions, new_positions);
        for a in d.agents() {
            assert!((0.0..800.0).contains(&a.position().x));
            assert!((0.0..400.0).contains(&a.position().y));
        }
    }

    #[test]
    fn reset_returns_open_signals_to_stop() {
        let mut d = seeded(8);
        d.run_refreshes(101 + 47, &mut NoopObserver);
        assert!(d.signals().iter().all(|s| s.phase() == Phase::Open && s.timer() == 47));

        d.reset();
        assert!(d.signals().iter().all(|s| s.phase() == Phase::Stop && s.timer() == 0));
    }

    #[test]
    fn reset_does_not_change_running_flag() {
        let mut d = seeded(8);
        d.reset();
        assert!(d.is_running());
        d.pause();
        d.reset();
        assert!(!d.is_running());
        assert_eq!(d.loop_state(SurfaceId::AgentFlow), Some(LoopState::StoppingAfterCurrent));
    }

    #[test]
    fn reset_does_not_rewind_frame_clock() {
        let mut d = seeded(8);
        d.run_refreshes(12, &mut NoopObserver);
        d.reset();
        assert_eq!(d.tick(SurfaceId::SignalGrid), Some(Tick(12)));
    }
}

// ── Visibility gate ───────────────────────────────────────────────────────────

#[cfg(test)]
mod visibility_tests {
    use super::*;
    use crate::{NoopObserver, VisibilityGate};

    fn deferred() -> Dashboard<RecordingSurface> {
        dashboard(DashboardConfig { start_policy: StartPolicy::WhenVisible, ..Default::default() })
    }

    #[test]
    fn deferred_dashboard_waits_for_visibility() {
        let mut d = deferred();
        assert!(!d.is_running());
        assert_eq!(d.run_refreshes(5, &mut NoopObserver), 0);

        d.notify_visible(false);
        assert!(!d.is_running());

        d.notify_visible(true);
        assert!(d.is_running());
        assert_eq!(d.on_refresh(&mut NoopObserver), 2);
    }

    #[test]
    fn gate_fires_only_once() {
        let mut d = deferred();
        d.notify_visible(true);
        d.pause();
        d.notify_visible(true);
        assert!(!d.is_running(), "second visibility signal must not override pause");
    }

    #[test]
    fn first_visibility_after_user_pause_keeps_dashboard_paused() {
        let mut d = deferred();
        d.start();
        assert!(d.visibility().has_fired());
        d.pause();
        d.notify_visible(true);
        assert!(!d.is_running());

        d.on_refresh(&mut NoopObserver); // residual
        assert_eq!(d.run_refreshes(5, &mut NoopObserver), 0);
    }

    #[test]
    fn explicit_start_works_before_visibility() {
        let mut d = deferred();
        d.start();
        assert!(d.is_running());
        d.notify_visible(true);
        assert_eq!(d.run_refreshes(4, &mut NoopObserver), 8);
    }

    #[test]
    fn immediate_gate_ignores_visibility() {
        let mut gate = VisibilityGate::new(StartPolicy::Immediate);
        assert!(gate.fire_at_load());
        assert!(!gate.notify(true));
    }
}

// ── Controls slot ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod controls_tests {
    use super::*;
    use crate::{Controls, NoopObserver};

    #[test]
    fn commands_before_install_are_noops() {
        let mut c: Controls<RecordingSurface> = Controls::new();
        c.start();
        c.pause();
        c.reset();
        c.notify_visible(true);
        assert!(!c.is_ready());
        assert_eq!(c.on_refresh(&mut NoopObserver), 0);
    }

    #[test]
    fn commands_forward_after_install() {
        let mut c = Controls::new();
        c.install(seeded(1));
        assert!(c.is_ready());
        assert_eq!(c.on_refresh(&mut NoopObserver), 2);

        c.pause();
        assert!(!c.dashboard().unwrap().is_running());
        c.on_refresh(&mut NoopObserver);
        assert_eq!(c.on_refresh(&mut NoopObserver), 0);

        c.start();
        assert_eq!(c.on_refresh(&mut NoopObserver), 2);
    }
}
