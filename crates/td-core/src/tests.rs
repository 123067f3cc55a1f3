//! Unit tests for td-core primitives.

#[cfg(test)]
mod ids {
    use crate::SurfaceId;

    #[test]
    fn tick_order_is_flow_then_grid() {
        assert!(SurfaceId::AgentFlow < SurfaceId::SignalGrid);
        assert_eq!(SurfaceId::ALL, [SurfaceId::AgentFlow, SurfaceId::SignalGrid]);
    }

    #[test]
    fn display_uses_lookup_name() {
        assert_eq!(SurfaceId::AgentFlow.to_string(), "agent-flow");
        assert_eq!(SurfaceId::SignalGrid.to_string(), "signal-grid");
    }
}

#[cfg(test)]
mod geom {
    use crate::{Color, Point};

    #[test]
    fn hex_unpacks_channels() {
        let c = Color::hex(0x3498db);
        assert_eq!((c.r, c.g, c.b), (0x34, 0x98, 0xdb));
        assert!(c.is_opaque());
    }

    #[test]
    fn color_display() {
        assert_eq!(Color::hex(0x333333).to_string(), "#333333");
        assert_eq!(Color::rgba(52, 152, 219, 0.7).to_string(), "rgba(52, 152, 219, 0.7)");
    }

    #[test]
    fn distance_sq() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_sq(b), 25.0);
    }
}

#[cfg(test)]
mod range {
    use crate::{SpawnRange, TdError};

    #[test]
    fn half_open_containment() {
        let r = SpawnRange::new(1.0, 3.0);
        assert!(r.contains(1.0));
        assert!(r.contains(2.999));
        assert!(!r.contains(3.0));
    }

    #[test]
    fn inverted_range_rejected() {
        let err = SpawnRange::new(3.0, 1.0).validate("speed").unwrap_err();
        assert_eq!(err, TdError::InvalidRange { what: "speed", min: 3.0, max: 1.0 });
    }

    #[test]
    fn empty_range_rejected() {
        assert!(SpawnRange::new(2.0, 2.0).validate("radius").is_err());
    }

    #[test]
    fn non_positive_rejected() {
        assert!(SpawnRange::new(0.0, 1.0).validate("radius").is_ok());
        assert!(matches!(
            SpawnRange::new(0.0, 1.0).validate_positive("radius"),
            Err(TdError::NotPositive { what: "radius", .. })
        ));
    }
}

#[cfg(test)]
mod rng {
    use proptest::prelude::*;

    use crate::{SimRng, SpawnRange};

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SimRng::new(42);
        let mut b = SimRng::new(42);
        for _ in 0..100 {
            let r = SpawnRange::new(1.0, 3.0);
            assert_eq!(a.sample(r), b.sample(r));
        }
    }

    #[test]
    fn children_are_independent_of_each_other() {
        let mut root = SimRng::new(7);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        let xs: Vec<f32> = (0..8).map(|_| c0.sample(SpawnRange::new(0.0, 1.0))).collect();
        let ys: Vec<f32> = (0..8).map(|_| c1.sample(SpawnRange::new(0.0, 1.0))).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn degenerate_range_yields_min() {
        let mut rng = SimRng::new(1);
        assert_eq!(rng.sample(SpawnRange::new(5.0, 5.0)), 5.0);
    }

    proptest! {
        #[test]
        fn sample_stays_in_range(seed in any::<u64>(), min in 0.0f32..100.0, span in 0.01f32..50.0) {
            let mut rng = SimRng::new(seed);
            let r = SpawnRange::new(min, min + span);
            for _ in 0..16 {
                prop_assert!(r.contains(rng.sample(r)));
            }
        }

        #[test]
        fn point_within_bounds(seed in any::<u64>()) {
            let mut rng = SimRng::new(seed);
            let p = rng.point_within(800.0, 400.0);
            prop_assert!((0.0..800.0).contains(&p.x));
            prop_assert!((0.0..400.0).contains(&p.y));
        }
    }
}

#[cfg(test)]
mod time {
    use crate::{FrameClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(3)), 12);
    }

    #[test]
    fn clock_counts_frames() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.frames(), 0);
        clock.advance();
        clock.advance();
        assert_eq!(clock.current_tick, Tick(2));
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn display() {
        assert_eq!(Tick(7).to_string(), "T7");
    }
}
