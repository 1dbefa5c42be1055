// Host-side tests for the spring integrator and channel ceilings.

use hero_core::{advance, ConfigError, PhysicsConfig, SpringChannel, SpringState};
use std::time::Duration;

const FRAME: Duration = Duration::from_micros(16_667);

fn configs() -> Vec<PhysicsConfig> {
    vec![
        PhysicsConfig::MAGNET,
        PhysicsConfig::TILT,
        PhysicsConfig::new(170.0, 26.0, 1.0).unwrap(),
        PhysicsConfig::new(300.0, 10.0, 0.5).unwrap(),
    ]
}

#[test]
fn named_profiles_are_valid() {
    for p in [PhysicsConfig::MAGNET, PhysicsConfig::TILT] {
        assert!(PhysicsConfig::new(p.stiffness(), p.damping(), p.mass()).is_ok());
    }
    // magnet reacts faster than tilt
    let magnet_omega = (PhysicsConfig::MAGNET.stiffness() / PhysicsConfig::MAGNET.mass()).sqrt();
    let tilt_omega = (PhysicsConfig::TILT.stiffness() / PhysicsConfig::TILT.mass()).sqrt();
    assert!(magnet_omega > tilt_omega);
}

#[test]
fn invalid_profiles_are_rejected_at_construction() {
    assert_eq!(
        PhysicsConfig::new(0.0, 10.0, 1.0),
        Err(ConfigError::NonPositivePhysics {
            field: "stiffness",
            value: 0.0
        })
    );
    assert!(matches!(
        PhysicsConfig::new(100.0, -1.0, 1.0),
        Err(ConfigError::NonPositivePhysics { field: "damping", .. })
    ));
    assert!(matches!(
        PhysicsConfig::new(100.0, 10.0, f32::NAN),
        Err(ConfigError::NonPositivePhysics { field: "mass", .. })
    ));
    assert!(PhysicsConfig::new(f32::INFINITY, 10.0, 1.0).is_err());
}

#[test]
fn advance_is_deterministic() {
    let s = SpringState {
        value: 3.0,
        velocity: -2.0,
        target: 0.0,
    };
    for cfg in configs() {
        let a = advance(s, 12.5, &cfg, FRAME);
        let b = advance(s, 12.5, &cfg, FRAME);
        assert_eq!(a, b);
        assert_eq!(a.target, 12.5);
    }
}

#[test]
fn zero_dt_changes_nothing_but_target() {
    let s = SpringState {
        value: 4.0,
        velocity: 1.5,
        target: 4.0,
    };
    let next = advance(s, 9.0, &PhysicsConfig::MAGNET, Duration::ZERO);
    assert_eq!(next.value, 4.0);
    assert_eq!(next.velocity, 1.5);
    assert_eq!(next.target, 9.0);
}

#[test]
fn target_jumps_never_produce_value_jumps() {
    for cfg in configs() {
        let mut s = SpringState::at_rest(0.0);
        let targets = [100.0, -100.0, 40.0, 0.0];
        let mut max_step = 0.0f32;
        for target in targets {
            let jump = (target - s.value).abs();
            for _ in 0..30 {
                let next = advance(s, target, &cfg, FRAME);
                let step = (next.value - s.value).abs();
                // one frame can only cover what velocity plus one frame of
                // acceleration allow
                let accel_bound = (cfg.stiffness() * (target - s.value).abs()
                    + cfg.damping() * s.velocity.abs())
                    / cfg.mass();
                let bound = (s.velocity.abs() + accel_bound * FRAME.as_secs_f32())
                    * FRAME.as_secs_f32()
                    * 1.5
                    + 1e-4;
                assert!(
                    step <= bound,
                    "step {step} exceeds bound {bound} for {cfg:?}"
                );
                assert!(step < jump.max(1.0), "value jumped straight to target");
                max_step = max_step.max(step);
                s = next;
            }
        }
        assert!(max_step > 0.0);
    }
}

#[test]
fn converges_to_constant_target() {
    let eps = 1e-2;
    for cfg in configs() {
        for target in [35.0f32, -30.0, 0.5] {
            let mut s = SpringState::at_rest(0.0);
            let mut steps = 0;
            while !(s.value - target).abs().lt(&eps) || !s.velocity.abs().lt(&eps) {
                s = advance(s, target, &cfg, FRAME);
                steps += 1;
                assert!(steps < 60 * 20, "{cfg:?} did not settle on {target}");
            }
            assert!(s.is_settled(eps));
        }
    }
}

#[test]
fn channel_clamps_to_limit_and_stays_finite() {
    let mut ch = SpringChannel::new(PhysicsConfig::MAGNET, 80.0);
    ch.set_target(10_000.0);
    for _ in 0..600 {
        ch.step(FRAME);
        assert!(ch.value().is_finite());
        assert!(ch.value().abs() <= 80.0);
    }
    assert_eq!(ch.value(), 80.0);
    // coming back from the wall is smooth again
    ch.set_target(0.0);
    ch.step(FRAME);
    assert!(ch.value() < 80.0 && ch.value() > 0.0);
}

#[test]
fn channel_ignores_non_finite_targets() {
    let mut ch = SpringChannel::new(PhysicsConfig::TILT, 45.0);
    ch.set_target(20.0);
    ch.set_target(f32::NAN);
    ch.set_target(f32::INFINITY);
    assert_eq!(ch.state().target, 20.0);
    for _ in 0..300 {
        ch.step(FRAME);
    }
    assert!((ch.value() - 20.0).abs() < 0.5);
}

#[test]
fn huge_dt_is_still_stable() {
    let s = advance(
        SpringState::at_rest(0.0),
        35.0,
        &PhysicsConfig::MAGNET,
        Duration::from_secs(2),
    );
    assert!(s.value.is_finite() && s.velocity.is_finite());
    assert!((s.value - 35.0).abs() < 0.1);
}

#[test]
fn very_long_dt_returns_settled_on_target() {
    let start = SpringState {
        value: -3.0,
        velocity: 12.0,
        target: 0.0,
    };
    for secs in [11, 3_600, 40_000, 1_000_000] {
        let s = advance(start, 10.0, &PhysicsConfig::TILT, Duration::from_secs(secs));
        assert_eq!(s, SpringState::at_rest(10.0), "dt={secs}s");
    }
}

#[test]
fn dt_just_under_step_ceiling_is_integrated() {
    let s = advance(
        SpringState::at_rest(0.0),
        10.0,
        &PhysicsConfig::TILT,
        Duration::from_millis(9_999),
    );
    assert!(s.value.is_finite() && s.velocity.is_finite());
    assert!((s.value - 10.0).abs() < 0.01);
}
