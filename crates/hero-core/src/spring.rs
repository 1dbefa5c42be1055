//! Damped spring integration.
//!
//! Each animated channel (translate x/y, tilt x/y) is a mass on a spring
//! pulled toward a target: `m·a = -k·(x - target) - c·v`. The step is
//! semi-implicit Euler, split into fixed sub-steps so stiff profiles stay
//! stable at frame-rate `dt`.

use crate::constants::{
    MAGNET_DAMPING, MAGNET_MASS, MAGNET_STIFFNESS, MAX_SUBSTEPS, MAX_SUBSTEP_SEC, TILT_DAMPING,
    TILT_MASS, TILT_STIFFNESS,
};
use crate::error::ConfigError;
use std::time::Duration;

/// Stiffness, damping and mass of a spring. Always strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicsConfig {
    stiffness: f32,
    damping: f32,
    mass: f32,
}

impl PhysicsConfig {
    /// Snappy profile used by the magnetic translation channels.
    pub const MAGNET: PhysicsConfig = PhysicsConfig {
        stiffness: MAGNET_STIFFNESS,
        damping: MAGNET_DAMPING,
        mass: MAGNET_MASS,
    };

    /// Heavier profile used by the tilt channels.
    pub const TILT: PhysicsConfig = PhysicsConfig {
        stiffness: TILT_STIFFNESS,
        damping: TILT_DAMPING,
        mass: TILT_MASS,
    };

    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Result<Self, ConfigError> {
        for (field, value) in [
            ("stiffness", stiffness),
            ("damping", damping),
            ("mass", mass),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositivePhysics { field, value });
            }
        }
        Ok(Self {
            stiffness,
            damping,
            mass,
        })
    }

    pub fn stiffness(&self) -> f32 {
        self.stiffness
    }

    pub fn damping(&self) -> f32 {
        self.damping
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringState {
    pub value: f32,
    pub velocity: f32,
    pub target: f32,
}

impl SpringState {
    pub fn at_rest(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
        }
    }

    pub fn is_settled(&self, epsilon: f32) -> bool {
        (self.value - self.target).abs() < epsilon && self.velocity.abs() < epsilon
    }
}

/// Advance `state` toward `target` by `dt`.
///
/// Deterministic for identical inputs. A target change only alters the
/// acceleration, so `value` and `velocity` stay continuous. A `dt` longer
/// than `MAX_SUBSTEPS` sub-steps lands the spring at rest on its target.
pub fn advance(
    state: SpringState,
    target: f32,
    config: &PhysicsConfig,
    dt: Duration,
) -> SpringState {
    let dt_secs = dt.as_secs_f32();
    let steps = (dt_secs / MAX_SUBSTEP_SEC).ceil();
    if steps > MAX_SUBSTEPS as f32 {
        return SpringState::at_rest(target);
    }
    let steps = steps as u32;
    if steps == 0 {
        return SpringState { target, ..state };
    }
    let h = dt_secs / steps as f32;
    let mut value = state.value;
    let mut velocity = state.velocity;
    for _ in 0..steps {
        let accel =
            (-config.stiffness * (value - target) - config.damping * velocity) / config.mass;
        velocity += accel * h;
        value += velocity * h;
    }
    SpringState {
        value,
        velocity,
        target,
    }
}

/// One spring with its profile and a magnitude ceiling.
#[derive(Clone, Debug)]
pub struct SpringChannel {
    state: SpringState,
    config: PhysicsConfig,
    limit: f32,
}

impl SpringChannel {
    pub fn new(config: PhysicsConfig, limit: f32) -> Self {
        Self {
            state: SpringState::default(),
            config,
            limit: limit.abs(),
        }
    }

    pub fn state(&self) -> SpringState {
        self.state
    }

    pub fn value(&self) -> f32 {
        self.state.value
    }

    /// Non-finite targets are dropped; the previous target stays in force.
    pub fn set_target(&mut self, target: f32) {
        if target.is_finite() {
            self.state.target = target;
        }
    }

    pub fn step(&mut self, dt: Duration) {
        let next = advance(self.state, self.state.target, &self.config, dt);
        self.state = self.clamp(next);
    }

    fn clamp(&self, mut s: SpringState) -> SpringState {
        if !s.value.is_finite() || !s.velocity.is_finite() {
            return SpringState {
                target: s.target,
                ..SpringState::default()
            };
        }
        if s.value.abs() > self.limit {
            s.value = s.value.clamp(-self.limit, self.limit);
            // pushing further out is pointless at the wall
            if s.velocity.signum() == s.value.signum() {
                s.velocity = 0.0;
            }
        }
        s
    }
}
