//! Damped spring smoothing.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Largest integration step; longer frames are split into substeps.
const MAX_SUBSTEP_SECS: f32 = 1.0 / 240.0;

/// Frames longer than this are treated as a resume after suspension.
const MAX_FRAME_SECS: f32 = 0.1;

/// Upper bound on `sqrt(stiffness / mass)` and `damping / mass`, in 1/s.
/// Together with the substep rule below it caps a frame at 1000 substeps.
const MAX_RATE: f32 = 5_000.0;

/// Physical parameters of a spring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
    /// Distance from the target under which the spring may come to rest.
    pub rest_delta: f32,
    /// Speed under which the spring may come to rest.
    pub rest_speed: f32,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::POINTER
    }
}

impl SpringConfig {
    /// Spring used for pointer tracking.
    pub const POINTER: Self = Self {
        stiffness: 200.0,
        damping: 25.0,
        mass: 0.5,
        rest_delta: 0.01,
        rest_speed: 0.01,
    };

    /// Spring used for the name entrance.
    pub const ENTRANCE: Self = Self {
        stiffness: 200.0,
        damping: 20.0,
        mass: 1.0,
        rest_delta: 0.001,
        rest_speed: 0.001,
    };

    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            ..Self::POINTER
        }
    }

    /// Damping ratio; 1.0 is critical damping.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass.max(f32::EPSILON)).sqrt())
    }

    /// Replace non-finite or non-positive parameters with the pointer defaults.
    ///
    /// Stiffness and damping are also capped relative to the mass so the
    /// spring stays stable at the smallest substep [`MotionValue::tick`] takes.
    pub fn sanitized(self) -> Self {
        let pick = |v: f32, fallback: f32| if v.is_finite() && v > 0.0 { v } else { fallback };
        let mass = pick(self.mass, Self::POINTER.mass);
        let stiffness = pick(self.stiffness, Self::POINTER.stiffness);
        let damping = if self.damping.is_finite() && self.damping >= 0.0 {
            self.damping
        } else {
            Self::POINTER.damping
        };
        Self {
            stiffness: stiffness.min(mass * MAX_RATE * MAX_RATE),
            damping: damping.min(mass * MAX_RATE),
            mass,
            rest_delta: pick(self.rest_delta, Self::POINTER.rest_delta),
            rest_speed: pick(self.rest_speed, Self::POINTER.rest_speed),
        }
    }

    /// Largest step the integrator stays stable with: half the inverse of
    /// the faster of the natural frequency and the damping rate.
    fn max_substep(&self) -> f32 {
        let rate = (self.stiffness / self.mass)
            .sqrt()
            .max(self.damping / self.mass);
        if rate > 0.0 {
            MAX_SUBSTEP_SECS.min(0.5 / rate)
        } else {
            MAX_SUBSTEP_SECS
        }
    }
}

/// A scalar that follows its target through a spring.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionValue {
    value: f32,
    velocity: f32,
    target: f32,
    config: SpringConfig,
    at_rest: bool,
}

impl MotionValue {
    /// A value resting at `initial`.
    pub fn new(initial: f32, config: SpringConfig) -> Self {
        Self {
            value: initial,
            velocity: 0.0,
            target: initial,
            config: config.sanitized(),
            at_rest: true,
        }
    }

    pub fn get(&self) -> f32 {
        self.value
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Point the spring at a new target. Non-finite targets are ignored.
    pub fn set_target(&mut self, target: f32) {
        if !target.is_finite() || target == self.target {
            return;
        }
        self.target = target;
        self.at_rest = false;
    }

    /// Move to `value` immediately, discarding velocity.
    pub fn jump(&mut self, value: f32) {
        if !value.is_finite() {
            return;
        }
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
        self.at_rest = true;
    }

    /// Advance the spring by `dt`. Returns whether the value moved.
    pub fn tick(&mut self, dt: Duration) -> bool {
        if self.at_rest {
            return false;
        }
        let before = self.value;
        let frame = dt.as_secs_f32().min(MAX_FRAME_SECS);
        let steps = (frame / self.config.max_substep()).ceil().max(1.0) as u32;
        let h = frame / steps as f32;
        let SpringConfig {
            stiffness,
            damping,
            mass,
            rest_delta,
            rest_speed,
        } = self.config;

        for _ in 0..steps {
            let displacement = self.value - self.target;
            let acceleration = (-stiffness * displacement - damping * self.velocity) / mass;
            self.velocity += acceleration * h;
            self.value += self.velocity * h;
        }

        if self.velocity.abs() < rest_speed && (self.value - self.target).abs() < rest_delta {
            self.value = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }

        self.value != before
    }
}
