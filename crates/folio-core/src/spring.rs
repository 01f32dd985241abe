//! Damped spring animation parameterized by mass, tension and friction.
//!
//! Values are advanced with semi-implicit Euler in sub-steps of at most
//! [`SPRING_MAX_STEP`] seconds, so behaviour is close to frame-rate
//! independent. Once both displacement and velocity fall below the
//! configured precision the value snaps onto its target and the spring
//! reports itself settled.

use crate::constants::{MAX_FRAME_DT, SPRING_MAX_STEP};
use glam::Vec3;
use std::ops::{Add, Mul, Sub};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub mass: f32,
    pub tension: f32,
    pub friction: f32,
    pub precision: f32,
}

impl SpringConfig {
    pub const DEFAULT: SpringConfig = SpringConfig {
        mass: 1.0,
        tension: 170.0,
        friction: 26.0,
        precision: 0.001,
    };
    /// Hover/active response of the selectable targets.
    pub const TARGET: SpringConfig = SpringConfig {
        mass: 1.0,
        tension: 120.0,
        friction: 14.0,
        precision: 0.001,
    };
    /// Snappy scale bump of a held physics object.
    pub const DRAG: SpringConfig = SpringConfig {
        mass: 1.0,
        tension: 300.0,
        friction: 10.0,
        precision: 0.001,
    };
    pub const GREETING_TEXT: SpringConfig = SpringConfig {
        mass: 2.0,
        tension: 200.0,
        friction: 15.0,
        precision: 0.001,
    };
    /// Corner shapes around the greeting text.
    pub const GREETING_CORNER: SpringConfig = SpringConfig {
        mass: 1.0,
        tension: 150.0,
        friction: 10.0,
        precision: 0.001,
    };

    /// Camera fly-to: mass 3, tension 150, friction 2·sqrt(450) (critical).
    pub const CAMERA: SpringConfig = SpringConfig {
        mass: 3.0,
        tension: 150.0,
        friction: 42.426_407,
        precision: 0.001,
    };

    /// Critically damped spring for the given mass and tension.
    pub fn critical(mass: f32, tension: f32) -> Self {
        Self {
            mass,
            tension,
            friction: 2.0 * (mass * tension).sqrt(),
            precision: 0.001,
        }
    }

    pub fn camera() -> Self {
        Self::CAMERA
    }

    pub fn with_precision(mut self, precision: f32) -> Self {
        self.precision = precision;
        self
    }

    /// friction / (2·sqrt(mass·tension)); 1.0 is critical damping.
    pub fn damping_ratio(&self) -> f32 {
        self.friction / (2.0 * (self.mass * self.tension).sqrt())
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Values a [`Spring`] can drive.
pub trait Animatable:
    Copy + PartialEq + Add<Output = Self> + Sub<Output = Self> + Mul<f32, Output = Self>
{
    const ZERO: Self;
    fn magnitude(self) -> f32;
}

impl Animatable for f32 {
    const ZERO: Self = 0.0;
    fn magnitude(self) -> f32 {
        self.abs()
    }
}

impl Animatable for Vec3 {
    const ZERO: Self = Vec3::ZERO;
    fn magnitude(self) -> f32 {
        self.length()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring<T: Animatable> {
    value: T,
    velocity: T,
    target: T,
    config: SpringConfig,
}

pub type SpringF32 = Spring<f32>;
pub type SpringVec3 = Spring<Vec3>;

impl<T: Animatable> Spring<T> {
    /// A spring resting at `value` with the default configuration.
    pub fn new(value: T) -> Self {
        Self::with_config(value, SpringConfig::DEFAULT)
    }

    pub fn with_config(value: T, config: SpringConfig) -> Self {
        Self {
            value,
            velocity: T::ZERO,
            target: value,
            config,
        }
    }

    /// Change the goal, keeping the current value and velocity.
    pub fn set_target(&mut self, target: T) {
        self.target = target;
    }

    /// Jump to `value` and rest there.
    pub fn set_immediate(&mut self, value: T) {
        self.value = value;
        self.target = value;
        self.velocity = T::ZERO;
    }

    /// Restart from `from` at rest, heading toward `target`.
    pub fn restart(&mut self, from: T, target: T) {
        self.value = from;
        self.velocity = T::ZERO;
        self.target = target;
    }

    pub fn set_config(&mut self, config: SpringConfig) {
        self.config = config;
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn velocity(&self) -> T {
        self.velocity
    }

    pub fn target(&self) -> T {
        self.target
    }

    pub fn is_settled(&self) -> bool {
        self.value == self.target && self.velocity == T::ZERO
    }

    /// Advance by `dt` seconds and return the new value.
    pub fn update(&mut self, dt: f32) -> T {
        let dt = if dt.is_finite() {
            dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        if dt <= 0.0 || self.is_settled() {
            return self.value;
        }

        let steps = (dt / SPRING_MAX_STEP).ceil().max(1.0) as u32;
        let h = dt / steps as f32;
        let inv_mass = 1.0 / self.config.mass.max(f32::EPSILON);
        for _ in 0..steps {
            let displacement = self.value - self.target;
            let force =
                displacement * -self.config.tension + self.velocity * -self.config.friction;
            self.velocity = self.velocity + force * (inv_mass * h);
            self.value = self.value + self.velocity * h;
        }

        let precision = self.config.precision;
        if (self.value - self.target).magnitude() < precision
            && self.velocity.magnitude() < precision
        {
            self.value = self.target;
            self.velocity = T::ZERO;
        }
        self.value
    }
}
