//! Per-tick easing
//!
//! An ease rate is the fraction of the remaining distance covered in one tick at
//! the reference tick rate. Other frame times use the equivalent exponential
//! factor so motion speed does not depend on frame rate.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Tick rate the per-tick fractions are expressed against
pub const REFERENCE_TICK_RATE: f32 = 60.0;

/// Values this close to their target snap onto it
pub const SETTLE_EPSILON: f32 = 1e-4;

/// Smallest accepted ease rate
pub const MIN_EASE_RATE: f32 = 0.001;

/// Fraction of remaining distance covered per reference tick, in (0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "f32", into = "f32")]
pub struct EaseRate(f32);

impl EaseRate {
    /// Door swing rate
    pub const DOOR: EaseRate = EaseRate(0.1);
    /// Orbit camera rate
    pub const CAMERA: EaseRate = EaseRate(0.05);

    /// Create a rate, clamped into the legal range
    pub fn new(per_tick: f32) -> Self {
        if per_tick.is_nan() {
            return Self(MIN_EASE_RATE);
        }
        Self(per_tick.clamp(MIN_EASE_RATE, 1.0))
    }

    pub fn per_tick(&self) -> f32 {
        self.0
    }

    /// Interpolation factor for a step of `dt` seconds
    pub fn factor(&self, dt: f32) -> f32 {
        if dt <= 0.0 || !dt.is_finite() {
            return 0.0;
        }
        let remaining = (1.0 - self.0).powf(dt * REFERENCE_TICK_RATE);
        (1.0 - remaining).clamp(0.0, 1.0)
    }
}

impl From<f32> for EaseRate {
    fn from(per_tick: f32) -> Self {
        EaseRate::new(per_tick)
    }
}

impl From<EaseRate> for f32 {
    fn from(rate: EaseRate) -> Self {
        rate.0
    }
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Move `current` toward `target` by `factor`, settling when close enough
pub fn ease_toward(current: f32, target: f32, factor: f32) -> f32 {
    let next = lerp(current, target, factor);
    if (target - next).abs() < SETTLE_EPSILON {
        target
    } else {
        next
    }
}

/// Vector form of [`ease_toward`]
pub fn ease_vec3_toward(current: Vec3, target: Vec3, factor: f32) -> Vec3 {
    let next = current.lerp(target, factor);
    if next.distance(target) < SETTLE_EPSILON {
        target
    } else {
        next
    }
}
