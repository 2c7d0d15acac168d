//! Per-frame exponential approach toward a target.
//!
//! Every animated quantity in the deck moves by `current += (target - current) * rate`
//! once per frame. The step is a pure decay toward the fixed point, so it never
//! overshoots for `rate` in (0, 1] and a new target may be set at any time
//! without the visible value jumping.

use glam::Vec3;
use std::f32::consts::{PI, TAU};

/// Desired placement of one visual object.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformTarget {
    pub position: Vec3,
    pub rotation_x: f32,
    pub rotation_y: f32,
    pub scale: f32,
}

impl Default for TransformTarget {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation_x: 0.0,
            rotation_y: 0.0,
            scale: 1.0,
        }
    }
}

#[inline]
fn clamp_rate(rate: f32) -> f32 {
    if rate.is_nan() {
        return 1.0;
    }
    rate.clamp(f32::MIN_POSITIVE, 1.0)
}

#[inline]
pub fn approach(current: f32, target: f32, rate: f32) -> f32 {
    current + (target - current) * clamp_rate(rate)
}

#[inline]
pub fn approach_vec3(current: Vec3, target: Vec3, rate: f32) -> Vec3 {
    current + (target - current) * clamp_rate(rate)
}

/// One smoothing step of a whole transform at a single rate.
pub fn approach_transform(
    current: TransformTarget,
    target: &TransformTarget,
    rate: f32,
) -> TransformTarget {
    TransformTarget {
        position: approach_vec3(current.position, target.position, rate),
        rotation_x: approach(current.rotation_x, target.rotation_x, rate),
        rotation_y: approach(current.rotation_y, target.rotation_y, rate),
        scale: approach(current.scale, target.scale, rate),
    }
}

/// Wrap an angle into (−π, π].
pub fn normalize_angle(a: f32) -> f32 {
    let mut r = a % TAU;
    if r <= -PI {
        r += TAU;
    } else if r > PI {
        r -= TAU;
    }
    r
}

/// Interpolate from `a` to `b` along the shorter arc; result normalized.
pub fn lerp_angle(a: f32, b: f32, t: f32) -> f32 {
    let delta = normalize_angle(b - a);
    normalize_angle(a + delta * t)
}

/// `3p² − 2p³`, clamped to [0, 1].
#[inline]
pub fn smoothstep(p: f32) -> f32 {
    let p = p.clamp(0.0, 1.0);
    p * p * (3.0 - 2.0 * p)
}
