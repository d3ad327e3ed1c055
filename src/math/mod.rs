//! Scalar math and 2D vector utilities
//!
//! - `vector`: `Vector2D` with in-place chainable arithmetic
//! - `pool`: `VectorPool` free-list for scratch vectors
//! - free functions: clamping, interpolation, range mapping, angle wrapping,
//!   easing and seeded random helpers
//!
//! Everything here is pure; the only state lives in the pool the caller owns.

pub mod pool;
pub mod vector;

pub use pool::VectorPool;
pub use vector::Vector2D;

use std::f64::consts::{PI, TAU};

use rand::Rng;

use crate::consts::MATH_EPSILON;

/// Clamp a value between min and max
#[inline]
pub fn clamp(value: f64, min: f64, max: f64) -> f64 {
    value.max(min).min(max)
}

/// Linear interpolation (t is not clamped)
#[inline]
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start + (end - start) * t
}

/// Euclidean distance between two points
#[inline]
pub fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x2 - x1;
    let dy = y2 - y1;
    (dx * dx + dy * dy).sqrt()
}

#[inline]
pub fn deg_to_rad(degrees: f64) -> f64 {
    degrees.to_radians()
}

#[inline]
pub fn rad_to_deg(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Approximate equality within `epsilon`
#[inline]
pub fn approx_eq(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

pub fn is_power_of_two(value: u32) -> bool {
    value.is_power_of_two()
}

/// Smallest power of two >= `value`.
///
/// Returns 1 for 0. Inputs above 2^31 have no `u32` answer and saturate to
/// 2^31, which is then smaller than `value`.
pub fn next_power_of_two(value: u32) -> u32 {
    value.checked_next_power_of_two().unwrap_or(1 << 31)
}

/// Wrap an angle into [-π, π]. Angles already in range come back unchanged.
pub fn wrap_angle(angle: f64) -> f64 {
    if !angle.is_finite() || (-PI..=PI).contains(&angle) {
        return angle;
    }
    (angle + PI).rem_euclid(TAU) - PI
}

/// Linear interpolation with t clamped to [0, 1]
pub fn lerp_clamped(start: f64, end: f64, t: f64) -> f64 {
    lerp(start, end, clamp(t, 0.0, 1.0))
}

/// Inverse of [`lerp`], clamped to [0, 1]. Returns 0 for an empty range.
pub fn inverse_lerp(start: f64, end: f64, value: f64) -> f64 {
    if approx_eq(start, end, MATH_EPSILON) {
        return 0.0;
    }
    clamp((value - start) / (end - start), 0.0, 1.0)
}

/// Hermite smoothstep between two edges
pub fn smoothstep(edge0: f64, edge1: f64, x: f64) -> f64 {
    if edge0 == edge1 {
        // Degenerate edges collapse to a step function
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = clamp((x - edge0) / (edge1 - edge0), 0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// -1, 0 or 1. Unlike `f64::signum`, zero maps to zero.
#[inline]
pub fn sign(value: f64) -> f64 {
    if value > 0.0 {
        1.0
    } else if value < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Inclusive range check
#[inline]
pub fn in_range(value: f64, min: f64, max: f64) -> bool {
    value >= min && value <= max
}

/// Map a value from one range to another (unclamped).
///
/// An empty input range maps everything to `out_min`.
pub fn map_range(value: f64, in_min: f64, in_max: f64, out_min: f64, out_max: f64) -> f64 {
    if in_min == in_max {
        return out_min;
    }
    out_min + (value - in_min) * (out_max - out_min) / (in_max - in_min)
}

/// Fraction of the way from min to max, clamped to [0, 1]
pub fn percent(value: f64, min: f64, max: f64) -> f64 {
    if min == max {
        return 0.0;
    }
    clamp((value - min) / (max - min), 0.0, 1.0)
}

/// Logarithmic interpolation; falls back to [`lerp`] for non-positive ends
pub fn log_lerp(start: f64, end: f64, t: f64) -> f64 {
    if start <= 0.0 || end <= 0.0 {
        return lerp(start, end, t);
    }
    start * (end / start).powf(t)
}

/// Exponential interpolation: `start + (end - start) * t^power`
pub fn exp_lerp(start: f64, end: f64, t: f64, power: f64) -> f64 {
    start + (end - start) * t.powf(power)
}

/// Move `current` a fraction `damping` of the way toward `target`
#[inline]
pub fn damp(current: f64, target: f64, damping: f64) -> f64 {
    current + (target - current) * damping
}

/// Angular [`damp`] that takes the short way around the circle
pub fn damp_angle(current: f64, target: f64, damping: f64) -> f64 {
    let delta = wrap_angle(target - current);
    current + delta * damping
}

/// Bounce easing over [0, 1] with a number of decaying bounces
pub fn bounce(t: f64, bounces: u32) -> f64 {
    if t >= 1.0 {
        return 1.0;
    }

    let bounce_height = 1.0 / 2f64.powi(i32::try_from(bounces).unwrap_or(i32::MAX));
    if t < bounce_height {
        return t / bounce_height;
    }

    let bounce_time = (t - bounce_height) / (1.0 - bounce_height);
    let bounce_t = bounce_time * f64::from(bounces);
    let bounce_index = bounce_t.floor();
    let bounce_local = bounce_t - bounce_index;

    (bounce_local * PI).sin().abs() * 0.5f64.powf(bounce_index + 1.0)
}

/// Elastic easing (overshoots and settles on 1)
pub fn elastic(t: f64, amplitude: f64, period: f64) -> f64 {
    if t == 0.0 || t == 1.0 {
        return t;
    }

    let s = period / 4.0;
    let decay = amplitude * 2f64.powf(-10.0 * t);
    let oscillation = ((t - s) * TAU / period).sin();

    1.0 + decay * oscillation
}

/// Uniform random value in [min, max)
pub fn random_range<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    rng.random::<f64>() * (max - min) + min
}

/// Random element of a slice, `None` if it is empty
pub fn random_choice<'a, T, R: Rng>(rng: &mut R, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    items.get(rng.random_range(0..items.len()))
}
