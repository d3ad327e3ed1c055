//! 2D vector with in-place, chainable arithmetic
//!
//! `Vector2D` is deliberately not `Copy`. Scratch vectors are moved out of a
//! [`VectorPool`] by `get` and moved back in by `release`, so a vector can't be
//! handed back twice.

use std::fmt;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::VectorPool;

/// Mutable 2D vector (screen coordinates: +y points down)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub const ZERO: Self = Self::new(0.0, 0.0);
    pub const UP: Self = Self::new(0.0, -1.0);
    pub const DOWN: Self = Self::new(0.0, 1.0);
    pub const LEFT: Self = Self::new(-1.0, 0.0);
    pub const RIGHT: Self = Self::new(1.0, 0.0);

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Overwrite this vector with another's components
    #[inline]
    pub fn copy_from(&mut self, other: &Vector2D) -> &mut Self {
        self.set(other.x, other.y)
    }

    #[inline]
    pub fn add(&mut self, other: &Vector2D) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self
    }

    #[inline]
    pub fn subtract(&mut self, other: &Vector2D) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self
    }

    #[inline]
    pub fn scale(&mut self, scalar: f64) -> &mut Self {
        self.x *= scalar;
        self.y *= scalar;
        self
    }

    /// Divide by a scalar. Dividing by zero leaves the vector untouched.
    #[inline]
    pub fn divide(&mut self, scalar: f64) -> &mut Self {
        if scalar != 0.0 {
            self.x /= scalar;
            self.y /= scalar;
        }
        self
    }

    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    #[inline]
    pub fn magnitude_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Scale to unit length. The zero vector stays zero.
    pub fn normalize(&mut self) -> &mut Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            self.divide(mag);
        }
        self
    }

    /// Normalized copy borrowed from `pool`
    pub fn normalized(&self, pool: &mut VectorPool) -> Vector2D {
        let mut result = pool.get(self.x, self.y);
        result.normalize();
        result
    }

    /// Copy borrowed from `pool`
    pub fn clone_in(&self, pool: &mut VectorPool) -> Vector2D {
        pool.get(self.x, self.y)
    }

    #[inline]
    pub fn dot(&self, other: &Vector2D) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Scalar (z component) of the 3D cross product
    #[inline]
    pub fn cross(&self, other: &Vector2D) -> f64 {
        self.x * other.y - self.y * other.x
    }

    #[inline]
    pub fn distance_to(&self, other: &Vector2D) -> f64 {
        self.distance_to_squared(other).sqrt()
    }

    #[inline]
    pub fn distance_to_squared(&self, other: &Vector2D) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn lerp(&mut self, other: &Vector2D, t: f64) -> &mut Self {
        self.x = super::lerp(self.x, other.x, t);
        self.y = super::lerp(self.y, other.y, t);
        self
    }

    /// Clamp each component between the matching components of `min` and `max`
    pub fn clamp(&mut self, min: &Vector2D, max: &Vector2D) -> &mut Self {
        self.x = super::clamp(self.x, min.x, max.x);
        self.y = super::clamp(self.y, min.y, max.y);
        self
    }

    /// Component-wise equality within `tolerance`
    pub fn approx_eq(&self, other: &Vector2D, tolerance: f64) -> bool {
        (self.x - other.x).abs() <= tolerance && (self.y - other.y).abs() <= tolerance
    }

    /// Angle from +x in radians
    #[inline]
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Rotate counter-clockwise (in math orientation) by `angle` radians
    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        let rotated = DVec2::from_angle(angle).rotate(self.as_dvec2());
        self.set(rotated.x, rotated.y)
    }

    #[inline]
    pub fn zero(&mut self) -> &mut Self {
        self.set(0.0, 0.0)
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    #[inline]
    pub fn as_dvec2(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

impl From<DVec2> for Vector2D {
    fn from(v: DVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<&Vector2D> for DVec2 {
    fn from(v: &Vector2D) -> Self {
        v.as_dvec2()
    }
}

impl From<Vector2D> for DVec2 {
    fn from(v: Vector2D) -> Self {
        v.as_dvec2()
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector2D({:.2}, {:.2})", self.x, self.y)
    }
}
