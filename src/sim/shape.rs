//! Shape capabilities and the concrete records that implement them
//!
//! Physics functions are generic over small accessor traits instead of a
//! single entity type, so any game struct exposing the right fields works:
//! - [`HasBox`] / [`HasBoxMut`]: axis-aligned box `{x, y, width, height}` (x,y = top-left)
//! - [`HasCircle`]: circle `{x, y, radius}` (x,y = centre)
//! - [`HasKinematics`]: position, velocity, acceleration and gravity flag

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::math::{Vector2D, VectorPool};

use super::raycast::{RaycastHit, raycast};

/// Read access to an axis-aligned box
pub trait HasBox {
    fn x(&self) -> f64;
    fn y(&self) -> f64;
    fn width(&self) -> f64;
    fn height(&self) -> f64;

    #[inline]
    fn right(&self) -> f64 {
        self.x() + self.width()
    }

    #[inline]
    fn bottom(&self) -> f64 {
        self.y() + self.height()
    }

    #[inline]
    fn center(&self) -> DVec2 {
        DVec2::new(self.x() + self.width() / 2.0, self.y() + self.height() / 2.0)
    }
}

/// Boxes whose position the resolver may move
pub trait HasBoxMut: HasBox {
    fn set_x(&mut self, x: f64);
    fn set_y(&mut self, y: f64);

    #[inline]
    fn translate(&mut self, dx: f64, dy: f64) {
        self.set_x(self.x() + dx);
        self.set_y(self.y() + dy);
    }
}

/// Read access to a circle
pub trait HasCircle {
    fn cx(&self) -> f64;
    fn cy(&self) -> f64;
    fn radius(&self) -> f64;
}

/// State the integrator advances each tick
pub trait HasKinematics {
    fn position(&self) -> DVec2;
    fn set_position(&mut self, position: DVec2);
    fn velocity(&self) -> DVec2;
    fn set_velocity(&mut self, velocity: DVec2);
    fn acceleration(&self) -> DVec2;
    fn set_acceleration(&mut self, acceleration: DVec2);
    fn uses_gravity(&self) -> bool;
}

/// Plain rectangle (platforms, pickups, obstacles)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Grow by `dx` on the left and right and `dy` on the top and bottom
    pub fn inflated(&self, dx: f64, dy: f64) -> Self {
        Self::new(
            self.x - dx,
            self.y - dy,
            self.width + 2.0 * dx,
            self.height + 2.0 * dy,
        )
    }
}

impl HasBox for Rect {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
    fn width(&self) -> f64 {
        self.width
    }
    fn height(&self) -> f64 {
        self.height
    }
}

impl HasBoxMut for Rect {
    fn set_x(&mut self, x: f64) {
        self.x = x;
    }
    fn set_y(&mut self, y: f64) {
        self.y = y;
    }
}

/// Circle given by its centre
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Circle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

impl Circle {
    pub const fn new(x: f64, y: f64, radius: f64) -> Self {
        Self { x, y, radius }
    }
}

impl HasCircle for Circle {
    fn cx(&self) -> f64 {
        self.x
    }
    fn cy(&self) -> f64 {
        self.y
    }
    fn radius(&self) -> f64 {
        self.radius
    }
}

/// A moving box entity (players, projectiles)
///
/// Fields missing from serialized input default to zero/false.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Body {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub vx: f64,
    #[serde(default)]
    pub vy: f64,
    #[serde(default)]
    pub ax: f64,
    #[serde(default)]
    pub ay: f64,
    #[serde(default)]
    pub use_gravity: bool,
    /// Maintained by the game layer; the core never sets it
    #[serde(default)]
    pub is_grounded: bool,
}

impl Body {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_velocity(mut self, vx: f64, vy: f64) -> Self {
        self.vx = vx;
        self.vy = vy;
        self
    }

    pub fn with_gravity(mut self, use_gravity: bool) -> Self {
        self.use_gravity = use_gravity;
        self
    }

    /// Accumulate acceleration for the next tick (cleared by the integrator)
    pub fn push(&mut self, ax: f64, ay: f64) {
        self.ax += ax;
        self.ay += ay;
    }

    #[inline]
    pub fn speed(&self) -> f64 {
        self.velocity().length()
    }

    /// Snapshot of the bounding box
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

impl HasBox for Body {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
    fn width(&self) -> f64 {
        self.width
    }
    fn height(&self) -> f64 {
        self.height
    }
}

impl HasBoxMut for Body {
    fn set_x(&mut self, x: f64) {
        self.x = x;
    }
    fn set_y(&mut self, y: f64) {
        self.y = y;
    }
}

impl HasKinematics for Body {
    fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
    fn set_position(&mut self, position: DVec2) {
        self.x = position.x;
        self.y = position.y;
    }
    fn velocity(&self) -> DVec2 {
        DVec2::new(self.vx, self.vy)
    }
    fn set_velocity(&mut self, velocity: DVec2) {
        self.vx = velocity.x;
        self.vy = velocity.y;
    }
    fn acceleration(&self) -> DVec2 {
        DVec2::new(self.ax, self.ay)
    }
    fn set_acceleration(&mut self, acceleration: DVec2) {
        self.ax = acceleration.x;
        self.ay = acceleration.y;
    }
    fn uses_gravity(&self) -> bool {
        self.use_gravity
    }
}

/// Line segment from `(x1, y1)` to `(x2, y2)`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl LineSegment {
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn length(&self) -> f64 {
        crate::math::distance(self.x1, self.y1, self.x2, self.y2)
    }
}

/// A ray with a finite reach. `direction` is expected to be normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vector2D,
    pub direction: Vector2D,
    pub max_distance: f64,
}

impl Ray {
    pub fn new(origin: Vector2D, direction: Vector2D, max_distance: f64) -> Self {
        Self {
            origin,
            direction,
            max_distance,
        }
    }

    /// Cast against a single box, see [`raycast`]
    pub fn cast<R: HasBox + ?Sized>(&self, pool: &mut VectorPool, rect: &R) -> Option<RaycastHit> {
        raycast(pool, &self.origin, &self.direction, self.max_distance, rect)
    }
}
