//! Physics core
//!
//! Everything that runs per simulation tick. Pure functions over shape
//! capabilities, plus the integrator. Rules:
//! - No rendering, input or game-rule dependencies
//! - Scratch vectors come from a caller-owned `VectorPool`
//! - Only the integrator and resolver mutate entities

pub mod collision;
pub mod integrator;
pub mod raycast;
pub mod resolve;
pub mod shape;

pub use collision::{
    check_circle_collision, check_circle_rect_collision, check_collision, check_line_collision,
    check_point_in_circle, check_point_in_rect,
};
pub use integrator::PhysicsEngine;
pub use raycast::{RaycastHit, SweepHit, raycast, sweep_aabb};
pub use resolve::{get_collision_normal, overlap, resolve_collision, separate_aabb};
pub use shape::{Body, Circle, HasBox, HasBoxMut, HasCircle, HasKinematics, LineSegment, Ray, Rect};
