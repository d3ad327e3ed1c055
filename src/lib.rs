//! Arcade Physics - 2D physics and collision core for a platform tag game
//!
//! Core modules:
//! - `math`: Scalar helpers, `Vector2D` and its reuse pool
//! - `sim`: Integration, collision tests, resolution, raycast and sweep
//! - `config`: World constants as a loadable `PhysicsConfig`

pub mod config;
pub mod math;
pub mod sim;

pub use config::{ConfigError, PhysicsConfig};
pub use math::{Vector2D, VectorPool};
pub use sim::PhysicsEngine;

/// Physics configuration constants
pub mod consts {
    /// Nominal frame step (60 Hz)
    pub const SIM_DT: f64 = 1.0 / 60.0;
    /// Largest frame delta fed to the integrator, guards against long stalls
    pub const MAX_DT: f64 = 0.1;

    /// Logical world size (not the viewport)
    pub const WORLD_WIDTH: f64 = 1920.0;
    pub const WORLD_HEIGHT: f64 = 1080.0;

    /// Downward acceleration, units/s²
    pub const GRAVITY: f64 = 800.0;
    /// Velocity multiplier applied every tick
    pub const FRICTION: f64 = 0.9;

    /// Released vectors beyond this are dropped
    pub const POOL_CAPACITY: usize = 100;

    /// Segment determinant below which lines count as parallel
    pub const PARALLEL_EPSILON: f64 = 1e-4;
    /// Tolerance for matching a raycast hit to a box face
    pub const FACE_EPSILON: f64 = 1e-3;
    /// Default tolerance for approximate float comparison
    pub const MATH_EPSILON: f64 = 1e-4;
}
