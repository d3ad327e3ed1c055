//! Per-tick force integration
//!
//! Semi-implicit Euler with a flat friction multiplier. Friction is applied
//! every tick whether or not the entity is grounded; game tuning depends on it.

use glam::DVec2;

use super::shape::{HasBoxMut, HasKinematics};
use crate::config::PhysicsConfig;
use crate::math::clamp;

/// Advances entity kinematics using a [`PhysicsConfig`]
#[derive(Debug, Clone, Default)]
pub struct PhysicsEngine {
    config: PhysicsConfig,
}

impl PhysicsEngine {
    pub fn new(config: PhysicsConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PhysicsConfig {
        &self.config
    }

    /// Advance one entity by `dt` seconds.
    ///
    /// `dt` must already be clamped by the caller (see
    /// [`PhysicsConfig::clamp_dt`]). Acceleration is an impulse for this tick
    /// only and is reset to zero afterwards.
    pub fn apply_physics<E: HasKinematics + ?Sized>(&self, entity: &mut E, dt: f64) {
        let mut vel = entity.velocity() + entity.acceleration() * dt;

        if entity.uses_gravity() {
            vel.y += self.config.gravity * dt;
        }

        vel *= self.config.friction;

        entity.set_velocity(vel);
        entity.set_position(entity.position() + vel * dt);
        entity.set_acceleration(DVec2::ZERO);
    }

    /// Clamp an entity's box inside the world bounds
    pub fn keep_in_bounds<E: HasBoxMut + ?Sized>(&self, entity: &mut E) {
        let max_x = self.config.world_width - entity.width();
        let max_y = self.config.world_height - entity.height();
        entity.set_x(clamp(entity.x(), 0.0, max_x));
        entity.set_y(clamp(entity.y(), 0.0, max_y));
    }
}
