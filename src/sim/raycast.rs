//! Ray vs box and swept box vs box
//!
//! `raycast` is the slab method: clip the ray's parametric range against the
//! X and Y slabs of the box. Axis-aligned rays divide by zero on purpose; the
//! resulting infinities give the right slab bounds.
//!
//! `sweep_aabb` reduces a moving box to a point by inflating the target box
//! by half the mover's extents (Minkowski sum), then raycasts from the
//! mover's centre. This catches fast movers that would tunnel through thin
//! obstacles between ticks.

use super::shape::{HasBox, HasKinematics, Rect};
use crate::consts::FACE_EPSILON;
use crate::math::{Vector2D, VectorPool};

/// Where a ray first enters a box.
///
/// `point` and `normal` are borrowed from the pool passed to [`raycast`];
/// hand them back with [`RaycastHit::release`].
#[derive(Debug, PartialEq)]
pub struct RaycastHit {
    /// Distance along the ray (negative if the origin is inside the box)
    pub distance: f64,
    pub point: Vector2D,
    /// Outward normal of the face that was struck
    pub normal: Vector2D,
}

impl RaycastHit {
    pub fn release(self, pool: &mut VectorPool) {
        pool.release(self.point);
        pool.release(self.normal);
    }
}

/// Predicted contact between a moving and a stationary box within one tick.
///
/// `normal` is borrowed from the pool passed to [`sweep_aabb`].
#[derive(Debug, PartialEq)]
pub struct SweepHit {
    /// Seconds until contact, in `[0, dt]` for an approaching mover
    pub time: f64,
    pub normal: Vector2D,
    pub will_collide: bool,
}

impl SweepHit {
    pub fn release(self, pool: &mut VectorPool) {
        pool.release(self.normal);
    }
}

/// Cast a ray against a box.
///
/// `direction` should be normalized so distances are in world units. Returns
/// `None` if the box is behind the ray, missed, or beyond `max_distance`.
pub fn raycast<R: HasBox + ?Sized>(
    pool: &mut VectorPool,
    origin: &Vector2D,
    direction: &Vector2D,
    max_distance: f64,
    rect: &R,
) -> Option<RaycastHit> {
    let inv_dir = pool.get(1.0 / direction.x, 1.0 / direction.y);

    let t1 = (rect.x() - origin.x) * inv_dir.x;
    let t2 = (rect.right() - origin.x) * inv_dir.x;
    let t3 = (rect.y() - origin.y) * inv_dir.y;
    let t4 = (rect.bottom() - origin.y) * inv_dir.y;

    pool.release(inv_dir);

    let tmin = t1.min(t2).max(t3.min(t4));
    let tmax = t1.max(t2).min(t3.max(t4));

    if tmax < 0.0 || tmin > tmax || tmin > max_distance {
        return None;
    }

    let point = pool.get(
        origin.x + direction.x * tmin,
        origin.y + direction.y * tmin,
    );

    let local_x = point.x - rect.x();
    let local_y = point.y - rect.y();

    let normal = if local_x.abs() < FACE_EPSILON {
        pool.get(-1.0, 0.0)
    } else if (local_x - rect.width()).abs() < FACE_EPSILON {
        pool.get(1.0, 0.0)
    } else if local_y.abs() < FACE_EPSILON {
        pool.get(0.0, -1.0)
    } else {
        // Bottom face, or a degenerate hit that matched no edge
        pool.get(0.0, 1.0)
    };

    Some(RaycastHit {
        distance: tmin,
        point,
        normal,
    })
}

/// Continuous collision test of `moving` against `stationary` over `dt`.
///
/// Returns `None` when `moving` has no usable velocity (zero or non-finite)
/// or won't reach the box this tick.
pub fn sweep_aabb<M, S>(
    pool: &mut VectorPool,
    moving: &M,
    stationary: &S,
    dt: f64,
) -> Option<SweepHit>
where
    M: HasBox + HasKinematics + ?Sized,
    S: HasBox + ?Sized,
{
    let velocity = moving.velocity();
    let speed = velocity.length();
    // Catches zero as well as NaN or infinite velocity
    if !(speed > 0.0 && speed.is_finite()) {
        return None;
    }

    let expanded = Rect::new(
        stationary.x() - moving.width() / 2.0,
        stationary.y() - moving.height() / 2.0,
        stationary.width() + moving.width(),
        stationary.height() + moving.height(),
    );

    let center = moving.center();
    let origin = pool.get(center.x, center.y);
    let mut direction = pool.get(velocity.x, velocity.y);
    direction.normalize();

    let hit = raycast(pool, &origin, &direction, speed * dt, &expanded);

    pool.release(origin);
    pool.release(direction);

    hit.map(|hit| {
        let RaycastHit {
            distance,
            point,
            normal,
        } = hit;
        pool.release(point);
        SweepHit {
            time: distance / speed,
            normal,
            will_collide: true,
        }
    })
}
