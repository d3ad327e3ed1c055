//! Positional collision response for boxes
//!
//! Each pair is pushed apart independently along a single axis. There is no
//! impulse exchange and no iterative solver; stacked contacts may take a few
//! ticks to settle.

use super::shape::{HasBox, HasBoxMut};
use crate::math::{Vector2D, VectorPool};

/// Penetration depth of two boxes on each axis, `(x, y)`.
///
/// Positive on both axes iff the boxes overlap.
pub fn overlap<A, B>(a: &A, b: &B) -> (f64, f64)
where
    A: HasBox + ?Sized,
    B: HasBox + ?Sized,
{
    let overlap_x = (a.right() - b.x()).min(b.right() - a.x());
    let overlap_y = (a.bottom() - b.y()).min(b.bottom() - a.y());
    (overlap_x, overlap_y)
}

/// Push two overlapping boxes apart along the axis of least overlap.
///
/// Each box moves half the overlap. Exact ties resolve on X.
pub fn resolve_collision<A, B>(a: &mut A, b: &mut B)
where
    A: HasBoxMut + ?Sized,
    B: HasBoxMut + ?Sized,
{
    let (overlap_x, overlap_y) = overlap(&*a, &*b);

    if overlap_x <= overlap_y {
        let half = overlap_x / 2.0;
        let dir = if a.x() < b.x() { -1.0 } else { 1.0 };
        a.translate(dir * half, 0.0);
        b.translate(-dir * half, 0.0);
    } else {
        let half = overlap_y / 2.0;
        let dir = if a.y() < b.y() { -1.0 } else { 1.0 };
        a.translate(0.0, dir * half);
        b.translate(0.0, -dir * half);
    }
}

/// Axis-aligned normal pointing from `a` toward `b`.
///
/// `(±1, 0)` when the boxes overlap less on X, otherwise `(0, ±1)`. The vector
/// is borrowed from `pool`; the caller must release it.
pub fn get_collision_normal<A, B>(pool: &mut VectorPool, a: &A, b: &B) -> Vector2D
where
    A: HasBox + ?Sized,
    B: HasBox + ?Sized,
{
    let delta = b.center() - a.center();

    let overlap_x = (a.width() + b.width()) / 2.0 - delta.x.abs();
    let overlap_y = (a.height() + b.height()) / 2.0 - delta.y.abs();

    if overlap_x < overlap_y {
        pool.get(if delta.x > 0.0 { 1.0 } else { -1.0 }, 0.0)
    } else {
        pool.get(0.0, if delta.y > 0.0 { 1.0 } else { -1.0 })
    }
}

/// Move `a` against `normal` and `b` along it, each by half the smaller
/// axis overlap. Returns that overlap.
pub fn separate_aabb<A, B>(a: &mut A, b: &mut B, normal: &Vector2D) -> f64
where
    A: HasBoxMut + ?Sized,
    B: HasBoxMut + ?Sized,
{
    let (overlap_x, overlap_y) = overlap(&*a, &*b);
    let separation = overlap_x.min(overlap_y);
    let half = separation * 0.5;

    a.translate(-normal.x * half, -normal.y * half);
    b.translate(normal.x * half, normal.y * half);

    separation
}
