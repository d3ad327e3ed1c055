//! Pairwise collision predicates
//!
//! Stateless overlap tests between boxes, circles, segments and points. No
//! broad phase: callers test the pairs they care about directly.
//!
//! Boundary conventions differ per test and are relied on by the game:
//! - box/box and circle/circle: touching does NOT count
//! - point/box and point/circle: touching DOES count

use super::shape::{HasBox, HasCircle, LineSegment};
use crate::consts::PARALLEL_EPSILON;
use crate::math::clamp;

/// Open-interval AABB overlap
pub fn check_collision<A, B>(a: &A, b: &B) -> bool
where
    A: HasBox + ?Sized,
    B: HasBox + ?Sized,
{
    a.x() < b.right() && a.right() > b.x() && a.y() < b.bottom() && a.bottom() > b.y()
}

/// Circle overlap: centre distance strictly less than the radius sum
pub fn check_circle_collision<A, B>(a: &A, b: &B) -> bool
where
    A: HasCircle + ?Sized,
    B: HasCircle + ?Sized,
{
    let dx = a.cx() - b.cx();
    let dy = a.cy() - b.cy();
    (dx * dx + dy * dy).sqrt() < a.radius() + b.radius()
}

/// Circle vs box, via the closest point on the box to the circle centre
pub fn check_circle_rect_collision<C, R>(circle: &C, rect: &R) -> bool
where
    C: HasCircle + ?Sized,
    R: HasBox + ?Sized,
{
    let closest_x = clamp(circle.cx(), rect.x(), rect.right());
    let closest_y = clamp(circle.cy(), rect.y(), rect.bottom());

    let dx = circle.cx() - closest_x;
    let dy = circle.cy() - closest_y;

    dx * dx + dy * dy < circle.radius() * circle.radius()
}

/// Segment intersection by solving both parametric forms.
///
/// Parallel (and near-parallel) segments never intersect, even when collinear
/// and overlapping.
pub fn check_line_collision(line1: &LineSegment, line2: &LineSegment) -> bool {
    let LineSegment { x1, y1, x2, y2 } = *line1;
    let LineSegment {
        x1: x3,
        y1: y3,
        x2: x4,
        y2: y4,
    } = *line2;

    let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);
    if denom.abs() < PARALLEL_EPSILON {
        return false;
    }

    let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / denom;
    let u = -((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / denom;

    (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u)
}

/// Inclusive point-in-box
pub fn check_point_in_rect<R: HasBox + ?Sized>(px: f64, py: f64, rect: &R) -> bool {
    px >= rect.x() && px <= rect.right() && py >= rect.y() && py <= rect.bottom()
}

/// Inclusive point-in-circle
pub fn check_point_in_circle<C: HasCircle + ?Sized>(px: f64, py: f64, circle: &C) -> bool {
    let dx = px - circle.cx();
    let dy = py - circle.cy();
    dx * dx + dy * dy <= circle.radius() * circle.radius()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::shape::{Body, Circle, Rect};
    use proptest::prelude::*;

    #[test]
    fn test_box_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(check_collision(&a, &b));
        assert!(check_collision(&b, &a));
    }

    #[test]
    fn test_box_touching_edge_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let right = Rect::new(10.0, 0.0, 10.0, 10.0);
        let below = Rect::new(0.0, 10.0, 10.0, 10.0);
        assert!(!check_collision(&a, &right));
        assert!(!check_collision(&a, &below));
    }

    #[test]
    fn test_box_mixed_shape_types() {
        // A body and a platform rect share the same capability
        let player = Body::new(100.0, 95.0, 40.0, 40.0);
        let platform = Rect::new(80.0, 130.0, 200.0, 20.0);
        assert!(check_collision(&player, &platform));
    }

    #[test]
    fn test_circle_overlap() {
        let a = Circle::new(0.0, 0.0, 5.0);
        assert!(check_circle_collision(&a, &Circle::new(8.0, 0.0, 5.0)));
        // Tangent
        assert!(!check_circle_collision(&a, &Circle::new(10.0, 0.0, 5.0)));
        assert!(!check_circle_collision(&a, &Circle::new(0.0, 20.0, 5.0)));
    }

    #[test]
    fn test_circle_rect() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);

        // Centre inside the box
        assert!(check_circle_rect_collision(&Circle::new(5.0, 5.0, 1.0), &rect));
        // Close to the right face
        assert!(check_circle_rect_collision(&Circle::new(12.0, 5.0, 3.0), &rect));
        // Just touching the right face
        assert!(!check_circle_rect_collision(&Circle::new(13.0, 5.0, 3.0), &rect));
        // Near the corner but outside along the diagonal
        assert!(!check_circle_rect_collision(&Circle::new(13.0, 13.0, 4.0), &rect));
        assert!(check_circle_rect_collision(&Circle::new(12.0, 12.0, 3.0), &rect));
    }

    #[test]
    fn test_crossing_lines() {
        let a = LineSegment::new(0.0, 0.0, 10.0, 10.0);
        let b = LineSegment::new(0.0, 10.0, 10.0, 0.0);
        assert!(check_line_collision(&a, &b));
        assert!(check_line_collision(&b, &a));
    }

    #[test]
    fn test_parallel_lines() {
        let a = LineSegment::new(0.0, 0.0, 10.0, 0.0);
        let b = LineSegment::new(0.0, 5.0, 10.0, 5.0);
        assert!(!check_line_collision(&a, &b));

        // Collinear and overlapping still counts as parallel
        let c = LineSegment::new(5.0, 0.0, 15.0, 0.0);
        assert!(!check_line_collision(&a, &c));
    }

    #[test]
    fn test_lines_that_would_cross_if_extended() {
        let a = LineSegment::new(0.0, 0.0, 4.0, 4.0);
        let b = LineSegment::new(0.0, 10.0, 10.0, 0.0);
        assert!(!check_line_collision(&a, &b));
    }

    #[test]
    fn test_lines_meeting_at_endpoint() {
        let a = LineSegment::new(0.0, 0.0, 5.0, 5.0);
        let b = LineSegment::new(5.0, 5.0, 10.0, 0.0);
        assert!(check_line_collision(&a, &b));
    }

    #[test]
    fn test_point_in_rect_inclusive() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(check_point_in_rect(5.0, 5.0, &rect));
        assert!(check_point_in_rect(0.0, 0.0, &rect));
        assert!(check_point_in_rect(10.0, 10.0, &rect));
        assert!(!check_point_in_rect(10.01, 5.0, &rect));
    }

    #[test]
    fn test_point_in_circle_inclusive() {
        let circle = Circle::new(0.0, 0.0, 5.0);
        assert!(check_point_in_circle(3.0, 4.0, &circle));
        assert!(check_point_in_circle(0.0, 0.0, &circle));
        assert!(!check_point_in_circle(4.0, 4.0, &circle));
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (-100.0f64..100.0, -100.0f64..100.0, 0.0f64..50.0, 0.0f64..50.0)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_box_collision_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
            prop_assert_eq!(check_collision(&a, &b), check_collision(&b, &a));
        }

        #[test]
        fn prop_circle_collision_is_symmetric(
            (ax, ay, ar) in (-50.0f64..50.0, -50.0f64..50.0, 0.0f64..20.0),
            (bx, by, br) in (-50.0f64..50.0, -50.0f64..50.0, 0.0f64..20.0),
        ) {
            let a = Circle::new(ax, ay, ar);
            let b = Circle::new(bx, by, br);
            prop_assert_eq!(check_circle_collision(&a, &b), check_circle_collision(&b, &a));
        }

        #[test]
        fn prop_box_overlaps_implies_shared_point(a in rect_strategy(), b in rect_strategy()) {
            if check_collision(&a, &b) {
                let x = a.x.max(b.x);
                let y = a.y.max(b.y);
                prop_assert!(check_point_in_rect(x, y, &a));
                prop_assert!(check_point_in_rect(x, y, &b));
            }
        }
    }
}
