use std::f64::consts::{PI, TAU};

use crate::geometry::blueprint::Blueprint;
use crate::geometry::curve::{Arc2D, Curve, Curve2D};
use crate::math::polygon_2d::subtended_angle;
use crate::math::{cross_2d, Point2};

/// Classification of a point relative to a closed loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Containment {
    Inside,
    Outside,
    OnBoundary,
}

/// Classifies `point` against a blueprint loop.
///
/// Points within `tolerance` of any curve are `OnBoundary`. Otherwise the
/// winding number is computed exactly: lines contribute the angle their
/// endpoints subtend at the point, arcs contribute their chord's angle plus a
/// full turn when the point sits between the chord and the arc.
#[must_use]
pub fn point_in_blueprint(blueprint: &Blueprint, point: &Point2, tolerance: f64) -> Containment {
    if !blueprint.bounding_box().contains_point(point, tolerance) {
        return Containment::Outside;
    }
    if blueprint.is_on_boundary(point, tolerance) {
        return Containment::OnBoundary;
    }

    let total: f64 = blueprint
        .curves()
        .iter()
        .map(|curve| match curve {
            Curve2D::Line(line) => subtended_angle(point, line.start(), line.end()),
            Curve2D::Arc(arc) => arc_winding_angle(point, arc, tolerance),
        })
        .sum();

    #[allow(clippy::cast_possible_truncation)]
    let winding = (total / TAU).round() as i64;
    if winding == 0 {
        Containment::Outside
    } else {
        Containment::Inside
    }
}

/// Angle an arc subtends at `p`.
fn arc_winding_angle(p: &Point2, arc: &Arc2D, tolerance: f64) -> f64 {
    let a = arc.first_point();
    let b = arc.last_point();
    let turn = arc.sweep().signum();
    let inside_circle = (p - arc.center()).norm() < arc.radius();

    if arc.is_full_circle() {
        return if inside_circle { turn * TAU } else { 0.0 };
    }

    let chord = b - a;
    let chord_len = chord.norm();
    let side_p = cross_2d(&chord, &(p - a));

    if inside_circle && side_p.abs() <= tolerance * chord_len {
        // The point is on the chord itself, where the chord angle is ±π.
        let t = (p - a).dot(&chord) / (chord_len * chord_len);
        if t > 0.0 && t < 1.0 {
            return turn * PI;
        }
    }

    let chord_angle = subtended_angle(p, &a, &b);
    let side_arc = cross_2d(&chord, &(arc.midpoint() - a));
    if inside_circle && side_p * side_arc > 0.0 {
        chord_angle + turn * TAU
    } else {
        chord_angle
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::Arc2D;

    fn half_disc() -> Blueprint {
        // Upper half of the unit circle, closed by the diameter.
        Blueprint::new(vec![
            Curve2D::line(Point2::new(-1.0, 0.0), Point2::new(1.0, 0.0)),
            Arc2D::new(Point2::origin(), 1.0, 0.0, PI).into(),
        ])
        .unwrap()
    }

    #[test]
    fn rectangle_inside_outside_boundary() {
        let r = Blueprint::rectangle(4.0, 2.0).unwrap();
        assert_eq!(point_in_blueprint(&r, &Point2::new(1.9, 0.9), 1e-9), Containment::Inside);
        assert_eq!(point_in_blueprint(&r, &Point2::new(2.1, 0.0), 1e-9), Containment::Outside);
        assert_eq!(point_in_blueprint(&r, &Point2::new(2.0, 0.3), 1e-9), Containment::OnBoundary);
    }

    #[test]
    fn clockwise_loop_still_contains() {
        let r = Blueprint::rectangle(4.0, 2.0).unwrap().reversed();
        assert_eq!(point_in_blueprint(&r, &Point2::origin(), 1e-9), Containment::Inside);
    }

    #[test]
    fn half_disc_containment() {
        let h = half_disc();
        assert_eq!(point_in_blueprint(&h, &Point2::new(0.0, 0.5), 1e-9), Containment::Inside);
        assert_eq!(point_in_blueprint(&h, &Point2::new(0.0, 0.99), 1e-9), Containment::Inside);
        assert_eq!(point_in_blueprint(&h, &Point2::new(0.0, -0.5), 1e-9), Containment::Outside);
        assert_eq!(point_in_blueprint(&h, &Point2::new(0.9, 0.9), 1e-9), Containment::Outside);
    }

    #[test]
    fn circle_split_in_two_arcs_contains_center() {
        // The center lies on both chords.
        let c = Blueprint::new(vec![
            Arc2D::new(Point2::origin(), 2.0, 0.0, PI).into(),
            Arc2D::new(Point2::origin(), 2.0, PI, PI).into(),
        ])
        .unwrap();
        assert_eq!(point_in_blueprint(&c, &Point2::origin(), 1e-9), Containment::Inside);
        assert_eq!(point_in_blueprint(&c, &Point2::new(1.0, 0.0), 1e-9), Containment::Inside);
        assert_eq!(point_in_blueprint(&c, &Point2::new(2.5, 0.0), 1e-9), Containment::Outside);
    }

    #[test]
    fn full_circle_containment() {
        let c = Blueprint::circle(Point2::new(5.0, 5.0), 1.0).unwrap().reversed();
        assert_eq!(point_in_blueprint(&c, &Point2::new(5.5, 5.0), 1e-9), Containment::Inside);
        assert_eq!(point_in_blueprint(&c, &Point2::new(6.5, 5.0), 1e-9), Containment::Outside);
    }
}
