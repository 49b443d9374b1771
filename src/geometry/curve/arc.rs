use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::geometry::bounding_box::BoundingBox2D;
use crate::math::arc_2d::{angle_to_arc_param, arc_bounds, arc_from_bulge, arc_point_at, arc_tangent_at};
use crate::math::distance_2d::point_to_arc_dist;
use crate::math::{cross_2d, Point2, Vector2};

use super::{interior_params, Curve, CurveDomain};

/// A circular arc in the XY plane.
///
/// The angle at parameter `t ∈ [0, 1]` is `start_angle + t * sweep`. Positive
/// sweep runs counter-clockwise. `|sweep|` never exceeds `2π`; a full circle is
/// a single arc whose first and last points coincide.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc2D {
    center: Point2,
    radius: f64,
    start_angle: f64,
    sweep: f64,
}

impl Arc2D {
    /// Creates a new arc. The sweep is clamped to `[-2π, 2π]`.
    #[must_use]
    pub fn new(center: Point2, radius: f64, start_angle: f64, sweep: f64) -> Self {
        Self {
            center,
            radius,
            start_angle,
            sweep: sweep.clamp(-TAU, TAU),
        }
    }

    /// Full counter-clockwise circle starting at angle 0.
    #[must_use]
    pub fn circle(center: Point2, radius: f64) -> Self {
        Self::new(center, radius, 0.0, TAU)
    }

    /// Arc between two points with the polyline bulge convention
    /// (`bulge = tan(sweep / 4)`).
    ///
    /// # Errors
    ///
    /// Returns an error for a zero bulge or coincident endpoints.
    pub fn from_bulge(start: Point2, end: Point2, bulge: f64) -> Result<Self> {
        if bulge.abs() < 1e-12 {
            return Err(GeometryError::Degenerate("zero bulge describes a line".into()).into());
        }
        let (center, radius, start_angle, sweep) = arc_from_bulge(&start, &end, bulge);
        if radius < 1e-12 {
            return Err(GeometryError::Degenerate("arc endpoints coincide".into()).into());
        }
        Ok(Self::new(center, radius, start_angle, sweep))
    }

    /// Arc from `start` to `end` passing through `through`.
    ///
    /// # Errors
    ///
    /// Returns an error if the three points are collinear.
    pub fn through_points(start: Point2, through: Point2, end: Point2) -> Result<Self> {
        let a = through - start;
        let b = end - start;
        let det = 2.0 * cross_2d(&a, &b);
        if det.abs() < 1e-12 {
            return Err(GeometryError::Degenerate("arc points are collinear".into()).into());
        }
        let a_sq = a.norm_squared();
        let b_sq = b.norm_squared();
        let center = Point2::new(
            start.x + (b.y * a_sq - a.y * b_sq) / det,
            start.y + (a.x * b_sq - b.x * a_sq) / det,
        );
        let radius = (start - center).norm();
        let angle_of = |p: &Point2| (p.y - center.y).atan2(p.x - center.x);
        let start_angle = angle_of(&start);
        let through_angle = angle_of(&through);
        let end_angle = angle_of(&end);

        // Counter-clockwise when the middle point is to the left of the chord.
        let ccw = det > 0.0;
        let mut sweep = end_angle - start_angle;
        if ccw {
            sweep = sweep.rem_euclid(TAU);
        } else {
            sweep = -(-sweep).rem_euclid(TAU);
        }
        let arc = Self::new(center, radius, start_angle, sweep);
        debug_assert!(angle_to_arc_param(through_angle, start_angle, sweep, 1e-9).is_some());
        Ok(arc)
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Angle at parameter 0.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Signed angular extent.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        self.sweep
    }

    /// Whether the arc closes on itself.
    #[must_use]
    pub fn is_full_circle(&self) -> bool {
        (self.sweep.abs() - TAU).abs() < 1e-12
    }
}

impl Curve for Arc2D {
    fn value(&self, t: f64) -> Point2 {
        arc_point_at(&self.center, self.radius, self.start_angle, self.sweep, t)
    }

    fn tangent(&self, t: f64) -> Result<Vector2> {
        if self.radius < f64::EPSILON || self.sweep.abs() < f64::EPSILON {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(arc_tangent_at(self.start_angle, self.sweep, t))
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::unit()
    }

    fn reversed(&self) -> Self {
        Self::new(self.center, self.radius, self.start_angle + self.sweep, -self.sweep)
    }

    fn split_at(&self, params: &[f64]) -> Vec<Self> {
        let mut parts = Vec::new();
        let mut from = 0.0;
        for t in interior_params(params).into_iter().chain(std::iter::once(1.0)) {
            parts.push(Self::new(
                self.center,
                self.radius,
                self.start_angle + self.sweep * from,
                self.sweep * (t - from),
            ));
            from = t;
        }
        parts
    }

    fn bounding_box(&self) -> BoundingBox2D {
        let (min, max) = arc_bounds(&self.center, self.radius, self.start_angle, self.sweep);
        BoundingBox2D::new(min, max)
    }

    fn parameter_of(&self, point: &Point2, tolerance: f64) -> Option<f64> {
        let offset = point - self.center;
        if (offset.norm() - self.radius).abs() > tolerance {
            return None;
        }
        let angle = offset.y.atan2(offset.x);
        angle_to_arc_param(angle, self.start_angle, self.sweep, tolerance / self.radius.max(tolerance))
    }

    fn distance_to(&self, point: &Point2) -> f64 {
        point_to_arc_dist(point, &self.center, self.radius, self.start_angle, self.sweep)
    }

    fn length(&self) -> f64 {
        self.radius * self.sweep.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn reversed_arc_walks_back() {
        let a = Arc2D::new(Point2::origin(), 1.0, 0.0, FRAC_PI_2);
        let r = a.reversed();
        assert_abs_diff_eq!(r.first_point().y, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r.last_point().x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(r.midpoint().x, a.midpoint().x, epsilon = 1e-12);
    }

    #[test]
    fn through_points_counter_clockwise() {
        let arc = Arc2D::through_points(Point2::new(1.0, 0.0), Point2::new(0.0, 1.0), Point2::new(-1.0, 0.0)).unwrap_or_else(|e| panic!("{e}"));
        assert_abs_diff_eq!(arc.radius(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(arc.sweep(), PI, epsilon = 1e-12);
    }

    #[test]
    fn through_points_clockwise() {
        let arc = Arc2D::through_points(Point2::new(1.0, 0.0), Point2::new(0.0, -1.0), Point2::new(-1.0, 0.0)).unwrap_or_else(|e| panic!("{e}"));
        assert_abs_diff_eq!(arc.sweep(), -PI, epsilon = 1e-12);
        assert_abs_diff_eq!(arc.midpoint().y, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn collinear_points_are_rejected() {
        let r = Arc2D::through_points(Point2::new(0.0, 0.0), Point2::new(1.0, 0.0), Point2::new(2.0, 0.0));
        assert!(r.is_err());
    }

    #[test]
    fn circle_bounding_box() {
        let bb = Arc2D::circle(Point2::new(1.0, 2.0), 3.0).bounding_box();
        assert_abs_diff_eq!(bb.min.x, -2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(bb.max.y, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn parameter_of_point_on_arc() {
        let a = Arc2D::new(Point2::origin(), 2.0, 0.0, PI);
        let t = a.parameter_of(&Point2::new(0.0, 2.0), 1e-9);
        assert!(t.is_some_and(|t| (t - 0.5).abs() < 1e-12));
        assert!(a.parameter_of(&Point2::new(0.0, -2.0), 1e-9).is_none());
    }
}
