use crate::error::{GeometryError, Result};
use crate::geometry::bounding_box::BoundingBox2D;
use crate::math::distance_2d::point_to_segment_dist;
use crate::math::{Point2, Vector2};

use super::{interior_params, Curve, CurveDomain};

/// A bounded straight segment `P(t) = start + t * (end - start)`, `t ∈ [0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct Line2D {
    start: Point2,
    end: Point2,
}

impl Line2D {
    /// Creates a new segment. Zero-length segments are representable; the
    /// intersection engine rejects them.
    #[must_use]
    pub fn new(start: Point2, end: Point2) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Returns `end - start`.
    #[must_use]
    pub fn direction(&self) -> Vector2 {
        self.end - self.start
    }
}

impl Curve for Line2D {
    fn value(&self, t: f64) -> Point2 {
        self.start + self.direction() * t
    }

    fn tangent(&self, _t: f64) -> Result<Vector2> {
        let d = self.direction();
        let len = d.norm();
        if len < f64::EPSILON {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(d / len)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::unit()
    }

    fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }

    fn split_at(&self, params: &[f64]) -> Vec<Self> {
        let mut parts = Vec::new();
        let mut from = self.start;
        for t in interior_params(params) {
            let to = self.value(t);
            parts.push(Self::new(from, to));
            from = to;
        }
        parts.push(Self::new(from, self.end));
        parts
    }

    fn bounding_box(&self) -> BoundingBox2D {
        BoundingBox2D::from_points(&[self.start, self.end])
    }

    fn parameter_of(&self, point: &Point2, tolerance: f64) -> Option<f64> {
        if self.distance_to(point) > tolerance {
            return None;
        }
        let d = self.direction();
        let len_sq = d.norm_squared();
        if len_sq < f64::EPSILON {
            return Some(0.0);
        }
        Some(((point - self.start).dot(&d) / len_sq).clamp(0.0, 1.0))
    }

    fn distance_to(&self, point: &Point2) -> f64 {
        point_to_segment_dist(point, &self.start, &self.end)
    }

    fn length(&self) -> f64 {
        self.direction().norm()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_of_point_on_and_off_line() {
        let l = Line2D::new(Point2::new(0.0, 0.0), Point2::new(4.0, 0.0));
        let t = l.parameter_of(&Point2::new(1.0, 0.0), 1e-9);
        assert!(t.is_some_and(|t| (t - 0.25).abs() < 1e-12));
        assert!(l.parameter_of(&Point2::new(1.0, 0.1), 1e-9).is_none());
    }

    #[test]
    fn zero_length_tangent_is_error() {
        let p = Point2::new(1.0, 1.0);
        assert!(Line2D::new(p, p).tangent(0.5).is_err());
    }

    #[test]
    fn split_produces_exact_end() {
        let l = Line2D::new(Point2::new(0.0, 0.0), Point2::new(3.0, 3.0));
        let parts = l.split_at(&[1.0 / 3.0]);
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[1].end(), l.end());
    }
}
