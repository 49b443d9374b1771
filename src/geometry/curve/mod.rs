mod arc;
mod line;

pub use arc::Arc2D;
pub use line::Line2D;

use crate::error::Result;
use crate::math::{points_equal, Point2, Vector2};

use super::bounding_box::BoundingBox2D;

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }

    /// The unit domain `[0, 1]` shared by all planar curves in this crate.
    #[must_use]
    pub fn unit() -> Self {
        Self::new(0.0, 1.0)
    }
}

/// Capability of a directed, bounded planar curve.
///
/// The boolean engine only reaches curves through this surface.
pub trait Curve: Clone {
    /// Evaluates the curve at parameter `t`.
    fn value(&self, t: f64) -> Point2;

    /// Unit tangent at parameter `t`, oriented along increasing `t`.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve is degenerate at `t`.
    fn tangent(&self, t: f64) -> Result<Vector2>;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;

    /// Returns the same curve walked in the opposite direction.
    #[must_use]
    fn reversed(&self) -> Self;

    /// Splits the curve at the given parameters, returning the sub-curves in
    /// order. Parameters outside the open domain or closer than `f64::EPSILON`
    /// to a neighbour are ignored.
    fn split_at(&self, params: &[f64]) -> Vec<Self>;

    /// Axis-aligned bounds of the curve.
    fn bounding_box(&self) -> BoundingBox2D;

    /// Parameter of `point` if it lies on the curve within `tolerance`.
    fn parameter_of(&self, point: &Point2, tolerance: f64) -> Option<f64>;

    /// Minimum distance from `point` to the curve.
    fn distance_to(&self, point: &Point2) -> f64;

    /// Arc length of the curve.
    fn length(&self) -> f64;

    /// First point of the curve.
    fn first_point(&self) -> Point2 {
        self.value(self.domain().t_min)
    }

    /// Last point of the curve.
    fn last_point(&self) -> Point2 {
        self.value(self.domain().t_max)
    }

    /// Point halfway through the parameter domain.
    fn midpoint(&self) -> Point2 {
        let d = self.domain();
        self.value((d.t_min + d.t_max) * 0.5)
    }
}

/// Sorted, deduplicated interior split parameters.
fn interior_params(params: &[f64]) -> Vec<f64> {
    let mut ts: Vec<f64> = params
        .iter()
        .copied()
        .filter(|t| *t > f64::EPSILON && *t < 1.0 - f64::EPSILON)
        .collect();
    ts.sort_by(f64::total_cmp);
    ts.dedup_by(|a, b| (*a - *b).abs() <= f64::EPSILON);
    ts
}

/// A planar curve owned by a blueprint loop.
#[derive(Debug, Clone, PartialEq)]
pub enum Curve2D {
    Line(Line2D),
    Arc(Arc2D),
}

impl Curve2D {
    /// Convenience constructor for a straight segment.
    #[must_use]
    pub fn line(start: Point2, end: Point2) -> Self {
        Self::Line(Line2D::new(start, end))
    }

    /// Returns `true` when both curves trace the same geometry, in either
    /// direction.
    #[must_use]
    pub fn is_same_geometry(&self, other: &Self, tolerance: f64) -> bool {
        let mid_matches = points_equal(&self.midpoint(), &other.midpoint(), tolerance);
        let forward = points_equal(&self.first_point(), &other.first_point(), tolerance)
            && points_equal(&self.last_point(), &other.last_point(), tolerance);
        let backward = points_equal(&self.first_point(), &other.last_point(), tolerance)
            && points_equal(&self.last_point(), &other.first_point(), tolerance);
        mid_matches && (forward || backward)
    }

    /// Whether the curve collapses to a point under `tolerance`.
    #[must_use]
    pub fn is_degenerate(&self, tolerance: f64) -> bool {
        match self {
            Self::Line(l) => l.length() < tolerance,
            Self::Arc(a) => a.radius() < tolerance || a.length() < tolerance,
        }
    }
}

impl Curve for Curve2D {
    fn value(&self, t: f64) -> Point2 {
        match self {
            Self::Line(l) => l.value(t),
            Self::Arc(a) => a.value(t),
        }
    }

    fn tangent(&self, t: f64) -> Result<Vector2> {
        match self {
            Self::Line(l) => l.tangent(t),
            Self::Arc(a) => a.tangent(t),
        }
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::unit()
    }

    fn reversed(&self) -> Self {
        match self {
            Self::Line(l) => Self::Line(l.reversed()),
            Self::Arc(a) => Self::Arc(a.reversed()),
        }
    }

    fn split_at(&self, params: &[f64]) -> Vec<Self> {
        match self {
            Self::Line(l) => l.split_at(params).into_iter().map(Self::Line).collect(),
            Self::Arc(a) => a.split_at(params).into_iter().map(Self::Arc).collect(),
        }
    }

    fn bounding_box(&self) -> BoundingBox2D {
        match self {
            Self::Line(l) => l.bounding_box(),
            Self::Arc(a) => a.bounding_box(),
        }
    }

    fn parameter_of(&self, point: &Point2, tolerance: f64) -> Option<f64> {
        match self {
            Self::Line(l) => l.parameter_of(point, tolerance),
            Self::Arc(a) => a.parameter_of(point, tolerance),
        }
    }

    fn distance_to(&self, point: &Point2) -> f64 {
        match self {
            Self::Line(l) => l.distance_to(point),
            Self::Arc(a) => a.distance_to(point),
        }
    }

    fn length(&self) -> f64 {
        match self {
            Self::Line(l) => l.length(),
            Self::Arc(a) => a.length(),
        }
    }
}

impl From<Line2D> for Curve2D {
    fn from(line: Line2D) -> Self {
        Self::Line(line)
    }
}

impl From<Arc2D> for Curve2D {
    fn from(arc: Arc2D) -> Self {
        Self::Arc(arc)
    }
}
