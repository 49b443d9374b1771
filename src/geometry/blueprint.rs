use std::sync::OnceLock;

use crate::error::{OperationError, Result, TopologyError};
use crate::math::arc_2d::{arc_point_at, arc_subdivision_count, circular_segment_area};
use crate::math::polygon_2d::signed_area_2d;
use crate::math::{points_equal, Point2, Precision};
use crate::operations::query::{blueprint_self_intersections, point_in_blueprint, Containment};

use super::bounding_box::BoundingBox2D;
use super::curve::{Arc2D, Curve, Curve2D};

/// Distance allowed between the end of one curve and the start of the next
/// when a loop is built from user input.
pub const CLOSURE_TOLERANCE: f64 = 1e-7;

/// Winding direction of a closed loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Clockwise,
    CounterClockwise,
}

impl Orientation {
    /// The opposite winding direction.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

/// A closed 2D profile: an ordered loop of curves.
///
/// The last point of curve `i` equals the first point of curve `i + 1`
/// (modulo the curve count). Blueprints are immutable; orientation and
/// bounding box are computed on first use and cached.
#[derive(Debug, Clone)]
pub struct Blueprint {
    curves: Vec<Curve2D>,
    orientation: OnceLock<Orientation>,
    bounding_box: OnceLock<BoundingBox2D>,
}

impl Blueprint {
    /// Builds a blueprint from a closed sequence of curves.
    ///
    /// # Errors
    ///
    /// Returns `TopologyError::EmptyLoop` for an empty list and
    /// `TopologyError::LoopNotClosed` when consecutive curves do not meet.
    pub fn new(curves: Vec<Curve2D>) -> Result<Self> {
        if curves.is_empty() {
            return Err(TopologyError::EmptyLoop.into());
        }
        let n = curves.len();
        for (i, curve) in curves.iter().enumerate() {
            let end = curve.last_point();
            let next_start = curves[(i + 1) % n].first_point();
            if !points_equal(&end, &next_start, CLOSURE_TOLERANCE) {
                return Err(TopologyError::LoopNotClosed {
                    index: i,
                    x: end.x,
                    y: end.y,
                }
                .into());
            }
        }
        Ok(Self::from_closed_curves(curves))
    }

    /// Wraps curves already known to form a closed loop.
    pub(crate) fn from_closed_curves(curves: Vec<Curve2D>) -> Self {
        Self {
            curves,
            orientation: OnceLock::new(),
            bounding_box: OnceLock::new(),
        }
    }

    /// Closed polygon through `points` (the closing edge is implicit).
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 3 points are given.
    pub fn polygon(points: &[Point2]) -> Result<Self> {
        if points.len() < 3 {
            return Err(OperationError::InvalidInput(
                "at least 3 points required for a polygon".to_owned(),
            )
            .into());
        }
        let n = points.len();
        let curves = (0..n)
            .map(|i| Curve2D::line(points[i], points[(i + 1) % n]))
            .collect();
        Self::new(curves)
    }

    /// Counter-clockwise `width × height` rectangle centred on the origin.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is not positive.
    pub fn rectangle(width: f64, height: f64) -> Result<Self> {
        if width <= 0.0 || height <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "rectangle dimensions must be positive, got {width} x {height}"
            ))
            .into());
        }
        let (hw, hh) = (width * 0.5, height * 0.5);
        Self::polygon(&[
            Point2::new(-hw, -hh),
            Point2::new(hw, -hh),
            Point2::new(hw, hh),
            Point2::new(-hw, hh),
        ])
    }

    /// Counter-clockwise circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is not positive.
    pub fn circle(center: Point2, radius: f64) -> Result<Self> {
        if radius <= 0.0 {
            return Err(OperationError::InvalidInput(format!(
                "circle radius must be positive, got {radius}"
            ))
            .into());
        }
        Ok(Self::from_closed_curves(vec![Arc2D::circle(center, radius).into()]))
    }

    /// The curves of the loop, in order.
    #[must_use]
    pub fn curves(&self) -> &[Curve2D] {
        &self.curves
    }

    /// Consumes the blueprint, returning its curves.
    #[must_use]
    pub fn into_curves(self) -> Vec<Curve2D> {
        self.curves
    }

    /// First point of the first curve.
    #[must_use]
    pub fn first_point(&self) -> Point2 {
        self.curves[0].first_point()
    }

    /// Last point of the last curve (equal to `first_point` within tolerance).
    #[must_use]
    pub fn last_point(&self) -> Point2 {
        self.curves[self.curves.len() - 1].last_point()
    }

    /// Start points of every curve.
    #[must_use]
    pub fn vertices(&self) -> Vec<Point2> {
        self.curves.iter().map(Curve::first_point).collect()
    }

    /// Exact signed area: shoelace over the curve endpoints plus the circular
    /// segment of every arc. Positive for counter-clockwise loops.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        let chords = signed_area_2d(&self.vertices());
        let arcs: f64 = self
            .curves
            .iter()
            .filter_map(|c| match c {
                Curve2D::Arc(a) => Some(circular_segment_area(a.radius(), a.sweep())),
                Curve2D::Line(_) => None,
            })
            .sum();
        chords + arcs
    }

    /// Enclosed area, regardless of orientation.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Winding direction of the loop.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        *self.orientation.get_or_init(|| {
            if self.signed_area() >= 0.0 {
                Orientation::CounterClockwise
            } else {
                Orientation::Clockwise
            }
        })
    }

    /// Axis-aligned bounds of the loop.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox2D {
        *self.bounding_box.get_or_init(|| {
            self.curves
                .iter()
                .fold(BoundingBox2D::empty(), |bb, c| bb.union(&c.bounding_box()))
        })
    }

    /// The same loop walked the other way.
    #[must_use]
    pub fn reversed(&self) -> Self {
        let curves = self.curves.iter().rev().map(Curve::reversed).collect();
        Self::from_closed_curves(curves)
    }

    /// Copy of the loop with the requested orientation.
    #[must_use]
    pub fn oriented(&self, orientation: Orientation) -> Self {
        if self.orientation() == orientation {
            self.clone()
        } else {
            self.reversed()
        }
    }

    /// Classifies `point` against the loop.
    #[must_use]
    pub fn classify_point(&self, point: &Point2, tolerance: f64) -> Containment {
        point_in_blueprint(self, point, tolerance)
    }

    /// Whether `point` is strictly inside the loop.
    #[must_use]
    pub fn contains_point(&self, point: &Point2) -> bool {
        self.classify_point(point, crate::math::TOLERANCE) == Containment::Inside
    }

    /// Whether `point` lies on the loop within `tolerance`.
    #[must_use]
    pub fn is_on_boundary(&self, point: &Point2, tolerance: f64) -> bool {
        self.curves.iter().any(|c| c.distance_to(point) <= tolerance)
    }

    /// Polyline approximation of the loop. Arcs are tessellated so that the
    /// chords stay within `tolerance` of the true curve. The closing point is
    /// not repeated.
    #[must_use]
    pub fn to_points(&self, tolerance: f64) -> Vec<Point2> {
        let mut points = Vec::with_capacity(self.curves.len() * 2);
        for curve in &self.curves {
            points.push(curve.first_point());
            if let Curve2D::Arc(arc) = curve {
                let n_sub = arc_subdivision_count(arc.radius(), arc.sweep().abs(), tolerance);
                for j in 1..n_sub {
                    let t = f64::from(j) / f64::from(n_sub);
                    points.push(arc_point_at(
                        arc.center(),
                        arc.radius(),
                        arc.start_angle(),
                        arc.sweep(),
                        t,
                    ));
                }
            }
        }
        points
    }

    /// Whether the loop touches or crosses itself anywhere other than at the
    /// vertices joining consecutive curves.
    ///
    /// # Errors
    ///
    /// Returns an error if a curve is degenerate or non-finite.
    pub fn is_self_intersecting(&self) -> Result<bool> {
        Ok(!blueprint_self_intersections(self, &Precision::default())?.is_empty())
    }

    /// Curve-by-curve geometric equality, allowing a different starting curve
    /// and the opposite direction.
    #[must_use]
    pub fn is_same_loop(&self, other: &Self, tolerance: f64) -> bool {
        let n = self.curves.len();
        if n != other.curves.len() || !self.bounding_box().approx_eq(&other.bounding_box(), tolerance) {
            return false;
        }
        let mut used = vec![false; n];
        self.curves.iter().all(|c| {
            let hit = other
                .curves
                .iter()
                .enumerate()
                .find(|(j, o)| !used[*j] && c.is_same_geometry(o, tolerance));
            match hit {
                Some((j, _)) => {
                    used[j] = true;
                    true
                }
                None => false,
            }
        })
    }
}

impl PartialEq for Blueprint {
    fn eq(&self, other: &Self) -> bool {
        self.curves == other.curves
    }
}
