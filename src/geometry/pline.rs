use crate::error::{OperationError, Result};
use crate::math::Point2;

use super::blueprint::Blueprint;
use super::curve::{Arc2D, Curve, Curve2D};

/// Bulge-encoded polyline vertex for mixed line/arc segments.
///
/// `bulge = tan(sweep_angle / 4)`:
/// - `0` = straight line to next vertex
/// - `> 0` = counter-clockwise arc to next vertex
/// - `< 0` = clockwise arc to next vertex
/// - `|bulge| = 1` = semicircle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlineVertex {
    pub x: f64,
    pub y: f64,
    pub bulge: f64,
}

impl PlineVertex {
    /// Creates a new vertex with the given coordinates and bulge.
    #[must_use]
    pub fn new(x: f64, y: f64, bulge: f64) -> Self {
        Self { x, y, bulge }
    }

    /// Creates a line vertex (bulge = 0).
    #[must_use]
    pub fn line(x: f64, y: f64) -> Self {
        Self { x, y, bulge: 0.0 }
    }

    fn point(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

/// A closed polyline with mixed straight-line and circular-arc segments.
///
/// The segment leaving vertex `i` ends at vertex `i + 1`; the last vertex
/// connects back to the first.
#[derive(Debug, Clone, PartialEq)]
pub struct Pline {
    pub vertices: Vec<PlineVertex>,
}

impl Pline {
    /// Creates a `Pline` from points with all-zero bulges (line segments only).
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Self {
        let vertices = points.iter().map(|p| PlineVertex::line(p.x, p.y)).collect();
        Self { vertices }
    }

    /// Encodes a blueprint loop. Full circles are written as two half arcs.
    #[must_use]
    pub fn from_blueprint(blueprint: &Blueprint) -> Self {
        let mut vertices = Vec::with_capacity(blueprint.curves().len());
        for curve in blueprint.curves() {
            match curve {
                Curve2D::Line(line) => vertices.push(PlineVertex::line(line.start().x, line.start().y)),
                Curve2D::Arc(arc) if arc.is_full_circle() => {
                    let bulge = (arc.sweep() / 8.0).tan();
                    let start = arc.first_point();
                    let half = arc.midpoint();
                    vertices.push(PlineVertex::new(start.x, start.y, bulge));
                    vertices.push(PlineVertex::new(half.x, half.y, bulge));
                }
                Curve2D::Arc(arc) => {
                    let start = arc.first_point();
                    vertices.push(PlineVertex::new(start.x, start.y, (arc.sweep() / 4.0).tan()));
                }
            }
        }
        Self { vertices }
    }

    /// Builds the blueprint loop described by the polyline.
    ///
    /// # Errors
    ///
    /// Returns an error if the polyline has fewer than two vertices or if an
    /// arc segment joins coincident vertices.
    pub fn to_blueprint(&self) -> Result<Blueprint> {
        let n = self.vertices.len();
        if n < 2 {
            return Err(OperationError::InvalidInput(format!(
                "a closed polyline needs at least 2 vertices, got {n}"
            ))
            .into());
        }
        let mut curves = Vec::with_capacity(n);
        for i in 0..n {
            let v0 = &self.vertices[i];
            let v1 = &self.vertices[(i + 1) % n];
            if v0.bulge.abs() < 1e-12 {
                curves.push(Curve2D::line(v0.point(), v1.point()));
            } else {
                curves.push(Arc2D::from_bulge(v0.point(), v1.point(), v0.bulge)?.into());
            }
        }
        Blueprint::new(curves)
    }

    /// Returns a new polyline with vertices in reverse order and negated bulges.
    ///
    /// For a segment `v[i] → v[i+1]` with bulge `b`, the reversed segment
    /// `v[i+1] → v[i]` has bulge `-b` (arc direction flips).
    #[must_use]
    pub fn reversed(&self) -> Self {
        let m = self.vertices.len();
        let vertices = (0..m)
            .map(|j| {
                let v = &self.vertices[(m - j) % m];
                // Reversed vertex j leaves along the original segment that
                // ended at it, which left from vertex (m - j - 1).
                let bulge = -self.vertices[(2 * m - j - 1) % m].bulge;
                PlineVertex::new(v.x, v.y, bulge)
            })
            .collect();
        Self { vertices }
    }
}
