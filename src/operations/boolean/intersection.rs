use tracing::trace;

use crate::error::{IntersectionError, IntersectionErrorCode};
use crate::geometry::curve::{Arc2D, Curve, Curve2D};
use crate::math::intersect_2d::{
    arc_arc_intersect_2d, arc_arc_overlaps, line_arc_intersect_2d, segment_segment_intersect_2d,
    LineLineIntersection,
};
use crate::math::{points_equal, Point2, Precision};

/// A stretch of curve shared by both inputs, expressed as a piece of the
/// first curve.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonSegment {
    pub curve: Curve2D,
}

/// Everything two curves have in common.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CurveIntersections {
    /// Isolated contact points, deduplicated, including the endpoints of every
    /// common segment.
    pub points: Vec<Point2>,
    /// Overlapping portions of non-zero length.
    pub common_segments: Vec<CommonSegment>,
}

impl CurveIntersections {
    /// Whether the curves do not meet at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty() && self.common_segments.is_empty()
    }
}

/// Intersects two curves.
///
/// Bounding boxes are compared first. Line/line, line/arc and arc/arc pairs
/// are solved analytically; the endpoints of each curve are also tested
/// against the other so that tangential touches are not lost to rounding.
///
/// # Errors
///
/// Returns [`IntersectionErrorCode::NonFinite`] if a curve has a non-finite
/// coordinate and [`IntersectionErrorCode::DegenerateCurve`] if one collapses
/// to a point.
pub fn intersect_curves(
    a: &Curve2D,
    b: &Curve2D,
    precision: &Precision,
) -> Result<CurveIntersections, IntersectionError> {
    let tol = precision.tolerance;
    validate_curve(a, tol)?;
    validate_curve(b, tol)?;

    let mut result = CurveIntersections::default();
    if a.bounding_box().is_out(&b.bounding_box(), tol) {
        return Ok(result);
    }

    match (a, b) {
        (Curve2D::Line(la), Curve2D::Line(lb)) => {
            match segment_segment_intersect_2d(la.start(), la.end(), lb.start(), lb.end(), tol) {
                LineLineIntersection::None => {}
                LineLineIntersection::Point { point, .. } => result.points.push(point),
                LineLineIntersection::Overlap { t0, t1, .. } => {
                    result.common_segments.push(CommonSegment {
                        curve: Curve2D::line(a.value(t0), a.value(t1)),
                    });
                }
            }
        }
        (Curve2D::Line(line), Curve2D::Arc(arc)) | (Curve2D::Arc(arc), Curve2D::Line(line)) => {
            let hits = line_arc_intersect_2d(
                line.start(),
                line.end(),
                arc.center(),
                arc.radius(),
                arc.start_angle(),
                arc.sweep(),
                tol,
            );
            result.points.extend(hits.into_iter().map(|(p, _, _)| p));
        }
        (Curve2D::Arc(aa), Curve2D::Arc(ab)) => {
            let overlaps = arc_arc_overlaps(
                aa.center(),
                aa.radius(),
                aa.start_angle(),
                aa.sweep(),
                ab.center(),
                ab.radius(),
                ab.start_angle(),
                ab.sweep(),
                tol,
            );
            if overlaps.is_empty() {
                let hits = arc_arc_intersect_2d(
                    aa.center(),
                    aa.radius(),
                    aa.start_angle(),
                    aa.sweep(),
                    ab.center(),
                    ab.radius(),
                    ab.start_angle(),
                    ab.sweep(),
                    tol,
                );
                result.points.extend(hits.into_iter().map(|(p, _, _)| p));
            } else {
                result.common_segments.extend(
                    overlaps
                        .into_iter()
                        .map(|(lo, hi)| CommonSegment { curve: sub_arc(aa, lo, hi).into() }),
                );
            }
        }
    }

    for p in [a.first_point(), a.last_point()] {
        if b.distance_to(&p) <= tol {
            result.points.push(p);
        }
    }
    for p in [b.first_point(), b.last_point()] {
        if a.distance_to(&p) <= tol {
            result.points.push(p);
        }
    }

    normalise(&mut result, tol);
    trace!(
        points = result.points.len(),
        common = result.common_segments.len(),
        "curve pair intersected"
    );
    Ok(result)
}

/// Points where a single curve crosses itself.
///
/// Lines and arcs spanning at most one turn never do, so the list is empty
/// for every valid curve.
///
/// # Errors
///
/// Same contract as [`intersect_curves`].
pub fn self_intersections(
    curve: &Curve2D,
    precision: &Precision,
) -> Result<Vec<Point2>, IntersectionError> {
    validate_curve(curve, precision.tolerance)?;
    Ok(Vec::new())
}

fn validate_curve(curve: &Curve2D, tolerance: f64) -> Result<(), IntersectionError> {
    let finite = |p: &Point2| p.x.is_finite() && p.y.is_finite();
    let all_finite = match curve {
        Curve2D::Line(l) => finite(l.start()) && finite(l.end()),
        Curve2D::Arc(a) => {
            finite(a.center())
                && a.radius().is_finite()
                && a.start_angle().is_finite()
                && a.sweep().is_finite()
        }
    };
    if !all_finite {
        return Err(IntersectionError::new(
            IntersectionErrorCode::NonFinite,
            format!("curve has non-finite coordinates: {curve:?}"),
        ));
    }
    if curve.is_degenerate(tolerance) {
        return Err(IntersectionError::new(
            IntersectionErrorCode::DegenerateCurve,
            format!(
                "curve from ({}, {}) to ({}, {}) has no extent",
                curve.first_point().x,
                curve.first_point().y,
                curve.last_point().x,
                curve.last_point().y
            ),
        ));
    }
    Ok(())
}

fn sub_arc(arc: &Arc2D, lo: f64, hi: f64) -> Arc2D {
    Arc2D::new(
        *arc.center(),
        arc.radius(),
        arc.start_angle() + arc.sweep() * lo,
        arc.sweep() * (hi - lo),
    )
}

/// Demotes zero-length common segments to points, folds the remaining common
/// segment endpoints into the point set and removes duplicate points.
fn normalise(result: &mut CurveIntersections, tolerance: f64) {
    let mut kept = Vec::with_capacity(result.common_segments.len());
    for segment in result.common_segments.drain(..) {
        if segment.curve.length() <= tolerance {
            result.points.push(segment.curve.midpoint());
        } else {
            result.points.push(segment.curve.first_point());
            result.points.push(segment.curve.last_point());
            kept.push(segment);
        }
    }
    result.common_segments = kept;

    let mut unique: Vec<Point2> = Vec::with_capacity(result.points.len());
    for p in result.points.drain(..) {
        if !unique.iter().any(|q| points_equal(q, &p, tolerance)) {
            unique.push(p);
        }
    }
    result.points = unique;
}
