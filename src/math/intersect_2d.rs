use std::f64::consts::TAU;

use super::arc_2d::{angle_to_arc_param, normalize_angle};
use super::{cross_2d, Point2, Vector2};

/// Result of intersecting two bounded line segments.
#[derive(Debug, Clone, PartialEq)]
pub enum LineLineIntersection {
    /// The segments do not meet.
    None,
    /// A single crossing point with its parameter on each segment.
    Point { point: Point2, t: f64, u: f64 },
    /// The segments are collinear and share the parameter range `[t0, t1]` of
    /// the first segment (`t0 <= t1`); `u0` and `u1` are the matching
    /// parameters on the second segment.
    Overlap { t0: f64, t1: f64, u0: f64, u1: f64 },
}

/// Distance from `p` to the infinite line through `a0` and `a1`.
fn distance_to_line(p: &Point2, a0: &Point2, a1: &Point2) -> f64 {
    let d = a1 - a0;
    let len = d.norm();
    if len < f64::EPSILON {
        return (p - a0).norm();
    }
    cross_2d(&d, &(p - a0)).abs() / len
}

/// Parameter of the orthogonal projection of `p` on the line `a0 + t (a1 - a0)`.
fn project_param(p: &Point2, a0: &Point2, a1: &Point2) -> f64 {
    let d = a1 - a0;
    let len_sq = d.norm_squared();
    if len_sq < f64::EPSILON {
        return 0.0;
    }
    (p - a0).dot(&d) / len_sq
}

/// Bounded segment-segment intersection in 2D.
///
/// `tolerance` is a distance: collinearity and endpoint slack are both
/// measured in model units.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
    tolerance: f64,
) -> LineLineIntersection {
    let da = a1 - a0;
    let db = b1 - b0;
    let len_a = da.norm();
    let len_b = db.norm();
    if len_a < tolerance || len_b < tolerance {
        return LineLineIntersection::None;
    }

    let collinear =
        distance_to_line(b0, a0, a1) <= tolerance && distance_to_line(b1, a0, a1) <= tolerance;
    if collinear {
        return collinear_overlap(a0, a1, b0, b1, tolerance);
    }

    let cross = cross_2d(&da, &db);
    if cross.abs() < f64::EPSILON * len_a * len_b {
        return LineLineIntersection::None;
    }

    let d = b0 - a0;
    let t = cross_2d(&d, &db) / cross;
    let u = cross_2d(&d, &da) / cross;

    let eps_t = tolerance / len_a;
    let eps_u = tolerance / len_b;
    if t >= -eps_t && t <= 1.0 + eps_t && u >= -eps_u && u <= 1.0 + eps_u {
        let t = t.clamp(0.0, 1.0);
        LineLineIntersection::Point {
            point: a0 + da * t,
            t,
            u: u.clamp(0.0, 1.0),
        }
    } else {
        LineLineIntersection::None
    }
}

/// Overlap of two collinear segments, expressed on the first one.
fn collinear_overlap(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
    tolerance: f64,
) -> LineLineIntersection {
    let len_a = (a1 - a0).norm();
    let eps = tolerance / len_a;

    let tb0 = project_param(b0, a0, a1);
    let tb1 = project_param(b1, a0, a1);
    let lo = tb0.min(tb1).max(0.0);
    let hi = tb0.max(tb1).min(1.0);
    if lo > hi + eps {
        return LineLineIntersection::None;
    }
    let (t0, t1) = if lo > hi { (hi, hi) } else { (lo, hi) };

    let pa = a0 + (a1 - a0) * t0;
    let pb = a0 + (a1 - a0) * t1;
    if t1 - t0 <= eps {
        return LineLineIntersection::Point {
            point: pa,
            t: t0,
            u: project_param(&pa, b0, b1).clamp(0.0, 1.0),
        };
    }
    LineLineIntersection::Overlap {
        t0,
        t1,
        u0: project_param(&pa, b0, b1).clamp(0.0, 1.0),
        u1: project_param(&pb, b0, b1).clamp(0.0, 1.0),
    }
}

/// Intersection of a line segment with a circular arc in 2D.
///
/// Returns `(point, t_seg, t_arc)` triples with both parameters in `[0, 1]`.
/// A tangent contact yields a single point.
#[must_use]
pub fn line_arc_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    center: &Point2,
    radius: f64,
    start_angle: f64,
    sweep: f64,
    tolerance: f64,
) -> Vec<(Point2, f64, f64)> {
    let mut results = Vec::new();
    let dir = a1 - a0;
    let len = dir.norm();
    if radius < tolerance || sweep.abs() < f64::EPSILON || len < tolerance {
        return results;
    }
    let unit = dir / len;

    // Foot of the perpendicular from the center onto the line.
    let s_foot = (center - a0).dot(&unit);
    let foot = a0 + unit * s_foot;
    let dist = (center - foot).norm();

    if dist > radius + tolerance {
        return results;
    }

    let candidates = if (dist - radius).abs() <= tolerance {
        vec![s_foot]
    } else {
        let half_chord = (radius * radius - dist * dist).max(0.0).sqrt();
        vec![s_foot - half_chord, s_foot + half_chord]
    };

    let eps_angle = tolerance / radius;
    for s in candidates {
        if s < -tolerance || s > len + tolerance {
            continue;
        }
        let s = s.clamp(0.0, len);
        let point = a0 + unit * s;
        let angle = (point.y - center.y).atan2(point.x - center.x);
        if let Some(t_arc) = angle_to_arc_param(angle, start_angle, sweep, eps_angle) {
            results.push((point, s / len, t_arc));
        }
    }

    results
}

/// Intersection of two circular arcs in 2D.
///
/// Returns `(point, t1, t2)` triples. Concentric arcs report nothing here;
/// their coincident portions come from [`arc_arc_overlaps`].
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn arc_arc_intersect_2d(
    c1: &Point2,
    r1: f64,
    start1: f64,
    sweep1: f64,
    c2: &Point2,
    r2: f64,
    start2: f64,
    sweep2: f64,
    tolerance: f64,
) -> Vec<(Point2, f64, f64)> {
    let mut results = Vec::new();
    if r1 < tolerance || r2 < tolerance {
        return results;
    }

    let d = c2 - c1;
    let dist_sq = d.norm_squared();
    let dist = dist_sq.sqrt();
    if dist < tolerance {
        return results;
    }

    let sum = r1 + r2;
    let diff = (r1 - r2).abs();
    if dist > sum + tolerance || dist < diff - tolerance {
        return results;
    }

    // Distance from c1 along c1→c2 to the radical line.
    let a = (r1 * r1 - r2 * r2 + dist_sq) / (2.0 * dist);
    let h = (r1 * r1 - a * a).max(0.0).sqrt();
    let unit = d / dist;
    let mid = c1 + unit * a;
    let perp = Vector2::new(-unit.y, unit.x);

    let candidates = if h <= tolerance {
        vec![mid]
    } else {
        vec![mid + perp * h, mid - perp * h]
    };

    for p in candidates {
        let angle1 = (p.y - c1.y).atan2(p.x - c1.x);
        let angle2 = (p.y - c2.y).atan2(p.x - c2.x);
        let t1 = angle_to_arc_param(angle1, start1, sweep1, tolerance / r1);
        let t2 = angle_to_arc_param(angle2, start2, sweep2, tolerance / r2);
        if let (Some(t1), Some(t2)) = (t1, t2) {
            results.push((p, t1, t2));
        }
    }

    results
}

/// Counter-clockwise angular interval `[lo, lo + len]` covered by an arc.
fn ccw_interval(start: f64, sweep: f64) -> (f64, f64) {
    if sweep >= 0.0 {
        (normalize_angle(start), sweep.min(TAU))
    } else {
        (normalize_angle(start + sweep), (-sweep).min(TAU))
    }
}

/// Coincident portions of two concentric, equal-radius arcs.
///
/// Returns parameter ranges `(t_lo, t_hi)` on the first arc, sorted by
/// `t_lo`. Ranges may be degenerate (`t_lo == t_hi`) when the arcs only touch
/// at an endpoint. Returns an empty list when the arcs are not on the same
/// circle.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn arc_arc_overlaps(
    c1: &Point2,
    r1: f64,
    start1: f64,
    sweep1: f64,
    c2: &Point2,
    r2: f64,
    start2: f64,
    sweep2: f64,
    tolerance: f64,
) -> Vec<(f64, f64)> {
    if (c2 - c1).norm() > tolerance || (r1 - r2).abs() > tolerance {
        return Vec::new();
    }
    let eps = tolerance / r1.max(tolerance);

    let (lo1, len1) = ccw_interval(start1, sweep1);
    let (lo2, len2) = ccw_interval(start2, sweep2);

    // Second interval shifted to start inside [lo1, lo1 + 2π).
    let shifted = lo1 + normalize_angle(lo2 - lo1);
    let mut ranges = Vec::new();
    for offset in [shifted, shifted - TAU] {
        let lo = offset.max(lo1);
        let hi = (offset + len2).min(lo1 + len1);
        if hi >= lo - eps {
            let hi = hi.max(lo);
            // Angles measured counter-clockwise from lo1 → parameters on arc 1.
            let (a, b) = ((lo - lo1) / len1, (hi - lo1) / len1);
            let (t_lo, t_hi) = if sweep1 >= 0.0 { (a, b) } else { (1.0 - b, 1.0 - a) };
            ranges.push((t_lo.clamp(0.0, 1.0), t_hi.clamp(0.0, 1.0)));
        }
    }
    ranges.sort_by(|a, b| a.0.total_cmp(&b.0));
    ranges
}
