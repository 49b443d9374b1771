//! Circular arc math in center / radius / start angle / sweep form.
//!
//! An arc is parameterised over `t` in `[0, 1]`, the angle at `t` being
//! `start_angle + t * sweep`. Positive sweep runs counter-clockwise.
//!
//! Bulge convention (used by polyline input): `bulge = tan(sweep_angle / 4)`.
use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::{Point2, Vector2};

/// Converts a bulge-defined arc between `p0` and `p1` to center-radius-angle form.
///
/// Returns `(center, radius, start_angle, sweep)`. Zero-length chords return a
/// zero radius.
#[must_use]
pub fn arc_from_bulge(p0: &Point2, p1: &Point2, bulge: f64) -> (Point2, f64, f64, f64) {
    let chord = p1 - p0;
    let chord_len = chord.norm();

    if chord_len < 1e-12 {
        return (*p0, 0.0, 0.0, 0.0);
    }

    // Distance from chord midpoint to center, as a multiple of half the chord.
    let sagitta_ratio = (1.0 - bulge * bulge) / (2.0 * bulge);
    let mid = Point2::new((p0.x + p1.x) * 0.5, (p0.y + p1.y) * 0.5);

    // Left normal of the chord; the center sits left of it for positive bulge.
    let normal = Vector2::new(-chord.y, chord.x) / chord_len;
    let center = mid + normal * (sagitta_ratio * chord_len * 0.5);

    // r = d*(1+b²)/(4*|b|)
    let radius = (chord_len * 0.5) * (1.0 + bulge * bulge) / (2.0 * bulge.abs());
    let start_angle = (p0.y - center.y).atan2(p0.x - center.x);
    let sweep = 4.0 * bulge.atan();

    (center, radius, start_angle, sweep)
}

/// Evaluates a point on an arc at parameter `t` in `[0, 1]`.
#[must_use]
pub fn arc_point_at(center: &Point2, radius: f64, start_angle: f64, sweep: f64, t: f64) -> Point2 {
    let angle = start_angle + sweep * t;
    Point2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin())
}

/// Unit tangent on an arc at parameter `t`, pointing towards increasing `t`.
#[must_use]
pub fn arc_tangent_at(start_angle: f64, sweep: f64, t: f64) -> Vector2 {
    let angle = start_angle + sweep * t;
    let sign = if sweep >= 0.0 { 1.0 } else { -1.0 };
    Vector2::new(-sign * angle.sin(), sign * angle.cos())
}

/// Converts an absolute angle to an arc parameter `t` in `[0, 1]`.
///
/// `eps` is an angular slack applied at both ends of the sweep. Returns `None`
/// when the angle lies outside the arc.
#[must_use]
pub fn angle_to_arc_param(angle: f64, start_angle: f64, sweep: f64, eps: f64) -> Option<f64> {
    if sweep.abs() < f64::EPSILON {
        return None;
    }
    let mut delta = angle - start_angle;

    if sweep > 0.0 {
        while delta < -eps {
            delta += TAU;
        }
        while delta > TAU + eps {
            delta -= TAU;
        }
    } else {
        while delta > eps {
            delta -= TAU;
        }
        while delta < -TAU - eps {
            delta += TAU;
        }
    }

    let t = delta / sweep;
    let t_eps = eps / sweep.abs();
    if t >= -t_eps && t <= 1.0 + t_eps {
        Some(t.clamp(0.0, 1.0))
    } else {
        None
    }
}

/// Normalizes an angle into `[0, 2π)`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(TAU);
    if a >= TAU {
        0.0
    } else {
        a
    }
}

/// Axis-aligned bounds of an arc: the endpoints plus every axis extreme
/// (0, π/2, π, 3π/2) the sweep passes through.
#[must_use]
pub fn arc_bounds(center: &Point2, radius: f64, start_angle: f64, sweep: f64) -> (Point2, Point2) {
    let p0 = arc_point_at(center, radius, start_angle, sweep, 0.0);
    let p1 = arc_point_at(center, radius, start_angle, sweep, 1.0);
    let mut min = Point2::new(p0.x.min(p1.x), p0.y.min(p1.y));
    let mut max = Point2::new(p0.x.max(p1.x), p0.y.max(p1.y));

    for quadrant in 0..4 {
        let angle = f64::from(quadrant) * FRAC_PI_2;
        if angle_to_arc_param(angle, start_angle, sweep, 0.0).is_some() {
            let p = Point2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin());
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
    }
    (min, max)
}

/// Number of chords needed to approximate an arc within `tolerance`.
#[must_use]
pub fn arc_subdivision_count(radius: f64, abs_sweep: f64, tolerance: f64) -> u32 {
    if radius < 1e-12 || abs_sweep < 1e-12 || tolerance <= 0.0 {
        return 1;
    }
    // sagitta = r * (1 - cos(θ/2))
    let max_angle = if tolerance >= radius {
        PI
    } else {
        2.0 * (1.0 - tolerance / radius).acos()
    };
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = (abs_sweep / max_angle).ceil() as u32;
    n.max(1)
}

/// Signed area between an arc and its chord (the circular segment).
///
/// Positive for counter-clockwise sweeps. Adding it to the shoelace term of
/// the chord gives the exact contribution of the arc to a loop's area.
#[must_use]
pub fn circular_segment_area(radius: f64, sweep: f64) -> f64 {
    0.5 * radius * radius * (sweep - sweep.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const TOL: f64 = 1e-10;

    #[test]
    fn semicircle_ccw_goes_through_bottom() {
        let (c, r, sa, sw) = arc_from_bulge(&Point2::new(0.0, 0.0), &Point2::new(2.0, 0.0), 1.0);
        assert_abs_diff_eq!(c.x, 1.0, epsilon = TOL);
        assert_abs_diff_eq!(c.y, 0.0, epsilon = TOL);
        assert_abs_diff_eq!(r, 1.0, epsilon = TOL);
        assert_abs_diff_eq!(sw, PI, epsilon = TOL);

        let pm = arc_point_at(&c, r, sa, sw, 0.5);
        assert_abs_diff_eq!(pm.x, 1.0, epsilon = TOL);
        assert_abs_diff_eq!(pm.y, -1.0, epsilon = TOL);
    }

    #[test]
    fn semicircle_cw_goes_through_top() {
        let (c, r, sa, sw) = arc_from_bulge(&Point2::new(0.0, 0.0), &Point2::new(2.0, 0.0), -1.0);
        assert_abs_diff_eq!(sw, -PI, epsilon = TOL);
        let pm = arc_point_at(&c, r, sa, sw, 0.5);
        assert_abs_diff_eq!(pm.x, 1.0, epsilon = TOL);
        assert_abs_diff_eq!(pm.y, 1.0, epsilon = TOL);
    }

    #[test]
    fn tangent_is_unit_and_follows_sweep() {
        let t0 = arc_tangent_at(0.0, FRAC_PI_2, 0.0);
        assert_abs_diff_eq!(t0.norm(), 1.0, epsilon = TOL);
        assert_abs_diff_eq!(t0.y, 1.0, epsilon = TOL);

        let t_cw = arc_tangent_at(0.0, -FRAC_PI_2, 0.0);
        assert_abs_diff_eq!(t_cw.y, -1.0, epsilon = TOL);
    }

    #[test]
    fn angle_param_inside_and_outside() {
        let t = angle_to_arc_param(FRAC_PI_2, 0.0, PI, 1e-9).unwrap_or(-1.0);
        assert_abs_diff_eq!(t, 0.5, epsilon = TOL);
        assert!(angle_to_arc_param(-FRAC_PI_2, 0.0, PI, 1e-9).is_none());

        // Clockwise arc from π/2 down to -π/2 through angle 0.
        let t_cw = angle_to_arc_param(0.0, FRAC_PI_2, -PI, 1e-9).unwrap_or(-1.0);
        assert_abs_diff_eq!(t_cw, 0.5, epsilon = TOL);
    }

    #[test]
    fn quarter_arc_bounds_include_extreme() {
        // From angle -π/4 to π/4 passes through angle 0 at x = r.
        let (min, max) = arc_bounds(&Point2::origin(), 2.0, -PI / 4.0, FRAC_PI_2);
        assert_abs_diff_eq!(max.x, 2.0, epsilon = TOL);
        assert_abs_diff_eq!(min.x, 2.0 * (PI / 4.0).cos(), epsilon = TOL);
        assert_abs_diff_eq!(max.y, 2.0 * (PI / 4.0).sin(), epsilon = TOL);
    }

    #[test]
    fn full_circle_segment_area_is_disc_area() {
        assert_abs_diff_eq!(circular_segment_area(3.0, TAU), 9.0 * PI, epsilon = TOL);
        assert_abs_diff_eq!(circular_segment_area(3.0, -TAU), -9.0 * PI, epsilon = TOL);
    }

    #[test]
    fn subdivision_count_grows_with_precision() {
        assert_eq!(arc_subdivision_count(1.0, PI, 10.0), 1);
        assert!(arc_subdivision_count(1.0, PI, 0.001) > 10);
    }

    #[test]
    fn normalize_angle_wraps() {
        assert_abs_diff_eq!(normalize_angle(-FRAC_PI_2), 1.5 * PI, epsilon = TOL);
        assert_abs_diff_eq!(normalize_angle(TAU + 0.25), 0.25, epsilon = TOL);
    }
}
