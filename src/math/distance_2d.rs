use super::arc_2d::{angle_to_arc_param, arc_point_at};
use super::Point2;

/// Minimum distance from `p` to the segment `a → b`.
#[must_use]
pub fn point_to_segment_dist(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let d = b - a;
    let len_sq = d.norm_squared();

    if len_sq < 1e-20 {
        return (p - a).norm();
    }

    // Project onto the infinite line, clamp to the segment.
    let t = ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    (p - (a + d * t)).norm()
}

/// Minimum distance from `p` to a circular arc.
///
/// Inside the arc's angular range the distance is radial; otherwise it is the
/// distance to the nearer endpoint.
#[must_use]
pub fn point_to_arc_dist(
    p: &Point2,
    center: &Point2,
    radius: f64,
    start_angle: f64,
    sweep: f64,
) -> f64 {
    let offset = p - center;
    let dist_to_center = offset.norm();

    let angle = offset.y.atan2(offset.x);
    if angle_to_arc_param(angle, start_angle, sweep, 1e-12).is_some() {
        return (dist_to_center - radius).abs();
    }

    let d0 = (p - arc_point_at(center, radius, start_angle, sweep, 0.0)).norm();
    let d1 = (p - arc_point_at(center, radius, start_angle, sweep, 1.0)).norm();
    d0.min(d1)
}
