use super::{cross_2d, Point2};

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Signed angle subtended at `p` by the straight path `a → b`, in `(-π, π]`.
///
/// Summing this over a closed polygon gives `2π` times its winding number
/// around `p`.
#[must_use]
pub fn subtended_angle(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let va = a - p;
    let vb = b - p;
    cross_2d(&va, &vb).atan2(va.dot(&vb))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn signed_area_ccw_square() {
        assert!((signed_area_2d(&square()) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn signed_area_cw_square() {
        let mut pts = square();
        pts.reverse();
        assert!((signed_area_2d(&pts) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!(signed_area_2d(&[Point2::origin()]).abs() < 1e-12);
        assert!(signed_area_2d(&[]).abs() < 1e-12);
    }

    fn total_angle(p: &Point2, pts: &[Point2]) -> f64 {
        (0..pts.len())
            .map(|i| subtended_angle(p, &pts[i], &pts[(i + 1) % pts.len()]))
            .sum()
    }

    #[test]
    fn subtended_angles_sum_to_winding() {
        let tau = std::f64::consts::TAU;
        assert!((total_angle(&Point2::new(0.5, 0.5), &square()) - tau).abs() < 1e-12);
        assert!(total_angle(&Point2::new(1.5, 0.5), &square()).abs() < 1e-12);
        let mut cw = square();
        cw.reverse();
        assert!((total_angle(&Point2::new(0.5, 0.5), &cw) + tau).abs() < 1e-12);
    }
}
