use crate::error::IntersectionError;
use crate::geometry::blueprint::Blueprint;
use crate::geometry::curve::Curve;
use crate::math::{points_equal, Point2, Precision};
use crate::operations::boolean::{intersect_curves, self_intersections};

/// Points where a blueprint loop touches or crosses itself.
///
/// Every pair of curves is intersected. Consecutive curves are allowed to
/// meet at the vertex they share; any other contact is reported. A stretch
/// where two curves run over each other is reported through its endpoints.
///
/// # Errors
///
/// Propagates intersection failures for degenerate or non-finite curves.
pub fn blueprint_self_intersections(
    blueprint: &Blueprint,
    precision: &Precision,
) -> Result<Vec<Point2>, IntersectionError> {
    let tol = precision.tolerance;
    let curves = blueprint.curves();
    let n = curves.len();
    let mut hits: Vec<Point2> = Vec::new();

    for (i, curve) in curves.iter().enumerate() {
        hits.extend(self_intersections(curve, precision)?);
        for j in (i + 1)..n {
            let other = &curves[j];
            let found = intersect_curves(curve, other, precision)?;

            // Vertices shared by the pair: end of i / start of j when j follows
            // i, and start of i / end of j when i follows j around the loop.
            let mut shared = Vec::with_capacity(2);
            if j == i + 1 {
                shared.push(curve.last_point());
            }
            if i == 0 && j == n - 1 {
                shared.push(curve.first_point());
            }

            if !found.common_segments.is_empty() {
                hits.extend(found.points);
                continue;
            }
            hits.extend(
                found
                    .points
                    .into_iter()
                    .filter(|p| !shared.iter().any(|s| points_equal(s, p, tol))),
            );
        }
    }
    Ok(hits)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::{Arc2D, Curve2D};

    #[test]
    fn simple_loops_are_clean() {
        let p = Precision::default();
        let rect = Blueprint::rectangle(4.0, 2.0).unwrap();
        assert!(blueprint_self_intersections(&rect, &p).unwrap().is_empty());
        let circle = Blueprint::circle(Point2::origin(), 1.0).unwrap();
        assert!(blueprint_self_intersections(&circle, &p).unwrap().is_empty());
    }

    #[test]
    fn two_arc_circle_is_clean() {
        let upper = Arc2D::new(Point2::origin(), 1.0, 0.0, std::f64::consts::PI);
        let lower = Arc2D::new(Point2::origin(), 1.0, std::f64::consts::PI, std::f64::consts::PI);
        let bp = Blueprint::new(vec![upper.into(), lower.into()]).unwrap();
        assert!(blueprint_self_intersections(&bp, &Precision::default())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn bow_tie_crosses_itself() {
        let bp = Blueprint::polygon(&[
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 2.0),
        ])
        .unwrap();
        let hits = blueprint_self_intersections(&bp, &Precision::default()).unwrap();
        assert_eq!(hits.len(), 1);
        assert!(points_equal(&hits[0], &Point2::new(1.0, 1.0), 1e-9));
    }

    #[test]
    fn backtracking_edge_is_reported() {
        let bp = Blueprint::new(vec![
            Curve2D::line(Point2::new(0.0, 0.0), Point2::new(2.0, 0.0)),
            Curve2D::line(Point2::new(2.0, 0.0), Point2::new(1.0, 0.0)),
            Curve2D::line(Point2::new(1.0, 0.0), Point2::new(1.0, 1.0)),
            Curve2D::line(Point2::new(1.0, 1.0), Point2::new(0.0, 0.0)),
        ])
        .unwrap();
        let hits = blueprint_self_intersections(&bp, &Precision::default()).unwrap();
        assert!(!hits.is_empty());
    }
}
