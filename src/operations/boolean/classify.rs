use std::collections::HashMap;

use tracing::{trace, warn};

use crate::geometry::blueprint::Blueprint;
use crate::geometry::curve::Curve;
use crate::math::Point2;
use crate::operations::query::{point_in_blueprint, Containment};

use super::hashing::SegmentKey;
use super::segment::Segment;

/// Direction of a segment shared with the other loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryMatch {
    /// Both loops run along it in the same direction.
    Same,
    /// The loops run along it in opposite directions.
    Opposite,
}

/// Position of a segment relative to the other loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Inside,
    Outside,
    Boundary(BoundaryMatch),
}

/// Classifies every segment of one loop against the other loop.
///
/// Segments that coincide with a segment of the other loop are reported as
/// `Boundary`; the rest are probed with point containment.
///
/// # Panics
///
/// Panics if every probe point of a non-boundary segment lies on the other
/// loop's boundary. Segmentation at all cut points rules this out.
#[must_use]
pub fn classify_segments(
    segments: &[Segment],
    other_segments: &[Segment],
    other_loop: &Blueprint,
    tolerance: f64,
) -> Vec<Classification> {
    let mut by_key: HashMap<SegmentKey, Vec<&Segment>> = HashMap::new();
    for segment in other_segments {
        by_key.entry(segment.key()).or_default().push(segment);
    }

    segments
        .iter()
        .map(|segment| {
            let matched = by_key
                .get(&segment.key())
                .into_iter()
                .flatten()
                .find_map(|other| boundary_match(segment, other, tolerance));
            let classification = match matched {
                Some(m) => Classification::Boundary(m),
                None => probe(segment, other_loop, tolerance),
            };
            trace!(
                start = segment.start,
                end = segment.end,
                ?classification,
                "segment classified"
            );
            classification
        })
        .collect()
}

/// Confirms that two segments with the same key trace the same geometry and
/// reports their relative direction.
fn boundary_match(segment: &Segment, other: &Segment, tolerance: f64) -> Option<BoundaryMatch> {
    let on_other = segment
        .curves
        .iter()
        .all(|c| other.distance_to(&c.midpoint()) <= tolerance);
    let on_self = other
        .curves
        .iter()
        .all(|c| segment.distance_to(&c.midpoint()) <= tolerance);
    if !on_other || !on_self {
        return None;
    }

    let curve = &segment.curves[segment.curves.len() / 2];
    let probe = curve.midpoint();
    let tangent = curve.tangent(0.5).ok()?;
    let other_tangent = other.curves.iter().find_map(|c| {
        let t = c.parameter_of(&probe, tolerance)?;
        c.tangent(t).ok()
    })?;
    if tangent.dot(&other_tangent) >= 0.0 {
        Some(BoundaryMatch::Same)
    } else {
        Some(BoundaryMatch::Opposite)
    }
}

/// Probe points of a segment in the order they are tried: the midpoint of
/// the middle curve, then the midpoints of the other curves, then quarter
/// points of every curve.
fn probe_points(segment: &Segment) -> impl Iterator<Item = Point2> + '_ {
    let n = segment.curves.len();
    let middle = n / 2;
    let order = std::iter::once(middle).chain((0..n).filter(move |&i| i != middle));
    let midpoints = order.map(|i| segment.curves[i].midpoint());
    let quarters = segment
        .curves
        .iter()
        .flat_map(|c| [c.value(0.25), c.value(0.75)]);
    midpoints.chain(quarters)
}

fn probe(segment: &Segment, other_loop: &Blueprint, tolerance: f64) -> Classification {
    for (attempt, point) in probe_points(segment).enumerate() {
        match point_in_blueprint(other_loop, &point, tolerance) {
            Containment::Inside => return Classification::Inside,
            Containment::Outside => return Classification::Outside,
            Containment::OnBoundary => {
                warn!(
                    attempt,
                    x = point.x,
                    y = point.y,
                    "classification probe lies on the other boundary, retrying"
                );
            }
        }
    }
    panic!(
        "classify_segments: every probe of segment {} -> {} lies on the other boundary",
        segment.start, segment.end
    );
}
