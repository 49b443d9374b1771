use tracing::trace;

use crate::geometry::blueprint::{Blueprint, Orientation};
use crate::geometry::blueprints::{Blueprints, Profile};
use crate::geometry::compound::CompoundBlueprint;
use crate::geometry::curve::Curve;
use crate::math::Precision;
use crate::operations::query::Containment;

/// Groups non-crossing loops into profiles by containment.
///
/// Loops are sorted by decreasing area and each one is nested inside the
/// smallest loop enclosing it. Loops at even depth become outer boundaries
/// (counter-clockwise); loops at odd depth become holes (clockwise) of
/// their parent.
#[must_use]
pub fn organise_blueprints(loops: Vec<Blueprint>, precision: &Precision) -> Blueprints {
    let tol = precision.tolerance;
    let mut loops = loops;
    loops.sort_by(|a, b| b.area().total_cmp(&a.area()));

    let n = loops.len();
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut depth: Vec<usize> = vec![0; n];
    for i in 0..n {
        // Earlier loops are larger; the last one enclosing `i` is the smallest.
        if let Some(j) = (0..i).rev().find(|&j| is_nested(&loops[i], &loops[j], tol)) {
            parent[i] = Some(j);
            depth[i] = depth[j] + 1;
        }
    }
    trace!(loops = n, ?depth, "loops nested");

    let mut profiles = Vec::new();
    for outer in (0..n).filter(|&i| depth[i] % 2 == 0) {
        let holes: Vec<Blueprint> = (0..n)
            .filter(|&h| parent[h] == Some(outer) && depth[h] % 2 == 1)
            .map(|h| loops[h].oriented(Orientation::Clockwise))
            .collect();
        let boundary = loops[outer].oriented(Orientation::CounterClockwise);
        if holes.is_empty() {
            profiles.push(Profile::Simple(boundary));
        } else {
            let mut all = Vec::with_capacity(holes.len() + 1);
            all.push(boundary);
            all.extend(holes);
            profiles.push(Profile::Compound(CompoundBlueprint::from_loops(all)));
        }
    }
    Blueprints::new(profiles)
}

/// Whether `inner` lies inside `outer`. The loops are known not to cross, so
/// the first probe point off the outer boundary decides.
fn is_nested(inner: &Blueprint, outer: &Blueprint, tolerance: f64) -> bool {
    if !outer.bounding_box().contains_box(&inner.bounding_box(), tolerance) {
        return false;
    }
    for curve in inner.curves() {
        for point in [curve.midpoint(), curve.first_point()] {
            match outer.classify_point(&point, tolerance) {
                Containment::Inside => return true,
                Containment::Outside => return false,
                Containment::OnBoundary => {}
            }
        }
    }
    false
}
