use tracing::{debug, trace};

use crate::error::{OperationError, Result};
use crate::geometry::blueprint::{Blueprint, Orientation};
use crate::geometry::blueprints::{Blueprints, Profile};
use crate::geometry::compound::CompoundBlueprint;
use crate::geometry::shape::Shape2D;
use crate::math::Precision;
use crate::operations::query::{blueprint_self_intersections, Containment};

use super::assemble::assemble_loops;
use super::classify::{classify_segments, BoundaryMatch, Classification};
use super::hashing::{PointIndex, VertexId};
use super::intersection::intersect_curves;
use super::organise::organise_blueprints;
use super::segment::{segment_loop, LoopSource};
use super::select::{should_keep_segment, BooleanOp, KeepDecision};

/// How two loops relate when their boundaries do not cross.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WholeLoopRelation {
    Identical,
    AInsideB,
    BInsideA,
    Disjoint,
}

/// Executes a boolean operation on two blueprints.
///
/// Orchestrates the full pipeline: input validation, curve-curve
/// intersection, segmentation, classification, selection, assembly and
/// nesting of the resulting loops.
///
/// Outer boundaries of the result are counter-clockwise and holes are
/// clockwise, whatever the orientation of the inputs.
///
/// # Errors
///
/// Returns `OperationError::InvalidInput` if either input crosses itself,
/// and propagates intersection failures for degenerate curves.
///
/// # Panics
///
/// Panics if the retained segments cannot be stitched into closed loops.
pub fn boolean_execute(
    a: &Blueprint,
    b: &Blueprint,
    op: BooleanOp,
    precision: &Precision,
) -> Result<Shape2D> {
    let tol = precision.tolerance;
    debug!(
        ?op,
        curves_a = a.curves().len(),
        curves_b = b.curves().len(),
        tolerance = tol,
        "boolean operation"
    );

    validate_input(a, "first", precision)?;
    validate_input(b, "second", precision)?;

    if a.is_same_loop(b, tol) {
        debug!("inputs are the same loop");
        return Ok(whole_loop_result(a, b, op, WholeLoopRelation::Identical));
    }

    // Shared boundary direction is only meaningful with a common orientation.
    let b_oriented = b.oriented(a.orientation());

    let cut_points = collect_cut_points(a, &b_oriented, precision)?;
    let mut index = cut_points.index;
    if cut_points.ids.is_empty() {
        let relation = relation_without_contact(a, b, tol);
        debug!(?relation, "boundaries do not meet");
        return Ok(whole_loop_result(a, b, op, relation));
    }

    let segments_a = segment_loop(a, &cut_points.ids, &mut index, LoopSource::A);
    let segments_b = segment_loop(&b_oriented, &cut_points.ids, &mut index, LoopSource::B);
    assert!(
        !segments_a.is_empty() && !segments_b.is_empty(),
        "boolean_execute: {} cut points found but a loop was not segmented",
        cut_points.ids.len()
    );
    trace!(
        cut_points = cut_points.ids.len(),
        segments_a = segments_a.len(),
        segments_b = segments_b.len(),
        "loops segmented"
    );

    let classes_a = classify_segments(&segments_a, &segments_b, &b_oriented, tol);
    let classes_b = classify_segments(&segments_b, &segments_a, a, tol);

    let same = Classification::Boundary(BoundaryMatch::Same);
    if classes_a.iter().chain(&classes_b).all(|c| *c == same) {
        debug!("every segment is shared, inputs are the same loop");
        return Ok(whole_loop_result(a, b, op, WholeLoopRelation::Identical));
    }

    let mut kept = Vec::new();
    let classified = segments_a
        .into_iter()
        .zip(classes_a)
        .chain(segments_b.into_iter().zip(classes_b));
    for (segment, classification) in classified {
        match should_keep_segment(segment.source, classification, op) {
            KeepDecision::Keep => kept.push(segment),
            KeepDecision::KeepReversed => kept.push(segment.reversed()),
            KeepDecision::Discard => {}
        }
    }
    debug!(kept = kept.len(), "segments selected");

    if kept.is_empty() {
        return Ok(Shape2D::Empty);
    }

    let loops = assemble_loops(kept, a.orientation(), tol);
    debug!(loops = loops.len(), "loops assembled");
    Ok(Shape2D::from_blueprints(organise_blueprints(loops, precision)))
}

/// Rejects inputs whose boundary touches or crosses itself.
fn validate_input(blueprint: &Blueprint, which: &str, precision: &Precision) -> Result<()> {
    let hits = blueprint_self_intersections(blueprint, precision)?;
    if let Some(p) = hits.first() {
        return Err(OperationError::InvalidInput(format!(
            "{which} blueprint is self-intersecting at ({}, {})",
            p.x, p.y
        ))
        .into());
    }
    Ok(())
}

struct CutPoints {
    index: PointIndex,
    ids: Vec<VertexId>,
}

/// Intersects every curve of `a` with every curve of `b` and registers the
/// contact points.
fn collect_cut_points(a: &Blueprint, b: &Blueprint, precision: &Precision) -> Result<CutPoints> {
    let mut index = PointIndex::new(*precision);
    if a.bounding_box().is_out(&b.bounding_box(), precision.tolerance) {
        return Ok(CutPoints {
            index,
            ids: Vec::new(),
        });
    }
    for ca in a.curves() {
        for cb in b.curves() {
            let found = intersect_curves(ca, cb, precision)?;
            for p in found.points {
                index.insert(p);
            }
        }
    }
    // Only cut points have been registered so far.
    let ids = (0..index.len()).collect();
    Ok(CutPoints { index, ids })
}

/// Decides containment of loops whose boundaries never meet.
fn relation_without_contact(a: &Blueprint, b: &Blueprint, tolerance: f64) -> WholeLoopRelation {
    let inside = |inner: &Blueprint, outer: &Blueprint| {
        outer.bounding_box().contains_box(&inner.bounding_box(), tolerance)
            && outer.classify_point(&inner.first_point(), tolerance) == Containment::Inside
    };
    if inside(a, b) {
        WholeLoopRelation::AInsideB
    } else if inside(b, a) {
        WholeLoopRelation::BInsideA
    } else {
        WholeLoopRelation::Disjoint
    }
}

/// Result table for loops that are equal, nested or apart.
///
/// | Operation | Identical | A inside B | B inside A       | Disjoint        |
/// |-----------|-----------|------------|------------------|-----------------|
/// | Fuse      | A         | B          | A                | Disjoint(A, B)  |
/// | Cut       | Empty     | Empty      | WithHoles(A, B)  | A               |
/// | Intersect | A         | A          | B                | Empty           |
fn whole_loop_result(
    a: &Blueprint,
    b: &Blueprint,
    op: BooleanOp,
    relation: WholeLoopRelation,
) -> Shape2D {
    use WholeLoopRelation::{AInsideB, BInsideA, Disjoint, Identical};
    let outer = |bp: &Blueprint| bp.oriented(Orientation::CounterClockwise);
    match (op, relation) {
        (BooleanOp::Fuse | BooleanOp::Intersect, Identical)
        | (BooleanOp::Fuse, BInsideA)
        | (BooleanOp::Intersect, AInsideB)
        | (BooleanOp::Cut, Disjoint) => Shape2D::Single(outer(a)),
        (BooleanOp::Fuse, AInsideB) | (BooleanOp::Intersect, BInsideA) => Shape2D::Single(outer(b)),
        (BooleanOp::Cut, Identical | AInsideB) | (BooleanOp::Intersect, Disjoint) => Shape2D::Empty,
        (BooleanOp::Cut, BInsideA) => {
            Shape2D::WithHoles(CompoundBlueprint::from_loops(vec![outer(a), b.clone()]))
        }
        (BooleanOp::Fuse, Disjoint) => Shape2D::Disjoint(Blueprints::new(vec![
            Profile::Simple(outer(a)),
            Profile::Simple(outer(b)),
        ])),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::curve::{Arc2D, Curve, Curve2D};
    use crate::math::Point2;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Blueprint {
        Blueprint::polygon(&[
            Point2::new(x, y),
            Point2::new(x + w, y),
            Point2::new(x + w, y + h),
            Point2::new(x, y + h),
        ])
        .unwrap()
    }

    fn run(a: &Blueprint, b: &Blueprint, op: BooleanOp) -> Shape2D {
        init_tracing();
        boolean_execute(a, b, op, &Precision::default()).unwrap()
    }

    fn assert_closed(shape: &Shape2D) {
        for bp in shape.loops() {
            let curves = bp.curves();
            for (i, c) in curves.iter().enumerate() {
                let next = &curves[(i + 1) % curves.len()];
                assert!(
                    crate::math::points_equal(&c.last_point(), &next.first_point(), 1e-9),
                    "gap after curve {i}"
                );
            }
        }
    }

    #[test]
    fn overlapping_rectangles() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 5.0, 10.0, 10.0);

        let fused = run(&a, &b, BooleanOp::Fuse);
        assert!(matches!(fused, Shape2D::Single(_)));
        assert_abs_diff_eq!(fused.area(), 175.0, epsilon = 1e-9);
        assert_closed(&fused);

        let cut = run(&a, &b, BooleanOp::Cut);
        assert_abs_diff_eq!(cut.area(), 75.0, epsilon = 1e-9);
        assert_closed(&cut);

        let common = run(&a, &b, BooleanOp::Intersect);
        assert_abs_diff_eq!(common.area(), 25.0, epsilon = 1e-9);
        assert_closed(&common);
    }

    #[test]
    fn translated_square_scenarios() {
        let a = rect(-5.0, -5.0, 10.0, 10.0);
        let b = rect(0.0, -5.0, 10.0, 10.0);
        let fused = run(&a, &b, BooleanOp::Fuse);
        assert!(matches!(fused, Shape2D::Single(_)));
        assert_abs_diff_eq!(fused.area(), 150.0, epsilon = 1e-9);
        let cut = run(&a, &b, BooleanOp::Cut);
        assert!(matches!(cut, Shape2D::Single(_)));
        assert_abs_diff_eq!(cut.area(), 50.0, epsilon = 1e-9);

        let b = rect(-2.0, -5.0, 10.0, 10.0);
        let common = run(&a, &b, BooleanOp::Intersect);
        assert_abs_diff_eq!(common.area(), 70.0, epsilon = 1e-9);
        assert_closed(&common);
    }

    #[test]
    fn partially_shared_edges() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 2.5, 10.0, 5.0);
        assert_abs_diff_eq!(run(&a, &b, BooleanOp::Fuse).area(), 125.0, epsilon = 1e-9);
        assert_abs_diff_eq!(run(&a, &b, BooleanOp::Cut).area(), 75.0, epsilon = 1e-9);
        assert_abs_diff_eq!(run(&a, &b, BooleanOp::Intersect).area(), 25.0, epsilon = 1e-9);

        // Shares the bottom edge and part of both sides.
        let b = rect(0.0, 0.0, 10.0, 7.0);
        assert_abs_diff_eq!(run(&a, &b, BooleanOp::Fuse).area(), 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(run(&a, &b, BooleanOp::Cut).area(), 30.0, epsilon = 1e-9);
        assert_abs_diff_eq!(run(&a, &b, BooleanOp::Intersect).area(), 70.0, epsilon = 1e-9);
    }

    #[test]
    fn fuse_with_itself_is_idempotent() {
        let a = rect(0.0, 0.0, 3.0, 2.0);
        let fused = run(&a, &a, BooleanOp::Fuse);
        assert_eq!(fused, Shape2D::Single(a.clone()));
        assert_eq!(run(&a, &a, BooleanOp::Intersect), Shape2D::Single(a.clone()));
        assert!(run(&a, &a, BooleanOp::Cut).is_empty());
    }

    #[test]
    fn same_circle_with_different_splits_is_identical() {
        let a = Blueprint::circle(Point2::origin(), 2.0).unwrap();
        let b = Blueprint::new(vec![
            Arc2D::new(Point2::origin(), 2.0, 0.0, PI).into(),
            Arc2D::new(Point2::origin(), 2.0, PI, PI).into(),
        ])
        .unwrap();
        assert_eq!(run(&a, &b, BooleanOp::Fuse), Shape2D::Single(a.clone()));
        assert!(run(&a, &b, BooleanOp::Cut).is_empty());
    }

    #[test]
    fn fuse_is_commutative_in_area() {
        let a = rect(0.0, 0.0, 4.0, 4.0);
        let b = Blueprint::circle(Point2::new(4.0, 2.0), 1.5).unwrap();
        let ab = run(&a, &b, BooleanOp::Fuse);
        let ba = run(&b, &a, BooleanOp::Fuse);
        assert_abs_diff_eq!(ab.area(), ba.area(), epsilon = 1e-9);
        let iab = run(&a, &b, BooleanOp::Intersect);
        let iba = run(&b, &a, BooleanOp::Intersect);
        assert_abs_diff_eq!(iab.area(), iba.area(), epsilon = 1e-9);
        assert_abs_diff_eq!(iab.area(), 1.125 * PI, epsilon = 1e-9);
    }

    #[test]
    fn cut_and_intersect_are_complementary() {
        let a = rect(0.0, 0.0, 6.0, 4.0);
        let b = Blueprint::circle(Point2::new(6.0, 0.0), 3.0).unwrap();
        let cut = run(&a, &b, BooleanOp::Cut);
        let common = run(&a, &b, BooleanOp::Intersect);
        assert_abs_diff_eq!(cut.area() + common.area(), a.area(), epsilon = 1e-9);
        assert_abs_diff_eq!(common.area(), 9.0 * PI / 4.0, epsilon = 1e-9);
        assert_closed(&cut);
        assert_closed(&common);

        // Putting the tool back restores the union.
        let Shape2D::Single(rest) = &cut else {
            panic!("expected a single loop, got {cut:?}");
        };
        let refused = run(rest, &b, BooleanOp::Fuse);
        let fused = run(&a, &b, BooleanOp::Fuse);
        assert_abs_diff_eq!(refused.area(), fused.area(), epsilon = 1e-9);
        assert_abs_diff_eq!(fused.area(), 24.0 + 27.0 * PI / 4.0, epsilon = 1e-9);
    }

    fn assert_simple(shape: &Shape2D) {
        for bp in shape.loops() {
            let vertices = bp.vertices();
            for (i, p) in vertices.iter().enumerate() {
                for q in &vertices[i + 1..] {
                    assert!(
                        !crate::math::points_equal(p, q, 1e-9),
                        "loop passes through ({}, {}) twice",
                        p.x,
                        p.y
                    );
                }
            }
        }
    }

    #[test]
    fn disjoint_circle_and_square_keep_their_shapes() {
        let a = rect(0.0, 0.0, 2.0, 2.0);
        let b = Blueprint::circle(Point2::new(10.0, 1.0), 1.0).unwrap();
        let fused = run(&a, &b, BooleanOp::Fuse);
        let Shape2D::Disjoint(parts) = &fused else {
            panic!("expected disjoint result, got {fused:?}");
        };
        assert_eq!(parts.len(), 2);
        for (part, input) in parts.iter().zip([&a, &b]) {
            assert_abs_diff_eq!(part.area(), input.area(), epsilon = 1e-12);
            assert!(part.bounding_box().approx_eq(&input.bounding_box(), 1e-12));
        }
    }

    #[test]
    fn cut_by_inscribed_diamond_leaves_four_corners() {
        let square = rect(0.0, 0.0, 10.0, 10.0);
        let diamond = Blueprint::polygon(&[
            Point2::new(5.0, 0.0),
            Point2::new(10.0, 5.0),
            Point2::new(5.0, 10.0),
            Point2::new(0.0, 5.0),
        ])
        .unwrap();

        let cut = run(&square, &diamond, BooleanOp::Cut);
        let Shape2D::Disjoint(corners) = &cut else {
            panic!("expected four corners, got {cut:?}");
        };
        assert_eq!(corners.len(), 4);
        for corner in corners {
            let Profile::Simple(triangle) = corner else {
                panic!("expected a simple corner, got {corner:?}");
            };
            assert_eq!(triangle.curves().len(), 3);
            assert_abs_diff_eq!(triangle.area(), 12.5, epsilon = 1e-9);
        }
        assert_closed(&cut);
        assert_simple(&cut);

        let common = run(&square, &diamond, BooleanOp::Intersect);
        assert!(matches!(common, Shape2D::Single(_)));
        assert_abs_diff_eq!(common.area(), 50.0, epsilon = 1e-9);

        let fused = run(&square, &diamond, BooleanOp::Fuse);
        let Shape2D::Single(outline) = &fused else {
            panic!("expected the square back, got {fused:?}");
        };
        assert_eq!(outline.curves().len(), 4);
        assert_abs_diff_eq!(outline.area(), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn fuse_touching_at_two_vertices_gives_simple_loops() {
        // A triangle closing the mouth of a U touches it only at the tips of
        // the U's arms, so the union's outline would pass through each tip
        // twice.
        let u = Blueprint::polygon(&[
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(3.0, 3.0),
            Point2::new(2.0, 3.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 3.0),
            Point2::new(0.0, 3.0),
        ])
        .unwrap();
        let wedge = Blueprint::polygon(&[
            Point2::new(1.0, 3.0),
            Point2::new(1.5, 2.0),
            Point2::new(2.0, 3.0),
        ])
        .unwrap();
        let fused = run(&u, &wedge, BooleanOp::Fuse);
        let Shape2D::Disjoint(parts) = &fused else {
            panic!("expected two touching pieces, got {fused:?}");
        };
        assert_eq!(parts.len(), 2);
        assert_abs_diff_eq!(parts.profiles()[0].area(), 7.0, epsilon = 1e-9);
        assert_abs_diff_eq!(parts.profiles()[1].area(), 0.5, epsilon = 1e-9);
        assert_closed(&fused);
        assert_simple(&fused);
        assert!(run(&u, &wedge, BooleanOp::Intersect).is_empty());
    }

    #[test]
    fn results_are_counter_clockwise_for_any_input_orientation() {
        let a = rect(-10.0, -10.0, 20.0, 20.0).reversed();
        let b = Blueprint::circle(Point2::origin(), 3.0).unwrap().reversed();

        let Shape2D::Single(fused) = run(&a, &b, BooleanOp::Fuse) else {
            panic!("expected a single loop");
        };
        assert_eq!(fused.orientation(), Orientation::CounterClockwise);
        let Shape2D::Single(same) = run(&a, &a, BooleanOp::Intersect) else {
            panic!("expected a single loop");
        };
        assert_eq!(same.orientation(), Orientation::CounterClockwise);

        let Shape2D::WithHoles(plate) = run(&a, &b, BooleanOp::Cut) else {
            panic!("expected a hole");
        };
        assert_eq!(plate.outer().orientation(), Orientation::CounterClockwise);
        assert_eq!(plate.holes()[0].orientation(), Orientation::Clockwise);

        let far = rect(30.0, 0.0, 1.0, 1.0).reversed();
        let apart = run(&a, &far, BooleanOp::Fuse);
        assert!(apart
            .loops()
            .iter()
            .all(|l| l.orientation() == Orientation::CounterClockwise));

        // Crossing inputs go through assembly and come out the same way.
        let crossing = rect(5.0, 5.0, 10.0, 10.0).reversed();
        let Shape2D::Single(merged) = run(&a, &crossing, BooleanOp::Fuse) else {
            panic!("expected a single loop");
        };
        assert_eq!(merged.orientation(), Orientation::CounterClockwise);
    }

    #[test]
    fn disjoint_inputs() {
        let a = rect(0.0, 0.0, 1.0, 1.0);
        let b = rect(5.0, 5.0, 1.0, 1.0);
        let fused = run(&a, &b, BooleanOp::Fuse);
        let Shape2D::Disjoint(parts) = &fused else {
            panic!("expected disjoint result, got {fused:?}");
        };
        assert_eq!(parts.len(), 2);
        for (part, input) in parts.iter().zip([&a, &b]) {
            assert_abs_diff_eq!(part.area(), input.area(), epsilon = 1e-12);
            assert!(part.bounding_box().approx_eq(&input.bounding_box(), 1e-12));
        }
        assert!(run(&a, &b, BooleanOp::Intersect).is_empty());
        assert_eq!(run(&a, &b, BooleanOp::Cut), Shape2D::Single(a.clone()));
    }

    #[test]
    fn contained_tool_makes_a_hole() {
        let a = rect(-10.0, -10.0, 20.0, 20.0);
        let b = Blueprint::circle(Point2::origin(), 3.0).unwrap();
        let cut = run(&a, &b, BooleanOp::Cut);
        let Shape2D::WithHoles(compound) = &cut else {
            panic!("expected a hole, got {cut:?}");
        };
        assert_eq!(compound.holes().len(), 1);
        assert_abs_diff_eq!(cut.area(), 400.0 - 9.0 * PI, epsilon = 1e-9);

        assert_eq!(run(&a, &b, BooleanOp::Fuse), Shape2D::Single(a.clone()));
        assert_eq!(run(&a, &b, BooleanOp::Intersect), Shape2D::Single(b.clone()));
        assert!(run(&b, &a, BooleanOp::Cut).is_empty());
        assert_eq!(run(&b, &a, BooleanOp::Fuse), Shape2D::Single(a.clone()));
        assert_eq!(run(&b, &a, BooleanOp::Intersect), Shape2D::Single(b.clone()));
    }

    #[test]
    fn shared_edge_fuse_merges_into_one_rectangle() {
        let a = rect(0.0, 0.0, 1.0, 1.0);
        let b = rect(1.0, 0.0, 1.0, 1.0);
        let fused = run(&a, &b, BooleanOp::Fuse);
        let Shape2D::Single(bp) = &fused else {
            panic!("expected a single loop, got {fused:?}");
        };
        assert_abs_diff_eq!(bp.area(), 2.0, epsilon = 1e-12);
        assert_eq!(bp.curves().len(), 4);
        assert!(run(&a, &b, BooleanOp::Intersect).is_empty());
        assert_abs_diff_eq!(run(&a, &b, BooleanOp::Cut).area(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn opposite_orientations_are_normalised() {
        let a = rect(0.0, 0.0, 10.0, 10.0);
        let b = rect(5.0, 5.0, 10.0, 10.0).reversed();
        assert_abs_diff_eq!(run(&a, &b, BooleanOp::Fuse).area(), 175.0, epsilon = 1e-9);
        assert_abs_diff_eq!(run(&a, &b, BooleanOp::Cut).area(), 75.0, epsilon = 1e-9);
    }

    #[test]
    fn corner_touching_squares() {
        let a = rect(0.0, 0.0, 1.0, 1.0);
        let b = rect(1.0, 1.0, 1.0, 1.0);
        let fused = run(&a, &b, BooleanOp::Fuse);
        assert_abs_diff_eq!(fused.area(), 2.0, epsilon = 1e-12);
        assert_eq!(fused.profile_count(), 2);
        assert!(run(&a, &b, BooleanOp::Intersect).is_empty());
        assert_abs_diff_eq!(run(&a, &b, BooleanOp::Cut).area(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn cut_splits_into_two_pieces() {
        let a = rect(0.0, 0.0, 10.0, 2.0);
        let b = rect(4.0, -1.0, 2.0, 4.0);
        let cut = run(&a, &b, BooleanOp::Cut);
        assert_eq!(cut.profile_count(), 2);
        assert_abs_diff_eq!(cut.area(), 16.0, epsilon = 1e-9);
        assert_closed(&cut);
    }

    #[test]
    fn fuse_encloses_a_hole() {
        // A U shape closed by a bar leaves a hole in the middle.
        let u = Blueprint::polygon(&[
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(3.0, 3.0),
            Point2::new(2.0, 3.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 3.0),
            Point2::new(0.0, 3.0),
        ])
        .unwrap();
        let bar = rect(-0.5, 2.0, 4.0, 2.0);
        let fused = run(&u, &bar, BooleanOp::Fuse);
        let Shape2D::WithHoles(compound) = &fused else {
            panic!("expected a hole, got {fused:?}");
        };
        assert_eq!(compound.holes().len(), 1);
        assert_abs_diff_eq!(compound.holes()[0].area(), 1.0, epsilon = 1e-9);
        // U (7) plus bar (8) minus their overlap (2).
        assert_abs_diff_eq!(fused.area(), 13.0, epsilon = 1e-9);
    }

    #[test]
    fn arc_and_line_mix() {
        // Half disc on the x axis cut by a square over its right half.
        let half = Blueprint::new(vec![
            Curve2D::line(Point2::new(-2.0, 0.0), Point2::new(2.0, 0.0)),
            Arc2D::new(Point2::origin(), 2.0, 0.0, PI).into(),
        ])
        .unwrap();
        let square = rect(0.0, 0.0, 3.0, 3.0);
        let common = run(&half, &square, BooleanOp::Intersect);
        assert_abs_diff_eq!(common.area(), PI, epsilon = 1e-9);
        let cut = run(&half, &square, BooleanOp::Cut);
        assert_abs_diff_eq!(cut.area(), PI, epsilon = 1e-9);
        let fused = run(&half, &square, BooleanOp::Fuse);
        assert_abs_diff_eq!(fused.area(), 9.0 + PI, epsilon = 1e-9);
        assert_closed(&fused);
    }

    #[test]
    fn self_intersecting_input_is_rejected() {
        let bow_tie = Blueprint::polygon(&[
            Point2::new(0.0, 0.0),
            Point2::new(2.0, 2.0),
            Point2::new(2.0, 0.0),
            Point2::new(0.0, 2.0),
        ])
        .unwrap();
        let a = rect(0.0, 0.0, 1.0, 1.0);
        let err = boolean_execute(&a, &bow_tie, BooleanOp::Fuse, &Precision::default()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::ProfileError::Operation(OperationError::InvalidInput(_))
        ));
    }
}
