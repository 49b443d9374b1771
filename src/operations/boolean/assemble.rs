use std::collections::HashMap;
use std::f64::consts::{PI, TAU};

use slotmap::{new_key_type, SlotMap};
use tracing::trace;

use crate::geometry::blueprint::{Blueprint, Orientation};
use crate::geometry::curve::{Arc2D, Curve, Curve2D};
use crate::math::distance_2d::point_to_segment_dist;
use crate::math::{cross_2d, points_equal, Vector2};

use super::hashing::VertexId;
use super::segment::Segment;

new_key_type! {
    struct SegmentSlot;
}

/// Turning angles closer than this are treated as equal.
const TURN_EPS: f64 = 1e-9;

/// Retained segments still waiting to be stitched.
struct SegmentPool {
    segments: SlotMap<SegmentSlot, Segment>,
    by_start: HashMap<VertexId, Vec<SegmentSlot>>,
    by_end: HashMap<VertexId, Vec<SegmentSlot>>,
}

impl SegmentPool {
    fn new(segments: Vec<Segment>) -> Self {
        let mut pool = Self {
            segments: SlotMap::with_key(),
            by_start: HashMap::new(),
            by_end: HashMap::new(),
        };
        for segment in segments {
            let (start, end) = (segment.start, segment.end);
            let slot = pool.segments.insert(segment);
            pool.by_start.entry(start).or_default().push(slot);
            pool.by_end.entry(end).or_default().push(slot);
        }
        pool
    }

    fn any(&self) -> Option<SegmentSlot> {
        self.segments.keys().next()
    }

    fn take(&mut self, slot: SegmentSlot) -> Segment {
        self.segments
            .remove(slot)
            .unwrap_or_else(|| panic!("assemble_loops: segment {slot:?} taken twice"))
    }

    /// Unused segment starting at `vertex` that turns tightest towards the
    /// enclosed side, together with its turn score.
    fn starting_at(
        &self,
        vertex: VertexId,
        incoming: &Vector2,
        sense: f64,
    ) -> Option<(SegmentSlot, Turn)> {
        self.by_start
            .get(&vertex)
            .into_iter()
            .flatten()
            .copied()
            .filter_map(|s| self.segments.get(s).map(|seg| (s, seg)))
            .map(|(s, seg)| (s, Turn::towards(incoming, &seg.curves, sense)))
            .reduce(|best, cand| if cand.1.beats(&best.1) { cand } else { best })
    }

    /// Unused segment ending at `vertex`, to be walked backwards.
    fn ending_at(&self, vertex: VertexId) -> Option<SegmentSlot> {
        self.by_end
            .get(&vertex)
            .into_iter()
            .flatten()
            .copied()
            .find(|s| self.segments.contains_key(*s))
    }
}

/// How sharply a walk turns from its incoming direction onto a segment,
/// signed so that larger values turn towards the enclosed side.
#[derive(Debug, Clone, Copy)]
struct Turn {
    /// Turn between the incoming and the outgoing tangent.
    tangent: f64,
    /// Turn towards the midpoint of the first outgoing curve, separating
    /// candidates that leave along the same tangent.
    chord: f64,
}

impl Turn {
    fn towards(incoming: &Vector2, curves: &[Curve2D], sense: f64) -> Self {
        let Some(first) = curves.first() else {
            return Self {
                tangent: f64::NEG_INFINITY,
                chord: f64::NEG_INFINITY,
            };
        };
        let chord = first.midpoint() - first.first_point();
        Self {
            tangent: sense * turn_angle(incoming, &start_direction(first)),
            chord: sense * turn_angle(incoming, &chord),
        }
    }

    fn beats(&self, other: &Self) -> bool {
        if (self.tangent - other.tangent).abs() > TURN_EPS {
            self.tangent > other.tangent
        } else {
            self.chord > other.chord
        }
    }
}

/// Signed angle in `(-π, π]` turning `from` onto `to`, counter-clockwise
/// positive.
fn turn_angle(from: &Vector2, to: &Vector2) -> f64 {
    let angle = cross_2d(from, to).atan2(from.dot(to));
    if angle <= -PI + 1e-12 {
        PI
    } else {
        angle
    }
}

fn start_direction(curve: &Curve2D) -> Vector2 {
    curve
        .tangent(0.0)
        .unwrap_or_else(|_| curve.last_point() - curve.first_point())
}

fn end_direction(curve: &Curve2D) -> Vector2 {
    curve
        .tangent(1.0)
        .unwrap_or_else(|_| curve.last_point() - curve.first_point())
}

/// Stitches retained segments tip to tail into closed loops.
///
/// A walk starts from any unused segment and repeatedly continues with an
/// unused segment starting where the walk currently ends. When several
/// segments leave the same vertex, the one turning tightest towards the
/// enclosed side of `orientation` wins (left for counter-clockwise loops),
/// so loops touching at a vertex come out as separate simple loops. When no
/// segment starts there, a segment ending there is walked backwards.
/// Adjacent collinear lines and co-circular arcs are merged in the
/// resulting loops.
///
/// # Panics
///
/// Panics when a walk can neither continue nor close. Retained segments
/// always form closed walks, so this signals a classification bug.
#[must_use]
pub fn assemble_loops(
    segments: Vec<Segment>,
    orientation: Orientation,
    tolerance: f64,
) -> Vec<Blueprint> {
    let sense = match orientation {
        Orientation::CounterClockwise => 1.0,
        Orientation::Clockwise => -1.0,
    };
    let mut pool = SegmentPool::new(segments);
    let mut loops = Vec::new();

    while let Some(first) = pool.any() {
        let segment = pool.take(first);
        let loop_start = segment.start;
        let first_curves: Vec<Curve2D> = segment.curves.iter().take(1).cloned().collect();
        let mut end = segment.end;
        let mut curves = segment.curves;

        loop {
            let incoming = curves
                .last()
                .map_or_else(Vector2::zeros, end_direction);
            let best = pool.starting_at(end, &incoming, sense);
            if end == loop_start {
                let closing = Turn::towards(&incoming, &first_curves, sense);
                let closes = match best {
                    Some((_, turn)) => !turn.beats(&closing),
                    None => true,
                };
                if closes {
                    break;
                }
            }
            let next = if let Some((slot, _)) = best {
                pool.take(slot)
            } else if let Some(slot) = pool.ending_at(end) {
                trace!(vertex = end, "continuing on a reversed segment");
                pool.take(slot).reversed()
            } else {
                panic!("assemble_loops: walk from vertex {loop_start} cannot continue at vertex {end}");
            };
            end = next.end;
            curves.extend(next.curves);
        }

        let curves = merge_adjacent(curves, tolerance);
        trace!(curves = curves.len(), "loop closed");
        loops.push(Blueprint::from_closed_curves(curves));
    }
    loops
}

/// Joins consecutive curves that continue each other, including across the
/// loop's closing vertex.
fn merge_adjacent(curves: Vec<Curve2D>, tolerance: f64) -> Vec<Curve2D> {
    let mut merged: Vec<Curve2D> = Vec::with_capacity(curves.len());
    for curve in curves {
        if let Some(last) = merged.last_mut() {
            if let Some(joined) = join(last, &curve, tolerance) {
                *last = joined;
                continue;
            }
        }
        merged.push(curve);
    }
    while merged.len() > 1 {
        let n = merged.len();
        match join(&merged[n - 1], &merged[0], tolerance) {
            Some(joined) => {
                merged.pop();
                merged[0] = joined;
            }
            None => break,
        }
    }
    merged
}

fn join(a: &Curve2D, b: &Curve2D, tolerance: f64) -> Option<Curve2D> {
    match (a, b) {
        (Curve2D::Line(la), Curve2D::Line(lb)) => {
            let straight = point_to_segment_dist(la.end(), la.start(), lb.end()) <= tolerance;
            let forward = la.direction().dot(&lb.direction()) > 0.0;
            (straight && forward).then(|| Curve2D::line(*la.start(), *lb.end()))
        }
        (Curve2D::Arc(aa), Curve2D::Arc(ab)) => {
            let same_circle = points_equal(aa.center(), ab.center(), tolerance)
                && (aa.radius() - ab.radius()).abs() <= tolerance;
            let same_turn = (aa.sweep() > 0.0) == (ab.sweep() > 0.0);
            let sweep = aa.sweep() + ab.sweep();
            (same_circle && same_turn && sweep.abs() <= TAU + 1e-12).then(|| {
                Arc2D::new(*aa.center(), aa.radius(), aa.start_angle(), sweep).into()
            })
        }
        _ => None,
    }
}
