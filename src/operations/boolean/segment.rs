use std::collections::HashSet;

use crate::geometry::blueprint::Blueprint;
use crate::geometry::curve::{Curve, Curve2D};
use crate::math::{points_equal, Point2};

use super::hashing::{PointIndex, SegmentKey, VertexId};

/// Loop a segment was cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoopSource {
    A,
    B,
}

/// A contiguous run of curves from one loop between two consecutive cut
/// points.
#[derive(Debug, Clone)]
pub struct Segment {
    pub curves: Vec<Curve2D>,
    pub source: LoopSource,
    pub start: VertexId,
    pub end: VertexId,
}

impl Segment {
    /// Direction-independent key of the segment.
    #[must_use]
    pub fn key(&self) -> SegmentKey {
        SegmentKey::new(self.start, self.end)
    }

    /// The segment walked backwards.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            curves: self.curves.iter().rev().map(Curve::reversed).collect(),
            source: self.source,
            start: self.end,
            end: self.start,
        }
    }

    /// Whether the segment is a whole loop (one cut point on it).
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.start == self.end
    }

    /// Minimum distance from `point` to the segment.
    #[must_use]
    pub fn distance_to(&self, point: &Point2) -> f64 {
        self.curves
            .iter()
            .map(|c| c.distance_to(point))
            .fold(f64::INFINITY, f64::min)
    }
}

/// Cuts a loop into segments at the given cut points.
///
/// Every curve is split at the cut points lying in its interior; the
/// resulting sub-curves are then grouped into runs that start and end at cut
/// points. Returns an empty list when no cut point lies on the loop.
pub fn segment_loop(
    blueprint: &Blueprint,
    cut_points: &[VertexId],
    index: &mut PointIndex,
    source: LoopSource,
) -> Vec<Segment> {
    let tol = index.precision().tolerance;
    let cut_set: HashSet<VertexId> = cut_points.iter().copied().collect();

    let mut pieces: Vec<Curve2D> = Vec::with_capacity(blueprint.curves().len());
    for curve in blueprint.curves() {
        let first = curve.first_point();
        let last = curve.last_point();
        let params: Vec<f64> = cut_points
            .iter()
            .map(|&id| *index.point(id))
            .filter(|p| !points_equal(p, &first, tol) && !points_equal(p, &last, tol))
            .filter_map(|p| curve.parameter_of(&p, tol))
            .collect();
        pieces.extend(curve.split_at(&params));
    }

    let is_cut = |p: &Point2, index: &PointIndex| index.find(p).is_some_and(|id| cut_set.contains(&id));
    let Some(offset) = pieces.iter().position(|c| is_cut(&c.first_point(), &*index)) else {
        return Vec::new();
    };
    pieces.rotate_left(offset);

    let mut segments: Vec<Segment> = Vec::new();
    let mut current: Vec<Curve2D> = Vec::new();
    for piece in pieces {
        if !current.is_empty() && is_cut(&piece.first_point(), &*index) {
            segments.push(finish_segment(std::mem::take(&mut current), index, source));
        }
        current.push(piece);
    }
    if !current.is_empty() {
        segments.push(finish_segment(current, index, source));
    }
    segments
}

fn finish_segment(curves: Vec<Curve2D>, index: &mut PointIndex, source: LoopSource) -> Segment {
    let start = index.insert(curves[0].first_point());
    let end = index.insert(curves[curves.len() - 1].last_point());
    Segment {
        curves,
        source,
        start,
        end,
    }
}
