//! Precision-aware identity for points and segments.
//!
//! Points are bucketed by scaling their coordinates by `10^hash_digits` and
//! rounding. Two tolerance-equal points can straddle a bucket border, so a
//! lookup inspects the neighbouring buckets too, and every candidate is
//! confirmed with [`points_equal`]. The bucket key alone never decides.
use std::collections::HashMap;

use crate::math::{points_equal, Point2, Precision};

/// Canonical identifier of a point registered in a [`PointIndex`].
pub type VertexId = usize;

/// Integer bucket of a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PointKey {
    pub x: i64,
    pub y: i64,
}

impl PointKey {
    /// Buckets `p` with the given precision.
    #[must_use]
    pub fn new(p: &Point2, precision: &Precision) -> Self {
        let scale = 10f64.powi(precision.hash_digits);
        #[allow(clippy::cast_possible_truncation)]
        Self {
            x: (p.x * scale).round() as i64,
            y: (p.y * scale).round() as i64,
        }
    }

    fn neighbours(self) -> impl Iterator<Item = Self> {
        (-1..=1).flat_map(move |dx| {
            (-1..=1).map(move |dy| Self {
                x: self.x + dx,
                y: self.y + dy,
            })
        })
    }
}

/// Spatial hash assigning one canonical [`VertexId`] per distinct point.
#[derive(Debug)]
pub struct PointIndex {
    precision: Precision,
    buckets: HashMap<PointKey, Vec<VertexId>>,
    points: Vec<Point2>,
}

impl PointIndex {
    /// Creates an empty index.
    #[must_use]
    pub fn new(precision: Precision) -> Self {
        Self {
            precision,
            buckets: HashMap::new(),
            points: Vec::new(),
        }
    }

    /// Looks up a point equal to `p` within tolerance.
    #[must_use]
    pub fn find(&self, p: &Point2) -> Option<VertexId> {
        let key = PointKey::new(p, &self.precision);
        key.neighbours()
            .filter_map(|k| self.buckets.get(&k))
            .flatten()
            .copied()
            .find(|&id| points_equal(&self.points[id], p, self.precision.tolerance))
    }

    /// Registers `p`, returning the id of an existing equal point if any.
    pub fn insert(&mut self, p: Point2) -> VertexId {
        if let Some(id) = self.find(&p) {
            return id;
        }
        let id = self.points.len();
        self.points.push(p);
        self.buckets
            .entry(PointKey::new(&p, &self.precision))
            .or_default()
            .push(id);
        id
    }

    /// Precision the index was built with.
    #[must_use]
    pub fn precision(&self) -> &Precision {
        &self.precision
    }

    /// The representative point of a vertex.
    #[must_use]
    pub fn point(&self, id: VertexId) -> &Point2 {
        &self.points[id]
    }

    /// Number of distinct points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no point has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Direction-independent key of a segment between two vertices.
///
/// The smaller vertex id comes first, so a segment and its reverse share a
/// key. Distinct segments may still share a key (two arcs joining the same
/// pair of points), so matches must be confirmed geometrically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentKey(pub VertexId, pub VertexId);

impl SegmentKey {
    /// Key of the segment running from `start` to `end`.
    #[must_use]
    pub fn new(start: VertexId, end: VertexId) -> Self {
        if start <= end {
            Self(start, end)
        } else {
            Self(end, start)
        }
    }
}
