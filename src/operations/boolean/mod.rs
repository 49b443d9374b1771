mod assemble;
mod classify;
mod cut;
mod engine;
mod fuse;
mod hashing;
mod intersect_op;
mod intersection;
mod organise;
mod segment;
mod select;

pub use classify::{BoundaryMatch, Classification};
pub use cut::Cut;
pub use fuse::Fuse;
pub use hashing::{PointIndex, PointKey, SegmentKey, VertexId};
pub use intersect_op::Intersect;
pub use intersection::{intersect_curves, self_intersections, CommonSegment, CurveIntersections};
pub use organise::organise_blueprints;
pub use select::{BooleanOp, InsidePolicy, RetentionPolicy};

use crate::error::Result;
use crate::geometry::blueprint::Blueprint;
use crate::geometry::shape::Shape2D;

/// Union of two blueprints with the default precision.
///
/// # Errors
///
/// See [`Fuse::execute`].
pub fn fuse_blueprints(a: &Blueprint, b: &Blueprint) -> Result<Shape2D> {
    Fuse::new(a, b).execute()
}

/// `a` minus `b` with the default precision.
///
/// # Errors
///
/// See [`Cut::execute`].
pub fn cut_blueprints(a: &Blueprint, b: &Blueprint) -> Result<Shape2D> {
    Cut::new(a, b).execute()
}

/// Common region of two blueprints with the default precision.
///
/// # Errors
///
/// See [`Intersect::execute`].
pub fn intersect_blueprints(a: &Blueprint, b: &Blueprint) -> Result<Shape2D> {
    Intersect::new(a, b).execute()
}
