use crate::error::Result;
use crate::geometry::blueprint::Blueprint;
use crate::geometry::shape::Shape2D;
use crate::math::Precision;

use super::engine::boolean_execute;
use super::select::BooleanOp;

/// Computes the region shared by two blueprints.
pub struct Intersect<'a> {
    blueprint_a: &'a Blueprint,
    blueprint_b: &'a Blueprint,
    precision: Precision,
}

impl<'a> Intersect<'a> {
    /// Creates a new `Intersect` operation with the default precision.
    #[must_use]
    pub fn new(blueprint_a: &'a Blueprint, blueprint_b: &'a Blueprint) -> Self {
        Self {
            blueprint_a,
            blueprint_b,
            precision: Precision::default(),
        }
    }

    /// Sets the precision used for point identity and intersections.
    #[must_use]
    pub fn with_precision(mut self, precision: Precision) -> Self {
        self.precision = precision;
        self
    }

    /// Executes the intersection.
    ///
    /// # Errors
    ///
    /// Returns an error if an input is self-intersecting or contains a
    /// degenerate curve.
    pub fn execute(&self) -> Result<Shape2D> {
        boolean_execute(self.blueprint_a, self.blueprint_b, BooleanOp::Intersect, &self.precision)
    }
}
