use crate::error::Result;
use crate::geometry::blueprint::Blueprint;
use crate::geometry::shape::Shape2D;
use crate::math::Precision;

use super::engine::boolean_execute;
use super::select::BooleanOp;

/// Removes the region of the tool blueprint from the base blueprint.
pub struct Cut<'a> {
    blueprint_a: &'a Blueprint,
    blueprint_b: &'a Blueprint,
    precision: Precision,
}

impl<'a> Cut<'a> {
    /// Creates a new `Cut` operation with the default precision.
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

    /// Executes the cut.
    ///
    /// # Errors
    ///
    /// Returns an error if an input is self-intersecting or contains a
    /// degenerate curve.
    pub fn execute(&self) -> Result<Shape2D> {
        boolean_execute(self.blueprint_a, self.blueprint_b, BooleanOp::Cut, &self.precision)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point2;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn notch_from_a_plate() {
        let plate = Blueprint::rectangle(10.0, 4.0).unwrap();
        let tool = Blueprint::circle(Point2::new(0.0, 2.0), 1.0).unwrap();
        let shape = Cut::new(&plate, &tool).execute().unwrap();
        assert!(matches!(shape, Shape2D::Single(_)));
        assert_abs_diff_eq!(shape.area(), 40.0 - PI / 2.0, epsilon = 1e-9);
    }
}
