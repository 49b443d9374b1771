use crate::error::{OperationError, Result};
use crate::math::{Point2, TOLERANCE};
use crate::operations::query::Containment;

use super::blueprint::{Blueprint, Orientation};
use super::bounding_box::BoundingBox2D;

/// An outer boundary with one or more holes.
///
/// Element 0 of [`CompoundBlueprint::blueprints`] is always the outer
/// boundary. Holes are stored with the opposite orientation to the outer
/// loop.
#[derive(Debug, Clone, PartialEq)]
pub struct CompoundBlueprint {
    blueprints: Vec<Blueprint>,
}

impl CompoundBlueprint {
    /// Builds a compound from an outer boundary followed by its holes.
    ///
    /// # Errors
    ///
    /// Returns an error when no hole is given.
    pub fn new(blueprints: Vec<Blueprint>) -> Result<Self> {
        if blueprints.len() < 2 {
            return Err(OperationError::InvalidInput(
                "a compound blueprint needs an outer loop and at least one hole".to_owned(),
            )
            .into());
        }
        Ok(Self::from_loops(blueprints))
    }

    /// Wraps loops known to be an outer boundary and its holes, normalising
    /// hole orientation.
    pub(crate) fn from_loops(mut blueprints: Vec<Blueprint>) -> Self {
        let hole_orientation = blueprints[0].orientation().flipped();
        for hole in blueprints.iter_mut().skip(1) {
            if hole.orientation() != hole_orientation {
                *hole = hole.reversed();
            }
        }
        Self { blueprints }
    }

    /// Outer boundary followed by the holes.
    #[must_use]
    pub fn blueprints(&self) -> &[Blueprint] {
        &self.blueprints
    }

    /// Consumes the compound, returning outer boundary and holes.
    #[must_use]
    pub fn into_blueprints(self) -> Vec<Blueprint> {
        self.blueprints
    }

    /// The outer boundary.
    #[must_use]
    pub fn outer(&self) -> &Blueprint {
        &self.blueprints[0]
    }

    /// The holes.
    #[must_use]
    pub fn holes(&self) -> &[Blueprint] {
        &self.blueprints[1..]
    }

    /// Outer area minus hole areas.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.outer().area() - self.holes().iter().map(Blueprint::area).sum::<f64>()
    }

    /// Bounds of the outer boundary.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox2D {
        self.outer().bounding_box()
    }

    /// Orientation of the outer boundary.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.outer().orientation()
    }

    /// Whether `point` is inside the outer boundary and outside every hole.
    #[must_use]
    pub fn contains_point(&self, point: &Point2) -> bool {
        self.outer().contains_point(point)
            && !self
                .holes()
                .iter()
                .any(|h| h.classify_point(point, TOLERANCE) != Containment::Outside)
    }
}
