use super::blueprint::Blueprint;
use super::blueprints::{Blueprints, Profile};
use super::bounding_box::BoundingBox2D;
use super::compound::CompoundBlueprint;

/// Result of a boolean operation.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape2D {
    /// Nothing is left.
    Empty,
    /// A single loop.
    Single(Blueprint),
    /// One outer loop with holes.
    WithHoles(CompoundBlueprint),
    /// Several disjoint profiles.
    Disjoint(Blueprints),
}

impl Shape2D {
    /// Collapses a profile collection to the narrowest variant.
    #[must_use]
    pub fn from_blueprints(blueprints: Blueprints) -> Self {
        let mut profiles = blueprints.0;
        match profiles.len() {
            0 => Self::Empty,
            1 => match profiles.pop() {
                Some(Profile::Simple(b)) => Self::Single(b),
                Some(Profile::Compound(c)) => Self::WithHoles(c),
                None => Self::Empty,
            },
            _ => Self::Disjoint(Blueprints(profiles)),
        }
    }

    /// Whether nothing is left.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Total enclosed area, holes excluded.
    #[must_use]
    pub fn area(&self) -> f64 {
        match self {
            Self::Empty => 0.0,
            Self::Single(b) => b.area(),
            Self::WithHoles(c) => c.area(),
            Self::Disjoint(bs) => bs.area(),
        }
    }

    /// Number of disjoint profiles.
    #[must_use]
    pub fn profile_count(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Single(_) | Self::WithHoles(_) => 1,
            Self::Disjoint(bs) => bs.len(),
        }
    }

    /// Every loop of the shape, each profile's outer boundary first.
    #[must_use]
    pub fn loops(&self) -> Vec<&Blueprint> {
        match self {
            Self::Empty => Vec::new(),
            Self::Single(b) => vec![b],
            Self::WithHoles(c) => c.blueprints().iter().collect(),
            Self::Disjoint(bs) => bs.iter().flat_map(Profile::loops).collect(),
        }
    }

    /// Bounds of the whole shape; empty for [`Shape2D::Empty`].
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox2D {
        self.loops()
            .into_iter()
            .fold(BoundingBox2D::empty(), |bb, b| bb.union(&b.bounding_box()))
    }

    /// Converts into a profile collection.
    #[must_use]
    pub fn into_blueprints(self) -> Blueprints {
        match self {
            Self::Empty => Blueprints::default(),
            Self::Single(b) => Blueprints(vec![Profile::Simple(b)]),
            Self::WithHoles(c) => Blueprints(vec![Profile::Compound(c)]),
            Self::Disjoint(bs) => bs,
        }
    }
}

impl From<Blueprint> for Shape2D {
    fn from(blueprint: Blueprint) -> Self {
        Self::Single(blueprint)
    }
}
