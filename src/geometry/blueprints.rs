use super::blueprint::Blueprint;
use super::bounding_box::BoundingBox2D;
use super::compound::CompoundBlueprint;

/// One element of a [`Blueprints`] collection.
#[derive(Debug, Clone, PartialEq)]
pub enum Profile {
    Simple(Blueprint),
    Compound(CompoundBlueprint),
}

impl Profile {
    /// Enclosed area, holes excluded.
    #[must_use]
    pub fn area(&self) -> f64 {
        match self {
            Self::Simple(b) => b.area(),
            Self::Compound(c) => c.area(),
        }
    }

    /// Bounds of the outer boundary.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox2D {
        match self {
            Self::Simple(b) => b.bounding_box(),
            Self::Compound(c) => c.bounding_box(),
        }
    }

    /// Outer boundary.
    #[must_use]
    pub fn outer(&self) -> &Blueprint {
        match self {
            Self::Simple(b) => b,
            Self::Compound(c) => c.outer(),
        }
    }

    /// Every loop of the profile, outer boundary first.
    #[must_use]
    pub fn loops(&self) -> &[Blueprint] {
        match self {
            Self::Simple(b) => std::slice::from_ref(b),
            Self::Compound(c) => c.blueprints(),
        }
    }
}

impl From<Blueprint> for Profile {
    fn from(blueprint: Blueprint) -> Self {
        Self::Simple(blueprint)
    }
}

impl From<CompoundBlueprint> for Profile {
    fn from(compound: CompoundBlueprint) -> Self {
        Self::Compound(compound)
    }
}

/// A collection of disjoint profiles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Blueprints(pub Vec<Profile>);

impl Blueprints {
    /// Wraps a list of profiles.
    #[must_use]
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self(profiles)
    }

    /// The profiles.
    #[must_use]
    pub fn profiles(&self) -> &[Profile] {
        &self.0
    }

    /// Number of profiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the collection is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total area of all profiles.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.0.iter().map(Profile::area).sum()
    }

    /// Bounds of every profile together.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox2D {
        self.0
            .iter()
            .fold(BoundingBox2D::empty(), |bb, p| bb.union(&p.bounding_box()))
    }

    /// Iterates over the profiles.
    pub fn iter(&self) -> std::slice::Iter<'_, Profile> {
        self.0.iter()
    }
}

impl IntoIterator for Blueprints {
    type Item = Profile;
    type IntoIter = std::vec::IntoIter<Profile>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Blueprints {
    type Item = &'a Profile;
    type IntoIter = std::slice::Iter<'a, Profile>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
