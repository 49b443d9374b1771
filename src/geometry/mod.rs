pub mod blueprint;
pub mod blueprints;
pub mod bounding_box;
pub mod compound;
pub mod curve;
pub mod pline;
pub mod shape;

pub use blueprint::{Blueprint, Orientation};
pub use blueprints::{Blueprints, Profile};
pub use bounding_box::BoundingBox2D;
pub use compound::CompoundBlueprint;
pub use curve::{Arc2D, Curve, Curve2D, CurveDomain, Line2D};
pub use pline::{Pline, PlineVertex};
pub use shape::Shape2D;
