pub mod error;
pub mod export;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{ProfileError, Result};
pub use export::{to_svg, ToSvgPath};
pub use geometry::{
    Arc2D, Blueprint, Blueprints, CompoundBlueprint, Curve, Curve2D, Line2D, Orientation, Profile,
    Shape2D,
};
pub use math::{Point2, Precision, Vector2};
pub use operations::boolean::{
    cut_blueprints, fuse_blueprints, intersect_blueprints, organise_blueprints, self_intersections,
};
pub use operations::transform::{MirrorMode, Transformable};
