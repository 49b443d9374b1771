mod point_containment;
mod self_intersection;

pub use point_containment::{point_in_blueprint, Containment};
pub use self_intersection::blueprint_self_intersections;
