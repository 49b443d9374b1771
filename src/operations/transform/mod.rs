mod general;
mod mirror;
mod rotate;
mod scale;
mod stretch;
mod translate;

pub use general::{GeneralTransform, Transformable};
pub use mirror::{Mirror, MirrorMode};
pub use rotate::Rotate;
pub use scale::Scale;
pub use stretch::Stretch;
pub use translate::Translate;
