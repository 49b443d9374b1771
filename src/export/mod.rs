pub mod svg;

pub use svg::{to_svg, ToSvgPath};
