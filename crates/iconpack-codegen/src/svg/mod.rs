//! SVG handling: normalization and tree parsing.

pub mod optimize;
pub mod tree;

pub use optimize::{ROOT_ATTRIBUTES, optimize_svg};
pub use tree::{SvgElement, SvgNode, parse_svg};
