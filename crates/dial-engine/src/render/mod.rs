//! Output backends for recorded draw lists.
//!
//! Only a vector backend exists: the draw list is serialized to an SVG
//! document, which hosts can embed directly or rasterize.

mod svg;

pub use svg::{SvgDocument, escape_xml, fmt_num};
