//! Composition layer.
//!
//! Maps generator output onto an abstract [`Document`]: the orchestrator
//! builds one frame of blurred blob shapes, and [`SvgDocument`] is the
//! built-in backend that serializes the result to SVG.

mod composer;
mod document;
mod svg;

pub use composer::generate_composition;
pub use document::{Document, NodeId};
pub use svg::SvgDocument;
