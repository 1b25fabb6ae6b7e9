//! Host document abstraction.
//!
//! The composition step never touches a concrete backend; it drives this
//! trait, which exposes exactly the primitives a design-tool document
//! offers: create a container, create a vector shape from a path, style
//! it, parent it, and point the viewport somewhere.

use crate::types::{BlobPath, Colour, Point};

/// Identifier of a node inside a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub usize);

/// A node-tree backend the composer can build into.
///
/// The composer only appends: it never reads back or mutates nodes it has
/// already created, so implementations are free to stream, buffer, or
/// forward calls to a live host.
pub trait Document {
    /// Current viewport center in document coordinates.
    fn viewport_center(&self) -> Point;

    /// Create an empty, unfilled container of the given size.
    fn create_frame(&mut self, name: &str, width: f32, height: f32) -> NodeId;

    /// Create a vector shape node owning the given path.
    fn create_vector(&mut self, path: BlobPath) -> NodeId;

    /// Move a node. Coordinates are relative to the node's parent once it
    /// has one.
    fn set_position(&mut self, node: NodeId, x: f32, y: f32);

    /// Assign a solid fill.
    fn set_fill(&mut self, node: NodeId, colour: Colour);

    /// Assign a layer blur effect.
    fn set_blur(&mut self, node: NodeId, radius: f32);

    /// Parent `child` under `parent`.
    fn append_child(&mut self, parent: NodeId, child: NodeId);

    /// Scroll the viewport to show the given node.
    fn center_viewport(&mut self, node: NodeId);
}
