//! In-memory document with SVG serialization.
//!
//! `SvgDocument` is the standalone backend: it records the node tree the
//! composer builds and can write it out as a self-contained SVG image.

use std::fmt::Write as _;

use crate::types::{BlobPath, Colour, Point};

use super::document::{Document, NodeId};

#[derive(Debug, Clone)]
enum Node {
    Frame {
        name: String,
        width: f32,
        height: f32,
        x: f32,
        y: f32,
        children: Vec<NodeId>,
    },
    Vector {
        path: BlobPath,
        x: f32,
        y: f32,
        fill: Option<Colour>,
        blur: Option<f32>,
    },
}

/// An append-only node tree that serializes to SVG.
#[derive(Debug, Clone, Default)]
pub struct SvgDocument {
    nodes: Vec<Node>,
    viewport_center: Point,
    view_target: Option<NodeId>,
}

impl SvgDocument {
    /// Create an empty document with the viewport centered on the origin.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty document with the viewport centered elsewhere.
    pub fn with_viewport_center(center: Point) -> Self {
        Self {
            viewport_center: center,
            ..Self::default()
        }
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The node the viewport was last centered on.
    pub fn view_target(&self) -> Option<NodeId> {
        self.view_target
    }

    /// Children of a frame node. Empty for vectors and unknown ids.
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        match self.nodes.get(node.0) {
            Some(Node::Frame { children, .. }) => children,
            _ => &[],
        }
    }

    /// A frame's name.
    pub fn name(&self, node: NodeId) -> Option<&str> {
        match self.nodes.get(node.0)? {
            Node::Frame { name, .. } => Some(name),
            Node::Vector { .. } => None,
        }
    }

    /// A node's position.
    pub fn position(&self, node: NodeId) -> Option<Point> {
        match self.nodes.get(node.0)? {
            Node::Frame { x, y, .. } | Node::Vector { x, y, .. } => Some(Point::new(*x, *y)),
        }
    }

    /// A frame's width and height.
    pub fn size(&self, node: NodeId) -> Option<(f32, f32)> {
        match self.nodes.get(node.0)? {
            Node::Frame { width, height, .. } => Some((*width, *height)),
            Node::Vector { .. } => None,
        }
    }

    /// A vector's solid fill, if assigned.
    pub fn fill(&self, node: NodeId) -> Option<Colour> {
        match self.nodes.get(node.0)? {
            Node::Vector { fill, .. } => *fill,
            Node::Frame { .. } => None,
        }
    }

    /// A vector's blur radius, if assigned.
    pub fn blur(&self, node: NodeId) -> Option<f32> {
        match self.nodes.get(node.0)? {
            Node::Vector { blur, .. } => *blur,
            Node::Frame { .. } => None,
        }
    }

    fn first_frame(&self) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| matches!(n, Node::Frame { .. }))
            .map(NodeId)
    }

    /// Serialize the document to an SVG string.
    ///
    /// The viewBox is the rectangle of the viewed frame (falling back to
    /// the first frame), so the output shows what the viewport would.
    pub fn to_svg(&self) -> String {
        let mut svg = String::new();

        let view = self.view_target.or_else(|| self.first_frame());
        let (vx, vy, vw, vh) = match view.map(|id| &self.nodes[id.0]) {
            Some(Node::Frame {
                x,
                y,
                width,
                height,
                ..
            }) => (*x, *y, *width, *height),
            _ => (0.0, 0.0, 0.0, 0.0),
        };

        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{vw}" height="{vh}" viewBox="{vx} {vy} {vw} {vh}">"#
        );

        self.write_filter_defs(&mut svg);

        for node in &self.nodes {
            if let Node::Frame { x, y, children, .. } = node {
                let _ = writeln!(svg, r#"  <g transform="translate({x} {y})">"#);
                for child in children {
                    self.write_vector(&mut svg, *child);
                }
                let _ = writeln!(svg, "  </g>");
            }
        }

        svg.push_str("</svg>\n");
        svg
    }

    fn write_filter_defs(&self, svg: &mut String) {
        let blurred: Vec<(usize, f32)> = self
            .nodes
            .iter()
            .enumerate()
            .filter_map(|(i, n)| match n {
                Node::Vector { blur: Some(b), .. } if *b > 0.0 => Some((i, *b)),
                _ => None,
            })
            .collect();

        if blurred.is_empty() {
            return;
        }

        let _ = writeln!(svg, "  <defs>");
        for (index, radius) in blurred {
            // Layer-blur radius corresponds to roughly twice the Gaussian
            // standard deviation. The filter region is widened so the
            // falloff is not clipped at the shape's bounding box.
            let _ = writeln!(
                svg,
                r#"    <filter id="blur{index}" x="-50%" y="-50%" width="200%" height="200%">"#
            );
            let _ = writeln!(
                svg,
                r#"      <feGaussianBlur stdDeviation="{}"/>"#,
                radius / 2.0
            );
            let _ = writeln!(svg, "    </filter>");
        }
        let _ = writeln!(svg, "  </defs>");
    }

    fn write_vector(&self, svg: &mut String, id: NodeId) {
        let Some(Node::Vector {
            path,
            x,
            y,
            fill,
            blur,
        }) = self.nodes.get(id.0)
        else {
            return;
        };

        let fill_attr = match fill {
            Some(colour) => colour.to_string(),
            None => "none".to_string(),
        };

        let _ = write!(
            svg,
            r#"    <path d="{}" fill="{}" fill-rule="{}" transform="translate({x} {y})""#,
            path.svg_data(),
            fill_attr,
            path.winding().as_svg(),
        );

        if matches!(blur, Some(b) if *b > 0.0) {
            let _ = write!(svg, r#" filter="url(#blur{})""#, id.0);
        }

        let _ = writeln!(svg, "/>");
    }
}

impl Document for SvgDocument {
    fn viewport_center(&self) -> Point {
        self.viewport_center
    }

    fn create_frame(&mut self, name: &str, width: f32, height: f32) -> NodeId {
        self.nodes.push(Node::Frame {
            name: name.to_string(),
            width,
            height,
            x: 0.0,
            y: 0.0,
            children: Vec::new(),
        });
        NodeId(self.nodes.len() - 1)
    }

    fn create_vector(&mut self, path: BlobPath) -> NodeId {
        self.nodes.push(Node::Vector {
            path,
            x: 0.0,
            y: 0.0,
            fill: None,
            blur: None,
        });
        NodeId(self.nodes.len() - 1)
    }

    fn set_position(&mut self, node: NodeId, new_x: f32, new_y: f32) {
        if let Some(Node::Frame { x, y, .. } | Node::Vector { x, y, .. }) =
            self.nodes.get_mut(node.0)
        {
            *x = new_x;
            *y = new_y;
        }
    }

    fn set_fill(&mut self, node: NodeId, colour: Colour) {
        if let Some(Node::Vector { fill, .. }) = self.nodes.get_mut(node.0) {
            *fill = Some(colour);
        }
    }

    fn set_blur(&mut self, node: NodeId, radius: f32) {
        if let Some(Node::Vector { blur, .. }) = self.nodes.get_mut(node.0) {
            *blur = Some(radius);
        }
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        if let Some(Node::Frame { children, .. }) = self.nodes.get_mut(parent.0) {
            children.push(child);
        }
    }

    fn center_viewport(&mut self, node: NodeId) {
        self.view_target = Some(node);
    }
}
