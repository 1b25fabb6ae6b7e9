//! Closed vector path types for blob outlines.

use std::fmt::Write as _;

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Midpoint between this point and another.
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Distance from the origin.
    pub fn magnitude(self) -> f32 {
        self.x.hypot(self.y)
    }
}

/// A single path drawing command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a subpath at a point.
    MoveTo(Point),

    /// Quadratic curve with one control point.
    QuadTo { ctrl: Point, to: Point },

    /// Close the current subpath back to its start.
    Close,
}

/// Fill rule for self-overlapping paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindingRule {
    #[default]
    NonZero,
}

impl WindingRule {
    /// The SVG `fill-rule` attribute value.
    pub fn as_svg(self) -> &'static str {
        match self {
            Self::NonZero => "nonzero",
        }
    }
}

/// A closed smooth path describing one blob outline.
///
/// Owns both the sampled radial points and the curve commands derived from
/// them; each generated shape gets its own path, nothing is shared.
#[derive(Debug, Clone, PartialEq)]
pub struct BlobPath {
    points: Vec<Point>,
    commands: Vec<PathCommand>,
    winding: WindingRule,
}

impl BlobPath {
    /// Build a path from sampled points and the commands derived from them.
    pub fn new(points: Vec<Point>, commands: Vec<PathCommand>) -> Self {
        Self {
            points,
            commands,
            winding: WindingRule::NonZero,
        }
    }

    /// The sampled radial points the curve was derived from.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The drawing commands.
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// The fill rule.
    pub fn winding(&self) -> WindingRule {
        self.winding
    }

    /// Number of curve segments.
    pub fn segment_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, PathCommand::QuadTo { .. }))
            .count()
    }

    /// Whether the path ends with a closing instruction.
    pub fn is_closed(&self) -> bool {
        matches!(self.commands.last(), Some(PathCommand::Close))
    }

    /// Serialize to SVG path data (`M x y Q cx cy x y ... Z`).
    pub fn svg_data(&self) -> String {
        let mut data = String::new();
        for command in &self.commands {
            match command {
                PathCommand::MoveTo(p) => {
                    let _ = write!(data, "M {} {} ", p.x, p.y);
                }
                PathCommand::QuadTo { ctrl, to } => {
                    let _ = write!(data, "Q {} {} {} {} ", ctrl.x, ctrl.y, to.x, to.y);
                }
                PathCommand::Close => data.push('Z'),
            }
        }
        data
    }
}
