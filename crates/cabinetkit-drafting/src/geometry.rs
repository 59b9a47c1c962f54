//! Wireframe types shared by both drawing tiers.
//!
//! Geometry is kept in world units (inches) until an export adapter applies a
//! [`ScreenTransform`](crate::projection::ScreenTransform). Every line carries
//! a [`SemanticColor`]; renderers map it through [`SemanticColor::hex`] and
//! never choose colours of their own.

use crate::projection::{project, ViewMode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A 2D point in projected or screen space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Distance to another point.
    pub fn distance(&self, other: &Self) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// A point in the cabinet's world frame.
///
/// x runs left to right across the width, y up from the floor, z from the
/// carcass front (0) toward the wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Component-wise offset
    pub fn offset(&self, dx: f64, dy: f64, dz: f64) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }

    /// Midpoint between two points
    pub fn midpoint(&self, other: &Self) -> Self {
        Self::new(
            (self.x + other.x) / 2.0,
            (self.y + other.y) / 2.0,
            (self.z + other.z) / 2.0,
        )
    }
}

const DASHED_PATTERN: &[f64] = &[6.0, 4.0];
const CENTER_PATTERN: &[f64] = &[12.0, 3.0, 3.0, 3.0];

/// Stroke pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    /// Hidden features
    Dashed,
    /// Long-short centre line
    Center,
}

impl LineStyle {
    /// Dash pattern in screen units, `None` for a continuous stroke
    pub fn dash_pattern(&self) -> Option<&'static [f64]> {
        match self {
            LineStyle::Solid => None,
            LineStyle::Dashed => Some(DASHED_PATTERN),
            LineStyle::Center => Some(CENTER_PATTERN),
        }
    }
}

/// What a stroke means. The legend is fixed across tiers and exporters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SemanticColor {
    /// Carcass outline and structural panels
    Structure,
    /// Full overlay door faces
    OverlayDoor,
    /// Internal features behind a face (dados, grooves)
    Hidden,
    /// Edge banding highlight
    EdgeBand,
    /// Adjustable shelves
    Shelf,
    /// Hinge cups and shelf pins
    Hardware,
    /// Dimension lines and their text
    Dimension,
}

impl SemanticColor {
    pub const ALL: [SemanticColor; 7] = [
        Self::Structure,
        Self::OverlayDoor,
        Self::Hidden,
        Self::EdgeBand,
        Self::Shelf,
        Self::Hardware,
        Self::Dimension,
    ];

    /// Stroke colour
    pub fn hex(&self) -> &'static str {
        match self {
            Self::Structure => "#1f2937",
            Self::OverlayDoor => "#2563eb",
            Self::Hidden => "#9ca3af",
            Self::EdgeBand => "#f59e0b",
            Self::Shelf => "#059669",
            Self::Hardware => "#dc2626",
            Self::Dimension => "#6b7280",
        }
    }

    /// Stroke weight in screen units
    pub fn weight(&self) -> f64 {
        match self {
            Self::Structure => 1.5,
            Self::OverlayDoor => 1.25,
            Self::Hidden => 0.75,
            Self::EdgeBand => 2.5,
            Self::Shelf => 1.0,
            Self::Hardware => 1.0,
            Self::Dimension => 0.5,
        }
    }

    /// Human readable legend entry
    pub fn label(&self) -> &'static str {
        match self {
            Self::Structure => "structure",
            Self::OverlayDoor => "overlay door",
            Self::Hidden => "hidden feature",
            Self::EdgeBand => "edge band",
            Self::Shelf => "shelf",
            Self::Hardware => "hardware",
            Self::Dimension => "dimension",
        }
    }
}

impl fmt::Display for SemanticColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A world-space line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Line3D {
    pub start: Point3D,
    pub end: Point3D,
    pub style: LineStyle,
    pub weight: f64,
    pub color: SemanticColor,
}

impl Line3D {
    /// Solid line with the legend weight for `color`
    pub fn new(start: Point3D, end: Point3D, color: SemanticColor) -> Self {
        Self {
            start,
            end,
            style: LineStyle::Solid,
            weight: color.weight(),
            color,
        }
    }

    pub fn with_style(mut self, style: LineStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Whether the segment collapses to a point in `view`
    pub fn is_degenerate_in(&self, view: ViewMode) -> bool {
        project(view, self.start).distance(&project(view, self.end)) < DEGENERATE_TOLERANCE
    }
}

/// Projected segments shorter than this are dropped
pub const DEGENERATE_TOLERANCE: f64 = 1e-9;

/// A dimension between two world points.
///
/// `offset` moves the dimension line away from the measured feature; the
/// extension lines run from each point to its offset position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionLine {
    pub start: Point3D,
    pub end: Point3D,
    pub offset: Point3D,
    pub text: String,
}

impl DimensionLine {
    pub fn new(start: Point3D, end: Point3D, offset: Point3D, text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            offset,
            text: text.into(),
        }
    }

    /// Start of the dimension line proper
    pub fn line_start(&self) -> Point3D {
        self.start.offset(self.offset.x, self.offset.y, self.offset.z)
    }

    /// End of the dimension line proper
    pub fn line_end(&self) -> Point3D {
        self.end.offset(self.offset.x, self.offset.y, self.offset.z)
    }

    /// Where the text is anchored
    pub fn text_anchor(&self) -> Point3D {
        self.line_start().midpoint(&self.line_end())
    }
}

/// Free text placed in world space: callouts, labels, titles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub position: Point3D,
    pub text: String,
    pub color: SemanticColor,
}

impl Annotation {
    pub fn new(position: Point3D, text: impl Into<String>, color: SemanticColor) -> Self {
        Self {
            position,
            text: text.into(),
            color,
        }
    }
}

/// 2D axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox2D {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox2D {
    /// An empty box that any point expands
    pub fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    pub fn include_point(&mut self, p: Point2D) {
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn center(&self) -> Point2D {
        Point2D::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Whether at least one point has been included
    pub fn is_valid(&self) -> bool {
        self.min_x <= self.max_x && self.min_y <= self.max_y
    }
}

impl Default for BoundingBox2D {
    fn default() -> Self {
        Self::empty()
    }
}

/// All world-space drawing primitives for one view of one cabinet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireframeGeometry {
    pub view: ViewMode,
    pub lines: Vec<Line3D>,
    pub dimensions: Vec<DimensionLine>,
    pub annotations: Vec<Annotation>,
}

impl WireframeGeometry {
    pub fn new(view: ViewMode) -> Self {
        Self {
            view,
            lines: Vec::new(),
            dimensions: Vec::new(),
            annotations: Vec::new(),
        }
    }

    /// Add a line unless it collapses to a point in this view
    pub fn push_line(&mut self, line: Line3D) {
        if !line.is_degenerate_in(self.view) {
            self.lines.push(line);
        }
    }

    pub fn extend_lines(&mut self, lines: impl IntoIterator<Item = Line3D>) {
        for line in lines {
            self.push_line(line);
        }
    }

    /// Lines carrying one meaning
    pub fn lines_of(&self, color: SemanticColor) -> impl Iterator<Item = &Line3D> {
        self.lines.iter().filter(move |l| l.color == color)
    }

    /// Projected bounds of everything in the geometry
    pub fn bounds(&self) -> BoundingBox2D {
        let mut bounds = BoundingBox2D::empty();
        for line in &self.lines {
            bounds.include_point(project(self.view, line.start));
            bounds.include_point(project(self.view, line.end));
        }
        for dim in &self.dimensions {
            for p in [dim.start, dim.end, dim.line_start(), dim.line_end()] {
                bounds.include_point(project(self.view, p));
            }
        }
        for note in &self.annotations {
            bounds.include_point(project(self.view, note.position));
        }
        bounds
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.dimensions.is_empty() && self.annotations.is_empty()
    }
}
