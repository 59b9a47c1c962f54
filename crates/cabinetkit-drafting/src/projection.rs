//! View projection and screen mapping.
//!
//! Projection takes a world point to 2D world units `(u, v)` with v up. A
//! [`ScreenTransform`] then scales and offsets into screen space with y down:
//!
//! ```text
//! sx = offset_x + u * scale
//! sy = offset_y - v * scale
//! ```

use crate::geometry::{BoundingBox2D, Point2D, Point3D};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// cos 30°
pub const COS_30: f64 = 0.866_025_403_784_438_6;
/// sin 30°
pub const SIN_30: f64 = 0.5;

/// Which view of the cabinet is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Looking down; x across, z (depth) up the page
    Plan,
    /// Looking at the front; x across, y up
    #[default]
    Elevation,
    /// 30° isometric
    Isometric,
}

impl ViewMode {
    pub const ALL: [ViewMode; 3] = [Self::Plan, Self::Elevation, Self::Isometric];
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plan => write!(f, "plan"),
            Self::Elevation => write!(f, "elevation"),
            Self::Isometric => write!(f, "isometric"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plan" | "top" => Ok(Self::Plan),
            "elevation" | "front" => Ok(Self::Elevation),
            "isometric" | "iso" => Ok(Self::Isometric),
            _ => Err(format!("Unknown view: {}", s)),
        }
    }
}

/// Project a world point into 2D world units for a view
pub fn project(view: ViewMode, p: Point3D) -> Point2D {
    match view {
        ViewMode::Elevation => Point2D::new(p.x, p.y),
        ViewMode::Plan => Point2D::new(p.x, p.z),
        ViewMode::Isometric => Point2D::new((p.x - p.z) * COS_30, p.y - (p.x + p.z) * SIN_30),
    }
}

/// Uniform scale plus offset from projected units to screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for ScreenTransform {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }
}

impl ScreenTransform {
    pub fn new(scale: f64, offset_x: f64, offset_y: f64) -> Self {
        Self {
            scale,
            offset_x,
            offset_y,
        }
    }

    /// Map projected units to screen space
    pub fn apply(&self, p: Point2D) -> Point2D {
        Point2D::new(
            self.offset_x + p.x * self.scale,
            self.offset_y - p.y * self.scale,
        )
    }

    /// Project and map in one step
    pub fn to_screen(&self, view: ViewMode, p: Point3D) -> Point2D {
        self.apply(project(view, p))
    }

    /// Fit `bounds` centred inside a `width` x `height` canvas, keeping
    /// `padding` pixels clear on every side.
    ///
    /// Invalid bounds give the identity scale centred on the canvas.
    pub fn fit(bounds: &BoundingBox2D, width: f64, height: f64, padding: f64) -> Self {
        let avail_w = (width - 2.0 * padding).max(1.0);
        let avail_h = (height - 2.0 * padding).max(1.0);

        if !bounds.is_valid() {
            return Self::new(1.0, width / 2.0, height / 2.0);
        }

        let (bw, bh) = (bounds.width(), bounds.height());
        let scale = match (bw > 0.0, bh > 0.0) {
            (true, true) => (avail_w / bw).min(avail_h / bh),
            (true, false) => avail_w / bw,
            (false, true) => avail_h / bh,
            (false, false) => 1.0,
        };

        // Centre the content; screen y grows downward so max_y lands on top.
        let offset_x = padding + (avail_w - bw * scale) / 2.0 - bounds.min_x * scale;
        let offset_y = padding + (avail_h - bh * scale) / 2.0 + bounds.max_y * scale;
        Self::new(scale, offset_x, offset_y)
    }
}
