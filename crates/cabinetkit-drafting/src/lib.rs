//! # CabinetKit Drafting
//!
//! Wireframe drawings of a [`CabinetDesign`](cabinetkit_construction::CabinetDesign)
//! in plan, elevation and isometric views.
//!
//! Two tiers share one placement of the cabinet's parts:
//!
//! - [`basic::render`]: outline lines already mapped to screen space.
//! - [`detailed::generate`]: world-unit [`WireframeGeometry`] with
//!   manufacturing annotations.
//!
//! Either can be exported as canvas [`DrawCommand`]s or an SVG document.
//!
//! ```rust
//! use cabinetkit_construction::{generate_design, Configuration};
//! use cabinetkit_core::{CabinetArchetype, Material};
//! use cabinetkit_drafting::{detailed, render_svg, SvgOptions, ViewMode};
//!
//! let design = generate_design(
//!     CabinetArchetype::Base,
//!     24.0,
//!     30.0,
//!     Material::plywood_3_4(),
//!     Configuration::default(),
//! )
//! .unwrap();
//! let geometry = detailed::generate(&design, ViewMode::Isometric);
//! let svg = render_svg(&geometry, &SvgOptions::default());
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod basic;
pub mod detailed;
pub mod export;
pub mod features;
pub mod geometry;
pub mod projection;

pub use basic::ScreenLine;
pub use export::{
    commands_to_svg, draw_commands, render_basic_svg, render_svg, screen_commands, DrawCommand,
    SvgOptions,
};
pub use geometry::{
    Annotation, BoundingBox2D, DimensionLine, Line3D, LineStyle, Point2D, Point3D,
    SemanticColor, WireframeGeometry,
};
pub use projection::{project, ScreenTransform, ViewMode};

use cabinetkit_construction::CabinetDesign;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Drawing fidelity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DrawingTier {
    /// Outlines only
    Basic,
    /// Outlines plus manufacturing annotations
    #[default]
    Detailed,
}

impl fmt::Display for DrawingTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => write!(f, "basic"),
            Self::Detailed => write!(f, "detailed"),
        }
    }
}

impl FromStr for DrawingTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "detailed" | "cad" => Ok(Self::Detailed),
            _ => Err(format!("Unknown drawing tier: {}", s)),
        }
    }
}

/// Render a design as SVG at the requested tier
pub fn drawing_svg(
    design: &CabinetDesign,
    view: ViewMode,
    tier: DrawingTier,
    options: &SvgOptions,
) -> String {
    match tier {
        DrawingTier::Basic => render_basic_svg(design, view, options),
        DrawingTier::Detailed => render_svg(&detailed::generate(design, view), options),
    }
}
