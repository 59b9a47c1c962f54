//! Basic drawing tier: outline-only lines directly in screen space.

use crate::features::shared_lines;
use crate::geometry::{BoundingBox2D, LineStyle, Point2D, SemanticColor};
use crate::projection::{project, ScreenTransform, ViewMode};
use cabinetkit_construction::CabinetDesign;
use serde::{Deserialize, Serialize};

/// A projected, screen-space segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenLine {
    pub start: Point2D,
    pub end: Point2D,
    pub style: LineStyle,
    pub weight: f64,
    pub color: SemanticColor,
}

/// Carcass outline, door outlines, shelves and toe kick mapped to screen space
pub fn render(design: &CabinetDesign, view: ViewMode, transform: &ScreenTransform) -> Vec<ScreenLine> {
    shared_lines(design, view)
        .into_iter()
        .map(|line| ScreenLine {
            start: transform.to_screen(view, line.start),
            end: transform.to_screen(view, line.end),
            style: line.style,
            weight: line.weight,
            color: line.color,
        })
        .collect()
}

/// Projected bounds of the basic tier's lines, for fitting to a canvas
pub fn bounds(design: &CabinetDesign, view: ViewMode) -> BoundingBox2D {
    let mut bounds = BoundingBox2D::empty();
    for line in shared_lines(design, view) {
        bounds.include_point(project(view, line.start));
        bounds.include_point(project(view, line.end));
    }
    bounds
}

#[cfg(test)]
mod tests {
    use super::*;
    use cabinetkit_construction::{generate_design, Configuration};
    use cabinetkit_core::{CabinetArchetype, Material};

    #[test]
    fn test_elevation_outline_in_screen_space() {
        let design = generate_design(
            CabinetArchetype::Wall,
            24.0,
            30.0,
            Material::plywood_3_4(),
            Configuration::default(),
        )
        .unwrap();
        let transform = ScreenTransform::new(10.0, 50.0, 400.0);
        let lines = render(&design, ViewMode::Elevation, &transform);

        // Carcass front face: bottom edge from (0, 0) to (24, 0)
        let bottom = lines
            .iter()
            .find(|l| l.color == SemanticColor::Structure)
            .unwrap();
        assert_eq!(bottom.start, Point2D::new(50.0, 400.0));
        assert_eq!(bottom.end, Point2D::new(290.0, 400.0));
    }

    #[test]
    fn test_split_wall_has_two_door_outlines() {
        let design = generate_design(
            CabinetArchetype::Wall,
            36.0,
            30.0,
            Material::plywood_3_4(),
            Configuration::default(),
        )
        .unwrap();
        let lines = render(&design, ViewMode::Elevation, &ScreenTransform::default());
        let door_lines = lines
            .iter()
            .filter(|l| l.color == SemanticColor::OverlayDoor)
            .count();
        assert_eq!(door_lines, 8);
    }

    #[test]
    fn test_bounds_include_overlay() {
        let design = generate_design(
            CabinetArchetype::Base,
            24.0,
            30.0,
            Material::plywood_3_4(),
            Configuration::default(),
        )
        .unwrap();
        let bounds = bounds(&design, ViewMode::Elevation);
        assert_eq!(bounds.min_x, -0.75);
        assert_eq!(bounds.max_x, 24.75);
        assert_eq!(bounds.min_y, 0.0);
        assert_eq!(bounds.max_y, 35.25);
    }
}
