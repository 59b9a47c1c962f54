//! Hole pattern generation for side panels and doors.
//!
//! Shelf pins follow the 32 mm system: a linear column of holes drilled as
//! mirrored front/back pairs. Hinge cups follow a count rule keyed to the
//! archetype and the cabinet height.

use crate::constants::{
    HINGE_CUP_DEPTH, HINGE_CUP_DIAMETER_MM, HINGE_EDGE_OFFSET, HINGE_END_OFFSET,
    SHELF_PIN_DEPTH, SHELF_PIN_DIAMETER_MM, SHELF_PIN_PITCH_MM, WALL_MID_HINGE_THRESHOLD,
};
use crate::types::{HoleKind, HolePattern, PanelEdge};
use cabinetkit_core::units::mm_to_inches;
use cabinetkit_core::{CabinetArchetype, CabinetError, Result};
use serde::{Deserialize, Serialize};

/// Guards the row count against pitch rounding at the top of the window
const ROW_EPSILON: f64 = 1e-9;

/// Placement rules for a column of shelf pin holes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShelfPinLayout {
    /// First hole height above the bottom of the side panel
    pub bottom_offset: f64,
    /// Minimum clearance between the last hole and the top of the side panel
    pub top_offset: f64,
    /// Distance of each column from the front and back edges
    pub edge_offset: f64,
    /// Vertical spacing between holes
    pub pitch: f64,
}

impl ShelfPinLayout {
    /// The layout used for an archetype
    pub fn for_archetype(archetype: CabinetArchetype) -> Self {
        let (end_offset, edge_offset) = match archetype {
            CabinetArchetype::Base => (3.0, 2.0),
            CabinetArchetype::Wall | CabinetArchetype::Tall => (2.0, 1.5),
        };
        Self {
            bottom_offset: end_offset,
            top_offset: end_offset,
            edge_offset,
            pitch: mm_to_inches(SHELF_PIN_PITCH_MM),
        }
    }

    /// Hole heights for a side panel of the given height
    pub fn rows(&self, panel_height: f64) -> Result<Vec<f64>> {
        let last = panel_height - self.top_offset;
        if last < self.bottom_offset {
            return Err(CabinetError::degenerate(format!(
                "side panel height {} leaves no room for shelf pins ({} bottom + {} top clearance)",
                panel_height, self.bottom_offset, self.top_offset
            )));
        }

        let count = ((last - self.bottom_offset) / self.pitch + ROW_EPSILON).floor() as usize + 1;
        Ok((0..count)
            .map(|i| self.bottom_offset + i as f64 * self.pitch)
            .collect())
    }
}

/// Shelf pin holes for one side panel, emitted as front/back pairs per row
pub fn shelf_pin_holes(layout: &ShelfPinLayout, panel_height: f64) -> Result<Vec<HolePattern>> {
    let diameter = mm_to_inches(SHELF_PIN_DIAMETER_MM);
    let holes = layout
        .rows(panel_height)?
        .into_iter()
        .flat_map(|y| {
            [PanelEdge::Front, PanelEdge::Back].map(|edge| HolePattern {
                kind: HoleKind::ShelfPin,
                edge,
                x_from_edge: layout.edge_offset,
                y_from_reference: y,
                diameter,
                depth: SHELF_PIN_DEPTH,
            })
        })
        .collect();
    Ok(holes)
}

/// Hinge cup heights (from the bottom of the door), ascending.
///
/// Two hinges 3.5" from each end; wall cabinets taller than 30" add one at
/// mid-span; tall cabinets add mid-span plus the 1/3 and 2/3 marks.
pub fn hinge_positions(
    archetype: CabinetArchetype,
    cabinet_height: f64,
    door_height: f64,
) -> Result<Vec<f64>> {
    if door_height <= 2.0 * HINGE_END_OFFSET {
        return Err(CabinetError::degenerate(format!(
            "door height {} is too short for hinges {}\" from each end",
            door_height, HINGE_END_OFFSET
        )));
    }

    let mut positions = vec![HINGE_END_OFFSET, door_height - HINGE_END_OFFSET];
    match archetype {
        CabinetArchetype::Wall if cabinet_height > WALL_MID_HINGE_THRESHOLD => {
            positions.push(door_height / 2.0);
        }
        CabinetArchetype::Tall => {
            positions.push(door_height / 2.0);
            positions.push(door_height / 3.0);
            positions.push(door_height * 2.0 / 3.0);
        }
        _ => {}
    }

    positions.sort_by(f64::total_cmp);
    Ok(positions)
}

/// Hinge cup holes along the hinge edge of a door
pub fn hinge_holes(positions: &[f64], edge: PanelEdge) -> Vec<HolePattern> {
    let diameter = mm_to_inches(HINGE_CUP_DIAMETER_MM);
    positions
        .iter()
        .map(|&y| HolePattern {
            kind: HoleKind::Hinge,
            edge,
            x_from_edge: HINGE_EDGE_OFFSET,
            y_from_reference: y,
            diameter,
            depth: HINGE_CUP_DEPTH,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_offsets() {
        let base = ShelfPinLayout::for_archetype(CabinetArchetype::Base);
        assert_eq!(base.bottom_offset, 3.0);
        assert_eq!(base.edge_offset, 2.0);
        let wall = ShelfPinLayout::for_archetype(CabinetArchetype::Wall);
        assert_eq!(wall.top_offset, 2.0);
        assert_eq!(wall.edge_offset, 1.5);
        assert!((wall.pitch - 1.2598).abs() < 1e-4);
    }

    #[test]
    fn test_rows_stay_inside_window() {
        let layout = ShelfPinLayout::for_archetype(CabinetArchetype::Base);
        let rows = layout.rows(30.0).unwrap();
        assert_eq!(rows[0], 3.0);
        assert!(*rows.last().unwrap() <= 27.0);
        assert!(*rows.last().unwrap() + layout.pitch > 27.0);
        // 24" window at 1.2598" pitch
        assert_eq!(rows.len(), 20);
    }

    #[test]
    fn test_holes_are_front_back_pairs() {
        let layout = ShelfPinLayout::for_archetype(CabinetArchetype::Wall);
        let holes = shelf_pin_holes(&layout, 30.0).unwrap();
        assert_eq!(holes.len() % 2, 0);
        for pair in holes.chunks(2) {
            assert_eq!(pair[0].edge, PanelEdge::Front);
            assert_eq!(pair[1].edge, PanelEdge::Back);
            assert_eq!(pair[0].y_from_reference, pair[1].y_from_reference);
            assert_eq!(pair[0].x_from_edge, pair[1].x_from_edge);
        }
    }

    #[test]
    fn test_window_too_small() {
        let layout = ShelfPinLayout::for_archetype(CabinetArchetype::Base);
        let err = layout.rows(5.0).unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn test_hinge_counts() {
        assert_eq!(hinge_positions(CabinetArchetype::Base, 30.0, 31.5).unwrap().len(), 2);
        assert_eq!(hinge_positions(CabinetArchetype::Wall, 30.0, 31.5).unwrap().len(), 2);
        assert_eq!(hinge_positions(CabinetArchetype::Wall, 33.0, 34.5).unwrap().len(), 3);
        assert_eq!(hinge_positions(CabinetArchetype::Tall, 81.0, 82.5).unwrap().len(), 5);
    }

    #[test]
    fn test_hinge_positions_symmetric() {
        let door = 82.5;
        let ys = hinge_positions(CabinetArchetype::Tall, 81.0, door).unwrap();
        assert_eq!(ys.first(), Some(&3.5));
        assert_eq!(ys.last(), Some(&(door - 3.5)));
        assert!(ys.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_short_door_rejected() {
        assert!(hinge_positions(CabinetArchetype::Wall, 6.0, 7.0).is_err());
    }

    #[test]
    fn test_hinge_holes_on_edge() {
        let holes = hinge_holes(&[3.5, 28.0], PanelEdge::Right);
        assert_eq!(holes.len(), 2);
        assert!(holes.iter().all(|h| h.edge == PanelEdge::Right && h.x_from_edge == 0.875));
        assert!(holes.iter().all(|h| h.kind == HoleKind::Hinge));
    }
}
