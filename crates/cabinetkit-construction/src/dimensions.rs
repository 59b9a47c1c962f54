//! Dimension rule engine
//!
//! Maps `(archetype, width, height)` onto the full set of cabinet dimensions.
//! Width and height must come from the archetype's discrete size ladder;
//! anything else is rejected before construction starts.

use cabinetkit_core::{CabinetArchetype, CabinetError, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Tolerance used when matching a requested size against the ladder
pub const LADDER_TOLERANCE: f64 = 1e-6;

/// Ladder step for widths and wall heights
pub const LADDER_STEP: f64 = 3.0;

/// Fixed carcass height of base cabinets
pub const BASE_BOX_HEIGHT: f64 = 30.0;
/// Overall depth of base cabinets
pub const BASE_DEPTH: f64 = 24.0;
/// Overall depth of wall cabinets (box plus door)
pub const WALL_DEPTH: f64 = 12.875;
/// Carcass depth of wall cabinets
pub const WALL_BOX_DEPTH: f64 = 12.0;
/// Door thickness of wall cabinets
pub const WALL_DOOR_THICKNESS: f64 = 0.875;
/// Overall depth of tall cabinets (box plus door)
pub const TALL_DEPTH: f64 = 24.875;
/// Carcass depth of tall cabinets
pub const TALL_BOX_DEPTH: f64 = 24.0;
/// Toe kick height for floor standing cabinets
pub const TOE_KICK_HEIGHT: f64 = 4.5;
/// Toe kick depth for floor standing cabinets
pub const TOE_KICK_DEPTH: f64 = 21.0;
/// Nominal heights offered for tall cabinets
pub const TALL_HEIGHTS: [f64; 3] = [79.5, 85.5, 91.5];

/// Rule deciding whether a cabinet front is split into two door leaves.
///
/// This is the only place the split is decided; construction and every
/// drawing tier read the result from the dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DoorSplitRule {
    /// Always a single door
    Never,
    /// Two leaves when the cabinet is wider than the threshold
    WiderThan(f64),
}

impl DoorSplitRule {
    /// The split rule for an archetype
    pub fn for_archetype(archetype: CabinetArchetype) -> Self {
        match archetype {
            CabinetArchetype::Wall => DoorSplitRule::WiderThan(21.0),
            CabinetArchetype::Base | CabinetArchetype::Tall => DoorSplitRule::Never,
        }
    }

    /// Whether a cabinet of this width gets two leaves
    pub fn splits(&self, width: f64) -> bool {
        match self {
            DoorSplitRule::Never => false,
            DoorSplitRule::WiderThan(threshold) => width > *threshold,
        }
    }
}

/// Full cabinet dimensions in inches.
///
/// `height` is the carcass (box) height. `total_height` adds the toe kick
/// when one exists.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CabinetDimensions {
    pub archetype: CabinetArchetype,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub box_depth: Option<f64>,
    pub door_thickness: Option<f64>,
    pub toe_kick_height: Option<f64>,
    pub toe_kick_depth: Option<f64>,
    pub total_height: f64,
    pub has_two_doors: bool,
}

impl CabinetDimensions {
    /// Depth of the carcass (falls back to the overall depth)
    pub fn box_depth(&self) -> f64 {
        self.box_depth.unwrap_or(self.depth)
    }

    /// Height of the carcass, excluding any toe kick
    pub fn box_height(&self) -> f64 {
        self.height
    }

    /// Width between the side panels for a given carcass thickness
    pub fn internal_width(&self, thickness: f64) -> f64 {
        self.width - 2.0 * thickness
    }
}

fn ladder(start: u32, end: u32) -> Vec<f64> {
    (start..=end).map(|i| i as f64 * LADDER_STEP).collect()
}

/// Widths offered for an archetype
pub fn available_widths(archetype: CabinetArchetype) -> Vec<f64> {
    match archetype {
        CabinetArchetype::Base | CabinetArchetype::Wall => ladder(3, 12),
        CabinetArchetype::Tall => ladder(4, 12),
    }
}

/// Heights offered for an archetype
pub fn available_heights(archetype: CabinetArchetype) -> Vec<f64> {
    match archetype {
        CabinetArchetype::Base => vec![BASE_BOX_HEIGHT],
        CabinetArchetype::Wall => ladder(4, 14),
        CabinetArchetype::Tall => TALL_HEIGHTS.to_vec(),
    }
}

/// Returns the ladder value matching `value`, or an `InvalidDimension` error
fn on_ladder(
    field: &str,
    value: f64,
    archetype: CabinetArchetype,
    ladder: &[f64],
) -> Result<f64> {
    ladder
        .iter()
        .copied()
        .find(|v| (v - value).abs() < LADDER_TOLERANCE)
        .ok_or_else(|| {
            warn!(%archetype, field, value, "rejected off-ladder dimension");
            CabinetError::invalid_dimension(field, value, archetype, ladder)
        })
}

/// Derive the full dimensions of a cabinet.
///
/// For base cabinets the height argument is ignored; the carcass is always 30".
/// For tall cabinets `height` is the nominal overall height and the carcass
/// height is that minus the toe kick.
pub fn generate_cabinet(
    archetype: CabinetArchetype,
    width: f64,
    height: f64,
) -> Result<CabinetDimensions> {
    let width = on_ladder("width", width, archetype, &available_widths(archetype))?;
    let has_two_doors = DoorSplitRule::for_archetype(archetype).splits(width);

    let dims = match archetype {
        CabinetArchetype::Base => CabinetDimensions {
            archetype,
            width,
            height: BASE_BOX_HEIGHT,
            depth: BASE_DEPTH,
            box_depth: None,
            door_thickness: None,
            toe_kick_height: Some(TOE_KICK_HEIGHT),
            toe_kick_depth: Some(TOE_KICK_DEPTH),
            total_height: BASE_BOX_HEIGHT + TOE_KICK_HEIGHT,
            has_two_doors,
        },
        CabinetArchetype::Wall => {
            let height = on_ladder("height", height, archetype, &available_heights(archetype))?;
            CabinetDimensions {
                archetype,
                width,
                height,
                depth: WALL_DEPTH,
                box_depth: Some(WALL_BOX_DEPTH),
                door_thickness: Some(WALL_DOOR_THICKNESS),
                toe_kick_height: None,
                toe_kick_depth: None,
                total_height: height,
                has_two_doors,
            }
        }
        CabinetArchetype::Tall => {
            let nominal = on_ladder("height", height, archetype, &available_heights(archetype))?;
            CabinetDimensions {
                archetype,
                width,
                height: nominal - TOE_KICK_HEIGHT,
                depth: TALL_DEPTH,
                box_depth: Some(TALL_BOX_DEPTH),
                door_thickness: None,
                toe_kick_height: Some(TOE_KICK_HEIGHT),
                toe_kick_depth: Some(TOE_KICK_DEPTH),
                total_height: nominal,
                has_two_doors,
            }
        }
    };

    Ok(dims)
}
