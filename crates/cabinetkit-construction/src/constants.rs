//! Cabinetmaking construction constants (inches unless noted)

/// Door overlay beyond the box opening on every edge
pub const DEFAULT_OVERLAY: f64 = 0.75;

/// Depth of every dado groove
pub const DADO_DEPTH: f64 = 0.25;
/// Distance from the panel end to the near face of a dado
pub const DADO_END_OFFSET: f64 = 0.5;

/// Back panel stock thickness
pub const BACK_PANEL_THICKNESS: f64 = 0.25;
/// Distance from the back edge of a side panel to the back-panel groove
pub const BACK_GROOVE_INSET: f64 = 0.75;
/// Depth of the back-panel groove
pub const BACK_GROOVE_DEPTH: f64 = 0.25;
/// Back panel height reduction when it seats at the bottom only (base)
pub const BACK_REDUCTION_SINGLE_SEAT: f64 = 0.75;
/// Back panel height reduction when it seats at top and bottom (wall, tall)
pub const BACK_REDUCTION_DOUBLE_SEAT: f64 = 1.5;

/// Adjustable shelf width clearance against the internal width
pub const SHELF_WIDTH_CLEARANCE: f64 = 0.125;
/// Adjustable shelf depth clearance against the internal depth
pub const SHELF_DEPTH_CLEARANCE: f64 = 0.75;

/// Depth of the base cabinet top stretcher
pub const STRETCHER_DEPTH: f64 = 3.0;

/// 32 mm system pitch
pub const SHELF_PIN_PITCH_MM: f64 = 32.0;
/// Shelf pin hole diameter
pub const SHELF_PIN_DIAMETER_MM: f64 = 5.0;
/// Shelf pin hole depth
pub const SHELF_PIN_DEPTH: f64 = 0.375;

/// Hinge cup centre distance from the hinge edge of the door
pub const HINGE_EDGE_OFFSET: f64 = 0.875;
/// Hinge cup centre distance from the top and bottom of the door
pub const HINGE_END_OFFSET: f64 = 3.5;
/// Hinge cup diameter
pub const HINGE_CUP_DIAMETER_MM: f64 = 35.0;
/// Hinge cup depth
pub const HINGE_CUP_DEPTH: f64 = 0.5;
/// Wall cabinets taller than this get a mid-span hinge
pub const WALL_MID_HINGE_THRESHOLD: f64 = 30.0;

/// Waste multiplier for sheet goods
pub const SHEET_WASTE_FACTOR: f64 = 1.10;
/// Waste multiplier for edge banding
pub const EDGE_BANDING_WASTE_FACTOR: f64 = 1.15;
