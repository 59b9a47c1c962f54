//! Type definitions for cabinet construction

use crate::constants::DEFAULT_OVERLAY;
use crate::dimensions::CabinetDimensions;
use cabinetkit_core::{CabinetError, Material, MaterialKind, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Door face style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DoorStyle {
    /// Flat slab door
    #[default]
    Slab,
    /// Five piece frame with recessed centre panel
    Shaker,
}

impl fmt::Display for DoorStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slab => write!(f, "Slab"),
            Self::Shaker => write!(f, "Shaker"),
        }
    }
}

impl FromStr for DoorStyle {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "slab" | "flat" => Ok(Self::Slab),
            "shaker" => Ok(Self::Shaker),
            _ => Err(format!("Unknown door style: {}", s)),
        }
    }
}

/// Per-cabinet construction options, passed explicitly to every entry point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Drill shelf pin rows and cut adjustable shelves
    pub has_adjustable_shelf: bool,
    /// Number of adjustable shelves
    pub shelf_count: i32,
    /// Door face style
    pub door_style: DoorStyle,
    /// Door overlay on every edge, inches
    pub overlay: f64,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            has_adjustable_shelf: true,
            shelf_count: 1,
            door_style: DoorStyle::Slab,
            overlay: DEFAULT_OVERLAY,
        }
    }
}

impl Configuration {
    /// Reject configurations that would produce unbuildable parts
    pub fn validate(&self) -> Result<()> {
        if self.shelf_count < 0 {
            return Err(CabinetError::degenerate(format!(
                "shelf count must not be negative, got {}",
                self.shelf_count
            )));
        }
        if !self.overlay.is_finite() || self.overlay < 0.0 {
            return Err(CabinetError::degenerate(format!(
                "door overlay must be zero or positive, got {}",
                self.overlay
            )));
        }
        Ok(())
    }

    /// Whether shelves (and their pin rows) are produced
    pub fn wants_shelves(&self) -> bool {
        self.has_adjustable_shelf && self.shelf_count > 0
    }
}

/// What a component is; fixes its default name and which axis `length` runs along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentKind {
    SidePanel,
    BottomPanel,
    TopPanel,
    TopStretcher,
    BackPanel,
    Shelf,
    Door,
    ToeKickFront,
    ToeKickSide,
    ToeKickBack,
}

impl ComponentKind {
    /// Name used when no explicit name is given
    pub fn default_name(&self) -> &'static str {
        match self {
            Self::SidePanel => "Side Panel",
            Self::BottomPanel => "Bottom Panel",
            Self::TopPanel => "Top Panel",
            Self::TopStretcher => "Top Stretcher",
            Self::BackPanel => "Back Panel",
            Self::Shelf => "Adjustable Shelf",
            Self::Door => "Door",
            Self::ToeKickFront => "Toe Kick Front",
            Self::ToeKickSide => "Toe Kick Side",
            Self::ToeKickBack => "Toe Kick Back",
        }
    }

    /// Axis of the second cut dimension
    pub fn length_axis(&self) -> LengthAxis {
        match self {
            Self::BottomPanel | Self::TopPanel | Self::TopStretcher | Self::Shelf => {
                LengthAxis::Depth
            }
            _ => LengthAxis::Height,
        }
    }

    /// Whether the part belongs to the toe kick assembly
    pub fn is_toe_kick(&self) -> bool {
        matches!(self, Self::ToeKickFront | Self::ToeKickSide | Self::ToeKickBack)
    }
}

/// Second cut dimension of a part: a height for standing parts, a depth for flat ones
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthAxis {
    Height,
    Depth,
}

/// Edges that receive edge banding.
///
/// Top and bottom run along the part width, left and right along its length.
/// Front and back run along the width of flat parts and along the length of
/// standing parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EdgeBanding {
    #[serde(default)]
    pub top: bool,
    #[serde(default)]
    pub bottom: bool,
    #[serde(default)]
    pub left: bool,
    #[serde(default)]
    pub right: bool,
    #[serde(default)]
    pub front: bool,
    #[serde(default)]
    pub back: bool,
}

impl EdgeBanding {
    /// No banded edges
    pub fn none() -> Self {
        Self::default()
    }

    /// Front edge only
    pub fn front() -> Self {
        Self {
            front: true,
            ..Self::default()
        }
    }

    /// All four face edges (doors)
    pub fn all_edges() -> Self {
        Self {
            top: true,
            bottom: true,
            left: true,
            right: true,
            ..Self::default()
        }
    }

    /// Whether any edge is banded
    pub fn any(&self) -> bool {
        self.top || self.bottom || self.left || self.right || self.front || self.back
    }

    /// Banded length in inches for one piece of the given size
    pub fn banded_length(&self, width: f64, length: f64, axis: LengthAxis) -> f64 {
        let along_width = [self.top, self.bottom].iter().filter(|b| **b).count() as f64;
        let along_length = [self.left, self.right].iter().filter(|b| **b).count() as f64;
        let front_back = [self.front, self.back].iter().filter(|b| **b).count() as f64;
        let front_back_run = match axis {
            LengthAxis::Depth => width,
            LengthAxis::Height => length,
        };
        along_width * width + along_length * length + front_back * front_back_run
    }
}

/// Drilled hole purpose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HoleKind {
    ShelfPin,
    Hinge,
}

/// Panel edge a hole position is measured from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelEdge {
    Front,
    Back,
    Left,
    Right,
}

/// A drilled hole, in inches. `y_from_reference` is measured from the bottom edge of the part.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HolePattern {
    pub kind: HoleKind,
    pub edge: PanelEdge,
    pub x_from_edge: f64,
    pub y_from_reference: f64,
    pub diameter: f64,
    pub depth: f64,
}

/// Groove purpose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GrooveKind {
    Dado,
    BackPanel,
}

/// Direction a groove runs across the panel face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrooveOrientation {
    Horizontal,
    Vertical,
}

/// A routed groove, in inches, positioned from the front/bottom corner of the part
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Groove {
    pub kind: GrooveKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub depth: f64,
    pub length: f64,
    pub orientation: GrooveOrientation,
}

/// One physical part of the cabinet.
///
/// Built through [`Component::new`], which rejects empty or non-finite sizes
/// and zero quantities. Holes and grooves are always present, possibly empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Component {
    kind: ComponentKind,
    name: String,
    width: f64,
    length: f64,
    quantity: u32,
    material: MaterialKind,
    thickness: f64,
    edge_banding: EdgeBanding,
    holes: Vec<HolePattern>,
    grooves: Vec<Groove>,
}

impl Component {
    /// Create a component, validating its size and quantity
    pub fn new(
        kind: ComponentKind,
        width: f64,
        length: f64,
        quantity: u32,
        material: MaterialKind,
        thickness: f64,
    ) -> Result<Self> {
        for (label, value) in [("width", width), ("length", length), ("thickness", thickness)] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CabinetError::degenerate(format!(
                    "{} {} must be positive, got {}",
                    kind.default_name(),
                    label,
                    value
                )));
            }
        }
        if quantity == 0 {
            return Err(CabinetError::degenerate(format!(
                "{} quantity must be at least 1",
                kind.default_name()
            )));
        }

        Ok(Self {
            kind,
            name: kind.default_name().to_string(),
            width,
            length,
            quantity,
            material,
            thickness,
            edge_banding: EdgeBanding::none(),
            holes: Vec::new(),
            grooves: Vec::new(),
        })
    }

    /// Replace the default name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the banded edges
    pub fn with_edge_banding(mut self, edge_banding: EdgeBanding) -> Self {
        self.edge_banding = edge_banding;
        self
    }

    /// Attach drilled holes
    pub fn with_holes(mut self, holes: Vec<HolePattern>) -> Self {
        self.holes = holes;
        self
    }

    /// Attach routed grooves
    pub fn with_grooves(mut self, grooves: Vec<Groove>) -> Self {
        self.grooves = grooves;
        self
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    /// Height for standing parts, depth for flat parts (see [`Component::length_axis`])
    pub fn length(&self) -> f64 {
        self.length
    }

    pub fn length_axis(&self) -> LengthAxis {
        self.kind.length_axis()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn material(&self) -> MaterialKind {
        self.material
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn edge_banding(&self) -> EdgeBanding {
        self.edge_banding
    }

    pub fn holes(&self) -> &[HolePattern] {
        &self.holes
    }

    pub fn grooves(&self) -> &[Groove] {
        &self.grooves
    }

    /// Face area of one piece in square inches
    pub fn area(&self) -> f64 {
        self.width * self.length
    }

    /// Banded edge length of one piece in inches
    pub fn banded_length(&self) -> f64 {
        self.edge_banding
            .banded_length(self.width, self.length, self.length_axis())
    }

    /// Holes of one kind
    pub fn holes_of(&self, kind: HoleKind) -> impl Iterator<Item = &HolePattern> {
        self.holes.iter().filter(move |h| h.kind == kind)
    }

    /// Grooves of one kind
    pub fn grooves_of(&self, kind: GrooveKind) -> impl Iterator<Item = &Groove> {
        self.grooves.iter().filter(move |g| g.kind == kind)
    }
}

/// A complete cabinet: the dimensions and options it was built from plus every part
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CabinetDesign {
    pub dimensions: CabinetDimensions,
    pub material: Material,
    pub configuration: Configuration,
    pub components: Vec<Component>,
}

impl CabinetDesign {
    /// First component of a kind
    pub fn component(&self, kind: ComponentKind) -> Option<&Component> {
        self.components.iter().find(|c| c.kind == kind)
    }

    /// All components of a kind
    pub fn components_of(&self, kind: ComponentKind) -> impl Iterator<Item = &Component> {
        self.components.iter().filter(move |c| c.kind == kind)
    }

    /// Door components (one per leaf)
    pub fn doors(&self) -> Vec<&Component> {
        self.components_of(ComponentKind::Door).collect()
    }

    /// Whether the front is split into two leaves
    pub fn has_two_doors(&self) -> bool {
        self.dimensions.has_two_doors
    }

    /// Carcass thickness
    pub fn thickness(&self) -> f64 {
        self.material.thickness_inches
    }

    /// Total hinge cups to drill, counting quantities
    pub fn hinge_count(&self) -> usize {
        self.components
            .iter()
            .map(|c| c.holes_of(HoleKind::Hinge).count() * c.quantity as usize)
            .sum()
    }

    /// Total shelf pin holes to drill, counting quantities
    pub fn shelf_pin_count(&self) -> usize {
        self.components
            .iter()
            .map(|c| c.holes_of(HoleKind::ShelfPin).count() * c.quantity as usize)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_door_style_from_str() {
        assert_eq!("Shaker".parse::<DoorStyle>(), Ok(DoorStyle::Shaker));
        assert_eq!("flat".parse::<DoorStyle>(), Ok(DoorStyle::Slab));
        assert!("raised".parse::<DoorStyle>().is_err());
    }

    #[test]
    fn test_component_rejects_degenerate_sizes() {
        let ok = Component::new(ComponentKind::Shelf, 10.0, 10.0, 1, MaterialKind::Plywood, 0.75);
        assert!(ok.is_ok());

        for (w, l) in [(0.0, 10.0), (10.0, -1.0), (f64::NAN, 10.0)] {
            let err = Component::new(ComponentKind::Shelf, w, l, 1, MaterialKind::Plywood, 0.75)
                .unwrap_err();
            assert!(err.is_degenerate());
        }
    }

    #[test]
    fn test_component_rejects_zero_quantity() {
        let err = Component::new(ComponentKind::Door, 10.0, 10.0, 0, MaterialKind::Plywood, 0.75)
            .unwrap_err();
        assert!(err.is_degenerate());
    }

    #[test]
    fn test_component_collections_start_empty() {
        let c = Component::new(ComponentKind::BackPanel, 10.0, 20.0, 1, MaterialKind::Plywood, 0.25)
            .unwrap();
        assert!(c.holes().is_empty());
        assert!(c.grooves().is_empty());
        assert_eq!(c.name(), "Back Panel");
        assert_eq!(c.length_axis(), LengthAxis::Height);
    }

    #[test]
    fn test_banded_length_standing_part() {
        // A side panel 24 deep x 30 tall with the front banded
        let banding = EdgeBanding::front();
        assert_eq!(banding.banded_length(24.0, 30.0, LengthAxis::Height), 30.0);
    }

    #[test]
    fn test_banded_length_flat_part() {
        // A shelf 22 wide x 20 deep with the front banded
        let banding = EdgeBanding::front();
        assert_eq!(banding.banded_length(22.0, 20.0, LengthAxis::Depth), 22.0);
    }

    #[test]
    fn test_banded_length_door() {
        let banding = EdgeBanding::all_edges();
        assert_eq!(banding.banded_length(10.0, 20.0, LengthAxis::Height), 60.0);
        assert!(banding.any());
        assert!(!EdgeBanding::none().any());
    }

    #[test]
    fn test_configuration_validation() {
        assert!(Configuration::default().validate().is_ok());

        let negative = Configuration {
            shelf_count: -1,
            ..Configuration::default()
        };
        assert!(negative.validate().unwrap_err().is_degenerate());

        let bad_overlay = Configuration {
            overlay: -0.5,
            ..Configuration::default()
        };
        assert!(bad_overlay.validate().is_err());
    }

    #[test]
    fn test_wants_shelves() {
        let none = Configuration {
            shelf_count: 0,
            ..Configuration::default()
        };
        assert!(!none.wants_shelves());
        let disabled = Configuration {
            has_adjustable_shelf: false,
            ..Configuration::default()
        };
        assert!(!disabled.wants_shelves());
        assert!(Configuration::default().wants_shelves());
    }
}
