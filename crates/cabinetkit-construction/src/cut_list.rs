//! Cut list and material calculator
//!
//! Flattens a design into cutting rows and totals the sheet goods and edge
//! banding to order. Waste factors are applied here and nowhere else.

use crate::constants::{EDGE_BANDING_WASTE_FACTOR, SHEET_WASTE_FACTOR};
use crate::types::{CabinetDesign, Component, ComponentKind, EdgeBanding, LengthAxis};
use cabinetkit_core::MaterialKind;
use serde::{Deserialize, Serialize};

const SQ_IN_PER_SQ_FT: f64 = 144.0;
const IN_PER_FT: f64 = 12.0;
const THICKNESS_TOLERANCE: f64 = 1e-6;

/// Sheet thicknesses ordered as 3/4" stock (carcass and door faces)
const CARCASS_THICKNESSES: [f64; 2] = [0.75, 0.875];
/// Sheet thickness ordered as 1/4" stock (backs)
const BACK_THICKNESS: f64 = 0.25;

/// One line of the cut list, in inches
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CutListRow {
    pub name: String,
    pub kind: ComponentKind,
    pub quantity: u32,
    pub width: f64,
    pub length: f64,
    pub length_axis: LengthAxis,
    pub thickness: f64,
    pub material: MaterialKind,
    pub edge_banding: EdgeBanding,
    /// Banded length of all pieces on this row, inches
    pub banded_length: f64,
}

impl CutListRow {
    fn from_component(component: &Component) -> Self {
        Self {
            name: component.name().to_string(),
            kind: component.kind(),
            quantity: component.quantity(),
            width: component.width(),
            length: component.length(),
            length_axis: component.length_axis(),
            thickness: component.thickness(),
            material: component.material(),
            edge_banding: component.edge_banding(),
            banded_length: component.banded_length() * f64::from(component.quantity()),
        }
    }

    /// Face area of all pieces on this row, square feet
    pub fn area_sqft(&self) -> f64 {
        self.width * self.length * f64::from(self.quantity) / SQ_IN_PER_SQ_FT
    }
}

/// Unrounded sums before waste
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawMaterialTotals {
    /// 3/4" class sheet area, square feet
    pub sheet_34_sqft: f64,
    /// 1/4" sheet area, square feet
    pub sheet_14_sqft: f64,
    /// Edge banding, linear feet
    pub edge_banding_ft: f64,
    /// Sheet area of any other thickness, square feet
    #[serde(default)]
    pub other_sheet_sqft: f64,
}

/// Quantities to order, waste included and rounded up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MaterialTotals {
    /// 3/4" sheet goods, square feet
    pub plywood34: u32,
    /// 1/4" sheet goods, square feet
    pub plywood14: u32,
    /// Edge banding, linear feet
    pub edge_banding: u32,
    /// Sheet goods of any other thickness, square feet
    #[serde(default)]
    pub other_sheet: u32,
}

impl From<RawMaterialTotals> for MaterialTotals {
    fn from(raw: RawMaterialTotals) -> Self {
        Self {
            plywood34: order_quantity(raw.sheet_34_sqft, SHEET_WASTE_FACTOR),
            plywood14: order_quantity(raw.sheet_14_sqft, SHEET_WASTE_FACTOR),
            edge_banding: order_quantity(raw.edge_banding_ft, EDGE_BANDING_WASTE_FACTOR),
            other_sheet: order_quantity(raw.other_sheet_sqft, SHEET_WASTE_FACTOR),
        }
    }
}

fn order_quantity(raw: f64, waste_factor: f64) -> u32 {
    (raw * waste_factor).ceil().max(0.0) as u32
}

fn is_thickness(value: f64, target: f64) -> bool {
    (value - target).abs() < THICKNESS_TOLERANCE
}

/// Flattened cut list with material totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CutList {
    pub rows: Vec<CutListRow>,
    pub raw: RawMaterialTotals,
    pub totals: MaterialTotals,
}

impl CutList {
    /// Build the cut list for a design
    pub fn from_design(design: &CabinetDesign) -> Self {
        let rows: Vec<CutListRow> = design
            .components
            .iter()
            .map(CutListRow::from_component)
            .collect();

        let mut raw = RawMaterialTotals::default();
        for row in &rows {
            if CARCASS_THICKNESSES
                .iter()
                .any(|t| is_thickness(row.thickness, *t))
            {
                raw.sheet_34_sqft += row.area_sqft();
            } else if is_thickness(row.thickness, BACK_THICKNESS) {
                raw.sheet_14_sqft += row.area_sqft();
            } else {
                raw.other_sheet_sqft += row.area_sqft();
            }
            raw.edge_banding_ft += row.banded_length / IN_PER_FT;
        }

        Self {
            rows,
            raw,
            totals: MaterialTotals::from(raw),
        }
    }

    /// Total number of pieces to cut
    pub fn piece_count(&self) -> u32 {
        self.rows.iter().map(|r| r.quantity).sum()
    }

    /// Rows for one component kind
    pub fn rows_of(&self, kind: ComponentKind) -> impl Iterator<Item = &CutListRow> {
        self.rows.iter().filter(move |r| r.kind == kind)
    }
}
