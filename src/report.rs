//! Plain-text reports printed by the command line tool

use cabinetkit_construction::{available_heights, available_widths, CabinetDesign, CutList};
use cabinetkit_core::units::format_length;
use cabinetkit_core::{CabinetArchetype, MeasurementSystem};

fn ladder(values: &[f64]) -> String {
    values
        .iter()
        .map(|v| format!("{}", v))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Size ladders of every archetype, one line per dimension
pub fn sizes_table() -> String {
    let mut out = String::new();
    for archetype in CabinetArchetype::ALL {
        out.push_str(&format!(
            "{:<5} widths:  {}\n",
            archetype.as_str(),
            ladder(&available_widths(archetype))
        ));
        out.push_str(&format!(
            "{:<5} heights: {}\n",
            archetype.as_str(),
            ladder(&available_heights(archetype))
        ));
    }
    out
}

/// One-paragraph description of a design
pub fn design_summary(design: &CabinetDesign, system: MeasurementSystem) -> String {
    let dims = &design.dimensions;
    let mut out = String::new();
    out.push_str(&format!(
        "{} cabinet {} W x {} H x {} D, {}\n",
        dims.archetype,
        format_length(dims.width, system),
        format_length(dims.total_height, system),
        format_length(dims.depth, system),
        design.material
    ));
    out.push_str(&format!(
        "Doors: {} ({}), hinges: {}, shelf pins: {}\n",
        if design.has_two_doors() { 2 } else { 1 },
        design.configuration.door_style,
        design.hinge_count(),
        design.shelf_pin_count()
    ));
    out
}

/// Cut list as an aligned table followed by order quantities
pub fn cut_list_table(cut_list: &CutList, system: MeasurementSystem) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:<18} {:>3}  {:>12}  {:>12}  {:>8}  {}\n",
        "Part", "Qty", "Width", "Length", "Thick", "Material"
    ));
    for row in &cut_list.rows {
        out.push_str(&format!(
            "{:<18} {:>3}  {:>12}  {:>12}  {:>8}  {}\n",
            row.name,
            row.quantity,
            format_length(row.width, system),
            format_length(row.length, system),
            format_length(row.thickness, system),
            row.material
        ));
    }

    let raw = &cut_list.raw;
    let totals = &cut_list.totals;
    out.push('\n');
    out.push_str(&format!(
        "3/4\" sheet goods: {} sq ft ({:.2} before waste)\n",
        totals.plywood34, raw.sheet_34_sqft
    ));
    out.push_str(&format!(
        "1/4\" sheet goods: {} sq ft ({:.2} before waste)\n",
        totals.plywood14, raw.sheet_14_sqft
    ));
    if raw.other_sheet_sqft > 0.0 {
        out.push_str(&format!(
            "Other sheet goods: {} sq ft ({:.2} before waste)\n",
            totals.other_sheet, raw.other_sheet_sqft
        ));
    }
    out.push_str(&format!(
        "Edge banding:     {} ft ({:.2} before waste)\n",
        totals.edge_banding, raw.edge_banding_ft
    ));
    out
}
