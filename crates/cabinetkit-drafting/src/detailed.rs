//! Detailed (CAD) drawing tier
//!
//! Produces world-unit [`WireframeGeometry`] with manufacturing annotations
//! layered over the shared carcass, door, shelf and toe kick lines:
//! dado and groove callouts, 32 mm pin spacing, hinge cup and shelf pin
//! glyphs, edge band strokes, door centre line, shaker frames and overall
//! dimensions.

use crate::features::{box_edges, door_leaves, shared_lines, CabinetFrame, DoorLeaf};
use crate::geometry::{
    Annotation, DimensionLine, Line3D, LineStyle, Point3D, SemanticColor, WireframeGeometry,
};
use crate::projection::ViewMode;
use cabinetkit_construction::constants::{DADO_DEPTH, DADO_END_OFFSET, STRETCHER_DEPTH};
use cabinetkit_construction::{
    CabinetDesign, ComponentKind, DoorStyle, GrooveKind, HoleKind, PanelEdge,
};
use cabinetkit_core::units::{format_fraction, inches_to_mm, DEFAULT_DENOMINATOR};
use tracing::debug;

/// Stile and rail width of a shaker door
pub const SHAKER_FRAME_WIDTH: f64 = 2.25;
/// Inset of edge band strokes from the door outline
pub const EDGE_BAND_INSET: f64 = 0.0625;
/// Distance from a feature to its dimension line
pub const DIMENSION_OFFSET: f64 = 3.0;
/// Distance from a feature to its callout text
pub const CALLOUT_OFFSET: f64 = 4.0;
/// Segments used to approximate a hinge cup circle
const CUP_SEGMENTS: usize = 8;

fn frac(value: f64) -> String {
    format_fraction(value, DEFAULT_DENOMINATOR)
}

/// Generate the annotated wireframe for one view
pub fn generate(design: &CabinetDesign, view: ViewMode) -> WireframeGeometry {
    let frame = CabinetFrame::from_design(design);
    let leaves = door_leaves(design, &frame);
    let mut geometry = WireframeGeometry::new(view);

    geometry.extend_lines(shared_lines(design, view));
    internal_panels(&mut geometry, design, &frame);
    dados(&mut geometry, design, &frame);
    back_grooves(&mut geometry, design, &frame);
    shelf_pins(&mut geometry, design, &frame);
    hinge_cups(&mut geometry, &leaves);
    edge_bands(&mut geometry, &leaves, &frame);
    door_centre_line(&mut geometry, design, &leaves, &frame);
    shaker_frames(&mut geometry, design, &leaves, &frame);
    overall_dimensions(&mut geometry, &frame);
    title(&mut geometry, design, &frame);

    debug!(
        %view,
        lines = geometry.lines.len(),
        dimensions = geometry.dimensions.len(),
        annotations = geometry.annotations.len(),
        "generated detailed drawing"
    );
    geometry
}

/// Bottom, top and stretcher seated between the sides, hidden behind the doors
fn internal_panels(geometry: &mut WireframeGeometry, design: &CabinetDesign, frame: &CabinetFrame) {
    let view = geometry.view;
    let t = frame.thickness;
    let w = frame.width;
    let hidden = |min: Point3D, max: Point3D| {
        box_edges(min, max, view, SemanticColor::Hidden, LineStyle::Dashed)
    };

    for side_x in [0.0, w - t] {
        geometry.extend_lines(hidden(
            Point3D::new(side_x, frame.box_bottom, 0.0),
            Point3D::new(side_x + t, frame.box_top, frame.box_depth),
        ));
    }

    for kind in [ComponentKind::BottomPanel, ComponentKind::TopPanel] {
        let Some(panel) = design.component(kind) else {
            continue;
        };
        let y = if kind == ComponentKind::BottomPanel {
            frame.box_bottom + DADO_END_OFFSET
        } else {
            frame.box_top - DADO_END_OFFSET - t
        };
        let x0 = t - DADO_DEPTH;
        geometry.extend_lines(hidden(
            Point3D::new(x0, y, 0.0),
            Point3D::new(x0 + panel.width(), y + t, panel.length()),
        ));
    }

    if design.component(ComponentKind::TopStretcher).is_some() {
        geometry.extend_lines(hidden(
            Point3D::new(t, frame.box_top - t, 0.0),
            Point3D::new(w - t, frame.box_top, STRETCHER_DEPTH),
        ));
    }
}

/// Dado notches on both side panels plus one callout
fn dados(geometry: &mut WireframeGeometry, design: &CabinetDesign, frame: &CabinetFrame) {
    let Some(side) = design.component(ComponentKind::SidePanel) else {
        return;
    };
    let view = geometry.view;
    let t = frame.thickness;
    let w = frame.width;

    let mut first = None;
    for dado in side.grooves_of(GrooveKind::Dado) {
        let y0 = frame.box_bottom + dado.y;
        let y1 = y0 + dado.width;
        for x0 in [t - dado.depth, w - t] {
            geometry.extend_lines(box_edges(
                Point3D::new(x0, y0, 0.0),
                Point3D::new(x0 + dado.depth, y1, dado.length),
                view,
                SemanticColor::Hidden,
                LineStyle::Dashed,
            ));
        }
        if first.is_none() {
            first = Some((y0, dado.width, dado.depth));
        }
    }

    if let Some((y, width, depth)) = first {
        let target = Point3D::new(t - depth, y, 0.0);
        let label_at = Point3D::new(-CALLOUT_OFFSET, y, 0.0);
        callout(
            geometry,
            target,
            label_at,
            format!("DADO {} x {} DP", frac(width), frac(depth)),
        );
    }
}

/// Back panel grooves and the back panel, seen from above or in isometric
fn back_grooves(geometry: &mut WireframeGeometry, design: &CabinetDesign, frame: &CabinetFrame) {
    let view = geometry.view;
    if view == ViewMode::Elevation {
        return;
    }
    let Some(side) = design.component(ComponentKind::SidePanel) else {
        return;
    };
    let t = frame.thickness;
    let w = frame.width;

    let mut callout_target = None;
    for groove in side.grooves_of(GrooveKind::BackPanel) {
        let y0 = frame.box_bottom + groove.y;
        let y1 = y0 + groove.length;
        for x0 in [t - groove.depth, w - t] {
            geometry.extend_lines(box_edges(
                Point3D::new(x0, y0, groove.x),
                Point3D::new(x0 + groove.depth, y1, groove.x + groove.width),
                view,
                SemanticColor::Hidden,
                LineStyle::Dashed,
            ));
        }
        if let Some(back) = design.component(ComponentKind::BackPanel) {
            geometry.extend_lines(box_edges(
                Point3D::new(t, y0, groove.x),
                Point3D::new(t + back.width(), y0 + back.length(), groove.x + back.thickness()),
                view,
                SemanticColor::Hidden,
                LineStyle::Dashed,
            ));
        }
        if callout_target.is_none() {
            callout_target = Some((Point3D::new(w - t, y1, groove.x), groove.width, groove.depth));
        }
    }

    if let Some((target, width, depth)) = callout_target {
        let label_at = target.offset(CALLOUT_OFFSET + t, 0.0, CALLOUT_OFFSET);
        callout(
            geometry,
            target,
            label_at,
            format!("BACK GROOVE {} x {} DP", frac(width), frac(depth)),
        );
    }
}

/// Shelf pin crosses on the inner faces of both sides, 32 mm spacing label
fn shelf_pins(geometry: &mut WireframeGeometry, design: &CabinetDesign, frame: &CabinetFrame) {
    let Some(side) = design.component(ComponentKind::SidePanel) else {
        return;
    };
    let view = geometry.view;
    let t = frame.thickness;

    let pins: Vec<_> = side.holes_of(HoleKind::ShelfPin).collect();
    if pins.is_empty() {
        return;
    }

    let first_row = pins[0].y_from_reference;
    for x in [t, frame.width - t] {
        for pin in &pins {
            // Front and back columns coincide in elevation.
            if view == ViewMode::Elevation && pin.edge == PanelEdge::Back {
                continue;
            }
            // Every row of a column lands on the same point in plan.
            if view == ViewMode::Plan && pin.y_from_reference != first_row {
                continue;
            }
            let z = match pin.edge {
                PanelEdge::Back => frame.box_depth - pin.x_from_edge,
                _ => pin.x_from_edge,
            };
            let centre = Point3D::new(x, frame.box_bottom + pin.y_from_reference, z);
            geometry.extend_lines(cross(centre, pin.diameter, view));
        }
    }

    if view == ViewMode::Plan {
        return;
    }

    let front: Vec<f64> = pins
        .iter()
        .filter(|p| p.edge == PanelEdge::Front)
        .map(|p| p.y_from_reference)
        .collect();
    if let [first, second, ..] = front.as_slice() {
        let z = pins[0].x_from_edge;
        let pitch_mm = inches_to_mm(second - first).round();
        geometry.dimensions.push(DimensionLine::new(
            Point3D::new(t, frame.box_bottom + *first, z),
            Point3D::new(t, frame.box_bottom + *second, z),
            Point3D::new(DIMENSION_OFFSET / 2.0, 0.0, 0.0),
            format!("{} mm", pitch_mm),
        ));
    }
    if let Some(top) = front.last() {
        let diameter_mm = inches_to_mm(pins[0].diameter).round();
        let pitch_mm = front
            .windows(2)
            .next()
            .map(|w| inches_to_mm(w[1] - w[0]).round())
            .unwrap_or(0.0);
        geometry.annotations.push(Annotation::new(
            Point3D::new(t + DIMENSION_OFFSET, frame.box_bottom + top, pins[0].x_from_edge),
            format!(
                "{} x Ø{} mm SHELF PINS @ {} mm",
                design.shelf_pin_count(),
                diameter_mm,
                pitch_mm
            ),
            SemanticColor::Hardware,
        ));
    }
}

/// Hinge cups on the back face of each leaf
fn hinge_cups(geometry: &mut WireframeGeometry, leaves: &[DoorLeaf]) {
    let view = geometry.view;
    if view == ViewMode::Plan {
        return;
    }
    for leaf in leaves {
        for (centre, diameter) in &leaf.hinges {
            geometry.extend_lines(cup(*centre, diameter / 2.0));
        }
    }

    let count: usize = leaves.iter().map(|l| l.hinges.len()).sum();
    if let Some((centre, diameter)) = leaves.first().and_then(|l| l.hinges.last()) {
        let label_at = Point3D::new(leaves[0].x0 - CALLOUT_OFFSET, centre.y, centre.z);
        callout(
            geometry,
            *centre,
            label_at,
            format!("{} x Ø{} mm HINGE CUP", count, inches_to_mm(*diameter).round()),
        );
    }
}

/// Edge band strokes just inside each banded door edge
fn edge_bands(geometry: &mut WireframeGeometry, leaves: &[DoorLeaf], frame: &CabinetFrame) {
    let view = geometry.view;
    let z = -frame.door_thickness;
    for leaf in leaves {
        match view {
            ViewMode::Plan => {
                let mid = z / 2.0;
                geometry.push_line(Line3D::new(
                    Point3D::new(leaf.x0 + EDGE_BAND_INSET, leaf.y1, mid),
                    Point3D::new(leaf.x1 - EDGE_BAND_INSET, leaf.y1, mid),
                    SemanticColor::EdgeBand,
                ));
            }
            ViewMode::Elevation | ViewMode::Isometric => {
                let (x0, x1) = (leaf.x0 + EDGE_BAND_INSET, leaf.x1 - EDGE_BAND_INSET);
                let (y0, y1) = (leaf.y0 + EDGE_BAND_INSET, leaf.y1 - EDGE_BAND_INSET);
                let corners = [
                    Point3D::new(x0, y0, z),
                    Point3D::new(x1, y0, z),
                    Point3D::new(x1, y1, z),
                    Point3D::new(x0, y1, z),
                ];
                for i in 0..corners.len() {
                    geometry.push_line(Line3D::new(
                        corners[i],
                        corners[(i + 1) % corners.len()],
                        SemanticColor::EdgeBand,
                    ));
                }
            }
        }
    }

    // Front edges of the side panels show from above.
    if view == ViewMode::Plan {
        let t = frame.thickness;
        for x0 in [0.0, frame.width - t] {
            geometry.push_line(Line3D::new(
                Point3D::new(x0, frame.box_top, EDGE_BAND_INSET),
                Point3D::new(x0 + t, frame.box_top, EDGE_BAND_INSET),
                SemanticColor::EdgeBand,
            ));
        }
    }
}

/// Centre line where a split pair meets
fn door_centre_line(
    geometry: &mut WireframeGeometry,
    design: &CabinetDesign,
    leaves: &[DoorLeaf],
    frame: &CabinetFrame,
) {
    if !design.has_two_doors() {
        return;
    }
    let (Some(first), Some(last)) = (leaves.first(), leaves.last()) else {
        return;
    };
    let x = first.x1;
    let z = -frame.door_thickness;
    let (start, end) = match geometry.view {
        ViewMode::Plan => (Point3D::new(x, last.y1, z), Point3D::new(x, last.y1, 0.0)),
        _ => (Point3D::new(x, first.y0, z), Point3D::new(x, first.y1, z)),
    };
    geometry.push_line(
        Line3D::new(start, end, SemanticColor::OverlayDoor).with_style(LineStyle::Center),
    );
}

/// Stile and rail outlines of shaker leaves
fn shaker_frames(
    geometry: &mut WireframeGeometry,
    design: &CabinetDesign,
    leaves: &[DoorLeaf],
    frame: &CabinetFrame,
) {
    if design.configuration.door_style != DoorStyle::Shaker || geometry.view == ViewMode::Plan {
        return;
    }
    let z = -frame.door_thickness;
    let f = SHAKER_FRAME_WIDTH;
    let weight = SemanticColor::OverlayDoor.weight() * 0.6;
    for leaf in leaves {
        if leaf.x1 - leaf.x0 <= 2.0 * f || leaf.y1 - leaf.y0 <= 2.0 * f {
            continue;
        }
        let (px0, px1) = (leaf.x0 + f, leaf.x1 - f);
        let (py0, py1) = (leaf.y0 + f, leaf.y1 - f);
        let segments = [
            // Panel
            ((px0, py0), (px1, py0)),
            ((px1, py0), (px1, py1)),
            ((px1, py1), (px0, py1)),
            ((px0, py1), (px0, py0)),
            // Rails butt into full-height stiles
            ((px0, leaf.y0), (px0, py0)),
            ((px1, leaf.y0), (px1, py0)),
            ((px0, py1), (px0, leaf.y1)),
            ((px1, py1), (px1, leaf.y1)),
        ];
        for ((x0, y0), (x1, y1)) in segments {
            geometry.push_line(
                Line3D::new(
                    Point3D::new(x0, y0, z),
                    Point3D::new(x1, y1, z),
                    SemanticColor::OverlayDoor,
                )
                .with_weight(weight),
            );
        }
    }
}

fn overall_dimensions(geometry: &mut WireframeGeometry, frame: &CabinetFrame) {
    let w = frame.width;
    let front = -frame.door_thickness;
    let d = DIMENSION_OFFSET;
    let origin = Point3D::new(0.0, 0.0, 0.0);

    let dims = match geometry.view {
        ViewMode::Elevation => {
            let mut dims = vec![
                DimensionLine::new(
                    origin,
                    Point3D::new(w, 0.0, 0.0),
                    Point3D::new(0.0, -d - frame.overlay, 0.0),
                    frac(w),
                ),
                DimensionLine::new(
                    origin,
                    Point3D::new(0.0, frame.total_height(), 0.0),
                    Point3D::new(-d - frame.overlay, 0.0, 0.0),
                    frac(frame.total_height()),
                ),
            ];
            if frame.toe_kick.is_some() {
                dims.push(DimensionLine::new(
                    Point3D::new(w, frame.box_bottom, 0.0),
                    Point3D::new(w, frame.box_top, 0.0),
                    Point3D::new(d + frame.overlay, 0.0, 0.0),
                    frac(frame.box_height()),
                ));
            }
            dims
        }
        ViewMode::Plan => vec![
            DimensionLine::new(
                Point3D::new(0.0, frame.box_top, front),
                Point3D::new(w, frame.box_top, front),
                Point3D::new(0.0, 0.0, -d),
                frac(w),
            ),
            DimensionLine::new(
                Point3D::new(w, frame.box_top, 0.0),
                Point3D::new(w, frame.box_top, frame.box_depth),
                Point3D::new(d + frame.overlay, 0.0, 0.0),
                frac(frame.box_depth),
            ),
        ],
        ViewMode::Isometric => vec![
            DimensionLine::new(
                Point3D::new(0.0, 0.0, front),
                Point3D::new(w, 0.0, front),
                Point3D::new(0.0, 0.0, -d),
                frac(w),
            ),
            DimensionLine::new(
                Point3D::new(0.0, 0.0, front),
                Point3D::new(0.0, frame.total_height(), front),
                Point3D::new(-d, 0.0, 0.0),
                frac(frame.total_height()),
            ),
            DimensionLine::new(
                Point3D::new(w, 0.0, 0.0),
                Point3D::new(w, 0.0, frame.box_depth),
                Point3D::new(d, 0.0, 0.0),
                frac(frame.box_depth),
            ),
        ],
    };
    geometry.dimensions.extend(dims);
}

fn title(geometry: &mut WireframeGeometry, design: &CabinetDesign, frame: &CabinetFrame) {
    let dims = &design.dimensions;
    let position = match geometry.view {
        ViewMode::Plan => Point3D::new(0.0, frame.box_top, frame.box_depth + DIMENSION_OFFSET),
        _ => Point3D::new(0.0, frame.total_height() + DIMENSION_OFFSET, 0.0),
    };
    geometry.annotations.push(Annotation::new(
        position,
        format!(
            "{} {} x {} ({}, {})",
            dims.archetype.as_str().to_uppercase(),
            frac(dims.width),
            frac(dims.total_height),
            design.material,
            design.configuration.door_style
        ),
        SemanticColor::Dimension,
    ));
}

/// Leader line from `target` to `label_at` plus the callout text
fn callout(geometry: &mut WireframeGeometry, target: Point3D, label_at: Point3D, text: String) {
    geometry.push_line(Line3D::new(target, label_at, SemanticColor::Dimension));
    geometry
        .annotations
        .push(Annotation::new(label_at, text, SemanticColor::Dimension));
}

/// Shelf pin glyph in the plane that faces the viewer
fn cross(centre: Point3D, size: f64, view: ViewMode) -> Vec<Line3D> {
    let h = size / 2.0;
    let (a, b) = match view {
        ViewMode::Elevation => (
            (centre.offset(-h, 0.0, 0.0), centre.offset(h, 0.0, 0.0)),
            (centre.offset(0.0, -h, 0.0), centre.offset(0.0, h, 0.0)),
        ),
        ViewMode::Plan => (
            (centre.offset(-h, 0.0, 0.0), centre.offset(h, 0.0, 0.0)),
            (centre.offset(0.0, 0.0, -h), centre.offset(0.0, 0.0, h)),
        ),
        // Drilled into the side panel face
        ViewMode::Isometric => (
            (centre.offset(0.0, 0.0, -h), centre.offset(0.0, 0.0, h)),
            (centre.offset(0.0, -h, 0.0), centre.offset(0.0, h, 0.0)),
        ),
    };
    [a, b]
        .into_iter()
        .map(|(s, e)| Line3D::new(s, e, SemanticColor::Hardware))
        .collect()
}

/// Hinge cup outline on the door back face, hidden behind the door
fn cup(centre: Point3D, radius: f64) -> Vec<Line3D> {
    let point = |i: usize| {
        let angle = std::f64::consts::TAU * i as f64 / CUP_SEGMENTS as f64;
        centre.offset(radius * angle.cos(), radius * angle.sin(), 0.0)
    };
    (0..CUP_SEGMENTS)
        .map(|i| {
            Line3D::new(point(i), point(i + 1), SemanticColor::Hardware)
                .with_style(LineStyle::Dashed)
        })
        .collect()
}
