//! World placement of a design's parts.
//!
//! Both drawing tiers start from [`shared_lines`]: carcass outline, door
//! leaves, shelves and toe kick. The basic tier draws exactly these; the
//! detailed tier adds its annotations on top. Keeping one source is what
//! makes the tiers agree for every archetype.

use crate::geometry::{Line3D, LineStyle, Point3D, SemanticColor};
use crate::projection::ViewMode;
use cabinetkit_construction::constants::{DADO_END_OFFSET, SHELF_DEPTH_CLEARANCE};
use cabinetkit_construction::{CabinetDesign, Component, ComponentKind, PanelEdge, ShelfPinLayout};

/// Where the carcass sits in the world frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CabinetFrame {
    pub width: f64,
    /// Underside of the carcass (top of the toe kick, or the floor)
    pub box_bottom: f64,
    pub box_top: f64,
    pub box_depth: f64,
    pub thickness: f64,
    pub door_thickness: f64,
    pub overlay: f64,
    /// `(height, depth)` of the toe kick, when present
    pub toe_kick: Option<(f64, f64)>,
}

impl CabinetFrame {
    pub fn from_design(design: &CabinetDesign) -> Self {
        let dims = &design.dimensions;
        let box_bottom = dims.toe_kick_height.unwrap_or(0.0);
        let thickness = design.thickness();
        Self {
            width: dims.width,
            box_bottom,
            box_top: box_bottom + dims.box_height(),
            box_depth: dims.box_depth(),
            thickness,
            door_thickness: dims.door_thickness.unwrap_or(thickness),
            overlay: design.configuration.overlay,
            toe_kick: dims.toe_kick_height.zip(dims.toe_kick_depth),
        }
    }

    pub fn box_height(&self) -> f64 {
        self.box_top - self.box_bottom
    }

    /// Overall height including the toe kick
    pub fn total_height(&self) -> f64 {
        self.box_top
    }
}

/// One door leaf placed in front of the carcass
#[derive(Debug, Clone, PartialEq)]
pub struct DoorLeaf {
    pub x0: f64,
    pub x1: f64,
    pub y0: f64,
    pub y1: f64,
    pub hinge_edge: PanelEdge,
    /// Hinge cup centres and diameters
    pub hinges: Vec<(Point3D, f64)>,
}

/// Lay out the door leaves, left to right
pub fn door_leaves(design: &CabinetDesign, frame: &CabinetFrame) -> Vec<DoorLeaf> {
    let doors = design.doors();
    let count = doors.len();
    doors
        .iter()
        .enumerate()
        .map(|(i, door)| {
            // The last leaf of a pair is anchored to the right overlay edge.
            let (x0, x1) = if count > 1 && i == count - 1 {
                let x1 = frame.width + frame.overlay;
                (x1 - door.width(), x1)
            } else {
                (-frame.overlay, door.width() - frame.overlay)
            };
            let y0 = frame.box_bottom - frame.overlay;
            let y1 = y0 + door.length();
            leaf(door, x0, x1, y0, y1)
        })
        .collect()
}

fn leaf(door: &Component, x0: f64, x1: f64, y0: f64, y1: f64) -> DoorLeaf {
    let hinges: Vec<(Point3D, f64)> = door
        .holes()
        .iter()
        .map(|hole| {
            let x = match hole.edge {
                PanelEdge::Right => x1 - hole.x_from_edge,
                _ => x0 + hole.x_from_edge,
            };
            (Point3D::new(x, y0 + hole.y_from_reference, 0.0), hole.diameter)
        })
        .collect();
    let hinge_edge = door
        .holes()
        .first()
        .map(|h| h.edge)
        .unwrap_or(PanelEdge::Left);
    DoorLeaf {
        x0,
        x1,
        y0,
        y1,
        hinge_edge,
        hinges,
    }
}

/// Shelf bottom faces measured from the carcass bottom.
///
/// Shelves are spread evenly across the opening and then dropped onto the
/// nearest shelf pin row not already taken by a lower shelf.
pub fn shelf_heights(design: &CabinetDesign, frame: &CabinetFrame) -> Vec<f64> {
    let Some(shelf) = design.component(ComponentKind::Shelf) else {
        return Vec::new();
    };
    let box_h = frame.box_height();
    let t = frame.thickness;
    let bottom = DADO_END_OFFSET + t;
    let top = if design.dimensions.archetype.has_top_panel() {
        box_h - DADO_END_OFFSET - t
    } else {
        box_h - t
    };

    let rows = ShelfPinLayout::for_archetype(design.dimensions.archetype)
        .rows(box_h)
        .unwrap_or_default();
    let n = (shelf.quantity() as usize).min(rows.len());
    let mut taken = vec![false; rows.len()];
    (0..n)
        .map(|i| {
            let ideal = bottom + (i + 1) as f64 * (top - bottom) / (n + 1) as f64;
            let nearest = rows
                .iter()
                .enumerate()
                .filter(|(j, _)| !taken[*j])
                .min_by(|(_, a), (_, b)| (*a - ideal).abs().total_cmp(&(*b - ideal).abs()))
                .map(|(j, _)| j);
            match nearest {
                Some(j) => {
                    taken[j] = true;
                    rows[j]
                }
                None => ideal,
            }
        })
        .collect()
}

/// Edges of an axis-aligned box as seen in `view`.
///
/// Orthographic views get the face toward the viewer (front face for
/// elevation, top face for plan); isometric gets all twelve edges.
pub fn box_edges(
    min: Point3D,
    max: Point3D,
    view: ViewMode,
    color: SemanticColor,
    style: LineStyle,
) -> Vec<Line3D> {
    let corner = |x: f64, y: f64, z: f64| Point3D::new(x, y, z);
    let rect = |a: Point3D, b: Point3D, c: Point3D, d: Point3D| -> Vec<(Point3D, Point3D)> {
        vec![(a, b), (b, c), (c, d), (d, a)]
    };

    let segments = match view {
        ViewMode::Elevation => rect(
            corner(min.x, min.y, min.z),
            corner(max.x, min.y, min.z),
            corner(max.x, max.y, min.z),
            corner(min.x, max.y, min.z),
        ),
        ViewMode::Plan => rect(
            corner(min.x, max.y, min.z),
            corner(max.x, max.y, min.z),
            corner(max.x, max.y, max.z),
            corner(min.x, max.y, max.z),
        ),
        ViewMode::Isometric => {
            let mut edges = Vec::with_capacity(12);
            for z in [min.z, max.z] {
                edges.extend(rect(
                    corner(min.x, min.y, z),
                    corner(max.x, min.y, z),
                    corner(max.x, max.y, z),
                    corner(min.x, max.y, z),
                ));
            }
            for (x, y) in [(min.x, min.y), (max.x, min.y), (max.x, max.y), (min.x, max.y)] {
                edges.push((corner(x, y, min.z), corner(x, y, max.z)));
            }
            edges
        }
    };

    segments
        .into_iter()
        .map(|(a, b)| Line3D::new(a, b, color).with_style(style))
        .collect()
}

fn carcass(frame: &CabinetFrame, view: ViewMode) -> Vec<Line3D> {
    box_edges(
        Point3D::new(0.0, frame.box_bottom, 0.0),
        Point3D::new(frame.width, frame.box_top, frame.box_depth),
        view,
        SemanticColor::Structure,
        LineStyle::Solid,
    )
}

fn doors(leaves: &[DoorLeaf], frame: &CabinetFrame, view: ViewMode) -> Vec<Line3D> {
    leaves
        .iter()
        .flat_map(|leaf| {
            box_edges(
                Point3D::new(leaf.x0, leaf.y0, -frame.door_thickness),
                Point3D::new(leaf.x1, leaf.y1, 0.0),
                view,
                SemanticColor::OverlayDoor,
                LineStyle::Solid,
            )
        })
        .collect()
}

fn shelves(design: &CabinetDesign, frame: &CabinetFrame, view: ViewMode) -> Vec<Line3D> {
    let Some(shelf) = design.component(ComponentKind::Shelf) else {
        return Vec::new();
    };
    let x0 = (frame.width - shelf.width()) / 2.0;
    let x1 = x0 + shelf.width();
    let z0 = SHELF_DEPTH_CLEARANCE;
    let z1 = z0 + shelf.length();

    // Behind the doors in every view
    shelf_heights(design, frame)
        .into_iter()
        .flat_map(|y| {
            let y = frame.box_bottom + y;
            box_edges(
                Point3D::new(x0, y, z0),
                Point3D::new(x1, y + shelf.thickness(), z1),
                view,
                SemanticColor::Shelf,
                LineStyle::Dashed,
            )
        })
        .collect()
}

fn toe_kick(frame: &CabinetFrame, view: ViewMode) -> Vec<Line3D> {
    let Some((height, depth)) = frame.toe_kick else {
        return Vec::new();
    };
    box_edges(
        Point3D::new(0.0, 0.0, frame.box_depth - depth),
        Point3D::new(frame.width, height, frame.box_depth),
        view,
        SemanticColor::Structure,
        LineStyle::Solid,
    )
}

/// Lines drawn by both tiers, already filtered for `view`
pub fn shared_lines(design: &CabinetDesign, view: ViewMode) -> Vec<Line3D> {
    let frame = CabinetFrame::from_design(design);
    let leaves = door_leaves(design, &frame);

    let mut lines = carcass(&frame, view);
    lines.extend(doors(&leaves, &frame, view));
    lines.extend(shelves(design, &frame, view));
    lines.extend(toe_kick(&frame, view));
    lines.retain(|line| !line.is_degenerate_in(view));
    lines
}
