//! Construction feature generator
//!
//! Derives the complete component graph of a cabinet from its dimensions,
//! material and configuration: side panels with dados, back groove and shelf
//! pin rows; horizontal members; back; adjustable shelves; overlay doors with
//! hinge cups; and the toe kick assembly.
//!
//! All validation happens in [`CabinetBuilder::new`] so a build either yields
//! a complete design or fails before any part is produced.

use crate::constants::{
    BACK_GROOVE_DEPTH, BACK_GROOVE_INSET, BACK_PANEL_THICKNESS, BACK_REDUCTION_DOUBLE_SEAT,
    BACK_REDUCTION_SINGLE_SEAT, DADO_DEPTH, DADO_END_OFFSET, HINGE_END_OFFSET,
    SHELF_DEPTH_CLEARANCE, SHELF_WIDTH_CLEARANCE, STRETCHER_DEPTH,
};
use crate::dimensions::{generate_cabinet, CabinetDimensions};
use crate::holes::{hinge_holes, hinge_positions, shelf_pin_holes, ShelfPinLayout};
use crate::types::{
    CabinetDesign, Component, ComponentKind, Configuration, EdgeBanding, Groove, GrooveKind,
    GrooveOrientation, HolePattern, PanelEdge,
};
use cabinetkit_core::{CabinetArchetype, CabinetError, Material, Result};
use tracing::debug;

/// Builds the component graph for one cabinet
#[derive(Debug, Clone)]
pub struct CabinetBuilder {
    dims: CabinetDimensions,
    material: Material,
    config: Configuration,
    t: f64,
}

impl CabinetBuilder {
    /// Validate the inputs and prepare a builder
    pub fn new(
        dims: CabinetDimensions,
        material: Material,
        config: Configuration,
    ) -> Result<Self> {
        material.validate()?;
        config.validate()?;

        let t = material.thickness_inches;
        let builder = Self {
            dims,
            material,
            config,
            t,
        };
        builder.validate_geometry()?;
        Ok(builder)
    }

    fn validate_geometry(&self) -> Result<()> {
        if self.internal_width() <= SHELF_WIDTH_CLEARANCE {
            return Err(CabinetError::degenerate(format!(
                "width {} leaves no internal width with {}\" sides",
                self.dims.width, self.t
            )));
        }
        if self.internal_depth() <= SHELF_DEPTH_CLEARANCE {
            return Err(CabinetError::degenerate(format!(
                "box depth {} leaves no internal depth",
                self.dims.box_depth()
            )));
        }

        let seats = if self.dims.archetype.has_top_panel() { 2.0 } else { 1.0 };
        if self.dims.box_height() <= seats * (DADO_END_OFFSET + self.t) {
            return Err(CabinetError::degenerate(format!(
                "box height {} cannot hold its horizontal panels",
                self.dims.box_height()
            )));
        }

        if self.config.wants_shelves() {
            let rows = ShelfPinLayout::for_archetype(self.dims.archetype)
                .rows(self.dims.box_height())?;
            let shelves = usize::try_from(self.config.shelf_count).unwrap_or(usize::MAX);
            if shelves > rows.len() {
                return Err(CabinetError::degenerate(format!(
                    "{} shelves need more than the {} shelf pin rows of a {}\" box",
                    self.config.shelf_count,
                    rows.len(),
                    self.dims.box_height()
                )));
            }
        }
        if self.door_height() <= 2.0 * HINGE_END_OFFSET {
            return Err(CabinetError::degenerate(format!(
                "door height {} is too short for hinges",
                self.door_height()
            )));
        }
        Ok(())
    }

    fn internal_width(&self) -> f64 {
        self.dims.internal_width(self.t)
    }

    fn internal_depth(&self) -> f64 {
        self.dims.box_depth() - BACK_GROOVE_INSET
    }

    fn door_height(&self) -> f64 {
        self.dims.box_height() + 2.0 * self.config.overlay
    }

    fn door_thickness(&self) -> f64 {
        self.dims.door_thickness.unwrap_or(self.t)
    }

    /// Produce the full component list
    pub fn build(&self) -> Result<CabinetDesign> {
        let mut components = vec![self.side_panels()?];
        components.extend(self.horizontal_members()?);
        components.push(self.back_panel()?);
        if let Some(shelf) = self.shelves()? {
            components.push(shelf);
        }
        components.extend(self.doors()?);
        components.extend(self.toe_kick()?);

        debug!(
            archetype = %self.dims.archetype,
            width = self.dims.width,
            height = self.dims.height,
            parts = components.len(),
            "built cabinet"
        );

        Ok(CabinetDesign {
            dimensions: self.dims,
            material: self.material,
            configuration: self.config,
            components,
        })
    }

    fn side_panels(&self) -> Result<Component> {
        let box_h = self.dims.box_height();
        let box_d = self.dims.box_depth();
        let has_top = self.dims.archetype.has_top_panel();

        let dado = |y: f64| Groove {
            kind: GrooveKind::Dado,
            x: 0.0,
            y,
            width: self.t,
            depth: DADO_DEPTH,
            length: box_d,
            orientation: GrooveOrientation::Horizontal,
        };

        let mut grooves = vec![dado(DADO_END_OFFSET)];
        if has_top {
            grooves.push(dado(box_h - DADO_END_OFFSET - self.t));
        }

        // Stopped at the bottom seat; base backs run out through the open top.
        let back_groove_end = if has_top {
            box_h - DADO_END_OFFSET
        } else {
            box_h
        };
        grooves.push(Groove {
            kind: GrooveKind::BackPanel,
            x: box_d - BACK_GROOVE_INSET,
            y: DADO_END_OFFSET,
            width: BACK_PANEL_THICKNESS,
            depth: BACK_GROOVE_DEPTH,
            length: back_groove_end - DADO_END_OFFSET,
            orientation: GrooveOrientation::Vertical,
        });

        let holes: Vec<HolePattern> = if self.config.wants_shelves() {
            shelf_pin_holes(&ShelfPinLayout::for_archetype(self.dims.archetype), box_h)?
        } else {
            Vec::new()
        };

        Ok(
            Component::new(ComponentKind::SidePanel, box_d, box_h, 2, self.material.kind, self.t)?
                .with_edge_banding(EdgeBanding::front())
                .with_holes(holes)
                .with_grooves(grooves),
        )
    }

    fn horizontal_members(&self) -> Result<Vec<Component>> {
        let panel_width = self.internal_width() + 2.0 * DADO_DEPTH;
        let panel = |kind: ComponentKind| -> Result<Component> {
            Ok(Component::new(
                kind,
                panel_width,
                self.internal_depth(),
                1,
                self.material.kind,
                self.t,
            )?
            .with_edge_banding(EdgeBanding::front()))
        };

        let mut members = vec![panel(ComponentKind::BottomPanel)?];
        if self.dims.archetype.has_top_panel() {
            members.push(panel(ComponentKind::TopPanel)?);
        } else {
            members.push(
                Component::new(
                    ComponentKind::TopStretcher,
                    self.internal_width(),
                    STRETCHER_DEPTH,
                    1,
                    self.material.kind,
                    self.t,
                )?
                .with_edge_banding(EdgeBanding::front()),
            );
        }
        Ok(members)
    }

    fn back_panel(&self) -> Result<Component> {
        let reduction = if self.dims.archetype.has_top_panel() {
            BACK_REDUCTION_DOUBLE_SEAT
        } else {
            BACK_REDUCTION_SINGLE_SEAT
        };
        Component::new(
            ComponentKind::BackPanel,
            self.internal_width(),
            self.dims.box_height() - reduction,
            1,
            self.material.kind,
            BACK_PANEL_THICKNESS,
        )
    }

    fn shelves(&self) -> Result<Option<Component>> {
        if !self.config.wants_shelves() {
            return Ok(None);
        }
        let quantity = u32::try_from(self.config.shelf_count).map_err(|_| {
            CabinetError::degenerate(format!("invalid shelf count {}", self.config.shelf_count))
        })?;
        let shelf = Component::new(
            ComponentKind::Shelf,
            self.internal_width() - SHELF_WIDTH_CLEARANCE,
            self.internal_depth() - SHELF_DEPTH_CLEARANCE,
            quantity,
            self.material.kind,
            self.t,
        )?
        .with_edge_banding(EdgeBanding::front());
        Ok(Some(shelf))
    }

    fn doors(&self) -> Result<Vec<Component>> {
        let overlay = self.config.overlay;
        let door_h = self.door_height();
        let hinges = hinge_positions(self.dims.archetype, self.dims.box_height(), door_h)?;

        let door = |name: &str, width: f64, edge: PanelEdge| -> Result<Component> {
            Ok(Component::new(
                ComponentKind::Door,
                width,
                door_h,
                1,
                self.material.kind,
                self.door_thickness(),
            )?
            .with_name(name)
            .with_edge_banding(EdgeBanding::all_edges())
            .with_holes(hinge_holes(&hinges, edge)))
        };

        if self.dims.has_two_doors {
            let leaf = self.dims.width / 2.0 + overlay;
            Ok(vec![
                door("Left Door", leaf, PanelEdge::Left)?,
                door("Right Door", leaf, PanelEdge::Right)?,
            ])
        } else {
            Ok(vec![door(
                "Door",
                self.dims.width + 2.0 * overlay,
                PanelEdge::Left,
            )?])
        }
    }

    fn toe_kick(&self) -> Result<Vec<Component>> {
        let (Some(kick_h), Some(kick_d)) = (self.dims.toe_kick_height, self.dims.toe_kick_depth)
        else {
            return Ok(Vec::new());
        };

        let kind = self.material.kind;
        let mut parts = vec![
            Component::new(ComponentKind::ToeKickFront, self.dims.width, kick_h, 1, kind, self.t)?,
            Component::new(ComponentKind::ToeKickSide, kick_d, kick_h, 2, kind, self.t)?,
        ];
        if self.dims.archetype == CabinetArchetype::Tall {
            parts.push(Component::new(
                ComponentKind::ToeKickBack,
                self.internal_width(),
                kick_h,
                1,
                kind,
                self.t,
            )?);
        }
        Ok(parts)
    }
}

/// Build the component graph for already derived dimensions
pub fn build_cabinet(
    dimensions: CabinetDimensions,
    material: Material,
    configuration: Configuration,
) -> Result<CabinetDesign> {
    CabinetBuilder::new(dimensions, material, configuration)?.build()
}

/// Derive dimensions from the size ladder and build the cabinet in one step
pub fn generate_design(
    archetype: CabinetArchetype,
    width: f64,
    height: f64,
    material: Material,
    configuration: Configuration,
) -> Result<CabinetDesign> {
    let dimensions = generate_cabinet(archetype, width, height)?;
    build_cabinet(dimensions, material, configuration)
}
