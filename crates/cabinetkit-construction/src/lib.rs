//! # CabinetKit Construction
//!
//! Turns a cabinet archetype and a nominal size into a manufacturable part list.
//!
//! ## Pipeline
//!
//! ```text
//! (archetype, width, height)
//!   └── dimensions::generate_cabinet   -> CabinetDimensions
//!         └── generator::build_cabinet  -> CabinetDesign (components)
//!               └── cut_list::CutList   -> rows + material totals
//! ```
//!
//! Every stage is a pure function of its input. `DesignCache` lets an owning
//! layer reuse the last design while its key is unchanged.
//!
//! ## Usage
//!
//! ```rust
//! use cabinetkit_construction::{generate_design, Configuration, CutList};
//! use cabinetkit_core::{CabinetArchetype, Material};
//!
//! let design = generate_design(
//!     CabinetArchetype::Wall,
//!     30.0,
//!     33.0,
//!     Material::plywood_3_4(),
//!     Configuration::default(),
//! )
//! .unwrap();
//! assert!(design.has_two_doors());
//!
//! let cut_list = CutList::from_design(&design);
//! assert!(cut_list.totals.plywood34 > 0);
//! ```

pub mod cache;
pub mod constants;
pub mod cut_list;
pub mod dimensions;
pub mod generator;
pub mod holes;
pub mod types;

pub use cache::{DesignCache, DesignKey};
pub use cut_list::{CutList, CutListRow, MaterialTotals, RawMaterialTotals};
pub use dimensions::{
    available_heights, available_widths, generate_cabinet, CabinetDimensions, DoorSplitRule,
};
pub use generator::{build_cabinet, generate_design, CabinetBuilder};
pub use holes::{hinge_holes, hinge_positions, shelf_pin_holes, ShelfPinLayout};
pub use types::{
    CabinetDesign, Component, ComponentKind, Configuration, DoorStyle, EdgeBanding, Groove,
    GrooveKind, GrooveOrientation, HoleKind, HolePattern, LengthAxis, PanelEdge,
};
