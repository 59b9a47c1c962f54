//! # CabinetKit Core
//!
//! Core types and utilities shared by every CabinetKit crate:
//! - error types for dimension, archetype and configuration failures
//! - inch/millimetre conversion and fractional-inch formatting
//! - the sheet material model applied to a cabinet

pub mod archetype;
pub mod error;
pub mod material;
pub mod units;

pub use archetype::CabinetArchetype;
pub use error::{CabinetError, Result};
pub use material::{Material, MaterialKind};
pub use units::MeasurementSystem;
