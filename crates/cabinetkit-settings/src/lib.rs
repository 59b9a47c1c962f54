//! CabinetKit Settings Crate
//!
//! Persists the defaults a user wants applied to new cabinets (material,
//! shelf and door options) and the drawing preferences used for export.

pub mod config;
pub mod error;

pub use config::{default_config_path, Config, DefaultsSection, DrawingSection};
pub use error::{SettingsError, SettingsResult};
