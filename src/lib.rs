//! # CabinetKit
//!
//! Parametric cabinet construction and technical drawings.
//!
//! ## Architecture
//!
//! CabinetKit is organized as a workspace with multiple crates:
//!
//! 1. **cabinetkit-core** - Archetypes, units, materials, errors
//! 2. **cabinetkit-construction** - Size ladders, part generation, cut lists
//! 3. **cabinetkit-drafting** - Plan, elevation and isometric wireframes, SVG export
//! 4. **cabinetkit-settings** - User defaults and drawing preferences
//! 5. **cabinetkit** - Command line tool tying the crates together

pub mod report;

pub use cabinetkit_construction::{
    build_cabinet, generate_cabinet, generate_design, CabinetDesign, CabinetDimensions,
    Configuration, CutList, DesignCache, DesignKey,
};
pub use cabinetkit_core::{CabinetArchetype, CabinetError, Material, MaterialKind, Result};
pub use cabinetkit_drafting::{drawing_svg, DrawingTier, SvgOptions, ViewMode};
pub use cabinetkit_settings::{Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Log lines go to stderr so that JSON and SVG written to stdout stay clean.
/// `RUST_LOG` overrides the default level, which is `warn` or `debug` when
/// `verbose` is set.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {}", e))?;

    Ok(())
}
