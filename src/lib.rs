//! # PaalKraalForge
//!
//! Fence and kraal layout calculator. A layout is built section by section
//! from catalog poles and gates, each joined at a post with a turn; the
//! calculator resolves the plan geometry, detects whether the run closes
//! into an enclosure, and prices the materials.
//!
//! ## Architecture
//!
//! PaalKraalForge is organized as a workspace with multiple crates:
//!
//! 1. **paalkraal-core** - Pole catalog, plane primitives, display helpers, errors
//! 2. **paalkraal-settings** - Fence, rail, and price settings with file persistence
//! 3. **paalkraal-designer** - Design model, geometry, bill of materials, controller
//! 4. **paalkraal** - Command-line front end that integrates all crates

pub mod report;
pub mod tokens;

pub use paalkraal_core::{
    format_currency, format_length, Bounds, CatalogError, Error, PerPole, Point, PoleLength,
    Result, GATE_WIDTH,
};

pub use paalkraal_settings::{
    ClosureSettings, ConfigError, FenceSettings, PriceList, SettingsError, SettingsManager,
};

pub use paalkraal_designer::{
    compute_bill_of_materials, rail_heights, rails_per_section, resolve_geometry,
    BillOfMaterials, CostBreakdown, DesignSnapshot, DesignerCommand, DesignerError,
    DesignerState, ElevationProfile, FenceDesign, FenceSegment, PlacedSegment,
    ResolvedGeometry, SegmentKind, TURN_PRESETS,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, so stdout carries only the report
/// - RUST_LOG environment variable support
/// - `warn` as the default level, `info` or `debug` with `verbosity` 1 or 2
pub fn init_logging(verbosity: u8) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    let env_filter = EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(verbosity > 1);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
