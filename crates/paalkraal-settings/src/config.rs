//! Fence configuration for PaalKraalForge
//!
//! Holds the physical parameters (height, rail spacing, joint overlap),
//! the unit price list, and the loop-closure constants. A settings value is
//! replaced wholesale on every edit; the designer reacts to the difference.
//!
//! Supports JSON and TOML files, chosen by extension.

use crate::error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
use paalkraal_core::{PerPole, PoleLength, MAX_RAILS_PER_SECTION, RAIL_GROUND_CLEARANCE};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Unit prices used for the cost estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriceList {
    /// Price of one upright post
    pub post: f64,
    /// Price of one gate
    pub gate: f64,
    /// Price of one pole, per catalog length
    pub poles: PerPole<f64>,
}

impl PriceList {
    /// Price of a single pole of the given length.
    pub fn pole(&self, length: PoleLength) -> f64 {
        self.poles[length]
    }
}

impl Default for PriceList {
    fn default() -> Self {
        Self {
            post: 150.0,
            gate: 1200.0,
            poles: PerPole::new(80.0, 110.0, 160.0),
        }
    }
}

/// Thresholds for deciding that a layout returns to its starting post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClosureSettings {
    /// Maximum end-to-origin distance (m) still treated as closed
    pub tolerance: f64,
    /// Fewest segments that can form a closed loop
    pub min_segments: usize,
}

impl Default for ClosureSettings {
    fn default() -> Self {
        Self {
            tolerance: 0.25,
            min_segments: 3,
        }
    }
}

/// Complete fence configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FenceSettings {
    /// Nominal above-ground fence height in meters
    pub fence_height: f64,
    /// Vertical gap between horizontal rails in meters
    pub rail_spacing: f64,
    /// Length lost at each pole-to-pole joint in meters
    pub overlap: f64,
    /// Rail pole diameter in mm (display only)
    pub pole_diameter: f64,
    /// Upright post diameter in mm (display only)
    pub post_diameter: f64,
    /// Unit prices
    pub prices: PriceList,
    /// Currency symbol for display
    pub currency_symbol: String,
    /// Loop closure thresholds
    pub closure: ClosureSettings,
}

impl Default for FenceSettings {
    fn default() -> Self {
        Self {
            fence_height: 1.2,
            rail_spacing: 0.3,
            overlap: 0.15,
            pole_diameter: 100.0,
            post_diameter: 150.0,
            prices: PriceList::default(),
            currency_symbol: "$".to_string(),
            closure: ClosureSettings::default(),
        }
    }
}

impl FenceSettings {
    /// Create new settings with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of these settings with a different joint overlap.
    pub fn with_overlap(mut self, overlap: f64) -> Self {
        self.overlap = overlap;
        self
    }

    /// Copy of these settings with a different height and rail spacing.
    pub fn with_rails(mut self, fence_height: f64, rail_spacing: f64) -> Self {
        self.fence_height = fence_height;
        self.rail_spacing = rail_spacing;
        self
    }

    /// Load settings from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("{}: {}", path.display(), e))
        })?;

        let settings: Self = match extension(path)? {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        settings.validate()?;
        info!("Loaded fence settings from {}", path.display());
        Ok(settings)
    }

    /// Save settings to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match extension(path)? {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)
                .map_err(|e| SettingsError::SaveError(e.to_string()))?,
        };

        std::fs::write(path, content)?;
        info!("Saved fence settings to {}", path.display());
        Ok(())
    }

    /// Validate ranges.
    ///
    /// The geometry and materials code assumes these hold; in particular a
    /// zero rail spacing would divide by zero in the rail count, and the
    /// spacing must leave at most [`MAX_RAILS_PER_SECTION`] rail rows.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.fence_height > 0.0) || !self.fence_height.is_finite() {
            return Err(ConfigError::out_of_range("fence_height", self.fence_height));
        }
        if !(self.rail_spacing > 0.0) || !self.rail_spacing.is_finite() {
            return Err(ConfigError::out_of_range("rail_spacing", self.rail_spacing));
        }
        let rows_above_first = (self.fence_height - RAIL_GROUND_CLEARANCE) / self.rail_spacing;
        if rows_above_first >= f64::from(MAX_RAILS_PER_SECTION) {
            return Err(ConfigError::out_of_range("rail_spacing", self.rail_spacing));
        }
        if !(self.overlap >= 0.0 && self.overlap < PoleLength::shortest().meters()) {
            return Err(ConfigError::out_of_range("overlap", self.overlap));
        }
        if !(self.pole_diameter > 0.0) {
            return Err(ConfigError::out_of_range("pole_diameter", self.pole_diameter));
        }
        if !(self.post_diameter > 0.0) {
            return Err(ConfigError::out_of_range("post_diameter", self.post_diameter));
        }

        check_price("prices.post", self.prices.post)?;
        check_price("prices.gate", self.prices.gate)?;
        for (pole, price) in self.prices.poles.iter() {
            check_price(&format!("prices.poles.{:.1}", pole.meters()), *price)?;
        }

        if !(self.closure.tolerance > 0.0) {
            return Err(ConfigError::out_of_range(
                "closure.tolerance",
                self.closure.tolerance,
            ));
        }
        if self.closure.min_segments == 0 {
            return Err(ConfigError::out_of_range("closure.min_segments", 0));
        }

        debug!("Fence settings validated");
        Ok(())
    }
}

fn check_price(key: &str, price: f64) -> ConfigResult<()> {
    if price >= 0.0 && price.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::out_of_range(key, price))
    }
}

enum Format {
    Json,
    Toml,
}

fn extension(path: &Path) -> ConfigResult<Format> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        other => Err(ConfigError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}
