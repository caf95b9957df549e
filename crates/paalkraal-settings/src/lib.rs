//! PaalKraalForge Settings Crate
//!
//! Physical and pricing parameters for a fence design, their validation,
//! and loading/saving them from the platform config directory.

pub mod config;
pub mod error;
pub mod manager;

pub use config::{ClosureSettings, FenceSettings, PriceList};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
pub use manager::SettingsManager;
