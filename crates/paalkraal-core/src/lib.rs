//! # PaalKraalForge Core
//!
//! Core types shared by every PaalKraalForge crate:
//! the purchasable pole catalog, plane primitives used by the geometry
//! resolver, metric display helpers, and the unified error type.

pub mod catalog;
pub mod data;
pub mod error;
pub mod units;

pub use catalog::{PerPole, PoleLength, GATE_WIDTH, MAX_RAILS_PER_SECTION, RAIL_GROUND_CLEARANCE};
pub use data::{Bounds, Point};
pub use error::{CatalogError, Error, Result};
pub use units::{format_currency, format_length};
