//! Pole catalog
//!
//! Standard poles are only sold in three raw lengths. Every quantity keyed
//! by a catalog length goes through [`PerPole`], so bucket lookups are
//! checked at compile time instead of comparing floats.

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// Width of a gate section in meters. Joint overlap never applies to gates.
pub const GATE_WIDTH: f64 = 1.0;

/// Height of the lowest rail above the ground in meters.
pub const RAIL_GROUND_CLEARANCE: f64 = 0.1;

/// Most rail rows a section may carry. Settings implying more are rejected.
pub const MAX_RAILS_PER_SECTION: u32 = 100;

/// Purchasable raw pole length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PoleLength {
    /// 1.8 m pole
    #[serde(rename = "1.8")]
    M1_8,
    /// 2.4 m pole
    #[serde(rename = "2.4")]
    M2_4,
    /// 3.6 m pole
    #[serde(rename = "3.6")]
    M3_6,
}

impl PoleLength {
    /// Every catalog length, shortest first.
    pub const ALL: [PoleLength; 3] = [PoleLength::M1_8, PoleLength::M2_4, PoleLength::M3_6];

    /// Raw length in meters.
    pub fn meters(self) -> f64 {
        match self {
            Self::M1_8 => 1.8,
            Self::M2_4 => 2.4,
            Self::M3_6 => 3.6,
        }
    }

    /// The shortest purchasable pole. Joint overlap must stay below this.
    pub fn shortest() -> Self {
        Self::M1_8
    }

    /// Look up the catalog entry for a length in meters.
    ///
    /// Accepts values within a millimeter of a catalog length so that
    /// lengths read back from text input still resolve.
    pub fn from_meters(meters: f64) -> Result<Self, CatalogError> {
        Self::ALL
            .into_iter()
            .find(|pole| (pole.meters() - meters).abs() < 1e-3)
            .ok_or(CatalogError::UnknownPoleLength(meters))
    }
}

impl fmt::Display for PoleLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}m", self.meters())
    }
}

impl FromStr for PoleLength {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_end_matches('m');
        let meters = trimmed
            .parse::<f64>()
            .map_err(|_| CatalogError::InvalidPoleLength(s.to_string()))?;
        Self::from_meters(meters)
    }
}

/// A value stored for each catalog length.
///
/// Every field is always present, so lookups never miss.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PerPole<T> {
    #[serde(rename = "1.8")]
    pub m1_8: T,
    #[serde(rename = "2.4")]
    pub m2_4: T,
    #[serde(rename = "3.6")]
    pub m3_6: T,
}

impl<T> PerPole<T> {
    pub fn new(m1_8: T, m2_4: T, m3_6: T) -> Self {
        Self { m1_8, m2_4, m3_6 }
    }

    /// Iterate `(length, value)` pairs, shortest pole first.
    pub fn iter(&self) -> impl Iterator<Item = (PoleLength, &T)> {
        PoleLength::ALL.into_iter().map(move |pole| (pole, &self[pole]))
    }

    /// Combine two mappings entry by entry.
    pub fn zip_with<U, R>(&self, other: &PerPole<U>, f: impl Fn(&T, &U) -> R) -> PerPole<R> {
        PerPole {
            m1_8: f(&self.m1_8, &other.m1_8),
            m2_4: f(&self.m2_4, &other.m2_4),
            m3_6: f(&self.m3_6, &other.m3_6),
        }
    }

    pub fn map<R>(&self, f: impl Fn(&T) -> R) -> PerPole<R> {
        PerPole {
            m1_8: f(&self.m1_8),
            m2_4: f(&self.m2_4),
            m3_6: f(&self.m3_6),
        }
    }
}

impl<T> Index<PoleLength> for PerPole<T> {
    type Output = T;

    fn index(&self, pole: PoleLength) -> &T {
        match pole {
            PoleLength::M1_8 => &self.m1_8,
            PoleLength::M2_4 => &self.m2_4,
            PoleLength::M3_6 => &self.m3_6,
        }
    }
}

impl<T> IndexMut<PoleLength> for PerPole<T> {
    fn index_mut(&mut self, pole: PoleLength) -> &mut T {
        match pole {
            PoleLength::M1_8 => &mut self.m1_8,
            PoleLength::M2_4 => &mut self.m2_4,
            PoleLength::M3_6 => &mut self.m3_6,
        }
    }
}
