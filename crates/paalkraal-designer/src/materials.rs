//! Bill of materials
//!
//! Turns a design into purchasable quantities and an estimated cost.
//! Poles bought for a standard section are used as its horizontal rails,
//! so every section needs one pole of its catalog length per rail row.
//! Gates come complete and consume no rails.

use crate::segment::{FenceSegment, SegmentKind};
use paalkraal_core::{PerPole, PoleLength};
use paalkraal_settings::FenceSettings;
use serde::{Deserialize, Serialize};

pub use paalkraal_core::RAIL_GROUND_CLEARANCE;

/// Recommended post length as a multiple of the fence height, leaving the
/// remainder for burying.
pub const POST_HEIGHT_FACTOR: f64 = 1.25;

/// Number of rail rows that fit between the ground clearance and the fence
/// height, spaced `rail_spacing` apart.
///
/// The elevation profile uses this same function, so drawn and billed
/// rails always agree. Clamps to 0 for fences lower than the clearance.
/// `rail_spacing` must be positive and the count at most
/// [`MAX_RAILS_PER_SECTION`](paalkraal_core::MAX_RAILS_PER_SECTION);
/// settings validation enforces both. Outside that range the count
/// is bounded only by `u32::MAX`.
pub fn rails_per_section(settings: &FenceSettings) -> u32 {
    let above_first = (settings.fence_height - RAIL_GROUND_CLEARANCE) / settings.rail_spacing;
    (above_first.floor() + 1.0).max(0.0) as u32
}

/// Cost split by material
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub posts: f64,
    pub gates: f64,
    pub poles: f64,
    pub total: f64,
}

/// Quantities and cost for a design
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BillOfMaterials {
    pub segment_count: usize,
    /// Sum of effective lengths in meters
    pub total_length: f64,
    /// Upright posts, loop-aware
    pub total_posts: u32,
    pub rails_per_section: u32,
    /// Standard sections per catalog length
    pub pole_sections: PerPole<u32>,
    /// Poles to buy per catalog length (sections × rails)
    pub pole_requirement: PerPole<u32>,
    pub gate_count: u32,
    /// Recommended post length in meters
    pub recommended_post_height: f64,
    pub cost: CostBreakdown,
}

impl BillOfMaterials {
    pub fn total_cost(&self) -> f64 {
        self.cost.total
    }

    /// Poles of one catalog length to buy.
    pub fn poles_required(&self, length: PoleLength) -> u32 {
        self.pole_requirement[length]
    }

    /// Total poles of any length to buy.
    pub fn total_poles(&self) -> u32 {
        self.pole_requirement
            .iter()
            .fold(0u32, |total, (_, n)| total.saturating_add(*n))
    }
}

/// Derive the bill of materials for `segments`.
///
/// `is_closed_loop` comes from the geometry resolver: a closed loop shares
/// its first and last post, an open run needs one extra terminal post.
pub fn compute_bill_of_materials(
    segments: &[FenceSegment],
    settings: &FenceSettings,
    is_closed_loop: bool,
) -> BillOfMaterials {
    let total_length: f64 = segments.iter().map(FenceSegment::effective_length).sum();

    let mut pole_sections = PerPole::<u32>::default();
    let mut gate_count = 0u32;
    for segment in segments {
        match segment.kind() {
            SegmentKind::Standard(pole) => pole_sections[pole] += 1,
            SegmentKind::Gate => gate_count += 1,
        }
    }

    let rails = rails_per_section(settings);
    let pole_requirement = pole_sections.map(|sections| sections.saturating_mul(rails));

    let total_posts = if segments.is_empty() {
        0
    } else {
        segments.len() as u32 + u32::from(!is_closed_loop)
    };

    let prices = &settings.prices;
    let posts = f64::from(total_posts) * prices.post;
    let gates = f64::from(gate_count) * prices.gate;
    let poles: f64 = pole_requirement
        .zip_with(&prices.poles, |count, price| f64::from(*count) * price)
        .iter()
        .map(|(_, cost)| *cost)
        .sum();

    BillOfMaterials {
        segment_count: segments.len(),
        total_length,
        total_posts,
        rails_per_section: rails,
        pole_sections,
        pole_requirement,
        gate_count,
        recommended_post_height: settings.fence_height * POST_HEIGHT_FACTOR,
        cost: CostBreakdown {
            posts,
            gates,
            poles,
            total: posts + gates + poles,
        },
    }
}
