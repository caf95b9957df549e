//! Elevation profile
//!
//! Side-view data for a renderer: the design unfolded into one straight
//! line along its effective lengths, with post positions and the rail
//! heights every standard span carries.

use crate::materials::{rails_per_section, POST_HEIGHT_FACTOR, RAIL_GROUND_CLEARANCE};
use crate::segment::{FenceSegment, SegmentKind};
use paalkraal_settings::FenceSettings;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Heights above ground of each rail row, lowest first.
pub fn rail_heights(settings: &FenceSettings) -> Vec<f64> {
    (0..rails_per_section(settings))
        .map(|row| RAIL_GROUND_CLEARANCE + f64::from(row) * settings.rail_spacing)
        .collect()
}

/// One section along the unfolded run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElevationSpan {
    pub id: Uuid,
    pub kind: SegmentKind,
    pub start_x: f64,
    pub end_x: f64,
}

impl ElevationSpan {
    pub fn width(&self) -> f64 {
        self.end_x - self.start_x
    }

    /// Gates are drawn as a frame, standard spans carry rails.
    pub fn has_rails(&self) -> bool {
        !self.kind.is_gate()
    }
}

/// Unfolded side view of a design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElevationProfile {
    pub spans: Vec<ElevationSpan>,
    /// X position of every upright, including the final end post
    pub post_positions: Vec<f64>,
    pub fence_height: f64,
    pub post_height: f64,
    pub rail_heights: Vec<f64>,
    pub total_length: f64,
}

impl ElevationProfile {
    pub fn build(segments: &[FenceSegment], settings: &FenceSettings) -> Self {
        let mut cursor = 0.0;
        let spans: Vec<ElevationSpan> = segments
            .iter()
            .map(|segment| {
                let start_x = cursor;
                cursor += segment.effective_length();
                ElevationSpan {
                    id: segment.id(),
                    kind: segment.kind(),
                    start_x,
                    end_x: cursor,
                }
            })
            .collect();

        let mut post_positions: Vec<f64> = spans.iter().map(|span| span.start_x).collect();
        if !spans.is_empty() {
            post_positions.push(cursor);
        }

        Self {
            spans,
            post_positions,
            fence_height: settings.fence_height,
            post_height: settings.fence_height * POST_HEIGHT_FACTOR,
            rail_heights: rail_heights(settings),
            total_length: cursor,
        }
    }

    /// Rails drawn across the whole profile.
    pub fn drawn_rail_count(&self) -> usize {
        self.spans.iter().filter(|span| span.has_rails()).count() * self.rail_heights.len()
    }
}
