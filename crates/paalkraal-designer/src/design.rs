//! The fence design
//!
//! An ordered sequence of segments plus the settings they were sized with.
//! Order is traversal order: each segment starts where the previous one
//! ended. Segments are only ever appended, popped from the tail, or
//! cleared together.

use crate::segment::{FenceSegment, SegmentKind};
use paalkraal_settings::FenceSettings;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ordered segments and the settings in force
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FenceDesign {
    segments: Vec<FenceSegment>,
    settings: FenceSettings,
}

impl FenceDesign {
    pub fn new(settings: FenceSettings) -> Self {
        Self {
            segments: Vec::new(),
            settings,
        }
    }

    pub fn segments(&self) -> &[FenceSegment] {
        &self.segments
    }

    pub fn settings(&self) -> &FenceSettings {
        &self.settings
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append a segment to the end of the run.
    ///
    /// The first segment of a design always stores a turn of 0 so every
    /// layout starts out along the reference heading; `pending_turn` only
    /// applies from the second segment on.
    pub fn append(&mut self, kind: SegmentKind, pending_turn: f64) -> &FenceSegment {
        let turn_angle = if self.segments.is_empty() {
            0.0
        } else {
            pending_turn
        };

        let segment = FenceSegment::new(kind, turn_angle, self.settings.overlap);
        debug!(
            "Appending {} (effective {:.3}m, turn {}°) as segment #{}",
            kind,
            segment.effective_length(),
            turn_angle,
            self.segments.len() + 1
        );
        self.segments.push(segment);
        &self.segments[self.segments.len() - 1]
    }

    /// Remove the final segment. Does nothing on an empty design.
    pub fn remove_last(&mut self) -> Option<FenceSegment> {
        let removed = self.segments.pop();
        if let Some(segment) = &removed {
            debug!("Removed {} segment {}", segment.kind(), segment.id());
        }
        removed
    }

    /// Remove every segment. Settings are kept.
    pub fn reset(&mut self) {
        debug!("Clearing {} segments", self.segments.len());
        self.segments.clear();
    }

    /// Replace the settings.
    ///
    /// When the joint overlap differs, every segment's effective length is
    /// recomputed; kind, id and turn angle are left untouched. Any other
    /// change leaves the segments alone.
    pub fn apply_settings(&mut self, settings: FenceSettings) {
        if settings.overlap != self.settings.overlap {
            debug!(
                "Overlap changed {} -> {}, resizing {} segments",
                self.settings.overlap,
                settings.overlap,
                self.segments.len()
            );
            for segment in &mut self.segments {
                segment.apply_overlap(settings.overlap);
            }
        }
        self.settings = settings;
    }

    /// Sum of effective lengths.
    pub fn total_length(&self) -> f64 {
        self.segments.iter().map(FenceSegment::effective_length).sum()
    }
}
