//! Fence segments
//!
//! One segment is one fence section between two posts: either a run of
//! standard poles of a single catalog length, or a gate.

use paalkraal_core::{PoleLength, GATE_WIDTH};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// What a segment is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    /// Standard section railed with poles of one catalog length
    Standard(PoleLength),
    /// Gate of fixed width
    Gate,
}

impl SegmentKind {
    /// Purchased length of the section.
    pub fn raw_length(&self) -> f64 {
        match self {
            Self::Standard(pole) => pole.meters(),
            Self::Gate => GATE_WIDTH,
        }
    }

    /// Length the section adds to the perimeter for a given joint overlap.
    pub fn effective_length(&self, overlap: f64) -> f64 {
        match self {
            Self::Standard(pole) => pole.meters() - overlap,
            Self::Gate => GATE_WIDTH,
        }
    }

    pub fn is_gate(&self) -> bool {
        matches!(self, Self::Gate)
    }

    /// Catalog length of the rails, if this is a standard section.
    pub fn pole(&self) -> Option<PoleLength> {
        match self {
            Self::Standard(pole) => Some(*pole),
            Self::Gate => None,
        }
    }
}

impl fmt::Display for SegmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Standard(pole) => write!(f, "{} pole", pole),
            Self::Gate => write!(f, "gate"),
        }
    }
}

/// A section of fence in the design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FenceSegment {
    id: Uuid,
    kind: SegmentKind,
    effective_length: f64,
    turn_angle: f64,
}

impl FenceSegment {
    /// Build a segment with a fresh id.
    pub(crate) fn new(kind: SegmentKind, turn_angle: f64, overlap: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            effective_length: kind.effective_length(overlap),
            turn_angle,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    /// Purchased length in meters.
    pub fn raw_length(&self) -> f64 {
        self.kind.raw_length()
    }

    /// Overlap-adjusted length in meters.
    pub fn effective_length(&self) -> f64 {
        self.effective_length
    }

    /// Heading change in degrees applied before this segment is traversed.
    pub fn turn_angle(&self) -> f64 {
        self.turn_angle
    }

    pub fn is_gate(&self) -> bool {
        self.kind.is_gate()
    }

    /// Recompute the effective length after the joint overlap changed.
    pub(crate) fn apply_overlap(&mut self, overlap: f64) {
        self.effective_length = self.kind.effective_length(overlap);
    }
}
