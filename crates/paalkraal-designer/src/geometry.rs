//! Geometry resolver
//!
//! Walks the segment sequence turn by turn and produces absolute
//! positions, headings, the bounding box, and whether the run closes back
//! on its first post. Both the bill of materials and anything that draws
//! the plan view read from [`resolve_geometry`]; there is no second copy
//! of this walk.
//!
//! Conventions: the first post stands at the origin, heading 0° points
//! along +X, and turns accumulate across the whole run, so repeating the
//! same turn traces a regular polygon.

use crate::segment::{FenceSegment, SegmentKind};
use paalkraal_core::{Bounds, Point};
use paalkraal_settings::{ClosureSettings, FenceSettings};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A segment positioned in the layout plane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedSegment {
    pub id: Uuid,
    pub kind: SegmentKind,
    pub start: Point,
    pub end: Point,
    /// Absolute heading in degrees after this segment's turn
    pub heading: f64,
    pub effective_length: f64,
}

/// Result of walking a design
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedGeometry {
    /// Segments in sequence order
    pub placements: Vec<PlacedSegment>,
    /// Box around every visited point, origin included
    pub bounds: Bounds,
    /// Where the last segment ends
    pub end: Point,
    /// Heading after the last turn
    pub final_heading: f64,
    /// Distance from the last endpoint back to the origin
    pub closing_gap: f64,
    pub is_closed_loop: bool,
}

impl ResolvedGeometry {
    /// Post positions in traversal order: the origin, then every segment
    /// end. A closed loop shares its first and last post, so the final
    /// endpoint is not repeated.
    pub fn post_positions(&self) -> Vec<Point> {
        if self.placements.is_empty() {
            return Vec::new();
        }
        let mut posts = Vec::with_capacity(self.placements.len() + 1);
        posts.push(Point::ORIGIN);
        posts.extend(self.placements.iter().map(|p| p.end));
        if self.is_closed_loop {
            posts.pop();
        }
        posts
    }
}

/// Resolve absolute geometry for `segments` in a single forward pass.
pub fn resolve_geometry(segments: &[FenceSegment], settings: &FenceSettings) -> ResolvedGeometry {
    let mut position = Point::ORIGIN;
    let mut heading = 0.0_f64;
    let mut bounds = Bounds::from_point(position);
    let mut placements = Vec::with_capacity(segments.len());

    for segment in segments {
        heading += segment.turn_angle();
        let start = position;
        position = start.advance(heading, segment.effective_length());
        bounds.include(position);

        placements.push(PlacedSegment {
            id: segment.id(),
            kind: segment.kind(),
            start,
            end: position,
            heading,
            effective_length: segment.effective_length(),
        });
    }

    let closing_gap = position.distance_to(&Point::ORIGIN);
    let is_closed_loop = closes(segments.len(), closing_gap, &settings.closure);

    ResolvedGeometry {
        placements,
        bounds,
        end: position,
        final_heading: heading,
        closing_gap,
        is_closed_loop,
    }
}

fn closes(segment_count: usize, gap: f64, closure: &ClosureSettings) -> bool {
    segment_count >= closure.min_segments && gap < closure.tolerance
}
