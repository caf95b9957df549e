//! # PaalKraal Designer
//!
//! Fence layout model and the calculations derived from it. A design is an
//! ordered run of sections, each a standard pole section or a gate, joined
//! at posts with a turn relative to the previous heading.
//!
//! ## Core Components
//!
//! - **Design**: the ordered section sequence and its settings
//! - **Geometry**: turn-by-turn walk, bounding box, closed-loop detection
//! - **Materials**: posts, rails, gates, and estimated cost
//! - **Elevation**: unfolded side view for drawing rails and posts
//! - **Designer State**: command handling and change notification
//!
//! ## Architecture
//!
//! ```text
//! DesignerState (commands, listeners)
//!   └── FenceDesign (sections + settings)
//!         ├── resolve_geometry ──> ResolvedGeometry
//!         │                          └── is_closed_loop
//!         ├── compute_bill_of_materials ──> BillOfMaterials
//!         └── ElevationProfile
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use paalkraal_core::PoleLength;
//! use paalkraal_designer::{DesignerCommand, DesignerState, SegmentKind};
//! use paalkraal_settings::FenceSettings;
//!
//! let mut designer = DesignerState::new(FenceSettings::default());
//! designer
//!     .execute(DesignerCommand::Append(SegmentKind::Standard(PoleLength::M2_4)))
//!     .unwrap();
//! let snapshot = designer
//!     .execute(DesignerCommand::Append(SegmentKind::Gate))
//!     .unwrap();
//! assert_eq!(snapshot.bill.total_posts, 3);
//! ```

pub mod commands;
pub mod design;
pub mod designer_state;
pub mod elevation;
pub mod error;
pub mod geometry;
pub mod materials;
pub mod segment;

pub use commands::{DesignerCommand, TURN_PRESETS};
pub use design::FenceDesign;
pub use designer_state::{DesignSnapshot, DesignerState};
pub use elevation::{rail_heights, ElevationProfile, ElevationSpan};
pub use error::{DesignerError, DesignerResult};
pub use geometry::{resolve_geometry, PlacedSegment, ResolvedGeometry};
pub use materials::{
    compute_bill_of_materials, rails_per_section, BillOfMaterials, CostBreakdown,
    POST_HEIGHT_FACTOR, RAIL_GROUND_CLEARANCE,
};
pub use segment::{FenceSegment, SegmentKind};
