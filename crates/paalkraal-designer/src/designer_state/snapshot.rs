use super::DesignerState;
use crate::elevation::ElevationProfile;
use crate::geometry::{resolve_geometry, ResolvedGeometry};
use crate::materials::{compute_bill_of_materials, BillOfMaterials};
use crate::segment::FenceSegment;
use paalkraal_settings::FenceSettings;
use serde::Serialize;

/// Everything a view needs to render the current design
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DesignSnapshot {
    pub segments: Vec<FenceSegment>,
    pub settings: FenceSettings,
    pub pending_turn: f64,
    pub geometry: ResolvedGeometry,
    pub bill: BillOfMaterials,
    pub elevation: ElevationProfile,
}

impl DesignSnapshot {
    pub fn is_closed_loop(&self) -> bool {
        self.geometry.is_closed_loop
    }
}

impl DesignerState {
    /// Recompute geometry, materials and elevation for the current design.
    pub fn snapshot(&self) -> DesignSnapshot {
        let segments = self.design.segments();
        let settings = self.design.settings();
        let geometry = resolve_geometry(segments, settings);
        let bill = compute_bill_of_materials(segments, settings, geometry.is_closed_loop);
        let elevation = ElevationProfile::build(segments, settings);

        DesignSnapshot {
            segments: segments.to_vec(),
            settings: settings.clone(),
            pending_turn: self.pending_turn,
            geometry,
            bill,
            elevation,
        }
    }
}
