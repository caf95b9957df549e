use paalkraal_core::PoleLength;
use paalkraal_designer::{
    compute_bill_of_materials, rail_heights, ElevationProfile, FenceDesign, SegmentKind,
};
use paalkraal_settings::FenceSettings;

#[test]
fn test_drawn_rails_match_billed_rails() {
    for (height, spacing) in [(1.2, 0.3), (1.0, 0.45), (1.8, 0.4), (0.05, 0.3)] {
        let settings = FenceSettings::default().with_rails(height, spacing);
        let mut design = FenceDesign::new(settings.clone());
        design.append(SegmentKind::Standard(PoleLength::M2_4), 0.0);
        design.append(SegmentKind::Standard(PoleLength::M3_6), 30.0);
        design.append(SegmentKind::Gate, 30.0);

        let bill = compute_bill_of_materials(design.segments(), &settings, false);
        let profile = ElevationProfile::build(design.segments(), &settings);

        assert_eq!(profile.rail_heights.len() as u32, bill.rails_per_section);
        assert_eq!(profile.drawn_rail_count() as u32, bill.total_poles());
    }
}

#[test]
fn test_top_rail_below_fence_height() {
    let settings = FenceSettings::default().with_rails(1.8, 0.4);
    let heights = rail_heights(&settings);
    assert_eq!(heights.len(), 5);
    let top = heights.last().copied().unwrap_or_default();
    assert!(top <= settings.fence_height);
}

#[test]
fn test_profile_length_matches_design() {
    let settings = FenceSettings::default();
    let mut design = FenceDesign::new(settings.clone());
    design.append(SegmentKind::Standard(PoleLength::M1_8), 0.0);
    design.append(SegmentKind::Gate, -90.0);

    let profile = ElevationProfile::build(design.segments(), &settings);
    assert!((profile.total_length - design.total_length()).abs() < 1e-9);
}
