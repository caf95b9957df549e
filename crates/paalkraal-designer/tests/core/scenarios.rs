use paalkraal_core::PoleLength;
use paalkraal_designer::{compute_bill_of_materials, resolve_geometry, FenceDesign, SegmentKind};
use paalkraal_settings::FenceSettings;

const P24: SegmentKind = SegmentKind::Standard(PoleLength::M2_4);
const P36: SegmentKind = SegmentKind::Standard(PoleLength::M3_6);

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_first_section_is_anchored() {
    let mut design = FenceDesign::default();
    let segment = design.append(P24, 45.0);
    assert_eq!(segment.turn_angle(), 0.0);
}

#[test]
fn test_equilateral_triangle_closes() {
    let settings = FenceSettings::default().with_overlap(0.0);
    let mut design = FenceDesign::new(settings.clone());
    design.append(P24, 0.0);
    design.append(P24, 120.0);
    design.append(P24, 120.0);

    let geometry = resolve_geometry(design.segments(), &settings);
    assert!(geometry.is_closed_loop);

    let bill = compute_bill_of_materials(
        design.segments(),
        &settings,
        geometry.is_closed_loop,
    );
    assert_eq!(bill.total_posts, 3);
}

#[test]
fn test_two_sections_stay_open() {
    let settings = FenceSettings::default();
    let mut design = FenceDesign::new(settings.clone());
    design.append(SegmentKind::Standard(PoleLength::M1_8), 0.0);
    design.append(P36, 90.0);

    let geometry = resolve_geometry(design.segments(), &settings);
    assert!(!geometry.is_closed_loop);

    let bill = compute_bill_of_materials(
        design.segments(),
        &settings,
        geometry.is_closed_loop,
    );
    assert_eq!(bill.total_posts, 3);
}

#[test]
fn test_overlap_change_resizes_existing_sections() {
    let mut design = FenceDesign::new(FenceSettings::default().with_overlap(0.15));
    design.append(P36, 0.0);
    assert!(close(design.segments()[0].effective_length(), 3.45));

    design.apply_settings(FenceSettings::default().with_overlap(0.2));
    assert!(close(design.segments()[0].effective_length(), 3.4));
}

#[test]
fn test_gate_ignores_overlap() {
    let mut design = FenceDesign::new(FenceSettings::default().with_overlap(0.3));
    design.append(SegmentKind::Gate, 0.0);
    assert_eq!(design.segments()[0].effective_length(), 1.0);
}

#[test]
fn test_cost_of_section_and_gate() {
    let settings = FenceSettings::default().with_overlap(0.15).with_rails(1.2, 0.3);
    let mut design = FenceDesign::new(settings.clone());
    design.append(P24, 0.0);
    design.append(SegmentKind::Gate, 90.0);

    let geometry = resolve_geometry(design.segments(), &settings);
    let bill = compute_bill_of_materials(
        design.segments(),
        &settings,
        geometry.is_closed_loop,
    );

    assert!(close(bill.total_length, 3.25));
    assert_eq!(bill.total_posts, 3);
    assert_eq!(bill.poles_required(PoleLength::M2_4), 4);
    assert_eq!(bill.total_cost(), 2090.0);
}

#[test]
fn test_square_kraal() {
    let settings = FenceSettings::default().with_overlap(0.0);
    let mut design = FenceDesign::new(settings.clone());
    for _ in 0..4 {
        design.append(P24, 90.0);
    }

    let geometry = resolve_geometry(design.segments(), &settings);
    assert!(geometry.is_closed_loop);
    assert!(close(geometry.bounds.width(), 2.4));
    assert!(close(geometry.bounds.height(), 2.4));
    assert_eq!(geometry.post_positions().len(), 4);

    let bill = compute_bill_of_materials(
        design.segments(),
        &settings,
        geometry.is_closed_loop,
    );
    assert_eq!(bill.total_posts, 4);
    assert_eq!(bill.poles_required(PoleLength::M2_4), 16);
}
