use paalkraal_core::PoleLength;
use paalkraal_designer::{compute_bill_of_materials, resolve_geometry, FenceDesign, SegmentKind};
use paalkraal_settings::FenceSettings;
use proptest::prelude::*;

fn segment_kind() -> impl Strategy<Value = SegmentKind> {
    prop_oneof![
        Just(SegmentKind::Standard(PoleLength::M1_8)),
        Just(SegmentKind::Standard(PoleLength::M2_4)),
        Just(SegmentKind::Standard(PoleLength::M3_6)),
        Just(SegmentKind::Gate),
    ]
}

fn sections() -> impl Strategy<Value = Vec<(SegmentKind, f64)>> {
    prop::collection::vec((segment_kind(), -180.0f64..180.0), 0..24)
}

fn build(overlap: f64, items: &[(SegmentKind, f64)]) -> FenceDesign {
    let mut design = FenceDesign::new(FenceSettings::default().with_overlap(overlap));
    for (kind, turn) in items {
        design.append(*kind, *turn);
    }
    design
}

proptest! {
    #[test]
    fn total_length_ignores_turns(items in sections(), overlap in 0.0f64..0.5) {
        let turned = build(overlap, &items);
        let straight: Vec<_> = items.iter().map(|(kind, _)| (*kind, 0.0)).collect();
        let straight = build(overlap, &straight);

        prop_assert!((turned.total_length() - straight.total_length()).abs() < 1e-9);

        let settings = turned.settings().clone();
        let geometry = resolve_geometry(turned.segments(), &settings);
        let bill = compute_bill_of_materials(
            turned.segments(),
            &settings,
            geometry.is_closed_loop,
        );
        prop_assert!((bill.total_length - turned.total_length()).abs() < 1e-9);
    }

    #[test]
    fn append_then_remove_restores_design(
        items in sections(),
        extra in segment_kind(),
        turn in -90.0f64..90.0,
    ) {
        let mut design = build(0.15, &items);
        let before = design.clone();

        design.append(extra, turn);
        let removed = design.remove_last();

        prop_assert!(removed.is_some());
        prop_assert_eq!(&design, &before);
    }

    #[test]
    fn reapplying_overlap_is_idempotent(items in sections(), overlap in 0.0f64..0.5) {
        let mut design = build(0.15, &items);
        let settings = FenceSettings::default().with_overlap(overlap);

        design.apply_settings(settings.clone());
        let once = design.clone();
        design.apply_settings(settings);

        prop_assert_eq!(&design, &once);
    }

    #[test]
    fn posts_follow_closure(items in sections()) {
        let design = build(0.15, &items);
        let settings = design.settings().clone();
        let geometry = resolve_geometry(design.segments(), &settings);
        let bill = compute_bill_of_materials(
            design.segments(),
            &settings,
            geometry.is_closed_loop,
        );

        let expected = match design.len() {
            0 => 0,
            n if geometry.is_closed_loop => n as u32,
            n => n as u32 + 1,
        };
        prop_assert_eq!(bill.total_posts, expected);
        prop_assert!(!(geometry.is_closed_loop && design.len() < 3));
    }

    #[test]
    fn bounds_contain_every_post(items in sections()) {
        let design = build(0.15, &items);
        let geometry = resolve_geometry(design.segments(), design.settings());
        for placement in &geometry.placements {
            prop_assert!(geometry.bounds.contains(placement.start));
            prop_assert!(geometry.bounds.contains(placement.end));
        }
    }
}
