use paalkraal_core::PoleLength;
use paalkraal_designer::{
    DesignerCommand, DesignerError, DesignerState, SegmentKind, TURN_PRESETS,
};
use paalkraal_settings::FenceSettings;
use std::cell::Cell;
use std::rc::Rc;

#[test]
fn test_designer_state_new() {
    let state = DesignerState::default();
    assert!(state.design().is_empty());
    assert_eq!(state.pending_turn(), 0.0);
}

#[test]
fn test_walk_a_triangle_through_commands() {
    let mut state = DesignerState::new(FenceSettings::default().with_overlap(0.0));
    let commands = [
        DesignerCommand::SetPendingTurn(120.0),
        DesignerCommand::Append(SegmentKind::Standard(PoleLength::M2_4)),
        DesignerCommand::Append(SegmentKind::Standard(PoleLength::M2_4)),
        DesignerCommand::Append(SegmentKind::Standard(PoleLength::M2_4)),
    ];

    let mut last = None;
    for command in commands {
        last = Some(state.execute(command).unwrap());
    }
    let snapshot = last.unwrap();

    assert_eq!(snapshot.segments[0].turn_angle(), 0.0);
    assert!(snapshot.is_closed_loop());
    assert_eq!(snapshot.bill.total_posts, 3);
    assert_eq!(snapshot.geometry.post_positions().len(), 3);
}

#[test]
fn test_undo_reopens_loop() {
    let mut state = DesignerState::new(FenceSettings::default().with_overlap(0.0));
    state.set_pending_turn(TURN_PRESETS[4]).unwrap();
    for _ in 0..4 {
        state.append(SegmentKind::Standard(PoleLength::M1_8));
    }
    assert!(state.snapshot().is_closed_loop());

    let snapshot = state.execute(DesignerCommand::RemoveLast).unwrap();
    assert!(!snapshot.is_closed_loop());
    assert_eq!(snapshot.bill.total_posts, 4);
}

#[test]
fn test_undo_on_empty_design_is_noop() {
    let mut state = DesignerState::default();
    let snapshot = state.execute(DesignerCommand::RemoveLast).unwrap();
    assert!(snapshot.segments.is_empty());
    assert_eq!(snapshot.bill.total_posts, 0);
}

#[test]
fn test_settings_update_reprices() {
    let mut state = DesignerState::default();
    state.append(SegmentKind::Gate);
    let before = state.snapshot().bill.total_cost();

    let mut settings = state.settings().clone();
    settings.prices.gate += 100.0;
    let snapshot = state
        .execute(DesignerCommand::UpdateSettings(settings))
        .unwrap();

    assert_eq!(snapshot.bill.total_cost(), before + 100.0);
}

#[test]
fn test_rejected_settings_keep_previous() {
    let mut state = DesignerState::default();
    let mut settings = state.settings().clone();
    settings.overlap = 2.0;

    let err = state
        .execute(DesignerCommand::UpdateSettings(settings))
        .unwrap_err();

    assert!(matches!(err, DesignerError::InvalidSettings(_)));
    assert_eq!(state.settings(), &FenceSettings::default());
}

#[test]
fn test_listener_counts_changes() {
    let changes = Rc::new(Cell::new(0));
    let mut state = DesignerState::default();
    {
        let changes = Rc::clone(&changes);
        state.on_design_changed(move |_| changes.set(changes.get() + 1));
    }

    state.append(SegmentKind::Gate);
    state.set_pending_turn(-45.0).unwrap();
    state.remove_last();
    state.remove_last();
    state.reset();

    // the second remove_last found nothing to remove
    assert_eq!(changes.get(), 4);
}
