use loopdeck_core::{compute_logical_index, CarouselError, CarouselLayout, ScrollController};

const LAYOUT: CarouselLayout = CarouselLayout {
    card_width: 180.0,
    spacing: 10.0,
};

fn controller(real_count: usize) -> ScrollController {
    ScrollController::new(real_count, LAYOUT).unwrap()
}

#[test]
fn pitch_is_card_width_plus_spacing_on_both_sides() {
    assert_eq!(LAYOUT.pitch(), 200.0);
}

#[test]
fn zero_pitch_with_cards_is_rejected() {
    let degenerate = CarouselLayout {
        card_width: 0.0,
        spacing: 0.0,
    };
    let err = ScrollController::new(6, degenerate).unwrap_err();
    assert!(matches!(err, CarouselError::NonPositivePitch { .. }));

    // An empty deck never divides by pitch, so it may be built regardless.
    let empty = ScrollController::new(0, degenerate).unwrap();
    assert_eq!(empty.slot_count(), 0);
}

#[test]
fn initial_center_lands_on_first_real_card() {
    let mut ctrl = controller(6);
    let pitch = ctrl.pitch();

    assert_eq!(ctrl.logical_index(), None);
    let target = ctrl.fire_initial_center().unwrap();
    assert_eq!(target, pitch);
    assert_eq!(ctrl.offset(), pitch);
    assert_eq!(ctrl.logical_index(), Some(0));
}

#[test]
fn initial_center_fires_at_most_once() {
    let mut ctrl = controller(6);

    assert!(ctrl.fire_initial_center().is_some());
    assert!(ctrl.fire_initial_center().is_none());
}

#[test]
fn initial_center_after_dispose_is_a_noop() {
    let mut ctrl = controller(6);
    ctrl.dispose();

    assert!(ctrl.fire_initial_center().is_none());
    assert_eq!(ctrl.offset(), 0.0);
    assert_eq!(ctrl.logical_index(), None);
    assert!(ctrl.is_disposed());
}

#[test]
fn scrolling_between_real_slots_tracks_logical_index() {
    let mut ctrl = controller(6);
    let pitch = ctrl.pitch();
    ctrl.fire_initial_center();

    for slot in 1..=6 {
        let outcome = ctrl.on_scroll(pitch * slot as f64);
        assert!(!outcome.teleported, "slot {slot} must not teleport");
        assert_eq!(outcome.logical_index, Some(slot - 1));
        assert_eq!(outcome.offset, pitch * slot as f64);
    }
}

#[test]
fn trailing_clone_teleports_to_first_real_card() {
    let mut ctrl = controller(6);
    let pitch = ctrl.pitch();
    ctrl.fire_initial_center();

    // Slot 7 is the trail clone of a 6-card deck.
    let outcome = ctrl.on_scroll(pitch * 7.0);
    assert!(outcome.teleported);
    assert_eq!(outcome.offset, pitch);
    assert_eq!(outcome.logical_index, Some(0));
    assert_eq!(ctrl.offset(), pitch);
}

#[test]
fn leading_clone_teleports_to_last_real_card() {
    let mut ctrl = controller(6);
    let pitch = ctrl.pitch();
    ctrl.fire_initial_center();

    let outcome = ctrl.on_scroll(0.0);
    assert!(outcome.teleported);
    assert_eq!(outcome.offset, pitch * 6.0);
    assert_eq!(outcome.logical_index, Some(5));
}

#[test]
fn fast_flick_overshoot_uses_the_same_rule() {
    let mut ctrl = controller(6);
    let pitch = ctrl.pitch();
    ctrl.fire_initial_center();

    // A single event can skip several slots; far past the trail clone.
    let outcome = ctrl.on_scroll(pitch * 11.0);
    assert!(outcome.teleported);
    assert_eq!(outcome.offset, pitch);
    assert_eq!(outcome.logical_index, Some(0));

    // And far past the lead clone.
    let outcome = ctrl.on_scroll(-pitch * 3.0);
    assert!(outcome.teleported);
    assert_eq!(outcome.offset, pitch * 6.0);
    assert_eq!(outcome.logical_index, Some(5));
}

#[test]
fn settle_on_a_boundary_is_corrected_and_idempotent() {
    let mut ctrl = controller(6);
    let pitch = ctrl.pitch();
    ctrl.fire_initial_center();

    // Settle lands exactly on the trail clone without a scroll tick.
    let first = ctrl.on_scroll_settle(pitch * 7.0);
    assert!(first.teleported);
    assert_eq!(first.offset, pitch);
    assert_eq!(first.logical_index, Some(0));

    // A second settle at the corrected offset changes nothing.
    let second = ctrl.on_scroll_settle(first.offset);
    assert!(!second.teleported);
    assert_eq!(second.offset, first.offset);
    assert_eq!(second.logical_index, first.logical_index);
}

#[test]
fn settle_mid_deck_publishes_the_centered_card() {
    let mut ctrl = controller(4);
    let pitch = ctrl.pitch();
    ctrl.fire_initial_center();

    let outcome = ctrl.on_scroll_settle(pitch * 3.0);
    assert!(!outcome.teleported);
    assert_eq!(outcome.logical_index, Some(2));
}

#[test]
fn single_card_deck_loops_onto_itself() {
    let mut ctrl = controller(1);
    let pitch = ctrl.pitch();
    ctrl.fire_initial_center();

    let outcome = ctrl.on_scroll(pitch * 2.0);
    assert!(outcome.teleported);
    assert_eq!(outcome.offset, pitch);
    assert_eq!(outcome.logical_index, Some(0));

    let outcome = ctrl.on_scroll(0.0);
    assert!(outcome.teleported);
    assert_eq!(outcome.offset, pitch);
    assert_eq!(outcome.logical_index, Some(0));
}

#[test]
fn empty_deck_handlers_are_noops() {
    let mut ctrl = controller(0);

    assert!(ctrl.fire_initial_center().is_none());
    let outcome = ctrl.on_scroll(123.0);
    assert!(!outcome.teleported);
    assert_eq!(outcome.logical_index, None);
    assert_eq!(outcome.offset, 0.0);

    let outcome = ctrl.on_scroll_settle(456.0);
    assert_eq!(outcome.logical_index, None);
}

#[test]
fn disposed_controller_ignores_events() {
    let mut ctrl = controller(6);
    let pitch = ctrl.pitch();
    ctrl.fire_initial_center();
    ctrl.dispose();

    let outcome = ctrl.on_scroll(pitch * 7.0);
    assert!(!outcome.teleported);
    assert_eq!(outcome.offset, pitch);
    assert_eq!(outcome.logical_index, Some(0));
}

#[test]
fn logical_index_matches_slot_minus_one_for_real_slots() {
    let pitch = LAYOUT.pitch();
    for n in 1..=8usize {
        for slot in 1..=n {
            assert_eq!(
                compute_logical_index(pitch * slot as f64, pitch, n),
                slot - 1,
                "n={n} slot={slot}"
            );
        }
    }
}

#[test]
fn logical_index_wraps_clone_slots() {
    let pitch = LAYOUT.pitch();

    // Lead clone shows the last card, trail clone the first.
    assert_eq!(compute_logical_index(0.0, pitch, 6), 5);
    assert_eq!(compute_logical_index(pitch * 7.0, pitch, 6), 0);
}

#[test]
fn logical_index_clamps_overshoot() {
    let pitch = LAYOUT.pitch();

    assert_eq!(compute_logical_index(-pitch * 40.0, pitch, 6), 5);
    assert_eq!(compute_logical_index(pitch * 40.0, pitch, 6), 0);
}
