use loopdeck_core::{map_visual, VisualState};

const PITCH: f64 = 200.0;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn centered_slot_is_full_size_and_opaque() {
    for slot in 0..8usize {
        let visual = map_visual(slot as f64 * PITCH, slot, PITCH);
        assert_eq!(
            visual,
            VisualState {
                scale: 0.9,
                opacity: 1.0
            },
            "slot {slot}"
        );
    }
}

#[test]
fn one_pitch_away_is_the_edge_state() {
    let visual = map_visual(2.0 * PITCH, 3, PITCH);
    assert_eq!(visual.scale, 0.8);
    assert_eq!(visual.opacity, 0.5);

    let visual = map_visual(4.0 * PITCH, 3, PITCH);
    assert_eq!(visual.scale, 0.8);
    assert_eq!(visual.opacity, 0.5);
}

#[test]
fn halfway_between_control_points_interpolates_linearly() {
    let visual = map_visual(3.5 * PITCH, 3, PITCH);
    assert_close(visual.scale, 0.85);
    assert_close(visual.opacity, 0.75);

    let visual = map_visual(2.5 * PITCH, 3, PITCH);
    assert_close(visual.scale, 0.85);
    assert_close(visual.opacity, 0.75);
}

#[test]
fn far_offsets_clamp_instead_of_extrapolating() {
    let far_right = map_visual(50.0 * PITCH, 3, PITCH);
    assert_eq!(far_right.scale, 0.8);
    assert_eq!(far_right.opacity, 0.5);

    let far_left = map_visual(-50.0 * PITCH, 3, PITCH);
    assert_eq!(far_left.scale, 0.8);
    assert_eq!(far_left.opacity, 0.5);
}

#[test]
fn mapping_is_deterministic() {
    let offset = 2.37 * PITCH;
    assert_eq!(map_visual(offset, 2, PITCH), map_visual(offset, 2, PITCH));
}
