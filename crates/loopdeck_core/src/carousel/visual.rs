//! Scroll-position-driven card visuals.
//!
//! # Responsibility
//! - Map a scroll offset and a slot index to that slot's scale and opacity.
//!
//! # Invariants
//! - Pure and deterministic; identical inputs give identical outputs, so
//!   every card can be recomputed independently on every scroll tick.
//! - Values outside the one-pitch neighbourhood are clamped, never
//!   extrapolated.

use serde::Serialize;

/// Scale of a card exactly centered under the viewport.
pub const SCALE_CENTERED: f64 = 0.9;
/// Scale of a card one full pitch away from center.
pub const SCALE_EDGE: f64 = 0.8;
/// Opacity of a centered card.
pub const OPACITY_CENTERED: f64 = 1.0;
/// Opacity of a card one full pitch away from center.
pub const OPACITY_EDGE: f64 = 0.5;

/// Per-card visual state derived from the scroll offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VisualState {
    pub scale: f64,
    pub opacity: f64,
}

/// Computes a slot's visual state for the given scroll offset.
///
/// Control points sit at `(slot - 1) * pitch`, `slot * pitch` and
/// `(slot + 1) * pitch`, mapping to scale `0.8, 0.9, 0.8` and opacity
/// `0.5, 1.0, 0.5`. Between control points values are linearly
/// interpolated; outside them they hold the edge value.
pub fn map_visual(offset: f64, slot_index: usize, pitch: f64) -> VisualState {
    if pitch <= 0.0 {
        // Only reachable for an empty deck, which renders no cards anyway.
        return VisualState {
            scale: SCALE_CENTERED,
            opacity: OPACITY_CENTERED,
        };
    }

    let center = slot_index as f64 * pitch;
    // Distance from this slot's center in pitch units, clamped to one pitch.
    let t = ((offset - center) / pitch).abs().min(1.0);

    VisualState {
        scale: SCALE_CENTERED + (SCALE_EDGE - SCALE_CENTERED) * t,
        opacity: OPACITY_CENTERED + (OPACITY_EDGE - OPACITY_CENTERED) * t,
    }
}
