//! Raw slot index to wrapped logical index conversion.
//!
//! # Responsibility
//! - Hide sentinel clone slots from external observers (pagination dots,
//!   host reporting).
//!
//! # Invariants
//! - The result is always in `[0, n - 1]` for `n >= 1`, even when a fast
//!   flick overshoots the slot range transiently.

/// Computes the externally visible card index from a raw scroll offset.
///
/// The raw slot index `round(offset / pitch)` is clamped to `[0, n + 1]`
/// before wrapping, so momentary overshoot never produces an out-of-range
/// result. Slot 0 (lead clone) maps to `n - 1`; slot `n + 1` (trail clone)
/// maps to `0`.
///
/// Callers guarantee `n >= 1` and `pitch > 0`; an empty deck has no logical
/// index at all.
pub fn compute_logical_index(offset: f64, pitch: f64, n: usize) -> usize {
    debug_assert!(n >= 1, "logical index is undefined for an empty deck");
    debug_assert!(pitch > 0.0, "pitch must be positive");

    let raw = (offset / pitch).round();
    let slot = if raw.is_finite() {
        (raw as i64).clamp(0, n as i64 + 1)
    } else {
        0
    };
    ((slot - 1).rem_euclid(n as i64)) as usize
}
