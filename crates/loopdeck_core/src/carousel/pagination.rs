//! Pagination dot row derivation.
//!
//! # Responsibility
//! - Fold the published logical index into N renderable dot states.
//!
//! # Invariants
//! - Exactly one dot is active when a current index exists.
//! - An empty deck yields zero dots.

use serde::Serialize;

/// One indicator dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dot {
    pub index: usize,
    pub active: bool,
}

/// Renders the dot row for `real_count` cards.
///
/// Stateless: the caller passes the current logical index (or `None` before
/// the initial centering) and gets a fresh row back. An out-of-range
/// `current` highlights nothing rather than panicking.
pub fn dots(real_count: usize, current: Option<usize>) -> Vec<Dot> {
    (0..real_count)
        .map(|index| Dot {
            index,
            active: current == Some(index),
        })
        .collect()
}
