//! Wrapped slot sequence over a finite card list.
//!
//! # Responsibility
//! - Clone the terminal cards into sentinel slots so the first and last
//!   scroll positions visually match the opposite end of the list.
//! - Provide pure slot lookups for rendering.
//!
//! # Invariants
//! - Slot 0 mirrors the last real card, slot `N + 1` mirrors the first.
//! - Clone slot ids are prefixed and never collide with a real card id.
//! - An empty card list yields an empty deck, never an error.

use crate::model::card::Card;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Role of a slot within the wrapped sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    /// Sentinel clone of the last real card, placed before slot 1.
    LeadClone,
    /// A real card at its original position.
    Real,
    /// Sentinel clone of the first real card, placed after slot `N`.
    TrailClone,
}

/// One renderable position in the wrapped deck.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slot {
    /// Render identity; distinct from every real card id for clone slots so
    /// host-side list diffing never sees duplicate keys.
    pub slot_id: String,
    pub kind: SlotKind,
    /// Display data; clones carry a copy of the mirrored card.
    pub card: Card,
}

/// Out-of-range slot access. An impossible slot index means the offset/pitch
/// math upstream went wrong, so this is surfaced as a distinct error rather
/// than silently wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckError {
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for DeckError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "slot index {index} out of range for deck of {len} slots")
            }
        }
    }
}

impl Error for DeckError {}

/// Ordered wrapped sequence of `N + 2` slots (`0` for `N = 0`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    slots: Vec<Slot>,
}

impl Deck {
    /// Builds the wrapped sequence from the real card list.
    ///
    /// For `N >= 1` the result is `[clone(last), cards..., clone(first)]`.
    /// For `N = 0` the result is empty; a carousel with nothing to show
    /// degrades gracefully instead of failing.
    pub fn build(cards: &[Card]) -> Self {
        if cards.is_empty() {
            return Self { slots: Vec::new() };
        }

        let mut slots = Vec::with_capacity(cards.len() + 2);

        let last = cards[cards.len() - 1].clone();
        slots.push(Slot {
            slot_id: format!("pre-{}", last.id),
            kind: SlotKind::LeadClone,
            card: last,
        });

        for card in cards {
            slots.push(Slot {
                slot_id: card.id.clone(),
                kind: SlotKind::Real,
                card: card.clone(),
            });
        }

        let first = cards[0].clone();
        slots.push(Slot {
            slot_id: format!("post-{}", first.id),
            kind: SlotKind::TrailClone,
            card: first,
        });

        Self { slots }
    }

    /// Number of slots including sentinel clones.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of real cards (`len - 2`, or `0` for an empty deck).
    pub fn real_count(&self) -> usize {
        self.slots.len().saturating_sub(2)
    }

    /// All slots in render order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Pure slot lookup.
    ///
    /// # Errors
    /// - `IndexOutOfRange` when `slot_index >= len`; callers that computed
    ///   the index from a scroll offset must clamp first.
    pub fn get(&self, slot_index: usize) -> Result<&Slot, DeckError> {
        self.slots.get(slot_index).ok_or(DeckError::IndexOutOfRange {
            index: slot_index,
            len: self.slots.len(),
        })
    }

    /// Lookup that clamps transient overshoot onto the nearest slot.
    ///
    /// Debug builds assert instead, since a persistent out-of-range index
    /// indicates broken offset/pitch math rather than a fast flick.
    pub fn get_clamped(&self, slot_index: usize) -> Option<&Slot> {
        if self.slots.is_empty() {
            return None;
        }
        debug_assert!(
            slot_index < self.slots.len(),
            "slot index {slot_index} out of range for deck of {} slots",
            self.slots.len()
        );
        let clamped = slot_index.min(self.slots.len() - 1);
        self.slots.get(clamped)
    }
}
