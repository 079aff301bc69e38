//! Infinite-looping card carousel core.
//!
//! # Responsibility
//! - Build the wrapped slot sequence (real cards plus sentinel clones).
//! - Own the live scroll offset and the clone-boundary teleport.
//! - Derive per-slot visual state and the wrapped logical index.
//!
//! # Invariants
//! - A deck with `N >= 1` real cards always has exactly `N + 2` slots.
//! - Sentinel clone slots are never published as the current card; any
//!   position at or past a clone is corrected in the same synchronous turn.
//! - Pitch is strictly positive whenever the deck is non-empty.

pub mod controller;
pub mod deck;
pub mod index;
pub mod nav;
pub mod pagination;
pub mod visual;

pub use controller::{CarouselError, CarouselLayout, ScrollController, ScrollOutcome};
pub use deck::{Deck, DeckError, Slot, SlotKind};
pub use index::compute_logical_index;
pub use nav::{handle_card_tap, Navigator};
pub use pagination::{dots, Dot};
pub use visual::{map_visual, VisualState};
