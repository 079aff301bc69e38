//! Core domain logic for Loopdeck.
//! This crate is the single source of truth for business invariants.

pub mod carousel;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use carousel::{
    compute_logical_index, dots, handle_card_tap, map_visual, CarouselError, CarouselLayout, Deck,
    DeckError, Dot, Navigator, ScrollController, ScrollOutcome, Slot, SlotKind, VisualState,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::card::Card;
pub use model::entry::{Entry, EntryId, EntryValidationError};
pub use repo::entry_repo::{EntryRepository, RepoError, RepoResult, SqliteEntryRepository};
pub use service::journal_service::{CaptureSource, JournalService, MediaCapture};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
