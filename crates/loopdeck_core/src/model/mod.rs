//! Domain models for the navigation hub and its journal.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep host-facing display data immutable once built.
//!
//! # Invariants
//! - Cards carry host-provided stable string ids; core never rewrites them.
//! - Journal entries are identified by a stable `EntryId` (UUID v4).

pub mod card;
pub mod entry;
