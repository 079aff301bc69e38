//! Journal entry domain model.
//!
//! # Responsibility
//! - Define the canonical record for timestamped journal entries.
//! - Provide validation for write paths before persistence.
//!
//! # Invariants
//! - `uuid` is stable and never reused for another entry.
//! - An entry must carry text or an image; both empty is rejected.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a journal entry.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EntryId = Uuid;

/// Validation failures for journal entry writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryValidationError {
    /// The nil UUID is reserved and never a valid entry id.
    NilUuid,
    /// Neither text nor image present; there is nothing to store.
    EmptyEntry,
    /// An image reference was supplied but is blank after trimming.
    BlankImageRef,
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilUuid => write!(f, "entry uuid must not be nil"),
            Self::EmptyEntry => write!(f, "entry needs text or an image"),
            Self::BlankImageRef => write!(f, "entry image reference must not be blank"),
        }
    }
}

impl Error for EntryValidationError {}

/// Canonical journal entry record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Stable global ID used for listing and deletion.
    pub uuid: EntryId,
    /// Free-form entry body; may be empty when an image is attached.
    pub text: String,
    /// Creation time in Unix epoch milliseconds, chosen by the caller.
    pub created_at: i64,
    /// Optional image URI captured from camera or picked from the library.
    pub image: Option<String>,
}

impl Entry {
    /// Creates an entry with a generated stable ID.
    pub fn new(text: impl Into<String>, created_at: i64) -> Self {
        Self::with_id(Uuid::new_v4(), text, created_at)
    }

    /// Creates an entry with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(uuid: EntryId, text: impl Into<String>, created_at: i64) -> Self {
        Self {
            uuid,
            text: text.into(),
            created_at,
            image: None,
        }
    }

    /// Attaches an image reference; consumes and returns the entry.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Checks write-path invariants.
    ///
    /// # Errors
    /// - `NilUuid` when the id is the nil UUID.
    /// - `EmptyEntry` when both text and image are missing.
    /// - `BlankImageRef` when an image is present but blank.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.uuid.is_nil() {
            return Err(EntryValidationError::NilUuid);
        }
        let has_text = !self.text.trim().is_empty();
        let has_image = match self.image.as_deref() {
            Some(image) if image.trim().is_empty() => {
                return Err(EntryValidationError::BlankImageRef);
            }
            Some(_) => true,
            None => false,
        };
        if !has_text && !has_image {
            return Err(EntryValidationError::EmptyEntry);
        }
        Ok(())
    }
}
