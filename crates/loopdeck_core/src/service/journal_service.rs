//! Journal use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for the journal screen's flows.
//! - Delegate persistence to repository implementations.
//! - Define the capture seam for camera/gallery collaborators.
//!
//! # Invariants
//! - Service APIs never bypass repository validation contracts.
//! - Service layer remains storage-agnostic.

use crate::model::entry::{Entry, EntryId};
use crate::repo::entry_repo::{EntryRepository, RepoResult};
use log::info;

/// Capability shape of the host media collaborators. Actual camera and
/// gallery control live in the host UI; core only consumes the resulting
/// URI, or `None` when the user cancelled.
pub trait MediaCapture {
    fn pick_from_library(&mut self) -> Option<String>;
    fn capture_from_camera(&mut self) -> Option<String>;
}

/// Which media collaborator an entry flow should consult.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureSource {
    Library,
    Camera,
}

/// Use-case service wrapper for journal entry flows.
pub struct JournalService<R: EntryRepository> {
    repo: R,
}

impl<R: EntryRepository> JournalService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Creates an entry from the compose flow.
    ///
    /// Text is trimmed before storage; repository validation rejects the
    /// case where both text and image are missing.
    pub fn create_entry(
        &self,
        text: &str,
        image: Option<String>,
        created_at_ms: i64,
    ) -> RepoResult<EntryId> {
        let mut entry = Entry::new(text.trim(), created_at_ms);
        entry.image = image;
        let id = self.repo.create_entry(&entry)?;
        info!("event=entry_created module=journal status=ok entry_id={id}");
        Ok(id)
    }

    /// Creates an entry whose image comes from a media collaborator.
    ///
    /// When the user cancels the capture the entry is still created with
    /// text only, mirroring the host compose flow.
    pub fn create_captured_entry(
        &self,
        text: &str,
        media: &mut dyn MediaCapture,
        source: CaptureSource,
        created_at_ms: i64,
    ) -> RepoResult<EntryId> {
        let image = match source {
            CaptureSource::Library => media.pick_from_library(),
            CaptureSource::Camera => media.capture_from_camera(),
        };
        self.create_entry(text, image, created_at_ms)
    }

    /// Gets one entry by stable ID.
    pub fn get_entry(&self, id: EntryId) -> RepoResult<Option<Entry>> {
        self.repo.get_entry(id)
    }

    /// Loads entries newest first for the journal list.
    pub fn load_entries(&self, limit: Option<u32>) -> RepoResult<Vec<Entry>> {
        self.repo.list_entries(limit)
    }

    /// Deletes an entry permanently by stable ID.
    pub fn delete_entry(&self, id: EntryId) -> RepoResult<()> {
        self.repo.delete_entry(id)?;
        info!("event=entry_deleted module=journal status=ok entry_id={id}");
        Ok(())
    }
}
