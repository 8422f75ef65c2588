//! Add/remove form for one history collection.
//!
//! Keeps one staged record alive while the user types, commits it into the
//! caller's collection, then stages a fresh one.

use crate::entry::collection::{CommitRejection, EntryCollectionManager};
use crate::model::record::{
    Education, EntryFieldError, EntryId, EntryRecord, Qualification, WorkHistory,
};
use crate::model::schema::RecordSchema;

/// Staged-entry form bound to one record shape.
#[derive(Debug, Clone)]
pub struct EntryForm<T: EntryRecord> {
    manager: EntryCollectionManager,
    factory: fn(EntryId) -> T,
    staged: T,
}

impl EntryForm<Education> {
    pub fn educations(max_entries: usize) -> Self {
        Self::new(
            EntryCollectionManager::with_max_entries(RecordSchema::education(), max_entries),
            Education::blank,
        )
    }
}

impl EntryForm<WorkHistory> {
    pub fn work_histories(max_entries: usize) -> Self {
        Self::new(
            EntryCollectionManager::with_max_entries(RecordSchema::work_history(), max_entries),
            WorkHistory::blank,
        )
    }
}

impl EntryForm<Qualification> {
    pub fn qualifications(max_entries: usize) -> Self {
        Self::new(
            EntryCollectionManager::with_max_entries(RecordSchema::qualification(), max_entries),
            Qualification::blank,
        )
    }
}

impl<T: EntryRecord> EntryForm<T> {
    pub fn new(manager: EntryCollectionManager, factory: fn(EntryId) -> T) -> Self {
        let staged = manager.stage_new(factory);
        Self {
            manager,
            factory,
            staged,
        }
    }

    pub fn manager(&self) -> &EntryCollectionManager {
        &self.manager
    }

    pub fn staged(&self) -> &T {
        &self.staged
    }

    /// Edits one field of the staged record.
    pub fn set_field(&mut self, key: &str, value: impl Into<String>) -> Result<(), EntryFieldError> {
        let staged = self.manager.set_staged_field(self.staged.clone(), key, value)?;
        self.staged = staged;
        Ok(())
    }

    /// Whether the add button should be enabled.
    pub fn is_valid(&self) -> bool {
        self.manager.is_complete(&self.staged)
    }

    /// Whether the add form should be shown at all.
    pub fn can_add(&self, entries: &[T]) -> bool {
        self.manager.can_add(entries)
    }

    /// Commits the staged record into `entries` and stages a fresh one.
    ///
    /// On rejection the staged record is kept so the user can fix it.
    pub fn add(&mut self, entries: &[T]) -> Result<Vec<T>, CommitRejection> {
        let next = self.manager.commit(entries, self.staged.clone())?;
        self.staged = self.manager.stage_new(self.factory);
        Ok(next)
    }

    /// Removes `id` from `entries`; unknown ids are a no-op.
    pub fn remove(&self, entries: &[T], id: EntryId) -> Vec<T> {
        self.manager.remove(entries, id)
    }
}
