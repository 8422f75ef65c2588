//! Schema-driven manager for one bounded record collection.
//!
//! # Responsibility
//! - Produce staged records with fresh identifiers.
//! - Apply single-field edits to staged records.
//! - Gate commits on capacity, required fields and identifier uniqueness.
//!
//! # Invariants
//! - Every operation is pure over its inputs: callers own the collection and
//!   receive a new `Vec` on success.
//! - A rejected commit leaves the caller's collection untouched.
//! - Whitespace-only values count as blank for required checks.
//! - The cap never exceeds `MAX_ENTRIES`, whatever the caller requests.

use crate::model::record::{EntryFieldError, EntryId, EntryRecord};
use crate::model::schema::RecordSchema;
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Maximum number of entries per history collection.
pub const MAX_ENTRIES: usize = 20;

/// Reason a staged record was not appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitRejection {
    /// Collection already holds `max_entries` records.
    CapacityReached { max_entries: usize },
    /// Required schema keys that are still blank.
    MissingRequired(Vec<&'static str>),
    /// Collection already contains a record with this identifier.
    DuplicateId(EntryId),
}

impl Display for CommitRejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CapacityReached { max_entries } => {
                write!(f, "collection is full ({max_entries} entries)")
            }
            Self::MissingRequired(keys) => {
                write!(f, "required fields are empty: {}", keys.join(", "))
            }
            Self::DuplicateId(id) => write!(f, "entry id already exists: {id}"),
        }
    }
}

impl Error for CommitRejection {}

/// Generic manager for one history collection, parameterized by schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryCollectionManager {
    schema: RecordSchema,
    max_entries: usize,
}

impl EntryCollectionManager {
    /// Creates a manager with the default cap of `MAX_ENTRIES`.
    pub fn new(schema: RecordSchema) -> Self {
        Self::with_max_entries(schema, MAX_ENTRIES)
    }

    /// Creates a manager with a cap clamped to `1..=MAX_ENTRIES`.
    pub fn with_max_entries(schema: RecordSchema, max_entries: usize) -> Self {
        Self {
            schema,
            max_entries: max_entries.clamp(1, MAX_ENTRIES),
        }
    }

    pub fn schema(&self) -> &RecordSchema {
        &self.schema
    }

    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Stages a new record with a freshly allocated identifier.
    ///
    /// The record is not part of any collection until `commit` accepts it.
    pub fn stage_new<T, F>(&self, factory: F) -> T
    where
        T: EntryRecord,
        F: FnOnce(EntryId) -> T,
    {
        self.stage_with_id(Uuid::new_v4(), factory)
    }

    /// Stages a new record with a caller-provided identifier.
    ///
    /// Uniqueness is still checked on `commit`.
    pub fn stage_with_id<T, F>(&self, id: EntryId, factory: F) -> T
    where
        T: EntryRecord,
        F: FnOnce(EntryId) -> T,
    {
        factory(id)
    }

    /// Returns `staged` with one field replaced.
    ///
    /// # Errors
    /// - `EntryFieldError::UnknownField` when `key` is not declared by the
    ///   schema or not supported by the record shape.
    pub fn set_staged_field<T: EntryRecord>(
        &self,
        mut staged: T,
        key: &str,
        value: impl Into<String>,
    ) -> Result<T, EntryFieldError> {
        if self.schema.field(key).is_none() {
            return Err(EntryFieldError::UnknownField {
                record: self.schema.title,
                key: key.to_string(),
            });
        }
        staged.set_field(key, value.into())?;
        Ok(staged)
    }

    /// Required keys whose value is missing or blank, in schema order.
    pub fn missing_required<T: EntryRecord>(&self, staged: &T) -> Vec<&'static str> {
        self.schema
            .required_keys()
            .filter(|key| {
                staged
                    .field(key)
                    .map_or(true, |value| value.trim().is_empty())
            })
            .collect()
    }

    /// True when every required field is non-blank.
    pub fn is_complete<T: EntryRecord>(&self, staged: &T) -> bool {
        self.missing_required(staged).is_empty()
    }

    /// Whether `collection` still has room for another entry.
    pub fn can_add<T>(&self, collection: &[T]) -> bool {
        collection.len() < self.max_entries
    }

    /// Appends `staged` to a copy of `collection`.
    ///
    /// # Errors
    /// - `CapacityReached` when the collection is already full.
    /// - `MissingRequired` when any required field is blank.
    /// - `DuplicateId` when the staged identifier is already present.
    pub fn commit<T: EntryRecord>(
        &self,
        collection: &[T],
        staged: T,
    ) -> Result<Vec<T>, CommitRejection> {
        if !self.can_add(collection) {
            debug!(
                "event=entry_commit module=entry status=rejected schema={} reason=capacity len={}",
                self.schema.title,
                collection.len()
            );
            return Err(CommitRejection::CapacityReached {
                max_entries: self.max_entries,
            });
        }

        let missing = self.missing_required(&staged);
        if !missing.is_empty() {
            debug!(
                "event=entry_commit module=entry status=rejected schema={} reason=missing_required keys={}",
                self.schema.title,
                missing.join(",")
            );
            return Err(CommitRejection::MissingRequired(missing));
        }

        let id = staged.id();
        if collection.iter().any(|entry| entry.id() == id) {
            debug!(
                "event=entry_commit module=entry status=rejected schema={} reason=duplicate_id id={}",
                self.schema.title, id
            );
            return Err(CommitRejection::DuplicateId(id));
        }

        let mut next = Vec::with_capacity(collection.len() + 1);
        next.extend_from_slice(collection);
        next.push(staged);
        debug!(
            "event=entry_commit module=entry status=ok schema={} id={} len={}",
            self.schema.title,
            id,
            next.len()
        );
        Ok(next)
    }

    /// Returns a copy of `collection` without the record `id`.
    ///
    /// Unknown ids are a no-op.
    pub fn remove<T: EntryRecord>(&self, collection: &[T], id: EntryId) -> Vec<T> {
        let next: Vec<T> = collection
            .iter()
            .filter(|entry| entry.id() != id)
            .cloned()
            .collect();
        debug!(
            "event=entry_remove module=entry status=ok schema={} id={} removed={}",
            self.schema.title,
            id,
            collection.len() - next.len()
        );
        next
    }
}

#[cfg(test)]
mod tests {
    use super::{CommitRejection, EntryCollectionManager, MAX_ENTRIES};
    use crate::model::record::{
        Education, EntryFieldError, Qualification, WorkHistory, ONGOING_END_DATE,
    };
    use crate::model::schema::RecordSchema;

    fn complete_qualification(manager: &EntryCollectionManager, name: &str) -> Qualification {
        let staged = manager.stage_new(Qualification::blank);
        let staged = manager
            .set_staged_field(staged, "qualificationName", name)
            .expect("qualificationName declared");
        manager
            .set_staged_field(staged, "acquisitionDate", "2020-04")
            .expect("acquisitionDate declared")
    }

    #[test]
    fn staged_records_get_distinct_ids() {
        let manager = EntryCollectionManager::new(RecordSchema::education());
        let first = manager.stage_new(Education::blank);
        let second = manager.stage_new(Education::blank);
        assert_ne!(first.id, second.id);
        assert!(!first.id.is_nil());
    }

    #[test]
    fn whitespace_only_required_field_is_incomplete() {
        let manager = EntryCollectionManager::new(RecordSchema::qualification());
        let staged = complete_qualification(&manager, "   ");
        assert!(!manager.is_complete(&staged));
        assert_eq!(manager.missing_required(&staged), vec!["qualificationName"]);
    }

    #[test]
    fn work_history_requires_department_and_position() {
        let manager = EntryCollectionManager::new(RecordSchema::work_history());
        let mut staged = manager.stage_new(WorkHistory::blank);
        for (key, value) in [
            ("companyName", "株式会社サンプル"),
            ("startDate", "2020-04"),
            ("endDate", ONGOING_END_DATE),
        ] {
            staged = manager
                .set_staged_field(staged, key, value)
                .expect("declared key");
        }

        assert!(!manager.is_complete(&staged));
        let err = manager
            .commit(&[], staged.clone())
            .expect_err("department and position are blank");
        assert_eq!(
            err,
            CommitRejection::MissingRequired(vec!["department", "position"])
        );

        let staged = manager
            .set_staged_field(staged, "department", "開発部")
            .expect("declared key");
        let staged = manager
            .set_staged_field(staged, "position", "主任")
            .expect("declared key");
        let committed = manager.commit(&[], staged).expect("commit accepted");
        assert_eq!(committed[0].department, "開発部");
    }

    #[test]
    fn education_department_stays_optional() {
        let manager = EntryCollectionManager::new(RecordSchema::education());
        let mut staged = manager.stage_new(Education::blank);
        for (key, value) in [
            ("schoolName", "○○大学"),
            ("startDate", "2016-04"),
            ("endDate", "2020-03"),
        ] {
            staged = manager
                .set_staged_field(staged, key, value)
                .expect("declared key");
        }
        let committed = manager.commit(&[], staged).expect("commit accepted");
        assert_eq!(committed[0].department, None);
    }

    #[test]
    fn commit_rejects_when_full() {
        let manager = EntryCollectionManager::with_max_entries(RecordSchema::qualification(), 2);
        let mut collection: Vec<Qualification> = Vec::new();
        for name in ["a", "b"] {
            let staged = complete_qualification(&manager, name);
            collection = manager.commit(&collection, staged).expect("room left");
        }

        let extra = complete_qualification(&manager, "c");
        let err = manager
            .commit(&collection, extra)
            .expect_err("third commit must be rejected");
        assert_eq!(err, CommitRejection::CapacityReached { max_entries: 2 });
        assert_eq!(collection.len(), 2);
    }

    #[test]
    fn commit_rejects_duplicate_id() {
        let manager = EntryCollectionManager::new(RecordSchema::qualification());
        let staged = complete_qualification(&manager, "簿記2級");
        let duplicate = staged.clone();
        let collection = manager.commit(&[], staged).expect("first commit");

        let err = manager
            .commit(&collection, duplicate.clone())
            .expect_err("same id must be rejected");
        assert_eq!(err, CommitRejection::DuplicateId(duplicate.id));
    }

    #[test]
    fn set_staged_field_rejects_keys_outside_schema() {
        let manager = EntryCollectionManager::new(RecordSchema::qualification());
        let staged = manager.stage_new(Qualification::blank);
        let err = manager
            .set_staged_field(staged, "id", "x")
            .expect_err("id is not an editable field");
        assert!(matches!(err, EntryFieldError::UnknownField { .. }));
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let manager = EntryCollectionManager::new(RecordSchema::qualification());
        let staged = complete_qualification(&manager, "TOEIC");
        let collection = manager.commit(&[], staged).expect("commit");
        let stranger = manager.stage_new(Qualification::blank);

        let after = manager.remove(&collection, stranger.id);
        assert_eq!(after, collection);
    }

    #[test]
    fn default_cap_is_twenty() {
        let manager = EntryCollectionManager::new(RecordSchema::education());
        assert_eq!(manager.max_entries(), MAX_ENTRIES);
        assert_eq!(MAX_ENTRIES, 20);
    }
}
