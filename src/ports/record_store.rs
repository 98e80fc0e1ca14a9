//! Record Store Port - Interface for persisting validated entities.
//!
//! The store owns the `created_at`/`updated_at` stamps and enforces every
//! unique index declared by [`Record::unique_keys`]. A unique check and the
//! write it guards are one atomic step.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::foundation::Record;

/// Errors that can occur during record storage operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Duplicate key '{key}' on index {index}")]
    DuplicateKey { index: String, key: String },

    #[error("{collection} record not found: {id}")]
    NotFound { collection: String, id: String },

    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

impl StorageError {
    /// Builds a `NotFound` error for a record id of type `T`.
    pub fn not_found<T: Record>(id: T::Id) -> Self {
        StorageError::NotFound {
            collection: T::COLLECTION.to_string(),
            id: id.to_string(),
        }
    }
}

/// Port for persisting and loading one kind of record
#[async_trait]
pub trait RecordStore<T: Record>: Send + Sync {
    /// Insert a new record, stamping both timestamps.
    ///
    /// # Errors
    /// Returns `StorageError::DuplicateKey` if any unique key is already held
    /// by another record; nothing is written in that case.
    async fn insert(&self, record: T) -> Result<T, StorageError>;

    /// Replace an existing record, refreshing `updated_at`.
    ///
    /// Unique keys the record no longer declares are released. The write
    /// replaces whatever is stored (last write wins); two concurrent updates
    /// built from the same read may both succeed, the later one overwriting
    /// the earlier.
    ///
    /// # Errors
    /// Returns `StorageError::NotFound` if the record was never inserted
    async fn update(&self, record: T) -> Result<T, StorageError>;

    /// Find a record by id
    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, StorageError>;

    /// Find the record currently holding `key` on `index`
    async fn find_by_unique(&self, index: &str, key: &str) -> Result<Option<T>, StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::breathing::BreathingPattern;
    use crate::domain::foundation::PatternId;

    #[test]
    fn record_store_is_object_safe() {
        fn _accepts(_store: &dyn RecordStore<BreathingPattern>) {}
    }

    #[test]
    fn not_found_names_collection_and_id() {
        let id = PatternId::new();
        let err = StorageError::not_found::<BreathingPattern>(id);
        assert_eq!(
            err.to_string(),
            format!("breathing_patterns record not found: {}", id)
        );
    }

    #[test]
    fn duplicate_key_display() {
        let err = StorageError::DuplicateKey {
            index: "breathing_patterns.name".to_string(),
            key: "Box".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Duplicate key 'Box' on index breathing_patterns.name"
        );
    }
}
