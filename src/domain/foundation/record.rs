//! Base trait for persistable records.
//!
//! Every entity handed to the storage collaborator implements [`Record`]:
//! it exposes its primary key, the unique-index entries it claims, and
//! accepts the audit timestamps the store stamps on insert and update.
//!
//! # Unique indexes
//!
//! A record claims zero or more `(index, key)` pairs. The store must reject
//! an insert or update whose claims collide with another record's, and must
//! do so atomically with the write:
//!
//! ```ignore
//! impl Record for BreathingPattern {
//!     fn unique_keys(&self) -> Vec<UniqueKey> {
//!         vec![UniqueKey::new(PATTERN_NAME_INDEX, self.name())]
//!     }
//! }
//! ```

use std::fmt::{Debug, Display};
use std::hash::Hash;

use super::Timestamp;

/// One entry of a unique index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UniqueKey {
    pub index: &'static str,
    pub value: String,
}

impl UniqueKey {
    /// Creates a unique-index entry.
    pub fn new(index: &'static str, value: impl Into<String>) -> Self {
        Self {
            index,
            value: value.into(),
        }
    }
}

/// A record the storage collaborator can persist.
pub trait Record: Clone + Debug + Send + Sync + 'static {
    /// Primary key type.
    type Id: Copy + Eq + Hash + Debug + Display + Send + Sync + 'static;

    /// Collection name, used in logs and errors.
    const COLLECTION: &'static str;

    /// Returns the primary key.
    fn id(&self) -> Self::Id;

    /// Unique-index entries currently claimed by this record.
    fn unique_keys(&self) -> Vec<UniqueKey> {
        Vec::new()
    }

    /// Applies storage-managed audit timestamps.
    fn stamp(&mut self, created_at: Timestamp, updated_at: Timestamp);

    /// Returns when the record was first persisted, if it has been.
    fn created_at(&self) -> Option<Timestamp>;
}
