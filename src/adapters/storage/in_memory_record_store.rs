//! In-Memory Record Storage Adapter
//!
//! Stores records and their unique indexes in memory behind a single lock,
//! so a uniqueness check and the write it guards cannot interleave with
//! another writer.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{Record, Timestamp, UniqueKey};
use crate::ports::{RecordStore, StorageError};

#[derive(Debug)]
struct Tables<T: Record> {
    records: HashMap<T::Id, T>,
    /// index name -> key -> holder
    indexes: HashMap<&'static str, HashMap<String, T::Id>>,
}

impl<T: Record> Tables<T> {
    fn new() -> Self {
        Self {
            records: HashMap::new(),
            indexes: HashMap::new(),
        }
    }

    /// Fails on the first key held by a record other than `owner`.
    fn ensure_free(&self, keys: &[UniqueKey], owner: T::Id) -> Result<(), StorageError> {
        for key in keys {
            let holder = self
                .indexes
                .get(key.index)
                .and_then(|entries| entries.get(&key.value));
            if matches!(holder, Some(holder) if *holder != owner) {
                return Err(StorageError::DuplicateKey {
                    index: key.index.to_string(),
                    key: key.value.clone(),
                });
            }
        }
        Ok(())
    }

    fn claim(&mut self, keys: Vec<UniqueKey>, owner: T::Id) {
        for key in keys {
            self.indexes
                .entry(key.index)
                .or_default()
                .insert(key.value, owner);
        }
    }

    fn release(&mut self, keys: Vec<UniqueKey>) {
        for key in keys {
            if let Some(entries) = self.indexes.get_mut(key.index) {
                entries.remove(&key.value);
            }
        }
    }
}

/// In-memory storage for one record type
#[derive(Debug, Clone)]
pub struct InMemoryRecordStore<T: Record> {
    tables: Arc<RwLock<Tables<T>>>,
}

impl<T: Record> InMemoryRecordStore<T> {
    /// Create a new, empty store
    pub fn new() -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::new())),
        }
    }

    /// Clear all stored records and indexes (useful for tests)
    pub async fn clear(&self) {
        let mut tables = self.tables.write().await;
        tables.records.clear();
        tables.indexes.clear();
    }

    /// Get the number of stored records
    pub async fn len(&self) -> usize {
        self.tables.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl<T: Record> Default for InMemoryRecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> RecordStore<T> for InMemoryRecordStore<T> {
    async fn insert(&self, mut record: T) -> Result<T, StorageError> {
        let id = record.id();
        let keys = record.unique_keys();

        let mut tables = self.tables.write().await;
        if tables.records.contains_key(&id) {
            tracing::warn!(collection = T::COLLECTION, %id, "record id already stored");
            return Err(StorageError::DuplicateKey {
                index: format!("{}.id", T::COLLECTION),
                key: id.to_string(),
            });
        }
        if let Err(err) = tables.ensure_free(&keys, id) {
            tracing::warn!(collection = T::COLLECTION, %id, error = %err, "unique index conflict on insert");
            return Err(err);
        }

        let now = Timestamp::now();
        record.stamp(now, now);
        tables.claim(keys, id);
        tables.records.insert(id, record.clone());

        tracing::debug!(collection = T::COLLECTION, %id, "record inserted");
        Ok(record)
    }

    async fn update(&self, mut record: T) -> Result<T, StorageError> {
        let id = record.id();
        let keys = record.unique_keys();

        let mut tables = self.tables.write().await;
        let (created_at, previous_keys) = match tables.records.get(&id) {
            Some(existing) => (existing.created_at(), existing.unique_keys()),
            None => return Err(StorageError::not_found::<T>(id)),
        };
        if let Err(err) = tables.ensure_free(&keys, id) {
            tracing::warn!(collection = T::COLLECTION, %id, error = %err, "unique index conflict on update");
            return Err(err);
        }

        let now = Timestamp::now();
        record.stamp(created_at.unwrap_or(now), now);
        tables.release(previous_keys);
        tables.claim(keys, id);
        tables.records.insert(id, record.clone());

        tracing::debug!(collection = T::COLLECTION, %id, "record updated");
        Ok(record)
    }

    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, StorageError> {
        let tables = self.tables.read().await;
        Ok(tables.records.get(&id).cloned())
    }

    async fn find_by_unique(&self, index: &str, key: &str) -> Result<Option<T>, StorageError> {
        let tables = self.tables.read().await;
        Ok(tables
            .indexes
            .get(index)
            .and_then(|entries| entries.get(key))
            .and_then(|id| tables.records.get(id))
            .cloned())
    }
}
