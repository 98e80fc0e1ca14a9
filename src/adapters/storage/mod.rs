//! Storage Adapters
//!
//! Implementations of the `RecordStore` port.
//!
//! ## Available Adapters
//!
//! - **InMemoryRecordStore** - Stores records in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::InMemoryRecordStore;
//!
//! let patterns: InMemoryRecordStore<BreathingPattern> = InMemoryRecordStore::new();
//! ```

mod in_memory_record_store;

pub use in_memory_record_store::InMemoryRecordStore;
