//! Adapters - Implementations of port interfaces.
//!
//! - `storage` - Record store implementations (in-memory)

pub mod storage;

pub use storage::InMemoryRecordStore;
