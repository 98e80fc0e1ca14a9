//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `RecordStore` - Persistence of validated records with unique indexes

mod record_store;

pub use record_store::{RecordStore, StorageError};
