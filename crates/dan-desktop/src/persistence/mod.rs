//! Persistence module for state serialization
//!
//! Provides snapshot export/import for the window registry and the
//! key/value stores the snapshot is written to.

mod snapshot;
mod store;

pub use snapshot::{Snapshot, STORAGE_KEY};
pub use store::{MemoryStore, SnapshotStore};
