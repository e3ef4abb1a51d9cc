//! Persistent pane -> input method store.
//!
//! One JSON file holds every record. Each invocation loads it, performs a
//! single operation and, for writes, saves it back.

mod store;
pub mod types;

pub use store::{StoreError, load, save};
pub use types::Store;
