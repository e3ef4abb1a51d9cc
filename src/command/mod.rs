//! One module per operation. Each takes the resolved [`Config`] explicitly.
//!
//! [`Config`]: crate::config::Config

pub mod get;
pub mod list;
pub mod set;

use std::path::Path;

use tracing::{debug, warn};

use crate::state::{self, Store, StoreError};

/// Load the store, treating any failure as "no store".
///
/// Storage errors are logged, never surfaced; each command picks its own
/// fallback.
fn load_or_none(path: &Path) -> Option<Store> {
    match state::load(path) {
        Ok(store) => Some(store),
        Err(e @ StoreError::NotFound { .. }) => {
            debug!(error = %e, "no store yet");
            None
        }
        Err(e) => {
            warn!(error = ?e, "unreadable store, ignoring");
            None
        }
    }
}
