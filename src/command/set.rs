use anyhow::{Context, Result};
use tracing::debug;

use crate::config::Config;
use crate::state;

/// Record `im` for `pane_key` at `now` and persist the store.
///
/// Expired records are dropped on the way. An unreadable store is replaced
/// by a fresh one; only the save can fail.
pub fn run(config: &Config, pane_key: &str, im: &str, now: u64) -> Result<()> {
    let mut store = super::load_or_none(&config.file).unwrap_or_default();

    let pruned = store.set(pane_key, im, config.ttl, now);
    if pruned > 0 {
        debug!(pruned, "dropped expired records");
    }

    state::save(&config.file, &store).context("failed to save input method")?;
    debug!(pane_key, im, "stored input method");
    Ok(())
}
