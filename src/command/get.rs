use std::io::Write;

use anyhow::Result;

use crate::config::Config;

/// Print the stored input method for `pane_key`, or the configured default
/// when the store is unreadable or the record is missing or expired.
pub fn run(config: &Config, pane_key: &str, now: u64, out: &mut impl Write) -> Result<()> {
    let store = super::load_or_none(&config.file);
    let im = store
        .as_ref()
        .and_then(|store| store.get(pane_key, config.ttl, now))
        .unwrap_or(config.default_im.as_str());

    writeln!(out, "{}", im)?;
    Ok(())
}
