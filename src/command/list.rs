use std::io::Write;

use anyhow::Result;

use crate::config::Config;

/// Print the whole store as pretty JSON, or `{}` when it can't be read.
///
/// Expired records are shown as-is; only `set` prunes.
pub fn run(config: &Config, out: &mut impl Write) -> Result<()> {
    match super::load_or_none(&config.file) {
        Some(store) => writeln!(out, "{}", serde_json::to_string_pretty(&store)?)?,
        None => writeln!(out, "{{}}")?,
    }
    Ok(())
}
