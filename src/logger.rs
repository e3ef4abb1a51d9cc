//! Opt-in file logging.
//!
//! stdout belongs to the calling script and stderr to the `error:` line, so
//! nothing is logged unless `TMUX_IM_LOG` holds a filter directive such as
//! `debug` or `tmux_im=debug`. Events are appended to `tmux-im.log` beside
//! the store file.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

pub const ENV_LOG: &str = "TMUX_IM_LOG";
const LOG_FILE_NAME: &str = "tmux-im.log";

/// Install the global subscriber for `directive` (the value of
/// `TMUX_IM_LOG`).
///
/// Returns Ok(false) when logging stays disabled. An invalid directive is
/// rejected before any log file is created.
pub fn init(store_file: &Path, directive: Option<&str>) -> Result<bool> {
    let Some(directive) = directive.filter(|v| !v.is_empty()) else {
        return Ok(false);
    };

    let filter = EnvFilter::try_new(directive)
        .with_context(|| format!("invalid {} directive '{}'", ENV_LOG, directive))?;

    let dir = log_dir(store_file);
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(LOG_FILE_NAME)
        .build(dir)
        .with_context(|| format!("failed to open log file in {}", dir.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(appender)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install log subscriber: {e}"))?;

    Ok(true)
}

/// Directory the log file lives in: the store's parent, or `.`.
fn log_dir(store_file: &Path) -> &Path {
    store_file
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_dir_uses_store_parent() {
        assert_eq!(
            log_dir(Path::new("/home/user/.cache/tmux-im/store.json")),
            Path::new("/home/user/.cache/tmux-im")
        );
    }

    #[test]
    fn test_unset_directive_disables_logging() {
        let dir = tempfile::TempDir::new().unwrap();
        let store_file = dir.path().join("store.json");

        assert!(!init(&store_file, None).unwrap());
        assert!(!init(&store_file, Some("")).unwrap());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_invalid_directive_rejected_without_log_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let store_file = dir.path().join("store.json");

        assert!(init(&store_file, Some("tmux_im=notalevel")).is_err());
        assert!(!dir.path().join(LOG_FILE_NAME).exists());
    }

    #[test]
    fn test_log_dir_for_bare_filename() {
        assert_eq!(log_dir(Path::new("store.json")), Path::new("."));
    }
}
