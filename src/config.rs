//! Configuration resolved from environment overrides layered over defaults.

use std::path::PathBuf;

use crate::util::expand_tilde;

pub const DEFAULT_FILE: &str = "~/.cache/tmux-im/store.json";
pub const DEFAULT_TTL_SECS: i64 = 24 * 60 * 60;
pub const DEFAULT_IM: &str = "com.apple.keylayout.ABC";

pub const ENV_FILE: &str = "TMUX_IM_FILE";
pub const ENV_TTL: &str = "TMUX_IM_TTL";
pub const ENV_DEFAULT: &str = "TMUX_IM_DEFAULT";

/// Resolved settings consumed by every store operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Storage file, with `~` already expanded
    pub file: PathBuf,

    /// Seconds after which a record is stale; negative expires everything
    pub ttl: i64,

    /// Input method reported when no fresh record exists
    pub default_im: String,
}

impl Config {
    /// Resolve from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok(), home::home_dir())
    }

    /// Resolve from an arbitrary variable lookup.
    ///
    /// Empty values count as unset. A TTL that is not an integer is
    /// ignored and the default kept.
    pub fn from_lookup<F>(lookup: F, home: Option<PathBuf>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let file = var(ENV_FILE).unwrap_or_else(|| DEFAULT_FILE.to_string());

        let ttl = var(ENV_TTL)
            .and_then(|raw| raw.parse::<i64>().ok())
            .unwrap_or(DEFAULT_TTL_SECS);

        let default_im = var(ENV_DEFAULT).unwrap_or_else(|| DEFAULT_IM.to_string());

        Self {
            file: expand_tilde(&file, home.as_deref()),
            ttl,
            default_im,
        }
    }
}
