//! Filesystem persistence for the record store.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

use super::types::Store;

/// Failure reading or writing the persisted store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to parse store file {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to access store file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    fn io(path: &Path, source: io::Error) -> Self {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Read and parse the store at `path`.
///
/// Reports the real failure; callers decide whether to fall back.
pub fn load(path: &Path) -> Result<Store, StoreError> {
    let content = match fs::read(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(StoreError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(e) => return Err(StoreError::io(path, e)),
    };

    // A bare `null` document decodes to an empty store.
    let store: Option<Store> =
        serde_json::from_slice(&content).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let store = store.unwrap_or_default();
    debug!(path = %path.display(), records = store.records.len(), "loaded store");
    Ok(store)
}

/// Write the store to `path`, creating the parent directory if needed.
///
/// Each writer stages into its own temp file in the target directory and
/// renames it over `path`, so readers never see a partial file. There is
/// no locking; concurrent writers race and the last rename wins.
pub fn save(path: &Path, store: &Store) -> Result<(), StoreError> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;

    let mut content = serde_json::to_string_pretty(store)
        .map_err(|e| StoreError::io(path, io::Error::from(e)))?;
    content.push('\n');

    write_atomic(dir, path, content.as_bytes())?;
    debug!(path = %path.display(), records = store.records.len(), "saved store");
    Ok(())
}

/// Write `content` to a uniquely named temp file in `dir`, then rename it
/// to `path`. The temp file is removed if anything fails.
fn write_atomic(dir: &Path, path: &Path, content: &[u8]) -> Result<(), StoreError> {
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
    tmp.write_all(content).map_err(|e| StoreError::io(tmp.path(), e))?;
    tmp.persist(path).map_err(|e| StoreError::io(path, e.error))?;
    Ok(())
}
