//! Backing stores for [`crate::ExpiringCache`].
//!
//! [`Store::Directory`] keeps one JSON file per key so entries survive process
//! restarts. Key names are percent-encoded into file names: ASCII
//! alphanumerics and `_ - .` pass through, every other byte becomes `%XX`.

use std::borrow::Cow;
use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use tokio::sync::Mutex;

use crate::error::CacheError;

const ENTRY_EXTENSION: &str = ".json";

/// Bytes escaped in file names: everything except ASCII alphanumerics and `_ - .`.
const KEY_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'_').remove(b'-').remove(b'.');

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

#[derive(Debug)]
pub enum Store {
    Directory(PathBuf),
    Memory(Mutex<HashMap<String, String>>),
}

impl Store {
    /// A durable store rooted at `path`. The directory is created lazily on
    /// the first write.
    #[must_use]
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self::Directory(path.into())
    }

    #[must_use]
    pub fn memory() -> Self {
        Self::Memory(Mutex::new(HashMap::new()))
    }

    /// Reads the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Io`] if the entry exists but cannot be read.
    pub async fn read(&self, key: &str) -> Result<Option<String>, CacheError> {
        match self {
            Self::Directory(dir) => {
                let path = entry_path(dir, key);
                match tokio::fs::read_to_string(&path).await {
                    Ok(raw) => Ok(Some(raw)),
                    Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
                    Err(e) => Err(io_error(&path, e)),
                }
            }
            Self::Memory(map) => Ok(map.lock().await.get(key).cloned()),
        }
    }

    /// Writes `value` under `key`, replacing any previous value.
    ///
    /// Directory writes go through a temporary file and a rename so readers
    /// never observe a half-written entry.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Io`] if the directory or file cannot be written.
    pub async fn write(&self, key: &str, value: String) -> Result<(), CacheError> {
        match self {
            Self::Directory(dir) => {
                tokio::fs::create_dir_all(dir)
                    .await
                    .map_err(|e| io_error(dir, e))?;
                let path = entry_path(dir, key);
                let temp = dir.join(format!(
                    "{}.tmp-{}-{}",
                    escape_key(key),
                    std::process::id(),
                    TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
                ));
                tokio::fs::write(&temp, value)
                    .await
                    .map_err(|e| io_error(&temp, e))?;
                tokio::fs::rename(&temp, &path)
                    .await
                    .map_err(|e| io_error(&path, e))
            }
            Self::Memory(map) => {
                map.lock().await.insert(key.to_owned(), value);
                Ok(())
            }
        }
    }

    /// Removes `key`. Returns `false` if it was not present.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Io`] if the entry exists but cannot be deleted.
    pub async fn remove(&self, key: &str) -> Result<bool, CacheError> {
        match self {
            Self::Directory(dir) => {
                let path = entry_path(dir, key);
                match tokio::fs::remove_file(&path).await {
                    Ok(()) => Ok(true),
                    Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
                    Err(e) => Err(io_error(&path, e)),
                }
            }
            Self::Memory(map) => Ok(map.lock().await.remove(key).is_some()),
        }
    }

    /// Lists every stored key. A directory that does not exist yet is empty.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Io`] if the directory cannot be listed.
    pub async fn keys(&self) -> Result<Vec<String>, CacheError> {
        match self {
            Self::Directory(dir) => {
                let mut entries = match tokio::fs::read_dir(dir).await {
                    Ok(entries) => entries,
                    Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
                    Err(e) => return Err(io_error(dir, e)),
                };
                let mut keys = Vec::new();
                while let Some(entry) = entries.next_entry().await.map_err(|e| io_error(dir, e))? {
                    let file_name = entry.file_name();
                    let Some(name) = file_name.to_str() else {
                        continue;
                    };
                    // Skips in-flight temp files and anything we did not write.
                    if let Some(key) = name
                        .strip_suffix(ENTRY_EXTENSION)
                        .and_then(unescape_key)
                    {
                        keys.push(key);
                    }
                }
                Ok(keys)
            }
            Self::Memory(map) => Ok(map.lock().await.keys().cloned().collect()),
        }
    }
}

fn entry_path(dir: &Path, key: &str) -> PathBuf {
    dir.join(format!("{}{ENTRY_EXTENSION}", escape_key(key)))
}

fn io_error(path: &Path, source: std::io::Error) -> CacheError {
    CacheError::Io {
        context: path.display().to_string(),
        source,
    }
}

pub(crate) fn escape_key(key: &str) -> String {
    utf8_percent_encode(key, KEY_SET).to_string()
}

pub(crate) fn unescape_key(name: &str) -> Option<String> {
    percent_decode_str(name)
        .decode_utf8()
        .ok()
        .map(Cow::into_owned)
}
