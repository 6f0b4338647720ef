// file: src/storage/file.rs
// description: filesystem backend writing one text file per key
// reference: https://doc.rust-lang.org/std/fs/fn.write.html

use crate::error::{PipelineError, Result};
use crate::storage::kv::KeyValueStore;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::debug;

const FILE_EXTENSION: &str = "txt";

/// Stores each key as `<directory>/<encoded key>.txt`.
///
/// Keys are percent-encoded, so no key can address a path outside the
/// directory and distinct keys never share a file.
#[derive(Debug, Clone)]
pub struct FileStore {
    directory: PathBuf,
}

impl FileStore {
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let file_name = encode_key(key)?;
        Ok(self
            .directory
            .join(format!("{}.{}", file_name, FILE_EXTENSION)))
    }
}

/// Percent-encodes every byte outside `[A-Za-z0-9._-]`, `%` included.
fn encode_key(key: &str) -> Result<String> {
    if key.is_empty() || key.chars().all(|c| c == '.') {
        return Err(PipelineError::InvalidKey(key.to_string()));
    }

    let mut encoded = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'.' | b'_' | b'-') {
            encoded.push(byte as char);
        } else {
            encoded.push_str(&format!("%{:02X}", byte));
        }
    }
    Ok(encoded)
}

/// Inverse of `encode_key`; `None` for names this store did not write.
fn decode_key(file_stem: &str) -> Option<String> {
    let bytes = file_stem.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = file_stem.get(i + 1..i + 3)?;
            decoded.push(u8::from_str_radix(hex, 16).ok()?);
            i += 3;
        } else {
            decoded.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(decoded).ok()
}

impl KeyValueStore for FileStore {
    fn put(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let storage_err = |source| PipelineError::Storage {
            key: key.to_string(),
            source,
        };

        fs::create_dir_all(&self.directory).map_err(storage_err)?;
        fs::write(&path, value).map_err(storage_err)?;

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(PipelineError::Storage {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn keys(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.directory) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut keys = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(FILE_EXTENSION) {
                continue;
            }
            if let Some(key) = path
                .file_stem()
                .and_then(|s| s.to_str())
                .and_then(decode_key)
            {
                keys.push(key);
            }
        }
        keys.sort();
        Ok(keys)
    }
}
