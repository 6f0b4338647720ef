// file: src/storage/record_store.rs
// description: store capability that serializes records into a key-value backend
// reference: https://docs.rs/serde_json

use crate::error::Result;
use crate::models::{Record, RecordKind};
use crate::pipeline::Store;
use crate::storage::kv::KeyValueStore;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageFormat {
    /// `<Kind> <id> | <field>: <value> | ...`
    #[default]
    Line,
    Json,
}

impl StorageFormat {
    pub fn render<R: Record>(&self, record: &R) -> Result<String> {
        match self {
            StorageFormat::Line => Ok(format_line(record)),
            StorageFormat::Json => Ok(serde_json::to_string_pretty(record)?),
        }
    }
}

fn format_line<R: Record>(record: &R) -> String {
    let mut line = format!("{} {}", R::KIND, record.id());
    for (name, value) in record.fields() {
        line.push_str(" | ");
        line.push_str(name);
        line.push_str(": ");
        line.push_str(&value.replace(['\n', '\r'], " "));
    }
    line
}

/// Persists any record into a borrowed key-value backend.
pub struct RecordStore<'a, S: KeyValueStore + ?Sized> {
    backend: &'a S,
    format: StorageFormat,
}

impl<'a, S: KeyValueStore + ?Sized> RecordStore<'a, S> {
    pub fn new(backend: &'a S, format: StorageFormat) -> Self {
        Self { backend, format }
    }

    pub fn format(&self) -> StorageFormat {
        self.format
    }

    /// Raw stored text for an identity, if any.
    pub fn load(&self, kind: RecordKind, id: &str) -> Result<Option<String>> {
        self.backend.get(&kind.storage_key(id))
    }
}

impl<R: Record, S: KeyValueStore + ?Sized> Store<R> for RecordStore<'_, S> {
    fn persist(&self, record: &R) -> Result<()> {
        let key = record.storage_key();
        let content = self.format.render(record)?;
        self.backend.put(&key, &content)?;

        info!("{} saved to: {}", R::KIND, key);
        Ok(())
    }
}
