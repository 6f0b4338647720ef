// file: src/models/record.rs
// description: record abstraction shared by every pipeline stage
// reference: internal data structures

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable value object carried through the pipeline.
///
/// Implementors expose read-only accessors; nothing in the pipeline mutates a
/// record after construction.
pub trait Record: Serialize {
    /// Lowercase type tag, used in storage keys.
    const KIND: RecordKind;

    fn id(&self) -> &str;

    /// Primary recipient of notifications, when the record carries one.
    fn owner(&self) -> Option<&str>;

    /// Named domain attributes in display order, already formatted.
    fn fields(&self) -> Vec<(&'static str, String)>;

    fn storage_key(&self) -> String {
        Self::KIND.storage_key(self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Order,
    Article,
    Report,
}

impl RecordKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Order => "order",
            RecordKind::Article => "article",
            RecordKind::Report => "report",
        }
    }

    /// Capitalized name used in human-readable output.
    pub fn display_name(&self) -> &'static str {
        match self {
            RecordKind::Order => "Order",
            RecordKind::Article => "Article",
            RecordKind::Report => "Report",
        }
    }

    pub fn storage_key(&self, id: &str) -> String {
        format!("{}_{}", self.as_str(), id)
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
