// file: src/models/report.rs
// description: report record; identity is generated when the caller has none
// reference: https://docs.rs/uuid

use super::record::{Record, RecordKind};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    #[serde(default = "generate_id")]
    id: String,
    title: String,
    content: String,
}

fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

impl Report {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self::with_id(generate_id(), title, content)
    }

    pub fn with_id(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl Record for Report {
    const KIND: RecordKind = RecordKind::Report;

    fn id(&self) -> &str {
        &self.id
    }

    // Reports are addressed by the notifier, not by the record.
    fn owner(&self) -> Option<&str> {
        None
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.clone()),
            ("content", self.content.clone()),
        ]
    }
}
