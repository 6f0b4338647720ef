// file: src/models/article.rs
// description: article record with title, content and author
// reference: internal data structures

use super::record::{Record, RecordKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    id: String,
    title: String,
    content: String,
    author_id: String,
}

impl Article {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            author_id: author_id.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn author_id(&self) -> &str {
        &self.author_id
    }
}

impl Record for Article {
    const KIND: RecordKind = RecordKind::Article;

    fn id(&self) -> &str {
        &self.id
    }

    fn owner(&self) -> Option<&str> {
        Some(&self.author_id)
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("title", self.title.clone()),
            ("content", self.content.clone()),
            ("author", self.author_id.clone()),
        ]
    }
}
