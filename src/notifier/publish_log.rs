// file: src/notifier/publish_log.rs
// description: timestamped publish event emitted through tracing
// reference: https://docs.rs/chrono

use crate::error::Result;
use crate::models::Record;
use crate::pipeline::Notifier;
use chrono::{DateTime, SecondsFormat, Utc};
use tracing::info;

#[derive(Debug, Clone, Copy, Default)]
pub struct PublishLog;

impl PublishLog {
    pub fn new() -> Self {
        Self
    }

    pub fn entry<R: Record>(record: &R, at: DateTime<Utc>) -> String {
        let mut entry = format!(
            "Published at {} - {} {}",
            at.to_rfc3339_opts(SecondsFormat::Secs, true),
            R::KIND,
            record.id()
        );
        if let Some(owner) = record.owner() {
            entry.push_str(" by ");
            entry.push_str(owner);
        }
        entry
    }
}

impl<R: Record> Notifier<R> for PublishLog {
    fn notify(&self, record: &R) -> Result<()> {
        let entry = Self::entry(record, Utc::now());
        info!(
            kind = R::KIND.as_str(),
            id = record.id(),
            owner = record.owner(),
            "{}",
            entry
        );
        Ok(())
    }
}
