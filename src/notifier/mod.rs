// file: src/notifier/mod.rs
// description: notifier module exports
// reference: internal module structure

mod chain;
mod console;
mod email;
mod publish_log;

pub use chain::NotifierChain;
pub use console::ConsoleNotifier;
pub use email::EmailNotifier;
pub use publish_log::PublishLog;

use crate::error::PipelineError;

pub(crate) fn write_failed(channel: &str, err: std::io::Error) -> PipelineError {
    PipelineError::Notification(format!("{} write failed: {}", channel, err))
}
