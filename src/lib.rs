// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod models;
pub mod notifier;
pub mod pipeline;
pub mod storage;
pub mod utils;
pub mod validator;

pub use config::{Config, NotificationConfig, StorageConfig, ValidationConfig};
pub use error::{PipelineError, Result, Violation};
pub use models::{Article, Order, Record, RecordKind, Report};
pub use notifier::{ConsoleNotifier, EmailNotifier, NotifierChain, PublishLog};
pub use pipeline::{Notifier, Outcome, Pipeline, PipelineStats, ProgressTracker, Store, Validator};
pub use storage::{FileStore, KeyValueStore, MemoryStore, RecordStore, StorageFormat};
pub use utils::Rules;
pub use validator::{ArticleValidator, OrderValidator, ReportValidator};
