// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod article;
pub mod order;
pub mod record;
pub mod report;

pub use article::Article;
pub use order::Order;
pub use record::{Record, RecordKind};
pub use report::Report;
