// file: src/validator/mod.rs
// description: business-rule validators, one per record kind
// reference: internal module structure

mod article;
mod order;
mod report;

pub use article::ArticleValidator;
pub use order::OrderValidator;
pub use report::ReportValidator;

/// Title bound applied when the configuration does not override it.
pub const DEFAULT_MAX_TITLE_CHARS: usize = 100;
