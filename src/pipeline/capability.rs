// file: src/pipeline/capability.rs
// description: single-method stage contracts consumed by the coordinator
// reference: pluggable pipeline stages

use crate::error::{Result, Violation};

/// Decides whether a record may enter the pipeline.
///
/// Implementations must be pure: no I/O, no mutation of the record.
pub trait Validator<R> {
    fn check(&self, record: &R) -> bool;

    /// Every rule the record breaks, in rule order. Consulted only after
    /// `check` has rejected the record; plain yes/no validators report none.
    fn violations(&self, _record: &R) -> Vec<Violation> {
        Vec::new()
    }
}

/// Writes one serialized copy of a record, keyed by its identity.
///
/// Persisting the same identity again replaces the earlier content.
pub trait Store<R> {
    fn persist(&self, record: &R) -> Result<()>;
}

/// Announces a persisted record to an observer. Never persists.
pub trait Notifier<R> {
    fn notify(&self, record: &R) -> Result<()>;
}
