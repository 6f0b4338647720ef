// file: src/pipeline/coordinator.rs
// description: runs validate, persist and notify over one record and reports the outcome
// reference: orchestrates the three pluggable stages

use crate::error::{PipelineError, Violation};
use crate::models::Record;
use crate::pipeline::capability::{Notifier, Store, Validator};
use crate::pipeline::progress::{PipelineStats, ProgressTracker};
use std::fmt;
use std::time::Instant;
use tracing::{debug, error, info, warn};

/// Terminal result of one pipeline run.
#[derive(Debug)]
pub enum Outcome {
    Published,
    /// The record was absent or broke at least one rule. Nothing was written.
    ValidationFailed(Vec<Violation>),
    /// The write did not complete. No notification was sent.
    PersistenceFailed(PipelineError),
    /// The record is stored but the announcement did not complete.
    NotificationFailed(PipelineError),
}

impl Outcome {
    pub fn is_published(&self) -> bool {
        matches!(self, Outcome::Published)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Published => "published",
            Outcome::ValidationFailed(_) => "validation_failed",
            Outcome::PersistenceFailed(_) => "persistence_failed",
            Outcome::NotificationFailed(_) => "notification_failed",
        }
    }

    /// Process exit status for command-line drivers.
    pub fn exit_code(&self) -> i32 {
        match self {
            Outcome::Published => 0,
            Outcome::ValidationFailed(_) => 1,
            Outcome::PersistenceFailed(_) => 2,
            Outcome::NotificationFailed(_) => 3,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Published => write!(f, "published"),
            Outcome::ValidationFailed(violations) if violations.is_empty() => {
                write!(f, "validation failed")
            }
            Outcome::ValidationFailed(violations) => {
                let reasons: Vec<String> = violations.iter().map(|v| v.to_string()).collect();
                write!(f, "validation failed: {}", reasons.join("; "))
            }
            Outcome::PersistenceFailed(e) => write!(f, "persistence failed: {}", e),
            Outcome::NotificationFailed(e) => write!(f, "notification failed: {}", e),
        }
    }
}

/// Sequences the three stages over a record.
///
/// The pipeline borrows its stages and keeps no state between runs.
pub struct Pipeline<'a, R> {
    validator: &'a dyn Validator<R>,
    store: &'a dyn Store<R>,
    notifier: &'a dyn Notifier<R>,
}

impl<'a, R: Record> Pipeline<'a, R> {
    pub fn new(
        validator: &'a dyn Validator<R>,
        store: &'a dyn Store<R>,
        notifier: &'a dyn Notifier<R>,
    ) -> Self {
        Self {
            validator,
            store,
            notifier,
        }
    }

    pub fn publish(&self, record: &R) -> Outcome {
        self.run(Some(record))
    }

    pub fn run(&self, record: Option<&R>) -> Outcome {
        let kind = R::KIND.as_str();

        let Some(record) = record else {
            warn!(kind, "No record supplied, skipping pipeline");
            return Outcome::ValidationFailed(Vec::new());
        };

        let id = record.id();

        if !self.validator.check(record) {
            let violations = self.validator.violations(record);
            warn!(
                kind,
                id,
                violations = violations.len(),
                "Validation failed: {}",
                violations
                    .iter()
                    .map(|v| v.to_string())
                    .collect::<Vec<_>>()
                    .join("; ")
            );
            return Outcome::ValidationFailed(violations);
        }
        debug!(kind, id, "Validated");

        if let Err(e) = self.store.persist(record) {
            error!(kind, id, "Persistence failed: {}", e);
            return Outcome::PersistenceFailed(e);
        }
        debug!(kind, id, "Persisted");

        // persisted records stay in place when the announcement fails
        if let Err(e) = self.notifier.notify(record) {
            error!(kind, id, "Notification failed after persistence: {}", e);
            return Outcome::NotificationFailed(e);
        }

        info!(kind, id, "Published");
        Outcome::Published
    }

    /// Runs every record independently; a failed record never stops the batch.
    pub fn run_batch<'r, I>(&self, records: I, tracker: Option<&ProgressTracker>) -> PipelineStats
    where
        I: IntoIterator<Item = &'r R>,
        R: 'r,
    {
        let start = Instant::now();
        let mut stats = PipelineStats::new();

        for record in records {
            if let Some(tracker) = tracker {
                tracker.set_message(format!("{} {}", R::KIND, record.id()));
            }

            let outcome = self.publish(record);
            debug!(kind = R::KIND.as_str(), outcome = outcome.label(), "Record done");
            stats.record(&outcome);

            if let Some(tracker) = tracker {
                tracker.record(&outcome);
            }
        }

        stats.duration_secs = start.elapsed().as_secs_f64();
        info!(
            kind = R::KIND.as_str(),
            published = stats.published,
            failed = stats.failed(),
            "Batch complete"
        );
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::models::{Article, Order, Report};
    use crate::notifier::ConsoleNotifier;
    use crate::storage::{KeyValueStore, MemoryStore, RecordStore, StorageFormat};
    use crate::validator::{OrderValidator, ReportValidator};
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct CountingStore {
        calls: Cell<usize>,
        fail: bool,
    }

    impl<R: Record> Store<R> for CountingStore {
        fn persist(&self, _record: &R) -> Result<()> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                return Err(PipelineError::Storage {
                    key: "k".to_string(),
                    source: std::io::Error::other("disk full"),
                });
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct CountingNotifier {
        seen: RefCell<Vec<String>>,
        fail: bool,
    }

    impl<R: Record> Notifier<R> for CountingNotifier {
        fn notify(&self, record: &R) -> Result<()> {
            self.seen.borrow_mut().push(record.id().to_string());
            if self.fail {
                return Err(PipelineError::Notification("channel closed".to_string()));
            }
            Ok(())
        }
    }

    struct AcceptAll;

    impl<R> Validator<R> for AcceptAll {
        fn check(&self, _record: &R) -> bool {
            true
        }
    }

    /// Yes/no validator with no diagnostics, like a bare `is_valid` flag.
    struct RejectAll;

    impl<R> Validator<R> for RejectAll {
        fn check(&self, _record: &R) -> bool {
            false
        }
    }

    #[test]
    fn test_scenario_a_valid_order_is_published() {
        let kv = MemoryStore::new();
        let store = RecordStore::new(&kv, StorageFormat::Line);
        let notifier = ConsoleNotifier::new(Vec::new());
        let validator = OrderValidator::new();
        let pipeline = Pipeline::new(&validator, &store, &notifier);

        let order = Order::new("ORD-001", "cust-42", 99.50, 3);
        let outcome = pipeline.publish(&order);

        assert!(outcome.is_published());
        let stored = kv.get("order_ORD-001").unwrap().expect("order stored");
        assert!(stored.contains("99.50"));
        assert!(stored.contains("items: 3"));

        let announced = notifier.output();
        assert!(announced.contains("ORD-001"));
        assert!(announced.contains("cust-42"));
    }

    #[test]
    fn test_scenario_b_zero_total_touches_nothing() {
        let kv = MemoryStore::new();
        let store = RecordStore::new(&kv, StorageFormat::Line);
        let notifier = ConsoleNotifier::new(Vec::new());
        let validator = OrderValidator::new();
        let pipeline = Pipeline::new(&validator, &store, &notifier);

        let order = Order::new("ORD-002", "cust-1", 0.0, 3);
        let outcome = pipeline.publish(&order);

        match outcome {
            Outcome::ValidationFailed(violations) => {
                assert_eq!(violations, vec![Violation::NotPositive { field: "total" }]);
            }
            other => panic!("unexpected outcome: {}", other),
        }
        assert!(kv.keys().unwrap().is_empty());
        assert!(notifier.output().is_empty());
    }

    #[test]
    fn test_scenario_c_blank_report_title() {
        let store = CountingStore::default();
        let notifier = CountingNotifier::default();
        let validator = ReportValidator::default();
        let pipeline = Pipeline::new(&validator, &store, &notifier);

        let outcome = pipeline.publish(&Report::new("", "x"));

        assert!(matches!(outcome, Outcome::ValidationFailed(_)));
        assert_eq!(outcome.exit_code(), 1);
        assert_eq!(store.calls.get(), 0);
        assert!(notifier.seen.borrow().is_empty());
    }

    #[test]
    fn test_absent_record_fails_validation() {
        let store = CountingStore::default();
        let notifier = CountingNotifier::default();
        let pipeline: Pipeline<'_, Order> = Pipeline::new(&AcceptAll, &store, &notifier);

        let outcome = pipeline.run(None);

        assert!(matches!(outcome, Outcome::ValidationFailed(ref v) if v.is_empty()));
        assert_eq!(store.calls.get(), 0);
        assert!(notifier.seen.borrow().is_empty());
    }

    #[test]
    fn test_persistence_failure_skips_notification() {
        let store = CountingStore {
            fail: true,
            ..Default::default()
        };
        let notifier = CountingNotifier::default();
        let pipeline = Pipeline::new(&AcceptAll, &store, &notifier);

        let outcome = pipeline.publish(&Article::new("a", "t", "c", "au"));

        assert!(matches!(outcome, Outcome::PersistenceFailed(_)));
        assert_eq!(outcome.exit_code(), 2);
        assert_eq!(store.calls.get(), 1);
        assert!(notifier.seen.borrow().is_empty());
    }

    #[test]
    fn test_notification_failure_keeps_persisted_record() {
        let kv = MemoryStore::new();
        let store = RecordStore::new(&kv, StorageFormat::Line);
        let notifier = CountingNotifier {
            fail: true,
            ..Default::default()
        };
        let validator = OrderValidator::new();
        let pipeline = Pipeline::new(&validator, &store, &notifier);

        let outcome = pipeline.publish(&Order::new("ORD-003", "cust-7", 10.0, 1));

        assert!(matches!(outcome, Outcome::NotificationFailed(_)));
        assert_eq!(outcome.label(), "notification_failed");
        assert!(kv.get("order_ORD-003").unwrap().is_some());
        assert_eq!(notifier.seen.borrow().as_slice(), ["ORD-003"]);
    }

    #[test]
    fn test_run_batch_continues_past_failures() {
        let store = CountingStore::default();
        let notifier = CountingNotifier::default();
        let validator = OrderValidator::new();
        let pipeline = Pipeline::new(&validator, &store, &notifier);

        let orders = vec![
            Order::new("ORD-1", "c1", 5.0, 1),
            Order::new("ORD-2", "c2", -1.0, 1),
            Order::new("", "c3", 5.0, 1),
            Order::new("ORD-4", "c4", 5.0, 2),
        ];
        let stats = pipeline.run_batch(&orders, None);

        assert_eq!(stats.published, 2);
        assert_eq!(stats.validation_failed, 2);
        assert_eq!(stats.failed(), 2);
        assert_eq!(store.calls.get(), 2);
        assert_eq!(notifier.seen.borrow().as_slice(), ["ORD-1", "ORD-4"]);
    }

    #[test]
    fn test_boolean_validator_rejects_without_violations() {
        let store = CountingStore::default();
        let notifier = CountingNotifier::default();
        let pipeline = Pipeline::new(&RejectAll, &store, &notifier);

        let outcome = pipeline.publish(&Order::new("ORD-1", "c", 1.0, 1));

        assert!(matches!(outcome, Outcome::ValidationFailed(ref v) if v.is_empty()));
        assert_eq!(store.calls.get(), 0);
        assert!(notifier.seen.borrow().is_empty());
    }

    #[test]
    fn test_over_length_report_title_short_circuits() {
        let store = CountingStore::default();
        let notifier = CountingNotifier::default();
        let validator = ReportValidator::default();
        let pipeline = Pipeline::new(&validator, &store, &notifier);

        let outcome = pipeline.publish(&Report::with_id("r-long", "t".repeat(101), "body"));

        match outcome {
            Outcome::ValidationFailed(violations) => assert_eq!(
                violations,
                vec![Violation::TooLong {
                    field: "title",
                    max: 100,
                    actual: 101
                }]
            ),
            other => panic!("unexpected outcome: {}", other),
        }
        assert_eq!(store.calls.get(), 0);
        assert!(notifier.seen.borrow().is_empty());
    }

    #[test]
    fn test_outcome_display() {
        let outcome = Outcome::ValidationFailed(vec![Violation::Blank { field: "title" }]);
        assert_eq!(outcome.to_string(), "validation failed: title must not be blank");
        assert_eq!(Outcome::Published.to_string(), "published");
        assert_eq!(Outcome::Published.exit_code(), 0);
    }
}
