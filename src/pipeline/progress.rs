// file: src/pipeline/progress.rs
// description: progress tracking and outcome statistics for batch runs
// reference: uses indicatif for progress bars and tallies pipeline outcomes

use crate::pipeline::coordinator::Outcome;
use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::cell::Cell;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineStats {
    pub published: usize,
    pub validation_failed: usize,
    pub persistence_failed: usize,
    pub notification_failed: usize,
    pub duration_secs: f64,
}

impl PipelineStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Published => self.published += 1,
            Outcome::ValidationFailed(_) => self.validation_failed += 1,
            Outcome::PersistenceFailed(_) => self.persistence_failed += 1,
            Outcome::NotificationFailed(_) => self.notification_failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.published + self.failed()
    }

    pub fn failed(&self) -> usize {
        self.validation_failed + self.persistence_failed + self.notification_failed
    }

    pub fn records_per_second(&self) -> f64 {
        if self.duration_secs <= 0.0 {
            return 0.0;
        }
        self.total() as f64 / self.duration_secs
    }

    pub fn success_rate(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.published as f64 / total as f64) * 100.0
    }

    pub fn summary(&self) -> String {
        format!(
            "{} published, {} invalid, {} not stored, {} not announced ({:.1}% success, {:.1} records/s)",
            self.published,
            self.validation_failed,
            self.persistence_failed,
            self.notification_failed,
            self.success_rate(),
            self.records_per_second()
        )
    }
}

pub struct ProgressTracker {
    main_bar: ProgressBar,
    detail_bar: ProgressBar,
    published: Cell<usize>,
    failed: Cell<usize>,
}

impl ProgressTracker {
    pub fn with_color(total_records: usize, colored: bool) -> Self {
        let multi_progress = MultiProgress::new();

        let main_bar = create_progress_bar(&multi_progress, total_records as u64, colored);
        let detail_bar = create_detail_bar(&multi_progress);

        Self {
            main_bar,
            detail_bar,
            published: Cell::new(0),
            failed: Cell::new(0),
        }
    }

    /// Hidden bars, for non-interactive output.
    pub fn hidden() -> Self {
        Self {
            main_bar: ProgressBar::hidden(),
            detail_bar: ProgressBar::hidden(),
            published: Cell::new(0),
            failed: Cell::new(0),
        }
    }

    pub fn record(&self, outcome: &Outcome) {
        if outcome.is_published() {
            self.published.set(self.published.get() + 1);
        } else {
            self.failed.set(self.failed.get() + 1);
        }
        self.main_bar.inc(1);
        self.update_detail_bar();
    }

    pub fn set_message(&self, message: String) {
        self.main_bar.set_message(message);
    }

    pub fn published(&self) -> usize {
        self.published.get()
    }

    pub fn failed(&self) -> usize {
        self.failed.get()
    }

    pub fn finish(&self) {
        self.main_bar.finish_with_message(format!(
            "Batch complete: {} published, {} failed",
            self.published(),
            self.failed()
        ));
        self.detail_bar.finish_and_clear();
    }

    fn update_detail_bar(&self) {
        let message = format!(
            "Published: {} | Failed: {}",
            self.published.get().to_string().green(),
            self.failed.get().to_string().red()
        );

        self.detail_bar.set_message(message);
    }
}

impl Drop for ProgressTracker {
    fn drop(&mut self) {
        self.finish();
    }
}

fn create_progress_bar(multi_progress: &MultiProgress, total: u64, colored: bool) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(total));
    let template = if colored {
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}"
    } else {
        "{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} {msg}"
    };
    let chars = if colored { "█▓▒░" } else { "=>-" };

    // the templates are constant; fall back to the default style if one is rejected
    let style = ProgressStyle::default_bar()
        .template(template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars(chars);
    bar.set_style(style);
    bar
}

fn create_detail_bar(multi_progress: &MultiProgress) -> ProgressBar {
    let bar = multi_progress.add(ProgressBar::new(0));
    if let Ok(style) = ProgressStyle::default_bar().template("{msg}") {
        bar.set_style(style);
    }
    bar
}
