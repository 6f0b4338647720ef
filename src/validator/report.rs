// file: src/validator/report.rs
// description: report business rules
// reference: input validation patterns

use super::DEFAULT_MAX_TITLE_CHARS;
use crate::error::Violation;
use crate::models::{Record, Report};
use crate::pipeline::Validator;
use crate::utils::validation::Rules;

#[derive(Debug, Clone, Copy)]
pub struct ReportValidator {
    max_title_chars: usize,
}

impl ReportValidator {
    pub fn new(max_title_chars: usize) -> Self {
        Self { max_title_chars }
    }
}

impl Default for ReportValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TITLE_CHARS)
    }
}

impl Validator<Report> for ReportValidator {
    fn check(&self, report: &Report) -> bool {
        self.violations(report).is_empty()
    }

    fn violations(&self, report: &Report) -> Vec<Violation> {
        Rules::collect([
            Rules::require_non_blank("id", report.id()),
            Rules::require_non_blank("title", report.title()),
            Rules::require_max_chars("title", report.title(), self.max_title_chars),
            Rules::require_non_blank("content", report.content()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_report_passes() {
        let report = Report::new("Monthly Sales", "Sales are up 10% this month.");
        assert!(ReportValidator::default().check(&report));
    }

    #[test]
    fn test_blank_title_fails() {
        let violations = ReportValidator::default().violations(&Report::new("", "x"));
        assert_eq!(violations, vec![Violation::Blank { field: "title" }]);
    }

    #[test]
    fn test_title_length_boundary() {
        let validator = ReportValidator::default();

        assert!(validator.check(&Report::new("t".repeat(100), "x")));
        assert!(!validator.check(&Report::new("t".repeat(101), "x")));
    }

    #[test]
    fn test_blank_id_fails() {
        assert!(!ReportValidator::default().check(&Report::with_id(" ", "title", "x")));
    }
}
