// file: src/utils/validation.rs
// description: field-level validation rules shared by record validators
// reference: input validation patterns

use crate::error::Violation;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    pub static ref EMAIL: Regex = Regex::new(
        r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$"
    ).expect("EMAIL regex is valid");
}

pub struct Rules;

impl Rules {
    pub fn require_non_blank(field: &'static str, value: &str) -> Result<(), Violation> {
        if value.trim().is_empty() {
            return Err(Violation::Blank { field });
        }
        Ok(())
    }

    /// Length is measured in characters, not bytes.
    pub fn require_max_chars(
        field: &'static str,
        value: &str,
        max: usize,
    ) -> Result<(), Violation> {
        let actual = value.chars().count();
        if actual > max {
            return Err(Violation::TooLong { field, max, actual });
        }
        Ok(())
    }

    pub fn require_positive_f64(field: &'static str, value: f64) -> Result<(), Violation> {
        // NaN fails this comparison too
        if value > 0.0 {
            Ok(())
        } else {
            Err(Violation::NotPositive { field })
        }
    }

    pub fn require_positive_i64(field: &'static str, value: i64) -> Result<(), Violation> {
        if value <= 0 {
            return Err(Violation::NotPositive { field });
        }
        Ok(())
    }

    pub fn is_email(value: &str) -> bool {
        EMAIL.is_match(value.trim())
    }

    /// Collects the failures out of a set of rule results.
    pub fn collect<I>(results: I) -> Vec<Violation>
    where
        I: IntoIterator<Item = Result<(), Violation>>,
    {
        results.into_iter().filter_map(Result::err).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_non_blank() {
        assert!(Rules::require_non_blank("id", "ORD-001").is_ok());
        assert_eq!(
            Rules::require_non_blank("id", "   "),
            Err(Violation::Blank { field: "id" })
        );
        assert!(Rules::require_non_blank("id", "").is_err());
        assert!(Rules::require_non_blank("id", "\t\n").is_err());
    }

    #[test]
    fn test_require_max_chars_counts_characters() {
        assert!(Rules::require_max_chars("title", &"a".repeat(100), 100).is_ok());
        assert!(Rules::require_max_chars("title", &"a".repeat(101), 100).is_err());
        // 100 multi-byte characters are still 100 characters
        assert!(Rules::require_max_chars("title", &"é".repeat(100), 100).is_ok());
    }

    #[test]
    fn test_require_positive() {
        assert!(Rules::require_positive_f64("total", 0.01).is_ok());
        assert!(Rules::require_positive_f64("total", 0.0).is_err());
        assert!(Rules::require_positive_f64("total", -3.0).is_err());
        assert!(Rules::require_positive_f64("total", f64::NAN).is_err());
        assert!(Rules::require_positive_i64("items", 1).is_ok());
        assert!(Rules::require_positive_i64("items", 0).is_err());
    }

    #[test]
    fn test_is_email() {
        assert!(Rules::is_email("manager@company.com"));
        assert!(Rules::is_email(" ops.team+reports@example.co.uk "));
        assert!(!Rules::is_email("manager"));
        assert!(!Rules::is_email("manager@company"));
        assert!(!Rules::is_email("a b@company.com"));
    }

    #[test]
    fn test_collect_keeps_only_failures() {
        let violations = Rules::collect([
            Rules::require_non_blank("id", "x"),
            Rules::require_non_blank("title", ""),
            Rules::require_positive_i64("items", -1),
        ]);
        assert_eq!(
            violations,
            vec![
                Violation::Blank { field: "title" },
                Violation::NotPositive { field: "items" },
            ]
        );
    }
}
