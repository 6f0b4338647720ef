// file: src/validator/article.rs
// description: article business rules
// reference: input validation patterns

use super::DEFAULT_MAX_TITLE_CHARS;
use crate::error::Violation;
use crate::models::{Article, Record};
use crate::pipeline::Validator;
use crate::utils::validation::Rules;

#[derive(Debug, Clone, Copy)]
pub struct ArticleValidator {
    max_title_chars: usize,
}

impl ArticleValidator {
    pub fn new(max_title_chars: usize) -> Self {
        Self { max_title_chars }
    }
}

impl Default for ArticleValidator {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TITLE_CHARS)
    }
}

impl Validator<Article> for ArticleValidator {
    fn check(&self, article: &Article) -> bool {
        self.violations(article).is_empty()
    }

    fn violations(&self, article: &Article) -> Vec<Violation> {
        Rules::collect([
            Rules::require_non_blank("id", article.id()),
            Rules::require_non_blank("title", article.title()),
            Rules::require_max_chars("title", article.title(), self.max_title_chars),
            Rules::require_non_blank("content", article.content()),
            Rules::require_non_blank("author", article.author_id()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_article_passes() {
        let article = Article::new("art-1", "Hello World", "This is the content.", "author-42");
        assert!(ArticleValidator::default().check(&article));
    }

    #[test]
    fn test_blank_fields_fail() {
        let validator = ArticleValidator::default();

        assert!(!validator.check(&Article::new("", "t", "c", "a")));
        assert!(!validator.check(&Article::new("1", " ", "c", "a")));
        assert!(!validator.check(&Article::new("1", "t", "", "a")));
        assert!(!validator.check(&Article::new("1", "t", "c", "\t")));
    }

    #[test]
    fn test_title_bound_is_configurable() {
        let article = Article::new("1", "a".repeat(20), "c", "a");

        assert!(ArticleValidator::new(20).check(&article));
        assert_eq!(
            ArticleValidator::new(10).violations(&article),
            vec![Violation::TooLong {
                field: "title",
                max: 10,
                actual: 20
            }]
        );
    }
}
