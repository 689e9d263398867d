// src/domain/report.rs
use crate::domain::{Article, DomainError};

#[derive(Debug)]
pub struct ArticleOutcome {
    pub article: Article,
    /// Id of the created note on success
    pub result: Result<String, DomainError>,
}

/// Per-article results of one sync run, in processing order.
#[derive(Debug, Default)]
pub struct SyncReport {
    outcomes: Vec<ArticleOutcome>,
}

impl SyncReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, article: Article, result: Result<String, DomainError>) {
        self.outcomes.push(ArticleOutcome { article, result });
    }

    pub fn outcomes(&self) -> &[ArticleOutcome] {
        &self.outcomes
    }

    pub fn attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.result.is_ok()).count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &ArticleOutcome> {
        self.outcomes.iter().filter(|o| o.result.is_err())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ServiceError;

    #[test]
    fn given_mixed_outcomes_when_counting_then_splits_success_and_failure() {
        let mut report = SyncReport::new();
        report.record(Article::new("1", "A", "u1"), Ok("n1".to_string()));
        report.record(
            Article::new("2", "B", "u2"),
            Err(DomainError::NoteCreation {
                title: "B".to_string(),
                cause: ServiceError::Status {
                    status: 500,
                    body: String::new(),
                },
            }),
        );

        assert_eq!(report.attempted(), 2);
        assert_eq!(report.succeeded(), 1);
        let failed: Vec<_> = report.failures().map(|o| o.article.id.as_str()).collect();
        assert_eq!(failed, vec!["2"]);
    }
}
