// src/application/sync.rs
use crate::application::{ArticleSource, NoteService, NoteWriter, ResourceResolver};
use crate::domain::{DomainError, ResourceKind, SyncReport, SyncTargets};
use tracing::{info, instrument, warn};

/// Runs one sync: fetch, resolve tag, resolve folder, then one note per article.
///
/// Fetch and resolution failures abort the run before any note is written.
/// Per-article failures are recorded in the returned [`SyncReport`].
pub struct SyncOrchestrator<A: ArticleSource, S: NoteService> {
    source: A,
    service: S,
    tag_title: String,
    folder_title: String,
}

impl<A: ArticleSource, S: NoteService> SyncOrchestrator<A, S> {
    pub fn new(
        source: A,
        service: S,
        tag_title: impl Into<String>,
        folder_title: impl Into<String>,
    ) -> Self {
        Self {
            source,
            service,
            tag_title: tag_title.into(),
            folder_title: folder_title.into(),
        }
    }

    #[instrument(level = "debug", skip(self))]
    pub fn run(&mut self) -> Result<SyncReport, DomainError> {
        let articles = self
            .source
            .fetch_unread_articles()
            .map_err(DomainError::Fetch)?;
        info!(count = articles.len(), "Fetched unread articles");

        let targets = self.resolve_targets()?;
        info!(tag_id = %targets.tag_id, folder_id = %targets.folder_id, "Resolved sync targets");

        let mut writer = NoteWriter::new(&mut self.service);
        let mut report = SyncReport::new();
        for article in articles {
            let result = writer.create_note_for_article(&targets, &article);
            if let Err(e) = &result {
                warn!(article_id = %article.id, error = %e, "Error creating note");
            }
            report.record(article, result);
        }

        Ok(report)
    }

    fn resolve_targets(&mut self) -> Result<SyncTargets, DomainError> {
        let mut resolver = ResourceResolver::new(&mut self.service);
        let tag_id = resolver.resolve_or_create(ResourceKind::Tag, &self.tag_title)?;
        let folder_id = resolver.resolve_or_create(ResourceKind::Folder, &self.folder_title)?;
        Ok(SyncTargets { tag_id, folder_id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Article;
    use crate::util::testing::{MockArticleSource, MockNoteService};

    #[test]
    fn given_fetch_failure_when_running_then_no_notes_are_created() {
        // Arrange
        let source = MockArticleSource::failing();
        let mut service = MockNoteService::builder().build();
        let mut sync = SyncOrchestrator::new(source, &mut service, "to_read", "Main");

        // Act
        let result = sync.run();

        // Assert
        assert!(matches!(result, Err(DomainError::Fetch(_))));
        let calls = service.calls();
        assert!(calls.note_requests.is_empty());
        assert!(calls.list_requests.is_empty());
    }

    #[test]
    fn given_tag_resolution_failure_when_running_then_folder_and_notes_untouched() {
        let source = MockArticleSource::with_articles(vec![Article::new("1", "A", "u1")]);
        let mut service = MockNoteService::builder()
            .with_list_failure(ResourceKind::Tag)
            .build();
        let mut sync = SyncOrchestrator::new(source, &mut service, "to_read", "Main");

        let result = sync.run();

        assert!(matches!(
            result,
            Err(DomainError::Resolve { kind: ResourceKind::Tag, .. })
        ));
        assert_eq!(service.calls().list_requests, vec![ResourceKind::Tag]);
        assert!(service.calls().note_requests.is_empty());
    }

    #[test]
    fn given_folder_resolution_failure_when_running_then_no_notes_are_created() {
        let source = MockArticleSource::with_articles(vec![Article::new("1", "A", "u1")]);
        let mut service = MockNoteService::builder()
            .with_create_failure(ResourceKind::Folder)
            .build();
        let mut sync = SyncOrchestrator::new(source, &mut service, "to_read", "Main");

        let result = sync.run();

        assert!(matches!(
            result,
            Err(DomainError::Resolve { kind: ResourceKind::Folder, .. })
        ));
        assert!(service.calls().note_requests.is_empty());
    }

    #[test]
    fn given_custom_titles_when_running_then_resolves_those_titles() {
        let source = MockArticleSource::with_articles(vec![]);
        let mut service = MockNoteService::builder().build();
        let mut sync = SyncOrchestrator::new(source, &mut service, "later", "Inbox");

        let report = sync.run().unwrap();

        assert_eq!(report.attempted(), 0);
        assert_eq!(
            service.calls().create_requests,
            vec![
                (ResourceKind::Tag, "later".to_string()),
                (ResourceKind::Folder, "Inbox".to_string()),
            ]
        );
    }
}
