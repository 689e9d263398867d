// src/application/note_writer.rs
use crate::application::NoteService;
use crate::domain::{Article, DomainError, NewNote, SyncTargets};
use tracing::{debug, instrument};

pub struct NoteWriter<S: NoteService> {
    service: S,
}

impl<S: NoteService> NoteWriter<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Create a note for `article` in the target folder and attach the target tag.
    ///
    /// Returns the id of the created note. If tagging fails the note is left
    /// in place untagged.
    #[instrument(level = "debug", skip(self, targets, article), fields(article_id = %article.id))]
    pub fn create_note_for_article(
        &mut self,
        targets: &SyncTargets,
        article: &Article,
    ) -> Result<String, DomainError> {
        let note = NewNote::from_article(article, &targets.folder_id);
        let created = self
            .service
            .create_note(&note)
            .map_err(|cause| DomainError::NoteCreation {
                title: article.title.clone(),
                cause,
            })?;
        debug!(note_id = %created.id, "Created note");

        self.service
            .tag_note(&targets.tag_id, &created.id)
            .map_err(|cause| DomainError::TagAssociation {
                note_id: created.id.clone(),
                cause,
            })?;
        debug!(note_id = %created.id, tag_id = %targets.tag_id, "Tagged note");

        Ok(created.id)
    }
}
