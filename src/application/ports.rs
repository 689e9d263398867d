// src/application/ports.rs
use crate::domain::{Article, CreatedNote, NewNote, Resource, ResourceKind, ServiceError};

/// Source of unread articles (Pocket)
pub trait ArticleSource {
    fn fetch_unread_articles(&mut self) -> Result<Vec<Article>, ServiceError>;
}

/// The subset of the Joplin data API needed to file articles as notes
pub trait NoteService {
    /// List every tag or folder, in the order the service returns them
    fn list_resources(&mut self, kind: ResourceKind) -> Result<Vec<Resource>, ServiceError>;

    /// Create a tag or folder with only its title set
    fn create_resource(&mut self, kind: ResourceKind, title: &str)
        -> Result<Resource, ServiceError>;

    fn create_note(&mut self, note: &NewNote) -> Result<CreatedNote, ServiceError>;

    /// Attach an existing note to an existing tag
    fn tag_note(&mut self, tag_id: &str, note_id: &str) -> Result<(), ServiceError>;
}

impl<T: NoteService + ?Sized> NoteService for &mut T {
    fn list_resources(&mut self, kind: ResourceKind) -> Result<Vec<Resource>, ServiceError> {
        (**self).list_resources(kind)
    }

    fn create_resource(
        &mut self,
        kind: ResourceKind,
        title: &str,
    ) -> Result<Resource, ServiceError> {
        (**self).create_resource(kind, title)
    }

    fn create_note(&mut self, note: &NewNote) -> Result<CreatedNote, ServiceError> {
        (**self).create_note(note)
    }

    fn tag_note(&mut self, tag_id: &str, note_id: &str) -> Result<(), ServiceError> {
        (**self).tag_note(tag_id, note_id)
    }
}

impl<T: ArticleSource + ?Sized> ArticleSource for &mut T {
    fn fetch_unread_articles(&mut self) -> Result<Vec<Article>, ServiceError> {
        (**self).fetch_unread_articles()
    }
}
