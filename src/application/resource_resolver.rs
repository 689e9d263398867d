// src/application/resource_resolver.rs
use crate::application::NoteService;
use crate::domain::{DomainError, ResourceKind};
use tracing::{debug, info, instrument};

pub struct ResourceResolver<S: NoteService> {
    service: S,
}

impl<S: NoteService> ResourceResolver<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Return the id of the first `kind` entity titled exactly `title`,
    /// creating it when none exists.
    ///
    /// Titles are compared case-sensitively.
    #[instrument(level = "debug", skip(self))]
    pub fn resolve_or_create(&mut self, kind: ResourceKind, title: &str) -> Result<String, DomainError> {
        let to_error = |cause| DomainError::Resolve {
            kind,
            title: title.to_string(),
            cause,
        };

        let existing = self.service.list_resources(kind).map_err(to_error)?;
        debug!(count = existing.len(), %kind, "Listed existing resources");

        if let Some(found) = existing.into_iter().find(|r| r.title == title) {
            debug!(id = %found.id, %kind, title, "Found existing resource");
            return Ok(found.id);
        }

        let created = self
            .service
            .create_resource(kind, title)
            .map_err(to_error)?;
        info!(id = %created.id, %kind, title, "Created resource");
        Ok(created.id)
    }
}
