// src/domain/error.rs
use crate::domain::ResourceKind;
use thiserror::Error;

/// Failure talking to a remote service (Pocket or Joplin).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response body: {0}")]
    Decode(String),
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Failed to fetch unread articles: {0}")]
    Fetch(ServiceError),
    #[error("Failed to resolve {kind} '{title}': {cause}")]
    Resolve {
        kind: ResourceKind,
        title: String,
        cause: ServiceError,
    },
    #[error("Failed to create note '{title}': {cause}")]
    NoteCreation {
        title: String,
        cause: ServiceError,
    },
    #[error("Failed to tag note {note_id}: {cause}")]
    TagAssociation {
        note_id: String,
        cause: ServiceError,
    },
}
