// src/domain/mod.rs
pub mod article;
pub mod error;
pub mod note;
pub mod report;
pub mod resource;

pub use article::Article;
pub use error::{DomainError, ServiceError};
pub use note::{CreatedNote, NewNote};
pub use report::{ArticleOutcome, SyncReport};
pub use resource::{Resource, ResourceKind, SyncTargets};
