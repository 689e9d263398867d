// src/application/mod.rs
pub mod note_writer;
pub mod ports;
pub mod resource_resolver;
pub mod sync;

pub use note_writer::NoteWriter;
pub use ports::{ArticleSource, NoteService};
pub use resource_resolver::ResourceResolver;
pub use sync::SyncOrchestrator;
