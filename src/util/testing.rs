// src/util/testing.rs

use anyhow::Result;
use std::collections::{HashMap, HashSet};
use std::env;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::{ArticleSource, NoteService};
use crate::domain::{Article, CreatedNote, NewNote, Resource, ResourceKind, ServiceError};

fn internal_error() -> ServiceError {
    ServiceError::Status {
        status: 500,
        body: "internal error".to_string(),
    }
}

/// Article source returning a fixed set of articles, or failing.
pub struct MockArticleSource {
    articles: Option<Vec<Article>>,
}

impl MockArticleSource {
    pub fn with_articles(articles: Vec<Article>) -> Self {
        Self {
            articles: Some(articles),
        }
    }

    pub fn failing() -> Self {
        Self { articles: None }
    }
}

impl ArticleSource for MockArticleSource {
    fn fetch_unread_articles(&mut self) -> Result<Vec<Article>, ServiceError> {
        self.articles.clone().ok_or_else(internal_error)
    }
}

/// Every request made against a [`MockNoteService`], failed ones included
#[derive(Debug, Default, Clone, PartialEq)]
pub struct MockCalls {
    pub list_requests: Vec<ResourceKind>,
    pub create_requests: Vec<(ResourceKind, String)>,
    pub note_requests: Vec<NewNote>,
    /// (tag id, note id)
    pub tag_requests: Vec<(String, String)>,
}

/// In-memory Joplin stand-in with configurable failures
///
/// Created tags and folders are stored, so a second lookup finds them.
/// Failures for notes are keyed by note title.
///
/// # Examples
///
/// ```
/// use pocket2joplin::util::testing::MockNoteService;
/// use pocket2joplin::domain::ResourceKind;
///
/// let mock = MockNoteService::builder()
///     .with_resource(ResourceKind::Tag, "t1", "to_read")
///     .with_tag_failure("Broken article")
///     .build();
/// ```
pub struct MockNoteService {
    resources: HashMap<ResourceKind, Vec<Resource>>,
    list_failures: HashSet<ResourceKind>,
    create_failures: HashSet<ResourceKind>,
    note_failures: HashSet<String>,
    tag_failures: HashSet<String>,
    note_titles: HashMap<String, String>,
    next_id: usize,
    calls: MockCalls,
}

impl MockNoteService {
    pub fn builder() -> MockNoteServiceBuilder {
        MockNoteServiceBuilder::new()
    }

    pub fn calls(&self) -> &MockCalls {
        &self.calls
    }

    fn next_id(&mut self, prefix: &str) -> String {
        self.next_id += 1;
        format!("{}-{}", prefix, self.next_id)
    }
}

impl NoteService for MockNoteService {
    fn list_resources(&mut self, kind: ResourceKind) -> Result<Vec<Resource>, ServiceError> {
        self.calls.list_requests.push(kind);
        if self.list_failures.contains(&kind) {
            return Err(internal_error());
        }
        Ok(self.resources.get(&kind).cloned().unwrap_or_default())
    }

    fn create_resource(
        &mut self,
        kind: ResourceKind,
        title: &str,
    ) -> Result<Resource, ServiceError> {
        self.calls.create_requests.push((kind, title.to_string()));
        if self.create_failures.contains(&kind) {
            return Err(internal_error());
        }
        let resource = Resource {
            id: self.next_id(&kind.to_string()),
            title: title.to_string(),
        };
        self.resources
            .entry(kind)
            .or_default()
            .push(resource.clone());
        Ok(resource)
    }

    fn create_note(&mut self, note: &NewNote) -> Result<CreatedNote, ServiceError> {
        self.calls.note_requests.push(note.clone());
        if self.note_failures.contains(&note.title) {
            return Err(internal_error());
        }
        let id = self.next_id("note");
        self.note_titles.insert(id.clone(), note.title.clone());
        Ok(CreatedNote { id })
    }

    fn tag_note(&mut self, tag_id: &str, note_id: &str) -> Result<(), ServiceError> {
        self.calls
            .tag_requests
            .push((tag_id.to_string(), note_id.to_string()));
        match self.note_titles.get(note_id) {
            Some(title) if self.tag_failures.contains(title) => Err(internal_error()),
            Some(_) => Ok(()),
            None => Err(ServiceError::Status {
                status: 404,
                body: format!("note {} not found", note_id),
            }),
        }
    }
}

/// Builder for MockNoteService
pub struct MockNoteServiceBuilder {
    resources: HashMap<ResourceKind, Vec<Resource>>,
    list_failures: HashSet<ResourceKind>,
    create_failures: HashSet<ResourceKind>,
    note_failures: HashSet<String>,
    tag_failures: HashSet<String>,
}

impl MockNoteServiceBuilder {
    pub fn new() -> Self {
        Self {
            resources: HashMap::new(),
            list_failures: HashSet::new(),
            create_failures: HashSet::new(),
            note_failures: HashSet::new(),
            tag_failures: HashSet::new(),
        }
    }

    /// Seed an existing tag or folder; listing returns them in insertion order
    pub fn with_resource(mut self, kind: ResourceKind, id: &str, title: &str) -> Self {
        self.resources.entry(kind).or_default().push(Resource {
            id: id.to_string(),
            title: title.to_string(),
        });
        self
    }

    pub fn with_list_failure(mut self, kind: ResourceKind) -> Self {
        self.list_failures.insert(kind);
        self
    }

    pub fn with_create_failure(mut self, kind: ResourceKind) -> Self {
        self.create_failures.insert(kind);
        self
    }

    /// Fail create_note for notes with this title
    pub fn with_note_failure(mut self, title: &str) -> Self {
        self.note_failures.insert(title.to_string());
        self
    }

    /// Fail tag_note for the note created with this title
    pub fn with_tag_failure(mut self, title: &str) -> Self {
        self.tag_failures.insert(title.to_string());
        self
    }

    pub fn build(self) -> MockNoteService {
        MockNoteService {
            resources: self.resources,
            list_failures: self.list_failures,
            create_failures: self.create_failures,
            note_failures: self.note_failures,
            tag_failures: self.tag_failures,
            note_titles: HashMap::new(),
            next_id: 0,
            calls: MockCalls::default(),
        }
    }
}

impl Default for MockNoteServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

/// Targets of the HTTP stack that drown out the crate's own spans at trace level
const NOISY_TARGETS: &[&str] = &["hyper", "hyper_util", "reqwest", "rustls", "h2", "mio"];

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "pocket2joplin=trace");
    }

    // Keep the transport crates quiet, whatever RUST_LOG says
    let transport_filter = filter_fn(|metadata| {
        !NOISY_TARGETS
            .iter()
            .any(|target| metadata.target().starts_with(target))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber; spans close with their timing so
    // request durations show up in test output
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(transport_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}
