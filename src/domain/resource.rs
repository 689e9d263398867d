// src/domain/resource.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Joplin organizational entities that are resolved by title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Tag,
    Folder,
}

impl ResourceKind {
    /// Collection path segment in the Joplin data API
    pub fn collection(self) -> &'static str {
        match self {
            ResourceKind::Tag => "tags",
            ResourceKind::Folder => "folders",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Tag => write!(f, "tag"),
            ResourceKind::Folder => write!(f, "folder"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    #[serde(default)]
    pub title: String,
}

/// Tag and folder ids resolved once per run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncTargets {
    pub tag_id: String,
    pub folder_id: String,
}
