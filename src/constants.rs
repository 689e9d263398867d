// src/constants.rs
//
// Endpoints, defaults and environment variable names used across the crate.

/// Pocket retrieval endpoint.
///
/// Used in: `infrastructure/pocket.rs`
pub const POCKET_GET_URL: &str = "https://getpocket.com/v3/get";

/// Default address of the Joplin Web Clipper service (local loopback).
///
/// Used in: `config.rs`
pub const DEFAULT_JOPLIN_URL: &str = "http://localhost:41184";

/// Marker tag attached to every imported note.
pub const DEFAULT_TAG_TITLE: &str = "to_read";

/// Folder receiving every imported note.
pub const DEFAULT_FOLDER_TITLE: &str = "Main";

pub const ENV_POCKET_CONSUMER_KEY: &str = "POCKET_CONSUMER_KEY";
pub const ENV_POCKET_ACCESS_TOKEN: &str = "POCKET_ACCESS_TOKEN";
pub const ENV_JOPLIN_TOKEN: &str = "JOPLIN_TOKEN";
pub const ENV_JOPLIN_URL: &str = "JOPLIN_URL";

/// Directory under the platform config dir holding `config.toml`.
pub const CONFIG_DIR_NAME: &str = "pocket2joplin";
