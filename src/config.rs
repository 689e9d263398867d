// src/config.rs
//
// A single immutable `Config` is assembled once at startup from, in rising
// precedence: an optional TOML file, the environment, and CLI flags.
use crate::constants::{
    CONFIG_DIR_NAME, DEFAULT_FOLDER_TITLE, DEFAULT_JOPLIN_URL, DEFAULT_TAG_TITLE,
    ENV_JOPLIN_TOKEN, ENV_JOPLIN_URL, ENV_POCKET_ACCESS_TOKEN, ENV_POCKET_CONSUMER_KEY,
};
use crate::domain::DomainError;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// TOML configuration file; every value is optional
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub pocket: PocketSection,
    #[serde(default)]
    pub joplin: JoplinSection,
    #[serde(default)]
    pub sync: SyncSection,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct PocketSection {
    pub consumer_key: Option<String>,
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct JoplinSection {
    pub url: Option<String>,
    pub token: Option<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct SyncSection {
    pub tag: Option<String>,
    pub folder: Option<String>,
}

impl FileConfig {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: FileConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse TOML config {}", path.display()))?;

        Ok(config)
    }

    /// Load the file at `path` if given, else the default location if it exists
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => {
                debug!(?path, "Loading default config file");
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}

/// Warning for a `.env` load result; a missing file is not worth one
pub fn dotenv_warning<T>(result: &dotenvy::Result<T>) -> Option<String> {
    match result {
        Err(e) if !e.not_found() => Some(format!("Ignoring unreadable .env file: {}", e)),
        _ => None,
    }
}

/// `<config_dir>/pocket2joplin/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join("config.toml"))
}

/// Values given on the command line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Overrides {
    pub joplin_url: Option<String>,
    pub tag: Option<String>,
    pub folder: Option<String>,
}

#[derive(Clone, PartialEq, Eq)]
pub struct PocketCredentials {
    pub consumer_key: String,
    pub access_token: String,
}

impl fmt::Debug for PocketCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PocketCredentials")
            .field("consumer_key", &"<redacted>")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct JoplinConnection {
    pub base_url: String,
    pub token: String,
}

impl fmt::Debug for JoplinConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JoplinConnection")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncSettings {
    pub tag_title: String,
    pub folder_title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub pocket: PocketCredentials,
    pub joplin: JoplinConnection,
    pub sync: SyncSettings,
}

impl Config {
    /// Build from the file, the process environment and CLI overrides
    pub fn from_env(file: FileConfig, overrides: &Overrides) -> Result<Self, DomainError> {
        Self::resolve(file, |key| std::env::var(key).ok(), overrides)
    }

    /// Build from the file, an environment lookup and CLI overrides.
    ///
    /// Empty values count as unset. Fails if a credential is missing.
    pub fn resolve<F>(file: FileConfig, env: F, overrides: &Overrides) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());
        let non_empty = |v: Option<String>| v.filter(|v| !v.trim().is_empty());

        let consumer_key = env(ENV_POCKET_CONSUMER_KEY)
            .or(non_empty(file.pocket.consumer_key))
            .ok_or_else(|| missing(ENV_POCKET_CONSUMER_KEY, "[pocket] consumer_key"))?;
        let access_token = env(ENV_POCKET_ACCESS_TOKEN)
            .or(non_empty(file.pocket.access_token))
            .ok_or_else(|| missing(ENV_POCKET_ACCESS_TOKEN, "[pocket] access_token"))?;
        let token = env(ENV_JOPLIN_TOKEN)
            .or(non_empty(file.joplin.token))
            .ok_or_else(|| missing(ENV_JOPLIN_TOKEN, "[joplin] token"))?;

        let base_url = non_empty(overrides.joplin_url.clone())
            .or_else(|| env(ENV_JOPLIN_URL))
            .or(non_empty(file.joplin.url))
            .unwrap_or_else(|| DEFAULT_JOPLIN_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let tag_title = non_empty(overrides.tag.clone())
            .or(non_empty(file.sync.tag))
            .unwrap_or_else(|| DEFAULT_TAG_TITLE.to_string());
        let folder_title = non_empty(overrides.folder.clone())
            .or(non_empty(file.sync.folder))
            .unwrap_or_else(|| DEFAULT_FOLDER_TITLE.to_string());

        Ok(Self {
            pocket: PocketCredentials {
                consumer_key,
                access_token,
            },
            joplin: JoplinConnection { base_url, token },
            sync: SyncSettings {
                tag_title,
                folder_title,
            },
        })
    }
}

fn missing(var: &str, file_key: &str) -> DomainError {
    DomainError::Config(format!(
        "{} is required (set it in the environment or as {} in the config file)",
        var, file_key
    ))
}
