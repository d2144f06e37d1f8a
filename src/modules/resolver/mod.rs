//! Resolves the active configuration from storage or the bundled default.
//!
//! A stored blob always replaces the default wholesale; there is no
//! field-level merge. Loading never fails: unreadable or malformed blobs are
//! logged and the default is used instead.

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::config::SiteConfig;
use crate::modules::storage::{ConfigStore, DEFAULT_STORAGE_KEY, StorageError};

/// Where a resolved configuration came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Stored,
    Default,
    /// A blob existed but could not be read or parsed.
    Fallback,
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Stored => write!(f, "stored"),
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::Fallback => write!(f, "fallback"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub config: SiteConfig,
    pub source: ConfigSource,
    /// Reason the stored blob was rejected, for [`ConfigSource::Fallback`].
    pub warning: Option<String>,
}

#[derive(Debug, Error)]
pub enum ResolverError {
    #[error("config storage failed: {0}")]
    Storage(#[from] StorageError),
    #[error("config serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub struct ConfigResolver {
    store: Arc<dyn ConfigStore>,
    key: String,
    default: SiteConfig,
}

impl ConfigResolver {
    pub fn new(store: Arc<dyn ConfigStore>, default: SiteConfig) -> Self {
        Self {
            store,
            key: DEFAULT_STORAGE_KEY.to_string(),
            default,
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn default_config(&self) -> &SiteConfig {
        &self.default
    }

    pub fn load(&self) -> ResolvedConfig {
        let raw = match self.store.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return self.resolved_default(ConfigSource::Default, None),
            Err(err) => {
                log::warn!("failed to read saved config '{}': {err}; using default", self.key);
                return self.resolved_default(ConfigSource::Fallback, Some(err.to_string()));
            }
        };

        match serde_json::from_str::<SiteConfig>(&raw) {
            Ok(config) => ResolvedConfig {
                config,
                source: ConfigSource::Stored,
                warning: None,
            },
            Err(err) => {
                log::warn!("failed to parse saved config '{}': {err}; using default", self.key);
                self.resolved_default(ConfigSource::Fallback, Some(err.to_string()))
            }
        }
    }

    /// Persist `config`, replacing any previously saved value.
    pub fn save(&self, config: &SiteConfig) -> Result<(), ResolverError> {
        let raw = serde_json::to_string(config)?;
        self.store.write(&self.key, &raw)?;
        log::debug!("saved config under '{}' ({} bytes)", self.key, raw.len());
        Ok(())
    }

    /// Delete the saved value and return the bundled default.
    pub fn reset(&self) -> Result<SiteConfig, ResolverError> {
        self.store.remove(&self.key)?;
        log::debug!("removed saved config '{}'", self.key);
        Ok(self.default.clone())
    }

    fn resolved_default(&self, source: ConfigSource, warning: Option<String>) -> ResolvedConfig {
        ResolvedConfig {
            config: self.default.clone(),
            source,
            warning,
        }
    }
}

impl fmt::Debug for ConfigResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigResolver")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
