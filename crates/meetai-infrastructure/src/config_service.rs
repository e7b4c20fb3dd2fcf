//! Configuration service implementation.
//!
//! Loads the root configuration from `~/.config/meetai/config.toml`.

use crate::paths::MeetPaths;
use meetai_core::config::RootConfig;
use meetai_core::error::Result;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

/// Loads and caches the root configuration.
///
/// A missing file yields the defaults. A file that fails to parse is an
/// error rather than a silent fallback.
#[derive(Debug, Clone)]
pub struct ConfigService {
    path: Option<PathBuf>,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<RootConfig>>>,
}

impl ConfigService {
    /// Creates a ConfigService reading the platform config file.
    ///
    /// The file is loaded lazily on first access.
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Creates a ConfigService reading `path` instead of the platform file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the root configuration, loading from file if not cached.
    pub fn get_config(&self) -> Result<RootConfig> {
        {
            let read_lock = self.config.read().unwrap_or_else(|e| e.into_inner());
            if let Some(ref cached) = *read_lock {
                return Ok(cached.clone());
            }
        }

        let loaded = self.load_config()?;

        {
            let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
            *write_lock = Some(loaded.clone());
        }

        Ok(loaded)
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(|e| e.into_inner());
        *write_lock = None;
    }

    pub fn config_path(&self) -> Result<PathBuf> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => MeetPaths::config_file(),
        }
    }

    fn load_config(&self) -> Result<RootConfig> {
        let path = self.config_path()?;
        if !path.exists() {
            tracing::debug!("[ConfigService] {} not found, using defaults", path.display());
            return Ok(RootConfig::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: RootConfig = toml::from_str(&content).map_err(|e| {
            meetai_core::MeetError::config(format!("Invalid {}: {}", path.display(), e))
        })?;
        tracing::info!("[ConfigService] loaded {}", path.display());
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
