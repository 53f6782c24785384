//! File-based config discovery for front-ends.

use std::path::{Path, PathBuf};

use crate::config::GraphConfig;
use crate::error::{ConfigError, Result};

/// File names searched for, in order.
const CANDIDATES: [&str; 2] = ["modviz.toml", "modviz.json"];

/// Searches a root directory for a modviz config file and loads it.
///
/// # Example
///
/// ```no_run
/// use modviz_config::ConfigDiscovery;
///
/// let config = ConfigDiscovery::new(".").load().unwrap();
/// ```
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory.
    pub fn find(&self) -> Option<PathBuf> {
        CANDIDATES
            .iter()
            .map(|name| self.root.join(name))
            .find(|path| path.exists())
    }

    /// Load the discovered config file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if no config file exists.
    pub fn load(&self) -> Result<GraphConfig> {
        let path = self.find().ok_or(ConfigError::NotFound)?;
        GraphConfig::load(Some(&path))
    }

    /// Load the discovered config file, or the defaults when there is none.
    pub fn load_or_default(&self) -> Result<GraphConfig> {
        match self.find() {
            Some(path) => GraphConfig::load(Some(&path)),
            None => Ok(GraphConfig::default()),
        }
    }
}

/// Discover config in the current directory, falling back to defaults.
pub fn discover() -> Result<GraphConfig> {
    let root = std::env::current_dir()?;
    ConfigDiscovery::new(root).load_or_default()
}
