//! Top-level configuration and layered loading.

use std::path::Path;

use figment::{
    Figment,
    providers::{Format as _, Json, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};
use crate::limits::TraversalLimits;
use crate::visibility::VisibilityConfig;

/// Everything a front-end needs to drive the graph engine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    #[serde(default)]
    pub visibility: VisibilityConfig,

    #[serde(default)]
    pub limits: TraversalLimits,
}

impl GraphConfig {
    /// Create from a `serde_json::Value` (programmatic config from an API or a test).
    ///
    /// # Example
    ///
    /// ```
    /// use modviz_config::GraphConfig;
    /// use serde_json::json;
    ///
    /// let config = GraphConfig::from_value(json!({
    ///     "visibility": { "node_modules": true },
    ///     "limits": { "path_max_depth": 12 }
    /// }))
    /// .unwrap();
    /// assert!(config.visibility.include_node_modules);
    /// assert_eq!(config.limits.path_max_depth, 12);
    /// assert_eq!(config.limits.subgraph_max_depth, 20);
    /// ```
    pub fn from_value(value: Value) -> Result<Self> {
        let config: GraphConfig =
            serde_json::from_value(value).map_err(|e| ConfigError::InvalidValue {
                field: "config".to_string(),
                hint: Some(e.to_string()),
            })?;
        config.limits.validate()?;
        Ok(config)
    }

    /// Load configuration, layering a config file over the defaults.
    ///
    /// The file format is picked from the extension (`.toml` or `.json`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        // Visibility defaults come from serde; seeding them here would collide
        // with the short aliases (`node_modules`, `virtual`, `lib`) in files.
        let mut figment =
            Figment::new().merge(Serialized::default("limits", TraversalLimits::default()));

        if let Some(path) = path {
            if !path.exists() {
                return Err(ConfigError::NotFound);
            }
            figment = match path.extension().and_then(|ext| ext.to_str()) {
                Some("toml") => figment.merge(Toml::file(path)),
                Some("json") => figment.merge(Json::file(path)),
                other => {
                    return Err(ConfigError::UnsupportedFormat(
                        other.unwrap_or("<none>").to_string(),
                    ));
                }
            };
            tracing::debug!("loading graph config from {}", path.display());
        }

        let config: GraphConfig = figment.extract().map_err(|e| ConfigError::InvalidValue {
            field: "configuration".to_string(),
            hint: Some(e.to_string()),
        })?;
        config.limits.validate()?;
        Ok(config)
    }

    /// Convert to `serde_json::Value`.
    pub fn to_value(&self) -> Result<Value> {
        serde_json::to_value(self).map_err(|e| ConfigError::InvalidValue {
            field: "config".to_string(),
            hint: Some(e.to_string()),
        })
    }
}
