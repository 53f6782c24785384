//! Detail view of a single module.

use modviz_config::VisibilityConfig;
use serde::{Deserialize, Serialize};

use super::{GraphInner, ModuleGraph};
use crate::module_id::normalize_module_id;
use crate::visibility::is_visible;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawerEntry {
    pub path: String,
    pub display_path: String,
}

/// A module with its visible dependencies and referrers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawerData {
    pub name: String,
    pub path: String,
    pub display_path: String,
    pub deps: Vec<DrawerEntry>,
    pub refs: Vec<DrawerEntry>,
}

fn visible_entries<'a>(
    ids: impl Iterator<Item = &'a String>,
    inner: &GraphInner,
    config: &VisibilityConfig,
) -> Vec<DrawerEntry> {
    ids.filter_map(|id| inner.modules.get(id))
        .filter(|record| is_visible(record, config, &inner.root))
        .map(|record| DrawerEntry {
            path: record.id.clone(),
            display_path: record.display_path.clone(),
        })
        .collect()
}

impl ModuleGraph {
    /// `None` for an unknown id. Neighbors that are missing from the store or
    /// hidden by `config` are left out.
    pub fn drawer_data(&self, id: &str, config: &VisibilityConfig) -> Option<DrawerData> {
        let inner = self.inner.read();
        let record = inner.modules.get(&normalize_module_id(id))?;

        let deps = visible_entries(record.deps.iter(), &inner, config);
        let refs = inner
            .references
            .get(&record.id)
            .map(|referrers| visible_entries(referrers.iter(), &inner, config))
            .unwrap_or_default();

        Some(DrawerData {
            name: record.display_name.clone(),
            path: record.id.clone(),
            display_path: record.display_path.clone(),
            deps,
            refs,
        })
    }
}
