//! Visibility filtering of records, applied at query time.
//!
//! Storage is never filtered: the same records are re-filtered for every
//! query with whatever [`VisibilityConfig`] the caller supplies.

use modviz_config::VisibilityConfig;

use crate::module_id::is_under_root;
use crate::record::{ModuleRecord, ModuleTable, ReferenceIndex};

/// Per-record visibility policy.
///
/// Third-party modules are also reported as virtual by some build tools, so the
/// virtual rule only applies to modules outside `node_modules`.
pub fn is_visible(record: &ModuleRecord, config: &VisibilityConfig, root: &str) -> bool {
    let is_node_module = record.is_node_module();
    if is_node_module && !config.include_node_modules {
        return false;
    }
    if record.is_virtual && !is_node_module && !config.include_virtual {
        return false;
    }
    if !record.is_virtual && !is_under_root(&record.id, root) && !config.include_out_of_project_lib
    {
        return false;
    }
    true
}

/// Visibility bound to one store snapshot and one config.
#[derive(Clone, Copy)]
pub struct VisibilityFilter<'a> {
    config: VisibilityConfig,
    root: &'a str,
    modules: &'a ModuleTable,
    references: &'a ReferenceIndex,
}

impl<'a> VisibilityFilter<'a> {
    pub fn new(
        config: VisibilityConfig,
        root: &'a str,
        modules: &'a ModuleTable,
        references: &'a ReferenceIndex,
    ) -> Self {
        Self {
            config,
            root,
            modules,
            references,
        }
    }

    pub fn config(&self) -> &VisibilityConfig {
        &self.config
    }

    pub fn is_visible(&self, record: &ModuleRecord) -> bool {
        is_visible(record, &self.config, self.root)
    }

    /// A module without referrers is visible; otherwise at least one referrer
    /// must itself be visible, so leaves of hidden modules don't float free.
    pub fn is_reference_visible(&self, id: &str) -> bool {
        match self.references.get(id) {
            None => true,
            Some(referrers) if referrers.is_empty() => true,
            Some(referrers) => referrers.iter().any(|referrer| {
                self.modules
                    .get(referrer)
                    .is_some_and(|record| self.is_visible(record))
            }),
        }
    }

    /// Inclusion rule for projections: visible and reference-visible.
    pub fn includes(&self, record: &ModuleRecord) -> bool {
        self.is_visible(record) && self.is_reference_visible(&record.id)
    }
}
