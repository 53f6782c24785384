//! Ingest, refresh and reset.

use serde::{Deserialize, Serialize};

use super::ModuleGraph;
use crate::module_id::{is_style_variant, normalize_module_id};
use crate::record::{ModuleRecord, RawModule};
use crate::source::ModuleSource;
use crate::{Error, Result};

/// What one ingest changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestSummary {
    pub added_modules: usize,
    /// Existing modules that gained at least one dependency.
    pub merged_modules: usize,
    pub added_edges: usize,
    pub skipped_style_variants: usize,
}

impl IngestSummary {
    pub fn is_unchanged(&self) -> bool {
        self.added_modules == 0 && self.merged_modules == 0
    }
}

impl ModuleGraph {
    /// Merge `modules` into the store and set the project root.
    ///
    /// Existing records only ever gain dependencies. The whole batch is
    /// validated before anything is written.
    ///
    /// # Errors
    ///
    /// [`Error::MalformedModule`] if a module id is empty after normalization.
    pub fn ingest(&self, modules: &[RawModule], root: &str) -> Result<IngestSummary> {
        for (index, raw) in modules.iter().enumerate() {
            if normalize_module_id(raw.id.trim()).is_empty() {
                return Err(Error::MalformedModule {
                    index,
                    reason: "module id is empty".to_string(),
                });
            }
        }

        let mut summary = IngestSummary::default();
        let mut inner = self.inner.write();
        inner.ingested = true;

        let root_changed = inner.root != root;
        if root_changed {
            inner.root = root.to_string();
            let root = inner.root.clone();
            for record in inner.modules.values_mut() {
                record.set_root(&root);
            }
        }

        for raw in modules {
            if is_style_variant(&raw.id) {
                summary.skipped_style_variants += 1;
                continue;
            }
            let id = normalize_module_id(&raw.id);
            let deps = raw.unique_deps();

            let inner = &mut *inner;
            if let Some(record) = inner.modules.get_mut(&id) {
                let fresh: Vec<String> = deps
                    .into_iter()
                    .filter(|dep| !record.deps.contains(dep))
                    .collect();
                if fresh.is_empty() {
                    continue;
                }
                for dep in &fresh {
                    inner
                        .references
                        .entry(dep.clone())
                        .or_default()
                        .insert(id.clone());
                }
                summary.merged_modules += 1;
                summary.added_edges += fresh.len();
                record.deps.extend(fresh);
            } else {
                for dep in &deps {
                    inner
                        .references
                        .entry(dep.clone())
                        .or_default()
                        .insert(id.clone());
                }
                summary.added_modules += 1;
                summary.added_edges += deps.len();
                let record = ModuleRecord::new(id.clone(), deps, raw.is_virtual, &inner.root);
                inner.modules.insert(id, record);
            }
        }

        if root_changed || !summary.is_unchanged() {
            inner.generation += 1;
            drop(inner);
            self.invalidate_cache();
        }

        tracing::debug!(
            root,
            added = summary.added_modules,
            merged = summary.merged_modules,
            edges = summary.added_edges,
            skipped = summary.skipped_style_variants,
            "ingested modules"
        );
        Ok(summary)
    }

    /// Pull a fresh snapshot from `source` and ingest it.
    pub fn refresh<S>(&self, source: &S) -> Result<IngestSummary>
    where
        S: ModuleSource + ?Sized,
    {
        let snapshot = source.snapshot()?;
        self.ingest(&snapshot.modules, &snapshot.root)
    }

    /// Drop every record, the reverse index and the render cache.
    pub fn reset(&self) {
        let mut inner = self.inner.write();
        let cleared = inner.modules.len();
        inner.modules.clear();
        inner.references.clear();
        inner.root.clear();
        inner.generation += 1;
        drop(inner);
        self.invalidate_cache();
        tracing::debug!(cleared, "graph reset");
    }
}
