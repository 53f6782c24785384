//! Read-only queries. Unknown ids degrade to empty results, never errors.

use modviz_config::VisibilityConfig;
use rustc_hash::FxHashSet;

use super::ModuleGraph;
use crate::module_id::normalize_module_id;
use crate::paths::{PathInfo, PathVisitPolicy, find_all_paths};
use crate::reachability::find_reachable;
use crate::record::{ModuleRecord, Selection};
use crate::search::search_by_text;
use crate::statistics::GraphStatistics;
use crate::subgraph::collect_subgraph;
use crate::visibility::{VisibilityFilter, is_visible};

fn target_set<S: AsRef<str>>(targets: &[S]) -> FxHashSet<String> {
    targets
        .iter()
        .map(|target| normalize_module_id(target.as_ref()))
        .collect()
}

impl ModuleGraph {
    pub fn root(&self) -> String {
        self.inner.read().root.clone()
    }

    /// Whether any ingest has happened, including one that was later reset.
    pub fn is_ingested(&self) -> bool {
        self.inner.read().ingested
    }

    pub fn len(&self) -> usize {
        self.inner.read().modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().modules.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.inner
            .read()
            .modules
            .values()
            .map(|record| record.deps.len())
            .sum()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner
            .read()
            .modules
            .contains_key(&normalize_module_id(id))
    }

    pub fn record(&self, id: &str) -> Option<ModuleRecord> {
        self.inner
            .read()
            .modules
            .get(&normalize_module_id(id))
            .cloned()
    }

    /// All records in ingestion order.
    pub fn records(&self) -> Vec<ModuleRecord> {
        self.inner.read().modules.values().cloned().collect()
    }

    /// Ids of the modules that depend on `id`.
    pub fn referrers(&self, id: &str) -> Vec<String> {
        self.inner
            .read()
            .references
            .get(&normalize_module_id(id))
            .map(|referrers| referrers.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn is_visible(&self, id: &str, config: &VisibilityConfig) -> bool {
        let inner = self.inner.read();
        inner
            .modules
            .get(&normalize_module_id(id))
            .is_some_and(|record| is_visible(record, config, &inner.root))
    }

    /// Visible and reference-visible: the projection inclusion rule.
    pub fn is_included(&self, id: &str, config: &VisibilityConfig) -> bool {
        let inner = self.inner.read();
        let filter = VisibilityFilter::new(*config, &inner.root, &inner.modules, &inner.references);
        inner
            .modules
            .get(&normalize_module_id(id))
            .is_some_and(|record| filter.includes(record))
    }

    /// Nodes and edges on the way from `start` to any of `targets`.
    pub fn find_reachable<S: AsRef<str>>(
        &self,
        start: &str,
        targets: &[S],
        config: &VisibilityConfig,
    ) -> Selection {
        let inner = self.inner.read();
        find_reachable(
            &inner.modules,
            &normalize_module_id(start),
            &target_set(targets),
            |record| is_visible(record, config, &inner.root),
        )
    }

    /// Paths from `start` to any of `targets`, bounded by the configured path
    /// depth.
    pub fn find_all_paths<S: AsRef<str>>(
        &self,
        start: &str,
        targets: &[S],
        config: &VisibilityConfig,
        policy: PathVisitPolicy,
    ) -> Vec<PathInfo> {
        self.find_all_paths_within(start, targets, config, self.limits.path_max_depth, policy)
    }

    pub fn find_all_paths_within<S: AsRef<str>>(
        &self,
        start: &str,
        targets: &[S],
        config: &VisibilityConfig,
        max_depth: usize,
        policy: PathVisitPolicy,
    ) -> Vec<PathInfo> {
        let inner = self.inner.read();
        find_all_paths(
            &inner.modules,
            &normalize_module_id(start),
            &target_set(targets),
            max_depth,
            policy,
            |record| is_visible(record, config, &inner.root),
        )
    }

    /// Text search over every stored record, in ingestion order.
    pub fn search_by_text(&self, query: &str, max_results: Option<usize>) -> Vec<String> {
        let inner = self.inner.read();
        search_by_text(query, inner.modules.values(), max_results)
    }

    /// Ids below `root_id`, bounded by the configured subgraph depth.
    pub fn subgraph(&self, root_id: &str) -> Vec<String> {
        let inner = self.inner.read();
        collect_subgraph(
            &inner.modules,
            &normalize_module_id(root_id),
            self.limits.subgraph_max_depth,
        )
    }

    pub fn statistics(&self) -> GraphStatistics {
        let inner = self.inner.read();
        let modules = &inner.modules;
        GraphStatistics::new(
            modules.len(),
            modules.values().map(|record| record.deps.len()).sum(),
            modules.values().filter(|record| record.is_virtual).count(),
            modules
                .values()
                .filter(|record| record.is_node_module())
                .count(),
            modules
                .keys()
                .filter(|id| {
                    inner
                        .references
                        .get(*id)
                        .is_some_and(|referrers| !referrers.is_empty())
                })
                .count(),
        )
    }
}
