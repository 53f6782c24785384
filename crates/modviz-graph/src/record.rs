//! Raw inbound modules and the canonical records stored in the graph.

use indexmap::{IndexMap, IndexSet};
use rustc_hash::{FxBuildHasher, FxHashMap};
use serde::{Deserialize, Serialize};

use crate::module_id::{
    display_name, file_group, is_node_module, is_style_variant, normalize_module_id, strip_root,
};
use crate::{Error, Result};

/// Insertion-ordered map with the fast Fx hasher.
pub type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Insertion-ordered set with the fast Fx hasher.
pub type FxIndexSet<T> = IndexSet<T, FxBuildHasher>;

/// The authoritative record table, in ingestion order.
pub type ModuleTable = FxIndexMap<String, ModuleRecord>;

/// Reverse adjacency: module id to the ids of the modules that depend on it.
pub type ReferenceIndex = FxHashMap<String, FxIndexSet<String>>;

/// A module exactly as the build tool reports it.
///
/// This is the strict shape enforced at the ingestion boundary: `deps` must be
/// an array of strings when present; a missing `deps` or `virtual` field
/// defaults to empty/false.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawModule {
    pub id: String,
    #[serde(default)]
    pub deps: Vec<String>,
    #[serde(default, rename = "virtual")]
    pub is_virtual: bool,
}

impl RawModule {
    pub fn new<I, S>(id: impl Into<String>, deps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            deps: deps.into_iter().map(Into::into).collect(),
            is_virtual: false,
        }
    }

    /// Mark the module as virtual (no file on disk).
    pub fn into_virtual(mut self) -> Self {
        self.is_virtual = true;
        self
    }

    /// Parse a JSON array of raw modules.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] when an element does not have the strict shape,
    /// e.g. `deps` is not an array of strings.
    pub fn parse_list(json: &str) -> Result<Vec<RawModule>> {
        serde_json::from_str(json).map_err(Error::Json)
    }

    /// Dependencies with style variants removed, normalized, and de-duplicated
    /// in first-seen order. Entries that normalize to an empty id are dropped.
    pub fn unique_deps(&self) -> Vec<String> {
        let mut unique: FxIndexSet<String> = FxIndexSet::default();
        for dep in &self.deps {
            if is_style_variant(dep) {
                continue;
            }
            let dep = normalize_module_id(dep);
            if !dep.is_empty() {
                unique.insert(dep);
            }
        }
        unique.into_iter().collect()
    }
}

/// One node of the build graph after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRecord {
    pub id: String,
    pub deps: Vec<String>,
    pub is_virtual: bool,
    pub display_name: String,
    pub display_path: String,
}

impl ModuleRecord {
    pub(crate) fn new(id: String, deps: Vec<String>, is_virtual: bool, root: &str) -> Self {
        let display_name = display_name(&id).to_string();
        let display_path = strip_root(&id, root);
        Self {
            id,
            deps,
            is_virtual,
            display_name,
            display_path,
        }
    }

    /// Re-derive fields that depend on the project root.
    pub(crate) fn set_root(&mut self, root: &str) {
        self.display_path = strip_root(&self.id, root);
    }

    pub fn is_node_module(&self) -> bool {
        is_node_module(&self.id)
    }

    /// Render group: the file extension, or `"unknown"`.
    pub fn group(&self) -> &str {
        file_group(&self.id)
    }

    /// Outgoing edges, in dependency order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.deps.iter().map(|dep| Edge::new(&self.id, dep))
    }
}

/// A directed dependency edge, derived from [`ModuleRecord::deps`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

/// De-duplicated nodes and edges produced by a traversal or search expansion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub nodes: FxIndexSet<String>,
    pub edges: FxIndexSet<Edge>,
}

impl Selection {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains(id)
    }

    pub fn contains_edge(&self, from: &str, to: &str) -> bool {
        self.edges.iter().any(|edge| edge.from == from && edge.to == to)
    }

    /// Union another selection into this one.
    pub fn merge(&mut self, other: Selection) {
        self.nodes.extend(other.nodes);
        self.edges.extend(other.edges);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_deps_drops_styles_and_duplicates() {
        let raw = RawModule::new(
            "/src/App.vue",
            [
                "/src/Header.vue?vue&type=style&index=0&lang.css",
                "/src/Header.vue",
                "/src/Header.vue?v=2",
                "/src//utils.ts",
            ],
        );
        assert_eq!(raw.unique_deps(), vec!["/src/Header.vue", "/src/utils.ts"]);
    }

    #[test]
    fn test_unique_deps_drops_empty_ids() {
        let raw = RawModule::new("/src/App.vue", ["?x", "#frag", "/src/a.ts"]);
        assert_eq!(raw.unique_deps(), vec!["/src/a.ts"]);
    }

    #[test]
    fn test_parse_list_defaults_optional_fields() {
        let modules = RawModule::parse_list(r#"[{ "id": "/src/a.ts" }, { "id": "virtual:x", "deps": ["/src/a.ts"], "virtual": true }]"#)
            .unwrap();
        assert_eq!(modules.len(), 2);
        assert!(modules[0].deps.is_empty());
        assert!(!modules[0].is_virtual);
        assert!(modules[1].is_virtual);
    }

    #[test]
    fn test_parse_list_rejects_non_array_deps() {
        let err = RawModule::parse_list(r#"[{ "id": "/src/a.ts", "deps": "/src/b.ts" }]"#)
            .unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_record_derived_fields() {
        let record = ModuleRecord::new(
            "/app/src/components/Header.vue".to_string(),
            vec![],
            false,
            "/app",
        );
        assert_eq!(record.display_name, "Header.vue");
        assert_eq!(record.display_path, "/src/components/Header.vue");
        assert_eq!(record.group(), "vue");
        assert!(!record.is_node_module());
    }

    #[test]
    fn test_selection_merge_is_set_union() {
        let mut a = Selection::default();
        a.nodes.insert("x".to_string());
        a.edges.insert(Edge::new("x", "y"));
        let mut b = Selection::default();
        b.nodes.insert("x".to_string());
        b.nodes.insert("y".to_string());
        b.edges.insert(Edge::new("x", "y"));

        a.merge(b);
        assert_eq!(a.nodes.len(), 2);
        assert_eq!(a.edges.len(), 1);
        assert!(a.contains_edge("x", "y"));
    }
}
