//! Where raw modules come from, and the optional collapse of untracked
//! intermediates before ingestion.

use std::sync::LazyLock;

use regex::Regex;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::record::RawModule;
use crate::{Error, Result};

/// Ids the graph tracks when collapsing: source files by extension, optionally
/// carrying a `?v=` cache-busting query.
static TRACKED_MODULE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\.(vue|js|ts|jsx|tsx|html|json)($|\?v=)").ok());

pub fn is_tracked_module(id: &str) -> bool {
    TRACKED_MODULE.as_ref().is_some_and(|re| re.is_match(id))
}

/// The module list plus project root, as reported by the build tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleSnapshot {
    #[serde(default)]
    pub root: String,
    pub modules: Vec<RawModule>,
}

impl ModuleSnapshot {
    pub fn new(root: impl Into<String>, modules: Vec<RawModule>) -> Self {
        Self {
            root: root.into(),
            modules,
        }
    }

    /// Parse `{ "root": "...", "modules": [{ "id", "deps", "virtual" }] }`.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::Json)
    }

    /// The same snapshot with untracked modules folded away.
    pub fn collapsed(self) -> Self {
        let modules = collapse_untracked(&self.modules);
        Self {
            root: self.root,
            modules,
        }
    }
}

/// Inbound query function: produces the current module list on demand.
pub trait ModuleSource {
    fn snapshot(&self) -> Result<ModuleSnapshot>;
}

impl<F> ModuleSource for F
where
    F: Fn() -> Result<ModuleSnapshot>,
{
    fn snapshot(&self) -> Result<ModuleSnapshot> {
        self()
    }
}

/// A source that always returns the same snapshot.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    snapshot: ModuleSnapshot,
}

impl StaticSource {
    pub fn new(snapshot: ModuleSnapshot) -> Self {
        Self { snapshot }
    }
}

impl ModuleSource for StaticSource {
    fn snapshot(&self) -> Result<ModuleSnapshot> {
        Ok(self.snapshot.clone())
    }
}

/// Keep only tracked modules, rewriting each one's deps so untracked
/// intermediates are replaced by the tracked modules they lead to.
pub fn collapse_untracked(modules: &[RawModule]) -> Vec<RawModule> {
    let by_id: FxHashMap<&str, &RawModule> = modules
        .iter()
        .map(|module| (module.id.as_str(), module))
        .collect();
    let tracked: FxHashSet<&str> = modules
        .iter()
        .filter(|module| is_tracked_module(&module.id))
        .map(|module| module.id.as_str())
        .collect();

    modules
        .iter()
        .filter(|module| tracked.contains(module.id.as_str()))
        .map(|module| {
            let mut seen = FxHashSet::default();
            let mut deps = Vec::new();
            tracked_deps(&module.id, &by_id, &tracked, &mut seen, &mut deps);
            RawModule {
                id: module.id.clone(),
                deps,
                is_virtual: module.is_virtual,
            }
        })
        .collect()
}

fn tracked_deps<'a>(
    id: &'a str,
    by_id: &FxHashMap<&'a str, &'a RawModule>,
    tracked: &FxHashSet<&'a str>,
    seen: &mut FxHashSet<&'a str>,
    out: &mut Vec<String>,
) {
    if !seen.insert(id) {
        return;
    }
    let Some(module) = by_id.get(id) else {
        return;
    };
    for dep in &module.deps {
        if tracked.contains(dep.as_str()) {
            out.push(dep.clone());
        } else {
            tracked_deps(dep, by_id, tracked, seen, out);
        }
    }
}
