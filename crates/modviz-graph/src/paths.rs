//! Depth-bounded enumeration of dependency paths between modules.

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::module_id::display_name;
use crate::record::{ModuleRecord, ModuleTable};

/// One path from a start module to a target, for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathInfo {
    /// Module ids, start first.
    pub path: Vec<String>,
    /// Display names matching `path` position by position.
    pub display_path: Vec<String>,
}

impl PathInfo {
    pub fn start(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }

    pub fn end(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }

    /// Number of edges on the path.
    pub fn depth(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Human-readable form, e.g. `main.ts -> App.vue -> Header.vue`.
    pub fn format_chain(&self) -> String {
        self.display_path.join(" -> ")
    }
}

/// When a visited module may be entered again within one enumeration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PathVisitPolicy {
    /// Visited markers are cleared on backtrack: every simple path within the
    /// depth bound is reported.
    #[default]
    PerPath,
    /// Visited markers persist for the whole call: a module reached once is
    /// never entered again from another branch. Diamond-shaped graphs
    /// (`a→b→d`, `a→c→d`) report `d` only through the first branch.
    Shared,
}

/// Fewest visible edges from each module to any target.
///
/// Modules absent from the map cannot reach a target at all.
fn distances_to_targets<'a, F>(
    modules: &'a ModuleTable,
    targets: &'a FxHashSet<String>,
    is_visible: &F,
) -> FxHashMap<&'a str, usize>
where
    F: Fn(&ModuleRecord) -> bool,
{
    let mut referrers: FxHashMap<&str, Vec<&str>> = FxHashMap::default();
    for record in modules.values() {
        for dep in &record.deps {
            if modules.get(dep).is_some_and(|child| is_visible(child)) {
                referrers
                    .entry(dep.as_str())
                    .or_default()
                    .push(record.id.as_str());
            }
        }
    }

    let mut distances: FxHashMap<&str, usize> = FxHashMap::default();
    let mut queue: VecDeque<(&str, usize)> = VecDeque::new();
    for target in targets {
        distances.insert(target.as_str(), 0);
        queue.push_back((target.as_str(), 0));
    }
    while let Some((id, distance)) = queue.pop_front() {
        let Some(parents) = referrers.get(id) else {
            continue;
        };
        for &parent in parents {
            if !distances.contains_key(parent) {
                distances.insert(parent, distance + 1);
                queue.push_back((parent, distance + 1));
            }
        }
    }
    distances
}

struct PathWalker<'a, F> {
    modules: &'a ModuleTable,
    targets: &'a FxHashSet<String>,
    max_depth: usize,
    policy: PathVisitPolicy,
    is_visible: F,
    distances: FxHashMap<&'a str, usize>,
    visited: FxHashSet<&'a str>,
    current: Vec<&'a str>,
    paths: Vec<PathInfo>,
}

impl<'a, F> PathWalker<'a, F>
where
    F: Fn(&ModuleRecord) -> bool,
{
    fn walk(&mut self, id: &'a str, depth: usize) {
        if depth > self.max_depth || self.visited.contains(id) {
            return;
        }

        self.current.push(id);
        self.visited.insert(id);

        if self.targets.contains(id) {
            self.record_current();
        }

        if let Some(record) = self.modules.get(id) {
            for dep in &record.deps {
                if self.visited.contains(dep.as_str()) {
                    continue;
                }
                // A child is worth entering only if some target lies within
                // the remaining depth.
                let in_reach = self
                    .distances
                    .get(dep.as_str())
                    .is_some_and(|distance| depth + 1 + distance <= self.max_depth);
                let descend = in_reach
                    && self
                        .modules
                        .get(dep)
                        .is_some_and(|child| (self.is_visible)(child));
                if descend {
                    self.walk(dep, depth + 1);
                }
            }
        }

        if self.policy == PathVisitPolicy::PerPath {
            self.visited.remove(id);
        }
        self.current.pop();
    }

    fn record_current(&mut self) {
        let display_path = self
            .current
            .iter()
            .map(|id| match self.modules.get(*id) {
                Some(record) => record.display_name.clone(),
                None => display_name(id).to_string(),
            })
            .collect();
        self.paths.push(PathInfo {
            path: self.current.iter().map(|id| id.to_string()).collect(),
            display_path,
        });
    }
}

/// Enumerate paths from `start` to any module in `targets`, in DFS discovery
/// order (first dependency first).
///
/// The start module sits at depth 0; a module deeper than `max_depth` is never
/// entered. Reaching a target records the path and keeps descending, so a
/// target that leads on to another target yields both paths. Dependencies that
/// are missing from `modules` or rejected by `is_visible` are not entered, and
/// neither are modules from which no target is reachable within the depth
/// bound.
pub fn find_all_paths<F>(
    modules: &ModuleTable,
    start: &str,
    targets: &FxHashSet<String>,
    max_depth: usize,
    policy: PathVisitPolicy,
    is_visible: F,
) -> Vec<PathInfo>
where
    F: Fn(&ModuleRecord) -> bool,
{
    let distances = distances_to_targets(modules, targets, &is_visible);
    let mut walker = PathWalker {
        modules,
        targets,
        max_depth,
        policy,
        is_visible,
        distances,
        visited: FxHashSet::default(),
        current: Vec::new(),
        paths: Vec::new(),
    };
    walker.walk(start, 0);
    walker.paths
}
