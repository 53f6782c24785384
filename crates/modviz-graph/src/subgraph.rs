//! Depth-bounded collection of everything below a root module.

use rustc_hash::FxHashSet;

use crate::record::ModuleTable;

/// Ids reachable from `root_id` in DFS pre-order, root first.
///
/// The root counts as depth 1, so at most `max_depth` levels are collected.
/// Missing ids are skipped. An unknown root yields an empty list.
pub fn collect_subgraph(modules: &ModuleTable, root_id: &str, max_depth: usize) -> Vec<String> {
    let mut collected = Vec::new();
    if !modules.contains_key(root_id) {
        return collected;
    }

    let mut seen: FxHashSet<&str> = FxHashSet::default();
    // Children are pushed in reverse so the first dependency is visited first.
    let mut stack: Vec<(&str, usize)> = vec![(root_id, 1)];
    while let Some((id, depth)) = stack.pop() {
        let Some(record) = modules.get(id) else {
            continue;
        };
        if !seen.insert(record.id.as_str()) {
            continue;
        }
        collected.push(record.id.clone());

        if depth >= max_depth {
            continue;
        }
        for dep in record.deps.iter().rev() {
            if !seen.contains(dep.as_str()) {
                stack.push((dep.as_str(), depth + 1));
            }
        }
    }
    collected
}
