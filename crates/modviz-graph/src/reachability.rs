//! Multi-target reachability with path-edge collection.
//!
//! One post-order walk from the start module answers "which modules lie on a
//! path to any target" and collects the edges of those paths. Every module is
//! explored at most once per call; the outcome is memoized in a call-local
//! table so later encounters (including cycles) are answered from it.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::record::{Edge, ModuleRecord, ModuleTable, Selection};

/// Exploration state of one stack frame.
struct Frame<'a> {
    record: &'a ModuleRecord,
    next_dep: usize,
    reached: bool,
}

/// Collect every module and edge on a path from `start` to any of `targets`.
///
/// - Unknown `start` yields an empty selection.
/// - A `start` that is itself a target yields just that module; its
///   dependencies are not expanded.
/// - Dependencies that are missing from `modules` or rejected by `is_visible`
///   are never explored.
/// - A module is marked explored before its dependencies are visited, so a
///   cycle back to a module still in progress counts as "not reached".
pub fn find_reachable<F>(
    modules: &ModuleTable,
    start: &str,
    targets: &FxHashSet<String>,
    is_visible: F,
) -> Selection
where
    F: Fn(&ModuleRecord) -> bool,
{
    let mut selection = Selection::default();
    let Some(start_record) = modules.get(start) else {
        return selection;
    };

    if targets.contains(start) {
        selection.nodes.insert(start_record.id.clone());
        return selection;
    }

    // `false` while in progress or when nothing was reached.
    let mut explored: FxHashMap<&str, bool> = FxHashMap::default();
    explored.insert(start_record.id.as_str(), false);

    let mut stack = vec![Frame {
        record: start_record,
        next_dep: 0,
        reached: false,
    }];

    while let Some(frame) = stack.last_mut() {
        let record = frame.record;
        if let Some(dep) = record.deps.get(frame.next_dep) {
            frame.next_dep += 1;

            let Some(child) = modules.get(dep) else {
                continue;
            };
            if !is_visible(child) {
                continue;
            }

            if let Some(&reached) = explored.get(child.id.as_str()) {
                if reached {
                    selection.edges.insert(Edge::new(&record.id, &child.id));
                    frame.reached = true;
                }
                continue;
            }

            explored.insert(child.id.as_str(), false);
            stack.push(Frame {
                record: child,
                next_dep: 0,
                reached: targets.contains(&child.id),
            });
            continue;
        }

        // All dependencies resolved; fold the result into the parent.
        let Some(done) = stack.pop() else {
            break;
        };
        if !done.reached {
            continue;
        }
        explored.insert(done.record.id.as_str(), true);
        selection.nodes.insert(done.record.id.clone());
        if let Some(parent) = stack.last_mut() {
            selection
                .edges
                .insert(Edge::new(&parent.record.id, &done.record.id));
            parent.reached = true;
        }
    }

    tracing::trace!(
        start,
        nodes = selection.nodes.len(),
        edges = selection.edges.len(),
        "reachability walk finished"
    );
    selection
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::fixtures::{chains_table, table};

    fn targets(ids: &[&str]) -> FxHashSet<String> {
        ids.iter().map(|id| id.to_string()).collect()
    }

    fn sorted_nodes(selection: &Selection) -> Vec<&str> {
        let mut nodes: Vec<&str> = selection.nodes.iter().map(String::as_str).collect();
        nodes.sort_unstable();
        nodes
    }

    fn sorted_edges(selection: &Selection) -> Vec<String> {
        let mut edges: Vec<String> = selection
            .edges
            .iter()
            .map(|edge| format!("{}→{}", edge.from, edge.to))
            .collect();
        edges.sort_unstable();
        edges
    }

    #[test]
    fn test_single_path() {
        let modules = chains_table();
        let result = find_reachable(
            &modules,
            "/src/main.ts",
            &targets(&["/src/components/Header.vue"]),
            |_| true,
        );
        assert_eq!(
            sorted_nodes(&result),
            vec!["/src/App.vue", "/src/components/Header.vue", "/src/main.ts"]
        );
        assert_eq!(
            sorted_edges(&result),
            vec![
                "/src/App.vue→/src/components/Header.vue",
                "/src/main.ts→/src/App.vue",
            ]
        );
    }

    #[test]
    fn test_multiple_paths_without_duplicates() {
        let modules = chains_table();
        let result = find_reachable(
            &modules,
            "/src/main.ts",
            &targets(&["/src/utils/utils.ts"]),
            |_| true,
        );
        assert_eq!(
            sorted_nodes(&result),
            vec![
                "/src/App.vue",
                "/src/components/Header.vue",
                "/src/main.ts",
                "/src/router.ts",
                "/src/routes.ts",
                "/src/utils/utils.ts",
            ]
        );
        assert_eq!(
            sorted_edges(&result),
            vec![
                "/src/App.vue→/src/components/Header.vue",
                "/src/components/Header.vue→/src/utils/utils.ts",
                "/src/main.ts→/src/App.vue",
                "/src/main.ts→/src/router.ts",
                "/src/router.ts→/src/routes.ts",
                "/src/routes.ts→/src/utils/utils.ts",
            ]
        );
    }

    #[test]
    fn test_no_path_from_leaf() {
        let modules = chains_table();
        let result = find_reachable(
            &modules,
            "/src/utils/utils.ts",
            &targets(&["/src/main.ts"]),
            |_| true,
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_self_target_short_circuits() {
        let modules = chains_table();
        let result = find_reachable(&modules, "/src/main.ts", &targets(&["/src/main.ts"]), |_| {
            true
        });
        assert_eq!(sorted_nodes(&result), vec!["/src/main.ts"]);
        assert!(result.edges.is_empty());
    }

    #[test]
    fn test_cycle_terminates() {
        let modules = table(&[
            ("/src/a.ts", &["/src/b.ts"]),
            ("/src/b.ts", &["/src/c.ts"]),
            ("/src/c.ts", &["/src/a.ts"]),
        ]);
        let result = find_reachable(&modules, "/src/a.ts", &targets(&["/src/c.ts"]), |_| true);
        assert_eq!(
            sorted_nodes(&result),
            vec!["/src/a.ts", "/src/b.ts", "/src/c.ts"]
        );
        assert_eq!(
            sorted_edges(&result),
            vec!["/src/a.ts→/src/b.ts", "/src/b.ts→/src/c.ts"]
        );
    }

    #[test]
    fn test_multiple_targets_union() {
        let modules = chains_table();
        let result = find_reachable(
            &modules,
            "/src/main.ts",
            &targets(&["/src/components/Header.vue", "/src/routes.ts"]),
            |_| true,
        );
        assert_eq!(
            sorted_nodes(&result),
            vec![
                "/src/App.vue",
                "/src/components/Header.vue",
                "/src/main.ts",
                "/src/router.ts",
                "/src/routes.ts",
            ]
        );
        assert_eq!(
            sorted_edges(&result),
            vec![
                "/src/App.vue→/src/components/Header.vue",
                "/src/main.ts→/src/App.vue",
                "/src/main.ts→/src/router.ts",
                "/src/router.ts→/src/routes.ts",
            ]
        );
    }

    #[test]
    fn test_unknown_start_is_empty() {
        let modules = chains_table();
        let result = find_reachable(&modules, "/src/missing.ts", &targets(&["/src/main.ts"]), |_| {
            true
        });
        assert!(result.is_empty());
    }

    #[test]
    fn test_hidden_children_are_skipped() {
        let modules = chains_table();
        let result = find_reachable(
            &modules,
            "/src/main.ts",
            &targets(&["/src/utils/utils.ts"]),
            |record| record.id != "/src/App.vue",
        );
        assert!(!result.contains_node("/src/App.vue"));
        assert!(!result.contains_node("/src/components/Header.vue"));
        assert!(result.contains_edge("/src/routes.ts", "/src/utils/utils.ts"));
    }

    #[test]
    fn test_shared_descendant_is_memoized() {
        // main → a → shared → target, main → b → shared
        let modules = table(&[
            ("/src/main.ts", &["/src/a.ts", "/src/b.ts"]),
            ("/src/a.ts", &["/src/shared.ts"]),
            ("/src/b.ts", &["/src/shared.ts"]),
            ("/src/shared.ts", &["/src/target.ts"]),
            ("/src/target.ts", &[]),
        ]);
        let result = find_reachable(&modules, "/src/main.ts", &targets(&["/src/target.ts"]), |_| {
            true
        });
        assert_eq!(result.nodes.len(), 5);
        assert!(result.contains_edge("/src/b.ts", "/src/shared.ts"));
        assert_eq!(result.edges.len(), 5);
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let ids: Vec<String> = (0..50_000).map(|i| format!("/src/m{i}.ts")).collect();
        let mut modules = ModuleTable::default();
        for (i, id) in ids.iter().enumerate() {
            let deps = ids.get(i + 1).cloned().into_iter().collect();
            modules.insert(id.clone(), ModuleRecord::new(id.clone(), deps, false, ""));
        }
        let last = ids.last().cloned().unwrap_or_default();
        let result = find_reachable(&modules, &ids[0], &targets(&[last.as_str()]), |_| true);
        assert_eq!(result.nodes.len(), ids.len());
    }
}
