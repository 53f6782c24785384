//! Property-based tests for modviz-graph using proptest.
//!
//! Run with: cargo test --features proptest --package modviz-graph property_tests

#![cfg(feature = "proptest")]

use proptest::prelude::*;
use rustc_hash::FxHashSet;

use crate::{ModuleGraph, PathVisitPolicy, RawModule, VisibilityConfig};

fn module_id(index: usize) -> String {
    format!("/src/m{index}.ts")
}

/// Small random graphs: up to 12 modules, each with up to 4 deps (cycles and
/// self-loops included).
fn graph_strategy() -> impl Strategy<Value = Vec<RawModule>> {
    (1usize..=12).prop_flat_map(|size| {
        prop::collection::vec(prop::collection::vec(0..size, 0..=4), size).prop_map(|adjacency| {
            adjacency
                .into_iter()
                .enumerate()
                .map(|(index, deps)| {
                    RawModule::new(module_id(index), deps.into_iter().map(module_id))
                })
                .collect()
        })
    })
}

fn ingested(modules: &[RawModule]) -> ModuleGraph {
    let graph = ModuleGraph::new();
    graph.ingest(modules, "/src").expect("ingest");
    graph
}

proptest! {
    #[test]
    fn prop_ingest_is_idempotent(modules in graph_strategy()) {
        let graph = ingested(&modules);
        let before = (graph.len(), graph.edge_count());
        let summary = graph.ingest(&modules, "/src").expect("re-ingest");
        prop_assert!(summary.is_unchanged());
        prop_assert_eq!((graph.len(), graph.edge_count()), before);
    }

    #[test]
    fn prop_deps_only_grow(first in graph_strategy(), second in graph_strategy()) {
        let graph = ingested(&first);
        let before: Vec<(String, Vec<String>)> = graph
            .records()
            .into_iter()
            .map(|record| (record.id, record.deps))
            .collect();
        graph.ingest(&second, "/src").expect("second ingest");

        for (id, deps) in before {
            let after = graph.record(&id).expect("records are never removed");
            prop_assert!(after.deps.len() >= deps.len());
            prop_assert_eq!(&after.deps[..deps.len()], &deps[..]);
            let unique: FxHashSet<&String> = after.deps.iter().collect();
            prop_assert_eq!(unique.len(), after.deps.len());
        }
    }

    #[test]
    fn prop_reachability_is_closed(
        modules in graph_strategy(),
        start in 0usize..12,
        target in 0usize..12,
    ) {
        let graph = ingested(&modules);
        let result = graph.find_reachable(
            &module_id(start),
            &[module_id(target)],
            &VisibilityConfig::default(),
        );

        for edge in &result.edges {
            prop_assert!(result.contains_node(&edge.from));
            prop_assert!(result.contains_node(&edge.to));
        }
        if !result.is_empty() {
            prop_assert!(result.contains_node(&module_id(start)));
            prop_assert!(result.contains_node(&module_id(target)));
        }
    }

    #[test]
    fn prop_enumerated_paths_are_valid(
        modules in graph_strategy(),
        start in 0usize..12,
        target in 0usize..12,
        max_depth in 0usize..8,
    ) {
        let graph = ingested(&modules);
        let start_id = module_id(start);
        let target_id = module_id(target);
        let paths = graph.find_all_paths_within(
            &start_id,
            &[target_id.as_str()],
            &VisibilityConfig::default(),
            max_depth,
            PathVisitPolicy::PerPath,
        );

        for info in &paths {
            prop_assert_eq!(info.start(), Some(start_id.as_str()));
            prop_assert_eq!(info.end(), Some(target_id.as_str()));
            prop_assert!(info.depth() <= max_depth);
            prop_assert_eq!(info.path.len(), info.display_path.len());

            let distinct: FxHashSet<&String> = info.path.iter().collect();
            prop_assert_eq!(distinct.len(), info.path.len());

            for pair in info.path.windows(2) {
                let from = graph.record(&pair[0]).expect("path nodes exist");
                prop_assert!(from.deps.contains(&pair[1]));
            }
        }

        let shared = graph.find_all_paths_within(
            &start_id,
            &[target_id.as_str()],
            &VisibilityConfig::default(),
            max_depth,
            PathVisitPolicy::Shared,
        );
        prop_assert!(shared.len() <= paths.len());
    }
}
