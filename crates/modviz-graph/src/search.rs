//! Text search over module records and one-hop expansion of the hits.

use crate::record::{Edge, FxIndexSet, ModuleRecord, ModuleTable, Selection};

/// Case-insensitive substring match against display name and full id.
///
/// Records are scanned in the order given and scanning stops once
/// `max_results` matches are collected. A blank query matches nothing.
pub fn search_by_text<'a, I>(query: &str, records: I, max_results: Option<usize>) -> Vec<String>
where
    I: IntoIterator<Item = &'a ModuleRecord>,
{
    let needle = query.trim().to_lowercase();
    if needle.is_empty() || max_results == Some(0) {
        return Vec::new();
    }

    let mut matches = Vec::new();
    for record in records {
        if record.display_name.to_lowercase().contains(&needle)
            || record.id.to_lowercase().contains(&needle)
        {
            matches.push(record.id.clone());
            if max_results.is_some_and(|max| matches.len() >= max) {
                break;
            }
        }
    }
    matches
}

/// Matches plus their direct visible dependencies, and every edge among the
/// collected nodes.
pub fn expand_search_result<F>(
    matches: &[&ModuleRecord],
    modules: &ModuleTable,
    is_visible: F,
) -> Selection
where
    F: Fn(&ModuleRecord) -> bool,
{
    let mut nodes: FxIndexSet<String> = FxIndexSet::default();
    for record in matches {
        nodes.insert(record.id.clone());
        for dep in &record.deps {
            if modules.get(dep).is_some_and(|child| is_visible(child)) {
                nodes.insert(dep.clone());
            }
        }
    }

    let mut edges = FxIndexSet::default();
    for id in &nodes {
        let Some(record) = modules.get(id) else {
            continue;
        };
        for dep in &record.deps {
            if nodes.contains(dep) {
                edges.insert(Edge::new(id, dep));
            }
        }
    }

    Selection { nodes, edges }
}
