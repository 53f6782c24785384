//! Shared helpers: configuration, snapshot loading and graph construction.

use std::fs;
use std::path::Path;

use modviz_config::{ConfigDiscovery, GraphConfig, VisibilityConfig};
use modviz_graph::{ModuleGraph, ModuleSnapshot};

use crate::cli::SnapshotArgs;
use crate::error::{Result, ResultExt};

/// Load `--config` if given, else discover `modviz.toml`/`modviz.json` in the
/// working directory, else defaults.
pub fn load_config(path: Option<&Path>) -> Result<GraphConfig> {
    let config = match path {
        Some(path) => GraphConfig::load(Some(path))
            .context(format!("Failed to load config {}", path.display()))?,
        None => ConfigDiscovery::new(std::env::current_dir()?).load_or_default()?,
    };
    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

/// Config visibility with command-line switches turned on top.
pub fn visibility(args: &SnapshotArgs, config: &GraphConfig) -> VisibilityConfig {
    let base = config.visibility;
    base.with_node_modules(base.include_node_modules || args.node_modules)
        .with_virtual(base.include_virtual || args.include_virtual)
        .with_out_of_project_lib(base.include_out_of_project_lib || args.lib)
}

pub fn load_snapshot(path: &Path, collapse: bool) -> Result<ModuleSnapshot> {
    let content = fs::read_to_string(path).with_path(path)?;
    let snapshot = ModuleSnapshot::from_json(&content)?;
    tracing::debug!(
        path = %path.display(),
        modules = snapshot.modules.len(),
        collapse,
        "snapshot loaded"
    );
    Ok(if collapse { snapshot.collapsed() } else { snapshot })
}

/// Build a graph from the snapshot argument.
pub fn build_graph(args: &SnapshotArgs, config: &GraphConfig) -> Result<ModuleGraph> {
    let snapshot = load_snapshot(&args.snapshot, args.collapse)?;
    let graph = ModuleGraph::with_limits(config.limits);
    let summary = graph.ingest(&snapshot.modules, &snapshot.root)?;
    tracing::info!(
        modules = summary.added_modules,
        edges = summary.added_edges,
        "graph ready"
    );
    Ok(graph)
}
