//! Enumerated paths between searched modules, and their highlighted rendering.

use modviz_config::VisibilityConfig;
use rustc_hash::FxHashSet;

use super::ModuleGraph;
use crate::paths::{PathInfo, PathVisitPolicy, find_all_paths};
use crate::projection::{PathfindingRequest, Projection, ProjectionBuilder};
use crate::render::Highlight;
use crate::visibility::is_visible;
use crate::{Error, Result};

impl ModuleGraph {
    /// Every path from a start candidate to an end candidate, concatenated in
    /// start-candidate order.
    ///
    /// # Errors
    ///
    /// [`Error::NotIngested`] if nothing was ever ingested.
    pub fn pathfinding_results(
        &self,
        request: &PathfindingRequest,
        config: &VisibilityConfig,
    ) -> Result<Vec<PathInfo>> {
        self.pathfinding_results_with(request, config, PathVisitPolicy::default())
    }

    pub fn pathfinding_results_with(
        &self,
        request: &PathfindingRequest,
        config: &VisibilityConfig,
        policy: PathVisitPolicy,
    ) -> Result<Vec<PathInfo>> {
        let inner = self.inner.read();
        if !inner.ingested {
            return Err(Error::NotIngested);
        }
        if !request.is_active() {
            return Ok(Vec::new());
        }

        let (starts, ends) = inner.pathfinding_candidates(request, &self.limits);
        let end_set: FxHashSet<String> = ends.into_iter().collect();
        let mut paths = Vec::new();
        for start in &starts {
            paths.extend(find_all_paths(
                &inner.modules,
                start,
                &end_set,
                self.limits.path_max_depth,
                policy,
                |record| is_visible(record, config, &inner.root),
            ));
        }
        tracing::trace!(
            starts = starts.len(),
            ends = end_set.len(),
            paths = paths.len(),
            "pathfinding finished"
        );
        Ok(paths)
    }

    /// Nodes and edges along `paths`: first node of each path is a path start,
    /// last is a path end, the rest are intermediate. A node on several paths
    /// keeps the role from the last path that visits it.
    pub fn path_projection(&self, paths: &[PathInfo]) -> Projection {
        let inner = self.inner.read();
        let mut builder = ProjectionBuilder::default();
        for info in paths {
            let last = info.path.len().saturating_sub(1);
            for (index, id) in info.path.iter().enumerate() {
                let highlight = if index == 0 {
                    Highlight::PathStart
                } else if index == last {
                    Highlight::PathEnd
                } else {
                    Highlight::PathIntermediate
                };
                builder.node(id, &inner.modules, highlight);
                if let Some(next) = info.path.get(index + 1) {
                    builder.edge(id, next);
                }
            }
        }
        builder.build_path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RawModule;
    use crate::render::ArrowStyle;

    fn chains() -> ModuleGraph {
        let graph = ModuleGraph::new();
        graph
            .ingest(
                &[
                    RawModule::new("/src/main.ts", ["/src/App.vue", "/src/router.ts"]),
                    RawModule::new("/src/App.vue", ["/src/components/Header.vue"]),
                    RawModule::new("/src/components/Header.vue", ["/src/utils/utils.ts"]),
                    RawModule::new("/src/router.ts", ["/src/routes.ts"]),
                    RawModule::new("/src/routes.ts", ["/src/utils/utils.ts"]),
                    RawModule::new("/src/utils/utils.ts", Vec::<String>::new()),
                ],
                "",
            )
            .expect("ingest");
        graph
    }

    #[test]
    fn test_results_before_ingest_fail() {
        let graph = ModuleGraph::new();
        let request = PathfindingRequest::new("main", "utils");
        assert!(matches!(
            graph.pathfinding_results(&request, &VisibilityConfig::default()),
            Err(Error::NotIngested)
        ));
    }

    #[test]
    fn test_results_for_two_chains() {
        let graph = chains();
        let request = PathfindingRequest::new("main", "utils");
        let paths = graph
            .pathfinding_results(&request, &VisibilityConfig::default())
            .expect("paths");
        assert_eq!(paths.len(), 2);
        assert_eq!(paths[0].display_path[1], "App.vue");
        assert_eq!(paths[1].display_path[1], "router.ts");
    }

    #[test]
    fn test_inactive_request_yields_nothing() {
        let graph = chains();
        let request = PathfindingRequest::new("main", "");
        let paths = graph
            .pathfinding_results(&request, &VisibilityConfig::default())
            .expect("paths");
        assert!(paths.is_empty());
    }

    #[test]
    fn test_path_projection_roles() {
        let graph = chains();
        let paths = graph
            .pathfinding_results(
                &PathfindingRequest::new("main", "utils"),
                &VisibilityConfig::default(),
            )
            .expect("paths");
        let projection = graph.path_projection(&paths);

        assert_eq!(projection.nodes.len(), 6);
        assert_eq!(projection.edges.len(), 6);
        let role = |id: &str| projection.node(id).map(|node| node.highlight);
        assert_eq!(role("/src/main.ts"), Some(Highlight::PathStart));
        assert_eq!(role("/src/utils/utils.ts"), Some(Highlight::PathEnd));
        assert_eq!(role("/src/routes.ts"), Some(Highlight::PathIntermediate));
        assert!(projection.edges.iter().all(|edge| edge.arrows == ArrowStyle::Path));
        assert!(projection.nodes.iter().all(|node| node.label_markup().starts_with("<b>")));
    }
}
