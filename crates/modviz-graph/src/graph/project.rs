//! Projection of the store into renderable nodes and edges.

use std::sync::Arc;

use modviz_config::TraversalLimits;
use rustc_hash::FxHashSet;

use super::{GraphInner, ModuleGraph, RenderCache};
use crate::module_id::normalize_module_id;
use crate::projection::{PathfindingRequest, Projection, ProjectionRequest};
use crate::reachability::find_reachable;
use crate::record::{Edge, ModuleRecord, Selection};
use crate::render::Highlight;
use crate::search::{expand_search_result, search_by_text};
use crate::subgraph::collect_subgraph;
use crate::visibility::VisibilityFilter;
use crate::{Error, Result};

impl GraphInner {
    /// Resolve pathfinding text to capped start and end id lists, searching
    /// every stored record.
    pub(crate) fn pathfinding_candidates(
        &self,
        request: &PathfindingRequest,
        limits: &TraversalLimits,
    ) -> (Vec<String>, Vec<String>) {
        let starts = search_by_text(
            &request.start,
            self.modules.values(),
            Some(limits.start_candidates),
        );
        let ends = search_by_text(
            &request.end,
            self.modules.values(),
            Some(limits.end_candidates),
        );
        (starts, ends)
    }

    fn build_projection(&self, request: &ProjectionRequest, limits: &TraversalLimits) -> Projection {
        let filter = VisibilityFilter::new(
            request.visibility,
            &self.root,
            &self.modules,
            &self.references,
        );

        if let Some(pathfinding) = request.active_pathfinding() {
            tracing::trace!(start = %pathfinding.start, end = %pathfinding.end, "projecting reachability");
            return self.reachability_projection(pathfinding, limits, &filter);
        }

        let pool = self.filtered_pool(request, limits, &filter);
        match request.active_search() {
            Some(text) => {
                let matches: Vec<&ModuleRecord> = search_by_text(text, pool.iter().copied(), None)
                    .iter()
                    .filter_map(|id| self.modules.get(id))
                    .collect();
                tracing::trace!(text, matches = matches.len(), "projecting search");
                let hits: FxHashSet<&str> = matches.iter().map(|record| record.id.as_str()).collect();
                let selection =
                    expand_search_result(&matches, &self.modules, |record| filter.is_visible(record));
                Projection::from_selection(&selection, &self.modules, |id| {
                    if hits.contains(id) {
                        Highlight::SearchMatch
                    } else {
                        Highlight::None
                    }
                })
            }
            None => {
                tracing::trace!(nodes = pool.len(), "projecting full graph");
                let mut selection = Selection::default();
                selection
                    .nodes
                    .extend(pool.iter().map(|record| record.id.clone()));
                for record in &pool {
                    for dep in &record.deps {
                        if selection.nodes.contains(dep) {
                            selection.edges.insert(Edge::new(&record.id, dep));
                        }
                    }
                }
                Projection::from_selection(&selection, &self.modules, |_| Highlight::None)
            }
        }
    }

    fn reachability_projection(
        &self,
        request: &PathfindingRequest,
        limits: &TraversalLimits,
        filter: &VisibilityFilter<'_>,
    ) -> Projection {
        let (starts, ends) = self.pathfinding_candidates(request, limits);
        let end_set: FxHashSet<String> = ends.into_iter().collect();

        let mut selection = Selection::default();
        for start in &starts {
            selection.merge(find_reachable(&self.modules, start, &end_set, |record| {
                filter.is_visible(record)
            }));
        }

        Projection::from_selection(&selection, &self.modules, |id| {
            if starts.iter().any(|start| start == id) {
                Highlight::Start
            } else if end_set.contains(id) {
                Highlight::End
            } else {
                Highlight::None
            }
        })
    }

    /// Included records, restricted to the filter node's subgraph when the
    /// filter node is known.
    fn filtered_pool(
        &self,
        request: &ProjectionRequest,
        limits: &TraversalLimits,
        filter: &VisibilityFilter<'_>,
    ) -> Vec<&ModuleRecord> {
        let subgraph = request
            .filter_node
            .as_deref()
            .map(normalize_module_id)
            .filter(|id| self.modules.contains_key(id))
            .map(|id| collect_subgraph(&self.modules, &id, limits.subgraph_max_depth));

        match subgraph {
            Some(ids) => ids
                .iter()
                .filter_map(|id| self.modules.get(id))
                .filter(|record| filter.includes(record))
                .collect(),
            None => self
                .modules
                .values()
                .filter(|record| filter.includes(record))
                .collect(),
        }
    }
}

impl ModuleGraph {
    /// Project the store for rendering.
    ///
    /// Modes by precedence: an active pathfinding request, then non-blank
    /// search text, then the full filtered graph. Identical requests against an
    /// unchanged store are served from the render cache.
    ///
    /// # Errors
    ///
    /// [`Error::NotIngested`] if nothing was ever ingested.
    pub fn project(&self, request: &ProjectionRequest) -> Result<Arc<Projection>> {
        let inner = self.inner.read();
        if !inner.ingested {
            return Err(Error::NotIngested);
        }

        {
            let cache = self.cache.lock();
            if let Some(cached) = cache.as_ref() {
                if cached.generation == inner.generation && cached.request == *request {
                    tracing::trace!("render cache hit");
                    return Ok(Arc::clone(&cached.projection));
                }
            }
        }

        let projection = Arc::new(inner.build_projection(request, &self.limits));
        *self.cache.lock() = Some(RenderCache {
            generation: inner.generation,
            request: request.clone(),
            projection: Arc::clone(&projection),
        });
        Ok(projection)
    }
}
