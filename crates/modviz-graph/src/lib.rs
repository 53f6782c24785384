//! # modviz-graph
//!
//! In-memory module dependency graph for build-tool devtools.
//!
//! The graph ingests the module list a build tool reports (ids, deps, virtual
//! flag), merges it incrementally, and answers visibility-aware queries:
//! reachability between modules, path enumeration, text search, subgraph
//! filtering, and projection into renderable nodes and edges.
//!
//! ## Architecture
//!
//! ```text
//!   ModuleSource ──snapshot──▶ ModuleGraph::ingest
//!                                   │
//!                    ┌──────────────┴──────────────┐
//!                    ▼                             ▼
//!              ModuleTable                  ReferenceIndex
//!           (id → ModuleRecord)           (id → referrer ids)
//!                    │                             │
//!                    └──────────┬──────────────────┘
//!                               ▼
//!                       VisibilityFilter
//!                               │
//!        ┌──────────────┬───────┴───────┬──────────────┐
//!        ▼              ▼               ▼              ▼
//!  find_reachable  find_all_paths  search_by_text  collect_subgraph
//!        └──────────────┴───────┬───────┴──────────────┘
//!                               ▼
//!                   Projection (nodes + edges)
//! ```
//!
//! Storage is never filtered. Visibility is supplied per query, and all
//! traversal state is local to the call.
//!
//! ## Quick Start
//!
//! ```rust
//! use modviz_graph::{ModuleGraph, ProjectionRequest, RawModule, VisibilityConfig};
//!
//! # fn main() -> modviz_graph::Result<()> {
//! let graph = ModuleGraph::new();
//! graph.ingest(
//!     &[
//!         RawModule::new("/app/src/main.ts", ["/app/src/App.vue"]),
//!         RawModule::new("/app/src/App.vue", Vec::<String>::new()),
//!     ],
//!     "/app",
//! )?;
//!
//! let projection = graph.project(&ProjectionRequest::new(VisibilityConfig::default()))?;
//! assert_eq!(projection.nodes.len(), 2);
//! assert_eq!(projection.edges.len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod graph;
pub mod module_id;
pub mod paths;
pub mod projection;
pub mod reachability;
pub mod record;
pub mod render;
pub mod search;
pub mod source;
pub mod statistics;
pub mod subgraph;
pub mod visibility;

pub use graph::{DrawerData, DrawerEntry, IngestSummary, ModuleGraph};
pub use paths::{PathInfo, PathVisitPolicy, find_all_paths};
pub use projection::{PathfindingRequest, Projection, ProjectionRequest};
pub use reachability::find_reachable;
pub use record::{Edge, ModuleRecord, ModuleTable, RawModule, ReferenceIndex, Selection};
pub use render::{ArrowStyle, FileType, GraphEdge, GraphNode, Highlight, NodeShape};
pub use search::{expand_search_result, search_by_text};
pub use source::{ModuleSnapshot, ModuleSource, StaticSource, collapse_untracked};
pub use statistics::GraphStatistics;
pub use subgraph::collect_subgraph;
pub use visibility::{VisibilityFilter, is_visible};

pub use modviz_config::{TraversalLimits, VisibilityConfig};

/// Error types for graph operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A projection or pathfinding query ran before any ingest.
    #[error("graph queried before any modules were ingested")]
    NotIngested,

    /// A raw module failed validation at the ingestion boundary.
    #[error("malformed module at index {index}: {reason}")]
    MalformedModule { index: usize, reason: String },

    /// The module source could not produce a snapshot.
    #[error("module source error: {0}")]
    Source(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests;
