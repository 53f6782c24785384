//! The shared module store and its query surface.
//!
//! `ModuleGraph` is a cheap-to-clone handle over an `Arc<RwLock<_>>`. Ingest
//! and reset take the write lock; every query takes the read lock and keeps all
//! traversal state local to the call.

mod drawer;
mod ingest;
mod pathfinding;
mod project;
mod queries;

use std::sync::Arc;

use modviz_config::TraversalLimits;
use parking_lot::{Mutex, RwLock};

use crate::projection::{Projection, ProjectionRequest};
use crate::record::{ModuleTable, ReferenceIndex};

pub use drawer::{DrawerData, DrawerEntry};
pub use ingest::IngestSummary;

#[derive(Debug, Default)]
pub(crate) struct GraphInner {
    pub(crate) root: String,
    /// Set by the first ingest and never cleared, so an empty graph after
    /// `reset` is distinct from one that was never fed.
    pub(crate) ingested: bool,
    pub(crate) modules: ModuleTable,
    pub(crate) references: ReferenceIndex,
    /// Bumped on every mutation; render cache entries from older generations
    /// are stale.
    pub(crate) generation: u64,
}

#[derive(Debug)]
pub(crate) struct RenderCache {
    pub(crate) generation: u64,
    pub(crate) request: ProjectionRequest,
    pub(crate) projection: Arc<Projection>,
}

/// Module dependency graph with incremental ingest and visibility-aware
/// queries.
#[derive(Debug, Clone, Default)]
pub struct ModuleGraph {
    pub(crate) inner: Arc<RwLock<GraphInner>>,
    pub(crate) cache: Arc<Mutex<Option<RenderCache>>>,
    pub(crate) limits: TraversalLimits,
}

impl ModuleGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: TraversalLimits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    pub fn limits(&self) -> &TraversalLimits {
        &self.limits
    }

    pub(crate) fn invalidate_cache(&self) {
        *self.cache.lock() = None;
    }
}
