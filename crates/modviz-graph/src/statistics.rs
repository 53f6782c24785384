use serde::{Deserialize, Serialize};

/// Size summary of the stored graph, independent of visibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStatistics {
    pub module_count: usize,
    pub edge_count: usize,
    pub virtual_count: usize,
    pub node_modules_count: usize,
    /// Modules that at least one other module depends on.
    pub referenced_count: usize,
}

impl GraphStatistics {
    pub fn new(
        module_count: usize,
        edge_count: usize,
        virtual_count: usize,
        node_modules_count: usize,
        referenced_count: usize,
    ) -> Self {
        Self {
            module_count,
            edge_count,
            virtual_count,
            node_modules_count,
            referenced_count,
        }
    }

    /// Modules that nothing depends on: entry points or orphans.
    pub fn unreferenced_count(&self) -> usize {
        self.module_count.saturating_sub(self.referenced_count)
    }
}
