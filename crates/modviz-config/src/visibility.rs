//! User-facing visibility switches for graph projections.

use serde::{Deserialize, Serialize};

/// Which classes of modules a projection may show.
///
/// Every flag defaults to `false`, so a fresh config shows only real,
/// in-project source files.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VisibilityConfig {
    /// Show modules living under a `node_modules` directory.
    #[serde(default, alias = "node_modules")]
    pub include_node_modules: bool,

    /// Show virtual (generated) modules.
    #[serde(default, alias = "virtual")]
    pub include_virtual: bool,

    /// Show real files outside the project root.
    #[serde(default, alias = "lib")]
    pub include_out_of_project_lib: bool,
}

impl VisibilityConfig {
    /// Config with every switch enabled.
    pub fn everything() -> Self {
        Self {
            include_node_modules: true,
            include_virtual: true,
            include_out_of_project_lib: true,
        }
    }

    pub fn with_node_modules(mut self, include: bool) -> Self {
        self.include_node_modules = include;
        self
    }

    pub fn with_virtual(mut self, include: bool) -> Self {
        self.include_virtual = include;
        self
    }

    pub fn with_out_of_project_lib(mut self, include: bool) -> Self {
        self.include_out_of_project_lib = include;
        self
    }
}
