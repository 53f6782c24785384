//! Command implementations for the modviz CLI.
//!
//! Each command loads the snapshot named by its [`SnapshotArgs`](crate::cli::SnapshotArgs),
//! ingests it into a fresh graph and prints its result to stdout.

pub mod paths;
pub mod project;
pub mod search;
pub mod stats;
pub(crate) mod utils;

pub use paths::execute as paths_execute;
pub use project::execute as project_execute;
pub use search::execute as search_execute;
pub use stats::execute as stats_execute;
pub use utils::load_config;
