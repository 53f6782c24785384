//! Configuration for the modviz dependency graph engine.
//!
//! The engine itself never reads files or the environment. Front-ends build a
//! [`GraphConfig`] here (from defaults, a `modviz.toml`/`modviz.json` file, or a
//! programmatic JSON value) and hand the pieces to the graph per query.

pub mod config;
pub mod discovery;
pub mod error;
pub mod limits;
pub mod visibility;

pub use config::*;
pub use error::*;
pub use limits::*;
pub use visibility::*;

pub use discovery::{ConfigDiscovery, discover};
