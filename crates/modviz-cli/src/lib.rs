//! modviz CLI - command-line front-end for the modviz dependency graph engine.
//!
//! The CLI reads a module snapshot (`{ "root", "modules": [...] }`) from disk,
//! ingests it into a [`modviz_graph::ModuleGraph`] and runs one query:
//!
//! - `project` - render the visible graph as JSON or Graphviz DOT
//! - `paths` - enumerate dependency paths between two modules
//! - `search` - list modules matching a text query
//! - `stats` - print graph statistics
//!
//! # Modules
//!
//! - [`cli`] - argument definitions
//! - [`commands`] - command implementations
//! - [`error`] - error types with actionable hints
//! - [`logger`] - tracing setup
//! - [`ui`] - status messages on stderr

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, Result, ResultExt};
