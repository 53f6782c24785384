//! Command-line interface definition for modviz.
//!
//! # Command Structure
//!
//! - `modviz project` - render the visible graph (JSON or DOT)
//! - `modviz paths` - enumerate paths between two modules
//! - `modviz search` - list matching modules
//! - `modviz stats` - graph statistics

mod commands;
pub mod enums;

use std::path::PathBuf;

use clap::Parser;

pub use commands::{Command, PathsArgs, ProjectArgs, SearchArgs, SnapshotArgs, StatsArgs};
pub use enums::*;

/// modviz - inspect module dependency graphs
#[derive(Parser, Debug)]
#[command(
    name = "modviz",
    version,
    about = "Inspect module dependency graph snapshots",
    long_about = "modviz reads a module snapshot reported by a build tool and answers\n\
                  questions about it: what is visible, how two modules are connected,\n\
                  which modules match a name, and how big the graph is."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file (modviz.toml or modviz.json)
    ///
    /// When omitted, modviz.toml then modviz.json are looked up in the
    /// current directory; defaults apply if neither exists.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
