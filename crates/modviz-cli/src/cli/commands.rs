use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::enums::*;

/// Available modviz subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the visible graph
    ///
    /// Without --search or --from/--to the whole visible graph is printed.
    /// --from/--to (both required) switch to reachability between the
    /// matching modules and take precedence over --search.
    Project(ProjectArgs),

    /// Enumerate dependency paths between two modules
    Paths(PathsArgs),

    /// List modules whose name or id contains a query
    Search(SearchArgs),

    /// Print module and edge counts
    Stats(StatsArgs),
}

/// Snapshot input and visibility switches shared by every command
#[derive(Args, Debug, Clone)]
pub struct SnapshotArgs {
    /// Snapshot JSON file: { "root": "...", "modules": [{ "id", "deps", "virtual" }] }
    #[arg(value_name = "SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Fold untracked modules (styles, virtual helpers) into their tracked dependencies
    #[arg(long)]
    pub collapse: bool,

    /// Show third-party modules under node_modules
    #[arg(long)]
    pub node_modules: bool,

    /// Show virtual modules
    #[arg(long = "virtual")]
    pub include_virtual: bool,

    /// Show files outside the project root
    #[arg(long)]
    pub lib: bool,
}

/// Arguments for the project command
#[derive(Args, Debug)]
pub struct ProjectArgs {
    #[command(flatten)]
    pub input: SnapshotArgs,

    /// Show search hits and their direct dependencies
    #[arg(short, long, value_name = "TEXT")]
    pub search: Option<String>,

    /// Pathfinding start text
    #[arg(long, value_name = "TEXT", requires = "to")]
    pub from: Option<String>,

    /// Pathfinding end text
    #[arg(long, value_name = "TEXT", requires = "from")]
    pub to: Option<String>,

    /// Restrict the graph to modules below this id
    #[arg(long, value_name = "ID")]
    pub filter: Option<String>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "json")]
    pub format: ProjectFormat,
}

/// Arguments for the paths command
#[derive(Args, Debug)]
pub struct PathsArgs {
    #[command(flatten)]
    pub input: SnapshotArgs,

    /// Start text, matched against module names and ids
    #[arg(long, value_name = "TEXT")]
    pub from: String,

    /// End text, matched against module names and ids
    #[arg(long, value_name = "TEXT")]
    pub to: String,

    /// Revisit policy while enumerating
    #[arg(long, value_enum, default_value = "per-path")]
    pub policy: PolicyArg,

    /// Print paths as JSON instead of one chain per line
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the search command
#[derive(Args, Debug)]
pub struct SearchArgs {
    #[command(flatten)]
    pub input: SnapshotArgs,

    /// Case-insensitive text to look for
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Stop after this many matches
    #[arg(short = 'n', long, value_name = "N")]
    pub limit: Option<usize>,
}

/// Arguments for the stats command
#[derive(Args, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub input: SnapshotArgs,

    /// Print statistics as JSON
    #[arg(long)]
    pub json: bool,
}
