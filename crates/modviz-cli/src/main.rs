//! modviz CLI - inspect module dependency graph snapshots.
//!
//! Parses arguments, initializes logging, loads configuration and dispatches
//! to the selected command.

use clap::Parser;
use miette::Result;
use modviz_cli::{cli, commands, error, logger, ui};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = commands::load_config(args.config.as_deref()).and_then(|config| match args.command {
        cli::Command::Project(project_args) => commands::project_execute(project_args, &config),
        cli::Command::Paths(paths_args) => commands::paths_execute(paths_args, &config),
        cli::Command::Search(search_args) => commands::search_execute(search_args, &config),
        cli::Command::Stats(stats_args) => commands::stats_execute(stats_args, &config),
    });

    result.map_err(error::cli_error_to_miette)
}
