//! Paths command: enumerate dependency paths between two modules.

use modviz_config::GraphConfig;
use modviz_graph::PathfindingRequest;

use crate::cli::{PathsArgs, PolicyArg};
use crate::commands::utils;
use crate::error::{CliError, Result, ResultExt};
use crate::ui;

pub fn execute(args: PathsArgs, config: &GraphConfig) -> Result<()> {
    let request = PathfindingRequest::new(&args.from, &args.to);
    if !request.is_active() {
        return Err(CliError::InvalidArgument(
            "--from and --to must both be non-empty".to_string(),
        ))
        .with_hint("Each side is matched against module names, e.g. --from main --to utils");
    }
    if args.policy == PolicyArg::Shared {
        ui::info("Shared policy: a module is entered once per search, so some paths may be skipped");
    }

    let graph = utils::build_graph(&args.input, config)?;
    let visibility = utils::visibility(&args.input, config);
    let paths = graph.pathfinding_results_with(&request, &visibility, args.policy.into())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&paths)?);
        return Ok(());
    }

    if paths.is_empty() {
        ui::warning(&format!("No path from \"{}\" to \"{}\"", args.from, args.to));
        return Ok(());
    }
    for path in &paths {
        println!("{}", path.format_chain());
    }
    ui::success(&format!("{} path(s) found", paths.len()));
    Ok(())
}
