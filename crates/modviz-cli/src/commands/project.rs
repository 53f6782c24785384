//! Project command: print the visible graph.

use modviz_config::GraphConfig;
use modviz_graph::ProjectionRequest;

use crate::cli::{ProjectArgs, ProjectFormat};
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

pub fn execute(args: ProjectArgs, config: &GraphConfig) -> Result<()> {
    let graph = utils::build_graph(&args.input, config)?;

    let mut request = ProjectionRequest::new(utils::visibility(&args.input, config));
    if let Some(search) = args.search {
        request = request.with_search(search);
    }
    if let (Some(from), Some(to)) = (args.from, args.to) {
        request = request.with_pathfinding(from, to);
    }
    if let Some(filter) = args.filter {
        if !graph.contains(&filter) {
            ui::warning(&format!("Filter node {filter} is not in the snapshot; showing everything"));
        }
        request = request.with_filter_node(filter);
    }

    let projection = graph.project(&request)?;
    if projection.is_empty() {
        ui::warning("Nothing to show with the current filters");
    }

    match args.format {
        ProjectFormat::Json => println!("{}", projection.to_json()?),
        ProjectFormat::Dot => print!("{}", projection.to_dot()),
    }
    Ok(())
}
