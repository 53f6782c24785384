//! Stats command: print graph size.

use modviz_config::GraphConfig;

use crate::cli::StatsArgs;
use crate::commands::utils;
use crate::error::Result;

pub fn execute(args: StatsArgs, config: &GraphConfig) -> Result<()> {
    let graph = utils::build_graph(&args.input, config)?;
    let stats = graph.statistics();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!("modules:       {}", stats.module_count);
    println!("edges:         {}", stats.edge_count);
    println!("virtual:       {}", stats.virtual_count);
    println!("node_modules:  {}", stats.node_modules_count);
    println!("referenced:    {}", stats.referenced_count);
    println!("unreferenced:  {}", stats.unreferenced_count());
    Ok(())
}
