//! Search command: list matching modules.

use modviz_config::GraphConfig;

use crate::cli::SearchArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Print matching module ids, one per line, restricted to modules the current
/// visibility includes.
pub fn execute(args: SearchArgs, config: &GraphConfig) -> Result<()> {
    let graph = utils::build_graph(&args.input, config)?;
    let visibility = utils::visibility(&args.input, config);

    let mut shown = 0;
    for id in graph.search_by_text(&args.query, None) {
        if args.limit.is_some_and(|limit| shown >= limit) {
            break;
        }
        if graph.is_included(&id, &visibility) {
            println!("{id}");
            shown += 1;
        }
    }

    if shown == 0 {
        ui::warning(&format!("No module matches \"{}\"", args.query));
    }
    Ok(())
}
