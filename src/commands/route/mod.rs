//! Route command

mod human;
mod json;
mod records;

use std::time::Instant;

use crate::cli::GraphArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::input;
use routefind_core::error::Result;
use routefind_core::format::OutputFormat;
use routefind_core::graph::{shortest_path, NodeId};
use routefind_core::trace_time;

/// Execute the route command
pub fn execute(
    ctx: &CommandContext,
    args: &GraphArgs,
    from: Option<NodeId>,
    to: Option<NodeId>,
) -> Result<()> {
    let start = Instant::now();
    let loaded = input::load_with_endpoints(ctx, args, from, to)?;
    let (source, target) = (loaded.request.source, loaded.request.target);

    let outcome = shortest_path(&loaded.graph, source, target)?;
    trace_time!(start, "shortest_path", found = outcome.is_some());

    if outcome.is_none() {
        tracing::info!(source, target, "no route between nodes");
    }

    match ctx.format {
        OutputFormat::Human => human::output(ctx, source, target, outcome.as_ref()),
        OutputFormat::Json => json::output(&loaded.request.edges, outcome.as_ref())?,
        OutputFormat::Records => {
            records::output(&loaded.graph, source, target, outcome.as_ref())
        }
    }

    trace_time!(ctx.start, "command_total");
    Ok(())
}
