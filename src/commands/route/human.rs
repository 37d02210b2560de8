use crate::commands::dispatch::CommandContext;
use routefind_core::graph::{NodeId, PathResult};

/// Output a route in human-readable format
pub fn output(ctx: &CommandContext, source: NodeId, target: NodeId, outcome: Option<&PathResult>) {
    let Some(result) = outcome else {
        println!("No route from {} to {}", source, target);
        return;
    };

    let path = result
        .path
        .iter()
        .map(|node| node.to_string())
        .collect::<Vec<_>>()
        .join(" -> ");
    println!("{}", path);
    println!("cost: {}", result.cost);

    if ctx.cli.quiet {
        return;
    }

    for hop in result.hops() {
        println!("  {} -> {} ({})", hop.from, hop.to, hop.weight);
    }
}
