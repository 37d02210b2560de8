//! Cost command: weight of walking an explicit node sequence

use serde::Serialize;

use crate::cli::GraphArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::input;
use routefind_core::error::Result;
use routefind_core::format::OutputFormat;
use routefind_core::graph::{NodeId, Weight};

#[derive(Serialize)]
struct CostOutput<'a> {
    nodes: &'a [NodeId],
    cost: Option<Weight>,
    walkable: bool,
}

/// Execute the cost command
pub fn execute(ctx: &CommandContext, args: &GraphArgs, nodes: &[NodeId]) -> Result<()> {
    let loaded = input::load(ctx, args)?;
    for &node in nodes {
        loaded.check_node(node)?;
    }

    let cost = loaded.graph.path_cost(nodes);
    tracing::debug!(nodes = nodes.len(), ?cost, "walk_cost");

    match ctx.format {
        OutputFormat::Human => match cost {
            Some(cost) => println!("cost: {}", cost),
            None => println!("Not a walk: some consecutive nodes share no edge"),
        },
        OutputFormat::Json => {
            let output = CostOutput {
                nodes,
                cost,
                walkable: cost.is_some(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            let joined = nodes
                .iter()
                .map(|node| node.to_string())
                .collect::<Vec<_>>()
                .join(",");
            println!(
                "H routefind=1 records=1 mode=cost nodes={} walkable={} cost={}",
                joined,
                cost.is_some(),
                cost.map_or_else(|| "-".to_string(), |cost| cost.to_string())
            );
        }
    }

    Ok(())
}
