//! Neighbors command

use serde::Serialize;

use crate::cli::GraphArgs;
use crate::commands::dispatch::CommandContext;
use crate::commands::input;
use routefind_core::error::Result;
use routefind_core::format::OutputFormat;
use routefind_core::graph::{Neighbor, NodeId};

#[derive(Serialize)]
struct NeighborsOutput {
    node: NodeId,
    directed: bool,
    neighbors: Vec<Neighbor>,
}

/// Execute the neighbors command
pub fn execute(ctx: &CommandContext, args: &GraphArgs, node: NodeId) -> Result<()> {
    let loaded = input::load(ctx, args)?;
    loaded.check_node(node)?;

    let neighbors: Vec<Neighbor> = loaded.graph.neighbors(node).collect();
    tracing::debug!(node, count = neighbors.len(), "neighbors");

    match ctx.format {
        OutputFormat::Human => {
            if neighbors.is_empty() {
                if !ctx.cli.quiet {
                    println!("Node {} has no neighbors", node);
                }
                return Ok(());
            }
            for neighbor in &neighbors {
                println!("{} -> {} ({})", node, neighbor.node, neighbor.weight);
            }
        }
        OutputFormat::Json => {
            let output = NeighborsOutput {
                node,
                directed: loaded.graph.is_directed(),
                neighbors,
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Records => {
            println!(
                "H routefind=1 records=1 mode=neighbors node={} directed={} count={}",
                node,
                loaded.graph.is_directed(),
                neighbors.len()
            );
            for neighbor in &neighbors {
                println!("E {} {} {}", node, neighbor.node, neighbor.weight);
            }
        }
    }

    Ok(())
}
