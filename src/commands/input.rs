//! Loading edge files into a graph

use std::fs::File;
use std::io::{self, BufReader};
use std::time::Instant;

use crate::cli::GraphArgs;
use crate::commands::dispatch::CommandContext;
use routefind_core::error::{Result, RouteError};
use routefind_core::graph::{Graph, NodeId};
use routefind_core::ingest::{parse_route_input, RouteRequest};
use routefind_core::trace_time;

/// A parsed edge file and the graph built from it
pub struct LoadedGraph {
    pub request: RouteRequest,
    pub graph: Graph,
}

impl LoadedGraph {
    /// Reject ids outside the graph before querying it
    pub fn check_node(&self, node: NodeId) -> Result<()> {
        if self.graph.contains(node) {
            Ok(())
        } else {
            Err(RouteError::InvalidNode {
                node,
                node_count: self.graph.node_count(),
            })
        }
    }
}

/// Read the edge file named by `args` and build its graph
pub fn load(ctx: &CommandContext, args: &GraphArgs) -> Result<LoadedGraph> {
    load_with_endpoints(ctx, args, None, None)
}

/// Like [`load`], replacing the header endpoints before the graph is sized
pub fn load_with_endpoints(
    ctx: &CommandContext,
    args: &GraphArgs,
    source: Option<NodeId>,
    target: Option<NodeId>,
) -> Result<LoadedGraph> {
    let start = Instant::now();
    let opts = ctx.config.ingest_options();

    let request = if args.reads_stdin() {
        parse_route_input(io::stdin().lock(), &opts)?
    } else {
        let file = File::open(&args.file).map_err(|e| RouteError::InputUnavailable {
            path: args.file.display().to_string(),
            reason: e.to_string(),
        })?;
        parse_route_input(BufReader::new(file), &opts)?
    };
    let request = request.with_endpoints(source, target);
    trace_time!(start, "parse_input", edges = request.edges.len());

    let graph = request.build_graph(args.nodes, ctx.directed(args.directed))?;
    trace_time!(start, "build_graph", nodes = graph.node_count());

    Ok(LoadedGraph { request, graph })
}
