use routefind_core::graph::{Graph, NodeId, PathResult};

/// Output a route in records format
///
/// ```text
/// H routefind=1 records=1 mode=route from=0 to=4 directed=false found=true cost=4 hops=3
/// N 0
/// E 0 2 1
/// ```
pub fn output(graph: &Graph, source: NodeId, target: NodeId, outcome: Option<&PathResult>) {
    let cost = outcome.map_or_else(|| "-".to_string(), |result| result.cost.to_string());
    let hops = outcome.map_or(0, |result| result.hops().len());

    println!(
        "H routefind=1 records=1 mode=route from={} to={} directed={} found={} cost={} hops={}",
        source,
        target,
        graph.is_directed(),
        outcome.is_some(),
        cost,
        hops
    );

    if let Some(result) = outcome {
        for node in &result.path {
            println!("N {}", node);
        }
        for hop in result.hops() {
            println!("E {} {} {}", hop.from, hop.to, hop.weight);
        }
    }
}
