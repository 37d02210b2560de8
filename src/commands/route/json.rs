use routefind_core::error::Result;
use routefind_core::graph::{EdgeSpec, PathResult};
use routefind_core::response::RouteResponse;

/// Output a route as the JSON reply document
pub fn output(edges: &[EdgeSpec], outcome: Option<&PathResult>) -> Result<()> {
    let response = RouteResponse::new(edges, outcome);
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
