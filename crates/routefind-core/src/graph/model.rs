//! Immutable weighted graph built from an edge list

use std::collections::BTreeSet;

use crate::error::{Result, RouteError};
use crate::graph::types::{EdgeSpec, Neighbor, NodeId, Weight};

/// Largest node count a graph may declare
pub const MAX_NODE_COUNT: usize = 1 << 20;

/// Weighted graph over nodes `0..node_count`.
///
/// Adjacency for each source is a set of `(to, weight)` entries: repeating an
/// identical edge stores it once, while the same endpoints with a different
/// weight are kept as a separate parallel entry. Undirected graphs store every
/// edge in both directions.
#[derive(Debug, Clone)]
pub struct Graph {
    directed: bool,
    adjacency: Vec<BTreeSet<Neighbor>>,
}

impl Graph {
    /// Build a graph, validating every edge against `node_count`
    #[tracing::instrument(skip(edges), fields(edges = edges.len()))]
    pub fn build(node_count: usize, directed: bool, edges: &[EdgeSpec]) -> Result<Self> {
        if node_count == 0 {
            return Err(RouteError::InvalidNodeCount(node_count));
        }
        if node_count > MAX_NODE_COUNT {
            return Err(RouteError::TooManyNodes {
                requested: node_count.to_string(),
                limit: MAX_NODE_COUNT,
            });
        }

        let mut adjacency = Vec::new();
        adjacency
            .try_reserve_exact(node_count)
            .map_err(|e| RouteError::io_operation("allocate adjacency for", node_count, e))?;
        adjacency.resize_with(node_count, BTreeSet::new);

        for edge in edges {
            for node in [edge.from, edge.to] {
                if node >= node_count {
                    return Err(RouteError::OutOfRange { node, node_count });
                }
            }

            let weight = Weight::try_from(edge.weight).map_err(|_| RouteError::InvalidWeight {
                from: edge.from,
                to: edge.to,
                weight: edge.weight,
            })?;

            adjacency[edge.from].insert(Neighbor {
                node: edge.to,
                weight,
            });
            if !directed {
                adjacency[edge.to].insert(Neighbor {
                    node: edge.from,
                    weight,
                });
            }
        }

        let graph = Self {
            directed,
            adjacency,
        };
        tracing::debug!(
            nodes = graph.node_count(),
            entries = graph.edge_count(),
            directed,
            "graph_built"
        );
        Ok(graph)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Number of stored adjacency entries (mirrored entries count twice)
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(BTreeSet::len).sum()
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node < self.node_count()
    }

    /// Nodes reachable from `node` in one hop, with the hop weight.
    ///
    /// Empty for a node without outgoing entries or outside the graph.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = Neighbor> + '_ {
        self.adjacency
            .get(node)
            .into_iter()
            .flat_map(|entries| entries.iter().copied())
    }

    /// Cheapest weight of a direct edge `from -> to`, if one exists
    pub fn edge_weight(&self, from: NodeId, to: NodeId) -> Option<Weight> {
        self.neighbors(from)
            .filter(|neighbor| neighbor.node == to)
            .map(|neighbor| neighbor.weight)
            .min()
    }

    /// Total weight of walking `path` hop by hop along the cheapest edges.
    ///
    /// Returns `None` when any consecutive pair is not joined by an edge.
    /// A single-node path costs zero.
    pub fn path_cost(&self, path: &[NodeId]) -> Option<Weight> {
        if path.is_empty() || !path.iter().all(|&node| self.contains(node)) {
            return None;
        }
        path.windows(2).try_fold(0, |total: Weight, pair| {
            total.checked_add(self.edge_weight(pair[0], pair[1])?)
        })
    }
}
