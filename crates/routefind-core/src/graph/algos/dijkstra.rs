use crate::error::{Result, RouteError};
use crate::graph::types::{Hop, Neighbor, NodeId, PathResult, Weight};
use crate::graph::Graph;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Wrapper for BinaryHeap to use as min-heap (ordered by distance, then node id)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeapEntry {
    pub node: NodeId,
    pub distance: Weight,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Per-query distances and predecessors, discarded when the query returns
struct TentativeState {
    distance: Vec<Option<Weight>>,
    predecessor: Vec<Option<Hop>>,
    settled: Vec<bool>,
    settled_count: usize,
    heap: BinaryHeap<Reverse<HeapEntry>>,
}

impl TentativeState {
    fn new(node_count: usize, source: NodeId) -> Self {
        let mut state = Self {
            distance: vec![None; node_count],
            predecessor: vec![None; node_count],
            settled: vec![false; node_count],
            settled_count: 0,
            heap: BinaryHeap::new(),
        };
        state.distance[source] = Some(0);
        state.heap.push(Reverse(HeapEntry {
            node: source,
            distance: 0,
        }));
        state
    }

    /// Pop the unsettled node with the smallest `(distance, node)` key.
    ///
    /// Entries left behind by later improvements or by an already settled
    /// node are skipped.
    fn pop_min(&mut self) -> Option<(NodeId, Weight)> {
        while let Some(Reverse(HeapEntry { node, distance })) = self.heap.pop() {
            if self.settled[node] || self.distance[node] != Some(distance) {
                continue;
            }
            return Some((node, distance));
        }
        None
    }

    fn settle(&mut self, node: NodeId) {
        self.settled[node] = true;
        self.settled_count += 1;
    }

    /// Relax every edge out of the freshly settled `node`.
    ///
    /// An equal-cost candidate replaces the current predecessor, so the last
    /// relaxed route of equal cost wins.
    fn relax_from(&mut self, graph: &Graph, node: NodeId, distance: Weight) {
        for Neighbor { node: next, weight } in graph.neighbors(node) {
            if self.settled[next] {
                continue;
            }
            let Some(candidate) = distance.checked_add(weight) else {
                continue;
            };
            if self.distance[next].is_none_or(|current| candidate <= current) {
                self.distance[next] = Some(candidate);
                self.predecessor[next] = Some(Hop {
                    from: node,
                    to: next,
                    weight,
                });
                self.heap.push(Reverse(HeapEntry {
                    node: next,
                    distance: candidate,
                }));
            }
        }
    }

    /// Follow predecessor links back from `target` and return the path
    fn reconstruct(&self, source: NodeId, target: NodeId) -> PathResult {
        let mut hops = Vec::new();
        let mut current = target;
        while current != source {
            match self.predecessor[current] {
                Some(hop) => {
                    hops.push(hop);
                    current = hop.from;
                }
                None => break,
            }
        }
        hops.reverse();
        PathResult::from_hops(source, target, hops)
    }
}

fn check_node(graph: &Graph, node: NodeId) -> Result<()> {
    if graph.contains(node) {
        Ok(())
    } else {
        Err(RouteError::InvalidNode {
            node,
            node_count: graph.node_count(),
        })
    }
}

/// Find the least-cost route from `source` to `target`.
///
/// Unsettled nodes are taken in `(distance, node id)` order, so ties always
/// go to the smallest id. The search stops as soon as the target holds the
/// minimum tentative distance, even when a smaller id shares it.
///
/// Returns `Ok(None)` when `target` cannot be reached from `source`.
#[tracing::instrument(skip(graph), fields(nodes = graph.node_count(), directed = graph.is_directed()))]
pub fn shortest_path(
    graph: &Graph,
    source: NodeId,
    target: NodeId,
) -> Result<Option<PathResult>> {
    check_node(graph, source)?;
    check_node(graph, target)?;

    let mut state = TentativeState::new(graph.node_count(), source);

    while let Some((node, distance)) = state.pop_min() {
        if state.distance[target] == Some(distance) {
            let result = state.reconstruct(source, target);
            tracing::debug!(
                settled = state.settled_count,
                cost = result.cost,
                hops = result.hops().len(),
                "route_found"
            );
            return Ok(Some(result));
        }

        state.settle(node);
        state.relax_from(graph, node, distance);
    }

    tracing::debug!(settled = state.settled_count, "route_unreachable");
    Ok(None)
}
