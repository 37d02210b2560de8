use serde::Serialize;

/// Integer vertex identifier in `[0, node_count)`
pub type NodeId = usize;

/// Validated, non-negative edge weight
pub type Weight = u64;

/// A raw edge triple as supplied by a caller.
///
/// The weight is signed so that a negative value can be carried as far as
/// [`Graph::build`](super::Graph::build) and rejected there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeSpec {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: i64,
}

impl EdgeSpec {
    pub fn new(from: NodeId, to: NodeId, weight: i64) -> Self {
        Self { from, to, weight }
    }
}

impl From<(NodeId, NodeId, i64)> for EdgeSpec {
    fn from((from, to, weight): (NodeId, NodeId, i64)) -> Self {
        Self { from, to, weight }
    }
}

/// One adjacency entry: a node reachable in one hop and the hop's weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Neighbor {
    pub node: NodeId,
    pub weight: Weight,
}

/// A single traversed edge on a [`PathResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Hop {
    pub from: NodeId,
    pub to: NodeId,
    pub weight: Weight,
}

/// Cheapest route from a source to `target`.
///
/// `path` starts at the source and ends at `target`, both inclusive.
/// `hops` holds the exact edge weights the engine relaxed onto the path,
/// so `cost` is always their sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathResult {
    pub target: NodeId,
    pub path: Vec<NodeId>,
    pub cost: Weight,
    #[serde(skip)]
    hops: Vec<Hop>,
}

impl PathResult {
    /// Build a result from the hops of a path, in source-to-target order
    pub(crate) fn from_hops(source: NodeId, target: NodeId, hops: Vec<Hop>) -> Self {
        let mut path = Vec::with_capacity(hops.len() + 1);
        path.push(source);
        path.extend(hops.iter().map(|hop| hop.to));
        let cost = hops.iter().map(|hop| hop.weight).sum();
        Self {
            target,
            path,
            cost,
            hops,
        }
    }

    pub fn source(&self) -> NodeId {
        self.path[0]
    }

    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    /// Number of nodes on the path, endpoints included
    pub fn node_count(&self) -> usize {
        self.path.len()
    }

    /// True for the zero-length route of a self-query
    pub fn is_trivial(&self) -> bool {
        self.hops.is_empty()
    }
}
