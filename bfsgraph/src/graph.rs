//! Random bounded-degree graph generation into a compressed sparse-row layout.
//!
//! Every node draws its degree, then for each edge a target and a weight, and
//! the edge is recorded in both directions. The draw order is observable: any
//! change to it produces a different graph.
use crate::error::{BfsError, Result};
use crate::rng::JenkinsRng;
use crate::traversal::TraversalState;
use tracing::debug;

pub type NodeId = u32;
pub type Weight = u32;

pub const MIN_NODES: usize = 20;
pub const MAX_NODES: u64 = 1 << 31;
pub const MIN_EDGES: u32 = 2;
pub const MAX_INIT_EDGES: u32 = 4;
pub const MIN_WEIGHT: Weight = 1;
pub const MAX_WEIGHT: Weight = 1;

/// Slice of the flat edge array owned by one node.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct NodeRange {
    pub start: usize,
    pub count: usize,
}

impl NodeRange {
    pub fn end(&self) -> usize { self.start + self.count }
}

/// Edge as drawn during generation. Only `dest` survives into [`Graph`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Edge {
    pub dest: NodeId,
    pub weight: Weight,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    pub nodes: Vec<NodeRange>,
    pub edges: Vec<NodeId>,
}

impl Graph {
    /// CSR layout of explicit adjacency lists, concatenated in node order.
    ///
    /// # Panics
    ///
    /// Panics if any id is not smaller than `adj.len()`.
    pub fn from_adjacency(adj: &[Vec<NodeId>]) -> Self {
        let mut nodes = Vec::with_capacity(adj.len());
        let mut edges = Vec::with_capacity(adj.iter().map(|v| v.len()).sum());
        for list in adj {
            if let Some(&v) = list.iter().find(|&&v| v as usize >= adj.len()) {
                panic!("edge to node {} in a graph of {} nodes", v, adj.len());
            }
            nodes.push(NodeRange { start: edges.len(), count: list.len() });
            edges.extend_from_slice(list);
        }
        Self { nodes, edges }
    }

    pub fn len(&self) -> usize { self.nodes.len() }
    pub fn is_empty(&self) -> bool { self.nodes.is_empty() }
    pub fn total_edges(&self) -> usize { self.edges.len() }

    #[inline]
    pub fn neighbors(&self, v: usize) -> &[NodeId] {
        let r = self.nodes[v];
        &self.edges[r.start..r.end()]
    }

    /// Graph plus the four per-node traversal arrays.
    pub fn memory_estimate_bytes(&self) -> usize {
        let n = self.nodes.len();
        let range_bytes = n * std::mem::size_of::<NodeRange>();
        let edge_bytes = self.edges.len() * std::mem::size_of::<NodeId>();
        let flags_bytes = n * std::mem::size_of::<bool>() * 3;
        let cost_bytes = n * std::mem::size_of::<u32>();
        range_bytes + edge_bytes + flags_bytes + cost_bytes
    }
}

/// Output of [`generate`]: the graph and traversal arrays seeded at node 0.
#[derive(Clone, Debug)]
pub struct GraphState {
    pub graph: Graph,
    pub traversal: TraversalState,
}

/// `Vec::try_reserve_exact`, reporting failure against the requested node count.
pub(crate) fn try_with_capacity<T>(len: usize, node_count: usize) -> Result<Vec<T>> {
    let mut v = Vec::new();
    v.try_reserve_exact(len).map_err(|_| BfsError::ResourceExhaustion {
        node_count,
        bytes: len.saturating_mul(std::mem::size_of::<T>()),
    })?;
    Ok(v)
}

pub(crate) fn check_node_count(node_count: i64) -> Result<usize> {
    if node_count < 1 || node_count as u64 > MAX_NODES {
        return Err(BfsError::InvalidInput { node_count, max: MAX_NODES });
    }
    Ok(node_count as usize)
}

/// Most pushes one node's generation step can make: a forward and a
/// reciprocal entry per drawn edge.
const MAX_PUSHES_PER_NODE: usize = 2 * MAX_INIT_EDGES as usize;

/// Builds the random graph for `node_count` nodes with node 0 as the source.
///
/// Pushes are logged as `(owner, edge)` in draw order, then scattered into
/// the CSR arrays by a counting pass that keeps each owner's push order.
/// Every buffer is reserved up front, so running out of memory comes back
/// as [`BfsError::ResourceExhaustion`].
pub fn generate(node_count: i64, rng: &mut JenkinsRng) -> Result<GraphState> {
    let n = check_node_count(node_count)?;
    // u32 covers MAX_NODES
    let modulus = n as u32;

    let mut log: Vec<(NodeId, Edge)> =
        try_with_capacity(n.saturating_mul(MAX_PUSHES_PER_NODE), n)?;
    for i in 0..n {
        let degree = rng.next_below(MAX_INIT_EDGES - MIN_EDGES + 1) + MIN_EDGES;
        for _ in 0..degree {
            let target = rng.next_below(modulus);
            let weight = rng.next_below(MAX_WEIGHT - MIN_WEIGHT + 1) + MIN_WEIGHT;
            log.push((i as NodeId, Edge { dest: target, weight }));
            log.push((target, Edge { dest: i as NodeId, weight }));
        }
    }

    let mut nodes: Vec<NodeRange> = try_with_capacity(n, n)?;
    nodes.resize(n, NodeRange::default());
    for &(owner, _) in &log {
        nodes[owner as usize].count += 1;
    }
    let mut start = 0usize;
    for r in nodes.iter_mut() {
        r.start = start;
        start += r.count;
    }
    let total = start;

    let mut cursor: Vec<usize> = try_with_capacity(n, n)?;
    cursor.extend(nodes.iter().map(|r| r.start));
    let mut edges: Vec<NodeId> = try_with_capacity(total, n)?;
    edges.resize(total, 0);
    for &(owner, e) in &log {
        let slot = &mut cursor[owner as usize];
        edges[*slot] = e.dest;
        *slot += 1;
    }
    drop(log);
    drop(cursor);

    let traversal = TraversalState::with_source(n, 0)?;
    debug!(nodes = n, edges = total, "graph generated");
    Ok(GraphState { graph: Graph { nodes, edges }, traversal })
}
