//! Level-synchronous BFS over the CSR graph.
//!
//! A round is a full expand phase followed by a full promote phase. Nodes
//! discovered in a round only join the frontier once the whole expand phase
//! is done, so round `k` settles exactly the nodes at hop distance `k`.
use crate::error::Result;
use crate::graph::{try_with_capacity, Graph, NodeId};
use tracing::debug;

/// Cost of a node the traversal has not reached (the reference stores -1
/// in an unsigned 32-bit array).
pub const UNSET_COST: u32 = u32::MAX;

/// Per-node traversal arrays. `mask[i]` implies `visited[i]`; once
/// `visited[i]` is set, `cost[i]` is final.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TraversalState {
    pub mask: Vec<bool>,
    pub updating_mask: Vec<bool>,
    pub visited: Vec<bool>,
    pub cost: Vec<u32>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TraversalStats {
    /// Rounds executed, including the last one that promoted nothing.
    pub rounds: usize,
    pub edges_scanned: usize,
    pub visited: usize,
}

impl TraversalState {
    /// Arrays for `n` nodes with `source` already on the frontier at cost 0.
    pub fn with_source(n: usize, source: NodeId) -> Result<Self> {
        let flags = |len: usize| -> Result<Vec<bool>> {
            let mut v = try_with_capacity(len, n)?;
            v.resize(len, false);
            Ok(v)
        };
        let mut mask = flags(n)?;
        let updating_mask = flags(n)?;
        let mut visited = flags(n)?;
        let mut cost: Vec<u32> = try_with_capacity(n, n)?;
        cost.resize(n, UNSET_COST);

        let s = source as usize;
        if s < n {
            mask[s] = true;
            visited[s] = true;
            cost[s] = 0;
        }
        Ok(Self { mask, updating_mask, visited, cost })
    }

    pub fn len(&self) -> usize { self.cost.len() }
    pub fn is_empty(&self) -> bool { self.cost.is_empty() }

    /// Expands every frontier node in index order. Unvisited neighbours get
    /// `cost + 1` and are marked for promotion; the last writer wins.
    /// Returns the number of edges scanned.
    pub fn expand(&mut self, graph: &Graph) -> usize {
        let mut scanned = 0usize;
        for tid in 0..self.mask.len() {
            if !self.mask[tid] { continue; }
            self.mask[tid] = false;
            let next = self.cost[tid].wrapping_add(1);
            let nbrs = graph.neighbors(tid);
            scanned += nbrs.len();
            for &id in nbrs {
                let id = id as usize;
                if !self.visited[id] {
                    self.cost[id] = next;
                    self.updating_mask[id] = true;
                }
            }
        }
        scanned
    }

    /// Moves everything discovered this round onto the frontier.
    /// Returns how many nodes were promoted.
    pub fn promote(&mut self) -> usize {
        let mut promoted = 0usize;
        for tid in 0..self.updating_mask.len() {
            if self.updating_mask[tid] {
                self.mask[tid] = true;
                self.visited[tid] = true;
                self.updating_mask[tid] = false;
                promoted += 1;
            }
        }
        promoted
    }

    /// Runs rounds until one promotes nothing.
    ///
    /// # Panics
    ///
    /// Panics if `graph` and the state disagree on the node count.
    pub fn run(&mut self, graph: &Graph) -> TraversalStats {
        assert_eq!(graph.len(), self.len(), "graph and traversal state sizes differ");
        let mut stats = TraversalStats::default();
        loop {
            stats.edges_scanned += self.expand(graph);
            let promoted = self.promote();
            stats.rounds += 1;
            debug!(round = stats.rounds, promoted, "bfs round");
            if promoted == 0 { break; }
        }
        stats.visited = self.visited.iter().filter(|&&v| v).count();
        stats
    }
}

/// Convenience wrapper over [`TraversalState::run`].
pub fn traverse(graph: &Graph, state: &mut TraversalState) -> TraversalStats {
    state.run(graph)
}
