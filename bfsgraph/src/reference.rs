//! Independent shortest-hop computation used to cross-check the BFS engine.
//! Plain Dijkstra with every edge weighing 1.
use crate::graph::{Graph, NodeId};
use crate::traversal::UNSET_COST;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct Entry { d: u32, v: usize }
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.d.cmp(&other.d).then(self.v.cmp(&other.v))
    }
}
impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> { Some(self.cmp(other)) }
}

/// Hop distances from `source`; unreachable nodes keep [`UNSET_COST`].
pub fn unit_dijkstra(g: &Graph, source: NodeId) -> Vec<u32> {
    let n = g.len();
    let mut dist = vec![UNSET_COST; n];
    let mut heap: BinaryHeap<Reverse<Entry>> = BinaryHeap::new();
    let s = source as usize;
    if s < n {
        dist[s] = 0;
        heap.push(Reverse(Entry { d: 0, v: s }));
    }
    while let Some(Reverse(Entry { d, v })) = heap.pop() {
        if d != dist[v] { continue; }
        for &to in g.neighbors(v) {
            let to = to as usize;
            let nd = d + 1;
            if nd < dist[to] {
                dist[to] = nd;
                heap.push(Reverse(Entry { d: nd, v: to }));
            }
        }
    }
    dist
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::generate;
    use crate::rng::JenkinsRng;
    use crate::traversal::TraversalState;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn bfs_costs(g: &Graph) -> Vec<u32> {
        let mut st = TraversalState::with_source(g.len(), 0).unwrap();
        st.run(g);
        st.cost
    }

    fn random_undirected(n: usize, m: usize, seed: u64) -> Graph {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut adj: Vec<Vec<NodeId>> = vec![Vec::new(); n];
        for _ in 0..m {
            let u = rng.gen_range(0..n);
            let v = rng.gen_range(0..n);
            adj[u].push(v as NodeId);
            adj[v].push(u as NodeId);
        }
        Graph::from_adjacency(&adj)
    }

    #[test]
    fn line_graph() {
        let adj: Vec<Vec<NodeId>> = (0..6u32)
            .map(|i| {
                let mut v = Vec::new();
                if i > 0 { v.push(i - 1); }
                if i < 5 { v.push(i + 1); }
                v
            })
            .collect();
        let g = Graph::from_adjacency(&adj);
        assert_eq!(unit_dijkstra(&g, 0), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(unit_dijkstra(&g, 3), vec![3, 2, 1, 0, 1, 2]);
    }

    #[test]
    fn matches_bfs_on_generated_graphs() {
        for n in [20i64, 50, 100] {
            let st = generate(n, &mut JenkinsRng::default()).unwrap();
            let expected = unit_dijkstra(&st.graph, 0);
            assert_eq!(bfs_costs(&st.graph), expected, "n={}", n);
        }
    }

    #[test]
    fn matches_bfs_on_sparse_random_graphs() {
        // sparse enough to leave some nodes unreachable
        for (n, m, seed) in [(60usize, 30usize, 1u64), (200, 150, 7), (500, 700, 42), (1000, 400, 2025)] {
            let g = random_undirected(n, m, seed);
            let expected = unit_dijkstra(&g, 0);
            let got = bfs_costs(&g);
            for i in 0..n {
                assert_eq!(got[i], expected[i], "node {} differs (n={}, seed={})", i, n, seed);
            }
        }
    }

    #[test]
    fn unreachable_stays_unset() {
        let g = Graph::from_adjacency(&[vec![1], vec![0], vec![3], vec![2]]);
        assert_eq!(unit_dijkstra(&g, 0), vec![0, 1, UNSET_COST, UNSET_COST]);
    }
}
