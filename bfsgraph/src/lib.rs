//! bfsgraph: the BFSGraph benchmark.
//! Generates a deterministic random undirected graph, runs a level-synchronous
//! BFS from node 0, and checks the summed hop distances against the known
//! answer for the canonical size.
use std::time::Instant;
use tracing::info;

pub mod config;
pub mod error;
pub mod graph;
pub mod reference;
pub mod report;
pub mod rng;
pub mod traversal;

pub use config::BenchConfig;
pub use error::{BfsError, Result};
pub use graph::{generate, Graph, GraphState, NodeId, NodeRange};
pub use report::{total_cost, verify, BenchmarkReport, RunResult, Verification};
pub use rng::JenkinsRng;
pub use traversal::{traverse, TraversalState, TraversalStats, UNSET_COST};

/// Generates, traverses and checks one graph. Timings cover generation and
/// traversal separately; the self-check and cross-check are not timed.
pub fn run(config: &BenchConfig) -> Result<BenchmarkReport> {
    let t0 = Instant::now();
    let GraphState { graph, mut traversal } = generate(config.node_count, &mut JenkinsRng::default())?;
    let init_time = t0.elapsed();
    info!(nodes = graph.len(), edges = graph.total_edges(), secs = init_time.as_secs_f64(), "graph initialised");

    let t1 = Instant::now();
    let stats = traversal.run(&graph);
    let traversal_time = t1.elapsed();
    info!(rounds = stats.rounds, visited = stats.visited, secs = traversal_time.as_secs_f64(), "traversal finished");

    let n = graph.len();
    let mem_bytes = graph.memory_estimate_bytes();
    let total = total_cost(&traversal.cost);
    let verification = verify(n, total)?;

    if config.cross_check {
        let expected = reference::unit_dijkstra(&graph, 0);
        if let Some((node, (&bfs, &reference))) = traversal
            .cost
            .iter()
            .zip(expected.iter())
            .enumerate()
            .find(|(_, (a, b))| a != b)
        {
            return Err(BfsError::CrossCheckMismatch { node, bfs, reference });
        }
        info!(nodes = n, "cross-check passed");
    }

    Ok(BenchmarkReport {
        node_count: n,
        total_edges: graph.total_edges(),
        init_time,
        traversal_time,
        rounds: stats.rounds,
        edges_scanned: stats.edges_scanned,
        mem_bytes,
        total_cost: total,
        verification,
        cost: traversal.cost,
    })
}

/// Benchmark-harness entry point: one run for `node_count` nodes.
pub fn run_benchmark(node_count: i64) -> Result<RunResult> {
    let config = BenchConfig { node_count, ..BenchConfig::default() };
    run(&config).map(|r| RunResult::from(&r))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(n: i64) -> BenchConfig {
        BenchConfig { node_count: n, cross_check: true, ..BenchConfig::default() }
    }

    #[test]
    fn known_totals() {
        for (n, total, edges) in [(1i64, 0u64, 4usize), (20, 37, 120), (50, 108, 312), (100, 234, 622), (1000, 4023, 6016)] {
            let r = run(&cfg(n)).unwrap();
            assert_eq!(r.total_cost, total, "n={}", n);
            assert_eq!(r.total_edges, edges, "n={}", n);
            assert_eq!(r.verification, Verification::Unchecked);
            assert_eq!(r.cost.len(), n as usize);
            assert_eq!(r.cost[0], 0);
            assert_eq!(r.edges_scanned, edges, "n={}", n);
            assert!(r.mem_bytes >= edges * 4 + n as usize * 7);
            assert!(r.stats_line().contains(&format!("edges={}", edges)));
        }
    }

    #[test]
    fn repeated_runs_agree() {
        let a = run(&cfg(5000)).unwrap();
        let b = run(&cfg(5000)).unwrap();
        assert_eq!(a.cost, b.cost);
        assert_eq!(a.rounds, b.rounds);
        assert_eq!(a.edges_scanned, b.edges_scanned);
    }

    #[test]
    fn run_benchmark_result() {
        let r = run_benchmark(20).unwrap();
        assert_eq!(r.status, RunResult::SUCCESS);
        assert_eq!(r.options, "BFSGraph(20)");
        assert!(r.time >= 0.0);
    }

    #[test]
    fn invalid_counts_fail_fast() {
        assert!(matches!(run_benchmark(0), Err(BfsError::InvalidInput { node_count: 0, .. })));
        assert!(matches!(run_benchmark(-7), Err(BfsError::InvalidInput { node_count: -7, .. })));
    }

    #[test]
    #[ignore = "canonical 3M-node run; slow in debug builds"]
    fn canonical_self_check() {
        let r = run(&BenchConfig::default()).unwrap();
        assert_eq!(r.total_cost, report::EXPECTED_TOTAL_COST);
        assert_eq!(r.verification, Verification::Verified);
    }
}
