//! Run configuration and its command-line form.
use crate::error::{BfsError, Result};
use crate::report::EXPECTED_NODE_COUNT;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BenchConfig {
    pub node_count: i64,
    /// Dump every `(index, cost)` pair after the run.
    pub verbose: bool,
    pub trials: usize,
    /// Re-check BFS costs against an independent Dijkstra.
    pub cross_check: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            node_count: EXPECTED_NODE_COUNT as i64,
            verbose: false,
            trials: 1,
            cross_check: false,
        }
    }
}

pub const USAGE: &str = "Usage: bfsgraph-cli [--n <nodes> | <nodes>] [--trials <k>] [--verbose|-v] [--cross-check]";

fn parse_value<T: std::str::FromStr>(flag: &str, v: Option<String>) -> Result<T> {
    let v = v.ok_or_else(|| BfsError::InvalidArgument(format!("{} requires a value", flag)))?;
    v.parse()
        .map_err(|_| BfsError::InvalidArgument(format!("{} {}: not a number", flag, v)))
}

impl BenchConfig {
    /// Parses flags (program name already stripped). Node count range is
    /// checked later by generation, so negative counts parse here.
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut cfg = Self::default();
        let mut it = args.into_iter();
        while let Some(a) = it.next() {
            match a.as_str() {
                "--n" | "--nodes" => cfg.node_count = parse_value("--n", it.next())?,
                "--trials" => cfg.trials = parse_value("--trials", it.next())?,
                "--verbose" | "-v" => cfg.verbose = true,
                "--cross-check" => cfg.cross_check = true,
                _ => match a.parse::<i64>() {
                    Ok(n) => cfg.node_count = n,
                    Err(_) => return Err(BfsError::InvalidArgument(format!("unknown argument {}", a))),
                },
            }
        }
        if cfg.trials == 0 {
            return Err(BfsError::InvalidArgument("--trials must be at least 1".into()));
        }
        Ok(cfg)
    }
}
