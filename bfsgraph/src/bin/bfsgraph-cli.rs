use bfsgraph::config::USAGE;
use bfsgraph::*;
use std::io::{self, BufWriter, Write};
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn print_report(r: &BenchmarkReport, verbose: bool) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    writeln!(out, "Init time     : {} s", r.init_time.as_secs_f64())?;
    writeln!(out, "Traversal time: {} s", r.traversal_time.as_secs_f64())?;
    if verbose {
        for (i, c) in r.costs() {
            writeln!(out, "{}) cost: {}", i, c)?;
        }
    }
    out.flush()
}

fn error_line(e: &dyn std::fmt::Display) -> String {
    format!("ERROR: {}", e)
}

/// Logs a fatal error and prints it to stderr.
fn fail(e: &dyn std::fmt::Display) -> ExitCode {
    error!("{}", e);
    eprintln!("{}", error_line(e));
    ExitCode::FAILURE
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .try_init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        println!("{}", USAGE);
        return ExitCode::SUCCESS;
    }
    let config = match BenchConfig::from_args(args) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}\n{}", e, USAGE);
            return ExitCode::from(2);
        }
    };

    let mut best: Option<RunResult> = None;
    for _ in 0..config.trials {
        let report = match run(&config) {
            Ok(r) => r,
            Err(e) => return fail(&e),
        };
        if let Err(e) = print_report(&report, config.verbose) {
            return fail(&format!("writing report: {}", e));
        }
        eprintln!("{}", report.stats_line());
        let row = RunResult::from(&report);
        match serde_json::to_string(&row) {
            Ok(json) => println!("{}", json),
            Err(e) => return fail(&format!("serializing result: {}", e)),
        }
        if best.as_ref().map(|b| row.time < b.time).unwrap_or(true) { best = Some(row); }
    }
    // Print best summary to stderr for human glance
    if let Some(b) = best { eprintln!("best traversal s={} {}", b.time, b.options); }
    ExitCode::SUCCESS
}
