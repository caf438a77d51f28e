//! CLI driver (§6, §9): `mmc <input-path> <output-path>`.
//!
//! Reads a DIMACS edge-format graph, finds its minimum mean cycle, and
//! writes the result back in DIMACS edge format. Exit code is non-zero on
//! file-open failure, parse error, or an internal invariant violation,
//! matching `original_source/src/main.cpp`'s `argc`/`fstream`/`try-catch`
//! shape, generalized to Rust's `Result` plumbing and `tracing` output.

use mmc::core::dimacs::{read_dimacs, write_dimacs, ParallelEdgePolicy};
use mmc::core::engine::find_minimum_mean_cycle;
use mmc::core::gamma::Gamma;
use mmc::core::types::CanonicalEdge;
use std::fs::File;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 3 {
        eprintln!("usage: {} <input-path> <output-path>", args.first().map(String::as_str).unwrap_or("mmc"));
        return ExitCode::FAILURE;
    }

    match run(&args[1], &args[2]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("mmc: {}", message);
            ExitCode::FAILURE
        }
    }
}

fn run(input_path: &str, output_path: &str) -> Result<(), String> {
    let input_file = File::open(input_path)
        .map_err(|e| format!("failed to open input file '{}': {}", input_path, e))?;

    let parsed = read_dimacs(input_file, ParallelEdgePolicy::CollapseToCheapest)
        .map_err(|e| format!("failed to parse DIMACS input: {}", e))?;

    println!(
        "read graph with {} nodes and {} edges",
        parsed.graph.num_nodes(),
        parsed.graph.num_edges()
    );
    tracing::info!(
        num_nodes = parsed.graph.num_nodes(),
        num_edges = parsed.graph.num_edges(),
        collapsed_parallel_pairs = parsed.collapsed_parallel_edges.len(),
        "parsed DIMACS input"
    );

    let mmc = find_minimum_mean_cycle(&parsed.graph).map_err(|e| e.to_string())?;

    // §8 boundary behavior: a collapsed parallel pair is a candidate 2-cycle
    // in its own right; compare its mean against the MMC result and keep
    // whichever is cheaper.
    let cheapest_parallel_2cycle = parsed
        .collapsed_parallel_edges
        .iter()
        .min_by_key(|c| c.weights.0 as i64 + c.weights.1 as i64)
        .map(|c| {
            let gamma = Gamma::new(c.weights.0 as i64 + c.weights.1 as i64, 2);
            (c.edge, c.weights, gamma)
        });

    let (cycle, gamma): (Vec<(CanonicalEdge, i32)>, Option<Gamma>) = match (mmc, cheapest_parallel_2cycle) {
        (Some(mmc), Some((edge, weights, two_cycle_gamma))) if two_cycle_gamma < mmc.gamma => {
            println!("parallel 2-cycle beats the simple-graph MMC, mean {}", two_cycle_gamma.as_f64());
            (vec![(edge, weights.0), (edge, weights.1)], Some(two_cycle_gamma))
        }
        (Some(mmc), _) => {
            println!("minimum mean cycle: {} edges, mean {}", mmc.cycle.len(), mmc.gamma.as_f64());
            (mmc.cycle, Some(mmc.gamma))
        }
        (None, Some((edge, weights, two_cycle_gamma))) => {
            println!("graph is otherwise acyclic; using the parallel 2-cycle, mean {}", two_cycle_gamma.as_f64());
            (vec![(edge, weights.0), (edge, weights.1)], Some(two_cycle_gamma))
        }
        (None, None) => {
            println!("graph is acyclic; no minimum mean cycle exists");
            (Vec::new(), None)
        }
    };

    if let Some(gamma) = gamma {
        tracing::info!(mean = gamma.as_f64(), num_edges = cycle.len(), "writing minimum mean cycle");
    }

    let output_file = File::create(output_path)
        .map_err(|e| format!("failed to open output file '{}': {}", output_path, e))?;
    write_dimacs(output_file, parsed.graph.num_nodes(), &cycle).map_err(|e| e.to_string())?;

    Ok(())
}
