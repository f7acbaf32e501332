// # Frontier reliability demo
//
// Builds a small triangle (three vertices, every edge surviving
// independently with probability 0.5, a single source) and prints the
// per-vertex connect-to-source probability at every level, in the legacy
// `"LEVEL i:\n v : p\n"` text shape.

use frontier_reliability::input::ReliabilityInput;
use frontier_reliability::reliability::{self, EngineOptions};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let input = ReliabilityInput::new(
        3,
        vec![(1, 2), (2, 3), (1, 3)],
        vec![0.5, 0.5, 0.5],
        vec![1],
    )
    .expect("well-formed demo input");

    let report =
        reliability::compute(&input, &EngineOptions::default()).expect("demo input never overflows");

    report
        .write_report(std::io::stdout())
        .expect("stdout accepts the report");
}
