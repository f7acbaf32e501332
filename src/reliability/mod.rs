//! The frontier-based search engine: five components wired in a straight
//! line from raw input to a level-by-level reliability report.
//!
//! ```text
//! ReliabilityInput -> FrontierAnalyzer -> StateStore/builder -> dp -> emit
//! ```
//!
//! [`compute`] is the single entry point a caller needs; the submodules are
//! public so tests and benchmarks can drive each stage in isolation.

pub mod builder;
pub mod dp;
pub mod emit;
pub mod frontier;
pub mod state;
pub mod store;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::input::ReliabilityInput;
use emit::ReliabilityReport;
use frontier::FrontierAnalyzer;
use store::StateStore;

/// What to do when a declared source is never touched by any edge in the
/// given order.
///
/// The legacy tool always treated this as fatal; `Skip` is offered for
/// callers who want to compute reliability against the sources that *do*
/// appear in a partial or filtered edge list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UntouchedSourcePolicy {
    Reject,
    Skip,
}

impl Default for UntouchedSourcePolicy {
    fn default() -> Self {
        UntouchedSourcePolicy::Reject
    }
}

/// Knobs controlling engine behavior beyond what's implied by the problem
/// data itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    pub on_untouched_source: UntouchedSourcePolicy,
}

impl Default for EngineOptions {
    fn default() -> Self {
        EngineOptions {
            on_untouched_source: UntouchedSourcePolicy::default(),
        }
    }
}

/// Runs the full pipeline -- frontier analysis, DAG construction, both DP
/// passes, and result emission -- over one validated problem.
pub fn compute(input: &ReliabilityInput, options: &EngineOptions) -> Result<ReliabilityReport, Error> {
    let span = tracing::info_span!("compute", n = input.n(), m = input.m());
    let _enter = span.enter();

    let tables = FrontierAnalyzer::analyze(input.n(), input.edges(), input.sources(), options)?;
    tracing::debug!(levels = tables.m + 1, "frontier tables built");

    let mut store = StateStore::new(tables.m);
    builder::build(&tables, &mut store)?;
    tracing::debug!(nodes = store.len(), "decision diagram built");

    dp::forward_pass(input, &mut store);
    dp::backward_pass(input, &mut store);

    Ok(emit::emit(&tables, &store))
}
