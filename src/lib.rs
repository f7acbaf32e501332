//! Exact multi-target network reliability via frontier-based search.
//!
//! Given an undirected graph with independent per-edge survival
//! probabilities and a set of source vertices, this crate builds a
//! BDD-like decision diagram over a fixed edge order -- compressing the
//! DP state to the current processing frontier's connectivity partition --
//! then runs two linear passes over that diagram to produce, for every
//! vertex touched during the edge scan, the probability that it ends up
//! connected to a source in the surviving subgraph.
//!
//! ```
//! use frontier_reliability::input::ReliabilityInput;
//! use frontier_reliability::reliability::{self, EngineOptions};
//!
//! let input = ReliabilityInput::new(
//!     4,
//!     vec![(1, 2), (2, 3), (3, 4)],
//!     vec![0.9, 0.9, 0.9],
//!     vec![1],
//! )
//! .unwrap();
//!
//! let report = reliability::compute(&input, &EngineOptions::default()).unwrap();
//! assert!(!report.levels.is_empty());
//! ```

pub mod error;
pub mod input;
pub mod reliability;

pub use error::Error;
pub use input::ReliabilityInput;
pub use reliability::{compute, EngineOptions, UntouchedSourcePolicy};
