//! The four values the reliability engine needs, validated once at the
//! boundary so the rest of the crate can assume well-formed data.
//!
//! Vertex ids are 1-indexed in the public API, matching the file-based
//! contract of the tool this crate supersedes; the translation to dense
//! 0-indexed frontier positions happens inside
//! [`crate::reliability::frontier`].

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A fully-populated reliability problem: a vertex count, an edge order,
/// per-edge survival probabilities aligned to that order, and a source set.
///
/// # Examples
///
/// ```
/// use frontier_reliability::input::ReliabilityInput;
///
/// let input = ReliabilityInput::new(2, vec![(1, 2)], vec![0.4], vec![1]).unwrap();
///
/// assert_eq!(input.n(), 2);
/// assert_eq!(input.edges(), &[(1, 2)]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReliabilityInput {
    n: u32,
    edges: Vec<(u32, u32)>,
    pi: Vec<f64>,
    sources: Vec<u32>,
}

impl ReliabilityInput {
    /// Build a new input, validating it against §7's `InputShape` rules.
    ///
    /// Validation catches: a mismatched `pi` length, an out-of-range vertex
    /// in `edges` or `sources`, a self-loop edge, a probability outside
    /// `[0, 1]`, and an empty source set. It does *not* catch an untouched
    /// source; that depends on the edge order and is checked later by
    /// [`crate::reliability::frontier::FrontierAnalyzer`], which is where
    /// `EngineOptions::on_untouched_source` applies.
    pub fn new(
        n: u32,
        edges: Vec<(u32, u32)>,
        pi: Vec<f64>,
        sources: Vec<u32>,
    ) -> Result<Self, Error> {
        if n == 0 {
            return Err(Error::InputShape("vertex count n must be positive".into()));
        }
        if edges.len() != pi.len() {
            return Err(Error::InputShape(format!(
                "pi has length {} but there are {} edges",
                pi.len(),
                edges.len()
            )));
        }
        for &(u, v) in &edges {
            if u == 0 || u > n || v == 0 || v > n {
                return Err(Error::InputShape(format!(
                    "edge ({u}, {v}) references a vertex outside [1, {n}]"
                )));
            }
            if u == v {
                return Err(Error::InputShape(format!(
                    "edge ({u}, {v}) is a self-loop, which the model does not support"
                )));
            }
        }
        for &p in &pi {
            if !(0.0..=1.0).contains(&p) {
                return Err(Error::InputShape(format!(
                    "survival probability {p} is outside [0, 1]"
                )));
            }
        }
        if sources.is_empty() {
            return Err(Error::InputShape("at least one source is required".into()));
        }
        for &s in &sources {
            if s == 0 || s > n {
                return Err(Error::InputShape(format!(
                    "source vertex {s} is outside [1, {n}]"
                )));
            }
        }

        Ok(Self {
            n,
            edges,
            pi,
            sources,
        })
    }

    /// Vertex count.
    pub fn n(&self) -> u32 {
        self.n
    }

    /// Edge count.
    pub fn m(&self) -> usize {
        self.edges.len()
    }

    /// The edge order, 1-indexed endpoints.
    pub fn edges(&self) -> &[(u32, u32)] {
        &self.edges
    }

    /// Survival probabilities, aligned to [`ReliabilityInput::edges`].
    pub fn pi(&self) -> &[f64] {
        &self.pi
    }

    /// The source vertex set.
    pub fn sources(&self) -> &[u32] {
        &self.sources
    }
}
