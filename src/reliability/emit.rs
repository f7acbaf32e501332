//! # Result Emitter
//!
//! Walks every frontier position at every level and sums, over all states
//! interned at that level, the probability mass reaching that state times
//! its per-component connect-to-source probability, producing, for every
//! vertex touched during the edge scan, the probability it ends up
//! connected to a source.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::reliability::frontier::FrontierTables;
use crate::reliability::store::StateStore;

/// One vertex's connect-to-source probability at a given level.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct VertexProbability {
    pub vertex: u32,
    pub probability: f64,
}

/// All vertex probabilities recorded for one frontier level.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LevelResult {
    pub level: usize,
    pub vertices: Vec<VertexProbability>,
}

/// The full output of a reliability computation: one [`LevelResult`] per
/// frontier, `0..=m`, in edge-scan order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReliabilityReport {
    pub levels: Vec<LevelResult>,
}

impl ReliabilityReport {
    /// Renders the legacy text format: `LEVEL i:` followed by one
    /// `vertex : probability` line per touched vertex, fifteen digits of
    /// precision, matching the file-based tool this crate supersedes.
    pub fn write_report<W: Write>(&self, mut out: W) -> io::Result<()> {
        for level in &self.levels {
            writeln!(out, "LEVEL {}:", level.level)?;
            for vp in &level.vertices {
                writeln!(out, "{} : {:.15}", vp.vertex, vp.probability)?;
            }
        }
        Ok(())
    }
}

/// Runs the emission pass described above over a fully-solved arena.
///
/// `Fᵢ` for `i` in `{0, m}` is always empty -- nothing has entered the
/// frontier before the first edge, and every vertex's last edge has been
/// consumed by the time the last edge is processed -- so those two levels
/// never carry a touched vertex and are skipped, matching the legacy
/// tool's level range.
pub fn emit(tables: &FrontierTables, store: &StateStore) -> ReliabilityReport {
    if tables.m < 2 {
        return ReliabilityReport { levels: Vec::new() };
    }

    let mut levels = Vec::with_capacity(tables.m - 1);

    for i in 1..tables.m {
        let frontier = &tables.frontier[i];
        let mut totals = vec![0.0f64; frontier.len()];
        for (state, &id) in store.states_at(i) {
            let node = store.node(id);
            if node.p == 0.0 {
                continue;
            }
            for (k, &class) in state.comp.iter().enumerate() {
                totals[k] += node.p * node.q[class as usize];
            }
        }

        let vertices = frontier
            .iter()
            .zip(totals)
            .map(|(&vertex, probability)| VertexProbability { vertex, probability })
            .collect();

        levels.push(LevelResult { level: i, vertices });
    }

    ReliabilityReport { levels }
}
