//! # Frontier Analyzer
//!
//! A pure function of the edge ordering: for every edge index it derives the
//! entering frontier `Fᵢ`, the intermediate frontier `F̃ᵢ` (`Fᵢ` plus the
//! edge's own endpoints), and the exiting frontier `Fᵢ₊₁` (`F̃ᵢ` minus the
//! vertices whose last edge is this one), together with the position maps
//! that let the transition builder move a component labelling from one
//! frontier to the next without ever comparing vertex identities again.

use std::collections::BTreeSet;

use crate::error::Error;
use crate::reliability::{EngineOptions, UntouchedSourcePolicy};

/// The maximum number of simultaneously-live frontier components the
/// 64-bit asterisk mask can track (§1 Non-goals, §9).
pub const MAX_COMPONENTS: usize = 64;

/// Precomputed frontier sequences and cross-index maps for one edge order.
///
/// Everything here is derived once from `(n, edges, sources)` and then
/// shared read-only by every state the transition builder processes.
#[derive(Debug, Clone)]
pub struct FrontierTables {
    /// Number of edges.
    pub m: usize,
    /// The edge order, passed straight through for convenience.
    pub edges: Vec<(u32, u32)>,
    /// `frontier[i]` is `Fᵢ`, for `i` in `0..=m`, ascending vertex id order.
    pub frontier: Vec<Vec<u32>>,
    /// `frontier_med[i]` is `F̃ᵢ`, for `i` in `0..m`, ascending vertex id order.
    pub frontier_med: Vec<Vec<u32>>,
    /// `med_to_prev[i][t]` is the position of `F̃ᵢ[t]` in `Fᵢ`, or `-1` if
    /// the vertex is newly entering at this edge.
    pub med_to_prev: Vec<Vec<i32>>,
    /// `prev_to_med[i][k]` is the position of `Fᵢ[k]` in `F̃ᵢ`.
    pub prev_to_med: Vec<Vec<u32>>,
    /// `next_to_med[i][l]` is the position of `Fᵢ₊₁[l]` in `F̃ᵢ`.
    pub next_to_med: Vec<Vec<u32>>,
    /// `med_to_next[i][t]` is the position of `F̃ᵢ[t]` in `Fᵢ₊₁`, or `-1` if
    /// the vertex leaves the frontier at this edge.
    pub med_to_next: Vec<Vec<i32>>,
    /// Positions of `edges[i]`'s two endpoints within `F̃ᵢ`.
    pub e_pos: Vec<(u32, u32)>,
    /// Sources whose first touch is edge `i`.
    pub srclist: Vec<Vec<u32>>,
    /// Largest `i` with a non-empty `srclist[i]`, or `0` if no source is
    /// ever introduced (only possible under `UntouchedSourcePolicy::Skip`).
    pub src_final: usize,
}

/// Computes [`FrontierTables`] from raw problem data.
pub struct FrontierAnalyzer;

impl FrontierAnalyzer {
    /// Computes per-vertex first/last touch and the per-edge frontier
    /// position maps in a single pass over the edge order.
    pub fn analyze(
        n: u32,
        edges: &[(u32, u32)],
        sources: &[u32],
        options: &EngineOptions,
    ) -> Result<FrontierTables, Error> {
        let m = edges.len();
        let n_usize = n as usize;

        let mut first_touch = vec![usize::MAX; n_usize + 1];
        let mut last_touch = vec![0usize; n_usize + 1];
        for (i, &(u, v)) in edges.iter().enumerate() {
            if first_touch[u as usize] == usize::MAX {
                first_touch[u as usize] = i;
            }
            if first_touch[v as usize] == usize::MAX {
                first_touch[v as usize] = i;
            }
            last_touch[u as usize] = i;
            last_touch[v as usize] = i;
        }

        if matches!(options.on_untouched_source, UntouchedSourcePolicy::Reject) {
            for &s in sources {
                if first_touch[s as usize] == usize::MAX {
                    return Err(Error::SourceUntouched(s));
                }
            }
        }

        let mut frontier = Vec::with_capacity(m + 1);
        let mut frontier_med = Vec::with_capacity(m);
        let mut med_to_prev = Vec::with_capacity(m);
        let mut prev_to_med = Vec::with_capacity(m);
        let mut next_to_med = Vec::with_capacity(m);
        let mut med_to_next = Vec::with_capacity(m);
        let mut e_pos = Vec::with_capacity(m);
        let mut srclist = vec![Vec::new(); m];
        let mut src_final = 0usize;

        let mut active: BTreeSet<u32> = BTreeSet::new();
        frontier.push(active.iter().copied().collect::<Vec<_>>());

        for (i, &(u, v)) in edges.iter().enumerate() {
            let f_i: Vec<u32> = active.iter().copied().collect();

            let mut med_set = active.clone();
            med_set.insert(u);
            med_set.insert(v);
            let f_med: Vec<u32> = med_set.iter().copied().collect();

            if f_med.len() > MAX_COMPONENTS {
                tracing::warn!(level = i, size = f_med.len(), "intermediate frontier approaching or past the component ceiling");
                return Err(Error::FrontierOverflow {
                    level: i,
                    size: f_med.len(),
                });
            }

            // Two-pointer match: both f_i and f_med are ascending subsets.
            let mut mtp = vec![-1i32; f_med.len()];
            let mut ptm = vec![0u32; f_i.len()];
            {
                let mut k = 0usize;
                for (l, &vtx) in f_med.iter().enumerate() {
                    if k < f_i.len() && f_i[k] == vtx {
                        mtp[l] = k as i32;
                        ptm[k] = l as u32;
                        k += 1;
                    }
                }
            }

            let mut next_set = med_set.clone();
            if last_touch[u as usize] == i {
                next_set.remove(&u);
            }
            if last_touch[v as usize] == i {
                next_set.remove(&v);
            }
            let f_next: Vec<u32> = next_set.iter().copied().collect();

            let mut mtn = vec![-1i32; f_med.len()];
            let mut ntm = vec![0u32; f_next.len()];
            {
                let mut l = 0usize;
                for (t, &vtx) in f_next.iter().enumerate() {
                    while l < f_med.len() && f_med[l] != vtx {
                        l += 1;
                    }
                    mtn[l] = t as i32;
                    ntm[t] = l as u32;
                }
            }

            let u_pos = f_med.binary_search(&u).expect("edge endpoint must be in its own intermediate frontier") as u32;
            let v_pos = f_med.binary_search(&v).expect("edge endpoint must be in its own intermediate frontier") as u32;

            if first_touch[u as usize] == i {
                srclist_push(&mut srclist, sources, i, u, &mut src_final);
            }
            if first_touch[v as usize] == i {
                srclist_push(&mut srclist, sources, i, v, &mut src_final);
            }

            frontier_med.push(f_med);
            med_to_prev.push(mtp);
            prev_to_med.push(ptm);
            next_to_med.push(ntm);
            med_to_next.push(mtn);
            e_pos.push((u_pos, v_pos));
            frontier.push(f_next.clone());

            active = next_set;
        }

        Ok(FrontierTables {
            m,
            edges: edges.to_vec(),
            frontier,
            frontier_med,
            med_to_prev,
            prev_to_med,
            next_to_med,
            med_to_next,
            e_pos,
            srclist,
            src_final,
        })
    }
}

fn srclist_push(
    srclist: &mut [Vec<u32>],
    sources: &[u32],
    level: usize,
    vertex: u32,
    src_final: &mut usize,
) {
    if sources.contains(&vertex) {
        srclist[level].push(vertex);
        *src_final = level;
    }
}
