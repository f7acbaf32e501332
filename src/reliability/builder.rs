//! # Transition Builder
//!
//! For every interned state at level `i`, derives the two successor states
//! (edge omitted / edge taken), introduces source asterisks, prunes
//! branches whose asterisked component falls off the frontier unconnected,
//! and records the per-component value maps the DP passes ride on.

use crate::error::Error;
use crate::reliability::frontier::{FrontierTables, MAX_COMPONENTS};
use crate::reliability::state::State;
use crate::reliability::store::{StateStore, TERMINAL_FALSE};

/// Walks every level in ascending order, expanding each interned state into
/// its 0-/1-branch successors. All successor interning for level `i`
/// targets `i + 1`, so by the time level `i` is fully processed, level
/// `i + 1`'s state set is complete and ready for its own expansion.
pub fn build(tables: &FrontierTables, store: &mut StateStore) -> Result<(), Error> {
    for i in 0..tables.m {
        let span = tracing::debug_span!("expand_level", level = i, states = store.count_at(i));
        let _enter = span.enter();

        // Snapshot this level's (state, id) pairs before mutating the
        // store: interning successors writes into maps[i + 1], which would
        // otherwise alias the borrow we're iterating over.
        let pending: Vec<(State, usize)> =
            store.states_at(i).map(|(state, &id)| (state.clone(), id)).collect();

        for (state, id) in pending {
            expand_state(i, &state, id, tables, store)?;
        }
    }
    Ok(())
}

/// The outcome of projecting one branch's intermediate labelling onto the
/// next frontier: either a live successor state, or a prune (the branch
/// dies because an asterisked component has nowhere left to go).
enum BranchResult {
    Live { comp: Vec<u8>, ast: u64, renum: Vec<i16> },
    Pruned,
}

fn expand_state(
    i: usize,
    state: &State,
    id: usize,
    tables: &FrontierTables,
    store: &mut StateStore,
) -> Result<(), Error> {
    let med_to_prev = &tables.med_to_prev[i];
    let prev_to_med = &tables.prev_to_med[i];
    let (u, v) = tables.edges[i];
    let (u_pos, v_pos) = tables.e_pos[i];

    // Step A: build F̃ᵢ's labelling by inheriting from Fᵢ or minting a
    // fresh label for newly-entering vertices.
    let mut cc: usize = store.node(id).cnum;
    let mut med_comp = vec![0u8; med_to_prev.len()];
    for (t, &mp) in med_to_prev.iter().enumerate() {
        med_comp[t] = if mp >= 0 {
            state.comp[mp as usize]
        } else {
            let fresh = cc as u8;
            cc += 1;
            fresh
        };
    }

    if cc > MAX_COMPONENTS {
        return Err(Error::FrontierOverflow { level: i, size: cc });
    }

    let mut med_ast = state.ast;

    // Step B: a source entering for the first time asterisks its class.
    for &src in &tables.srclist[i] {
        let pos = if src == u { u_pos } else { v_pos };
        med_ast |= 1u64 << med_comp[pos as usize];
    }

    // Step C: 0-branch, project the unmodified intermediate labelling.
    let lo = project_branch(cc, &med_comp, med_ast, &tables.next_to_med[i]);
    apply_branch(
        i, state, prev_to_med, &med_comp, med_ast, tables.src_final, &lo, store, id, true,
    );

    // Step D: 1-branch, contract the edge's endpoints, then project.
    let cat_to = med_comp[u_pos as usize];
    let cat_from = med_comp[v_pos as usize];
    for label in med_comp.iter_mut() {
        if *label == cat_from {
            *label = cat_to;
        }
    }
    if med_ast & (1u64 << cat_from) != 0 {
        med_ast &= !(1u64 << cat_from);
        med_ast |= 1u64 << cat_to;
    }

    let hi = project_branch(cc, &med_comp, med_ast, &tables.next_to_med[i]);
    apply_branch(
        i, state, prev_to_med, &med_comp, med_ast, tables.src_final, &hi, store, id, false,
    );

    Ok(())
}

/// Projects `med_comp`/`med_ast` onto the successor frontier given by
/// `target_to_med`, assigning fresh canonical labels in first-occurrence
/// order. Prunes (§4.3 step C.3/D) if an asterisked component has no
/// surviving label.
fn project_branch(cc: usize, med_comp: &[u8], med_ast: u64, target_to_med: &[u32]) -> BranchResult {
    let mut renum = vec![-1i16; cc];
    let mut next_label: i16 = 0;
    let mut comp = Vec::with_capacity(target_to_med.len());
    for &pos in target_to_med {
        let old = med_comp[pos as usize] as usize;
        if renum[old] < 0 {
            renum[old] = next_label;
            next_label += 1;
        }
        comp.push(renum[old] as u8);
    }

    let mut ast = 0u64;
    let mut bits = med_ast;
    while bits != 0 {
        let label = bits.trailing_zeros() as usize;
        bits &= bits - 1;
        match renum[label] {
            mapped if mapped >= 0 => ast |= 1u64 << mapped,
            _ => return BranchResult::Pruned,
        }
    }

    BranchResult::Live { comp, ast, renum }
}

#[allow(clippy::too_many_arguments)]
fn apply_branch(
    i: usize,
    state: &State,
    prev_to_med: &[u32],
    med_comp: &[u8],
    med_ast: u64,
    src_final: usize,
    result: &BranchResult,
    store: &mut StateStore,
    id: usize,
    is_lo: bool,
) {
    match result {
        BranchResult::Pruned => {
            set_successor(store, id, is_lo, TERMINAL_FALSE);
            for k in 0..state.comp.len() {
                let med_pos = prev_to_med[k] as usize;
                let c = state.comp[k] as usize;
                let accepted = i >= src_final && med_ast == 1u64 << med_comp[med_pos];
                set_value(store, id, is_lo, c, if accepted { 1 } else { 0 });
            }
        }
        BranchResult::Live { comp, ast, renum } => {
            let successor_id = store.intern(
                i + 1,
                State {
                    comp: comp.clone(),
                    ast: *ast,
                },
            );
            set_successor(store, id, is_lo, successor_id);
            for k in 0..state.comp.len() {
                let med_pos = prev_to_med[k] as usize;
                let c = state.comp[k] as usize;
                let old_label = med_comp[med_pos] as usize;
                set_value(store, id, is_lo, c, renum[old_label]);
            }
        }
    }
}

fn set_successor(store: &mut StateStore, id: usize, is_lo: bool, successor: usize) {
    let node = store.node_mut(id);
    if is_lo {
        node.lo = successor;
    } else {
        node.hi = successor;
    }
}

fn set_value(store: &mut StateStore, id: usize, is_lo: bool, component: usize, value: i16) {
    let node = store.node_mut(id);
    if is_lo {
        node.vlo[component] = value;
    } else {
        node.vhi[component] = value;
    }
}
