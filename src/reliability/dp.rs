//! # DP Engine
//!
//! Two linear passes over the arena built by [`crate::reliability::builder`]:
//! a forward pass that spreads probability mass from the root down through
//! the lo/hi branches, and a backward pass that folds per-component
//! connect-to-source probabilities back up from the terminal.
//!
//! Both passes rely on one structural fact: a node's successors are always
//! interned at `level + 1`, and ids are handed out in increasing level
//! order, so a successor's id is always strictly greater than its
//! predecessor's. A single ascending (forward) or descending (backward)
//! sweep over ids is therefore a valid topological order; no separate
//! sort or queue is needed.

use crate::input::ReliabilityInput;
use crate::reliability::store::{StateStore, TERMINAL_ROOT};

/// Spreads probability mass from the root (id [`TERMINAL_ROOT`], `p = 1.0`)
/// forward through every node's lo/hi branches, weighted by that level's
/// edge survival probability.
pub fn forward_pass(input: &ReliabilityInput, store: &mut StateStore) {
    let pi = input.pi();
    for id in TERMINAL_ROOT..store.len() {
        let (level, p, lo, hi) = {
            let node = store.node(id);
            (node.level, node.p, node.lo, node.hi)
        };
        if p == 0.0 || level >= pi.len() {
            continue;
        }
        let survive = pi[level];
        store.node_mut(lo).p += p * (1.0 - survive);
        store.node_mut(hi).p += p * survive;
    }
}

/// Folds per-component connect-to-source probability back from the
/// terminal up to the root, one level at a time in descending id order.
pub fn backward_pass(input: &ReliabilityInput, store: &mut StateStore) {
    let pi = input.pi();
    for id in (TERMINAL_ROOT..store.len()).rev() {
        let (level, lo, hi, vlo, vhi, cnum) = {
            let node = store.node(id);
            (
                node.level,
                node.lo,
                node.hi,
                node.vlo.clone(),
                node.vhi.clone(),
                node.cnum,
            )
        };
        if cnum == 0 {
            continue;
        }
        let survive = pi[level];
        let mut q = vec![0.0f64; cnum];
        for c in 0..cnum {
            // A negative entry means that component has no counterpart on
            // the far side of this branch at all (it fell off the frontier
            // without ever being asterisked) -- not the same as the
            // pruned-dead case, which is an explicit 0 in the terminal's
            // own q vector.
            if vlo[c] >= 0 {
                q[c] += (1.0 - survive) * store.node(lo).q[vlo[c] as usize];
            }
            if vhi[c] >= 0 {
                q[c] += survive * store.node(hi).q[vhi[c] as usize];
            }
        }
        store.node_mut(id).q = q;
    }
}
