//! # State Store
//!
//! A level-indexed collection of hash maps from canonical [`State`] to node
//! id, plus the flat, append-only arena of DP nodes those ids index into.
//! Hashing uses `ahash`, matching the host crate's existing choice for its
//! own node/key maps.

use ahash::AHashMap;

use crate::reliability::state::State;

/// Reserved id for the "false" terminal: a branch that dies without ever
/// reconnecting to a source. `q = [0.0, 1.0]`; the `0` cell is the dead
/// reading and the `1` cell is the accept fast path reached when a pruned,
/// asterisked component is actually a delivered source.
pub const TERMINAL_FALSE: usize = 0;

/// Reserved id for the root node, interned at level 0 for the empty state.
pub const TERMINAL_ROOT: usize = 1;

/// One node of the decision diagram: a state's level, its component count,
/// its two successors, the per-component value maps linking it to those
/// successors, and the two DP scalars filled in by the forward/backward
/// passes.
#[derive(Clone, Debug)]
pub struct DpNode {
    pub level: usize,
    pub cnum: usize,
    pub lo: usize,
    pub hi: usize,
    /// `vlo[c]` is the component index of `c` in the 0-branch successor, or
    /// `-1` if `c` does not survive to any source along that branch.
    pub vlo: Vec<i16>,
    pub vhi: Vec<i16>,
    /// Probability mass reaching this node from the root.
    pub p: f64,
    /// Per-component probability that a vertex currently in class `c`
    /// connects to a source in the final subgraph.
    pub q: Vec<f64>,
}

impl DpNode {
    fn terminal_false() -> Self {
        DpNode {
            level: usize::MAX,
            cnum: 2,
            lo: TERMINAL_FALSE,
            hi: TERMINAL_FALSE,
            vlo: Vec::new(),
            vhi: Vec::new(),
            p: 0.0,
            q: vec![0.0, 1.0],
        }
    }

    fn root() -> Self {
        DpNode {
            level: 0,
            cnum: 0,
            lo: TERMINAL_FALSE,
            hi: TERMINAL_FALSE,
            vlo: Vec::new(),
            vhi: Vec::new(),
            p: 1.0,
            q: Vec::new(),
        }
    }
}

/// Owns the arena and the per-level intern tables. Grows monotonically:
/// nothing is ever removed, and ids 0/1 are reserved for the terminal and
/// the root.
pub struct StateStore {
    maps: Vec<AHashMap<State, usize>>,
    nodes: Vec<DpNode>,
}

impl StateStore {
    /// Creates a store for an `m`-edge problem, already seeded with the
    /// terminal (id 0) and the root interned at level 0 (id 1).
    pub fn new(m: usize) -> Self {
        let mut maps: Vec<AHashMap<State, usize>> = (0..=m).map(|_| AHashMap::default()).collect();
        maps[0].insert(State::root(), TERMINAL_ROOT);

        StateStore {
            maps,
            nodes: vec![DpNode::terminal_false(), DpNode::root()],
        }
    }

    /// Returns the id for `state` at `level`, interning a fresh node if this
    /// is the first time that exact state has been seen at that level.
    pub fn intern(&mut self, level: usize, state: State) -> usize {
        if let Some(&id) = self.maps[level].get(&state) {
            return id;
        }
        let cnum = state.cnum();
        let id = self.nodes.len();
        self.nodes.push(DpNode {
            level,
            cnum,
            lo: TERMINAL_FALSE,
            hi: TERMINAL_FALSE,
            vlo: vec![-1; cnum],
            vhi: vec![-1; cnum],
            p: 0.0,
            q: vec![0.0; cnum],
        });
        self.maps[level].insert(state, id);
        id
    }

    /// All interned `(state, id)` pairs at `level`, in unspecified order.
    pub fn states_at(&self, level: usize) -> impl Iterator<Item = (&State, &usize)> {
        self.maps[level].iter()
    }

    /// Number of states interned at `level`.
    pub fn count_at(&self, level: usize) -> usize {
        self.maps[level].len()
    }

    pub fn node(&self, id: usize) -> &DpNode {
        &self.nodes[id]
    }

    pub fn node_mut(&mut self, id: usize) -> &mut DpNode {
        &mut self.nodes[id]
    }

    /// Total number of nodes in the arena, including the two terminals.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}
