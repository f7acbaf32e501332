//! Shared helpers for the integration test suite: a one-time tracing
//! subscriber install, a brute-force reliability solver used as an
//! independent cross-check, and a small random-graph generator for the
//! property tests.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rand::Rng;

static TRACING: Lazy<()> = Lazy::new(|| {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
});

/// Installs a `tracing-subscriber` exactly once across the whole test
/// binary, so individual tests can freely run in parallel without racing
/// on global subscriber registration.
pub fn init_tracing() {
    Lazy::force(&TRACING);
}

/// Disjoint-set union over `1..=n`, used only by [`brute_force`].
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(n: usize) -> Self {
        DisjointSet {
            parent: (0..=n).collect(),
        }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            self.parent[ra] = rb;
        }
    }
}

/// Exhaustively enumerates all `2^m` edge-subsets and sums, for each
/// vertex, the probability mass of every subset in which that vertex
/// shares a component with some source: an independent reliability
/// solver, exact by construction, exponential in `m`, so callers must
/// keep `m` small (at most ~20).
pub fn brute_force(
    n: u32,
    edges: &[(u32, u32)],
    pi: &[f64],
    sources: &[u32],
) -> HashMap<u32, f64> {
    let m = edges.len();
    assert!(m <= 20, "brute_force is exponential in m; keep test graphs small");

    let mut totals: HashMap<u32, f64> = (1..=n).map(|v| (v, 0.0)).collect();

    for mask in 0u64..(1u64 << m) {
        let mut weight = 1.0f64;
        let mut dsu = DisjointSet::new(n as usize);
        for (i, &(u, v)) in edges.iter().enumerate() {
            let alive = (mask >> i) & 1 == 1;
            weight *= if alive { pi[i] } else { 1.0 - pi[i] };
            if alive {
                dsu.union(u as usize, v as usize);
            }
        }
        if weight == 0.0 {
            continue;
        }
        for v in 1..=n {
            let v_root = dsu.find(v as usize);
            let connected = sources.iter().any(|&s| dsu.find(s as usize) == v_root);
            if connected {
                *totals.get_mut(&v).unwrap() += weight;
            }
        }
    }

    totals
}

/// A small random connected-ish multigraph-free undirected graph: `n`
/// vertices in `[3, max_n]`, a spanning path to guarantee every vertex is
/// touched, plus a handful of extra random edges. Returns `(n, edges)`.
pub fn random_small_graph<R: Rng + ?Sized>(rng: &mut R, max_n: u32, max_extra: usize) -> (u32, Vec<(u32, u32)>) {
    let n = rng.gen_range(3..=max_n);
    let mut order: Vec<u32> = (1..=n).collect();
    for i in (1..order.len()).rev() {
        let j = rng.gen_range(0..=i);
        order.swap(i, j);
    }

    let mut edges: Vec<(u32, u32)> = order.windows(2).map(|w| (w[0], w[1])).collect();

    let extra = rng.gen_range(0..=max_extra);
    for _ in 0..extra {
        let u = rng.gen_range(1..=n);
        let v = rng.gen_range(1..=n);
        if u == v {
            continue;
        }
        let (a, b) = if u < v { (u, v) } else { (v, u) };
        if !edges.contains(&(a, b)) {
            edges.push((a, b));
        }
    }

    (n, edges)
}

/// Full-graph (not frontier-limited) connectivity to any source, computed
/// with every edge present. Used to check that with every `pi[e] == 1`,
/// the emitted probability equals 1 exactly iff the vertex is in this set.
pub fn reachable_from_sources(n: u32, edges: &[(u32, u32)], sources: &[u32]) -> HashMap<u32, bool> {
    let mut dsu = DisjointSet::new(n as usize);
    for &(u, v) in edges {
        dsu.union(u as usize, v as usize);
    }
    (1..=n)
        .map(|v| {
            let v_root = dsu.find(v as usize);
            let reachable = sources.iter().any(|&s| dsu.find(s as usize) == v_root);
            (v, reachable)
        })
        .collect()
}

/// A random permutation of `edges`, used to test that the emitted
/// probabilities don't depend on edge order.
pub fn shuffled<R: Rng + ?Sized>(rng: &mut R, edges: &[(u32, u32)]) -> Vec<(u32, u32)> {
    let mut out = edges.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i);
        out.swap(i, j);
    }
    out
}
