//! Adjacency storage keyed by node id.

use rustc_hash::FxHashMap as HashMap;
use std::hash::Hash;

/// Outgoing adjacency for each node, kept in insertion order.
///
/// An entry `v -> [a, b]` means `a` and `b` are visited (and therefore emitted) before `v`.
/// Duplicate edges are kept; the sort tolerates them.
#[derive(Debug, Clone)]
pub struct EdgeMap<K = usize> {
    out: HashMap<K, Vec<K>>,
}

impl<K> Default for EdgeMap<K> {
    fn default() -> Self {
        Self {
            out: HashMap::default(),
        }
    }
}

impl<K> EdgeMap<K>
where
    K: Copy + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `w` must come before `v`.
    pub fn add_edge(&mut self, v: K, w: K) -> &mut Self {
        self.out.entry(v).or_default().push(w);
        self
    }

    pub fn edges(&self, v: K) -> &[K] {
        self.out.get(&v).map(Vec::as_slice).unwrap_or(&[])
    }
}
