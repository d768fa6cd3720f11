//! Cycle-tolerant topological sort.
//!
//! A depth-first postorder walk: a node is emitted after everything listed in its adjacency.
//! Reaching a node that is still being visited means the edge closes a cycle; that edge is
//! dropped and the walk carries on, so the result is always a full permutation.

use crate::EdgeMap;
use rustc_hash::FxHashMap as HashMap;
use std::hash::Hash;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    InProgress,
    Done,
}

/// Output of [`topsort_with_dropped`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topsort<K> {
    pub order: Vec<K>,
    /// Edges `(v, w)` that were ignored because `w` was still in progress when `v` reached it.
    pub dropped: Vec<(K, K)>,
}

pub fn topsort<K>(original_order: &[K], edges: &EdgeMap<K>) -> Vec<K>
where
    K: Copy + Eq + Hash,
{
    topsort_with_dropped(original_order, edges).order
}

/// Sorts `original_order` so that every node follows the nodes in its adjacency list.
///
/// Ties are broken by `original_order`: the driver always starts from the first node that has
/// not been visited yet, and dependencies are visited in edge insertion order.
pub fn topsort_with_dropped<K>(original_order: &[K], edges: &EdgeMap<K>) -> Topsort<K>
where
    K: Copy + Eq + Hash,
{
    let mut state: HashMap<K, Visit> = HashMap::default();
    let mut out = Topsort {
        order: Vec::with_capacity(original_order.len()),
        dropped: Vec::new(),
    };
    // `(node, next edge index)`; an explicit stack keeps long chains off the call stack.
    let mut stack: Vec<(K, usize)> = Vec::new();

    for &root in original_order {
        if state.contains_key(&root) {
            continue;
        }
        state.insert(root, Visit::InProgress);
        stack.push((root, 0));

        while let Some((v, next)) = stack.last_mut() {
            let v = *v;
            let Some(&w) = edges.edges(v).get(*next) else {
                stack.pop();
                state.insert(v, Visit::Done);
                out.order.push(v);
                continue;
            };
            *next += 1;
            match state.get(&w).copied() {
                None => {
                    state.insert(w, Visit::InProgress);
                    stack.push((w, 0));
                }
                Some(Visit::InProgress) => out.dropped.push((v, w)),
                Some(Visit::Done) => {}
            }
        }
    }
    out
}
