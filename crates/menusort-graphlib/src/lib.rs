//! Graph helpers used by `menusort`.
//!
//! The graphs built while ordering menus are tiny and short-lived: nodes are plain indices into
//! the caller's slice, and edges are stored per node in insertion order. Insertion order matters,
//! because the topological sort visits dependencies in exactly the order they were added.

pub mod alg;
mod edges;

pub use alg::{Topsort, topsort, topsort_with_dropped};
pub use edges::EdgeMap;
