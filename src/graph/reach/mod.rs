// src/graph/reach/mod.rs
//! Reachability engine: two path searches with documented traversal
//! orders, plus the relation-existence check both use as a precondition.
//!
//! Neither search returns a shortest path. The frontier search returns
//! the discovery order across expanding layers; the backtracking search
//! returns the full walk, dead ends included.

pub mod backtrack;
pub mod frontier;
pub mod relation;

pub use relation::path_exists;
