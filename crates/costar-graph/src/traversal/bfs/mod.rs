//! BFS (Breadth-First Search) shortest-path trees.
//!
//! Explores the base graph level by level from a chosen source and records
//! each discovery as a child-to-parent tree edge, so every tree path back
//! to the source is a shortest path.
//!
//! # Performance
//!
//! O(V+E) time and space over the reachable component.
//! Uses `VecDeque` for O(1) frontier operations.
//! Uses `HashSet` for O(1) visited lookup.

mod traversal;

#[cfg(test)]
mod tests;

pub use traversal::{path_to_root, separation, shortest_path_tree};
