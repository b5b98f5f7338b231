//! Graph traversal.
//!
//! Breadth-first search over a [`LabeledGraph`](crate::graph::LabeledGraph)
//! produces a shortest-path tree, and path reconstruction walks that tree
//! back to its root.
//!
//! # Components
//!
//! - **BFS**: shortest-path-tree construction and parent-pointer path
//!   reconstruction

pub mod bfs;

pub use bfs::{path_to_root, separation, shortest_path_tree};
