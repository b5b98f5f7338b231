//! Shortest-path separation engine over labeled graphs.
//!
//! This crate is the graph engine behind the costar tools: performers are
//! vertices, and two performers are connected by an undirected edge whose
//! label is the growable set of productions they share. The engine itself
//! is domain-agnostic: any equality-comparable, hashable vertex type and
//! any label type work.
//!
//! # Architecture
//!
//! - **error**: recoverable error taxonomy with [`GraphError`]
//! - **graph**: adjacency-map [`LabeledGraph`] with shared-label undirected
//!   edges
//! - **traversal**: BFS shortest-path-tree builder and path reconstruction
//! - **analytics**: total/average separation and unreachable-set queries
//!
//! The engine is single-threaded and synchronous: no I/O, no locking, no
//! suspension points. A base graph is built once and read by any number of
//! tree constructions; each tree is exclusively owned by its caller.
//!
//! # Example
//!
//! ```
//! use costar_graph::{average_separation, path_to_root, shortest_path_tree, LabeledGraph};
//!
//! let mut graph: LabeledGraph<&str, Vec<&str>> = LabeledGraph::new();
//! for v in ["alice", "bob", "carol"] {
//!     graph.insert_vertex(v);
//! }
//! graph.insert_undirected(&"alice", &"bob", vec!["The Play"])?;
//! graph.insert_undirected(&"bob", &"carol", vec!["The Sequel"])?;
//!
//! let tree = shortest_path_tree(&graph, &"alice")?;
//! assert_eq!(path_to_root(&tree, &"carol")?, vec!["carol", "bob", "alice"]);
//! assert_eq!(average_separation(&tree, &"alice")?, 1.0);
//! # Ok::<(), costar_graph::GraphError>(())
//! ```

pub mod analytics;
pub mod error;
pub mod graph;
pub mod traversal;

pub use analytics::{average_separation, missing_vertices, total_distance};
pub use error::{GraphError, GraphResult};
pub use graph::{EdgeLabel, LabeledGraph};
pub use traversal::{path_to_root, separation, shortest_path_tree};
