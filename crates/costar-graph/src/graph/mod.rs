//! Adjacency-map labeled graph container.
//!
//! Directed edges are the primitive; an undirected edge is a pair of
//! directed edges sharing one underlying label instance. Higher layers rely
//! on that sharing to accumulate data onto an edge through either direction.
//!
//! # Components
//!
//! - [`LabeledGraph`]: mutable vertex/edge container with nested adjacency
//!   maps `{ v1 -> { v2 -> label } }` in both directions
//! - [`EdgeLabel`]: shared, interior-mutable label handle

mod labeled;

pub use labeled::{EdgeLabel, LabeledGraph};
