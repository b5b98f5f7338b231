//! Separation analytics over shortest-path trees.
//!
//! Pure functions over already-built graphs and trees; no cross-call
//! state. Distance accumulation walks the tree once top-down with an
//! explicit depth counter, O(V), rather than re-walking a path per vertex.

mod separation;

pub use separation::{average_separation, missing_vertices, total_distance};
