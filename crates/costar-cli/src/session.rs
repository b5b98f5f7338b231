//! Query session: the current center and its shortest-path tree.
//!
//! The original design kept the center and its tree in process-wide
//! mutable state; here the shell owns a `Session` explicitly and passes
//! every query through it. Re-centering is the only expensive transition
//! (one BFS); every other query reuses the already-built tree.

use std::collections::HashSet;

use tracing::info;

use costar_graph::{
    average_separation, missing_vertices, path_to_root, separation, shortest_path_tree,
    GraphResult,
};

use crate::loader::CostarGraph;

pub struct Session {
    graph: CostarGraph,
    center: String,
    tree: CostarGraph,
}

impl Session {
    /// Take ownership of the base graph and build the initial center's
    /// tree. Fails if the center is not a known performer.
    pub fn new(graph: CostarGraph, center: String) -> GraphResult<Self> {
        let tree = shortest_path_tree(&graph, &center)?;
        info!(center = %center, reached = tree.num_vertices(), "session opened");
        Ok(Self {
            graph,
            center,
            tree,
        })
    }

    #[must_use]
    pub fn center(&self) -> &str {
        &self.center
    }

    #[must_use]
    pub fn graph(&self) -> &CostarGraph {
        &self.graph
    }

    #[must_use]
    pub fn tree(&self) -> &CostarGraph {
        &self.tree
    }

    /// Rebuild the tree around a new center. On failure (unknown name) the
    /// session keeps its previous center and tree.
    pub fn set_center(&mut self, center: String) -> GraphResult<()> {
        let tree = shortest_path_tree(&self.graph, &center)?;
        info!(center = %center, reached = tree.num_vertices(), "center changed");
        self.center = center;
        self.tree = tree;
        Ok(())
    }

    /// Path from a performer back to the current center, performer first.
    pub fn path_to_center(&self, name: &str) -> GraphResult<Vec<String>> {
        path_to_root(&self.tree, &name.to_string())
    }

    /// Productions shared along one tree edge, in display order.
    pub fn shared_productions(&self, a: &str, b: &str) -> GraphResult<Vec<String>> {
        let label = self.tree.label(&a.to_string(), &b.to_string())?;
        let titles = label.borrow().iter().cloned().collect();
        Ok(titles)
    }

    /// Separation of a performer from the current center.
    pub fn separation_of(&self, name: &str) -> GraphResult<usize> {
        separation(&self.tree, &name.to_string())
    }

    /// Performers unreachable from the current center.
    #[must_use]
    pub fn infinite_separation(&self) -> HashSet<String> {
        missing_vertices(&self.graph, &self.tree)
    }

    /// Performers whose co-star degree lies in `[low, high]`, best
    /// connected first, names as tiebreak.
    ///
    /// The base graph is undirected, so in-degree and out-degree agree;
    /// in-degree is used.
    pub fn degrees_between(&self, low: usize, high: usize) -> GraphResult<Vec<(String, usize)>> {
        let mut out = Vec::new();
        for v in self.graph.vertices() {
            let degree = self.graph.in_degree(v)?;
            if (low..=high).contains(&degree) {
                out.push((v.clone(), degree));
            }
        }
        out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Ok(out)
    }

    /// Performers at non-infinite separation in `[low, high]` from the
    /// current center, nearest first, names as tiebreak.
    pub fn separations_between(&self, low: usize, high: usize) -> GraphResult<Vec<(String, usize)>> {
        let mut out = Vec::new();
        for v in self.tree.vertices() {
            let sep = separation(&self.tree, v)?;
            if (low..=high).contains(&sep) {
                out.push((v.clone(), sep));
            }
        }
        out.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        Ok(out)
    }

    /// Every performer ranked as a candidate center by the average
    /// separation of their own tree, best (lowest) first.
    ///
    /// Runs one full BFS per performer over the shared read-only base
    /// graph. O(V·(V+E)) by design; the trade is simplicity over
    /// incremental tree maintenance.
    pub fn rank_centers(&self) -> GraphResult<Vec<(String, f64)>> {
        let mut ranking = Vec::with_capacity(self.graph.num_vertices());
        for v in self.graph.vertices() {
            let tree = shortest_path_tree(&self.graph, v)?;
            let avg = average_separation(&tree, v)?;
            ranking.push((v.clone(), avg));
        }
        ranking.sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        Ok(ranking)
    }
}
