//! The labeled graph container.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;

use crate::error::{GraphError, GraphResult};

/// Shared, interior-mutable edge label.
///
/// Both directed halves of an undirected edge hold the same handle, so a
/// mutation reached via either direction is visible via the other. The
/// engine is single-threaded by contract, hence `Rc<RefCell<_>>` rather
/// than an atomic variant; graphs are deliberately `!Send`.
pub type EdgeLabel<E> = Rc<RefCell<E>>;

/// Mutable collection of vertices and directed labeled edges.
///
/// Edge labels are stored in nested maps `{ v1 -> { v2 -> label } }`, with
/// a mirrored incoming map so both neighbor directions are O(degree) to
/// enumerate. Iteration order of vertices and neighbors is unspecified and
/// must not be relied on for correctness.
///
/// # Invariants
///
/// - Vertices are unique; inserting a present vertex is a no-op.
/// - At most one directed edge exists per ordered (from, to) pair;
///   re-insertion replaces the stored label handle rather than merging.
///   Callers wanting accumulation fetch the handle with [`label`] and
///   mutate it in place.
/// - `u ∈ out_neighbors(v)` iff the edge (v, u) exists, and symmetrically
///   for `in_neighbors`.
///
/// [`label`]: LabeledGraph::label
pub struct LabeledGraph<V, E> {
    out: HashMap<V, HashMap<V, EdgeLabel<E>>>,
    inc: HashMap<V, HashMap<V, EdgeLabel<E>>>,
}

impl<V, E> LabeledGraph<V, E>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    /// Create an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            out: HashMap::new(),
            inc: HashMap::new(),
        }
    }

    /// Add a vertex if absent. Idempotent.
    pub fn insert_vertex(&mut self, v: V) {
        self.inc.entry(v.clone()).or_default();
        self.out.entry(v).or_default();
    }

    /// Create or overwrite the directed edge (from, to) with a fresh label.
    ///
    /// Both endpoints must already exist. Overwriting discards the previous
    /// label handle; it does not merge.
    pub fn insert_directed(&mut self, from: &V, to: &V, label: E) -> GraphResult<()> {
        self.insert_directed_shared(from, to, Rc::new(RefCell::new(label)))
    }

    /// Create or overwrite the directed edge (from, to), aliasing an
    /// existing label handle.
    ///
    /// This is how undirected insertion and the BFS tree builder share one
    /// label instance across edges.
    pub fn insert_directed_shared(
        &mut self,
        from: &V,
        to: &V,
        label: EdgeLabel<E>,
    ) -> GraphResult<()> {
        if !self.has_vertex(to) {
            return Err(GraphError::unknown_vertex(to));
        }
        let out_edges = self
            .out
            .get_mut(from)
            .ok_or_else(|| GraphError::unknown_vertex(from))?;
        out_edges.insert(to.clone(), Rc::clone(&label));
        let in_edges = self
            .inc
            .get_mut(to)
            .ok_or_else(|| GraphError::unknown_vertex(to))?;
        in_edges.insert(from.clone(), label);
        Ok(())
    }

    /// Insert the undirected edge {a, b}: directed edges (a, b) and (b, a)
    /// sharing one label instance.
    pub fn insert_undirected(&mut self, a: &V, b: &V, label: E) -> GraphResult<()> {
        let shared = Rc::new(RefCell::new(label));
        self.insert_directed_shared(a, b, Rc::clone(&shared))?;
        self.insert_directed_shared(b, a, shared)
    }

    /// Whether the vertex is present.
    #[must_use]
    pub fn has_vertex(&self, v: &V) -> bool {
        self.out.contains_key(v)
    }

    /// Whether the directed edge (from, to) is present.
    #[must_use]
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.out.get(from).map_or(false, |m| m.contains_key(to))
    }

    /// The label handle for the edge (from, to).
    ///
    /// Returns the stored handle, not a copy: borrowing it mutably
    /// accumulates in place and is visible through every edge sharing it.
    pub fn label(&self, from: &V, to: &V) -> GraphResult<EdgeLabel<E>> {
        self.out
            .get(from)
            .and_then(|m| m.get(to))
            .map(Rc::clone)
            .ok_or_else(|| GraphError::no_such_edge(from, to))
    }

    /// All vertices, in unspecified order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.out.keys()
    }

    /// Vertices reachable from `v` via one outgoing edge, in unspecified
    /// order.
    pub fn out_neighbors<'g>(&'g self, v: &V) -> GraphResult<impl Iterator<Item = &'g V>> {
        self.out
            .get(v)
            .map(|m| m.keys())
            .ok_or_else(|| GraphError::unknown_vertex(v))
    }

    /// Vertices with one edge into `v`, in unspecified order.
    pub fn in_neighbors<'g>(&'g self, v: &V) -> GraphResult<impl Iterator<Item = &'g V>> {
        self.inc
            .get(v)
            .map(|m| m.keys())
            .ok_or_else(|| GraphError::unknown_vertex(v))
    }

    /// Number of outgoing edges from `v`.
    pub fn out_degree(&self, v: &V) -> GraphResult<usize> {
        self.out
            .get(v)
            .map(HashMap::len)
            .ok_or_else(|| GraphError::unknown_vertex(v))
    }

    /// Number of incoming edges into `v`.
    pub fn in_degree(&self, v: &V) -> GraphResult<usize> {
        self.inc
            .get(v)
            .map(HashMap::len)
            .ok_or_else(|| GraphError::unknown_vertex(v))
    }

    /// Number of vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.out.len()
    }
}

impl<V, E> Default for LabeledGraph<V, E>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> fmt::Debug for LabeledGraph<V, E>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LabeledGraph")
            .field("vertices", &self.out.keys().collect::<Vec<_>>())
            .field(
                "edges",
                &self
                    .out
                    .iter()
                    .flat_map(|(from, m)| m.keys().map(move |to| (from, to)))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}
