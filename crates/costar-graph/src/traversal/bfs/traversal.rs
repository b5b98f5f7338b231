//! BFS tree construction and path reconstruction.

use std::collections::{HashSet, VecDeque};
use std::fmt;
use std::hash::Hash;

use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::graph::LabeledGraph;

/// Build the shortest-path tree rooted at `source`.
///
/// Standard breadth-first expansion: a FIFO frontier and a visited set
/// seeded with `source`. Dequeued vertices expand via their out-neighbors,
/// uniformly; the base graph is assumed symmetric, which the loader
/// guarantees by inserting every edge undirected. A future directed
/// extension must not rely on that symmetry.
///
/// Each vertex discovered from `u` is inserted into the tree with one
/// directed edge toward its discovering parent, labeled with the *shared*
/// label handle of the corresponding graph edge (not a copy).
///
/// # Returns
///
/// A tree containing exactly the vertices reachable from `source`:
/// `source` has out-degree 0, every other vertex out-degree 1, and each
/// tree path to `source` has length equal to the graph distance. A source
/// with no reachable neighbors yields a one-vertex, zero-edge tree.
///
/// # Errors
///
/// [`GraphError::UnknownVertex`] if `source` is not in `graph`.
pub fn shortest_path_tree<V, E>(
    graph: &LabeledGraph<V, E>,
    source: &V,
) -> GraphResult<LabeledGraph<V, E>>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    if !graph.has_vertex(source) {
        return Err(GraphError::unknown_vertex(source));
    }

    let mut tree = LabeledGraph::new();
    tree.insert_vertex(source.clone());

    let mut visited: HashSet<V> = HashSet::new();
    let mut frontier: VecDeque<V> = VecDeque::new();
    visited.insert(source.clone());
    frontier.push_back(source.clone());

    while let Some(u) = frontier.pop_front() {
        for v in graph.out_neighbors(&u)? {
            if visited.contains(v) {
                continue;
            }
            visited.insert(v.clone());
            tree.insert_vertex(v.clone());
            // Child points at its discovering parent, aliasing the base
            // graph's label rather than copying it.
            let label = graph.label(v, &u)?;
            tree.insert_directed_shared(v, &u, label)?;
            frontier.push_back(v.clone());
        }
    }

    debug!(
        source = ?source,
        reached = tree.num_vertices(),
        "built shortest-path tree"
    );
    Ok(tree)
}

/// Reconstruct the path from `v` back to the tree root: `v` first, root
/// last.
///
/// Follows the unique outgoing edge of each vertex until reaching the root
/// (out-degree 0). Terminates because the tree is acyclic by construction;
/// worst case V steps. The path length minus one is `v`'s separation from
/// the root.
///
/// # Errors
///
/// [`GraphError::NotReachable`] if `v` is not in `tree`: a vertex absent
/// from the tree is unreachable from the tree's root in the base graph.
pub fn path_to_root<V, E>(tree: &LabeledGraph<V, E>, v: &V) -> GraphResult<Vec<V>>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    if !tree.has_vertex(v) {
        return Err(GraphError::not_reachable(v));
    }

    let mut path = Vec::new();
    let mut current = v.clone();
    loop {
        let parent = tree.out_neighbors(&current)?.next().cloned();
        match parent {
            Some(parent) => {
                path.push(current);
                current = parent;
            }
            None => {
                path.push(current);
                return Ok(path);
            }
        }
    }
}

/// The separation (graph distance) of `v` from the tree root: the number
/// of hops on its tree path.
///
/// # Errors
///
/// [`GraphError::NotReachable`] if `v` is not in `tree`.
pub fn separation<V, E>(tree: &LabeledGraph<V, E>, v: &V) -> GraphResult<usize>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    if !tree.has_vertex(v) {
        return Err(GraphError::not_reachable(v));
    }

    let mut hops = 0;
    let mut current = v.clone();
    while let Some(parent) = tree.out_neighbors(&current)?.next().cloned() {
        hops += 1;
        current = parent;
    }
    Ok(hops)
}
