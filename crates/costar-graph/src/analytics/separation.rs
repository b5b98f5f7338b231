//! Total and average separation, and the unreachable set.

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;

use crate::error::{GraphError, GraphResult};
use crate::graph::LabeledGraph;

/// Sum, over every vertex in `tree`, of its distance from `root`.
///
/// Tree recursion over the children direction: a vertex's children are its
/// in-neighbors, since tree edges point child to parent. Each recursive
/// call carries the depth reached so far, so the whole tree is walked
/// exactly once.
///
/// # Errors
///
/// [`GraphError::UnknownVertex`] if `root` is not in `tree`.
pub fn total_distance<V, E>(tree: &LabeledGraph<V, E>, root: &V) -> GraphResult<usize>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    if !tree.has_vertex(root) {
        return Err(GraphError::unknown_vertex(root));
    }
    let mut total = 0;
    walk(tree, root, 0, &mut total)?;
    Ok(total)
}

fn walk<V, E>(tree: &LabeledGraph<V, E>, u: &V, depth: usize, total: &mut usize) -> GraphResult<()>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    *total += depth;
    for child in tree.in_neighbors(u)? {
        walk(tree, child, depth + 1, total)?;
    }
    Ok(())
}

/// Average distance from `root` over all vertices of `tree`:
/// `total_distance / num_vertices`.
///
/// # Errors
///
/// [`GraphError::EmptyTree`] if the tree has no vertices (cannot occur for
/// a tree built by [`shortest_path_tree`], which always contains its
/// source, but guarded regardless); [`GraphError::UnknownVertex`] if
/// `root` is not in `tree`.
///
/// [`shortest_path_tree`]: crate::traversal::shortest_path_tree
pub fn average_separation<V, E>(tree: &LabeledGraph<V, E>, root: &V) -> GraphResult<f64>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    if tree.num_vertices() == 0 {
        return Err(GraphError::EmptyTree);
    }
    let total = total_distance(tree, root)?;
    Ok(total as f64 / tree.num_vertices() as f64)
}

/// Vertices present in `graph` but absent from `tree`: the set at infinite
/// separation from the center the tree was built for.
///
/// Compares vertices by value equality.
#[must_use]
pub fn missing_vertices<V, E>(graph: &LabeledGraph<V, E>, tree: &LabeledGraph<V, E>) -> HashSet<V>
where
    V: Eq + Hash + Clone + fmt::Debug,
{
    graph
        .vertices()
        .filter(|v| !tree.has_vertex(v))
        .cloned()
        .collect()
}
