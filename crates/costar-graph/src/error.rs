//! Error types for graph and traversal operations.
//!
//! Every fallible operation in this crate returns [`GraphResult`]. All four
//! conditions are local and recoverable: they are reported to the caller,
//! never swallowed and never process-fatal. The engine performs no retries;
//! every operation is deterministic and in-memory, so it either fully
//! succeeds or fails with one clear cause.

use thiserror::Error;

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Error type for all graph, traversal, and analytics operations.
#[derive(Error, Debug)]
pub enum GraphError {
    /// An operation referenced a vertex absent from the graph or tree it
    /// was invoked on (BFS source, edge endpoint, degree query, analytics
    /// root).
    #[error("unknown vertex: {0}")]
    UnknownVertex(String),

    /// Label lookup on an edge that does not exist.
    #[error("no edge from {from} to {to}")]
    NoSuchEdge { from: String, to: String },

    /// Path reconstruction requested for a vertex not present in the tree,
    /// i.e. unreachable from that tree's root in the base graph.
    #[error("not reachable from the tree root: {0}")]
    NotReachable(String),

    /// Average separation requested on a tree with no vertices.
    #[error("tree has no vertices")]
    EmptyTree,
}

impl GraphError {
    pub(crate) fn unknown_vertex(v: &impl std::fmt::Debug) -> Self {
        GraphError::UnknownVertex(format!("{v:?}"))
    }

    pub(crate) fn no_such_edge(from: &impl std::fmt::Debug, to: &impl std::fmt::Debug) -> Self {
        GraphError::NoSuchEdge {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }

    pub(crate) fn not_reachable(v: &impl std::fmt::Debug) -> Self {
        GraphError::NotReachable(format!("{v:?}"))
    }
}

static_assertions::assert_impl_all!(GraphError: Send, Sync, std::error::Error);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_vertex_names_the_vertex() {
        let err = GraphError::unknown_vertex(&"Kevin Bacon");
        assert!(err.to_string().contains("Kevin Bacon"));
    }

    #[test]
    fn no_such_edge_names_both_endpoints() {
        let err = GraphError::no_such_edge(&"a", &"b");
        let msg = err.to_string();
        assert!(msg.contains("\"a\""));
        assert!(msg.contains("\"b\""));
    }

    #[test]
    fn graph_result_alias_works_with_question_mark() {
        fn inner() -> GraphResult<u32> {
            Ok(7)
        }
        fn outer() -> GraphResult<u32> {
            let v = inner()?;
            Ok(v + 1)
        }
        assert_eq!(outer().unwrap(), 8);
    }

    #[test]
    fn errors_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GraphError>();
    }
}
