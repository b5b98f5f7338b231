//! Tests for BFS tree construction and path reconstruction.

use std::rc::Rc;

use crate::error::GraphError;
use crate::graph::LabeledGraph;
use crate::traversal::bfs::{path_to_root, separation, shortest_path_tree};

/// Undirected co-star fixture:
///
/// ```text
///     A
///    / \
///   B   C
///  / \   \
/// D   E   F
/// ```
///
/// G is isolated.
fn fixture() -> LabeledGraph<&'static str, &'static str> {
    let mut g = LabeledGraph::new();
    for v in ["A", "B", "C", "D", "E", "F", "G"] {
        g.insert_vertex(v);
    }
    g.insert_undirected(&"A", &"B", "p1").unwrap();
    g.insert_undirected(&"A", &"C", "p2").unwrap();
    g.insert_undirected(&"B", &"D", "p3").unwrap();
    g.insert_undirected(&"B", &"E", "p4").unwrap();
    g.insert_undirected(&"C", &"F", "p5").unwrap();
    g
}

#[test]
fn tree_has_root_shape() {
    let g = fixture();
    let tree = shortest_path_tree(&g, &"A").expect("bfs failed");

    assert_eq!(tree.num_vertices(), 6, "G is unreachable");
    assert_eq!(tree.out_degree(&"A").unwrap(), 0, "root has no parent");
    for v in ["B", "C", "D", "E", "F"] {
        assert!(g.has_vertex(&v));
        assert_eq!(
            tree.out_degree(&v).unwrap(),
            1,
            "{v} must have exactly one parent"
        );
    }
    assert!(!tree.has_vertex(&"G"));
}

#[test]
fn tree_vertices_are_a_subset_of_graph_vertices() {
    let g = fixture();
    let tree = shortest_path_tree(&g, &"B").expect("bfs failed");
    for v in tree.vertices() {
        assert!(g.has_vertex(v));
    }
}

#[test]
fn tree_paths_are_shortest() {
    let g = fixture();
    let tree = shortest_path_tree(&g, &"A").expect("bfs failed");

    assert_eq!(separation(&tree, &"A").unwrap(), 0);
    assert_eq!(separation(&tree, &"B").unwrap(), 1);
    assert_eq!(separation(&tree, &"C").unwrap(), 1);
    assert_eq!(separation(&tree, &"D").unwrap(), 2);
    assert_eq!(separation(&tree, &"F").unwrap(), 2);
}

#[test]
fn path_from_root_is_a_singleton() {
    let g = fixture();
    let tree = shortest_path_tree(&g, &"A").expect("bfs failed");
    assert_eq!(path_to_root(&tree, &"A").unwrap(), vec!["A"]);
}

#[test]
fn paths_end_at_the_root_and_match_separation() {
    let g = fixture();
    let tree = shortest_path_tree(&g, &"A").expect("bfs failed");

    for v in ["A", "B", "C", "D", "E", "F"] {
        let path = path_to_root(&tree, &v).expect("path failed");
        assert_eq!(path[0], v);
        assert_eq!(*path.last().unwrap(), "A");
        assert_eq!(path.len() - 1, separation(&tree, &v).unwrap());
    }

    assert_eq!(path_to_root(&tree, &"D").unwrap(), vec!["D", "B", "A"]);
}

#[test]
fn tree_labels_alias_graph_labels() {
    let g = fixture();
    let tree = shortest_path_tree(&g, &"A").expect("bfs failed");

    let in_tree = tree.label(&"B", &"A").unwrap();
    let in_graph = g.label(&"B", &"A").unwrap();
    assert!(
        Rc::ptr_eq(&in_tree, &in_graph),
        "tree edges must share the graph's label instance"
    );
}

#[test]
fn unknown_source_is_rejected() {
    let g = fixture();
    let err = shortest_path_tree(&g, &"ghost").unwrap_err();
    assert!(matches!(err, GraphError::UnknownVertex(_)));
}

#[test]
fn unreachable_vertex_has_no_path() {
    let g = fixture();
    let tree = shortest_path_tree(&g, &"A").expect("bfs failed");
    assert!(matches!(
        path_to_root(&tree, &"G"),
        Err(GraphError::NotReachable(_))
    ));
    assert!(matches!(
        separation(&tree, &"G"),
        Err(GraphError::NotReachable(_))
    ));
}

#[test]
fn neighborless_source_yields_singleton_tree() {
    let g = fixture();
    let tree = shortest_path_tree(&g, &"G").expect("bfs failed");
    assert_eq!(tree.num_vertices(), 1);
    assert_eq!(tree.out_degree(&"G").unwrap(), 0);
}

#[test]
fn cycles_do_not_loop_forever() {
    let mut g: LabeledGraph<&str, u32> = LabeledGraph::new();
    for v in ["x", "y", "z"] {
        g.insert_vertex(v);
    }
    g.insert_undirected(&"x", &"y", 0).unwrap();
    g.insert_undirected(&"y", &"z", 0).unwrap();
    g.insert_undirected(&"z", &"x", 0).unwrap();

    let tree = shortest_path_tree(&g, &"x").expect("bfs failed");
    assert_eq!(tree.num_vertices(), 3);
    assert_eq!(separation(&tree, &"y").unwrap(), 1);
    assert_eq!(separation(&tree, &"z").unwrap(), 1);
}
