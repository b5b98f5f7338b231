//! Criterion benchmarks for tree construction and separation analytics.

use std::collections::BTreeSet;
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use costar_graph::{average_separation, shortest_path_tree, total_distance, LabeledGraph};

/// Chain of overlapping casts: production i links performers i..i+CAST, so
/// the graph is connected with diameter ~ n / (CAST - 1).
fn cast_chain(n: usize) -> LabeledGraph<String, BTreeSet<String>> {
    const CAST: usize = 6;
    let mut g = LabeledGraph::new();
    let names: Vec<String> = (0..n).map(|i| format!("performer-{i}")).collect();
    for name in &names {
        g.insert_vertex(name.clone());
    }
    for (i, window) in names.windows(CAST).enumerate() {
        let title = format!("production-{i}");
        for j in 0..window.len() {
            for k in (j + 1)..window.len() {
                let (a, b) = (&window[j], &window[k]);
                if !g.has_edge(a, b) {
                    g.insert_undirected(a, b, BTreeSet::new()).unwrap();
                }
                g.label(a, b).unwrap().borrow_mut().insert(title.clone());
            }
        }
    }
    g
}

fn bench_shortest_path_tree(c: &mut Criterion) {
    let graph = cast_chain(2_000);
    let source = "performer-0".to_string();
    c.bench_function("shortest_path_tree/2k", |b| {
        b.iter(|| shortest_path_tree(black_box(&graph), black_box(&source)).unwrap())
    });
}

fn bench_separation_analytics(c: &mut Criterion) {
    let graph = cast_chain(2_000);
    let source = "performer-0".to_string();
    let tree = shortest_path_tree(&graph, &source).unwrap();

    c.bench_function("total_distance/2k", |b| {
        b.iter(|| total_distance(black_box(&tree), black_box(&source)).unwrap())
    });
    c.bench_function("average_separation/2k", |b| {
        b.iter(|| average_separation(black_box(&tree), black_box(&source)).unwrap())
    });
}

criterion_group!(benches, bench_shortest_path_tree, bench_separation_analytics);
criterion_main!(benches);
