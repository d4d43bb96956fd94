#![allow(dead_code)]

use edge_overlap::graph::{GraphBuilder, VertexIndex};
use edge_overlap::{DenseAdjacency, SparseAdjacency};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// 0 -- 1 -- 2 -- ... -- n-1
pub fn path_graph(n: usize) -> DenseAdjacency {
    let edges: Vec<_> = (1..n).map(|i| (i - 1, i)).collect();
    DenseAdjacency::from_edges(n, &edges, true).unwrap()
}

/// Undirected simple graph with `n` vertices and exactly `m` distinct edges.
pub fn random_edges(seed: u64, n: usize, m: usize) -> Vec<(usize, usize)> {
    assert!(m <= n * (n - 1) / 2);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut edges = std::collections::BTreeSet::new();
    while edges.len() < m {
        let i = rng.gen_range(0..n);
        let j = rng.gen_range(0..n);
        if i != j {
            edges.insert((i.min(j), i.max(j)));
        }
    }
    edges.into_iter().collect()
}

/// Directed graph with `n` vertices and exactly `m` distinct arcs.
pub fn random_arcs(seed: u64, n: usize, m: usize) -> Vec<(usize, usize)> {
    assert!(m <= n * (n - 1));
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut arcs = std::collections::BTreeSet::new();
    while arcs.len() < m {
        let i = rng.gen_range(0..n);
        let j = rng.gen_range(0..n);
        if i != j {
            arcs.insert((i, j));
        }
    }
    arcs.into_iter().collect()
}

pub fn random_dense(seed: u64, n: usize, m: usize) -> DenseAdjacency {
    DenseAdjacency::from_edges(n, &random_edges(seed, n, m), true).unwrap()
}

pub fn random_sparse(seed: u64, n: usize, m: usize) -> SparseAdjacency {
    SparseAdjacency::from_edges(n, &random_edges(seed, n, m), true).unwrap()
}

pub fn cities() -> VertexIndex<&'static str> {
    VertexIndex::from_keys(vec!["berlin", "paris", "rome", "tokyo", "new york", "lima"])
}

/// Sister-city bonds, including a self-loop, a duplicate and a city outside
/// the shared vertex set.
pub fn sister_cities<'a>(index: &'a VertexIndex<&'static str>) -> GraphBuilder<'a, &'static str> {
    let mut g = GraphBuilder::new(index);
    for &(a, b) in &[
        ("berlin", "paris"),
        ("paris", "rome"),
        ("rome", "rome"),
        ("berlin", "madrid"),
        ("paris", "berlin"),
        ("tokyo", "new york"),
        ("lima", "rome"),
    ] {
        g.add_edge(&a, &b);
    }
    g
}

pub fn air_routes<'a>(index: &'a VertexIndex<&'static str>) -> GraphBuilder<'a, &'static str> {
    let mut g = GraphBuilder::new(index);
    for &(a, b) in &[
        ("berlin", "paris"),
        ("paris", "new york"),
        ("tokyo", "new york"),
        ("berlin", "tokyo"),
        ("lima", "new york"),
    ] {
        g.add_edge(&a, &b);
    }
    g
}
