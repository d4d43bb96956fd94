//! Building aligned adjacency structures from external graph data.
//!
//! Two graphs can only be compared when both are indexed by the same ordered
//! vertex set. [`VertexIndex`] is that shared set and [`GraphBuilder`] reduces
//! an edge list to it.

use super::{DenseAdjacency, Result, SparseAdjacency};
use petgraph::graph::IndexType;
use petgraph::visit::EdgeRef;
use petgraph::EdgeType;
use petgraph::Graph as PetGraph;
use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Ordered mapping from external vertex keys (e.g. city ids) to dense indices.
#[derive(Debug, Clone)]
pub struct VertexIndex<K: Ord> {
    // maps key to index into `keys`.
    indices: BTreeMap<K, usize>,
    keys: Vec<K>,
}

impl<K: Ord + Clone> VertexIndex<K> {
    pub fn new() -> VertexIndex<K> {
        VertexIndex {
            indices: BTreeMap::new(),
            keys: Vec::new(),
        }
    }

    /// Indices follow the order of first appearance.
    pub fn from_keys<I: IntoIterator<Item = K>>(keys: I) -> VertexIndex<K> {
        let mut index = VertexIndex::new();
        for key in keys {
            let _ = index.insert(key);
        }
        index
    }

    // returns vertex index
    pub fn insert(&mut self, key: K) -> usize {
        match self.indices.entry(key) {
            Entry::Vacant(e) => {
                let next_id = self.keys.len();
                self.keys.push(e.key().clone());
                e.insert(next_id);
                next_id
            }
            Entry::Occupied(e) => *e.get(),
        }
    }

    pub fn index_of(&self, key: &K) -> Option<usize> {
        self.indices.get(key).copied()
    }

    pub fn key(&self, idx: usize) -> Option<&K> {
        self.keys.get(idx)
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<K: Ord + Clone> Default for VertexIndex<K> {
    fn default() -> Self {
        VertexIndex::new()
    }
}

/// Collects the undirected simple graph induced on a shared [`VertexIndex`].
pub struct GraphBuilder<'a, K: Ord> {
    index: &'a VertexIndex<K>,
    // normalized so that the smaller index comes first
    edges: BTreeSet<(usize, usize)>,
    skipped_self_loops: usize,
    skipped_outside: usize,
}

impl<'a, K: Ord + Clone> GraphBuilder<'a, K> {
    pub fn new(index: &'a VertexIndex<K>) -> GraphBuilder<'a, K> {
        GraphBuilder {
            index,
            edges: BTreeSet::new(),
            skipped_self_loops: 0,
            skipped_outside: 0,
        }
    }

    /// Records the undirected edge `a -- b`. Returns `false` if the edge was
    /// already present, is a self-loop, or touches a vertex outside the index.
    pub fn add_edge(&mut self, a: &K, b: &K) -> bool {
        let (i, j) = match (self.index.index_of(a), self.index.index_of(b)) {
            (Some(i), Some(j)) => (i, j),
            _ => {
                self.skipped_outside += 1;
                return false;
            }
        };
        if i == j {
            self.skipped_self_loops += 1;
            return false;
        }
        self.edges.insert((i.min(j), i.max(j)))
    }

    pub fn num_vertices(&self) -> usize {
        self.index.len()
    }

    /// Number of distinct undirected edges recorded so far.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn skipped_self_loops(&self) -> usize {
        self.skipped_self_loops
    }

    pub fn skipped_outside(&self) -> usize {
        self.skipped_outside
    }

    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().copied()
    }

    fn edge_list(&self) -> Vec<(usize, usize)> {
        debug!(
            vertices = self.num_vertices(),
            edges = self.num_edges(),
            skipped_self_loops = self.skipped_self_loops,
            skipped_outside = self.skipped_outside,
            "building adjacency"
        );
        self.edges().collect()
    }

    pub fn dense(&self) -> Result<DenseAdjacency> {
        DenseAdjacency::from_edges(self.num_vertices(), &self.edge_list(), true)
    }

    pub fn sparse(&self) -> Result<SparseAdjacency> {
        SparseAdjacency::from_edges(self.num_vertices(), &self.edge_list(), true)
    }
}

fn petgraph_edges<N, E, Ty: EdgeType, Ix: IndexType>(pg: &PetGraph<N, E, Ty, Ix>) -> Vec<(usize, usize)> {
    pg.edge_references()
        .map(|e| (e.source().index(), e.target().index()))
        .collect()
}

impl DenseAdjacency {
    /// Node `i` of `pg` becomes vertex `i`. Undirected graphs produce a
    /// symmetric matrix. Weights, parallel edges and self-loops are dropped.
    pub fn from_petgraph<N, E, Ty: EdgeType, Ix: IndexType>(
        pg: &PetGraph<N, E, Ty, Ix>,
    ) -> Result<DenseAdjacency> {
        DenseAdjacency::from_edges(pg.node_count(), &petgraph_edges(pg), !pg.is_directed())
    }
}

impl SparseAdjacency {
    /// See [`DenseAdjacency::from_petgraph`].
    pub fn from_petgraph<N, E, Ty: EdgeType, Ix: IndexType>(
        pg: &PetGraph<N, E, Ty, Ix>,
    ) -> Result<SparseAdjacency> {
        SparseAdjacency::from_edges(pg.node_count(), &petgraph_edges(pg), !pg.is_directed())
    }
}
