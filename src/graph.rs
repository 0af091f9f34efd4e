use crate::collections::FxIndexMap;
use crate::errors::GraphError;

use std::fmt;
use std::hash::Hash;
use num_traits::One;


/// Directed graph with weighted edges
///
/// The shortest path engine only relies on `successors` and `weight`;
/// the rest of the contract exists for graph construction and inspection.
pub trait DirectedGraph<V, C> {

    /// Add a vertex without edges
    /// Returns false if the vertex already exists
    fn add_vertex(&mut self, v: V) -> bool;

    /// Add a directed edge from v to w, inserting missing vertices
    /// An existing (v, w) edge has its weight overwritten instead of being
    /// duplicated; returns false in that case
    fn add_edge(&mut self, v: V, w: V, weight: C) -> bool;

    /// Add a directed edge with the default weight of 1
    fn add_unit_edge(&mut self, v: V, w: V) -> bool
    where
        C: One,
        Self: Sized,
    {
        self.add_edge(v, w, C::one())
    }

    fn contains_vertex(&self, v: &V) -> bool;

    fn contains_edge(&self, v: &V, w: &V) -> bool;

    /// Weight of the edge from v to w
    /// A missing edge is a hard failure, not a default weight
    fn weight(&self, v: &V, w: &V) -> Result<C, GraphError>;

    /// Number of outgoing edges of v
    fn out_degree(&self, v: &V) -> usize;

    /// Number of incoming edges of v
    fn in_degree(&self, v: &V) -> usize;

    /// All vertices, in insertion order
    fn vertices<'a>(&'a self) -> impl Iterator<Item = &'a V>
    where
        V: 'a;

    /// Vertices reachable from v over one outgoing edge
    fn successors<'a>(&'a self, v: &V) -> impl Iterator<Item = &'a V>
    where
        V: 'a;

    /// Vertices that reach v over one incoming edge
    fn predecessors<'a>(&'a self, v: &V) -> impl Iterator<Item = &'a V>
    where
        V: 'a;

    fn vertex_count(&self) -> usize;

    fn edge_count(&self) -> usize;
}


/// Adjacency map implementation of [`DirectedGraph`]
///
/// Keeps two mirrored views: successors per vertex and predecessors per
/// vertex. Every edge lives in both views or in neither, so forward and
/// backward traversal are both O(out-degree) / O(in-degree).
#[derive(Debug, Clone)]
pub struct AdjacencyGraph<V, C> {
    succ: FxIndexMap<V, FxIndexMap<V, C>>,
    pred: FxIndexMap<V, FxIndexMap<V, C>>,
    edges: usize,
}

impl<V, C> Default for AdjacencyGraph<V, C> {
    fn default() -> Self {
        Self {
            succ: FxIndexMap::default(),
            pred: FxIndexMap::default(),
            edges: 0,
        }
    }
}

impl<V, C> AdjacencyGraph<V, C>
where
    V: Eq + Hash + Clone,
    C: Copy,
{

    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Graph with every edge reversed
    /// Vertices and weights are unchanged
    pub fn invert(&self) -> Self {
        Self {
            succ: self.pred.clone(),
            pred: self.succ.clone(),
            edges: self.edges,
        }
    }
}

impl<V, C> DirectedGraph<V, C> for AdjacencyGraph<V, C>
where
    V: Eq + Hash + Clone,
    C: Copy,
{

    fn add_vertex(&mut self, v: V) -> bool {
        if self.succ.contains_key(&v) {
            return false;
        }
        self.succ.insert(v.clone(), FxIndexMap::default());
        self.pred.insert(v, FxIndexMap::default());
        true
    }

    fn add_edge(&mut self, v: V, w: V, weight: C) -> bool {
        if self.contains_edge(&v, &w) {
            // Overwrite the weight in both views, keeping them consistent
            self.succ[&v].insert(w.clone(), weight);
            self.pred[&w].insert(v, weight);
            return false;
        }

        self.add_vertex(v.clone());
        self.add_vertex(w.clone());

        self.succ[&v].insert(w.clone(), weight);
        self.pred[&w].insert(v, weight);
        self.edges += 1;
        true
    }

    fn contains_vertex(&self, v: &V) -> bool {
        self.succ.contains_key(v)
    }

    fn contains_edge(&self, v: &V, w: &V) -> bool {
        self.succ.get(v).is_some_and(|m| m.contains_key(w))
    }

    fn weight(&self, v: &V, w: &V) -> Result<C, GraphError> {
        self.succ
            .get(v)
            .and_then(|m| m.get(w))
            .copied()
            .ok_or(GraphError::EdgeNotFound)
    }

    fn out_degree(&self, v: &V) -> usize {
        self.succ.get(v).map_or(0, |m| m.len())
    }

    fn in_degree(&self, v: &V) -> usize {
        self.pred.get(v).map_or(0, |m| m.len())
    }

    fn vertices<'a>(&'a self) -> impl Iterator<Item = &'a V>
    where
        V: 'a,
    {
        self.succ.keys()
    }

    fn successors<'a>(&'a self, v: &V) -> impl Iterator<Item = &'a V>
    where
        V: 'a,
    {
        self.succ.get(v).into_iter().flat_map(|m| m.keys())
    }

    fn predecessors<'a>(&'a self, v: &V) -> impl Iterator<Item = &'a V>
    where
        V: 'a,
    {
        self.pred.get(v).into_iter().flat_map(|m| m.keys())
    }

    fn vertex_count(&self) -> usize {
        self.succ.len()
    }

    fn edge_count(&self) -> usize {
        self.edges
    }
}

/// Lists every edge as "v -> w weight = c", one per line
impl<V, C> fmt::Display for AdjacencyGraph<V, C>
where
    V: fmt::Display,
    C: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (v, edges) in &self.succ {
            for (w, weight) in edges {
                writeln!(f, "{v} -> {w} weight = {weight}")?;
            }
        }
        Ok(())
    }
}
