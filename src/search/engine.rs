use crate::collections::{FxHashMap, FxIndexMap};
use crate::errors::SearchError;
use crate::graph::DirectedGraph;
use crate::pqueue::IndexMinPq;
use super::heuristic::Heuristic;
use super::observer::{NoOpObserver, SearchObserver};

use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Zero;


/// Shortest paths in a weighted directed graph
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// Runs Dijkstra's algorithm, or A* when a [`Heuristic`] is supplied.
/// The frontier lives in an [`IndexMinPq`] so a cheaper path to an already
/// discovered vertex is a decrease-key, not a duplicate heap entry.
///
/// Both modes terminate the moment the goal is extracted from the frontier,
/// before its successors are relaxed (the standard A* early exit). With the
/// goal settled its distance is final, so stopping there is safe in Dijkstra
/// mode too, and both modes report identical distances on graphs with
/// equal-cost path ties.
///
/// All edge weights must be non-negative. One engine runs one search at a
/// time; `search` takes `&mut self` and resets all prior state.
pub struct ShortestPath<'a, G, V, C> {
    graph: &'a G,
    heuristic: Option<Box<dyn Heuristic<V, C> + 'a>>,
    dist: FxIndexMap<V, C>, // best known cost from the source, absent = undiscovered
    pred: FxHashMap<V, V>, // predecessor on the best known path
    cand: IndexMinPq<V, C>, // frontier, keyed by vertex
    route: Option<(V, V)>, // (source, goal) of the last successful search
}

impl<'a, G, V, C> ShortestPath<'a, G, V, C>
where
    G: DirectedGraph<V, C>,
    V: Eq + Hash + Clone + Debug,
    C: Zero + Ord + Copy + Debug,
{

    /// Engine in Dijkstra mode
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            heuristic: None,
            dist: FxIndexMap::default(),
            pred: FxHashMap::default(),
            // The frontier can never hold more than every vertex at once
            cand: IndexMinPq::with_capacity(graph.vertex_count()),
            route: None,
        }
    }

    /// Engine in A* mode
    /// The heuristic must be admissible and consistent, see [`Heuristic`]
    pub fn with_heuristic<H>(graph: &'a G, heuristic: H) -> Self
    where
        H: Heuristic<V, C> + 'a,
    {
        Self {
            heuristic: Some(Box::new(heuristic)),
            ..Self::new(graph)
        }
    }

    /// Search a shortest path from `source` to `goal`
    ///
    /// Returns Ok(true) if a path was found, Ok(false) if the graph was
    /// exhausted without reaching the goal. Any previously computed search
    /// state is discarded first. A failed graph weight lookup aborts the
    /// search and is passed through to the caller.
    pub fn search(&mut self, source: V, goal: V) -> Result<bool, SearchError> {
        self.search_observed(source, goal, &mut NoOpObserver)
    }

    /// Search as [`Self::search`], reporting progress to an observer
    pub fn search_observed(
        &mut self,
        source: V,
        goal: V,
        observer: &mut dyn SearchObserver<V>,
    ) -> Result<bool, SearchError> {

        self.dist.clear();
        self.pred.clear();
        self.cand.clear();
        self.route = None;

        // Discover the source at distance zero
        self.dist.insert(source.clone(), C::zero());
        let source_prio = match &self.heuristic {
            Some(h) => h.estimated_cost(&source, &goal),
            None => C::zero(),
        };
        self.cand.add(source.clone(), source_prio);

        let graph = self.graph;

        // Settle the cheapest frontier vertex until the goal comes up
        // or the frontier runs dry
        while let Some(v) = self.cand.remove_min() {
            observer.vertex_settled(&v);

            if v == goal {
                self.route = Some((source, goal));
                return Ok(true);
            }

            let d = self.dist[&v];

            for w in graph.successors(&v) {
                let weight = graph.weight(&v, w)?;
                observer.edge_relaxed(&v, w);

                let candidate = d + weight;
                let known = self.dist.get(w).copied();

                match known {
                    // The existing path is at least as cheap, keep it
                    Some(best) if candidate >= best => {}
                    _ => {
                        self.pred.insert(w.clone(), v.clone());
                        self.dist.insert(w.clone(), candidate);

                        let prio = match &self.heuristic {
                            Some(h) => candidate + h.estimated_cost(w, &goal),
                            None => candidate,
                        };

                        if known.is_some() {
                            // Already on the frontier, move it up
                            self.cand.change(w, prio);
                        } else {
                            self.cand.add(w.clone(), prio);
                        }
                    }
                }
            }
        }

        Ok(false)
    }

    /// Shortest path of the last successful search, source to goal inclusive
    /// Fails with [`SearchError::NoPathComputed`] if the last search did not
    /// succeed or no search has run yet
    pub fn path(&self) -> Result<Vec<V>, SearchError> {
        let (source, goal) = self.route.as_ref().ok_or(SearchError::NoPathComputed)?;

        // Walk the predecessor chain backwards from the goal
        let mut path = vec![goal.clone()];
        let mut current = goal;
        while current != source {
            current = self.pred.get(current).ok_or(SearchError::NoPathComputed)?;
            path.push(current.clone());
        }

        path.reverse();
        Ok(path)
    }

    /// Total weight of the last successful search's path
    /// Fails under the same conditions as [`Self::path`]
    pub fn distance(&self) -> Result<C, SearchError> {
        let (_, goal) = self.route.as_ref().ok_or(SearchError::NoPathComputed)?;
        Ok(self.dist[goal])
    }
}
