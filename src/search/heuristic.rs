/// Estimate of the remaining cost between two vertices
///
/// Supplying a heuristic switches the shortest path engine from Dijkstra
/// to A*. For A* to return optimal paths the estimate must be admissible
/// (never overestimate the true remaining cost) and consistent (satisfy
/// the triangle inequality across every edge). The engine does not check
/// either property; a violating heuristic silently yields suboptimal paths.
pub trait Heuristic<V, C> {

    /// Estimated cost of travelling from `from` to `to`
    fn estimated_cost(&self, from: &V, to: &V) -> C;
}

/// Any closure over a vertex pair works as a heuristic
impl<V, C, F> Heuristic<V, C> for F
where
    F: Fn(&V, &V) -> C,
{
    fn estimated_cost(&self, from: &V, to: &V) -> C {
        self(from, to)
    }
}
