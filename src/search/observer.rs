/// Hook into the progress of a running search, e.g. for animation
///
/// The engine calls `vertex_settled` when a vertex is extracted from the
/// frontier with its final distance, and `edge_relaxed` for every outgoing
/// edge examined afterwards. Observers see the search, they never steer it:
/// nothing they do feeds back into distances, predecessors or termination.
pub trait SearchObserver<V> {

    /// A vertex left the frontier; its distance is final
    fn vertex_settled(&mut self, _vertex: &V) {}

    /// The edge from `_from` to `_to` was examined
    fn edge_relaxed(&mut self, _from: &V, _to: &V) {}
}

/// Observer that ignores every event
/// Used by searches that run without animation
pub struct NoOpObserver;

impl<V> SearchObserver<V> for NoOpObserver {}
