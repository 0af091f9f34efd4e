//! Shortest path search over weighted directed graphs
//!
//! Dijkstra's algorithm and the A* informed-search variant, driven by an
//! indexed min-priority queue that supports O(log n) priority updates
//! by key. Supplying a [`Heuristic`] selects A*, omitting it selects
//! Dijkstra; both share one engine and one termination policy.
//!
//! ```
//! use wayfind::{AdjacencyGraph, DirectedGraph, ShortestPath};
//!
//! let mut g = AdjacencyGraph::new();
//! g.add_edge(1, 2, 5u32);
//! g.add_edge(2, 3, 1);
//! g.add_edge(1, 3, 9);
//!
//! let mut sp = ShortestPath::new(&g);
//! assert_eq!(sp.search(1, 3), Ok(true));
//! assert_eq!(sp.distance(), Ok(6));
//! assert_eq!(sp.path(), Ok(vec![1, 2, 3]));
//! ```

mod collections;
pub mod errors;
pub mod graph;
pub mod pqueue;
pub mod search;

pub use errors::{GraphError, SearchError};
pub use graph::{AdjacencyGraph, DirectedGraph};
pub use pqueue::IndexMinPq;
pub use search::{Heuristic, NoOpObserver, SearchObserver, ShortestPath};
