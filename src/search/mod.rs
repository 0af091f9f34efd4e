pub mod engine;
pub mod heuristic;
pub mod observer;

pub use engine::ShortestPath;
pub use heuristic::Heuristic;
pub use observer::{NoOpObserver, SearchObserver};
