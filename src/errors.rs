use std::error::Error;
use std::fmt;


/// Errors raised by graph lookups
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    EdgeNotFound, // Weight lookup on an edge that is not in the graph
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::EdgeNotFound => write!(f, "edge not found in graph"),
        }
    }
}

impl Error for GraphError {}


/// Errors raised by the shortest path engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    NoPathComputed, // path/distance queried without a preceding successful search
    Graph(GraphError), // graph lookup failed mid-search
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::NoPathComputed => write!(f, "no shortest path has been computed"),
            SearchError::Graph(e) => write!(f, "graph error during search: {e}"),
        }
    }
}

impl Error for SearchError {}

impl From<GraphError> for SearchError {
    fn from(error: GraphError) -> Self {
        SearchError::Graph(error)
    }
}
