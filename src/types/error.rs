//! Error types for the adjgraph library.

use thiserror::Error;

/// All errors that can occur in the adjgraph library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// A node named by handle or by value does not exist.
    #[error("Node not found: {0}")]
    NodeNotFound(String),

    /// A named edge does not exist.
    #[error("Edge not found: {0}")]
    EdgeNotFound(String),

    /// Node and adjacency collections are out of alignment, or an index is out of range.
    #[error("Invalid index: {0}")]
    InvalidIndex(String),

    /// A required node handle was absent.
    #[error("Node handle is null: {0}")]
    NodeIsNull(String),

    /// IO error while reading or writing a graph file.
    #[error("File read error: {0}")]
    FileRead(#[from] std::io::Error),

    /// Malformed graph document.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The algorithm does not support cyclic graphs.
    #[error("Cycle detected: {0}")]
    CycleDetected(String),

    /// The algorithm requires edge weights.
    #[error("Graph must have weights: {0}")]
    UnweightedGraph(String),

    /// The algorithm requires a graph without edge weights.
    #[error("Graph must not have weights: {0}")]
    WeightedGraph(String),
}

/// Discriminant of a [`GraphError`], for callers that only care about the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NodeNotFound,
    EdgeNotFound,
    InvalidIndex,
    NodeIsNull,
    FileRead,
    Parse,
    CycleDetected,
    UnweightedGraph,
    WeightedGraph,
}

impl GraphError {
    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NodeNotFound(_) => ErrorKind::NodeNotFound,
            Self::EdgeNotFound(_) => ErrorKind::EdgeNotFound,
            Self::InvalidIndex(_) => ErrorKind::InvalidIndex,
            Self::NodeIsNull(_) => ErrorKind::NodeIsNull,
            Self::FileRead(_) => ErrorKind::FileRead,
            Self::Parse(_) => ErrorKind::Parse,
            Self::CycleDetected(_) => ErrorKind::CycleDetected,
            Self::UnweightedGraph(_) => ErrorKind::UnweightedGraph,
            Self::WeightedGraph(_) => ErrorKind::WeightedGraph,
        }
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Convenience result type for adjgraph operations.
pub type GraphResult<T> = Result<T, GraphError>;
