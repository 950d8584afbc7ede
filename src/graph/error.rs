use crate::graph::VertexId;
use thiserror::Error;

/// Errors raised by graph mutations and queries.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The handle was not created by this graph.
    #[error("{0} not found")]
    VertexNotFound(VertexId),

    /// A shortest-path query found no route.
    #[error("no path exists from {start} to {end}")]
    NoPathExists { start: VertexId, end: VertexId },
}

pub type GraphResult<T> = Result<T, GraphError>;
