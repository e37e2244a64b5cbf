use thiserror::Error;

use crate::arena::Handle;

/// Errors that can occur while building, reading or rendering a graph.
#[derive(Error, Debug)]
pub enum GraphError {
    #[error("allocation failed for {what}")]
    AllocationFailure { what: &'static str },

    #[error("vertex {index} is out of range (expected < {bound})")]
    OutOfRange { index: usize, bound: usize },

    #[error("arena slot {} released twice", .handle.index)]
    DoubleRelease { handle: Handle },

    #[error("arena slot {} belongs to a different graph", .handle.index)]
    ForeignHandle { handle: Handle },

    #[error("failed to write graph view")]
    Io(#[from] std::io::Error),
}

pub type GraphResult<T> = Result<T, GraphError>;
