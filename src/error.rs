use core::fmt;
use grid_util::point::Point;

/// Which end of a search an [Error::InvalidEndpoint] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::Goal => write!(f, "goal"),
        }
    }
}

/// Why an endpoint was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointReason {
    OutOfBounds,
    Blocked,
}

impl fmt::Display for EndpointReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EndpointReason::OutOfBounds => write!(f, "is outside the grid"),
            EndpointReason::Blocked => write!(f, "is a blocked cell"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A raw grid value does not correspond to any [NodeType](crate::NodeType).
    #[error("cell ({x}, {y}) holds {value}, which is not a known node type")]
    MapFormat { x: usize, y: usize, value: String },

    /// A row is shorter than the widest row and the graph was built with
    /// [RowPolicy::Strict](crate::RowPolicy::Strict).
    #[error("row {row} has {len} cells but the grid is {width} wide")]
    RaggedRow { row: usize, len: usize, width: usize },

    #[error("{which} {position} {reason}")]
    InvalidEndpoint {
        which: Endpoint,
        position: Point,
        reason: EndpointReason,
    },

    #[error("priority queue is empty")]
    EmptyQueue,

    #[error("search is already complete")]
    SearchAlreadyComplete,

    #[error("search has not been initialized with a start and goal")]
    NotInitialized,
}

pub type Result<T> = std::result::Result<T, Error>;
