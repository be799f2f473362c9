//! Error type shared by graph loading and route queries.

use thiserror::Error;

use super::coordinate::Coordinate;

/// Convenient result alias for the router library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// The graph description disagrees with its declared counts, holds an
    /// unparsable token, or references a vertex index out of range.
    /// `line` is 1-based, or 0 when the problem is not tied to a line.
    #[error("malformed graph description (line {line}): {message}")]
    MalformedInput { line: usize, message: String },

    /// A query needed at least one vertex and the graph has none.
    #[error("graph has no vertices")]
    EmptyGraph,

    /// A route endpoint is not part of the graph's adjacency.
    #[error("point {point} is not a connected vertex of the graph")]
    UnknownPoint { point: Coordinate },

    /// Both endpoints exist but lie in different components.
    #[error("no route between {start} and {end}: they are not connected")]
    Unreachable { start: Coordinate, end: Coordinate },

    /// Start and end are the same point.
    #[error("start and end are both {point}; no route is needed")]
    TrivialRoute { point: Coordinate },

    /// The search finished without linking two points that passed the
    /// connectivity check. This signals a broken invariant.
    #[error("search could not connect {start} to {end}")]
    NoPath { start: Coordinate, end: Coordinate },

    /// The shared router was queried before [`init_router`](crate::init_router).
    #[error("router not initialized; try to initialize it first")]
    RouterNotInitialized,

    /// [`init_router`](crate::init_router) was called twice.
    #[error("router already initialized; use reload_router to replace it")]
    RouterAlreadyInitialized,

    /// Wrapper for IO errors while reading a graph description.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn malformed(line: usize, message: impl Into<String>) -> Self {
        Error::MalformedInput {
            line,
            message: message.into(),
        }
    }
}
