//! Error types. An unreachable goal is not an error: searches report it as `Ok(None)`.

use crate::coord::Coord;
use core::fmt;
use thiserror::Error;

/// Which of the two search endpoints a [PathError] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::End => write!(f, "end"),
        }
    }
}

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointFault {
    #[error("not set")]
    Missing,
    #[error("{0} is out of bounds")]
    OutOfBounds(Coord),
    #[error("{0} is a wall")]
    Wall(Coord),
}

#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PathError {
    /// A search precondition failed: an endpoint is unset, outside the grid or on a wall.
    #[error("invalid {endpoint} endpoint: {reason}")]
    InvalidEndpoints {
        endpoint: Endpoint,
        reason: EndpointFault,
    },
}

pub type Result<T> = std::result::Result<T, PathError>;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseGridError {
    #[error("grid text contains no rows")]
    Empty,
    #[error("row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
    #[error("unknown cell {ch:?} at ({row}, {col})")]
    UnknownCell { row: usize, col: usize, ch: char },
    #[error("marker {marker:?} appears at both {first} and {second}")]
    DuplicateMarker {
        marker: char,
        first: Coord,
        second: Coord,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        let err = PathError::InvalidEndpoints {
            endpoint: Endpoint::End,
            reason: EndpointFault::Wall(Coord::new(2, 3)),
        };
        assert_eq!(err.to_string(), "invalid end endpoint: (2, 3) is a wall");
        let err = PathError::InvalidEndpoints {
            endpoint: Endpoint::Start,
            reason: EndpointFault::Missing,
        };
        assert_eq!(err.to_string(), "invalid start endpoint: not set");
    }
}
