use thiserror::Error;

use crate::cell::Coordinate;

/// Which end of a search or maze run a [GridError::MissingDestination] refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Destination {
    Start,
    End,
}

impl std::fmt::Display for Destination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Destination::Start => write!(f, "start"),
            Destination::End => write!(f, "end"),
        }
    }
}

/// Input errors surfaced by cell construction, grid construction and algorithm dispatch.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("coordinates must be finite, non-negative integers, got row: {row}, col: {col}")]
    InvalidCoordinates { row: f64, col: f64 },

    #[error("cell at {row}-{col} can't be start and finish at the same time")]
    ConflictingRole { row: usize, col: usize },

    #[error("no {which} cell at {coordinate} in the grid")]
    MissingDestination {
        which: Destination,
        coordinate: Coordinate,
    },

    #[error("unknown algorithm: {0:?}")]
    UnknownAlgorithm(String),

    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("cell at row {row}, column {col} claims to be at {found}")]
    MisplacedCell {
        row: usize,
        col: usize,
        found: Coordinate,
    },
}

pub type Result<T> = std::result::Result<T, GridError>;
