//! Move tags.
//!
//! Only the top face can be twisted: `U` is a clockwise quarter turn and `U'`
//! is a counterclockwise quarter turn (three clockwise quarter turns).

use std::fmt;
use std::str::FromStr;

use crate::Face;

/// Supported move.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Move {
    /// Clockwise quarter turn of the top face.
    U,
    /// Counterclockwise quarter turn of the top face.
    UPrime,
}
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::U => write!(f, "U"),
            Move::UPrime => write!(f, "U'"),
        }
    }
}
impl FromStr for Move {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "U" => Ok(Move::U),
            "U'" => Ok(Move::UPrime),
            _ => Err(MoveError::Unsupported(s.to_owned())),
        }
    }
}
impl Move {
    /// Returns the face twisted by the move.
    pub fn face(self) -> Face {
        Face::U
    }
    /// Returns the number of clockwise quarter turns that make up the move.
    pub fn quarter_turns(self) -> usize {
        match self {
            Move::U => 1,
            Move::UPrime => 3,
        }
    }
    /// Returns the inverse move.
    #[must_use]
    pub fn rev(self) -> Self {
        match self {
            Move::U => Move::UPrime,
            Move::UPrime => Move::U,
        }
    }
}

/// Error produced when applying a move tag.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MoveError {
    /// Move tag that is not `U` or `U'`
    #[error("move {0:?} is not supported")]
    Unsupported(String),
}

/// Parses a whitespace-separated sequence of move tags.
///
/// Fails on the first unsupported tag.
pub fn parse_moves(s: &str) -> Result<Vec<Move>, MoveError> {
    s.split_whitespace().map(str::parse).collect()
}
