//! Sticker state model for a hand-painted 3x3x3 Rubik's Cube.
//!
//! A [`Cube`] is six [`FaceGrid`]s of nine [`Cell`]s each. Every face has a
//! fixed center color; the other eight cells start out [`Cell::Unpainted`] and
//! are painted freely by the user. No legality constraint is enforced.
//!
//! The only supported twist is the top face ([`Move::U`] and its inverse),
//! and it only permutes the stickers of the top face itself.

mod color;
mod cube;
mod face;
mod notation;
mod rgb;

pub use color::{Cell, Color, ParseCellError};
pub use cube::{Cube, ParseCubeError};
pub use face::{CellPos, Face, FaceGrid};
pub use notation::{Move, MoveError, parse_moves};
pub use rgb::Rgb;
