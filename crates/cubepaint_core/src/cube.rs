use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::{Cell, CellPos, Color, Face, FaceGrid, Move, MoveError, ParseCellError, parse_moves};

/// Sticker state of a 3x3x3 cube.
///
/// Each face's center is fixed to [`Face::center_color()`]; no method changes
/// it, and deserialization rejects any other center. Other cells may hold any
/// color; no legality constraint is enforced.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(try_from = "CubeFaces")]
pub struct Cube {
    faces: [FaceGrid; Face::COUNT],
}

/// Unchecked serialized form of [`Cube`].
#[derive(Deserialize)]
struct CubeFaces {
    faces: [FaceGrid; Face::COUNT],
}
impl TryFrom<CubeFaces> for Cube {
    type Error = ParseCubeError;

    fn try_from(CubeFaces { faces }: CubeFaces) -> Result<Self, Self::Error> {
        for face in Face::iter() {
            let expected = Cell::Painted(face.center_color());
            let found = faces[face.idx()].center();
            if found != expected {
                return Err(ParseCubeError::WrongCenter {
                    face,
                    expected,
                    found,
                });
            }
        }
        Ok(Self { faces })
    }
}
impl Default for Cube {
    fn default() -> Self {
        Self::new()
    }
}
impl Index<Face> for Cube {
    type Output = FaceGrid;

    fn index(&self, face: Face) -> &FaceGrid {
        &self.faces[face.idx()]
    }
}
impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, face) in Face::iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{face}: {}", self[face])?;
        }
        Ok(())
    }
}
impl Cube {
    /// Returns a cube with fixed center colors and every other cell unpainted.
    pub fn new() -> Self {
        let mut faces = [FaceGrid::default(); Face::COUNT];
        for face in Face::iter() {
            faces[face.idx()] = FaceGrid::with_center(face.center_color());
        }
        Self { faces }
    }
    /// Returns a cube with every face painted its center color.
    pub fn solved() -> Self {
        let mut ret = Self::new();
        ret.solve();
        ret
    }

    /// Returns the cells of a face.
    pub fn face(&self, face: Face) -> &FaceGrid {
        &self[face]
    }
    /// Returns an iterator over all faces and their cells in canonical order.
    pub fn faces(&self) -> impl Iterator<Item = (Face, &FaceGrid)> {
        Face::iter().map(|face| (face, &self[face]))
    }
    /// Returns the contents of a single cell.
    pub fn get(&self, face: Face, pos: CellPos) -> Cell {
        self[face][pos]
    }
    fn face_mut(&mut self, face: Face) -> &mut FaceGrid {
        &mut self.faces[face.idx()]
    }

    /// Paints a cell. Returns `false` and leaves the cube unchanged if `pos` is
    /// the center of the face.
    pub fn paint(&mut self, face: Face, pos: CellPos, color: Color) -> bool {
        if pos.is_center() {
            return false;
        }
        self.face_mut(face)[pos] = Cell::Painted(color);
        true
    }
    /// Replaces every cell of a face, keeping the center fixed.
    ///
    /// The center symbol in `s` must be either `-` or the face's center color.
    pub fn set_face_str(&mut self, face: Face, s: &str) -> Result<(), ParseCubeError> {
        let grid: FaceGrid = s
            .parse()
            .map_err(|source| ParseCubeError::InvalidCell { face, source })?;
        let expected = Cell::Painted(face.center_color());
        match grid.center() {
            Cell::Unpainted => (),
            center if center == expected => (),
            found => {
                return Err(ParseCubeError::WrongCenter {
                    face,
                    expected,
                    found,
                });
            }
        }
        for pos in CellPos::iter().filter(|pos| !pos.is_center()) {
            self.face_mut(face)[pos] = grid[pos];
        }
        Ok(())
    }

    /// Rotates the stickers of a single face a quarter turn clockwise.
    ///
    /// Only the named face is affected; stickers on adjacent faces do not
    /// move.
    pub fn rotate_face_clockwise(&mut self, face: Face) {
        self.face_mut(face).rotate_cw();
    }

    /// Applies a move.
    pub fn apply_move(&mut self, m: Move) {
        for _ in 0..m.quarter_turns() {
            self.rotate_face_clockwise(m.face());
        }
    }
    /// Applies a move given by its tag (`U` or `U'`).
    ///
    /// Unsupported tags are logged and returned as an error; the cube is left
    /// unchanged.
    pub fn apply_move_str(&mut self, tag: &str) -> Result<(), MoveError> {
        match tag.parse() {
            Ok(m) => {
                self.apply_move(m);
                Ok(())
            }
            Err(e) => {
                log::warn!("{e}");
                Err(e)
            }
        }
    }
    /// Applies a whitespace-separated sequence of move tags.
    ///
    /// The whole sequence is parsed first, so if any tag is unsupported then
    /// the cube is left unchanged.
    pub fn apply_moves_str(&mut self, seq: &str) -> Result<usize, MoveError> {
        let moves = parse_moves(seq).inspect_err(|e| log::warn!("{e}"))?;
        for &m in &moves {
            self.apply_move(m);
        }
        Ok(moves.len())
    }

    /// Returns whether every face is painted a single color.
    ///
    /// This does not check that different faces have different colors.
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(FaceGrid::is_uniform)
    }

    /// Overwrites every cell with the center color of its face.
    ///
    /// This is a direct overwrite, not a sequence of legal moves.
    pub fn solve(&mut self) {
        for face in Face::iter() {
            *self.face_mut(face) = FaceGrid::uniform(face.center_color());
        }
    }

    /// Returns the number of non-center cells that are unpainted.
    pub fn unpainted_count(&self) -> usize {
        self.faces.iter().map(FaceGrid::unpainted_count).sum()
    }
    /// Returns whether every non-center cell has been painted.
    pub fn is_fully_painted(&self) -> bool {
        self.unpainted_count() == 0
    }

    /// Overwrites this cube with a previously saved snapshot.
    pub fn restore(&mut self, snapshot: &Cube) {
        *self = *snapshot;
    }
}

/// Error produced when painting a face from a string of symbols.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCubeError {
    /// Unknown symbol or wrong number of cells
    #[error("face {face}: {source}")]
    InvalidCell {
        /// Face being painted.
        face: Face,
        /// Underlying parse error.
        source: ParseCellError,
    },
    /// Center symbol does not match the fixed center color
    #[error("face {face}: center must be {expected} but found {found}")]
    WrongCenter {
        /// Face being painted.
        face: Face,
        /// Fixed center of the face.
        expected: Cell,
        /// Center given in the string.
        found: Cell,
    },
}
