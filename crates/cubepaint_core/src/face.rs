use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Cell, Color, ParseCellError};

/// Face of the cube.
///
/// Faces are ordered `U D F B L R`, which is also the order in which the
/// assembly sequence visits them.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    strum::Display,
)]
pub enum Face {
    /// Up (top) face
    U,
    /// Down (bottom) face
    D,
    /// Front face
    F,
    /// Back face
    B,
    /// Left face
    L,
    /// Right face
    R,
}
impl FromStr for Face {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "U" => Ok(Face::U),
            "D" => Ok(Face::D),
            "F" => Ok(Face::F),
            "B" => Ok(Face::B),
            "L" => Ok(Face::L),
            "R" => Ok(Face::R),
            _ => Err(format!("unknown face {s:?} (expected one of U D F B L R)")),
        }
    }
}
impl Face {
    /// Number of faces on the cube.
    pub const COUNT: usize = 6;

    /// Returns the index of the face in canonical order.
    pub fn idx(self) -> usize {
        self as usize
    }
    /// Returns the fixed color of the center sticker of this face.
    pub fn center_color(self) -> Color {
        match self {
            Face::U => Color::White,
            Face::D => Color::Yellow,
            Face::F => Color::Green,
            Face::B => Color::Blue,
            Face::L => Color::Orange,
            Face::R => Color::Red,
        }
    }
    /// Returns an iterator over all faces in canonical order.
    pub fn iter() -> impl Iterator<Item = Self> {
        <Self as strum::IntoEnumIterator>::iter()
    }
}

/// Location of a cell within a face, as a row and column in the range `0..3`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellPos {
    row: u8,
    col: u8,
}
impl fmt::Display for CellPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
impl CellPos {
    /// Center of the face.
    pub const CENTER: Self = Self { row: 1, col: 1 };

    /// Returns the cell at the given row and column, or `None` if either is
    /// out of range.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < 3 && col < 3).then(|| Self {
            row: row as u8,
            col: col as u8,
        })
    }
    /// Returns the cell with the given row-major index, or `None` if it is out
    /// of range.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < FaceGrid::LEN).then(|| Self {
            row: (index / 3) as u8,
            col: (index % 3) as u8,
        })
    }
    /// Returns the row, from top to bottom.
    pub fn row(self) -> usize {
        self.row as usize
    }
    /// Returns the column, from left to right.
    pub fn col(self) -> usize {
        self.col as usize
    }
    /// Returns the row-major index of the cell. The center has index 4.
    pub fn index(self) -> usize {
        self.row() * 3 + self.col()
    }
    /// Returns whether this is the center of the face.
    pub fn is_center(self) -> bool {
        self == Self::CENTER
    }
    /// Returns an iterator over all cells of a face in row-major order.
    pub fn iter() -> impl Iterator<Item = Self> {
        (0..FaceGrid::LEN).filter_map(Self::from_index)
    }
}

/// Source index for each cell after a clockwise quarter turn.
///
/// Each outer cell takes the color of the cell 90 degrees counterclockwise
/// from it; the center maps to itself.
const CW_SOURCE: [usize; FaceGrid::LEN] = [6, 3, 0, 7, 4, 1, 8, 5, 2];

/// Nine cells of a single face, in row-major order.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct FaceGrid([Cell; 9]);
impl Index<CellPos> for FaceGrid {
    type Output = Cell;

    fn index(&self, pos: CellPos) -> &Cell {
        &self.0[pos.index()]
    }
}
impl IndexMut<CellPos> for FaceGrid {
    fn index_mut(&mut self, pos: CellPos) -> &mut Cell {
        &mut self.0[pos.index()]
    }
}
impl fmt::Display for FaceGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.0.chunks(3).enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}
impl FromStr for FaceGrid {
    type Err = ParseCellError;

    /// Parses nine cell symbols. Whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Unpainted; Self::LEN];
        let mut symbols = s.chars().filter(|c| !c.is_whitespace());
        for cell in &mut cells {
            let c = symbols.next().ok_or(ParseCellError(' '))?;
            *cell = Cell::from_symbol(c).ok_or(ParseCellError(c))?;
        }
        match symbols.next() {
            Some(extra) => Err(ParseCellError(extra)),
            None => Ok(Self(cells)),
        }
    }
}
impl FaceGrid {
    /// Number of cells on a face.
    pub const LEN: usize = 9;

    /// Returns a face whose center has the given color and whose other cells
    /// are unpainted.
    pub fn with_center(center: Color) -> Self {
        let mut ret = Self::default();
        ret[CellPos::CENTER] = Cell::Painted(center);
        ret
    }
    /// Returns a face with every cell painted the same color.
    pub fn uniform(color: Color) -> Self {
        Self([Cell::Painted(color); Self::LEN])
    }

    /// Returns the cells of the face in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.0
    }
    /// Returns the cell at the given row-major index, or `None` if it is out
    /// of range.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.0.get(index).copied()
    }
    /// Returns the center cell.
    pub fn center(&self) -> Cell {
        self[CellPos::CENTER]
    }

    /// Rotates the stickers of the face a quarter turn clockwise. The center
    /// does not move.
    pub fn rotate_cw(&mut self) {
        let old = self.0;
        for (new, &src) in self.0.iter_mut().zip(&CW_SOURCE) {
            *new = old[src];
        }
    }

    /// Returns whether all nine cells are painted the same color.
    pub fn is_uniform(&self) -> bool {
        let first = self.0[0];
        !first.is_unpainted() && self.0.iter().all(|&c| c == first)
    }
    /// Returns the number of cells other than the center that are unpainted.
    pub fn unpainted_count(&self) -> usize {
        CellPos::iter()
            .filter(|pos| !pos.is_center() && self[*pos].is_unpainted())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cell_pos_bounds() {
        assert_eq!(CellPos::new(1, 1), Some(CellPos::CENTER));
        assert_eq!(CellPos::new(2, 0).map(CellPos::index), Some(6));
        assert_eq!(CellPos::new(3, 0), None);
        assert_eq!(CellPos::new(0, 3), None);
        assert_eq!(CellPos::from_index(9), None);
        assert_eq!(CellPos::iter().count(), 9);
    }

    #[test]
    fn test_face_grid_display_roundtrip() {
        let s = "WYG B-O RRW";
        let grid: FaceGrid = s.parse().unwrap();
        assert_eq!(grid.to_string(), s);
        assert_eq!(grid.center(), Cell::Unpainted);
        assert!("WYGB-ORR".parse::<FaceGrid>().is_err());
        assert!("WYGB-ORRWW".parse::<FaceGrid>().is_err());
    }

    #[test]
    fn test_rotate_cw_layout() {
        // 0 1 2      6 3 0
        // 3 4 5  ->  7 4 1
        // 6 7 8      8 5 2
        let mut grid: FaceGrid = "WYG BOR WYG".parse().unwrap();
        grid.rotate_cw();
        assert_eq!(grid.to_string(), "WBW YOY GRG");
    }

    #[test]
    fn test_uniform() {
        assert!(FaceGrid::uniform(Color::Red).is_uniform());
        assert!(!FaceGrid::with_center(Color::Red).is_uniform());
        assert!(!FaceGrid::default().is_uniform());
        assert_eq!(FaceGrid::with_center(Color::Red).unpainted_count(), 8);
    }
}
