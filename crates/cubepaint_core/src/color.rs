use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Color of a painted sticker.
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
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// White (`W`)
    White,
    /// Yellow (`Y`)
    Yellow,
    /// Green (`G`)
    Green,
    /// Blue (`B`)
    Blue,
    /// Orange (`O`)
    Orange,
    /// Red (`R`)
    Red,
}
impl Color {
    /// Returns the one-letter symbol for the color.
    pub fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Orange => 'O',
            Color::Red => 'R',
        }
    }
    /// Returns the color with the given one-letter symbol (case-insensitive).
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'W' => Some(Color::White),
            'Y' => Some(Color::Yellow),
            'G' => Some(Color::Green),
            'B' => Some(Color::Blue),
            'O' => Some(Color::Orange),
            'R' => Some(Color::Red),
            _ => None,
        }
    }
    /// Returns an iterator over all six colors.
    pub fn iter() -> impl Iterator<Item = Self> {
        <Self as strum::IntoEnumIterator>::iter()
    }
}

/// Contents of a single sticker cell.
#[derive(Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Cell that has not been assigned a color yet.
    #[default]
    Unpainted,
    /// Cell painted with a color.
    Painted(Color),
}
impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        Cell::Painted(color)
    }
}
impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
impl FromStr for Cell {
    type Err = ParseCellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Cell::from_symbol(c).ok_or(ParseCellError(c)),
            _ => Err(ParseCellError(s.chars().next().unwrap_or(' '))),
        }
    }
}
impl Cell {
    /// Symbol used for unpainted cells.
    pub const UNPAINTED_SYMBOL: char = '-';

    /// Returns the one-letter symbol for the cell.
    pub fn symbol(self) -> char {
        match self {
            Cell::Unpainted => Self::UNPAINTED_SYMBOL,
            Cell::Painted(color) => color.symbol(),
        }
    }
    /// Returns the cell with the given symbol, which is either a color letter
    /// or [`Cell::UNPAINTED_SYMBOL`].
    pub fn from_symbol(c: char) -> Option<Self> {
        if c == Self::UNPAINTED_SYMBOL {
            Some(Cell::Unpainted)
        } else {
            Color::from_symbol(c).map(Cell::Painted)
        }
    }
    /// Returns the color of the cell, or `None` if it is unpainted.
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Unpainted => None,
            Cell::Painted(color) => Some(color),
        }
    }
    /// Returns whether the cell has not been painted.
    pub fn is_unpainted(self) -> bool {
        self == Cell::Unpainted
    }
}

/// Error produced when parsing a cell symbol.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
#[error("invalid sticker symbol {0:?} (expected one of W Y G B O R -)")]
pub struct ParseCellError(pub char);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols_are_distinct() {
        let mut symbols: Vec<char> = Color::iter().map(Color::symbol).collect();
        symbols.push(Cell::UNPAINTED_SYMBOL);
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), 7);
    }

    #[test]
    fn test_parse_cell() {
        assert_eq!("-".parse::<Cell>(), Ok(Cell::Unpainted));
        assert_eq!("o".parse::<Cell>(), Ok(Cell::Painted(Color::Orange)));
        assert_eq!("X".parse::<Cell>(), Err(ParseCellError('X')));
        assert!("WY".parse::<Cell>().is_err());
    }
}
