use cubepaint_core::{Cell, Color, Rgb};
use serde::{Deserialize, Serialize};

/// Colors used when drawing the cube.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ColorPreferences {
    /// Fill for white stickers.
    pub white: Rgb,
    /// Fill for yellow stickers.
    pub yellow: Rgb,
    /// Fill for green stickers.
    pub green: Rgb,
    /// Fill for blue stickers.
    pub blue: Rgb,
    /// Fill for orange stickers.
    pub orange: Rgb,
    /// Fill for red stickers.
    pub red: Rgb,

    /// Fill for cells that have not been painted.
    pub unpainted: Rgb,
    /// Outline around each sticker.
    pub border: Rgb,
    /// Outline flashed around recently changed stickers.
    pub highlight: Rgb,
    /// Image background.
    pub background: Rgb,
}
impl ColorPreferences {
    /// Returns the display color for a sticker color.
    pub fn color(&self, color: Color) -> Rgb {
        match color {
            Color::White => self.white,
            Color::Yellow => self.yellow,
            Color::Green => self.green,
            Color::Blue => self.blue,
            Color::Orange => self.orange,
            Color::Red => self.red,
        }
    }
    /// Returns the fill color for a cell.
    pub fn sticker(&self, cell: Cell) -> Rgb {
        match cell {
            Cell::Unpainted => self.unpainted,
            Cell::Painted(color) => self.color(color),
        }
    }
}
