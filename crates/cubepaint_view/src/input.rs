use cubepaint_core::{CellPos, Color, Face};

/// Discrete input delivered by a frontend to a [`crate::PaintSession`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Paint a cell with the current brush color. Ignored for centers.
    Click {
        /// Face containing the cell.
        face: Face,
        /// Cell that was clicked.
        pos: CellPos,
    },
    /// Paint a cell with a specific color. Ignored for centers.
    Paint {
        /// Face containing the cell.
        face: Face,
        /// Cell to paint.
        pos: CellPos,
        /// Color to paint the cell.
        color: Color,
    },
    /// Select the brush color.
    SetBrush(Color),
    /// Rotate the stickers of a face clockwise.
    RotateFace(Face),
    /// Apply a move by its tag.
    Move(String),
    /// Paint every cell its face's center color.
    ResetSolved,
    /// Restore the state saved when the assembly animation last started.
    RestoreSnapshot,
}
