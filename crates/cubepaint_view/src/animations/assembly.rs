use std::collections::VecDeque;

use cubepaint_core::{CellPos, Color, Cube, Face};

/// Single step of the assembly animation: paint one cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AssemblyTask {
    /// Face containing the cell.
    pub face: Face,
    /// Cell to paint. Never the center.
    pub pos: CellPos,
    /// Color to paint the cell.
    pub color: Color,
}
impl AssemblyTask {
    /// Applies the task to a cube.
    pub fn apply(self, cube: &mut Cube) {
        cube.paint(self.face, self.pos, self.color);
    }
}

/// Queue of cell assignments that take the cube to its solved state one cell
/// at a time.
///
/// Applying every task has the same result as [`Cube::solve()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblySequence {
    tasks: VecDeque<AssemblyTask>,
}
impl Default for AssemblySequence {
    fn default() -> Self {
        Self::new()
    }
}
impl AssemblySequence {
    /// Returns the full sequence: every non-center cell of every face, in
    /// canonical face order and row-major cell order, set to its face's center
    /// color.
    pub fn new() -> Self {
        let tasks = Face::iter()
            .flat_map(|face| {
                CellPos::iter()
                    .filter(|pos| !pos.is_center())
                    .map(move |pos| AssemblyTask {
                        face,
                        pos,
                        color: face.center_color(),
                    })
            })
            .collect();
        Self { tasks }
    }

    /// Removes and returns the next task, or `None` if the sequence is
    /// finished.
    pub fn next_task(&mut self) -> Option<AssemblyTask> {
        self.tasks.pop_front()
    }
    /// Returns the next task without removing it.
    pub fn peek(&self) -> Option<&AssemblyTask> {
        self.tasks.front()
    }
    /// Returns the number of tasks left.
    pub fn remaining(&self) -> usize {
        self.tasks.len()
    }
    /// Returns whether every task has been applied.
    pub fn is_finished(&self) -> bool {
        self.tasks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_sequence_order() {
        let mut seq = AssemblySequence::new();
        assert_eq!(seq.remaining(), 48);
        assert_eq!(
            seq.next_task(),
            Some(AssemblyTask {
                face: Face::U,
                pos: CellPos::new(0, 0).unwrap(),
                color: Color::White,
            }),
        );
        let indices: Vec<usize> = std::iter::from_fn(|| seq.next_task())
            .take(7)
            .map(|task| task.pos.index())
            .collect();
        assert_eq!(indices, [1, 2, 3, 5, 6, 7, 8]);
        assert_eq!(seq.peek().map(|task| task.face), Some(Face::D));
    }

    #[test]
    fn test_sequence_skips_centers() {
        let seq = AssemblySequence::new();
        assert!(seq.tasks.iter().all(|task| !task.pos.is_center()));
    }

    #[test]
    fn test_sequence_matches_solve() {
        let mut cube = Cube::new();
        let mut seq = AssemblySequence::new();
        while let Some(task) = seq.next_task() {
            assert!(!cube.is_solved());
            task.apply(&mut cube);
        }
        assert!(seq.is_finished());
        assert_eq!(cube, Cube::solved());
    }
}
