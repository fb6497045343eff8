use std::collections::HashMap;

use cubepaint_core::Face;

/// Highlight strength of recently changed cells, keyed by face and row-major
/// cell index.
///
/// Strengths are in the range `0.0..=1.0`. Cells with no highlight are not
/// stored.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FlashMap {
    cells: HashMap<(Face, usize), f32>,
}
impl FlashMap {
    /// Highlights a cell at full strength.
    pub fn flash(&mut self, face: Face, index: usize) {
        self.cells.insert((face, index), 1.0);
    }
    /// Fades every highlight by `step` and drops the ones that reach zero.
    ///
    /// Returns whether any highlight is still visible.
    pub fn decay(&mut self, step: f32) -> bool {
        self.cells.retain(|_, strength| {
            *strength = (*strength - step).max(0.0);
            *strength > 0.0
        });
        !self.cells.is_empty()
    }
    /// Returns the highlight strength of a cell.
    pub fn strength(&self, face: Face, index: usize) -> f32 {
        self.cells.get(&(face, index)).copied().unwrap_or(0.0)
    }
    /// Returns the number of highlighted cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    /// Returns whether no cells are highlighted.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    /// Removes all highlights.
    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flash_decays_to_nothing() {
        let mut flash = FlashMap::default();
        assert_eq!(flash.strength(Face::F, 3), 0.0);

        flash.flash(Face::F, 3);
        assert_eq!(flash.strength(Face::F, 3), 1.0);
        assert_eq!(flash.strength(Face::F, 4), 0.0);
        assert_eq!(flash.strength(Face::B, 3), 0.0);

        assert!(flash.decay(0.25));
        assert_eq!(flash.strength(Face::F, 3), 0.75);

        assert!(flash.decay(0.25));
        assert!(flash.decay(0.25));
        assert!(!flash.decay(0.25));
        assert!(flash.is_empty());
        assert_eq!(flash.strength(Face::F, 3), 0.0);
    }

    #[test]
    fn test_reflash_resets_strength() {
        let mut flash = FlashMap::default();
        flash.flash(Face::L, 0);
        flash.decay(0.5);
        flash.flash(Face::L, 8);
        flash.decay(0.5);
        assert_eq!(flash.len(), 1);
        assert_eq!(flash.strength(Face::L, 8), 0.5);

        flash.flash(Face::L, 8);
        assert_eq!(flash.strength(Face::L, 8), 1.0);
        flash.clear();
        assert!(flash.is_empty());
    }
}
