use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing of the assembly animation.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AnimationPreferences {
    /// Milliseconds between assembly steps.
    pub tick_interval_ms: u64,
    /// Amount by which a cell's highlight fades on each redraw.
    pub flash_decay: f32,
}
impl AnimationPreferences {
    /// Range of valid values for [`Self::flash_decay`]. Highlights must fade,
    /// and one redraw is enough to clear them.
    pub const FLASH_DECAY_RANGE: std::ops::RangeInclusive<f32> = 0.01..=1.0;

    /// Clamps values into their valid ranges.
    pub fn clamp(&mut self) {
        let range = Self::FLASH_DECAY_RANGE;
        let decay = if self.flash_decay.is_nan() {
            *range.end()
        } else {
            self.flash_decay.clamp(*range.start(), *range.end())
        };
        if decay != self.flash_decay {
            log::warn!("flash_decay {} is out of range; using {decay}", self.flash_decay);
            self.flash_decay = decay;
        }
    }

    /// Returns the time between assembly steps.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}
