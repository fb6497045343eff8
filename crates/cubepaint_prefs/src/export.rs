use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Layout and destination of exported animations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExportPreferences {
    /// Directory to save into. Defaults to the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    /// File name of the exported animation.
    pub filename: String,

    /// Side length of a sticker, in pixels.
    pub sticker_size: u32,
    /// Width of the outline around each sticker, in pixels.
    pub border_width: u32,
    /// Width of the highlight outline, in pixels.
    pub highlight_width: u32,
    /// Empty space around the cube net, in pixels.
    pub margin: u32,
}
impl ExportPreferences {
    /// Largest allowed sticker size, in pixels.
    pub const MAX_STICKER_SIZE: u32 = 1024;
    /// Largest allowed margin, in pixels.
    pub const MAX_MARGIN: u32 = 4096;

    /// Clamps sizes into their valid ranges. Outline widths are limited to
    /// half a sticker.
    pub fn clamp(&mut self) {
        let sticker_size = self.sticker_size.clamp(1, Self::MAX_STICKER_SIZE);
        let max_outline = sticker_size.div_ceil(2);
        let clamped = Self {
            sticker_size,
            border_width: self.border_width.min(max_outline),
            highlight_width: self.highlight_width.min(max_outline),
            margin: self.margin.min(Self::MAX_MARGIN),
            ..self.clone()
        };
        if clamped != *self {
            log::warn!("export sizes are out of range; clamping them");
            *self = clamped;
        }
    }

    /// Returns the path to export to.
    pub fn path(&self) -> PathBuf {
        match &self.dir {
            Some(dir) => dir.join(&self.filename),
            None => PathBuf::from(&self.filename),
        }
    }
}
