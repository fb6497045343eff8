use cubepaint_core::{CellPos, Face, Rgb};
use cubepaint_prefs::{ColorPreferences, ExportPreferences, Preferences};
use image::{Rgba, RgbaImage};
use itertools::iproduct;

use crate::Snapshot;

/// Width of the cube net, in faces.
const NET_WIDTH: u32 = 4;
/// Height of the cube net, in faces.
const NET_HEIGHT: u32 = 3;

/// Returns the column and row of a face in the unfolded cube net.
///
/// ```text
///     U
///   L F R B
///     D
/// ```
fn net_position(face: Face) -> (u32, u32) {
    match face {
        Face::U => (1, 0),
        Face::L => (0, 1),
        Face::F => (1, 1),
        Face::R => (2, 1),
        Face::B => (3, 1),
        Face::D => (1, 2),
    }
}

/// Rasterizer that draws a [`Snapshot`] as an unfolded cube net.
#[derive(Debug, Clone)]
pub struct NetRenderer {
    colors: ColorPreferences,
    sticker_size: u32,
    border_width: u32,
    highlight_width: u32,
    margin: u32,
}
impl NetRenderer {
    /// Constructs a renderer from color and layout preferences. Sizes are
    /// clamped into their valid ranges.
    pub fn new(colors: &ColorPreferences, layout: &ExportPreferences) -> Self {
        let mut layout = layout.clone();
        layout.clamp();
        Self {
            colors: colors.clone(),
            sticker_size: layout.sticker_size,
            border_width: layout.border_width,
            highlight_width: layout.highlight_width,
            margin: layout.margin,
        }
    }
    /// Constructs a renderer from user preferences.
    pub fn from_prefs(prefs: &Preferences) -> Self {
        Self::new(&prefs.colors, &prefs.export)
    }

    /// Returns the width and height of rendered images, in pixels.
    pub fn size(&self) -> (u32, u32) {
        let face_size = self.sticker_size * 3;
        (
            NET_WIDTH * face_size + 2 * self.margin,
            NET_HEIGHT * face_size + 2 * self.margin,
        )
    }

    /// Returns the pixel coordinates of the top-left corner of a sticker.
    pub fn sticker_origin(&self, face: Face, pos: CellPos) -> (u32, u32) {
        let (net_x, net_y) = net_position(face);
        let face_size = self.sticker_size * 3;
        (
            self.margin + net_x * face_size + pos.col() as u32 * self.sticker_size,
            self.margin + net_y * face_size + pos.row() as u32 * self.sticker_size,
        )
    }

    /// Draws a snapshot.
    pub fn render(&self, snapshot: &Snapshot) -> RgbaImage {
        let (width, height) = self.size();
        let mut img = RgbaImage::from_pixel(width, height, Rgba(self.colors.background.to_rgba()));
        for (face, grid) in snapshot.cube.faces() {
            for pos in CellPos::iter() {
                let fill = self.colors.sticker(grid[pos]);
                let flash = snapshot.flash.strength(face, pos.index());
                self.draw_sticker(&mut img, self.sticker_origin(face, pos), fill, flash);
            }
        }
        img
    }

    fn draw_sticker(&self, img: &mut RgbaImage, (x0, y0): (u32, u32), fill: Rgb, flash: f32) {
        let size = self.sticker_size;
        for (dx, dy) in iproduct!(0..size, 0..size) {
            // Distance to the nearest edge of the sticker.
            let edge_dist = dx.min(dy).min(size - 1 - dx).min(size - 1 - dy);
            let mut color = if edge_dist < self.border_width {
                self.colors.border
            } else {
                fill
            };
            if flash > 0.0 && edge_dist < self.highlight_width {
                color = color.blend(self.colors.highlight, flash);
            }
            img.put_pixel(x0 + dx, y0 + dy, Rgba(color.to_rgba()));
        }
    }
}

#[cfg(test)]
mod tests {
    use cubepaint_core::{Color, Cube};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::FlashMap;

    fn renderer() -> NetRenderer {
        let mut prefs = Preferences::default();
        prefs.export.sticker_size = 10;
        prefs.export.border_width = 1;
        prefs.export.highlight_width = 2;
        prefs.export.margin = 5;
        prefs.colors.highlight = Rgb::WHITE;
        prefs.colors.border = Rgb::BLACK;
        NetRenderer::from_prefs(&prefs)
    }

    fn pixel(img: &RgbaImage, x: u32, y: u32) -> Rgb {
        let [r, g, b, _] = img.get_pixel(x, y).0;
        Rgb::new(r, g, b)
    }

    #[test]
    fn test_size() {
        assert_eq!(renderer().size(), (4 * 30 + 10, 3 * 30 + 10));
        let img = renderer().render(&Snapshot {
            cube: Cube::new(),
            flash: FlashMap::default(),
        });
        assert_eq!(img.dimensions(), renderer().size());
    }

    #[test]
    fn test_huge_sizes_are_clamped() {
        let mut prefs = Preferences::default();
        prefs.export.sticker_size = u32::MAX;
        prefs.export.margin = 0;
        let face_size = 3 * ExportPreferences::MAX_STICKER_SIZE;
        assert_eq!(
            NetRenderer::from_prefs(&prefs).size(),
            (4 * face_size, 3 * face_size),
        );
    }

    #[test]
    fn test_sticker_colors() {
        let r = renderer();
        let prefs = Preferences::default();
        let mut cube = Cube::new();
        let corner = CellPos::new(0, 0).unwrap();
        cube.paint(Face::B, corner, Color::Orange);
        let img = r.render(&Snapshot {
            cube,
            flash: FlashMap::default(),
        });

        // Background in the empty corner of the net.
        assert_eq!(pixel(&img, 0, 0), prefs.colors.background);

        let (x, y) = r.sticker_origin(Face::B, corner);
        assert_eq!((x, y), (5 + 90, 5 + 30));
        assert_eq!(pixel(&img, x, y), Rgb::BLACK);
        assert_eq!(pixel(&img, x + 5, y + 5), prefs.colors.orange);

        let (x, y) = r.sticker_origin(Face::F, CellPos::CENTER);
        assert_eq!(pixel(&img, x + 5, y + 5), prefs.colors.green);
        let (x, y) = r.sticker_origin(Face::D, CellPos::new(2, 2).unwrap());
        assert_eq!(pixel(&img, x + 5, y + 5), prefs.colors.unpainted);
        assert_eq!(pixel(&img, x + 9, y + 9), Rgb::BLACK);
    }

    #[test]
    fn test_flash_outline() {
        let r = renderer();
        let prefs = Preferences::default();
        let cube = Cube::solved();
        let mut flash = FlashMap::default();
        flash.flash(Face::U, 0);
        flash.decay(0.5);
        let img = r.render(&Snapshot { cube, flash });

        let (x, y) = r.sticker_origin(Face::U, CellPos::new(0, 0).unwrap());
        // Border is blended halfway to the highlight color.
        assert_eq!(pixel(&img, x, y), Rgb::new(128, 128, 128));
        // Inner edge of the highlight blends with the fill.
        assert_eq!(pixel(&img, x + 1, y + 5), prefs.colors.white);
        assert_eq!(pixel(&img, x + 5, y + 5), prefs.colors.white);

        // Neighboring sticker is not highlighted.
        let (x, y) = r.sticker_origin(Face::U, CellPos::new(0, 1).unwrap());
        assert_eq!(pixel(&img, x, y), Rgb::BLACK);
    }
}
