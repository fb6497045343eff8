use cubepaint_core::{CellPos, Color, Cube, Face};
use eyre::Result;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Options for painting the cube before running a command.
#[derive(Debug, Default, clap::Args)]
pub(crate) struct PaintArgs {
    /// Paint a whole face, such as `U=WGW-WOWRW`. The center may be written
    /// as `-` or as the face's fixed center color. Can be repeated.
    #[arg(short, long = "face", value_name = "FACE=CELLS", value_parser = parse_face_arg)]
    pub faces: Vec<(Face, String)>,

    /// Fill every unpainted cell with a random color.
    #[arg(long)]
    pub random: bool,
}

fn parse_face_arg(s: &str) -> Result<(Face, String), String> {
    let (face, cells) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FACE=CELLS but got {s:?}"))?;
    Ok((face.parse()?, cells.to_owned()))
}

impl PaintArgs {
    /// Paints `cube` according to the options.
    pub fn apply(&self, cube: &mut Cube) -> Result<()> {
        for (face, cells) in &self.faces {
            cube.set_face_str(*face, cells)?;
        }
        if self.random {
            let painted = paint_random(cube, &mut rand::rng());
            log::info!("Painted {painted} cells with random colors");
        }
        Ok(())
    }
}

/// Paints every unpainted non-center cell with a random color. Returns the
/// number of cells painted.
fn paint_random(cube: &mut Cube, rng: &mut impl Rng) -> usize {
    let colors: Vec<Color> = Color::iter().collect();
    let mut painted = 0;
    for face in Face::iter() {
        for pos in CellPos::iter() {
            if !cube.get(face, pos).is_unpainted() || pos.is_center() {
                continue;
            }
            if let Some(&color) = colors.choose(rng) {
                painted += usize::from(cube.paint(face, pos, color));
            }
        }
    }
    painted
}
