use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use eyre::{Result, bail};
use image::codecs::gif::{GifEncoder, Repeat};
use image::{Delay, Frame};

use crate::{NetRenderer, Snapshot};

/// Renders recorded frames and saves them as a looping animated GIF, showing
/// each frame for `delay`.
pub fn export_gif(
    frames: &[Snapshot],
    renderer: &NetRenderer,
    delay: Duration,
    path: &Path,
) -> Result<()> {
    if frames.is_empty() {
        bail!("animation not recorded");
    }

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    write_gif(frames, renderer, delay, &mut writer)?;

    log::info!("Saved {} frames to {}", frames.len(), path.display());
    Ok(())
}

/// Encodes frames as a looping GIF into `writer` and flushes it.
fn write_gif(
    frames: &[Snapshot],
    renderer: &NetRenderer,
    delay: Duration,
    mut writer: impl Write,
) -> Result<()> {
    let mut encoder = GifEncoder::new(&mut writer);
    encoder.set_repeat(Repeat::Infinite)?;
    let delay = Delay::from_saturating_duration(delay);
    for snapshot in frames {
        encoder.encode_frame(Frame::from_parts(renderer.render(snapshot), 0, 0, delay))?;
    }
    // The encoder writes the trailer when dropped.
    drop(encoder);
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::BufReader;

    use cubepaint_core::Cube;
    use cubepaint_prefs::Preferences;
    use image::AnimationDecoder;
    use image::codecs::gif::GifDecoder;

    use super::*;
    use crate::{FlashMap, PaintSession, TickOutcome};

    /// Writer that accepts data but fails to flush it.
    struct UnflushableWriter(Vec<u8>);
    impl Write for UnflushableWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.write(buf)
        }
        fn flush(&mut self) -> std::io::Result<()> {
            Err(std::io::Error::other("disk full"))
        }
    }

    fn small_renderer() -> NetRenderer {
        let mut prefs = Preferences::default();
        prefs.export.sticker_size = 4;
        prefs.export.margin = 2;
        NetRenderer::from_prefs(&prefs)
    }

    #[test]
    fn test_export_without_frames_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.gif");
        let result = export_gif(&[], &small_renderer(), Duration::from_millis(300), &path);
        assert_eq!(result.unwrap_err().to_string(), "animation not recorded");
        assert!(!path.exists());
    }

    #[test]
    fn test_export_assembly() {
        let prefs = Preferences::default();
        let mut cube = Cube::solved();
        cube.apply_move_str("U").unwrap();
        let mut session = PaintSession::with_cube(cube, prefs.animation.clone());
        session.start_assembly().unwrap();
        while session.tick() != TickOutcome::Finished {}

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("assembly.gif");
        let renderer = small_renderer();
        export_gif(
            session.frames(),
            &renderer,
            prefs.animation.tick_interval(),
            &path,
        )
        .unwrap();

        let decoder = GifDecoder::new(BufReader::new(File::open(&path).unwrap())).unwrap();
        let frames = decoder.into_frames().collect_frames().unwrap();
        assert_eq!(frames.len(), 48);
        assert_eq!(frames[0].buffer().dimensions(), renderer.size());
        assert_eq!(frames[0].delay().numer_denom_ms(), (300, 1));
    }

    #[test]
    fn test_flush_error_is_reported() {
        let frames = [Snapshot {
            cube: Cube::solved(),
            flash: FlashMap::default(),
        }];
        let delay = Duration::from_millis(300);

        let mut data = vec![];
        write_gif(&frames, &small_renderer(), delay, &mut data).unwrap();
        assert_eq!(data.last(), Some(&0x3B));

        let result = write_gif(&frames, &small_renderer(), delay, UnflushableWriter(vec![]));
        assert!(result.is_err());
    }
}
