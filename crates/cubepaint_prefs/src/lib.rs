//! User preferences.
//!
//! Preferences are stored as YAML. The user's file is layered on top of the
//! defaults in `default.yaml`, so it only needs to contain the values that
//! differ.

#[macro_use]
extern crate lazy_static;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

mod animation;
mod colors;
mod export;
pub mod paths;

pub use animation::AnimationPreferences;
pub use colors::ColorPreferences;
pub use export::ExportPreferences;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    /// Built-in default preferences.
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

/// All user preferences.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Preferences {
    /// Assembly animation timing.
    pub animation: AnimationPreferences,
    /// Colors used when drawing the cube.
    pub colors: ColorPreferences,
    /// Animated image export.
    pub export: ExportPreferences,
}
impl Default for Preferences {
    fn default() -> Self {
        DEFAULT_PREFS.clone()
    }
}
impl Preferences {
    /// Clamps values into their valid ranges.
    pub fn clamp(&mut self) {
        self.animation.clamp();
        self.export.clamp();
    }

    /// Loads preferences from `path`, or from the default preferences file if
    /// `path` is `None`. A missing file is not an error.
    ///
    /// If loading fails, then the broken file is backed up and the default
    /// preferences are returned. Out-of-range values are clamped.
    pub fn load(path: Option<&Path>) -> Self {
        let path: Option<PathBuf> = match path {
            Some(p) => Some(p.to_owned()),
            None => match paths::prefs_file() {
                Ok(p) => Some(p.to_owned()),
                Err(e) => {
                    log::warn!("Error locating user preferences: {e}");
                    None
                }
            },
        };

        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));
        if let Some(p) = &path {
            log::debug!("Loading preferences from {}", p.display());
            config = config.add_source(
                config::File::from(p.as_path())
                    .format(PREFS_FILE_FORMAT)
                    .required(false),
            );
        }

        let mut prefs = config
            .build()
            .and_then(|c| c.try_deserialize::<Preferences>())
            .unwrap_or_else(|e| {
                log::warn!("Error loading preferences: {e}");
                match path.as_deref().filter(|p| p.is_file()).map(paths::back_up) {
                    Some(Ok(dest)) => log::info!("Moved broken preferences to {}", dest.display()),
                    Some(Err(e)) => log::error!("{e:#}"),
                    None => (),
                }
                Self::default()
            });
        prefs.clamp();
        prefs
    }

    /// Saves preferences to `path`, or to the default preferences file if
    /// `path` is `None`.
    pub fn save(&self, path: Option<&Path>) -> eyre::Result<()> {
        let path = match path {
            Some(p) => p,
            None => paths::prefs_file()?,
        };
        if let Some(p) = path.parent() {
            std::fs::create_dir_all(p)?;
        }
        serde_norway::to_writer(std::fs::File::create(path)?, self)?;
        log::info!("Saved preferences to {}", path.display());
        Ok(())
    }

    /// Serializes the preferences to a YAML string.
    pub fn to_yaml(&self) -> eyre::Result<String> {
        Ok(serde_norway::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use cubepaint_core::{Cell, Color, Rgb};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_prefs() {
        let prefs = Preferences::default();
        assert_eq!(prefs.animation.tick_interval(), Duration::from_millis(300));
        assert_eq!(prefs.animation.flash_decay, 0.05);
        assert_eq!(prefs.colors.sticker(Cell::Unpainted), Rgb::new(128, 128, 128));
        assert_eq!(
            prefs.colors.sticker(Cell::Painted(Color::Orange)),
            Rgb::new(255, 140, 0),
        );
        assert_eq!(prefs.export.filename, "assembly.gif");
        assert_eq!(prefs.export.dir, None);
    }

    #[test]
    fn test_load_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let prefs = Preferences::load(Some(&dir.path().join("nonexistent.yaml")));
        assert_eq!(prefs, Preferences::default());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.yaml");
        std::fs::write(
            &path,
            "animation:\n  tick_interval_ms: 100\ncolors:\n  red: \"#c00\"\n",
        )
        .unwrap();
        let prefs = Preferences::load(Some(&path));
        assert_eq!(prefs.animation.tick_interval_ms, 100);
        assert_eq!(prefs.animation.flash_decay, 0.05);
        assert_eq!(prefs.colors.red, Rgb::new(0xcc, 0, 0));
        assert_eq!(prefs.colors.white, Rgb::WHITE);
    }

    #[test]
    fn test_load_clamps_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.yaml");
        std::fs::write(
            &path,
            "animation:\n  flash_decay: -0.5\nexport:\n  sticker_size: 4294967295\n",
        )
        .unwrap();
        let prefs = Preferences::load(Some(&path));
        assert_eq!(prefs.animation.flash_decay, 0.01);
        assert_eq!(prefs.export.sticker_size, ExportPreferences::MAX_STICKER_SIZE);
        assert!(path.exists());
    }

    #[test]
    fn test_load_broken_file_is_backed_up() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.yaml");
        std::fs::write(&path, "colors:\n  red: not-a-color\n").unwrap();
        let prefs = Preferences::load(Some(&path));
        assert_eq!(prefs, Preferences::default());
        assert!(!path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.yaml");
        let mut prefs = Preferences::default();
        prefs.export.sticker_size = 64;
        prefs.export.dir = Some(dir.path().to_owned());
        prefs.colors.highlight = Rgb::new(1, 2, 3);
        prefs.save(Some(&path)).unwrap();
        assert_eq!(Preferences::load(Some(&path)), prefs);
    }
}
