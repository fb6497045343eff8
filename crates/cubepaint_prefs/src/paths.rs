//! Locations of files read and written by Cubepaint.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use eyre::{OptionExt, Result, WrapErr};

const PREFS_FILE_NAME: &str = "cubepaint-prefs";
const PREFS_FILE_EXTENSION: &str = "yaml";

lazy_static! {
    static ref PREFS_FILE: Option<PathBuf> = ProjectDirs::from("", "", "Cubepaint")
        .map(|dirs| {
            dirs.config_dir()
                .join(PREFS_FILE_NAME)
                .with_extension(PREFS_FILE_EXTENSION)
        });
}

/// Returns the user preferences file.
pub fn prefs_file() -> Result<&'static Path> {
    PREFS_FILE
        .as_deref()
        .ok_or_eyre("unable to determine user config directory")
}

/// Moves a broken file aside so that it is not loaded again, and returns
/// where it went. The backup is stamped with the current local time.
pub fn back_up(original: &Path) -> Result<PathBuf> {
    let now = time::OffsetDateTime::now_local().unwrap_or_else(|_| time::OffsetDateTime::now_utc());
    let dest = backup_path(original, now);
    std::fs::rename(original, &dest)
        .wrap_err_with(|| format!("error backing up {}", original.display()))?;
    Ok(dest)
}

fn backup_path(original: &Path, now: time::OffsetDateTime) -> PathBuf {
    let stem = original
        .file_stem()
        .map_or_else(|| "unknown".to_owned(), |s| s.to_string_lossy().into_owned());
    let extension = original
        .extension()
        .map_or_else(|| "txt".to_owned(), |s| s.to_string_lossy().into_owned());

    original.with_file_name(format!(
        "{stem}_{:04}-{:02}-{:02}_{:02}-{:02}-{:02}_bak.{extension}",
        now.year(),
        now.month() as u8,
        now.day(),
        now.hour(),
        now.minute(),
        now.second(),
    ))
}
