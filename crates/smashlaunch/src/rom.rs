//! Game image discovery.
//!
//! Candidate directories come from the emulator's global config: every key in
//! the `UI` section whose name starts with `paths\gamedirs` (the section also
//! holds `size` counts and `deep_scan` flags under the same prefix, so only
//! values that are existing directories are kept). Directories are scanned
//! non-recursively, in config order, and the first file passing the name,
//! extension and size checks wins.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::env::Env;
use crate::error::{Error, Result};
use crate::ini::IniDocument;
use crate::title::NAME_MARKERS;

/// Key-name prefix of game directory entries, compared case-insensitively.
const GAMEDIRS_PREFIX: &str = "paths\\gamedirs";

/// File extensions a game image can have.
pub const ROM_EXTENSIONS: &[&str] = &["xci", "nsp"];

/// Minimum size of a full game image; smaller files are update/DLC packages.
pub const MIN_ROM_SIZE: u64 = 13_000_000_000;

/// Collect candidate directories from the global config, in key order.
/// Values that do not point at an existing directory are skipped.
pub fn game_directories(global: &IniDocument) -> Vec<PathBuf> {
    let mut dirs = Vec::new();

    for (key, value) in global.entries("UI") {
        if !key.to_lowercase().starts_with(GAMEDIRS_PREFIX) {
            continue;
        }
        let path = Path::new(value);
        if path.is_dir() {
            dirs.push(path.to_path_buf());
        } else {
            debug!("Skipping non-directory gamedirs entry {}={}", key, value);
        }
    }

    dirs
}

/// Check whether a file name identifies this title's game image.
pub fn matches_title(file_name: &str) -> bool {
    let has_marker = NAME_MARKERS.iter().any(|m| file_name.contains(m));
    let has_extension = Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| ROM_EXTENSIONS.contains(&ext));
    has_marker && has_extension
}

/// Scan the given directories and return the first matching game image.
///
/// `Ok(None)` means no candidate matched anywhere, which is a normal
/// outcome; an unreadable directory is an error and propagates.
pub fn locate(dirs: &[PathBuf]) -> Result<Option<PathBuf>> {
    for dir in dirs {
        let entries = fs::read_dir(dir).map_err(|source| Error::GameDirUnreadable {
            path: dir.clone(),
            source,
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| Error::GameDirUnreadable {
                path: dir.clone(),
                source,
            })?;
            let metadata = entry.metadata().map_err(|source| Error::GameDirUnreadable {
                path: dir.clone(),
                source,
            })?;
            if !metadata.is_file() {
                continue;
            }

            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                continue;
            };
            if matches_title(name) && metadata.len() >= MIN_ROM_SIZE {
                return Ok(Some(entry.path()));
            }
        }
    }

    Ok(None)
}

/// Load the global config and search all configured directories for the
/// title's game image.
pub fn find_rom(env: &Env) -> Result<PathBuf> {
    let global = IniDocument::load(env.global_config_path())?;

    let dirs = game_directories(&global);
    if dirs.is_empty() {
        return Err(Error::NoGameDirectories);
    }
    debug!("Searching {} game directories", dirs.len());

    locate(&dirs)?.ok_or(Error::RomNotFound)
}
