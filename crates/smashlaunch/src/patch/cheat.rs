//! FPS cheat file generation under the title's mod directory.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::fps::DerivedSettings;
use crate::title::{CHEAT_ADDRESS_PREFIX, CHEAT_FILE_ID, CHEAT_MOD_NAME};

/// Path of the cheat file under the title's mod root.
pub fn cheat_file_path(mod_root: &Path) -> PathBuf {
    mod_root
        .join(CHEAT_MOD_NAME)
        .join("cheats")
        .join(format!("{}.txt", CHEAT_FILE_ID))
}

/// Render the full cheat file content for the derived settings.
fn render(settings: &DerivedSettings) -> String {
    format!(
        "[{} FPS]\n{} {}\n",
        settings.target_fps, CHEAT_ADDRESS_PREFIX, settings.tick_divisor_hex
    )
}

/// (Re)write the FPS cheat file, creating the directory tree if needed.
///
/// The content is assembled in memory and written in a single operation, so
/// a reader never observes a truncated file. The file is fully replaced on
/// every run; it has no identity beyond whatever the last run wrote.
pub fn write_fps_cheat(mod_root: &Path, settings: &DerivedSettings) -> Result<()> {
    let path = cheat_file_path(mod_root);

    let cheat_dir = path.parent().unwrap_or(mod_root);
    fs::create_dir_all(cheat_dir).map_err(|source| Error::CheatDirCreate {
        path: cheat_dir.to_path_buf(),
        source,
    })?;

    fs::write(&path, render(settings)).map_err(|source| Error::CheatWrite {
        path: path.clone(),
        source,
    })?;
    debug!("Wrote {} FPS cheat to {}", settings.target_fps, path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fps::derive;
    use tempfile::TempDir;

    #[test]
    fn test_cheat_file_path_layout() {
        let path = cheat_file_path(Path::new("/mods/01006A800016E000"));
        assert_eq!(
            path,
            Path::new("/mods/01006A800016E000/Custom FPS/cheats/B9B166DF1DB90BAF.txt")
        );
    }

    #[test]
    fn test_content_format() {
        let tmp = TempDir::new().unwrap();
        write_fps_cheat(tmp.path(), &derive(120).unwrap()).unwrap();

        let content = fs::read_to_string(cheat_file_path(tmp.path())).unwrap();
        assert_eq!(content, "[120 FPS]\n04000000 0523B004 0000001E\n");
    }

    #[test]
    fn test_rewrite_leaves_no_residue() {
        let tmp = TempDir::new().unwrap();
        write_fps_cheat(tmp.path(), &derive(120).unwrap()).unwrap();
        write_fps_cheat(tmp.path(), &derive(60).unwrap()).unwrap();

        let content = fs::read_to_string(cheat_file_path(tmp.path())).unwrap();
        assert_eq!(content, "[60 FPS]\n04000000 0523B004 0000003C\n");
    }

    #[test]
    fn test_creates_directory_tree() {
        let tmp = TempDir::new().unwrap();
        let mod_root = tmp.path().join("sdmc/yuzu/load/01006A800016E000");

        write_fps_cheat(&mod_root, &derive(144).unwrap()).unwrap();
        assert!(cheat_file_path(&mod_root).is_file());
    }
}
