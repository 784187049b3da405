//! Filesystem layout of the emulator installation.
//!
//! All paths the launcher touches are computed here, once, from the two
//! platform app-data roots and the directory holding the running executable.
//! Components take an `Env` reference instead of consulting ambient state.

use std::path::{Path, PathBuf};

use crate::title::TITLE_ID;

/// Emulator directory name under both app-data roots.
const EMULATOR_DIR: &str = "yuzu";

/// Marker file recording that the bundled optimized settings were applied.
const OPTIMIZED_FLAG_FILE: &str = ".yuzu_launcher_optimized_flag";

/// Operator-dropped sentinel forcing a re-bootstrap on the next run.
const FORCE_FLAG_FILE: &str = ".force_reoptimize_flag";

#[derive(Debug, Clone)]
pub struct Env {
    /// Emulator persistent data directory (`<roaming>/yuzu`).
    pub data_dir: PathBuf,
    /// Default installation directory the launcher falls back to
    /// (`<local>/yuzu`).
    pub default_launch_dir: PathBuf,
    /// Directory of the running executable; the force flag lives beside it.
    pub exe_dir: PathBuf,
}

impl Env {
    pub fn new<P, Q, R>(roaming_root: P, local_root: Q, exe_dir: R) -> Self
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
        R: AsRef<Path>,
    {
        Self {
            data_dir: roaming_root.as_ref().join(EMULATOR_DIR),
            default_launch_dir: local_root.as_ref().join(EMULATOR_DIR),
            exe_dir: exe_dir.as_ref().to_path_buf(),
        }
    }

    /// Global emulator config holding the configured game directories.
    pub fn global_config_path(&self) -> PathBuf {
        self.data_dir.join("config").join("qt-config.ini")
    }

    /// Per-title config carrying the speed-limit keys. Must already exist.
    pub fn title_config_path(&self) -> PathBuf {
        self.data_dir
            .join("config")
            .join("custom")
            .join(format!("{}.ini", TITLE_ID))
    }

    /// Root of the title's mod directory tree.
    pub fn mod_root(&self) -> PathBuf {
        self.data_dir
            .join("sdmc")
            .join(EMULATOR_DIR)
            .join("load")
            .join(TITLE_ID)
    }

    pub fn optimized_flag_path(&self) -> PathBuf {
        self.data_dir.join(OPTIMIZED_FLAG_FILE)
    }

    pub fn force_flag_path(&self) -> PathBuf {
        self.exe_dir.join(FORCE_FLAG_FILE)
    }
}
