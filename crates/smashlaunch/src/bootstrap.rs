//! First-run bootstrap of the bundled optimized emulator settings.
//!
//! Two file-existence markers drive the decision: a persistent flag in the
//! emulator's data directory, created the first time the launcher runs, and
//! a force flag an operator can drop next to the executable to trigger one
//! more bootstrap. The force flag is consumed the moment it is observed.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::{Error, Result};

/// Idempotency gate for the one-time settings extraction.
///
/// The gate only decides whether to bootstrap and manages the two flags'
/// lifecycle; the extraction itself is [`extract_settings_archive`].
#[derive(Debug, Clone)]
pub struct BootstrapGate {
    optimized_flag: PathBuf,
    force_flag: PathBuf,
}

impl BootstrapGate {
    pub fn new(optimized_flag: PathBuf, force_flag: PathBuf) -> Self {
        Self {
            optimized_flag,
            force_flag,
        }
    }

    /// Decide whether to bootstrap, updating both flags.
    ///
    /// First ever run (persistent flag absent): returns true and creates the
    /// flag, so later runs default to "already optimized". A present force
    /// flag also returns true and is deleted so it cannot re-trigger.
    pub fn evaluate(&self) -> Result<bool> {
        let mut bootstrap = false;

        if !self.optimized_flag.exists() {
            info!("Emulator settings are not optimized yet");
            bootstrap = true;
            self.mark_optimized()?;
        }

        if self.consume_force_flag() {
            info!("Force reoptimize flag found");
            bootstrap = true;
        }

        Ok(bootstrap)
    }

    /// Create the persistent flag. Failure is fatal: without the marker every
    /// subsequent run would bootstrap again.
    pub fn mark_optimized(&self) -> Result<()> {
        fs::write(&self.optimized_flag, []).map_err(|source| Error::FlagCreate {
            path: self.optimized_flag.clone(),
            source,
        })
    }

    /// Observe and delete the force flag. Deletion is best-effort; losing it
    /// only costs one extra bootstrap on the next run.
    pub fn consume_force_flag(&self) -> bool {
        if !self.force_flag.exists() {
            return false;
        }
        if let Err(e) = fs::remove_file(&self.force_flag) {
            warn!(
                "Failed to remove force flag {}: {}",
                self.force_flag.display(),
                e
            );
        }
        true
    }
}

/// Extract the bundled settings archive wholesale into the emulator's data
/// directory, creating intermediate directories as needed. Entry paths that
/// escape the destination root are skipped.
pub fn extract_settings_archive(archive: &[u8], dest: &Path) -> Result<()> {
    let mut zip = zip::ZipArchive::new(io::Cursor::new(archive))?;

    for i in 0..zip.len() {
        let mut entry = zip.by_index(i)?;
        let Some(relative) = entry.enclosed_name() else {
            warn!("Skipping archive entry with unsafe path: {}", entry.name());
            continue;
        };
        let out_path = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path)?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut out = fs::File::create(&out_path)?;
        io::copy(&mut entry, &mut out)?;
    }

    Ok(())
}
