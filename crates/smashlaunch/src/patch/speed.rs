//! Speed-limit patching of the per-title emulator config.

use std::path::Path;

use tracing::debug;

use crate::error::{Error, Result};
use crate::fps::DerivedSettings;
use crate::ini::IniDocument;

/// Force the per-title speed limit to the derived percentage.
///
/// The config file must already exist; its absence means the emulator was
/// never configured for this title, and synthesizing a full config here is
/// out of scope. Keys are overwritten unconditionally, so re-running with
/// the same settings leaves the file byte-for-byte unchanged.
pub fn apply_speed_limit(config_path: &Path, settings: &DerivedSettings) -> Result<()> {
    if !config_path.exists() {
        return Err(Error::TitleConfigMissing(config_path.to_path_buf()));
    }

    let mut config = IniDocument::load(config_path)?;

    config.set("Core", "speed_limit\\use_global", "false");
    config.set("Core", "speed_limit\\default", "false");
    config.set("Core", "speed_limit", &settings.speed_limit_percent.to_string());

    config.save(config_path)?;
    debug!(
        "Set speed limit to {}% in {}",
        settings.speed_limit_percent,
        config_path.display()
    );
    Ok(())
}
