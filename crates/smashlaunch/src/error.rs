use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Target FPS must be a positive integer, got {0}")]
    InvalidTargetFps(u32),

    #[error("Tick divisor {0:#X} does not fit in 8 hex digits")]
    TickDivisorOverflow(u64),

    #[error("Failed to read config file {path}: {source}")]
    ConfigRead { path: PathBuf, source: std::io::Error },

    #[error("Failed to save config file {path}: {source}")]
    ConfigWrite { path: PathBuf, source: std::io::Error },

    #[error("Per-title config file doesn't exist: {0}")]
    TitleConfigMissing(PathBuf),

    #[error("No game directories configured in the emulator's global config")]
    NoGameDirectories,

    #[error("Failed to read game directory {path}: {source}")]
    GameDirUnreadable { path: PathBuf, source: std::io::Error },

    #[error("No matching game image found in any configured directory")]
    RomNotFound,

    #[error("Failed to create cheat directory {path}: {source}")]
    CheatDirCreate { path: PathBuf, source: std::io::Error },

    #[error("Failed to write cheat file {path}: {source}")]
    CheatWrite { path: PathBuf, source: std::io::Error },

    #[error("Failed to create bootstrap flag {path}: {source}")]
    FlagCreate { path: PathBuf, source: std::io::Error },

    #[error("Failed to start emulator launcher {path}: {source}")]
    Launch { path: PathBuf, source: std::io::Error },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this error is the "no matching game image" outcome,
    /// as opposed to a true I/O failure.
    pub fn is_rom_not_found(&self) -> bool {
        matches!(self, Error::RomNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_rom_not_found() {
        assert!(Error::RomNotFound.is_rom_not_found());

        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        assert!(!Error::Io(io_err).is_rom_not_found());
    }

    #[test]
    fn test_precondition_errors_name_the_path() {
        let err = Error::TitleConfigMissing(PathBuf::from("/cfg/custom/01006A800016E000.ini"));
        assert!(format!("{}", err).contains("01006A800016E000.ini"));
    }
}
