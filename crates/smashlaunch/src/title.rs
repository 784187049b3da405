//! Fixed identifiers for the targeted title (Super Smash Bros. Ultimate).

/// 16-character hex title id used by the emulator for per-title state.
pub const TITLE_ID: &str = "01006A800016E000";

/// Filename fragments that identify a game image as this title.
pub const NAME_MARKERS: &[&str] = &[TITLE_ID, "Super Smash Bros", "SSBU"];

/// Cheat file id under the title's mod directory (`<id>.txt`).
pub const CHEAT_FILE_ID: &str = "B9B166DF1DB90BAF";

/// Opcode and address the FPS cheat patches; the tick divisor follows.
pub const CHEAT_ADDRESS_PREFIX: &str = "04000000 0523B004";

/// Mod subdirectory the FPS cheat lives in, relative to the title's mod root.
pub const CHEAT_MOD_NAME: &str = "Custom FPS";
