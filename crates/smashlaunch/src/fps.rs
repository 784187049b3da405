//! Frame-rate derivation.
//!
//! Maps the requested target FPS to the two values that get persisted: the
//! emulator speed-limit percentage and the game engine's tick divisor.

use crate::error::{Error, Result};

/// Base rate of the game engine's internal tick counter.
pub const TICKS_PER_SECOND: u64 = 3600;

/// Frame rate the game runs at with an unmodified speed limit.
pub const NATIVE_FPS: u32 = 60;

/// Values derived from a single target FPS. Computed once per invocation;
/// only `speed_limit_percent` and `tick_divisor_hex` are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedSettings {
    pub target_fps: u32,
    pub speed_limit_percent: u32,
    pub tick_divisor: u64,
    pub tick_divisor_hex: String,
}

/// Derive emulator and game-side settings from a target frame rate.
///
/// The speed limit keeps the original floating-point-then-truncate formula
/// for compatibility with values written by existing installs. The tick
/// divisor uses truncating integer division, so targets that do not divide
/// 3600 evenly produce an approximate effective rate.
pub fn derive(target_fps: u32) -> Result<DerivedSettings> {
    if target_fps == 0 {
        return Err(Error::InvalidTargetFps(target_fps));
    }

    let speed_limit_percent = (f64::from(target_fps) / f64::from(NATIVE_FPS) * 100.0) as u32;

    let tick_divisor = TICKS_PER_SECOND / u64::from(target_fps);
    if tick_divisor > u64::from(u32::MAX) {
        return Err(Error::TickDivisorOverflow(tick_divisor));
    }
    let tick_divisor_hex = format!("{:08X}", tick_divisor);

    Ok(DerivedSettings {
        target_fps,
        speed_limit_percent,
        tick_divisor,
        tick_divisor_hex,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_native_rate() {
        let settings = derive(60).unwrap();
        assert_eq!(settings.speed_limit_percent, 100);
        assert_eq!(settings.tick_divisor, 60);
        assert_eq!(settings.tick_divisor_hex, "0000003C");
    }

    #[test]
    fn test_derive_double_rate() {
        let settings = derive(120).unwrap();
        assert_eq!(settings.speed_limit_percent, 200);
        assert_eq!(settings.tick_divisor, 30);
        assert_eq!(settings.tick_divisor_hex, "0000001E");
    }

    #[test]
    fn test_derive_half_rate() {
        let settings = derive(30).unwrap();
        assert_eq!(settings.speed_limit_percent, 50);
        assert_eq!(settings.tick_divisor, 120);
    }

    #[test]
    fn test_derive_zero_fps_rejected() {
        let result = derive(0);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("positive"));
    }

    #[test]
    fn test_hex_is_eight_chars_and_round_trips() {
        for fps in 1..=240 {
            let settings = derive(fps).unwrap();
            assert_eq!(settings.tick_divisor_hex.len(), 8, "fps={}", fps);
            let decoded = u64::from_str_radix(&settings.tick_divisor_hex, 16).unwrap();
            assert_eq!(decoded, TICKS_PER_SECOND / u64::from(fps), "fps={}", fps);
        }
    }

    #[test]
    fn test_non_divisor_truncates() {
        // 3600 / 144 = 25 exactly, but 3600 / 50 = 72 and 3600 / 48 = 75;
        // an awkward target like 70 truncates (3600 / 70 = 51.43 -> 51).
        let settings = derive(70).unwrap();
        assert_eq!(settings.tick_divisor, 51);
        assert_eq!(settings.tick_divisor_hex, "00000033");
    }
}
