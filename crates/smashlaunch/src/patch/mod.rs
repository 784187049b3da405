//! Idempotent patching of the two frame-rate stores: the per-title
//! speed-limit config and the game-side FPS cheat file.

mod cheat;
mod speed;

pub use cheat::write_fps_cheat;
pub use speed::apply_speed_limit;
