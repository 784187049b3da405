//! # smashlaunch
//!
//! Core library for the smashlaunch pre-launch configurator.
//!
//! This crate provides:
//! - Frame-rate derivation (speed-limit percentage and engine tick divisor)
//! - Game image discovery across the emulator's configured directories
//! - Idempotent patching of the per-title speed-limit config and the
//!   game-side FPS cheat file
//! - The first-run bootstrap gate for the bundled optimized settings
//! - Fire-and-forget emulator launching

pub mod bootstrap;
pub mod env;
pub mod error;
pub mod fps;
pub mod ini;
pub mod launch;
pub mod patch;
pub mod rom;
pub mod title;

pub use bootstrap::{BootstrapGate, extract_settings_archive};
pub use env::Env;
pub use error::{Error, Result};
pub use fps::{DerivedSettings, derive};
pub use ini::IniDocument;
pub use launch::start_emulator;
pub use patch::{apply_speed_limit, write_fps_cheat};
pub use rom::find_rom;
