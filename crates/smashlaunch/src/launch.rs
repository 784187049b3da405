//! Emulator launching through the installer's maintenance tool.

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::debug;

use crate::env::Env;
use crate::error::{Error, Result};

/// Launcher executable expected either beside the working directory or in
/// the default installation directory.
pub const LAUNCHER_EXE: &str = "maintenancetool.exe";

/// Emulator executable path relative to the launch directory.
const EMULATOR_SUBDIR: &str = "yuzu-windows-msvc";
const EMULATOR_EXE: &str = "yuzu.exe";

/// Directory to launch from: the current directory when it contains the
/// launcher, otherwise the default installation directory.
pub fn resolve_launch_dir(env: &Env) -> PathBuf {
    match std::env::current_dir() {
        Ok(cwd) if cwd.join(LAUNCHER_EXE).is_file() => cwd,
        _ => env.default_launch_dir.clone(),
    }
}

/// Build the launch command: `maintenancetool.exe --launcher <emulator>
/// --launcher_arg <rom>`, run from the launch directory.
pub fn launch_command(launch_dir: &Path, rom: &Path) -> Command {
    let launcher = launch_dir.join(LAUNCHER_EXE);
    let emulator = launch_dir.join(EMULATOR_SUBDIR).join(EMULATOR_EXE);

    let mut command = Command::new(launcher);
    command
        .current_dir(launch_dir)
        .arg("--launcher")
        .arg(emulator)
        .arg("--launcher_arg")
        .arg(rom);
    command
}

/// Spawn the emulator launcher pointed at the given game image and return
/// the child process id. Fire-and-forget: the child is not waited on.
pub fn start_emulator(env: &Env, rom: &Path) -> Result<u32> {
    let launch_dir = resolve_launch_dir(env);
    debug!("Launching from {}", launch_dir.display());

    let child = launch_command(&launch_dir, rom)
        .spawn()
        .map_err(|source| Error::Launch {
            path: launch_dir.join(LAUNCHER_EXE),
            source,
        })?;

    Ok(child.id())
}
