use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use smashlaunch::{BootstrapGate, Env, bootstrap, fps, launch, patch, rom};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Bundled optimized emulator settings, extracted on first run.
static OPTIMIZED_SETTINGS: &[u8] = include_bytes!("../bundle/optimized_settings.zip");

#[derive(Parser)]
#[command(name = "smashlaunch")]
#[command(about = "Configure yuzu for a target frame rate and launch Smash Ultimate")]
struct Args {
    /// Target frame rate, e.g. 120
    fps: u32,

    /// Log file path
    #[arg(long, default_value = "smashlaunch.log")]
    log: PathBuf,
}

fn main() {
    // A usage error is fatal like everything else: exit 1, not clap's 2.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    if let Err(e) = init_logging(&args.log) {
        eprintln!("Failed to initialize logging: {e:#}");
        std::process::exit(1);
    }

    // Single place where a terminal error becomes an exit code.
    if let Err(e) = run(&args) {
        error!("{e:#}");
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("smashlaunch=info".parse()?))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

/// Compute the installation layout from the platform app-data roots and the
/// executable location.
fn system_env() -> Result<Env> {
    let roaming = dirs::data_dir().context("Failed to determine the roaming app-data directory")?;
    let local =
        dirs::data_local_dir().context("Failed to determine the local app-data directory")?;
    let exe = std::env::current_exe().context("Failed to determine the executable path")?;
    let exe_dir = exe
        .parent()
        .context("Executable path has no parent directory")?
        .to_path_buf();

    Ok(Env::new(roaming, local, exe_dir))
}

fn run(args: &Args) -> Result<()> {
    let env = system_env()?;

    let gate = BootstrapGate::new(env.optimized_flag_path(), env.force_flag_path());
    if gate.evaluate()? {
        info!("Applying optimized emulator settings...");
        bootstrap::extract_settings_archive(OPTIMIZED_SETTINGS, &env.data_dir)
            .context("Failed to extract bundled optimized settings")?;
    }

    let settings = fps::derive(args.fps)?;
    info!("Target FPS: {}", settings.target_fps);

    info!("Searching for the game image...");
    let rom_path = rom::find_rom(&env)?;
    info!("Found game image: {}", rom_path.display());

    info!("Updating game speed...");
    patch::apply_speed_limit(&env.title_config_path(), &settings)?;

    info!("Updating FPS mod...");
    patch::write_fps_cheat(&env.mod_root(), &settings)?;

    info!("Starting emulator...");
    let pid = launch::start_emulator(&env, &rom_path)?;
    info!("Emulator launcher started (pid {})", pid);

    Ok(())
}
