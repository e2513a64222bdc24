//! Command-line controller driving the VORTRAC analysis pipeline over a
//! sequence of decoded radar volumes (spec §5/§6).

mod config_xml;
mod controller;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use log::{error, info, warn};
use vortrac_model::vortex::{reconcile, PressureList, SimplexList, VortexList};
use vortrac_model::volume::RadarVolume;

#[derive(Parser)]
#[command(name = "vortrac-cli")]
#[command(author, version, about = "Drives the VORTRAC single-radar vortex analysis pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Runs the analysis pipeline over a directory of bincode-encoded
    /// radar volumes, in filename order.
    Run {
        /// Path to the XML configuration document (spec §6).
        #[arg(long)]
        config: PathBuf,
        /// Directory of bincode-serialized `RadarVolume` files to process.
        #[arg(long)]
        volumes: PathBuf,
        /// Directory the VortexList/SimplexList XML state is persisted to.
        #[arg(long)]
        state_dir: PathBuf,
        /// Storm name used in the persisted state filenames.
        #[arg(long, default_value = "storm")]
        vortex_name: String,
        /// Radar site identifier used in the persisted state filenames.
        #[arg(long, default_value = "radar")]
        radar_name: String,
    },
    /// Polls the NOAA real-time chunk bucket for a site and logs newly
    /// available volumes. Does not decode or analyze them; wiring a
    /// decoded chunk into a `RadarVolume` for `run` is left to a future
    /// CappiBuilder collaborator (spec §2's explicit out-of-scope list).
    Poll {
        /// Four-letter radar site identifier, e.g. `KAMX`.
        site: String,
        /// Seconds between polls.
        #[arg(long, default_value_t = 300)]
        interval_secs: u64,
    },
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Command::Run {
            config,
            volumes,
            state_dir,
            vortex_name,
            radar_name,
        } => run(&config, &volumes, &state_dir, &vortex_name, &radar_name).await,
        Command::Poll { site, interval_secs } => poll(&site, interval_secs).await,
    };

    if let Err(message) = outcome {
        error!("{message}");
        std::process::exit(1);
    }
}

async fn run(
    config_path: &Path,
    volumes_dir: &Path,
    state_dir: &Path,
    vortex_name: &str,
    radar_name: &str,
) -> Result<(), String> {
    let config = config_xml::load(config_path).map_err(|e| e.to_string())?;

    let volume_paths = list_volume_files(volumes_dir).map_err(|e| e.to_string())?;
    info!("found {} candidate volumes in {}", volume_paths.len(), volumes_dir.display());

    let year = volume_paths
        .first()
        .and_then(|p| load_volume(p).ok())
        .and_then(|v| v.time().map(|t| t.format("%Y").to_string()))
        .unwrap_or_else(|| "unknown".to_string());

    let vortex_path = state_dir.join(format!("{vortex_name}_{radar_name}_{year}_vortexList.xml"));
    let simplex_path = state_dir.join(format!("{vortex_name}_{radar_name}_{year}_simplexList.xml"));

    let mut vortex_list = VortexList::load(&vortex_path).unwrap_or_default();
    let mut simplex_list = SimplexList::load(&simplex_path).unwrap_or_default();
    reconcile(&mut vortex_list, &mut simplex_list);

    let abort = controller::new_abort_flag();
    let watcher = tokio::spawn(controller::watch_for_interrupt(abort.clone()));

    // No MADIS fetcher is wired up yet (spec's external-fetcher surface is
    // out of core scope); VortexSynth falls back to the configured default
    // boundary pressure until one populates this list.
    let pressure_observations = PressureList::new();

    for path in &volume_paths {
        let volume = match load_volume(path) {
            Ok(volume) => volume,
            Err(message) => {
                warn!("skipping {}: {message}", path.display());
                continue;
            }
        };

        match controller::run_volume(
            &config,
            &volume,
            &mut vortex_list,
            &mut simplex_list,
            &pressure_observations,
            &abort,
        ) {
            Ok(()) => info!("analyzed volume at {}", volume.time_epoch_millis()),
            Err(vortrac_process::result::Error::Aborted) => {
                warn!("aborting before volume at {}", volume.time_epoch_millis());
                break;
            }
            Err(message) => warn!("volume at {} failed: {message}", volume.time_epoch_millis()),
        }

        vortex_list.save(&vortex_path).map_err(|e| e.to_string())?;
        simplex_list.save(&simplex_path).map_err(|e| e.to_string())?;
    }

    watcher.abort();
    Ok(())
}

async fn poll(site: &str, interval_secs: u64) -> Result<(), String> {
    let mut interval = tokio::time::interval(std::time::Duration::from_secs(interval_secs));
    let mut last_seen: Option<vortrac_data::aws::realtime::VolumeIndex> = None;

    loop {
        interval.tick().await;
        match vortrac_data::aws::realtime::get_latest_volume(site).await {
            Ok(Some(volume)) if last_seen != Some(volume) => {
                info!("{site}: new real-time volume available ({volume:?})");
                last_seen = Some(volume);
            }
            Ok(_) => {}
            Err(error) => warn!("{site}: poll failed: {error}"),
        }
    }
}

fn list_volume_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    paths.sort();
    Ok(paths)
}

fn load_volume(path: &Path) -> Result<RadarVolume, String> {
    let bytes = std::fs::read(path).map_err(|e| e.to_string())?;
    bincode::deserialize(&bytes).map_err(|e| e.to_string())
}
