//! Replays a recorded HD face capture through the mesh builder.

use anyhow::{Context, Result};
use clap::Parser;
use hd_face_mesh::{
    config::Config,
    recording::{CaptureRecording, MeshSnapshot},
    session::TrackingSession,
};
use log::{debug, info, warn};
use std::{path::PathBuf, sync::mpsc::channel};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Recorded capture to replay (YAML)
    #[arg(short, long)]
    recording: Option<PathBuf>,

    /// Write the final mesh snapshot to this file (YAML)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Replay at most this many events after the initial model
    #[arg(short, long)]
    limit: Option<usize>,

    /// Abort on the first rejected frame
    #[arg(long)]
    strict: bool,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("HD Face Mesh replay");

    let mut config = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path.display());
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Failed to load config file: {e}. Using defaults.");
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    if let Some(recording) = args.recording {
        config.replay.recording = recording;
    }
    if args.output.is_some() {
        config.replay.output = args.output;
    }
    if args.limit.is_some() {
        config.replay.limit = args.limit;
    }
    config.session.stop_on_rejected_frame |= args.strict;
    config.validate()?;

    let recording = CaptureRecording::from_file(&config.replay.recording)
        .with_context(|| format!("reading {}", config.replay.recording.display()))?;
    let events = recording.into_events(config.replay.limit)?;
    info!("Replaying {} events", events.len());

    let (tx, rx) = channel();
    for event in events {
        tx.send(event)?;
    }
    drop(tx);

    let mut session = TrackingSession::with_config(&config.session);
    let stats = session.run(&rx, |mesh, change| {
        debug!(
            "Mesh {:?}: {} positions, {} triangles",
            change,
            mesh.positions().len(),
            mesh.triangle_count()
        );
    })?;

    println!(
        "applied {} frames, skipped {}, rejected {}, built {} models (mesh version {})",
        stats.frames_applied,
        stats.frames_skipped,
        stats.events_rejected,
        stats.models_built,
        session.mesh().version()
    );

    if let Some(output) = &config.replay.output {
        if session.mesh().is_initialized() {
            MeshSnapshot::capture(session.mesh(), session.appearance()).to_file(output)?;
            info!("Mesh snapshot written to {}", output.display());
        } else {
            warn!("No mesh was built; skipping snapshot");
        }
    }

    Ok(())
}
