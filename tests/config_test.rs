//! Configuration file handling

use hd_face_mesh::{
    config::{Config, EXAMPLE_CONFIG},
    session::TrackingSession,
    Error,
};
use std::path::PathBuf;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("hd_face_mesh_{}_{name}", std::process::id()))
}

#[test]
fn test_config_file_round_trip() {
    let path = temp_path("config.yaml");
    let mut config: Config = serde_yaml::from_str(EXAMPLE_CONFIG).unwrap();
    config.session.stop_on_rejected_frame = true;
    config.replay.limit = Some(42);

    config.to_file(&path).unwrap();
    let loaded = Config::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert!(loaded.session.stop_on_rejected_frame);
    assert_eq!(loaded.replay.limit, Some(42));
    assert_eq!(loaded.replay.recording, config.replay.recording);
}

#[test]
fn test_config_validation() {
    let recording = temp_path("recording.yaml");
    std::fs::write(&recording, "model: { triangles: [], vertices: [] }\n").unwrap();

    let mut config = Config::default();
    config.replay.recording = recording.clone();
    assert!(config.validate().is_ok());

    config.replay.limit = Some(0);
    assert!(matches!(config.validate(), Err(Error::ConfigError(_))));

    config.replay.limit = None;
    config.replay.output = Some(recording.clone());
    assert!(matches!(config.validate(), Err(Error::ConfigError(_))));

    std::fs::remove_file(&recording).ok();
}

#[test]
fn test_invalid_config_file() {
    let path = temp_path("bad.yaml");
    std::fs::write(&path, "replay: [not, a, map]\n").unwrap();
    let result = Config::from_file(&path);
    std::fs::remove_file(&path).ok();

    assert!(matches!(result, Err(Error::ConfigError(_))));
    assert!(matches!(Config::from_file(temp_path("missing.yaml")), Err(Error::Io(_))));
}

#[test]
fn test_session_from_config() {
    let config: Config = serde_yaml::from_str("session:\n  stop_on_rejected_frame: true\n").unwrap();
    let mut session = TrackingSession::with_config(&config.session);
    let (tx, rx) = std::sync::mpsc::channel();
    tx.send(hd_face_mesh::session::CaptureEvent::FaceFrame(Some(Vec::new()))).unwrap();
    drop(tx);
    assert!(session.run(&rx, |_, _| {}).is_err());
}
