//! Session lifecycle tests driven by capture events

mod test_helpers;

use hd_face_mesh::{
    appearance::FaceAppearance,
    constants::HD_FACE_VERTEX_COUNT,
    mesh::MeshChange,
    recording::{CaptureRecording, MeshSnapshot, RecordedEvent, RecordedModel},
    session::{CaptureEvent, FaceModel, SessionState, TrackingSession},
};
use std::{sync::mpsc::channel, thread};
use test_helpers::{random_face, strip_topology};

fn model(seed: u64) -> FaceModel {
    FaceModel {
        topology: strip_topology(8),
        vertices: random_face(seed),
        appearance: None,
    }
}

#[test]
fn test_untracked_frame_keeps_last_mesh() {
    let mut session = TrackingSession::new();
    session.handle(CaptureEvent::ModelReady(model(1))).unwrap();
    session.handle(CaptureEvent::FaceFrame(Some(random_face(2)))).unwrap();
    let positions = session.mesh().positions().to_vec();

    assert_eq!(session.handle(CaptureEvent::FaceFrame(None)).unwrap(), None);
    assert_eq!(session.handle(CaptureEvent::TrackingLost).unwrap(), None);

    assert_eq!(session.mesh().positions(), &positions[..]);
    assert_eq!(session.state(), SessionState::Ready);
}

#[test]
fn test_model_rebuilt_replaces_topology_and_appearance() {
    let mut session = TrackingSession::new();
    session.handle(CaptureEvent::ModelReady(model(1))).unwrap();
    assert_eq!(session.appearance(), None);

    let rebuilt = FaceModel {
        topology: strip_topology(20),
        vertices: random_face(3),
        appearance: Some(FaceAppearance::from_packed(0xFFE0_C0A0, 0xFF30_2010)),
    };
    let change = session.handle(CaptureEvent::ModelRebuilt(rebuilt)).unwrap();

    assert_eq!(change, Some(MeshChange::Replaced { version: 2 }));
    assert_eq!(session.mesh().triangle_count(), 20 + 6);
    assert_eq!(session.appearance().map(|a| a.skin.r), Some(0xE0));
    assert_eq!(session.stats().models_built, 2);
}

#[test]
fn test_frames_from_capture_thread() {
    let (tx, rx) = channel();
    let producer = thread::spawn(move || {
        tx.send(CaptureEvent::ModelReady(model(1))).unwrap();
        for seed in 0..10 {
            let frame = if seed % 3 == 0 { None } else { Some(random_face(seed)) };
            tx.send(CaptureEvent::FaceFrame(frame)).unwrap();
        }
    });

    let mut changes = Vec::new();
    let mut session = TrackingSession::new();
    let stats = session.run(&rx, |_, change| changes.push(change)).unwrap();
    producer.join().unwrap();

    assert_eq!(stats.frames_applied, 6);
    assert_eq!(stats.frames_skipped, 4);
    assert!(changes[0].is_topology_change());
    assert!(changes[1..].iter().all(|c| !c.is_topology_change()));
    let versions: Vec<u64> = changes.iter().map(MeshChange::version).collect();
    assert_eq!(versions, (1..=7).collect::<Vec<_>>());
}

#[test]
fn test_replay_recording_into_snapshot() {
    let to_array = |seed| {
        random_face(seed)
            .iter()
            .map(|p| [p.x, p.y, p.z])
            .collect::<Vec<_>>()
    };
    let recording = CaptureRecording {
        model: RecordedModel {
            triangles: vec![[0, 1, 2]],
            vertices: to_array(1),
            skin_color: Some(0xFF80_6040),
            hair_color: Some(0xFF10_1010),
        },
        events: vec![
            RecordedEvent::Frame { vertices: to_array(2) },
            RecordedEvent::NoFace,
            RecordedEvent::Frame { vertices: Vec::new() },
        ],
    };

    let (tx, rx) = channel();
    for event in recording.into_events(None).unwrap() {
        tx.send(event).unwrap();
    }
    drop(tx);

    let mut session = TrackingSession::new();
    let stats = session.run(&rx, |_, _| {}).unwrap();
    assert_eq!(stats.events_rejected, 1);

    let snapshot = MeshSnapshot::capture(session.mesh(), session.appearance());
    assert_eq!(snapshot.version, 2);
    assert_eq!(snapshot.positions.len(), HD_FACE_VERTEX_COUNT + 14);
    assert_eq!(&snapshot.triangle_indices[..3], &[2, 1, 0]);
    assert!(snapshot.appearance.is_some());

    let yaml = serde_yaml::to_string(&snapshot).unwrap();
    let parsed: MeshSnapshot = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed.triangle_indices, snapshot.triangle_indices);
}

#[test]
fn test_recording_file_round_trip() {
    let to_array = |seed| {
        random_face(seed)
            .iter()
            .map(|p| [p.x, p.y, p.z])
            .collect::<Vec<_>>()
    };
    let recording = CaptureRecording {
        model: RecordedModel {
            triangles: vec![[0, 1, 2], [2, 1, 3]],
            vertices: to_array(7),
            skin_color: None,
            hair_color: None,
        },
        events: vec![
            RecordedEvent::Frame { vertices: to_array(8) },
            RecordedEvent::TrackingLost,
            RecordedEvent::Rebuilt {
                model: RecordedModel {
                    triangles: vec![[1, 2, 3]],
                    vertices: to_array(9),
                    skin_color: Some(0xFF80_6040),
                    hair_color: Some(0xFF10_1010),
                },
            },
        ],
    };

    let path = std::env::temp_dir().join(format!("hd_face_mesh_{}_recording.yaml", std::process::id()));
    recording.to_file(&path).unwrap();
    let loaded = CaptureRecording::from_file(&path).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(loaded, recording);

    let events = loaded.into_events(None).unwrap();
    assert_eq!(events.len(), 4);
    match &events[3] {
        CaptureEvent::ModelRebuilt(model) => {
            assert_eq!(model.topology.triangles(), &[[1, 2, 3]]);
            assert!(model.appearance.is_some());
        }
        other => panic!("Expected ModelRebuilt, got {other:?}"),
    }
}
