//! Recorded captures for offline replay, and mesh snapshots.
//!
//! A recording is a YAML document holding the initial face model and the
//! ordered events the capture subsystem delivered after it:
//!
//! ```yaml
//! model:
//!   triangles: [[0, 1, 2]]
//!   vertices: [[0.0, 0.0, 0.6], ...]
//!   skin_color: 0xFFE0C0A0
//!   hair_color: 0xFF302010
//! events:
//!   - kind: frame
//!     vertices: [[0.0, 0.0, 0.6], ...]
//!   - kind: no_face
//!   - kind: tracking_lost
//!   - kind: rebuilt
//!     model: { triangles: [...], vertices: [...] }
//! ```

use crate::{
    appearance::FaceAppearance,
    mesh::FaceMesh,
    session::{CaptureEvent, FaceModel},
    Error, Result, Vertex,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Face model as stored in a recording
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordedModel {
    /// Triangle triples in tracker winding
    pub triangles: Vec<[u32; 3]>,
    /// Landmark positions in tracker space
    pub vertices: Vec<[f32; 3]>,
    /// Packed `0xAARRGGBB` skin colour
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skin_color: Option<u32>,
    /// Packed `0xAARRGGBB` hair colour
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hair_color: Option<u32>,
}

impl RecordedModel {
    /// Convert into the model type the session consumes
    ///
    /// # Errors
    ///
    /// Returns `RecordingError` if only one of the two colours is present.
    pub fn into_face_model(self) -> Result<FaceModel> {
        let appearance = match (self.skin_color, self.hair_color) {
            (Some(skin), Some(hair)) => Some(FaceAppearance::from_packed(skin, hair)),
            (None, None) => None,
            _ => {
                return Err(Error::RecordingError(
                    "skin_color and hair_color must be given together".to_string(),
                ))
            }
        };

        Ok(FaceModel {
            topology: self.triangles.into(),
            vertices: to_vertices(&self.vertices),
            appearance,
        })
    }
}

/// One recorded capture event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecordedEvent {
    /// Tracked alignment frame
    Frame {
        /// Landmark positions in tracker space
        vertices: Vec<[f32; 3]>,
    },
    /// Frame without a tracked face
    NoFace,
    /// Tracking target lost
    TrackingLost,
    /// Face model rebuilt by a capture pass
    Rebuilt {
        /// The new model
        model: RecordedModel,
    },
}

/// A recorded capture session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaptureRecording {
    /// Model available when tracking started
    pub model: RecordedModel,
    /// Events delivered afterwards, in order
    #[serde(default)]
    pub events: Vec<RecordedEvent>,
}

impl CaptureRecording {
    /// Load a recording from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse a recording from YAML text
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::RecordingError(format!("Failed to parse recording: {e}")))
    }

    /// Save the recording as YAML
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Turn the recording into session events
    ///
    /// The initial model becomes a `ModelReady` event; `limit` caps the
    /// number of events replayed after it.
    ///
    /// # Errors
    ///
    /// Returns `RecordingError` for a model with only one colour.
    pub fn into_events(self, limit: Option<usize>) -> Result<Vec<CaptureEvent>> {
        let limit = limit.unwrap_or(usize::MAX);
        let mut events = Vec::with_capacity(1 + self.events.len().min(limit));
        events.push(CaptureEvent::ModelReady(self.model.into_face_model()?));

        for event in self.events.into_iter().take(limit) {
            events.push(match event {
                RecordedEvent::Frame { vertices } => CaptureEvent::FaceFrame(Some(to_vertices(&vertices))),
                RecordedEvent::NoFace => CaptureEvent::FaceFrame(None),
                RecordedEvent::TrackingLost => CaptureEvent::TrackingLost,
                RecordedEvent::Rebuilt { model } => CaptureEvent::ModelRebuilt(model.into_face_model()?),
            });
        }

        Ok(events)
    }
}

fn to_vertices(points: &[[f32; 3]]) -> Vec<Vertex> {
    points.iter().map(|&[x, y, z]| Vertex::new(x, y, z)).collect()
}

/// Serializable copy of a mesh at one version
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshSnapshot {
    /// Mesh version the snapshot was taken at
    pub version: u64,
    /// Base model vertex count
    pub base_vertex_count: usize,
    /// Render-space positions
    pub positions: Vec<[f32; 3]>,
    /// Texture coordinates
    pub texture_coordinates: Vec<[f32; 2]>,
    /// Flat triangle index list
    pub triangle_indices: Vec<u32>,
    /// Colours of the tracked face, if reported
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appearance: Option<FaceAppearance>,
}

impl MeshSnapshot {
    /// Copy the current state of a mesh
    #[must_use]
    pub fn capture(mesh: &FaceMesh, appearance: Option<FaceAppearance>) -> Self {
        Self {
            version: mesh.version(),
            base_vertex_count: mesh.base_vertex_count(),
            positions: mesh.positions().iter().map(|p| [p.x, p.y, p.z]).collect(),
            texture_coordinates: mesh.texture_coordinates().iter().map(|t| [t.x, t.y]).collect(),
            triangle_indices: mesh.triangle_indices().to_vec(),
            appearance,
        }
    }

    /// Write the snapshot as YAML
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }
}
