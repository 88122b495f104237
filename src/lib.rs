//! Face mesh construction for HD face tracking.
//!
//! A depth sensor's HD face tracker reports a fixed list of 3D landmarks per
//! frame together with the triangle list of its face model. This library
//! turns that stream into a renderable mesh:
//! 1. The vendor triangles are copied once with their winding reversed
//! 2. Fourteen synthetic vertices and six triangles are appended for the
//!    eyes and eyebrows, which the vendor model lacks
//! 3. On each frame every position is rewritten: landmarks are z-flipped
//!    into render space and the synthetic vertices are placed from measured
//!    eye widths and heights
//!
//! # Examples
//!
//! ## Building and updating a mesh
//!
//! ```
//! use hd_face_mesh::{mesh::FaceMesh, topology::BaseTopology, constants::HD_FACE_VERTEX_COUNT, Vertex};
//!
//! # fn main() -> hd_face_mesh::Result<()> {
//! let vertices = vec![Vertex::new(0.0, 0.0, 0.6); HD_FACE_VERTEX_COUNT];
//! let topology = BaseTopology::new(vec![[0, 1, 2]]);
//!
//! let mut mesh = FaceMesh::new();
//! mesh.initialize(&vertices, &topology)?;
//! assert_eq!(mesh.positions().len(), HD_FACE_VERTEX_COUNT + 14);
//!
//! let change = mesh.update(&vertices)?;
//! println!("mesh now at version {}", change.version());
//! # Ok(())
//! # }
//! ```
//!
//! ## Driving a session from capture events
//!
//! ```
//! use hd_face_mesh::session::{CaptureEvent, FaceModel, TrackingSession};
//! use hd_face_mesh::{constants::HD_FACE_VERTEX_COUNT, Vertex};
//! use std::sync::mpsc::channel;
//!
//! # fn main() -> hd_face_mesh::Result<()> {
//! let (tx, rx) = channel();
//! let vertices = vec![Vertex::new(0.0, 0.0, 0.6); HD_FACE_VERTEX_COUNT];
//! tx.send(CaptureEvent::ModelReady(FaceModel { vertices: vertices.clone(), ..FaceModel::default() })).unwrap();
//! tx.send(CaptureEvent::FaceFrame(Some(vertices))).unwrap();
//! tx.send(CaptureEvent::FaceFrame(None)).unwrap();
//! drop(tx);
//!
//! let mut session = TrackingSession::new();
//! let stats = session.run(&rx, |mesh, change| {
//!     println!("{} positions, version {}", mesh.positions().len(), change.version());
//! })?;
//! assert_eq!(stats.frames_applied, 1);
//! assert_eq!(stats.frames_skipped, 1);
//! # Ok(())
//! # }
//! ```

/// Error types and result handling
pub mod error;

/// Landmark indices and calibration constants
pub mod constants;

/// Vendor face model topology
pub mod topology;

/// Eye width and height measurements
pub mod measurements;

/// Synthetic eye and eyebrow vertex table
pub mod features;

/// The renderable face mesh
pub mod mesh;

/// Skin and hair colour pass-through
pub mod appearance;

/// Tracking session state machine
pub mod session;

/// Recorded captures and mesh snapshots
pub mod recording;

/// Configuration management
pub mod config;

/// Utility functions
pub mod utils;

pub use error::{Error, Result};

/// Landmark or mesh position
pub type Vertex = nalgebra::Point3<f32>;

/// Texture coordinate in feature-atlas pixels
pub type TexCoord = nalgebra::Point2<f32>;
