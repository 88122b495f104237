//! Tracking session driving the face mesh from capture events.
//!
//! The capture subsystem delivers events one at a time; the session applies
//! them to a single [`FaceMesh`] it owns. Events produced on other threads
//! are funnelled through an `mpsc` channel and consumed by [`TrackingSession::run`],
//! so the mesh only ever has one writer.

use crate::{
    appearance::FaceAppearance,
    config::SessionConfig,
    mesh::{FaceMesh, MeshChange},
    topology::BaseTopology,
    Result, Vertex,
};
use log::{debug, info, warn};
use std::sync::mpsc::Receiver;

/// A face model as delivered by the capture subsystem
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaceModel {
    /// Triangle list of the model
    pub topology: BaseTopology,
    /// Landmark positions for the current alignment
    pub vertices: Vec<Vertex>,
    /// Colours reported with the model, if any
    pub appearance: Option<FaceAppearance>,
}

/// Event delivered by the capture subsystem
#[derive(Debug, Clone, PartialEq)]
pub enum CaptureEvent {
    /// Tracking started and the first model is available
    ModelReady(FaceModel),
    /// A capture pass produced a new model; its vertex count may differ
    ModelRebuilt(FaceModel),
    /// A new alignment frame, `None` when no face was tracked
    FaceFrame(Option<Vec<Vertex>>),
    /// The tracked face was lost
    TrackingLost,
}

/// Session lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// No model received yet
    #[default]
    Uninitialized,
    /// Mesh built, frames are applied
    Ready,
}

/// Counters accumulated over a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Frames applied to the mesh
    pub frames_applied: usize,
    /// Frames without a tracked face
    pub frames_skipped: usize,
    /// Events rejected with an error
    pub events_rejected: usize,
    /// Successful mesh (re)builds
    pub models_built: usize,
    /// Tracking-lost notifications
    pub tracking_losses: usize,
}

/// Owns the face mesh and applies capture events to it
#[derive(Debug, Default)]
pub struct TrackingSession {
    mesh: FaceMesh,
    appearance: Option<FaceAppearance>,
    state: SessionState,
    stats: SessionStats,
    stop_on_rejected_frame: bool,
}

impl TrackingSession {
    /// Create a session that drops rejected frames
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session from configuration
    #[must_use]
    pub fn with_config(config: &SessionConfig) -> Self {
        Self {
            stop_on_rejected_frame: config.stop_on_rejected_frame,
            ..Self::default()
        }
    }

    /// Current lifecycle state
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Read-only view of the mesh
    #[must_use]
    pub fn mesh(&self) -> &FaceMesh {
        &self.mesh
    }

    /// Colours of the last model that reported them
    #[must_use]
    pub fn appearance(&self) -> Option<FaceAppearance> {
        self.appearance
    }

    /// Counters so far
    #[must_use]
    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    /// Apply one event
    ///
    /// Returns the mesh change, or `None` when the event left the mesh as is
    /// (untracked frame, tracking loss).
    ///
    /// # Errors
    ///
    /// Propagates `InvalidInput` and `StaleModel` from the mesh. The mesh
    /// keeps its previous contents on error.
    pub fn handle(&mut self, event: CaptureEvent) -> Result<Option<MeshChange>> {
        let outcome = match event {
            CaptureEvent::ModelReady(model) => {
                info!("Face model ready with {} vertices", model.vertices.len());
                self.build(model).map(Some)
            }
            CaptureEvent::ModelRebuilt(model) => {
                info!("Face model rebuilt with {} vertices", model.vertices.len());
                self.build(model).map(Some)
            }
            CaptureEvent::FaceFrame(Some(vertices)) => self.mesh.update(&vertices).map(|change| {
                self.stats.frames_applied += 1;
                Some(change)
            }),
            CaptureEvent::FaceFrame(None) => {
                self.stats.frames_skipped += 1;
                Ok(None)
            }
            CaptureEvent::TrackingLost => {
                debug!("Tracking lost, keeping last mesh (version {})", self.mesh.version());
                self.stats.tracking_losses += 1;
                Ok(None)
            }
        };

        if outcome.is_err() {
            self.stats.events_rejected += 1;
        }
        outcome
    }

    fn build(&mut self, model: FaceModel) -> Result<MeshChange> {
        let change = self.mesh.initialize(&model.vertices, &model.topology)?;
        if model.appearance.is_some() {
            self.appearance = model.appearance;
        }
        self.state = SessionState::Ready;
        self.stats.models_built += 1;
        Ok(change)
    }

    /// Consume events until the sender side hangs up
    ///
    /// `on_change` sees the mesh after every change. Rejected events are
    /// logged and dropped unless the session was configured to stop on them.
    ///
    /// # Errors
    ///
    /// Returns the first rejection when `stop_on_rejected_frame` is set.
    pub fn run<F>(&mut self, events: &Receiver<CaptureEvent>, mut on_change: F) -> Result<SessionStats>
    where
        F: FnMut(&FaceMesh, MeshChange),
    {
        for event in events.iter() {
            match self.handle(event) {
                Ok(Some(change)) => on_change(&self.mesh, change),
                Ok(None) => {}
                Err(e) if self.stop_on_rejected_frame => {
                    warn!("Stopping on rejected capture event: {e}");
                    self.log_summary("aborted");
                    return Err(e);
                }
                Err(e) => warn!("Dropping capture event: {e}"),
            }
        }

        self.log_summary("finished");
        Ok(self.stats)
    }

    fn log_summary(&self, outcome: &str) {
        info!(
            "Session {}: {} frames applied, {} skipped, {} rejected, {} model builds",
            outcome,
            self.stats.frames_applied,
            self.stats.frames_skipped,
            self.stats.events_rejected,
            self.stats.models_built
        );
    }
}
