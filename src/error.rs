//! Error types for the face mesh library.

use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Vertex list or topology rejected before any mutation
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Update requested before the mesh topology was built
    #[error("Stale model: the mesh has not been initialized")]
    StaleModel,

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Recorded capture could not be turned into events
    #[error("Recording error: {0}")]
    RecordingError(String),

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML (de)serialization failed
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
