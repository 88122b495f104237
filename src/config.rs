//! Configuration management for the face mesh replay tool

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Replay configuration
    pub replay: ReplayConfig,

    /// Session configuration
    pub session: SessionConfig,
}

/// Recording replay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    /// Recorded capture to replay
    pub recording: PathBuf,

    /// Where to write the final mesh snapshot, if anywhere
    pub output: Option<PathBuf>,

    /// Maximum number of recorded events to replay after the initial model
    pub limit: Option<usize>,
}

/// Tracking session configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Abort on the first rejected frame instead of dropping it
    pub stop_on_rejected_frame: bool,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            recording: PathBuf::from("recordings/capture.yaml"),
            output: None,
            limit: None,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        serde_yaml::from_str(&content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content)?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.replay.recording.as_os_str().is_empty() {
            return Err(Error::ConfigError("Recording path must not be empty".to_string()));
        }
        if !self.replay.recording.exists() {
            return Err(Error::ConfigError(format!(
                "Recording not found: {}",
                self.replay.recording.display()
            )));
        }
        if self.replay.limit == Some(0) {
            return Err(Error::ConfigError("Event limit must be greater than 0".to_string()));
        }
        if let Some(output) = &self.replay.output {
            if output == &self.replay.recording {
                return Err(Error::ConfigError(
                    "Snapshot output would overwrite the recording".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# HD Face Mesh Configuration

# Recording replay
replay:
  recording: "recordings/capture.yaml"
  output: "mesh_snapshot.yaml"
  limit: 300

# Tracking session
session:
  stop_on_rejected_frame: false
"#;
