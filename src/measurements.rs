//! Per-frame eye measurements derived from landmark distances.
//!
//! The four distances approximate how wide and how open each eye is. They
//! drive the size of the synthetic eye quads and the height of the eyebrow
//! apexes.

use crate::{
    constants::{landmarks, EYE_HEIGHT_AMPLIFY, EYE_HEIGHT_BIAS, EYE_HEIGHT_GAIN},
    Vertex,
};

/// Euclidean distance between two landmarks
///
/// Coincident points yield `0.0`, which later produces a closed eye.
#[must_use]
pub fn distance(a: &Vertex, b: &Vertex) -> f32 {
    nalgebra::distance(a, b)
}

/// Map a raw eye height onto the amplitude used for the eye quad
#[must_use]
pub fn corrected_height(raw: f32) -> f32 {
    let height = (raw - EYE_HEIGHT_BIAS) * EYE_HEIGHT_GAIN;
    height * EYE_HEIGHT_AMPLIFY
}

/// Raw landmark distances measured on one frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EyeMeasurements {
    /// Upper to lower lid of the left eye
    pub left_height: f32,
    /// Outer to inner corner of the left eye
    pub left_width: f32,
    /// Upper to lower lid of the right eye
    pub right_height: f32,
    /// Inner to outer corner of the right eye
    pub right_width: f32,
}

impl EyeMeasurements {
    /// Measure a vertex list
    ///
    /// The caller guarantees that `vertices` covers every eye landmark.
    #[must_use]
    pub fn measure(vertices: &[Vertex]) -> Self {
        Self {
            left_height: distance(
                &vertices[landmarks::LEFT_EYE_TOP],
                &vertices[landmarks::LEFT_EYE_BOTTOM],
            ),
            left_width: distance(
                &vertices[landmarks::LEFT_EYE_OUTER],
                &vertices[landmarks::LEFT_EYE_INNER],
            ),
            right_height: distance(
                &vertices[landmarks::RIGHT_EYE_TOP],
                &vertices[landmarks::RIGHT_EYE_BOTTOM],
            ),
            right_width: distance(
                &vertices[landmarks::RIGHT_EYE_INNER],
                &vertices[landmarks::RIGHT_EYE_OUTER],
            ),
        }
    }

    /// Corrected left eye height
    #[must_use]
    pub fn left_opening(&self) -> f32 {
        corrected_height(self.left_height)
    }

    /// Corrected right eye height
    #[must_use]
    pub fn right_opening(&self) -> f32 {
        corrected_height(self.right_height)
    }
}
