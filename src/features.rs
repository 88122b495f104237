//! Synthetic eye and eyebrow geometry appended after the base mesh.
//!
//! The vendor face model has no eyeballs or brows, so fourteen extra
//! vertices are placed each frame relative to named landmarks. Each slot
//! is described by one row of [`SYNTHETIC_VERTICES`]: which landmark it
//! follows, along which axis it is pushed, by which measurement and factor,
//! and which texel of the feature atlas it samples.

use crate::{
    constants::{
        landmarks, EYEBROW_LIFT, SYNTHETIC_DEPTH_OFFSET, SYNTHETIC_TRIANGLE_COUNT,
        SYNTHETIC_VERTEX_COUNT,
    },
    measurements::EyeMeasurements,
    Vertex,
};
use nalgebra::Vector3;

/// Facial feature a synthetic vertex belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Left eye quad
    LeftEye,
    /// Right eye quad
    RightEye,
    /// Left eyebrow triangle
    LeftEyebrow,
    /// Right eyebrow triangle
    RightEyebrow,
}

/// Axis along which a synthetic vertex is displaced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal
    X,
    /// Vertical
    Y,
}

/// Measurement that sizes a displacement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scale {
    /// Raw left eye width
    LeftWidth,
    /// Raw right eye width
    RightWidth,
    /// Corrected left eye height
    LeftOpening,
    /// Corrected right eye height
    RightOpening,
    /// Raw right eye height
    RightHeight,
}

impl Scale {
    /// Value of this measurement on the current frame
    #[must_use]
    pub fn value(self, measurements: &EyeMeasurements) -> f32 {
        match self {
            Self::LeftWidth => measurements.left_width,
            Self::RightWidth => measurements.right_width,
            Self::LeftOpening => measurements.left_opening(),
            Self::RightOpening => measurements.right_opening(),
            Self::RightHeight => measurements.right_height,
        }
    }
}

/// One row of the synthetic vertex table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SyntheticVertex {
    /// Human-readable slot name
    pub name: &'static str,
    /// Feature the slot belongs to
    pub feature: Feature,
    /// Landmark the slot follows
    pub landmark: usize,
    /// Displacement axis
    pub axis: Axis,
    /// Measurement driving the displacement
    pub scale: Scale,
    /// Signed multiple of the measurement
    pub factor: f32,
    /// Constant vertical offset added on top
    pub lift: f32,
    /// Texel in the feature atlas
    pub uv: [f32; 2],
}

impl SyntheticVertex {
    /// Displacement from the (z-flipped) landmark for the given measurements
    #[must_use]
    pub fn offset(&self, measurements: &EyeMeasurements) -> Vector3<f32> {
        let amount = self.factor * self.scale.value(measurements);
        match self.axis {
            Axis::X => Vector3::new(amount, self.lift, SYNTHETIC_DEPTH_OFFSET),
            Axis::Y => Vector3::new(0.0, amount + self.lift, SYNTHETIC_DEPTH_OFFSET),
        }
    }

    /// Landmark position converted to render space, without any offset
    ///
    /// Used as the starting pose right after the topology is built.
    #[must_use]
    pub fn rest_position(&self, vertices: &[Vertex]) -> Vertex {
        to_render_space(&vertices[self.landmark])
    }

    /// Live position for the current frame
    #[must_use]
    pub fn position(&self, vertices: &[Vertex], measurements: &EyeMeasurements) -> Vertex {
        let landmark = &vertices[self.landmark];
        let offset = self.offset(measurements);
        Vertex::new(landmark.x + offset.x, landmark.y + offset.y, -landmark.z + offset.z)
    }
}

/// Flip a tracker-space point into render space
#[must_use]
pub fn to_render_space(vertex: &Vertex) -> Vertex {
    Vertex::new(vertex.x, vertex.y, -vertex.z)
}

const fn eye(
    name: &'static str,
    feature: Feature,
    landmark: usize,
    axis: Axis,
    scale: Scale,
    factor: f32,
    uv: [f32; 2],
) -> SyntheticVertex {
    SyntheticVertex {
        name,
        feature,
        landmark,
        axis,
        scale,
        factor,
        lift: 0.0,
        uv,
    }
}

const fn brow(
    name: &'static str,
    feature: Feature,
    landmark: usize,
    axis: Axis,
    scale: Scale,
    factor: f32,
    uv: [f32; 2],
) -> SyntheticVertex {
    SyntheticVertex {
        lift: EYEBROW_LIFT,
        ..eye(name, feature, landmark, axis, scale, factor, uv)
    }
}

/// Synthetic vertices, in slot order `N+0 .. N+13`
pub static SYNTHETIC_VERTICES: [SyntheticVertex; SYNTHETIC_VERTEX_COUNT] = {
    use landmarks::*;
    use Axis::{X, Y};
    use Feature::{LeftEye, LeftEyebrow, RightEye, RightEyebrow};
    use Scale::{LeftOpening, LeftWidth, RightHeight, RightOpening, RightWidth};

    [
        eye("left_eye_outer", LeftEye, LEFT_EYE_OUTER, X, LeftWidth, 1.0, [256.0, 128.0]),
        eye("left_eye_top", LeftEye, LEFT_EYE_TOP, Y, LeftOpening, 1.0, [128.0, 0.0]),
        eye("left_eye_inner", LeftEye, LEFT_EYE_INNER, X, LeftWidth, -1.0, [0.0, 128.0]),
        eye("left_eye_bottom", LeftEye, LEFT_EYE_BOTTOM, Y, LeftOpening, -1.0, [128.0, 256.0]),
        eye("right_eye_inner", RightEye, RIGHT_EYE_INNER, X, RightWidth, -1.0, [256.0, 128.0]),
        eye("right_eye_top", RightEye, RIGHT_EYE_TOP, Y, RightOpening, 1.0, [384.0, 0.0]),
        eye("right_eye_outer", RightEye, RIGHT_EYE_OUTER, X, RightWidth, 1.0, [512.0, 128.0]),
        eye("right_eye_bottom", RightEye, RIGHT_EYE_BOTTOM, Y, RightOpening, -1.0, [384.0, 256.0]),
        // Both brow apexes follow the raw right eye height
        brow("left_brow_outer", LeftEyebrow, LEFT_BROW_OUTER, X, LeftWidth, 0.5, [140.0, 286.0]),
        brow("left_brow_apex", LeftEyebrow, LEFT_BROW_APEX, Y, RightHeight, 2.0, [70.0, 230.0]),
        brow("left_brow_inner", LeftEyebrow, LEFT_BROW_INNER, X, LeftWidth, -0.25, [0.0, 286.0]),
        brow("right_brow_inner", RightEyebrow, RIGHT_BROW_INNER, X, RightWidth, 0.25, [0.0, 286.0]),
        brow("right_brow_apex", RightEyebrow, RIGHT_BROW_APEX, Y, RightHeight, 2.0, [70.0, 230.0]),
        brow("right_brow_outer", RightEyebrow, RIGHT_BROW_OUTER, X, RightWidth, -0.5, [140.0, 286.0]),
    ]
};

/// Synthetic triangles as offsets from the base vertex count
pub const SYNTHETIC_TRIANGLES: [[u32; 3]; SYNTHETIC_TRIANGLE_COUNT] = [
    // left eye
    [0, 1, 2],
    [2, 3, 0],
    // right eye
    [6, 5, 4],
    [4, 7, 6],
    // eyebrows
    [8, 9, 10],
    [11, 12, 13],
];

/// Slots belonging to one feature
pub fn slots_of(feature: Feature) -> impl Iterator<Item = usize> {
    SYNTHETIC_VERTICES
        .iter()
        .enumerate()
        .filter(move |(_, vertex)| vertex.feature == feature)
        .map(|(slot, _)| slot)
}
