//! Constants used throughout the library

/// Vertex count of the HD face model delivered by the tracker
pub const HD_FACE_VERTEX_COUNT: usize = 1347;

/// Number of synthetic vertices appended after the base mesh
pub const SYNTHETIC_VERTEX_COUNT: usize = 14;

/// Number of synthetic triangles appended after the base topology
pub const SYNTHETIC_TRIANGLE_COUNT: usize = 6;

/// Landmark indices into the HD face vertex list
pub mod landmarks {
    /// Left eye, outer corner
    pub const LEFT_EYE_OUTER: usize = 210;
    /// Left eye, upper lid
    pub const LEFT_EYE_TOP: usize = 241;
    /// Left eye, inner corner
    pub const LEFT_EYE_INNER: usize = 469;
    /// Left eye, lower lid
    pub const LEFT_EYE_BOTTOM: usize = 1104;

    /// Right eye, inner corner
    pub const RIGHT_EYE_INNER: usize = 843;
    /// Right eye, upper lid
    pub const RIGHT_EYE_TOP: usize = 731;
    /// Right eye, outer corner
    pub const RIGHT_EYE_OUTER: usize = 1117;
    /// Right eye, lower lid
    pub const RIGHT_EYE_BOTTOM: usize = 1090;

    /// Left eyebrow, outer end
    pub const LEFT_BROW_OUTER: usize = 346;
    /// Left eyebrow, apex
    pub const LEFT_BROW_APEX: usize = 222;
    /// Left eyebrow, inner end
    pub const LEFT_BROW_INNER: usize = 140;

    /// Right eyebrow, inner end
    pub const RIGHT_BROW_INNER: usize = 758;
    /// Right eyebrow, apex
    pub const RIGHT_BROW_APEX: usize = 849;
    /// Right eyebrow, outer end
    pub const RIGHT_BROW_OUTER: usize = 803;
}

/// Smallest vertex list that covers every referenced landmark
pub const REQUIRED_LANDMARK_COUNT: usize = landmarks::RIGHT_EYE_OUTER + 1;

/// Forward offset pushing synthetic geometry in front of the face surface
pub const SYNTHETIC_DEPTH_OFFSET: f32 = 0.018;

/// Vertical lift applied to every eyebrow vertex
pub const EYEBROW_LIFT: f32 = 0.005;

/// Eye height correction: `((h - BIAS) * GAIN) * AMPLIFY`
pub const EYE_HEIGHT_BIAS: f32 = 0.005;
pub const EYE_HEIGHT_GAIN: f32 = 3.0;
pub const EYE_HEIGHT_AMPLIFY: f32 = 4.0;

/// Texture coordinate assigned to every base-mesh vertex
pub const BASE_TEXTURE_COORDINATE: [f32; 2] = [1.0, 1.0];
