//! Renderable face mesh built from HD face landmarks.
//!
//! The mesh goes through two operations:
//! 1. [`FaceMesh::initialize`] builds the triangle list and texture
//!    coordinates once per face model and seeds every position.
//! 2. [`FaceMesh::update`] overwrites the positions on every tracked frame.
//!
//! Both operations validate their input before touching the mesh, so a
//! rejected frame leaves the last good geometry in place. Each successful
//! call bumps the mesh version and reports what changed as a
//! [`MeshChange`].

use crate::{
    constants::{BASE_TEXTURE_COORDINATE, REQUIRED_LANDMARK_COUNT, SYNTHETIC_VERTEX_COUNT},
    features::{to_render_space, SYNTHETIC_TRIANGLES, SYNTHETIC_VERTICES},
    measurements::EyeMeasurements,
    topology::BaseTopology,
    utils::safe_cast::usize_to_u32,
    Error, Result, TexCoord, Vertex,
};
use log::{debug, info, trace};

/// What a successful mesh operation changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshChange {
    /// Topology, texture coordinates and positions were all replaced
    Replaced {
        /// Mesh version after the change
        version: u64,
    },
    /// Every position was rewritten, topology untouched
    PositionsChanged {
        /// Mesh version after the change
        version: u64,
    },
}

impl MeshChange {
    /// Mesh version after the change
    #[must_use]
    pub fn version(&self) -> u64 {
        match *self {
            Self::Replaced { version } | Self::PositionsChanged { version } => version,
        }
    }

    /// Whether consumers must rebuild their buffers, not just refill them
    #[must_use]
    pub fn is_topology_change(&self) -> bool {
        matches!(self, Self::Replaced { .. })
    }
}

/// Face mesh with synthetic eyes and eyebrows
#[derive(Debug, Clone, Default)]
pub struct FaceMesh {
    positions: Vec<Vertex>,
    texture_coordinates: Vec<TexCoord>,
    triangle_indices: Vec<u32>,
    base_vertex_count: usize,
    version: u64,
}

impl FaceMesh {
    /// Create an empty, uninitialized mesh
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether [`FaceMesh::initialize`] has succeeded at least once
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.base_vertex_count > 0
    }

    /// Vertex count of the base model this mesh was built for
    #[must_use]
    pub fn base_vertex_count(&self) -> usize {
        self.base_vertex_count
    }

    /// Render-space positions, base vertices followed by synthetic ones
    #[must_use]
    pub fn positions(&self) -> &[Vertex] {
        &self.positions
    }

    /// Texture coordinates, parallel to [`FaceMesh::positions`]
    #[must_use]
    pub fn texture_coordinates(&self) -> &[TexCoord] {
        &self.texture_coordinates
    }

    /// Flat triangle index list
    #[must_use]
    pub fn triangle_indices(&self) -> &[u32] {
        &self.triangle_indices
    }

    /// Number of triangles in the mesh
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangle_indices.len() / 3
    }

    /// Positions of the synthetic vertices only
    #[must_use]
    pub fn synthetic_positions(&self) -> &[Vertex] {
        &self.positions[self.base_vertex_count..]
    }

    /// Version counter, bumped by every successful operation
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Build topology, texture coordinates and starting positions
    ///
    /// Base triangles are emitted with reversed winding, followed by the
    /// synthetic eye and eyebrow triangles. Synthetic vertices start at
    /// their landmarks without any offset.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `vertices` is empty, does not cover every
    /// referenced landmark, or is too short for `topology`. The mesh is
    /// left untouched on error.
    pub fn initialize(&mut self, vertices: &[Vertex], topology: &BaseTopology) -> Result<MeshChange> {
        validate_landmarks(vertices)?;
        topology.validate(vertices.len())?;

        let base_vertex_count = vertices.len();
        // Synthetic slots must fit in u32 too
        let base = usize_to_u32(base_vertex_count + SYNTHETIC_VERTEX_COUNT)? - SYNTHETIC_VERTEX_COUNT as u32;

        let mut triangle_indices = Vec::with_capacity(3 * (topology.len() + SYNTHETIC_TRIANGLES.len()));
        triangle_indices.extend(topology.reversed_winding().flatten());
        triangle_indices.extend(SYNTHETIC_TRIANGLES.iter().flatten().map(|&slot| base + slot));

        let mut positions = Vec::with_capacity(base_vertex_count + SYNTHETIC_VERTEX_COUNT);
        positions.extend(vertices.iter().map(to_render_space));
        positions.extend(SYNTHETIC_VERTICES.iter().map(|slot| slot.rest_position(vertices)));

        let [u, v] = BASE_TEXTURE_COORDINATE;
        let mut texture_coordinates = vec![TexCoord::new(u, v); base_vertex_count];
        texture_coordinates.extend(SYNTHETIC_VERTICES.iter().map(|slot| TexCoord::new(slot.uv[0], slot.uv[1])));

        self.positions = positions;
        self.texture_coordinates = texture_coordinates;
        self.triangle_indices = triangle_indices;
        self.base_vertex_count = base_vertex_count;
        self.version += 1;

        info!(
            "Face mesh built: {} base vertices, {} triangles (version {})",
            base_vertex_count,
            self.triangle_count(),
            self.version
        );

        Ok(MeshChange::Replaced { version: self.version })
    }

    /// Rewrite every position from a new landmark frame
    ///
    /// No smoothing is applied: the result depends only on `vertices`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if `vertices` is empty or misses a landmark,
    /// `StaleModel` if the mesh was never initialized, and `InvalidInput`
    /// if the frame does not match the base vertex count the mesh was
    /// built for.
    pub fn update(&mut self, vertices: &[Vertex]) -> Result<MeshChange> {
        validate_landmarks(vertices)?;
        if !self.is_initialized() {
            return Err(Error::StaleModel);
        }
        if vertices.len() != self.base_vertex_count {
            return Err(Error::InvalidInput(format!(
                "Frame has {} vertices but the mesh was built for {}; reinitialize after a model rebuild",
                vertices.len(),
                self.base_vertex_count
            )));
        }

        for (position, vertex) in self.positions.iter_mut().zip(vertices) {
            *position = to_render_space(vertex);
        }

        let measurements = EyeMeasurements::measure(vertices);
        debug!(
            "Eye scale L {:.4}x{:.4} R {:.4}x{:.4}",
            measurements.left_width, measurements.left_height, measurements.right_width, measurements.right_height
        );

        let synthetic = &mut self.positions[self.base_vertex_count..];
        for (position, slot) in synthetic.iter_mut().zip(&SYNTHETIC_VERTICES) {
            *position = slot.position(vertices, &measurements);
        }

        self.version += 1;
        trace!("Face mesh positions updated (version {})", self.version);

        Ok(MeshChange::PositionsChanged { version: self.version })
    }
}

fn validate_landmarks(vertices: &[Vertex]) -> Result<()> {
    if vertices.is_empty() {
        return Err(Error::InvalidInput("Vertex list is empty".to_string()));
    }
    if vertices.len() < REQUIRED_LANDMARK_COUNT {
        return Err(Error::InvalidInput(format!(
            "Expected at least {} vertices to cover every landmark, got {}",
            REQUIRED_LANDMARK_COUNT,
            vertices.len()
        )));
    }
    Ok(())
}
