//! Helper functions and utilities for tests

#![allow(dead_code)]

use hd_face_mesh::{constants::HD_FACE_VERTEX_COUNT, topology::BaseTopology, Vertex};
use rand::{rngs::StdRng, Rng, SeedableRng};

/// A vertex list of `count` points, all at the origin
pub fn origin_face(count: usize) -> Vec<Vertex> {
    vec![Vertex::origin(); count]
}

/// A reproducible random face of the HD model size, roughly 0.6 m from the sensor
pub fn random_face(seed: u64) -> Vec<Vertex> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..HD_FACE_VERTEX_COUNT)
        .map(|_| {
            Vertex::new(
                rng.gen_range(-0.1..0.1),
                rng.gen_range(-0.12..0.12),
                rng.gen_range(0.55..0.65),
            )
        })
        .collect()
}

/// A strip of triangles over the first `count + 2` vertices
pub fn strip_topology(count: u32) -> BaseTopology {
    BaseTopology::new((0..count).map(|i| [i, i + 1, i + 2]).collect())
}
