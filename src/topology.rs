//! Base mesh topology supplied once per face model.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Triangle list of the vendor face model, in the tracker's winding order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaseTopology {
    triangles: Vec<[u32; 3]>,
}

impl BaseTopology {
    /// Wrap an already grouped triangle list
    #[must_use]
    pub fn new(triangles: Vec<[u32; 3]>) -> Self {
        Self { triangles }
    }

    /// Group a flat index list (as the vendor API hands it out) into triangles
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the index count is not a multiple of three.
    pub fn from_flat(indices: &[u32]) -> Result<Self> {
        if indices.len() % 3 != 0 {
            return Err(Error::InvalidInput(format!(
                "Flat triangle index list has {} entries, expected a multiple of 3",
                indices.len()
            )));
        }

        let triangles = indices
            .chunks_exact(3)
            .map(|chunk| [chunk[0], chunk[1], chunk[2]])
            .collect();

        Ok(Self { triangles })
    }

    /// Triangles in input order
    #[must_use]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Number of triangles
    #[must_use]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    /// Whether the topology has no triangles
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Largest vertex index referenced, if any
    #[must_use]
    pub fn max_index(&self) -> Option<u32> {
        self.triangles.iter().flatten().copied().max()
    }

    /// Check that every index addresses one of `vertex_count` vertices
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` naming the first out-of-range triangle.
    pub fn validate(&self, vertex_count: usize) -> Result<()> {
        for (triangle_index, triangle) in self.triangles.iter().enumerate() {
            if let Some(&bad) = triangle.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(Error::InvalidInput(format!(
                    "Triangle {triangle_index} references vertex {bad}, but only {vertex_count} vertices were supplied"
                )));
            }
        }
        Ok(())
    }

    /// Triangles with their winding reversed, `(a, b, c)` becoming `(c, b, a)`
    pub fn reversed_winding(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        self.triangles.iter().map(|&[a, b, c]| [c, b, a])
    }
}

impl From<Vec<[u32; 3]>> for BaseTopology {
    fn from(triangles: Vec<[u32; 3]>) -> Self {
        Self::new(triangles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flat() {
        let topology = BaseTopology::from_flat(&[0, 1, 2, 2, 3, 0]).unwrap();
        assert_eq!(topology.triangles(), &[[0, 1, 2], [2, 3, 0]]);
        assert_eq!(topology.len(), 2);
        assert_eq!(topology, BaseTopology::from(vec![[0, 1, 2], [2, 3, 0]]));

        assert!(BaseTopology::from_flat(&[0, 1]).is_err());
        assert!(BaseTopology::from_flat(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_max_index() {
        assert_eq!(BaseTopology::default().max_index(), None);
        let topology = BaseTopology::new(vec![[0, 7, 2], [3, 1, 5]]);
        assert_eq!(topology.max_index(), Some(7));
    }

    #[test]
    fn test_validate() {
        let topology = BaseTopology::new(vec![[0, 1, 2], [2, 3, 4]]);
        assert!(topology.validate(5).is_ok());

        match topology.validate(4) {
            Err(Error::InvalidInput(msg)) => assert!(msg.contains("Triangle 1")),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn test_reversed_winding() {
        let topology = BaseTopology::new(vec![[0, 1, 2], [5, 4, 3]]);
        let reversed: Vec<_> = topology.reversed_winding().collect();
        assert_eq!(reversed, vec![[2, 1, 0], [3, 4, 5]]);
    }
}
