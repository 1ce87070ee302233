//! Topology checks for triangle meshes.
//!
//! Directed edges are paired the same way a half-edge structure pairs them:
//! every `(u, v)` of a closed, consistently wound mesh has exactly one twin
//! `(v, u)`.

use std::collections::{HashMap, HashSet};

use super::SolidMesh;
use crate::error::{JigsawError, JigsawResult};

/// Checks index count, index range and repeated corners of a triangle list.
pub(crate) fn validate_triangles(indices: &[u32], vertex_count: usize) -> JigsawResult<()> {
    if indices.len() % 3 != 0 {
        return Err(JigsawError::MalformedTriangulation {
            message: format!("{} indices is not a whole number of triangles", indices.len()),
        });
    }
    for (triangle, corners) in indices.chunks_exact(3).enumerate() {
        for &index in corners {
            if index as usize >= vertex_count {
                return Err(JigsawError::IndexOutOfBounds {
                    triangle,
                    index,
                    vertex_count,
                });
            }
        }
        if corners[0] == corners[1] || corners[1] == corners[2] || corners[2] == corners[0] {
            return Err(JigsawError::MalformedTriangulation {
                message: format!(
                    "triangle {triangle} repeats a vertex: ({}, {}, {})",
                    corners[0], corners[1], corners[2]
                ),
            });
        }
    }
    Ok(())
}

/// Directed edges of a triangle list, each paired with its triangle.
pub(crate) fn directed_edges(indices: &[u32]) -> impl Iterator<Item = (usize, u32, u32)> + '_ {
    indices
        .chunks_exact(3)
        .enumerate()
        .flat_map(|(triangle, t)| {
            [(t[0], t[1]), (t[1], t[2]), (t[2], t[0])]
                .into_iter()
                .map(move |(u, v)| (triangle, u, v))
        })
}

impl SolidMesh {
    /// `V − E + F`; a closed piece without holes gives 2.
    #[must_use]
    pub fn euler_characteristic(&self) -> i64 {
        let edges: HashSet<(u32, u32)> = directed_edges(&self.indices)
            .map(|(_, u, v)| (u.min(v), u.max(v)))
            .collect();
        self.vertex_count() as i64 - edges.len() as i64 + self.triangle_count() as i64
    }

    /// Checks that the mesh is a closed, consistently wound 2-manifold.
    ///
    /// # Errors
    ///
    /// - `IndexOutOfBounds` / `MalformedTriangulation` for broken triangles
    /// - `InconsistentWinding` when a directed edge appears twice
    /// - `NonManifoldEdge` when an edge has no twin
    pub fn validate_closed(&self) -> JigsawResult<()> {
        validate_triangles(&self.indices, self.vertex_count())?;

        let mut edge_map: HashMap<(u32, u32), usize> = HashMap::new();
        for (triangle, u, v) in directed_edges(&self.indices) {
            if edge_map.insert((u, v), triangle).is_some() {
                return Err(JigsawError::InconsistentWinding { from: u, to: v });
            }
        }
        for &(u, v) in edge_map.keys() {
            if !edge_map.contains_key(&(v, u)) {
                return Err(JigsawError::NonManifoldEdge {
                    a: u.min(v),
                    b: u.max(v),
                    count: 1,
                });
            }
        }
        Ok(())
    }

    /// Volume enclosed by the mesh; positive when normals face outward.
    #[must_use]
    pub fn signed_volume(&self) -> f64 {
        self.triangles()
            .filter_map(|[a, b, c]| {
                let pa = self.positions.get(a as usize)?;
                let pb = self.positions.get(b as usize)?;
                let pc = self.positions.get(c as usize)?;
                Some(pa.dot(pb.cross(*pc)))
            })
            .sum::<f64>()
            / 6.0
    }
}
