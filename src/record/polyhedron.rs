use std::collections::HashSet;

use crate::capacity::VertexCapacity;
use crate::error::{CapacityError, FieldError, Result};
use crate::math::Point3;

use super::IgnoreFlags;

fn circumsphere_radius(vertices: &[Point3]) -> f64 {
    vertices
        .iter()
        .map(|v| v.coords.norm())
        .fold(0.0, f64::max)
}

/// Native vertex list of a convex polyhedron or spheropolyhedron, stored in
/// a fixed-capacity layout.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyhedronVertices {
    capacity: VertexCapacity,
    vertices: Vec<Point3>,
    sweep_radius: f64,
    diameter: f64,
    ignore: IgnoreFlags,
}

impl PolyhedronVertices {
    /// Returns the layout capacity this record was built for.
    #[must_use]
    pub fn capacity(&self) -> VertexCapacity {
        self.capacity
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    #[must_use]
    pub fn sweep_radius(&self) -> f64 {
        self.sweep_radius
    }

    /// Returns the diameter of the origin-centered sphere enclosing the
    /// swept polyhedron.
    #[must_use]
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    #[must_use]
    pub fn ignore(&self) -> IgnoreFlags {
        self.ignore
    }
}

/// Builds a fixed-capacity polyhedron vertex record.
///
/// # Errors
///
/// Returns [`CapacityError::CapacityExceeded`] if the vertices do not fit in
/// `capacity`.
pub fn make_poly3d_verts(
    capacity: VertexCapacity,
    vertices: Vec<Point3>,
    sweep_radius: f64,
    ignore: IgnoreFlags,
) -> std::result::Result<PolyhedronVertices, CapacityError> {
    if vertices.len() > capacity.get() {
        return Err(CapacityError::CapacityExceeded {
            field: "vertices",
            max: capacity.get(),
            found: vertices.len(),
        });
    }
    Ok(PolyhedronVertices {
        capacity,
        diameter: 2.0 * (circumsphere_radius(&vertices) + sweep_radius),
        vertices,
        sweep_radius,
        ignore,
    })
}

/// Native mesh description of a general (possibly concave) polyhedron.
#[derive(Debug, Clone, PartialEq)]
pub struct PolyhedronData {
    vertices: Vec<Point3>,
    faces: Vec<Vec<usize>>,
    edges: Vec<[usize; 2]>,
    diameter: f64,
    ignore: IgnoreFlags,
}

impl PolyhedronData {
    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    /// Returns the faces as lists of vertex indices.
    #[must_use]
    pub fn faces(&self) -> &[Vec<usize>] {
        &self.faces
    }

    /// Returns the undirected edges implied by the faces, lower index first.
    #[must_use]
    pub fn edges(&self) -> &[[usize; 2]] {
        &self.edges
    }

    #[must_use]
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    #[must_use]
    pub fn ignore(&self) -> IgnoreFlags {
        self.ignore
    }
}

/// Builds a general polyhedron record from vertices and faces.
///
/// Edges are collected from consecutive indices of each face (wrapping
/// around), deduplicated, in order of first appearance.
///
/// # Errors
///
/// Returns [`FieldError::DegenerateFace`] for a face with fewer than three
/// indices and [`FieldError::IndexOutOfRange`] for an index with no vertex.
pub fn make_poly3d_data(
    vertices: Vec<Point3>,
    faces: Vec<Vec<usize>>,
    ignore: IgnoreFlags,
) -> Result<PolyhedronData> {
    let mut edges: Vec<[usize; 2]> = Vec::new();
    let mut seen: HashSet<[usize; 2]> = HashSet::new();
    for (face_index, face) in faces.iter().enumerate() {
        if face.len() < 3 {
            return Err(FieldError::DegenerateFace {
                field: "faces",
                face: face_index,
                len: face.len(),
            }
            .into());
        }
        if let Some(&index) = face.iter().find(|&&i| i >= vertices.len()) {
            return Err(FieldError::IndexOutOfRange {
                field: "faces",
                index,
                len: vertices.len(),
            }
            .into());
        }
        for (k, &a) in face.iter().enumerate() {
            let b = face[(k + 1) % face.len()];
            let edge = [a.min(b), a.max(b)];
            if seen.insert(edge) {
                edges.push(edge);
            }
        }
    }
    Ok(PolyhedronData {
        diameter: 2.0 * circumsphere_radius(&vertices),
        vertices,
        faces,
        edges,
        ignore,
    })
}
