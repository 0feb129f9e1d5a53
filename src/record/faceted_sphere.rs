use crate::error::FieldError;
use crate::math::{Point3, Vector3};

use super::IgnoreFlags;

/// Native parameters of a sphere intersected with a set of half-spaces.
///
/// Facet `i` keeps the points `p` with `normals[i] . p + offsets[i] <= 0`.
/// `vertices` lists the intersection points of the facets on the sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct FacetedSphereParams {
    normals: Vec<Vector3>,
    offsets: Vec<f64>,
    vertices: Vec<Point3>,
    diameter: f64,
    origin: Point3,
    ignore: IgnoreFlags,
}

impl FacetedSphereParams {
    #[must_use]
    pub fn normals(&self) -> &[Vector3] {
        &self.normals
    }

    #[must_use]
    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    #[must_use]
    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    #[must_use]
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Returns the origin of the sphere relative to the particle position.
    #[must_use]
    pub fn origin(&self) -> &Point3 {
        &self.origin
    }

    #[must_use]
    pub fn ignore(&self) -> IgnoreFlags {
        self.ignore
    }
}

/// Builds faceted sphere parameters.
///
/// # Errors
///
/// Returns [`FieldError::LengthMismatch`] if `normals` and `offsets` differ
/// in length.
pub fn make_faceted_sphere(
    normals: Vec<Vector3>,
    offsets: Vec<f64>,
    vertices: Vec<Point3>,
    diameter: f64,
    origin: Point3,
    ignore: IgnoreFlags,
) -> Result<FacetedSphereParams, FieldError> {
    if normals.len() != offsets.len() {
        return Err(FieldError::LengthMismatch {
            field: "offsets",
            found: offsets.len(),
            other: "normals",
            expected: normals.len(),
        });
    }
    Ok(FacetedSphereParams {
        normals,
        offsets,
        vertices,
        diameter,
        origin,
        ignore,
    })
}
