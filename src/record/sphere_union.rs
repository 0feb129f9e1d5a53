use crate::error::FieldError;
use crate::math::{enclosing_diameter, Point3, Quaternion};

use super::{IgnoreFlags, SphereParams};

/// Native parameters of a rigid union of spheres.
#[derive(Debug, Clone, PartialEq)]
pub struct SphereUnionParams {
    members: Vec<SphereParams>,
    centers: Vec<Point3>,
    orientations: Vec<Quaternion>,
    diameter: f64,
    ignore: IgnoreFlags,
}

impl SphereUnionParams {
    /// Returns the member sphere records.
    #[must_use]
    pub fn members(&self) -> &[SphereParams] {
        &self.members
    }

    /// Returns the member centers in the particle frame.
    #[must_use]
    pub fn centers(&self) -> &[Point3] {
        &self.centers
    }

    /// Returns the member orientations in the particle frame.
    #[must_use]
    pub fn orientations(&self) -> &[Quaternion] {
        &self.orientations
    }

    /// Returns the circumsphere diameter of the union.
    #[must_use]
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    #[must_use]
    pub fn ignore(&self) -> IgnoreFlags {
        self.ignore
    }
}

/// Builds sphere union parameters from already-packed members.
///
/// # Errors
///
/// Returns [`FieldError::LengthMismatch`] if `centers` or `orientations`
/// do not have one entry per member.
pub fn make_sphere_union_params(
    members: Vec<SphereParams>,
    centers: Vec<Point3>,
    orientations: Vec<Quaternion>,
    ignore: IgnoreFlags,
) -> Result<SphereUnionParams, FieldError> {
    if centers.len() != members.len() {
        return Err(FieldError::LengthMismatch {
            field: "centers",
            found: centers.len(),
            other: "diameters",
            expected: members.len(),
        });
    }
    if orientations.len() != members.len() {
        return Err(FieldError::LengthMismatch {
            field: "orientations",
            found: orientations.len(),
            other: "diameters",
            expected: members.len(),
        });
    }
    let diameters: Vec<f64> = members.iter().map(SphereParams::diameter).collect();
    Ok(SphereUnionParams {
        diameter: enclosing_diameter(&centers, &diameters),
        members,
        centers,
        orientations,
        ignore,
    })
}
