use crate::error::{CapacityError, FieldError, Result};
use crate::math::{enclosing_diameter, Point3};

use super::IgnoreFlags;

/// Maximum number of spheres in a sphinx record.
pub const MAX_SPHINX_SPHERES: usize = 8;

/// Native parameters of a sphinx: a union of spheres where spheres with
/// negative diameter are subtracted.
#[derive(Debug, Clone, PartialEq)]
pub struct SphinxParams {
    diameters: Vec<f64>,
    centers: Vec<Point3>,
    diameter: f64,
    ignore: IgnoreFlags,
}

impl SphinxParams {
    /// Returns the signed sphere diameters.
    #[must_use]
    pub fn diameters(&self) -> &[f64] {
        &self.diameters
    }

    #[must_use]
    pub fn centers(&self) -> &[Point3] {
        &self.centers
    }

    /// Returns the circumsphere diameter.
    #[must_use]
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    #[must_use]
    pub fn ignore(&self) -> IgnoreFlags {
        self.ignore
    }
}

/// Builds sphinx parameters.
///
/// When `diameter` is `None`, the circumsphere diameter is computed from the
/// positive spheres.
///
/// # Errors
///
/// Returns [`FieldError::LengthMismatch`] if `centers` and `diameters` differ
/// in length and [`CapacityError::CapacityExceeded`] if more than
/// [`MAX_SPHINX_SPHERES`] spheres are given.
pub fn make_sphinx3d_params(
    diameters: Vec<f64>,
    centers: Vec<Point3>,
    diameter: Option<f64>,
    ignore: IgnoreFlags,
) -> Result<SphinxParams> {
    if centers.len() != diameters.len() {
        return Err(FieldError::LengthMismatch {
            field: "centers",
            found: centers.len(),
            other: "diameters",
            expected: diameters.len(),
        }
        .into());
    }
    if diameters.len() > MAX_SPHINX_SPHERES {
        return Err(CapacityError::CapacityExceeded {
            field: "diameters",
            max: MAX_SPHINX_SPHERES,
            found: diameters.len(),
        }
        .into());
    }
    let diameter = diameter.unwrap_or_else(|| enclosing_diameter(&centers, &diameters));
    Ok(SphinxParams {
        diameters,
        centers,
        diameter,
        ignore,
    })
}
