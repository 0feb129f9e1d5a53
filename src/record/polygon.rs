use crate::error::CapacityError;
use crate::math::Point2;

use super::IgnoreFlags;

/// Maximum number of vertices in a polygon record.
pub const MAX_POLY2D_VERTS: usize = 64;

/// Native vertex list of a 2D polygon or spheropolygon.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonVertices {
    vertices: Vec<Point2>,
    sweep_radius: f64,
    diameter: f64,
    ignore: IgnoreFlags,
}

impl PolygonVertices {
    /// Returns the polygon vertices in the order they were given.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    #[must_use]
    pub fn sweep_radius(&self) -> f64 {
        self.sweep_radius
    }

    /// Returns the diameter of the origin-centered circle enclosing the
    /// swept polygon.
    #[must_use]
    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    #[must_use]
    pub fn ignore(&self) -> IgnoreFlags {
        self.ignore
    }
}

/// Builds a polygon vertex record.
///
/// # Errors
///
/// Returns [`CapacityError::CapacityExceeded`] if more than
/// [`MAX_POLY2D_VERTS`] vertices are given.
pub fn make_poly2d_verts(
    vertices: Vec<Point2>,
    sweep_radius: f64,
    ignore: IgnoreFlags,
) -> Result<PolygonVertices, CapacityError> {
    if vertices.len() > MAX_POLY2D_VERTS {
        return Err(CapacityError::CapacityExceeded {
            field: "vertices",
            max: MAX_POLY2D_VERTS,
            found: vertices.len(),
        });
    }
    let radius = vertices
        .iter()
        .map(|v| v.coords.norm())
        .fold(0.0, f64::max);
    Ok(PolygonVertices {
        diameter: 2.0 * (radius + sweep_radius),
        vertices,
        sweep_radius,
        ignore,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(-0.5, -0.5),
            Point2::new(0.5, -0.5),
            Point2::new(0.5, 0.5),
            Point2::new(-0.5, 0.5),
        ]
    }

    #[test]
    fn diameter_includes_sweep_radius() {
        let p = make_poly2d_verts(square(), 0.25, IgnoreFlags::default()).unwrap();
        assert_relative_eq!(p.diameter(), 2.0 * (0.5_f64.sqrt() + 0.25));
        assert_eq!(p.vertices().len(), 4);
    }

    #[test]
    fn too_many_vertices() {
        let verts = vec![Point2::origin(); MAX_POLY2D_VERTS + 1];
        assert!(matches!(
            make_poly2d_verts(verts, 0.0, IgnoreFlags::default()),
            Err(CapacityError::CapacityExceeded { max: MAX_POLY2D_VERTS, .. })
        ));
    }
}
