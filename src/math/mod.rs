/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Orientation quaternion, stored as `(w, x, y, z)` on the wire.
pub type Quaternion = nalgebra::UnitQuaternion<f64>;

/// Returns the diameter of the smallest origin-centered sphere containing
/// spheres of the given diameters placed at the given centers.
///
/// Spheres with non-positive diameter do not contribute.
#[must_use]
pub fn enclosing_diameter(centers: &[Point3], diameters: &[f64]) -> f64 {
    centers
        .iter()
        .zip(diameters)
        .filter(|(_, d)| **d > 0.0)
        .map(|(c, &d)| 2.0 * c.coords.norm() + d)
        .fold(0.0, f64::max)
}
