use super::IgnoreFlags;

/// Native parameters of a sphere.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphereParams {
    radius: f64,
    ignore: IgnoreFlags,
}

impl SphereParams {
    /// Returns the sphere radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the sphere diameter.
    #[must_use]
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }

    #[must_use]
    pub fn ignore(&self) -> IgnoreFlags {
        self.ignore
    }
}

/// Builds sphere parameters from a radius.
#[must_use]
pub fn make_sph_params(radius: f64, ignore: IgnoreFlags) -> SphereParams {
    SphereParams { radius, ignore }
}
