use super::IgnoreFlags;

/// Native parameters of an ellipsoid, given by its semi-axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipsoidParams {
    x: f64,
    y: f64,
    z: f64,
    ignore: IgnoreFlags,
}

impl EllipsoidParams {
    /// Returns the semi-axes `(a, b, c)` along x, y and z.
    #[must_use]
    pub fn semi_axes(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    #[must_use]
    pub fn ignore(&self) -> IgnoreFlags {
        self.ignore
    }
}

#[must_use]
pub fn make_ell_params(a: f64, b: f64, c: f64, ignore: IgnoreFlags) -> EllipsoidParams {
    EllipsoidParams {
        x: a,
        y: b,
        z: c,
        ignore,
    }
}
