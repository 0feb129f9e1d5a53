//! Native shape parameter records.
//!
//! A record is the immutable, engine-facing description of one particle
//! type's geometry. Records are only built through the `make_*` functions,
//! which enforce the limits of each native layout; a proxy never edits a
//! record, it builds a new one on every `set`.

mod ellipsoid;
mod faceted_sphere;
mod polygon;
mod polyhedron;
mod sphere;
mod sphere_union;
mod sphinx;

pub use ellipsoid::{make_ell_params, EllipsoidParams};
pub use faceted_sphere::{make_faceted_sphere, FacetedSphereParams};
pub use polygon::{make_poly2d_verts, PolygonVertices, MAX_POLY2D_VERTS};
pub use polyhedron::{make_poly3d_data, make_poly3d_verts, PolyhedronData, PolyhedronVertices};
pub use sphere::{make_sph_params, SphereParams};
pub use sphere_union::{make_sphere_union_params, SphereUnionParams};
pub use sphinx::{make_sphinx3d_params, SphinxParams, MAX_SPHINX_SPHERES};

use crate::error::FieldError;
use crate::field::FieldValue;
use crate::shape::ShapeKind;

fn index_lists<'a>(
    field: &'static str,
    lists: impl Iterator<Item = &'a [usize]>,
) -> Result<FieldValue, FieldError> {
    lists
        .map(|list| {
            list.iter()
                .map(|&i| {
                    FieldValue::try_from(i).map_err(|_| FieldError::TypeCoercion {
                        field: field.into(),
                        expected: "a vertex index",
                        found: i.to_string(),
                    })
                })
                .collect::<Result<Vec<_>, _>>()
                .map(FieldValue::List)
        })
        .collect::<Result<Vec<_>, _>>()
        .map(FieldValue::List)
}

/// Flags excluding a particle type from overlap checks or move statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IgnoreFlags {
    pub overlaps: bool,
    pub statistics: bool,
}

impl IgnoreFlags {
    #[must_use]
    pub fn new(overlaps: bool, statistics: bool) -> Self {
        Self {
            overlaps,
            statistics,
        }
    }
}

/// A packed shape parameter record, tagged with the shape kind it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeRecord {
    Sphere(SphereParams),
    ConvexPolygon(PolygonVertices),
    ConvexSpheropolygon(PolygonVertices),
    SimplePolygon(PolygonVertices),
    ConvexPolyhedron(PolyhedronVertices),
    ConvexSpheropolyhedron(PolyhedronVertices),
    Polyhedron(PolyhedronData),
    FacetedSphere(FacetedSphereParams),
    Sphinx(SphinxParams),
    Ellipsoid(EllipsoidParams),
    SphereUnion(SphereUnionParams),
}

impl ShapeRecord {
    /// Returns the shape kind this record describes.
    #[must_use]
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Sphere(_) => ShapeKind::Sphere,
            Self::ConvexPolygon(_) => ShapeKind::ConvexPolygon,
            Self::ConvexSpheropolygon(_) => ShapeKind::ConvexSpheropolygon,
            Self::SimplePolygon(_) => ShapeKind::SimplePolygon,
            Self::ConvexPolyhedron(_) => ShapeKind::ConvexPolyhedron,
            Self::ConvexSpheropolyhedron(_) => ShapeKind::ConvexSpheropolyhedron,
            Self::Polyhedron(_) => ShapeKind::Polyhedron,
            Self::FacetedSphere(_) => ShapeKind::FacetedSphere,
            Self::Sphinx(_) => ShapeKind::Sphinx,
            Self::Ellipsoid(_) => ShapeKind::Ellipsoid,
            Self::SphereUnion(_) => ShapeKind::SphereUnion,
        }
    }

    /// Returns the ignore flags stored in the record.
    #[must_use]
    pub fn ignore(&self) -> IgnoreFlags {
        match self {
            Self::Sphere(p) => p.ignore(),
            Self::ConvexPolygon(p) | Self::ConvexSpheropolygon(p) | Self::SimplePolygon(p) => {
                p.ignore()
            }
            Self::ConvexPolyhedron(p) | Self::ConvexSpheropolyhedron(p) => p.ignore(),
            Self::Polyhedron(p) => p.ignore(),
            Self::FacetedSphere(p) => p.ignore(),
            Self::Sphinx(p) => p.ignore(),
            Self::Ellipsoid(p) => p.ignore(),
            Self::SphereUnion(p) => p.ignore(),
        }
    }

    /// Reads the record back as named field values, one per declared
    /// attribute of the shape kind that the record carries.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::TypeCoercion`] if a polyhedron index cannot be
    /// represented as a field integer.
    pub fn attributes(&self) -> Result<Vec<(&'static str, FieldValue)>, FieldError> {
        let ignore = self.ignore();
        let mut attrs = vec![
            ("ignore_statistics", FieldValue::Bool(ignore.statistics)),
            ("ignore_overlaps", FieldValue::Bool(ignore.overlaps)),
        ];
        match self {
            Self::Sphere(p) => attrs.push(("diameter", p.diameter().into())),
            Self::ConvexPolygon(p) | Self::SimplePolygon(p) => {
                attrs.push(("vertices", p.vertices().to_vec().into()));
            }
            Self::ConvexSpheropolygon(p) => {
                attrs.push(("vertices", p.vertices().to_vec().into()));
                attrs.push(("sweep_radius", p.sweep_radius().into()));
            }
            Self::ConvexPolyhedron(p) => {
                attrs.push(("vertices", p.vertices().to_vec().into()));
            }
            Self::ConvexSpheropolyhedron(p) => {
                attrs.push(("vertices", p.vertices().to_vec().into()));
                attrs.push(("sweep_radius", p.sweep_radius().into()));
            }
            Self::Polyhedron(p) => {
                attrs.push(("vertices", p.vertices().to_vec().into()));
                let faces = index_lists("faces", p.faces().iter().map(Vec::as_slice))?;
                let edges = index_lists("edges", p.edges().iter().map(<[usize; 2]>::as_slice))?;
                attrs.push(("faces", faces));
                attrs.push(("edges", edges));
            }
            Self::FacetedSphere(p) => {
                let normals: Vec<FieldValue> = p
                    .normals()
                    .iter()
                    .map(|n| FieldValue::from([n.x, n.y, n.z]))
                    .collect();
                attrs.push(("vertices", p.vertices().to_vec().into()));
                attrs.push(("normals", normals.into()));
                attrs.push(("offsets", p.offsets().to_vec().into()));
                attrs.push(("diameter", p.diameter().into()));
                attrs.push(("origin", (*p.origin()).into()));
            }
            Self::Sphinx(p) => {
                attrs.push(("diameters", p.diameters().to_vec().into()));
                attrs.push(("centers", p.centers().to_vec().into()));
                attrs.push(("diameter", p.diameter().into()));
            }
            Self::Ellipsoid(p) => {
                let (a, b, c) = p.semi_axes();
                attrs.push(("a", a.into()));
                attrs.push(("b", b.into()));
                attrs.push(("c", c.into()));
            }
            Self::SphereUnion(p) => {
                let diameters: Vec<f64> = p.members().iter().map(SphereParams::diameter).collect();
                attrs.push(("diameters", diameters.into()));
                attrs.push(("centers", p.centers().to_vec().into()));
                attrs.push(("orientations", p.orientations().to_vec().into()));
                attrs.push(("diameter", p.diameter().into()));
            }
        }
        Ok(attrs)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::Point3;

    #[test]
    fn sphere_attributes_report_diameter() {
        let record = ShapeRecord::Sphere(make_sph_params(0.5, IgnoreFlags::new(true, false)));
        let attrs = record.attributes().unwrap();
        assert_eq!(attrs[0], ("ignore_statistics", FieldValue::Bool(false)));
        assert_eq!(attrs[1], ("ignore_overlaps", FieldValue::Bool(true)));
        assert_eq!(attrs[2], ("diameter", FieldValue::Float(1.0)));
        assert_eq!(record.kind(), ShapeKind::Sphere);
    }

    #[test]
    fn ellipsoid_attributes() {
        let record = ShapeRecord::Ellipsoid(make_ell_params(1.0, 2.0, 3.0, IgnoreFlags::default()));
        let names: Vec<&str> = record.attributes().unwrap().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, ["ignore_statistics", "ignore_overlaps", "a", "b", "c"]);
    }

    #[test]
    fn polyhedron_indices_are_integers() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
        ];
        let data = make_poly3d_data(vertices, vec![vec![0, 1, 2]], IgnoreFlags::default()).unwrap();
        let attrs = ShapeRecord::Polyhedron(data).attributes().unwrap();
        let faces = &attrs.iter().find(|(n, _)| *n == "faces").unwrap().1;
        assert_eq!(faces, &FieldValue::from(vec![vec![0, 1, 2]]));
        let edges = &attrs.iter().find(|(n, _)| *n == "edges").unwrap().1;
        assert_eq!(edges, &FieldValue::from(vec![[0, 1], [1, 2], [0, 2]]));
    }
}
