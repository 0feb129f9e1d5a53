use std::fmt;

use serde::{Deserialize, Serialize};

use crate::capacity::VertexCapacity;
use crate::error::{CapacityError, Result};
use crate::field::{FieldReader, ShapeFields};

use super::attributes::Attributes;
use super::{
    ellipsoid, faceted_sphere, polygon, polyhedron, sphere, sphere_union, sphinx, PackContext,
    Packed,
};

const BASE_KEYS: [&str; 2] = ["ignore_statistics", "ignore_overlaps"];

/// Geometric shape family handled by an integrator.
///
/// All particle types of one integrator share the same kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Sphere,
    ConvexPolygon,
    ConvexSpheropolygon,
    SimplePolygon,
    ConvexPolyhedron,
    ConvexSpheropolyhedron,
    Polyhedron,
    FacetedSphere,
    Sphinx,
    Ellipsoid,
    SphereUnion,
}

impl ShapeKind {
    /// Every shape kind.
    pub const ALL: [Self; 11] = [
        Self::Sphere,
        Self::ConvexPolygon,
        Self::ConvexSpheropolygon,
        Self::SimplePolygon,
        Self::ConvexPolyhedron,
        Self::ConvexSpheropolyhedron,
        Self::Polyhedron,
        Self::FacetedSphere,
        Self::Sphinx,
        Self::Ellipsoid,
        Self::SphereUnion,
    ];

    /// Returns the human-readable name of the shape.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Sphere => "sphere",
            Self::ConvexPolygon => "convex polygon",
            Self::ConvexSpheropolygon => "convex spheropolygon",
            Self::SimplePolygon => "simple polygon",
            Self::ConvexPolyhedron => "convex polyhedron",
            Self::ConvexSpheropolyhedron => "convex spheropolyhedron",
            Self::Polyhedron => "polyhedron",
            Self::FacetedSphere => "faceted sphere",
            Self::Sphinx => "sphinx",
            Self::Ellipsoid => "ellipsoid",
            Self::SphereUnion => "sphere union",
        }
    }

    fn own_keys(self) -> &'static [&'static str] {
        match self {
            Self::Sphere => &["diameter"],
            Self::ConvexPolygon | Self::SimplePolygon | Self::ConvexPolyhedron => &["vertices"],
            Self::ConvexSpheropolygon | Self::ConvexSpheropolyhedron => &["vertices", "sweep_radius"],
            Self::Polyhedron => &["vertices", "faces", "edges"],
            Self::FacetedSphere => &["vertices", "normals", "offsets", "diameter", "origin"],
            Self::Sphinx => &["diameters", "centers", "diameter", "colors"],
            Self::Ellipsoid => &["a", "b", "c"],
            Self::SphereUnion => &["diameters", "centers", "orientations", "diameter", "colors"],
        }
    }

    /// Returns every attribute name a proxy of this kind declares, in order.
    #[must_use]
    pub fn keys(self) -> Vec<&'static str> {
        BASE_KEYS.iter().chain(self.own_keys()).copied().collect()
    }

    /// Returns `true` if records of this kind use a fixed vertex capacity.
    #[must_use]
    pub fn is_sized(self) -> bool {
        matches!(self, Self::ConvexPolyhedron | Self::ConvexSpheropolyhedron)
    }

    /// Returns `true` if proxies of this kind keep a `colors` attribute.
    #[must_use]
    pub fn has_colors(self) -> bool {
        matches!(self, Self::Sphinx | Self::SphereUnion)
    }

    /// Picks the record layout capacity for `max_verts`, or `None` for kinds
    /// without a fixed capacity.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError::NoSuitableCapacity`] if a sized kind cannot
    /// hold `max_verts` vertices.
    pub fn resolve_capacity(
        self,
        max_verts: usize,
    ) -> std::result::Result<Option<VertexCapacity>, CapacityError> {
        if self.is_sized() {
            VertexCapacity::resolve(max_verts).map(Some)
        } else {
            Ok(None)
        }
    }

    /// Validates `fields` and packs them into a record of this kind.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is missing, unknown, cannot be coerced, or
    /// violates a constraint of the record layout.
    pub(crate) fn pack(self, fields: &ShapeFields, ctx: &PackContext) -> Result<Packed> {
        let mut reader = FieldReader::new(self.name(), fields);
        match self {
            Self::Sphere => sphere::pack(&mut reader),
            Self::ConvexPolygon | Self::ConvexSpheropolygon | Self::SimplePolygon => {
                polygon::pack(self, &mut reader)
            }
            Self::ConvexPolyhedron | Self::ConvexSpheropolyhedron => {
                polyhedron::pack_convex(self, &mut reader, ctx)
            }
            Self::Polyhedron => polyhedron::pack_mesh(&mut reader),
            Self::FacetedSphere => faceted_sphere::pack(&mut reader),
            Self::Sphinx => sphinx::pack(&mut reader),
            Self::Ellipsoid => ellipsoid::pack(&mut reader),
            Self::SphereUnion => sphere_union::pack(&mut reader),
        }
    }

    /// Renders proxy attributes for diagnostics.
    pub(crate) fn describe(self, attrs: &Attributes) -> String {
        match self {
            Self::Sphere => sphere::describe(attrs),
            Self::ConvexPolygon | Self::ConvexSpheropolygon | Self::SimplePolygon => {
                polygon::describe(self, attrs)
            }
            Self::ConvexPolyhedron | Self::ConvexSpheropolyhedron => {
                polyhedron::describe_convex(self, attrs)
            }
            Self::Polyhedron => polyhedron::describe_mesh(attrs),
            Self::FacetedSphere => faceted_sphere::describe(attrs),
            Self::Sphinx => sphinx::describe(attrs),
            Self::Ellipsoid => ellipsoid::describe(attrs),
            Self::SphereUnion => sphere_union::describe(attrs),
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
