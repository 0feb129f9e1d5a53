use crate::error::Result;
use crate::field::coerce::{to_point3, to_points3, to_scalar, to_scalars, to_vectors3};
use crate::field::FieldReader;
use crate::math::Point3;
use crate::record::{make_faceted_sphere, ShapeRecord};

use super::attributes::Attributes;
use super::{read_flags, Packed};

pub(super) fn pack(reader: &mut FieldReader<'_>) -> Result<Packed> {
    let normals = to_vectors3("normals", reader.required("normals")?)?;
    let offsets = to_scalars("offsets", reader.required("offsets")?)?;
    let vertices = to_points3("vertices", reader.required("vertices")?)?;
    let diameter = to_scalar("diameter", reader.required("diameter")?)?;
    let origin = reader
        .optional("origin")
        .map(|v| to_point3("origin", v))
        .transpose()?
        .unwrap_or_else(Point3::origin);
    let ignore = read_flags(reader);
    reader.finish()?;

    let params = make_faceted_sphere(normals, offsets, vertices, diameter, origin, ignore)?;
    Ok(ShapeRecord::FacetedSphere(params).into())
}

pub(super) fn describe(attrs: &Attributes) -> String {
    format!(
        "faceted sphere(vertices = {}, normals = {}, offsets = {})",
        attrs.get("vertices"),
        attrs.get("normals"),
        attrs.get("offsets")
    )
}
