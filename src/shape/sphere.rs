use crate::error::Result;
use crate::field::coerce::to_scalar;
use crate::field::FieldReader;
use crate::record::{make_sph_params, ShapeRecord};

use super::attributes::Attributes;
use super::{read_flags, Packed};

pub(super) fn pack(reader: &mut FieldReader<'_>) -> Result<Packed> {
    let diameter = to_scalar("diameter", reader.required("diameter")?)?;
    let ignore = read_flags(reader);
    reader.finish()?;
    Ok(ShapeRecord::Sphere(make_sph_params(diameter / 2.0, ignore)).into())
}

pub(super) fn describe(attrs: &Attributes) -> String {
    format!("sphere(diameter = {})", attrs.get("diameter"))
}
