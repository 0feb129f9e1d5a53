use crate::error::Result;
use crate::field::coerce::to_scalar;
use crate::field::FieldReader;
use crate::record::{make_ell_params, ShapeRecord};

use super::attributes::Attributes;
use super::{read_flags, Packed};

pub(super) fn pack(reader: &mut FieldReader<'_>) -> Result<Packed> {
    let a = to_scalar("a", reader.required("a")?)?;
    let b = to_scalar("b", reader.required("b")?)?;
    let c = to_scalar("c", reader.required("c")?)?;
    let ignore = read_flags(reader);
    reader.finish()?;
    Ok(ShapeRecord::Ellipsoid(make_ell_params(a, b, c, ignore)).into())
}

pub(super) fn describe(attrs: &Attributes) -> String {
    format!(
        "ellipsoid(a = {}, b = {}, c = {})",
        attrs.get("a"),
        attrs.get("b"),
        attrs.get("c")
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{FieldError, HpmcError};
    use crate::field::ShapeFields;

    #[test]
    fn all_axes_required() {
        let fields = ShapeFields::new().with("a", 1.0).with("b", 2.0);
        let mut reader = FieldReader::new("ellipsoid", &fields);
        assert!(matches!(
            pack(&mut reader),
            Err(HpmcError::Field(FieldError::MissingField { field: "c", .. }))
        ));
    }

    #[test]
    fn string_axes_are_coerced() {
        let fields = ShapeFields::new().with("a", "0.5").with("b", 1).with("c", 2.0);
        let mut reader = FieldReader::new("ellipsoid", &fields);
        match pack(&mut reader).unwrap().record {
            ShapeRecord::Ellipsoid(e) => assert_eq!(e.semi_axes(), (0.5, 1.0, 2.0)),
            other => panic!("unexpected {other:?}"),
        }
    }
}
